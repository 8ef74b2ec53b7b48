//! Falling-block puzzle simulation
//!
//! A piece falls through a fixed well. Landed pieces merge into the board,
//! full rows are swept, and a spawn that collides wipes the board.

pub mod board;
pub mod piece;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::action::BlockAction;
use super::clock::DropTimer;
use super::score::{GameEvent, ResetCause, Scoreboard};
use crate::settings::BlocksSettings;

pub use board::{Board, collide, line_clear_points, merge, sweep};
pub use piece::{Matrix, Piece, Tetromino, create_piece, rotate};

/// Everything that makes up a running block game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlocksState {
    pub board: Board,
    /// Active piece; never overlaps the board or leaves it
    pub piece: Piece,
    pub scoreboard: Scoreboard,
    pub drop_timer: DropTimer,
}

/// A block-game session
pub struct BlocksGame<R = Pcg32> {
    pub state: BlocksState,
    settings: BlocksSettings,
    rng: R,
    events: Vec<GameEvent>,
}

impl BlocksGame<Pcg32> {
    /// Session with a seeded PCG stream
    pub fn from_seed(settings: BlocksSettings, seed: u64) -> Self {
        Self::new(settings, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> BlocksGame<R> {
    pub fn new(settings: BlocksSettings, mut rng: R) -> Self {
        let state = BlocksState {
            board: Board::new(settings.cols, settings.rows),
            piece: create_piece(&mut rng),
            scoreboard: Scoreboard::new(),
            drop_timer: DropTimer::new(settings.drop_interval),
        };
        let mut game = Self {
            state,
            settings,
            rng,
            events: Vec::new(),
        };
        game.reset_piece();
        // Let the score display start from "0" / "0"
        game.events.push(game.state.scoreboard.changed());
        game
    }

    pub fn settings(&self) -> &BlocksSettings {
        &self.settings
    }

    /// Feed the host timestamp; forces a drop once the interval has passed.
    /// Returns true if a drop happened.
    pub fn update(&mut self, time: f64) -> bool {
        if self.state.drop_timer.update(time) {
            self.player_drop();
            return true;
        }
        false
    }

    pub fn apply(&mut self, action: BlockAction) {
        match action {
            BlockAction::Move(dir) => {
                self.player_move(dir);
            }
            BlockAction::Drop => {
                self.player_drop();
            }
            BlockAction::Rotate => {
                self.player_rotate();
            }
        }
    }

    /// Shift one column. Returns false if the move was blocked.
    pub fn player_move(&mut self, dir: i32) -> bool {
        let state = &mut self.state;
        state.piece.pos.x += dir;
        if collide(&state.board, &state.piece) {
            state.piece.pos.x -= dir;
            return false;
        }
        true
    }

    /// Move down one row, landing the piece if it cannot go further.
    /// Returns true if the piece landed. Always restarts the drop timer.
    pub fn player_drop(&mut self) -> bool {
        let state = &mut self.state;
        state.piece.pos.y += 1;
        let landed = collide(&state.board, &state.piece);
        if landed {
            state.piece.pos.y -= 1;
            merge(&mut state.board, &state.piece);
            self.sweep_rows();
            self.reset_piece();
        }
        self.state.drop_timer.reset();
        landed
    }

    /// Rotate clockwise, kicking sideways (+1, -2, +3, ...) out of walls.
    ///
    /// Once the kick distance exceeds the rotated width the rotation is
    /// abandoned and the piece is put back exactly as it was. Returns
    /// whether the rotation stuck.
    pub fn player_rotate(&mut self) -> bool {
        let state = &mut self.state;
        let original_x = state.piece.pos.x;
        let rotated = rotate(&state.piece.matrix);
        let original = std::mem::replace(&mut state.piece.matrix, rotated);

        let mut offset: i32 = 1;
        while collide(&state.board, &state.piece) {
            state.piece.pos.x += offset;
            offset = -(offset + offset.signum());
            if offset.unsigned_abs() as usize > state.piece.width() {
                state.piece.matrix = original;
                state.piece.pos.x = original_x;
                return false;
            }
        }
        true
    }

    /// Spawn a fresh piece centered on the top row. If it collides straight
    /// away the board is full: wipe it and zero the score.
    pub fn reset_piece(&mut self) {
        let state = &mut self.state;
        state.piece = create_piece(&mut self.rng);
        state.piece.pos.y = 0;
        state.piece.pos.x = (state.board.cols() as i32 - state.piece.width() as i32).div_euclid(2);

        if collide(&state.board, &state.piece) {
            log::info!(
                "Spawn blocked, clearing board (score {}, best {})",
                state.scoreboard.score,
                state.scoreboard.best
            );
            state.board.clear();
            self.events.extend(state.scoreboard.reset());
            self.events.push(GameEvent::Reset {
                cause: ResetCause::SpawnBlocked,
            });
        }
    }

    fn sweep_rows(&mut self) {
        let state = &mut self.state;
        let rows = sweep(&mut state.board);
        if rows == 0 {
            return;
        }
        match line_clear_points(rows) {
            Some(points) => {
                log::debug!("Cleared {} rows for {} points", rows, points);
                self.events.extend(state.scoreboard.add(points));
            }
            None => log::warn!("Cleared {} rows at once; no score defined", rows),
        }
    }

    /// Take every event raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    fn game() -> BlocksGame {
        BlocksGame::from_seed(BlocksSettings::default(), 4242)
    }

    fn vertical_i() -> Matrix {
        rotate(&Tetromino::I.matrix())
    }

    #[test]
    fn test_spawns_centered_on_top_row() {
        let mut game = game();
        let piece = &game.state.piece;
        assert_eq!(piece.pos.y, 0);
        assert_eq!(piece.pos.x, (20 - piece.width() as i32) / 2);
        assert!(!collide(&game.state.board, piece));
        assert_eq!(
            game.drain_events(),
            vec![GameEvent::ScoreChanged { score: 0, best: 0 }]
        );
    }

    #[test]
    fn test_move_blocked_at_right_wall() {
        let mut game = game();
        game.state.piece = Piece::new(Tetromino::I.matrix());
        game.state.piece.pos = IVec2::new(16, 5);

        assert!(!game.player_move(1));
        assert_eq!(game.state.piece.pos, IVec2::new(16, 5));

        assert!(game.player_move(-1));
        assert_eq!(game.state.piece.pos, IVec2::new(15, 5));
    }

    #[test]
    fn test_move_blocked_by_stack() {
        let mut game = game();
        game.state.piece = Piece::new(Tetromino::O.matrix());
        game.state.piece.pos = IVec2::new(5, 10);
        game.state.board.set(IVec2::new(7, 11), 3);

        assert!(!game.player_move(1));
        assert_eq!(game.state.piece.pos.x, 5);
    }

    #[test]
    fn test_drop_lands_and_respawns() {
        let mut game = game();
        game.state.piece = Piece::new(Tetromino::O.matrix());
        game.state.piece.pos = IVec2::new(0, 17);

        assert!(!game.player_drop());
        assert_eq!(game.state.piece.pos, IVec2::new(0, 18));

        assert!(game.player_drop());
        let board = &game.state.board;
        assert_eq!(board.get(IVec2::new(0, 18)), Some(2));
        assert_eq!(board.get(IVec2::new(1, 19)), Some(2));
        assert_eq!(game.state.piece.pos.y, 0);
    }

    #[test]
    fn test_landing_clears_line_and_scores() {
        let mut game = game();
        game.drain_events();
        for x in 0..20 {
            if !(8..12).contains(&x) {
                game.state.board.set(IVec2::new(x, 19), 1);
            }
        }
        game.state.board.set(IVec2::new(0, 18), 6);
        game.state.piece = Piece::new(Tetromino::I.matrix());
        game.state.piece.pos = IVec2::new(8, 19);

        assert!(game.player_drop());

        assert_eq!(game.state.scoreboard, Scoreboard { score: 40, best: 40 });
        assert_eq!(
            game.drain_events(),
            vec![GameEvent::ScoreChanged { score: 40, best: 40 }]
        );
        let board = &game.state.board;
        assert_eq!(board.cells()[19].iter().filter(|v| **v != 0).count(), 1);
        assert_eq!(board.get(IVec2::new(0, 19)), Some(6));
    }

    #[test]
    fn test_rotate_kicks_off_wall() {
        let mut game = game();
        // T pointing right, hugging the right wall
        game.state.piece = Piece::new(rotate(&Tetromino::T.matrix()));
        game.state.piece.pos = IVec2::new(18, 5);

        assert!(game.player_rotate());

        assert_eq!(game.state.piece.matrix, vec![vec![3, 3, 3], vec![0, 3, 0]]);
        assert_eq!(game.state.piece.pos, IVec2::new(17, 5));
        assert!(!collide(&game.state.board, &game.state.piece));
    }

    #[test]
    fn test_rotate_abandoned_restores_piece() {
        let mut game = game();
        game.state.piece = Piece::new(vertical_i());
        game.state.piece.pos = IVec2::new(19, 0);

        assert!(!game.player_rotate());

        assert_eq!(game.state.piece.matrix, vertical_i());
        assert_eq!(game.state.piece.pos, IVec2::new(19, 0));
    }

    #[test]
    fn test_rotate_in_open_space() {
        let mut game = game();
        game.state.piece = Piece::new(Tetromino::L.matrix());
        game.state.piece.pos = IVec2::new(8, 8);

        assert!(game.player_rotate());
        assert_eq!(game.state.piece.matrix, rotate(&Tetromino::L.matrix()));
        assert_eq!(game.state.piece.pos, IVec2::new(8, 8));
    }

    #[test]
    fn test_blocked_spawn_wipes_board() {
        let mut game = game();
        game.drain_events();
        game.state.board = Board::from_rows(vec![vec![1; 20]; 20]);
        game.state.scoreboard = Scoreboard { score: 100, best: 300 };

        game.reset_piece();

        assert!(game.state.board.cells().iter().flatten().all(|v| *v == 0));
        assert_eq!(game.state.scoreboard, Scoreboard { score: 0, best: 300 });
        assert_eq!(
            game.drain_events(),
            vec![
                GameEvent::ScoreChanged { score: 0, best: 300 },
                GameEvent::Reset {
                    cause: ResetCause::SpawnBlocked
                },
            ]
        );
    }

    #[test]
    fn test_update_forces_drop_after_interval() {
        let mut game = game();
        let start_y = game.state.piece.pos.y;

        assert!(!game.update(16.0));
        assert!(!game.update(600.0));
        assert_eq!(game.state.piece.pos.y, start_y);

        assert!(game.update(616.5));
        assert_eq!(game.state.piece.pos.y, start_y + 1);
        assert_eq!(game.state.drop_timer.elapsed(), 0.0);
    }

    #[test]
    fn test_manual_drop_restarts_timer() {
        let mut game = game();
        game.update(500.0);
        game.apply(BlockAction::Drop);
        assert_eq!(game.state.drop_timer.elapsed(), 0.0);
        assert!(!game.update(1000.0));
    }

    #[test]
    fn test_stacking_to_the_top_resets() {
        let mut game = game();
        game.drain_events();
        let mut resets = 0;
        for _ in 0..2000 {
            game.player_drop();
            resets += game
                .drain_events()
                .iter()
                .filter(|e| matches!(e, GameEvent::Reset { .. }))
                .count();
            assert!(!collide(&game.state.board, &game.state.piece));
        }
        assert!(resets > 0);
    }

    #[test]
    fn test_same_seed_same_pieces() {
        let mut a = game();
        let mut b = game();
        for _ in 0..50 {
            a.player_drop();
            b.player_drop();
            assert_eq!(a.state.piece, b.state.piece);
            assert_eq!(a.state.board, b.state.board);
        }
    }
}
