//! Scene building: simulation state to a flat list of filled rectangles

use glam::IVec2;

use crate::sim::{BlocksState, SnakeState};
use crate::settings::{BlocksSettings, SnakeSettings};

/// CSS color string
pub type Color = &'static str;

pub const SNAKE_COLOR: Color = "#2aa198";
pub const APPLE_COLOR: Color = "#e64b4b";

/// Block colors by cell value; index 0 is background and never drawn
pub const BLOCK_PALETTE: [Option<Color>; 8] = [
    None,
    Some("#2aa198"),
    Some("#5ec4bd"),
    Some("#8ad8d1"),
    Some("#b5ece7"),
    Some("#1f7f79"),
    Some("#49b1ab"),
    Some("#7fd0c9"),
];

/// Palette lookup; unknown filled values fall back to the first color
pub fn block_color(value: u8) -> Option<Color> {
    if value == 0 {
        return None;
    }
    BLOCK_PALETTE
        .get(value as usize)
        .copied()
        .flatten()
        .or(BLOCK_PALETTE[1])
}

/// Axis-aligned filled rectangle in surface pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub color: Color,
}

impl Rect {
    /// One grid cell at pixel origin `origin`, shrunk by 1px to leave a seam
    fn cell(origin: IVec2, size: i32, color: Color) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            w: size - 1,
            h: size - 1,
            color,
        }
    }
}

/// A full frame: clear the surface, then fill rects in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    pub width: i32,
    pub height: i32,
    pub rects: Vec<Rect>,
}

/// Something a [`Scene`] can be drawn onto
pub trait Surface {
    fn clear(&mut self, width: i32, height: i32);
    fn fill_rect(&mut self, rect: &Rect);
}

impl Scene {
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear(self.width, self.height);
        for rect in &self.rects {
            surface.fill_rect(rect);
        }
    }
}

/// Apple first, then the body head to tail
pub fn snake_scene(state: &SnakeState, settings: &SnakeSettings) -> Scene {
    let grid = settings.grid;
    let mut rects = Vec::with_capacity(state.body.len() + 1);
    rects.push(Rect::cell(state.apple, grid, APPLE_COLOR));
    rects.extend(
        state
            .body
            .iter()
            .map(|segment| Rect::cell(*segment, grid, SNAKE_COLOR)),
    );
    Scene {
        width: settings.width(),
        height: settings.height(),
        rects,
    }
}

/// Board cells, then the active piece on top
pub fn blocks_scene(state: &BlocksState, settings: &BlocksSettings) -> Scene {
    let size = settings.cell;
    let mut rects = Vec::new();

    for (y, row) in state.board.cells().iter().enumerate() {
        for (x, value) in row.iter().enumerate() {
            if let Some(color) = block_color(*value) {
                let origin = IVec2::new(x as i32, y as i32) * size;
                rects.push(Rect::cell(origin, size, color));
            }
        }
    }
    for (pos, value) in state.piece.cells() {
        if let Some(color) = block_color(value) {
            rects.push(Rect::cell(pos * size, size, color));
        }
    }

    Scene {
        width: state.board.cols() as i32 * size,
        height: state.board.rows() as i32 * size,
        rects,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{BlocksGame, Piece, SnakeGame, Tetromino};

    #[derive(Default)]
    struct Recorder {
        cleared: Option<(i32, i32)>,
        rects: Vec<Rect>,
    }

    impl Surface for Recorder {
        fn clear(&mut self, width: i32, height: i32) {
            self.cleared = Some((width, height));
            self.rects.clear();
        }

        fn fill_rect(&mut self, rect: &Rect) {
            self.rects.push(*rect);
        }
    }

    #[test]
    fn test_palette_fallback() {
        assert_eq!(block_color(0), None);
        assert_eq!(block_color(3), Some("#8ad8d1"));
        assert_eq!(block_color(42), Some("#2aa198"));
    }

    #[test]
    fn test_snake_scene_draws_apple_then_body() {
        let settings = SnakeSettings::default();
        let mut game = SnakeGame::from_seed(settings.clone(), 1);
        game.step();
        game.step();

        let scene = snake_scene(&game.state, &settings);

        assert_eq!((scene.width, scene.height), (400, 400));
        assert_eq!(
            scene.rects,
            vec![
                Rect { x: 320, y: 320, w: 19, h: 19, color: APPLE_COLOR },
                Rect { x: 200, y: 160, w: 19, h: 19, color: SNAKE_COLOR },
                Rect { x: 180, y: 160, w: 19, h: 19, color: SNAKE_COLOR },
            ]
        );
    }

    #[test]
    fn test_blocks_scene_skips_empty_cells() {
        let settings = BlocksSettings::default();
        let mut game = BlocksGame::from_seed(settings.clone(), 1);
        game.state.board.set(IVec2::new(2, 19), 5);
        game.state.piece = Piece::new(Tetromino::O.matrix());
        game.state.piece.pos = IVec2::new(0, 0);

        let scene = blocks_scene(&game.state, &settings);

        assert_eq!(scene.rects.len(), 5);
        assert_eq!(
            scene.rects[0],
            Rect { x: 40, y: 380, w: 19, h: 19, color: "#1f7f79" }
        );
        assert_eq!(
            scene.rects[4],
            Rect { x: 20, y: 20, w: 19, h: 19, color: "#5ec4bd" }
        );
    }

    #[test]
    fn test_draw_clears_before_filling() {
        let mut surface = Recorder::default();
        surface.rects.push(Rect { x: 0, y: 0, w: 1, h: 1, color: APPLE_COLOR });
        let scene = Scene {
            width: 40,
            height: 20,
            rects: vec![Rect { x: 20, y: 0, w: 19, h: 19, color: SNAKE_COLOR }],
        };

        scene.draw(&mut surface);

        assert_eq!(surface.cleared, Some((40, 20)));
        assert_eq!(surface.rects, scene.rects);
    }
}
