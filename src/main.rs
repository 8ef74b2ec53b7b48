//! Grid Arcade entry point
//!
//! On the web the page's canvas decides which game starts. Natively both
//! simulations run headless for a while and log what happens.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    grid_arcade::platform::web::start().map_err(|e| {
        log::error!("Startup failed: {}", e);
        JsValue::from_str(&e.to_string())
    })
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0x5eed);
    let settings = match args.next() {
        Some(path) => match load_settings(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        },
        None => grid_arcade::Settings::load(),
    };

    log::info!("Grid Arcade (native, headless) starting with seed: {}", seed);
    headless::run_snake(&settings, seed, 2_000);
    headless::run_blocks(&settings, seed, 20_000);
}

#[cfg(not(target_arch = "wasm32"))]
fn load_settings(path: &str) -> Result<grid_arcade::Settings, String> {
    let json = std::fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e))?;
    grid_arcade::Settings::from_json(&json).map_err(|e| format!("{}: {}", path, e))
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use grid_arcade::Settings;
    use grid_arcade::sim::{BlockAction, BlocksGame, Direction, GameEvent, SnakeGame};
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    fn report(game: &str, events: Vec<GameEvent>) {
        for event in events {
            match event {
                GameEvent::ScoreChanged { score, best } => {
                    log::debug!("{}: score {} (best {})", game, score, best)
                }
                GameEvent::Reset { cause } => log::info!("{}: reset ({:?})", game, cause),
            }
        }
    }

    /// Chase the apple along x, then y
    pub fn run_snake(settings: &Settings, seed: u64, steps: u32) {
        let mut game = SnakeGame::from_seed(settings.snake.clone(), seed);
        for _ in 0..steps {
            let (head, apple) = (game.state.head, game.state.apple);
            let direction = if head.x < apple.x {
                Some(Direction::Right)
            } else if head.x > apple.x {
                Some(Direction::Left)
            } else if head.y < apple.y {
                Some(Direction::Down)
            } else if head.y > apple.y {
                Some(Direction::Up)
            } else {
                None
            };
            if let Some(direction) = direction {
                game.set_direction(direction);
            }
            game.step();
            report("snake", game.drain_events());
        }
        let board = game.state.scoreboard;
        println!(
            "snake: {} steps, score {}, best {}, length {}",
            steps,
            board.score,
            board.best,
            game.state.body.len()
        );
    }

    /// Random player at 60 fps
    pub fn run_blocks(settings: &Settings, seed: u64, frames: u32) {
        let mut game = BlocksGame::from_seed(settings.blocks.clone(), seed);
        let mut player = Pcg32::seed_from_u64(seed ^ 0xb10c);
        let mut time = 0.0;
        let mut drops = 0;
        for _ in 0..frames {
            time += 1000.0 / 60.0;
            if game.update(time) {
                drops += 1;
            }
            if player.random_ratio(1, 8) {
                let action = match player.random_range(0..4) {
                    0 => BlockAction::Move(-1),
                    1 => BlockAction::Move(1),
                    2 => BlockAction::Rotate,
                    _ => BlockAction::Drop,
                };
                game.apply(action);
            }
            report("blocks", game.drain_events());
        }
        let board = game.state.scoreboard;
        println!(
            "blocks: {} frames, {} timed drops, score {}, best {}",
            frames, drops, board.score, board.best
        );
    }
}
