//! Browser host: canvas lookup, DOM score display, event wiring, frame loop

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlCanvasElement, KeyboardEvent, TouchEvent};

use crate::error::InitError;
use crate::input::{Swipe, SwipeTracker, key_direction};
use crate::renderer::{CanvasSurface, blocks_scene, snake_scene};
use crate::settings::Settings;
use crate::sim::{BlockAction, BlocksGame, FrameDivider, GameEvent, SnakeGame};

/// Canvas id on the snake page
pub const SNAKE_CANVAS_ID: &str = "game";
/// Canvas id on the block page
pub const BLOCKS_CANVAS_ID: &str = "tetris";

/// What a page's game needs from the host loop
trait Session {
    /// Called once per display refresh with the rAF timestamp (ms)
    fn frame(&mut self, time: f64);
    /// Returns true if the key meant something to this game
    fn key(&mut self, key: &str) -> bool;
    fn swipe(&mut self) -> &mut SwipeTracker;
    fn gesture(&mut self, swipe: Swipe);
    /// Where touch listeners attach
    fn canvas(&self) -> &HtmlCanvasElement;
}

/// `#score` / `#best` text elements
struct ScoreDisplay {
    score: Option<Element>,
    best: Option<Element>,
}

impl ScoreDisplay {
    fn new(document: &Document) -> Self {
        let score = document.get_element_by_id("score");
        let best = document.get_element_by_id("best");
        if score.is_none() || best.is_none() {
            log::warn!("Score display elements missing; scores will not be shown");
        }
        Self { score, best }
    }

    fn publish(&self, events: Vec<GameEvent>) {
        for event in events {
            match event {
                GameEvent::ScoreChanged { score, best } => {
                    if let Some(el) = &self.score {
                        el.set_text_content(Some(&score.to_string()));
                    }
                    if let Some(el) = &self.best {
                        el.set_text_content(Some(&best.to_string()));
                    }
                }
                GameEvent::Reset { cause } => log::info!("Game reset: {:?}", cause),
            }
        }
    }
}

struct SnakeSession {
    game: SnakeGame,
    divider: FrameDivider,
    surface: CanvasSurface,
    swipe: SwipeTracker,
    hud: ScoreDisplay,
}

impl Session for SnakeSession {
    fn frame(&mut self, _time: f64) {
        if !self.divider.advance() {
            return;
        }
        self.game.step();
        snake_scene(&self.game.state, self.game.settings()).draw(&mut self.surface);
        self.hud.publish(self.game.drain_events());
    }

    fn key(&mut self, key: &str) -> bool {
        match key_direction(key) {
            Some(direction) => {
                self.game.set_direction(direction);
                true
            }
            None => false,
        }
    }

    fn swipe(&mut self) -> &mut SwipeTracker {
        &mut self.swipe
    }

    fn gesture(&mut self, swipe: Swipe) {
        if let Some(direction) = swipe.snake_direction() {
            self.game.set_direction(direction);
        }
    }

    fn canvas(&self) -> &HtmlCanvasElement {
        &self.surface.canvas
    }
}

struct BlocksSession {
    game: BlocksGame,
    surface: CanvasSurface,
    swipe: SwipeTracker,
    hud: ScoreDisplay,
}

impl BlocksSession {
    fn act(&mut self, action: BlockAction) {
        self.game.apply(action);
        self.hud.publish(self.game.drain_events());
    }
}

impl Session for BlocksSession {
    fn frame(&mut self, time: f64) {
        self.game.update(time);
        blocks_scene(&self.game.state, self.game.settings()).draw(&mut self.surface);
        self.hud.publish(self.game.drain_events());
    }

    fn key(&mut self, key: &str) -> bool {
        match key_direction(key) {
            Some(direction) => {
                self.act(direction.into());
                true
            }
            None => false,
        }
    }

    fn swipe(&mut self) -> &mut SwipeTracker {
        &mut self.swipe
    }

    fn gesture(&mut self, swipe: Swipe) {
        self.act(swipe.block_action());
    }

    fn canvas(&self) -> &HtmlCanvasElement {
        &self.surface.canvas
    }
}

/// Start whichever game this page has a canvas for
pub fn start() -> Result<(), InitError> {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| InitError::SurfaceMissing {
            id: "document".to_string(),
        })?;

    let settings = Settings::load();
    let seed = js_sys::Date::now() as u64;

    if document.get_element_by_id(SNAKE_CANVAS_ID).is_some() {
        start_snake(&document, settings, seed)
    } else if document.get_element_by_id(BLOCKS_CANVAS_ID).is_some() {
        start_blocks(&document, settings, seed)
    } else {
        Err(InitError::SurfaceMissing {
            id: format!("{} or {}", SNAKE_CANVAS_ID, BLOCKS_CANVAS_ID),
        })
    }
}

pub fn start_snake(document: &Document, settings: Settings, seed: u64) -> Result<(), InitError> {
    settings.validate()?;
    let surface = CanvasSurface::acquire(document, SNAKE_CANVAS_ID)?;
    surface.resize(settings.snake.width(), settings.snake.height());

    let session = SnakeSession {
        divider: FrameDivider::new(settings.snake.frames_per_step),
        game: SnakeGame::from_seed(settings.snake, seed),
        surface,
        swipe: SwipeTracker::new(settings.input.swipe_threshold),
        hud: ScoreDisplay::new(document),
    };
    log::info!("Snake started with seed: {}", seed);
    run(document, session)
}

pub fn start_blocks(document: &Document, settings: Settings, seed: u64) -> Result<(), InitError> {
    settings.validate()?;
    let surface = CanvasSurface::acquire(document, BLOCKS_CANVAS_ID)?;
    let width = settings.blocks.cols as i32 * settings.blocks.cell;
    let height = settings.blocks.rows as i32 * settings.blocks.cell;
    surface.resize(width, height);

    let mut session = BlocksSession {
        game: BlocksGame::from_seed(settings.blocks, seed),
        surface,
        swipe: SwipeTracker::new(settings.input.swipe_threshold),
        hud: ScoreDisplay::new(document),
    };
    session.hud.publish(session.game.drain_events());
    log::info!("Blocks started with seed: {}", seed);
    run(document, session)
}

fn run<S: Session + 'static>(document: &Document, session: S) -> Result<(), InitError> {
    let canvas = session.canvas().clone();
    let session = Rc::new(RefCell::new(session));
    setup_input_handlers(document, &canvas, session.clone());
    request_animation_frame(session);
    Ok(())
}

fn touch_point(event: &TouchEvent, changed: bool) -> Option<Vec2> {
    let list = if changed {
        event.changed_touches()
    } else {
        event.touches()
    };
    let touch = list.get(0)?;
    Some(Vec2::new(touch.client_x() as f32, touch.client_y() as f32))
}

fn setup_input_handlers<S: Session + 'static>(
    document: &Document,
    canvas: &HtmlCanvasElement,
    session: Rc<RefCell<S>>,
) {
    // Keyboard
    {
        let session = session.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            // Arrow keys would otherwise scroll the page
            if session.borrow_mut().key(&event.key()) {
                event.prevent_default();
            }
        });
        let _ = document
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Touch start - remember where the gesture began
    {
        let session = session.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
            if let Some(pos) = touch_point(&event, false) {
                session.borrow_mut().swipe().begin(pos);
            }
        });
        let _ = canvas
            .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Touch move - keep the page from scrolling mid-gesture
    {
        let session = session.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
            if session.borrow_mut().swipe().is_tracking() {
                event.prevent_default();
            }
        });
        let _ = canvas
            .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Touch end - classify and apply
    {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
            let Some(pos) = touch_point(&event, true) else {
                return;
            };
            let mut s = session.borrow_mut();
            if let Some(swipe) = s.swipe().end(pos) {
                s.gesture(swipe);
            }
        });
        let _ = canvas
            .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn request_animation_frame<S: Session + 'static>(session: Rc<RefCell<S>>) {
    let Some(window) = web_sys::window() else {
        log::error!("No window; frame loop stopped");
        return;
    };
    let closure = Closure::once(move |time: f64| {
        session.borrow_mut().frame(time);
        request_animation_frame(session);
    });
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}
