//! Canvas 2D backend

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use super::scene::{Rect, Surface};
use crate::error::InitError;

/// A canvas element and its 2D context
pub struct CanvasSurface {
    pub canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Look up `id` and take its 2D context
    pub fn acquire(document: &Document, id: &str) -> Result<Self, InitError> {
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
            .ok_or_else(|| InitError::SurfaceMissing { id: id.to_string() })?;

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or_else(|| InitError::ContextUnavailable { id: id.to_string() })?;

        Ok(Self { canvas, ctx })
    }

    /// Set the backing store size in pixels
    pub fn resize(&self, width: i32, height: i32) {
        self.canvas.set_width(width.max(0) as u32);
        self.canvas.set_height(height.max(0) as u32);
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: i32, height: i32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rect(&mut self, rect: &Rect) {
        self.ctx.set_fill_style_str(rect.color);
        self.ctx
            .fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
    }
}
