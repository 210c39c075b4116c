//! Canvas 2D drawing surface

use game_core::render::{Image, Surface, TextAlign, TextBaseline, TextStyle};
use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::error::ClientError;
use crate::particles::Emitter;

const PADDLE_IMAGE: &str = "media/paddle.png";

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    paddle: Option<HtmlImageElement>,
    trail: Emitter,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, ClientError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(ClientError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| ClientError::NoContext)?;

        let paddle = match HtmlImageElement::new() {
            Ok(img) => {
                img.set_src(PADDLE_IMAGE);
                Some(img)
            }
            Err(e) => {
                log::warn!("Could not create paddle image: {:?}", e);
                None
            }
        };

        Ok(Self {
            ctx,
            paddle,
            trail: Emitter::new(),
        })
    }

    #[allow(deprecated)]
    fn set_fill(&self, color: &str) {
        self.ctx.set_fill_style(&JsValue::from_str(color));
    }
}

impl Surface for CanvasSurface {
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str) {
        self.set_fill(color);
        self.ctx
            .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
    }

    fn draw_image(&mut self, image: Image, pos: Vec2) {
        let img = match image {
            Image::Paddle => self.paddle.as_ref(),
        };
        // Not loaded (or failed to load): draw nothing
        let Some(img) = img.filter(|img| img.complete() && img.natural_width() > 0) else {
            return;
        };
        let _ = self
            .ctx
            .draw_image_with_html_image_element(img, pos.x as f64, pos.y as f64);
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, style: TextStyle) {
        self.ctx.set_font(style.font);
        self.ctx.set_text_align(match style.align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        });
        self.ctx.set_text_baseline(match style.baseline {
            TextBaseline::Alphabetic => "alphabetic",
            TextBaseline::Middle => "middle",
        });
        self.set_fill(style.color);
        let _ = self.ctx.fill_text(text, pos.x as f64, pos.y as f64);
    }

    fn set_glow(&mut self, blur: f32, color: &str) {
        self.ctx.set_shadow_blur(blur as f64);
        self.ctx.set_shadow_color(color);
    }

    fn ball_trail(&mut self, center: Vec2) {
        self.trail.update_and_draw(&self.ctx, center);
    }
}
