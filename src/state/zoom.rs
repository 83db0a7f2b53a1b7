//! Wheel zoom state
//!
//! The factor is applied to the rendered size of the fitted bitmap only.
//! It has no bound in either direction. The rendered size saturates so that its
//! longer edge stays within `MAX_RENDER_EDGE`, keeping the aspect ratio.

use crate::config::MAX_RENDER_EDGE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    scale: f64,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl ZoomState {
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// One wheel tick: double on the way in, halve on the way out
    pub fn apply(&mut self, direction: ZoomDirection) -> f64 {
        match direction {
            ZoomDirection::In => self.scale *= 2.0,
            ZoomDirection::Out => self.scale /= 2.0,
        }
        self.scale
    }

    pub fn reset(&mut self) {
        self.scale = 1.0;
    }

    /// On-screen size of a `width` x `height` bitmap at the current scale
    pub fn render_size(&self, width: u32, height: u32) -> (f32, f32) {
        let longest = f64::from(width.max(height).max(1));
        let factor = self.scale.min(f64::from(MAX_RENDER_EDGE) / longest);
        (
            (f64::from(width) * factor) as f32,
            (f64::from(height) * factor) as f32,
        )
    }
}
