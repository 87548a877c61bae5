//! Mapping from simulation coordinates (AU) to display coordinates (pixels).
//!
//! The square `[-system_size, system_size]^2` is fitted into the smaller
//! half-extent of the display, scaled by `zoom`, and centred on the display
//! centre. The mapping is a pure affine transform and has an exact inverse.

use crate::simulation::states::NVec2;

#[derive(Debug, Clone)]
pub struct ScreenProjection {
    width: u32,
    height: u32,
    system_size: f64,
    zoom: f64,
    center: NVec2,
    scale: f64,
}

impl ScreenProjection {
    pub fn new(width: u32, height: u32, system_size: f64, zoom: f64) -> Self {
        debug_assert!(system_size > 0.0 && zoom > 0.0);
        let center = NVec2::new(f64::from(width / 2), f64::from(height / 2));
        let scale = center.x.min(center.y) / system_size * zoom;
        Self {
            width,
            height,
            system_size,
            zoom,
            center,
            scale,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn center(&self) -> NVec2 {
        self.center
    }

    /// Pixels per AU at the current zoom.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Change the zoom factor; non-positive or non-finite values are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if !zoom.is_finite() || zoom <= 0.0 {
            return;
        }
        self.zoom = zoom;
        self.scale = self.center.x.min(self.center.y) / self.system_size * zoom;
    }

    /// Simulation position to display position.
    pub fn project(&self, p: &NVec2) -> NVec2 {
        p * self.scale + self.center
    }

    /// Display position back to simulation position.
    pub fn unproject(&self, s: &NVec2) -> NVec2 {
        (s - self.center) / self.scale
    }

    /// Simulation length (e.g. a radius) to pixels.
    pub fn project_length(&self, len: f64) -> f64 {
        len * self.scale
    }
}
