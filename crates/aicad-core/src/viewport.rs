//! Viewport transform state for the model preview.
//!
//! Camera-like parameters (rotation angles, zoom factor) driving the 3D
//! preview. Purely presentational: independent of conversation content
//! beyond sharing a screen, initialised on view mount and discarded when
//! the screen is left.

use serde::{Deserialize, Serialize};

/// Zoom applied per step.
pub const ZOOM_STEP: f32 = 0.2;
/// Lower zoom bound.
pub const ZOOM_MIN: f32 = 0.5;
/// Upper zoom bound.
pub const ZOOM_MAX: f32 = 3.0;
/// Default rotation, degrees.
pub const DEFAULT_ROTATION: Rotation = Rotation { x: 20.0, y: 45.0 };
/// Default zoom factor.
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Rotation angles in degrees. Unbounded; free rotation is allowed and
/// angles are not normalised.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    pub x: f32,
    pub y: f32,
}

/// Interactive camera state for the preview.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    pub rotation: Rotation,
    pub zoom: f32,
}

impl ViewTransform {
    /// Increases zoom by one step, clamped to [`ZOOM_MAX`].
    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).min(ZOOM_MAX);
    }

    /// Decreases zoom by one step, clamped to [`ZOOM_MIN`].
    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - ZOOM_STEP).max(ZOOM_MIN);
    }

    /// Rotates the view by the given deltas, degrees. No range is enforced.
    pub fn rotate_by(&mut self, dx: f32, dy: f32) {
        self.rotation.x += dx;
        self.rotation.y += dy;
    }

    /// Restores rotation and zoom to the defaults in one atomic update.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            rotation: DEFAULT_ROTATION,
            zoom: DEFAULT_ZOOM,
        }
    }
}
