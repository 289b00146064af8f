//! Snap and coordinate helpers shared by every geometry computation.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Default grid cell size in canvas units.
pub const DEFAULT_GRID_SIZE: f64 = 20.0;

/// Minimum component width/height enforced by the interaction controller.
pub const MIN_COMPONENT_SIZE: f64 = 20.0;

/// Process-wide canvas settings: zoom, grid, snapping.
///
/// Read by every coordinate transform; mutated only through the setters so
/// the invariants (positive scale, grid of at least one unit) hold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSettings {
    /// Zoom factor applied to the canvas surface (> 0).
    pub canvas_scale: f64,
    /// Grid cell size in canvas units (>= 1).
    pub grid_size: f64,
    /// Whether committed positions/sizes are quantized to the grid.
    pub snap_to_grid: bool,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            canvas_scale: 1.0,
            grid_size: DEFAULT_GRID_SIZE,
            snap_to_grid: true,
        }
    }
}

impl CanvasSettings {
    /// Set the zoom factor, ignoring non-positive or non-finite values.
    pub fn set_canvas_scale(&mut self, scale: f64) {
        if scale.is_finite() && scale > 0.0 {
            self.canvas_scale = scale;
        }
    }

    /// Set the grid size, clamped to at least one unit.
    pub fn set_grid_size(&mut self, grid_size: f64) {
        if grid_size.is_finite() {
            self.grid_size = grid_size.max(1.0);
        }
    }

    /// Quantize a single axis value if snapping is enabled.
    pub fn snap_if_enabled(&self, value: f64) -> f64 {
        if self.snap_to_grid {
            snap_axis(value, self.grid_size)
        } else {
            value
        }
    }
}

/// Quantize a value to the nearest multiple of `grid_size`.
pub fn snap_axis(value: f64, grid_size: f64) -> f64 {
    (value / grid_size).round() * grid_size
}

/// Quantize both axes of a point independently.
pub fn snap_point(point: Point, grid_size: f64) -> Point {
    Point::new(snap_axis(point.x, grid_size), snap_axis(point.y, grid_size))
}

/// Clamp a canvas position so the component stays inside the surface.
/// Negative placement is not allowed on either axis.
pub fn clamp_origin(point: Point) -> Point {
    Point::new(point.x.max(0.0), point.y.max(0.0))
}
