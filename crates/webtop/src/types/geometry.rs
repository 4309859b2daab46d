/*! Geometry types for viewport coordinates. */

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Pixel offset from the viewport's top-left origin.
///
/// Not clamped: a window dragged partly offscreen keeps negative coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Position {
  pub x: i32,
  pub y: i32,
}

impl Position {
  pub const fn new(x: i32, y: i32) -> Self {
    Self { x, y }
  }

  /// Position shifted by the given deltas. Saturates instead of wrapping.
  pub const fn offset(self, dx: i32, dy: i32) -> Self {
    Self {
      x: self.x.saturating_add(dx),
      y: self.y.saturating_add(dy),
    }
  }
}

impl From<(i32, i32)> for Position {
  fn from((x, y): (i32, i32)) -> Self {
    Self { x, y }
  }
}

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Size {
  pub width: u32,
  pub height: u32,
}

impl Size {
  pub const fn new(width: u32, height: u32) -> Self {
    Self { width, height }
  }

  /// Whether either dimension is zero.
  pub const fn is_empty(&self) -> bool {
    self.width == 0 || self.height == 0
  }
}

impl From<(u32, u32)> for Size {
  fn from((width, height): (u32, u32)) -> Self {
    Self { width, height }
  }
}
