/*! Event types for state changes and synchronization. */

use super::{Position, WindowId, WindowState};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Full state, sent to a view layer on first sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Snapshot {
  /// All records in insertion order.
  pub windows: Vec<WindowState>,
  /// Window IDs in z-order (front to back)
  pub z_order: Vec<WindowId>,
  /// Topmost open, non-minimized window.
  pub front_window: Option<WindowId>,
}

/// Events emitted when a window actually changes.
///
/// Operations on unknown IDs emit nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "event", content = "data")]
#[ts(export)]
pub enum Event {
  // Lifecycle
  #[serde(rename = "window:opened")]
  WindowOpened { window: WindowState },
  #[serde(rename = "window:reopened")]
  WindowReopened { window: WindowState },
  #[serde(rename = "window:closed")]
  WindowClosed { id: WindowId },

  // Presentation
  #[serde(rename = "window:minimized")]
  WindowMinimized { id: WindowId },
  #[serde(rename = "window:maximized")]
  WindowMaximized { id: WindowId, maximized: bool },

  // Stacking & geometry
  #[serde(rename = "window:raised")]
  WindowRaised {
    id: WindowId,
    #[serde(rename = "zIndex")]
    z_index: u32,
  },
  #[serde(rename = "window:moved")]
  WindowMoved { id: WindowId, position: Position },
}

impl Event {
  /// The window this event concerns.
  pub fn window_id(&self) -> &WindowId {
    match self {
      Self::WindowOpened { window } | Self::WindowReopened { window } => &window.id,
      Self::WindowClosed { id }
      | Self::WindowMinimized { id }
      | Self::WindowMaximized { id, .. }
      | Self::WindowRaised { id, .. }
      | Self::WindowMoved { id, .. } => id,
    }
  }
}
