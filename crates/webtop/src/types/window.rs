/*! Window record as exposed to view layers. */

use super::{Position, WindowId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

/// Opaque per-window payload forwarded to whichever view renders the window.
///
/// The core never inspects it; the rendering layer validates it against the
/// component it mounts.
pub type Props = BTreeMap<String, serde_json::Value>;

/// One window instance.
///
/// Field names serialize in camelCase (`isOpen`, `zIndex`) to match the view layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WindowState {
  pub id: WindowId,
  pub title: String,
  /// False once closed. The record itself is kept.
  pub is_open: bool,
  pub is_minimized: bool,
  pub is_maximized: bool,
  /// Stacking order. Higher is further in front; values need not be contiguous.
  pub z_index: u32,
  pub position: Position,
  /// Which embedded app to mount (e.g. `"TerminalApp"`).
  pub component: String,
  #[serde(default)]
  #[serde(skip_serializing_if = "Option::is_none")]
  #[ts(optional)]
  pub props: Option<Props>,
}

impl WindowState {
  /// Whether the window should be drawn: open and not minimized.
  pub const fn is_visible(&self) -> bool {
    self.is_open && !self.is_minimized
  }
}
