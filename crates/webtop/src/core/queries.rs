/*!
Read-only views of the registry. Queries never notify.
*/

use super::WindowManager;
use crate::types::{Snapshot, WindowId, WindowState};

impl WindowManager {
  /// Look up one window.
  pub fn window(&self, id: impl AsRef<str>) -> Option<WindowState> {
    self.read(|r| r.get(id.as_ref()).cloned())
  }

  /// Every record, in insertion order. Closed windows included.
  pub fn windows(&self) -> Vec<WindowState> {
    self.read(|r| r.windows().to_vec())
  }

  /// Records with `is_open` set, in insertion order (the taskbar's list).
  pub fn open_windows(&self) -> Vec<WindowState> {
    self.read(|r| r.windows().iter().filter(|w| w.is_open).cloned().collect())
  }

  /// Number of records, open or closed.
  pub fn len(&self) -> usize {
    self.read(super::Registry::len)
  }

  /// Whether no window was ever opened.
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Window IDs front to back.
  pub fn z_order(&self) -> Vec<WindowId> {
    self.read(super::Registry::z_order)
  }

  /// Topmost window that is open and not minimized.
  pub fn front_window(&self) -> Option<WindowId> {
    self.read(|r| r.front_window().map(|w| w.id.clone()))
  }

  /// Full state for a view layer's initial sync.
  pub fn snapshot(&self) -> Snapshot {
    self.read(|r| Snapshot {
      windows: r.windows().to_vec(),
      z_order: r.z_order(),
      front_window: r.front_window().map(|w| w.id.clone()),
    })
  }
}
