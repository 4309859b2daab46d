/*!
Window record operations.

Every operation on an unknown ID is a no-op that returns `None`/`false`
and emits nothing.
*/

use super::{Registry, BASE_Z_INDEX};
use crate::types::{Event, Position, WindowId, WindowState};

// ============================================================================
// Queries
// ============================================================================

impl Registry {
  fn index_of(&self, id: &str) -> Option<usize> {
    self.windows.iter().position(|w| w.id == id)
  }

  /// Look up a record by ID.
  pub(crate) fn get(&self, id: &str) -> Option<&WindowState> {
    self.windows.iter().find(|w| w.id == id)
  }

  fn get_mut(&mut self, id: &str) -> Option<&mut WindowState> {
    self.windows.iter_mut().find(|w| w.id == id)
  }

  pub(crate) fn contains(&self, id: &str) -> bool {
    self.index_of(id).is_some()
  }

  /// IDs front to back. Equal z-indexes order the later-inserted record first.
  pub(crate) fn z_order(&self) -> Vec<WindowId> {
    let mut order: Vec<(usize, &WindowState)> = self.windows.iter().enumerate().collect();
    order.sort_by(|(ia, a), (ib, b)| b.z_index.cmp(&a.z_index).then(ib.cmp(ia)));
    order.into_iter().map(|(_, w)| w.id.clone()).collect()
  }

  /// Topmost window that is open and not minimized.
  pub(crate) fn front_window(&self) -> Option<&WindowState> {
    self
      .windows
      .iter()
      .enumerate()
      .filter(|(_, w)| w.is_visible())
      .max_by(|(ia, a), (ib, b)| a.z_index.cmp(&b.z_index).then(ia.cmp(ib)))
      .map(|(_, w)| w)
  }
}

// ============================================================================
// Mutations
// ============================================================================

impl Registry {
  /// Append a new record. Caller guarantees the ID is not registered.
  pub(crate) fn insert(&mut self, window: WindowState) {
    debug_assert!(
      !self.contains(window.id.as_str()),
      "duplicate window id {}",
      window.id
    );
    self.windows.push(window.clone());
    self.emit(Event::WindowOpened { window });
  }

  /// Open an existing record and bring it to front. Metadata is left alone.
  pub(crate) fn reopen(&mut self, id: &str) -> Option<WindowState> {
    if !self.contains(id) {
      return None;
    }
    let z_index = self.next_z_index();
    let window = self.get_mut(id)?;
    window.is_open = true;
    window.is_minimized = false;
    window.z_index = z_index;
    let window = window.clone();
    self.emit(Event::WindowReopened {
      window: window.clone(),
    });
    Some(window)
  }

  /// Mark a record closed. The record stays registered.
  pub(crate) fn close(&mut self, id: &str) -> bool {
    let Some(window) = self.get_mut(id) else {
      return false;
    };
    window.is_open = false;
    let id = window.id.clone();
    self.emit(Event::WindowClosed { id });
    true
  }

  pub(crate) fn minimize(&mut self, id: &str) -> bool {
    let Some(window) = self.get_mut(id) else {
      return false;
    };
    window.is_minimized = true;
    let id = window.id.clone();
    self.emit(Event::WindowMinimized { id });
    true
  }

  /// Flip `is_maximized`. Returns the new value.
  pub(crate) fn toggle_maximized(&mut self, id: &str) -> Option<bool> {
    let window = self.get_mut(id)?;
    window.is_maximized = !window.is_maximized;
    let (id, maximized) = (window.id.clone(), window.is_maximized);
    self.emit(Event::WindowMaximized { id, maximized });
    Some(maximized)
  }

  /// Move a record in front of every record, itself included. Returns the new z-index.
  pub(crate) fn raise(&mut self, id: &str) -> Option<u32> {
    if !self.contains(id) {
      return None;
    }
    let z_index = self.next_z_index();
    let window = self.get_mut(id)?;
    window.z_index = z_index;
    let id = window.id.clone();
    self.emit(Event::WindowRaised { id, z_index });
    Some(z_index)
  }

  pub(crate) fn set_position(&mut self, id: &str, position: Position) -> bool {
    let Some(window) = self.get_mut(id) else {
      return false;
    };
    window.position = position;
    let id = window.id.clone();
    self.emit(Event::WindowMoved { id, position });
    true
  }

  /// Renumber z-indexes from `BASE_Z_INDEX` in current stacking order.
  pub(super) fn restack(&mut self) {
    let back_to_front = self.z_order().into_iter().rev();
    for (z_index, id) in (BASE_Z_INDEX..).zip(back_to_front) {
      let Some(window) = self.get_mut(id.as_str()) else {
        continue;
      };
      if window.z_index != z_index {
        window.z_index = z_index;
        self.emit(Event::WindowRaised { id, z_index });
      }
    }
  }
}
