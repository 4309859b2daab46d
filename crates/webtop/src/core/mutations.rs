/*!
Mutating window operations.

None of these fail. Unknown IDs are tolerated no-ops: nothing changes and no
typed event is emitted, but subscribers are still notified, as they are after
every mutating call.
*/

use super::WindowManager;
use crate::types::{Position, Props, WindowId, WindowState};

impl WindowManager {
  /// Open a window, creating its record on first use.
  ///
  /// A new record gets its position from the placement policy and a z-index one
  /// past the current maximum (1 for an empty registry). An existing record is
  /// opened, un-minimized and brought to front; its title, component, props and
  /// position are kept, so later metadata arguments are ignored.
  ///
  /// Returns the record as it is after the call.
  pub fn open_window(
    &self,
    id: impl Into<WindowId>,
    component: impl Into<String>,
    title: impl Into<String>,
    props: Option<Props>,
  ) -> WindowState {
    let id = id.into();

    // Placement may query the viewport, which must happen outside the lock.
    let position = match self.read(|r| (!r.contains(id.as_str())).then(|| r.len())) {
      Some(window_count) => self
        .placement
        .place(&id, window_count, self.viewport.as_ref()),
      // Records are never removed, so the reopen path below is taken.
      None => Position::default(),
    };

    let window = self.write(|r| {
      if let Some(window) = r.reopen(id.as_str()) {
        log::trace!("Reopened window {id} at z-index {}", window.z_index);
        return window;
      }

      let window = WindowState {
        id: id.clone(),
        title: title.into(),
        is_open: true,
        is_minimized: false,
        is_maximized: false,
        z_index: r.next_z_index(),
        position,
        component: component.into(),
        props,
      };
      log::debug!(
        "Created window {id} ({}) at ({}, {}) z-index {}",
        window.component,
        position.x,
        position.y,
        window.z_index
      );
      r.insert(window.clone());
      window
    });

    self.notify();
    window
  }

  /// Mark a window closed. The record is kept for a cheap reopen.
  pub fn close_window(&self, id: impl AsRef<str>) -> bool {
    let id = id.as_ref();
    let found = self.write(|r| r.close(id));
    log_missing("close_window", id, found);
    self.notify();
    found
  }

  /// Minimize a window. Stacking and the open flag are untouched.
  pub fn minimize_window(&self, id: impl AsRef<str>) -> bool {
    let id = id.as_ref();
    let found = self.write(|r| r.minimize(id));
    log_missing("minimize_window", id, found);
    self.notify();
    found
  }

  /// Toggle the maximized flag. Returns the new value, or `None` for an unknown ID.
  pub fn maximize_window(&self, id: impl AsRef<str>) -> Option<bool> {
    let id = id.as_ref();
    let maximized = self.write(|r| r.toggle_maximized(id));
    log_missing("maximize_window", id, maximized.is_some());
    self.notify();
    maximized
  }

  /// Put a window in front of every other. Returns its new z-index.
  pub fn bring_to_front(&self, id: impl AsRef<str>) -> Option<u32> {
    let id = id.as_ref();
    let z_index = self.write(|r| r.raise(id));
    match z_index {
      Some(z) => log::trace!("Raised window {id} to z-index {z}"),
      None => log_missing("bring_to_front", id, false),
    }
    self.notify();
    z_index
  }

  /// Replace a window's position. No clamping happens here.
  pub fn update_position(&self, id: impl AsRef<str>, position: impl Into<Position>) -> bool {
    let id = id.as_ref();
    let position = position.into();
    let found = self.write(|r| r.set_position(id, position));
    log_missing("update_position", id, found);
    self.notify();
    found
  }
}

fn log_missing(op: &str, id: &str, found: bool) {
  if !found {
    log::debug!("{op}: no window with id {id:?}, ignoring");
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::placement::Placement;
  use crate::viewport::FixedViewport;
  use serde_json::json;
  use std::sync::atomic::{AtomicUsize, Ordering};
  use std::sync::Arc;

  fn wm() -> WindowManager {
    WindowManager::builder()
      .viewport(FixedViewport::new(1920, 1080))
      .build()
      .unwrap()
  }

  mod open_window {
    use super::*;

    #[test]
    fn first_window_gets_base_z_index() {
      let wm = wm();
      let window = wm.open_window("terminal", "TerminalApp", "Terminal", None);

      assert_eq!(wm.len(), 1);
      assert_eq!(window.id, "terminal");
      assert!(window.is_open);
      assert!(!window.is_minimized);
      assert!(!window.is_maximized);
      assert_eq!(window.z_index, 1);
      assert_eq!(window.component, "TerminalApp");
      assert_eq!(window.title, "Terminal");
    }

    #[test]
    fn second_window_is_placed_by_policy() {
      let wm = wm();
      wm.open_window("terminal", "TerminalApp", "Terminal", None);
      let photos = wm.open_window("photos", "PhotosApp", "Photos", None);

      assert_eq!(photos.z_index, 2);
      // (1920 - 700) / 2 = 610, (1080 - 500) / 2 - 20 = 270
      assert_eq!(photos.position, Position::new(610, 270));
      assert_ne!(photos.position, wm.window("terminal").unwrap().position);
    }

    #[test]
    fn cascade_policy_uses_window_count() {
      let wm = WindowManager::builder()
        .placement(Placement::cascade())
        .build()
        .unwrap();
      wm.open_window("terminal", "TerminalApp", "Terminal", None);
      let photos = wm.open_window("photos", "PhotosApp", "Photos", None);
      assert_eq!(photos.position, Position::new(130, 50));
    }

    #[test]
    fn reopen_keeps_single_record_and_metadata() {
      let wm = wm();
      let mut props = Props::new();
      props.insert("path".into(), json!("/home"));
      let first = wm.open_window("terminal", "TerminalApp", "Terminal", Some(props.clone()));
      wm.update_position("terminal", (5, 5));
      wm.open_window("photos", "PhotosApp", "Photos", None);
      wm.minimize_window("terminal");
      wm.close_window("terminal");

      let again = wm.open_window("terminal", "OtherApp", "Renamed", None);

      assert_eq!(wm.len(), 2);
      assert!(again.is_open);
      assert!(!again.is_minimized);
      assert_eq!(again.z_index, 3);
      assert!(again.z_index > first.z_index);
      assert_eq!(again.title, "Terminal");
      assert_eq!(again.component, "TerminalApp");
      assert_eq!(again.props, Some(props));
      assert_eq!(again.position, Position::new(5, 5));
    }

    #[test]
    fn reopen_does_not_query_viewport() {
      let calls = Arc::new(AtomicUsize::new(0));
      let counter = Arc::clone(&calls);
      let wm = WindowManager::builder()
        .viewport(move || {
          counter.fetch_add(1, Ordering::SeqCst);
          Some(crate::types::Size::new(1024, 768))
        })
        .build()
        .unwrap();

      wm.open_window("photos", "PhotosApp", "Photos", None);
      wm.open_window("photos", "PhotosApp", "Photos", None);
      assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn reopen_preserves_maximized_flag() {
      let wm = wm();
      wm.open_window("photos", "PhotosApp", "Photos", None);
      wm.maximize_window("photos");
      wm.close_window("photos");
      assert!(wm.open_window("photos", "PhotosApp", "Photos", None).is_maximized);
    }
  }

  mod close_window {
    use super::*;

    #[test]
    fn keeps_record() {
      let wm = wm();
      wm.open_window("photos", "PhotosApp", "Photos", None);
      assert!(wm.close_window("photos"));

      let photos = wm.window("photos").unwrap();
      assert!(!photos.is_open);
      assert_eq!(photos.z_index, 1);
      assert_eq!(wm.len(), 1);
    }

    #[test]
    fn unknown_id_is_no_op() {
      let wm = wm();
      wm.open_window("photos", "PhotosApp", "Photos", None);
      assert!(!wm.close_window("terminal"));
      assert_eq!(wm.len(), 1);
      assert!(wm.window("photos").unwrap().is_open);
    }
  }

  mod minimize_window {
    use super::*;

    #[test]
    fn sets_flag_only() {
      let wm = wm();
      wm.open_window("photos", "PhotosApp", "Photos", None);
      wm.open_window("terminal", "TerminalApp", "Terminal", None);
      assert!(wm.minimize_window("terminal"));

      let terminal = wm.window("terminal").unwrap();
      assert!(terminal.is_minimized);
      assert!(terminal.is_open);
      assert_eq!(terminal.z_index, 2);
      assert_eq!(wm.front_window(), Some(WindowId::new("photos")));
    }
  }

  mod maximize_window {
    use super::*;

    #[test]
    fn toggles() {
      let wm = wm();
      wm.open_window("photos", "PhotosApp", "Photos", None);
      assert_eq!(wm.maximize_window("photos"), Some(true));
      assert_eq!(wm.maximize_window("photos"), Some(false));
      assert!(!wm.window("photos").unwrap().is_maximized);
    }

    #[test]
    fn unknown_id_returns_none() {
      assert_eq!(wm().maximize_window("photos"), None);
    }
  }

  mod bring_to_front {
    use super::*;

    #[test]
    fn raises_above_all() {
      let wm = wm();
      wm.open_window("a", "A", "A", None);
      wm.open_window("b", "B", "B", None);

      assert_eq!(wm.bring_to_front("a"), Some(3));
      assert_eq!(wm.window("a").unwrap().z_index, 3);
      assert_eq!(wm.window("b").unwrap().z_index, 2);
      assert_eq!(wm.z_order(), vec![WindowId::new("a"), WindowId::new("b")]);
    }

    #[test]
    fn empty_registry_is_no_op() {
      let wm = wm();
      assert_eq!(wm.bring_to_front("a"), None);
      assert!(wm.is_empty());
    }

    #[test]
    fn accepts_window_id_refs() {
      let wm = wm();
      let id = wm.open_window("a", "A", "A", None).id;
      assert_eq!(wm.bring_to_front(&id), Some(2));
    }
  }

  mod update_position {
    use super::*;

    #[test]
    fn replaces_position_without_clamping() {
      let wm = wm();
      wm.open_window("photos", "PhotosApp", "Photos", None);
      assert!(wm.update_position("photos", Position::new(-40, 5000)));
      assert_eq!(wm.window("photos").unwrap().position, Position::new(-40, 5000));
    }

    #[test]
    fn unknown_id_is_no_op() {
      let wm = wm();
      assert!(!wm.update_position("photos", (1, 2)));
      assert!(wm.is_empty());
    }
  }
}
