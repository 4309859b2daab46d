/*!
Core window manager instance - owns the registry, subscribers and event broadcasting.

# Module Structure

- `mod.rs` - `WindowManager` struct, construction, events
- `registry/` - Registry with private fields + operations + event emission
- `mutations.rs` - open/close/minimize/maximize/raise/move
- `queries.rs` - lookups, z-order, snapshot
- `subscriptions.rs` - full-state callbacks

# Example

```
use webtop::WindowManager;

let wm = WindowManager::new();
let _sub = wm.subscribe(|windows| println!("{} windows", windows.len()));

wm.open_window("terminal", "TerminalApp", "Terminal", None);
wm.bring_to_front("terminal");
```
*/

mod mutations;
mod queries;
mod registry;
mod subscriptions;

pub(crate) use registry::Registry;
pub use subscriptions::Subscription;

use crate::config::{Config, StartupWindow};
use crate::placement::Placement;
use crate::types::{Event, WebtopResult};
use crate::viewport::{Headless, ViewportProvider};
use async_broadcast::{InactiveReceiver, Sender};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use subscriptions::Subscribers;

/// Main window manager - owns window state, subscribers and the event channel.
///
/// Clone is cheap (Arc bumps): hand a clone to every view layer that needs it.
/// All clones share one registry.
pub struct WindowManager {
  pub(crate) state: Arc<RwLock<Registry>>,
  subscribers: Arc<Mutex<Subscribers>>,
  events_tx: Sender<Event>,
  events_keepalive: InactiveReceiver<Event>,
  placement: Arc<Placement>,
  viewport: Arc<dyn ViewportProvider>,
}

impl Clone for WindowManager {
  fn clone(&self) -> Self {
    Self {
      state: Arc::clone(&self.state),
      subscribers: Arc::clone(&self.subscribers),
      events_tx: self.events_tx.clone(),
      events_keepalive: self.events_keepalive.clone(),
      placement: Arc::clone(&self.placement),
      viewport: Arc::clone(&self.viewport),
    }
  }
}

impl std::fmt::Debug for WindowManager {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("WindowManager")
      .field("placement", &self.placement)
      .field("windows", &self.len())
      .finish_non_exhaustive()
  }
}

impl Default for WindowManager {
  fn default() -> Self {
    Self::new()
  }
}

/// Builder for configuring a `WindowManager`.
///
/// # Example
///
/// ```
/// use webtop::{FixedViewport, Placement, WindowManager};
///
/// let wm = WindowManager::builder()
///     .placement(Placement::cascade())
///     .viewport(FixedViewport::new(1920, 1080))
///     .build()?;
/// # Ok::<(), webtop::WebtopError>(())
/// ```
#[must_use = "Builder does nothing until .build() is called"]
pub struct WindowManagerBuilder {
  config: Config,
  viewport: Arc<dyn ViewportProvider>,
}

impl Default for WindowManagerBuilder {
  fn default() -> Self {
    Self {
      config: Config::default(),
      viewport: Arc::new(Headless),
    }
  }
}

impl std::fmt::Debug for WindowManagerBuilder {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("WindowManagerBuilder")
      .field("config", &self.config)
      .finish_non_exhaustive()
  }
}

impl WindowManagerBuilder {
  /// Replace the whole configuration.
  pub fn config(mut self, config: Config) -> Self {
    self.config = config;
    self
  }

  /// Placement policy for new windows. Default: centered.
  pub fn placement(mut self, placement: Placement) -> Self {
    self.config.placement = placement;
    self
  }

  /// Where the centering policy reads the viewport size. Default: [`Headless`].
  pub fn viewport(mut self, viewport: impl ViewportProvider + 'static) -> Self {
    self.viewport = Arc::new(viewport);
    self
  }

  /// Capacity of the typed event channel. Default: 256.
  pub fn event_channel_capacity(mut self, capacity: usize) -> Self {
    self.config.event_channel_capacity = capacity;
    self
  }

  /// Open a window as soon as the manager is built. Repeatable; opened in call order.
  pub fn startup_window(mut self, window: StartupWindow) -> Self {
    self.config.startup_windows.push(window);
    self
  }

  /// Validate the configuration and build the manager.
  pub fn build(self) -> WebtopResult<WindowManager> {
    self.config.validate()?;
    Ok(WindowManager::create(self.config, self.viewport))
  }
}

impl WindowManager {
  /// Create an empty manager with default options and no viewport.
  pub fn new() -> Self {
    Self::create(Config::default(), Arc::new(Headless))
  }

  /// Create a builder for configuring a new manager.
  pub fn builder() -> WindowManagerBuilder {
    WindowManagerBuilder::default()
  }

  /// Build from a config, e.g. one loaded with [`Config::from_json`].
  pub fn with_config(config: Config, viewport: impl ViewportProvider + 'static) -> WebtopResult<Self> {
    Self::builder().config(config).viewport(viewport).build()
  }

  fn create(config: Config, viewport: Arc<dyn ViewportProvider>) -> Self {
    let (mut tx, rx) = async_broadcast::broadcast(config.event_channel_capacity);
    tx.set_overflow(true); // Drop oldest messages when full

    let state = Registry::new(tx.clone());

    let wm = Self {
      state: Arc::new(RwLock::new(state)),
      subscribers: Arc::new(Mutex::new(Subscribers::default())),
      events_tx: tx,
      events_keepalive: rx.deactivate(),
      placement: Arc::new(config.placement),
      viewport,
    };

    for window in config.startup_windows {
      log::debug!("Opening startup window {}", window.id);
      wm.open_window(window.id, window.component, window.title, window.props);
    }

    wm
  }

  /// Subscribe to typed change events.
  ///
  /// Events sent before this call are not replayed; use [`WindowManager::snapshot`]
  /// for the initial state.
  pub fn events(&self) -> async_broadcast::Receiver<Event> {
    self.events_keepalive.activate_cloned()
  }

  /// The configured placement policy.
  pub fn placement(&self) -> &Placement {
    &self.placement
  }

  /// Read state. Never call the viewport provider or subscribers inside the closure.
  #[inline]
  pub(crate) fn read<R>(&self, f: impl FnOnce(&Registry) -> R) -> R {
    f(&self.state.read())
  }

  /// Write state. Never call the viewport provider or subscribers inside the closure.
  #[inline]
  pub(crate) fn write<R>(&self, f: impl FnOnce(&mut Registry) -> R) -> R {
    f(&mut self.state.write())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::placement::CascadePlacement;
  use crate::types::{Position, WebtopError};
  use crate::viewport::FixedViewport;

  #[test]
  fn new_manager_is_empty() {
    let wm = WindowManager::new();
    assert!(wm.is_empty());
    assert_eq!(wm.placement(), &Placement::center());
  }

  #[test]
  fn clones_share_state() {
    let wm = WindowManager::new();
    let other = wm.clone();
    other.open_window("terminal", "TerminalApp", "Terminal", None);
    assert!(wm.window("terminal").is_some());
  }

  #[test]
  fn startup_windows_open_in_order() {
    let wm = WindowManager::builder()
      .viewport(FixedViewport::new(1920, 1080))
      .startup_window(StartupWindow::new("terminal", "TerminalApp", "Terminal"))
      .startup_window(StartupWindow::new("about-txt", "TextApp", "about.txt"))
      .build()
      .unwrap();

    let terminal = wm.window("terminal").unwrap();
    let about = wm.window("about-txt").unwrap();
    assert_eq!(terminal.z_index, 1);
    assert_eq!(terminal.position, Position::new(410, 170));
    assert_eq!(about.z_index, 2);
    assert_eq!(wm.front_window().as_ref().map(|id| id.as_str()), Some("about-txt"));
  }

  #[test]
  fn stock_config_seeds_terminal() {
    let wm = WindowManager::with_config(Config::new().with_terminal(), Headless).unwrap();
    let terminal = wm.window("terminal").unwrap();
    assert!(terminal.is_open);
    assert_eq!(terminal.z_index, 1);
    // Fallback 1200x800: (1200 - 1100) / 2 = 50, (800 - 700) / 2 - 20 = 30
    assert_eq!(terminal.position, Position::new(50, 30));
  }

  #[test]
  fn build_rejects_invalid_placement() {
    let result = WindowManager::builder()
      .placement(Placement::Cascade(CascadePlacement {
        range: 0,
        ..CascadePlacement::DEFAULT
      }))
      .build();
    assert!(matches!(result, Err(WebtopError::InvalidConfig(_))));
  }

  #[test]
  fn build_rejects_zero_capacity() {
    let result = WindowManager::builder().event_channel_capacity(0).build();
    assert!(result.is_err());
  }

  #[test]
  fn events_reach_receivers() {
    let wm = WindowManager::new();
    let mut events = wm.events();
    wm.open_window("photos", "PhotosApp", "Photos", None);
    wm.minimize_window("photos");
    wm.open_window("terminal", "TerminalApp", "Terminal", None);
    let reopened = wm.open_window("photos", "PhotosApp", "Photos", None);
    wm.bring_to_front("terminal");
    wm.bring_to_front("ghost");

    assert!(matches!(events.try_recv(), Ok(Event::WindowOpened { window }) if window.id == "photos"));
    assert_eq!(
      events.try_recv().unwrap(),
      Event::WindowMinimized {
        id: "photos".into()
      }
    );
    assert!(matches!(events.try_recv(), Ok(Event::WindowOpened { window }) if window.id == "terminal"));
    assert_eq!(
      events.try_recv().unwrap(),
      Event::WindowReopened { window: reopened }
    );
    assert_eq!(
      events.try_recv().unwrap(),
      Event::WindowRaised {
        id: "terminal".into(),
        z_index: 4
      }
    );
    assert!(events.try_recv().is_err(), "unknown ids emit nothing");
  }

  #[test]
  fn event_overflow_drops_oldest() {
    let wm = WindowManager::builder()
      .event_channel_capacity(2)
      .build()
      .unwrap();
    let mut events = wm.events();
    wm.open_window("a", "A", "A", None);
    wm.close_window("a");
    wm.maximize_window("a");

    assert!(matches!(
      events.try_recv(),
      Err(async_broadcast::TryRecvError::Overflowed(1))
    ));
    assert_eq!(events.try_recv().unwrap(), Event::WindowClosed { id: "a".into() });
    assert!(matches!(
      events.try_recv(),
      Ok(Event::WindowMaximized { maximized: true, .. })
    ));
  }
}
