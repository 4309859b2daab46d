/*!
Configuration for webtop.

All values have sensible defaults. Override in code:

```
use webtop::{Config, Placement};

let config = Config {
    placement: Placement::cascade(),
    ..Default::default()
};
assert_eq!(config.event_channel_capacity, 256);
```

or load from JSON shipped with the page:

```
use webtop::Config;

let config = Config::from_json(r#"{ "placement": { "kind": "cascade" } }"#)?;
# Ok::<(), webtop::WebtopError>(())
```
*/

use serde::{Deserialize, Serialize};

use crate::placement::Placement;
use crate::types::{Props, WebtopError, WebtopResult, WindowId};

const DEFAULT_EVENT_CHANNEL_CAPACITY: usize = 256;

/// A window opened when the manager is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartupWindow {
  /// Window ID.
  pub id: WindowId,
  /// Embedded app to mount.
  pub component: String,
  /// Title bar text.
  pub title: String,
  /// Props handed to the component.
  #[serde(default)]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub props: Option<Props>,
}

impl StartupWindow {
  /// Startup window without props.
  pub fn new(
    id: impl Into<WindowId>,
    component: impl Into<String>,
    title: impl Into<String>,
  ) -> Self {
    Self {
      id: id.into(),
      component: component.into(),
      title: title.into(),
      props: None,
    }
  }
}

/// Window manager configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
  /// Where new windows appear.
  /// Default: centered with the built-in size table.
  pub placement: Placement,

  /// Capacity of the typed event broadcast channel. Oldest events drop on overflow.
  /// Default: 256 events.
  pub event_channel_capacity: usize,

  /// Windows opened, in order, when the manager is built.
  /// Default: none.
  pub startup_windows: Vec<StartupWindow>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      placement: Placement::default(),
      event_channel_capacity: DEFAULT_EVENT_CHANNEL_CAPACITY,
      startup_windows: Vec::new(),
    }
  }
}

impl Config {
  /// Create a new config with default values.
  pub fn new() -> Self {
    Self::default()
  }

  /// Parse and validate a JSON config. Missing fields take their defaults.
  pub fn from_json(json: &str) -> WebtopResult<Self> {
    let config: Self = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
  }

  /// The stock desktop: the terminal opens on startup.
  #[must_use]
  pub fn with_terminal(mut self) -> Self {
    self
      .startup_windows
      .push(StartupWindow::new("terminal", "TerminalApp", "Terminal"));
    self
  }

  /// Check that the config can build a manager.
  pub fn validate(&self) -> WebtopResult<()> {
    if self.event_channel_capacity == 0 {
      return Err(WebtopError::InvalidConfig(
        "event channel capacity must be non-zero".into(),
      ));
    }
    self.placement.validate()
  }
}
