/*!
Initial placement of newly created windows.

Two policies exist and neither is blended into the other:

- [`Placement::Center`]: center a per-window preferred size in the viewport,
  nudged upward to leave room for the top bar. Needs the viewport size.
- [`Placement::Cascade`]: fixed row near the top, horizontal offset stepping
  with the number of registered windows and wrapping after a fixed range.

Both are pure functions of `(id, window count, viewport)`.
*/

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{Position, Size, WebtopError, WebtopResult, WindowId};
use crate::viewport::{self, ViewportProvider, FALLBACK_VIEWPORT};

const DEFAULT_WINDOW_SIZE: Size = Size::new(600, 450);
const DEFAULT_TOP_OFFSET: i32 = 20;

const DEFAULT_CASCADE_TOP: i32 = 50;
const DEFAULT_CASCADE_BASE_X: i32 = 100;
const DEFAULT_CASCADE_STEP: u32 = 30;
const DEFAULT_CASCADE_RANGE: u32 = 300;

/// Placement policy for new windows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Placement {
  /// Center each window using a per-ID size table.
  Center(CenterPlacement),
  /// Offset each window horizontally by the number of registered windows.
  Cascade(CascadePlacement),
}

impl Default for Placement {
  fn default() -> Self {
    Self::Center(CenterPlacement::default())
  }
}

impl Placement {
  /// Centered placement with the built-in size table.
  pub fn center() -> Self {
    Self::Center(CenterPlacement::default())
  }

  /// Cascading placement with default step and range.
  pub const fn cascade() -> Self {
    Self::Cascade(CascadePlacement::DEFAULT)
  }

  /// Reject configurations that cannot produce a position.
  pub fn validate(&self) -> WebtopResult<()> {
    match self {
      Self::Center(center) => {
        if center.fallback_viewport.is_empty() {
          return Err(WebtopError::InvalidConfig(
            "fallback viewport must have a non-zero area".into(),
          ));
        }
        Ok(())
      }
      Self::Cascade(cascade) => {
        if cascade.range == 0 {
          return Err(WebtopError::InvalidConfig(
            "cascade range must be non-zero".into(),
          ));
        }
        Ok(())
      }
    }
  }

  /// Compute the initial position for a window that is about to be created.
  ///
  /// `window_count` is the number of records registered before this one.
  /// The viewport is only queried by the centering policy.
  pub fn place(
    &self,
    id: &WindowId,
    window_count: usize,
    viewport: &dyn ViewportProvider,
  ) -> Position {
    match self {
      Self::Center(center) => {
        let viewport = viewport::resolve(viewport, center.fallback_viewport);
        center.position(id, viewport)
      }
      Self::Cascade(cascade) => cascade.position(window_count),
    }
  }
}

/// Center a preferred window size in the viewport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CenterPlacement {
  /// Preferred size per window ID.
  pub sizes: BTreeMap<String, Size>,
  /// Size for IDs missing from `sizes`.
  pub default_size: Size,
  /// Used when no viewport is available.
  pub fallback_viewport: Size,
  /// Pixels to lift the window above true vertical center.
  pub top_offset: i32,
}

impl Default for CenterPlacement {
  fn default() -> Self {
    let sizes = [
      ("terminal", Size::new(1100, 700)),
      ("photos", Size::new(700, 500)),
      ("about-txt", Size::new(600, 450)),
    ]
    .into_iter()
    .map(|(id, size)| (id.to_owned(), size))
    .collect();

    Self {
      sizes,
      default_size: DEFAULT_WINDOW_SIZE,
      fallback_viewport: FALLBACK_VIEWPORT,
      top_offset: DEFAULT_TOP_OFFSET,
    }
  }
}

impl CenterPlacement {
  /// Preferred size for a window, falling back to `default_size`.
  pub fn size_for(&self, id: &WindowId) -> Size {
    self
      .sizes
      .get(id.as_str())
      .copied()
      .unwrap_or(self.default_size)
  }

  fn position(&self, id: &WindowId, viewport: Size) -> Position {
    let size = self.size_for(id);
    let x = centered(viewport.width, size.width);
    let y = centered(viewport.height, size.height) - i64::from(self.top_offset);
    Position::new(clamp_non_negative(x), clamp_non_negative(y))
  }
}

/// `floor((outer - inner) / 2)`, negative when the window is larger than the viewport.
fn centered(outer: u32, inner: u32) -> i64 {
  (i64::from(outer) - i64::from(inner)).div_euclid(2)
}

fn clamp_non_negative(v: i64) -> i32 {
  i32::try_from(v.max(0)).unwrap_or(i32::MAX)
}

/// Step windows horizontally along a fixed row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CascadePlacement {
  /// Fixed vertical position.
  pub top: i32,
  /// Horizontal position of the first window.
  pub base_x: i32,
  /// Horizontal shift per registered window.
  pub step: u32,
  /// Offsets wrap back to `base_x` after this many pixels. Must be non-zero.
  pub range: u32,
}

impl CascadePlacement {
  /// Top 50, base x 100, step 30, range 300.
  pub const DEFAULT: Self = Self {
    top: DEFAULT_CASCADE_TOP,
    base_x: DEFAULT_CASCADE_BASE_X,
    step: DEFAULT_CASCADE_STEP,
    range: DEFAULT_CASCADE_RANGE,
  };

  fn position(&self, window_count: usize) -> Position {
    let offset = if self.range == 0 {
      0
    } else {
      let range = u64::from(self.range);
      let count = u64::try_from(window_count).unwrap_or(u64::MAX) % range;
      (count * (u64::from(self.step) % range)) % range
    };
    let x = i64::from(self.base_x) + i64::try_from(offset).unwrap_or(0);
    Position::new(i32::try_from(x).unwrap_or(i32::MAX), self.top)
  }
}

impl Default for CascadePlacement {
  fn default() -> Self {
    Self::DEFAULT
  }
}
