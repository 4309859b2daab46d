/*! Branded ID types for type-safe window references. */

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Window identifier.
///
/// Chosen by the caller (e.g. `"terminal"`, `"photos"`), not generated.
/// Unique among the windows registered with one manager.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Serialize,
  Deserialize,
  TS,
  Display,
  From,
  Into,
)]
#[ts(export)]
pub struct WindowId(pub String);

impl WindowId {
  /// Create a window ID from anything string-like.
  pub fn new(id: impl Into<String>) -> Self {
    Self(id.into())
  }

  /// Borrow the underlying string.
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl AsRef<str> for WindowId {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

impl From<&str> for WindowId {
  fn from(id: &str) -> Self {
    Self(id.to_owned())
  }
}

impl PartialEq<str> for WindowId {
  fn eq(&self, other: &str) -> bool {
    self.0 == other
  }
}

impl PartialEq<&str> for WindowId {
  fn eq(&self, other: &&str) -> bool {
    self.0 == *other
  }
}
