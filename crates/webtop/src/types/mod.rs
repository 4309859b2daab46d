/*! Core types for webtop.

Regenerate TypeScript bindings for the view layer: `cargo test` (ts-rs exports on test).
*/

#![allow(missing_docs)]

mod error;
mod event;
mod geometry;
mod ids;
mod window;

pub use error::{WebtopError, WebtopResult};
pub use event::{Event, Snapshot};
pub use geometry::{Position, Size};
pub use ids::WindowId;
pub use window::{Props, WindowState};
