/*!
Registry - the single source of truth for window records.

All fields are private. Mutations go through methods that maintain invariants
and emit events. This guarantees:
- At most one record per `WindowId`
- Events are emitted only for real changes
- z-index arithmetic never faults on an empty registry

## Module Structure

- `mod.rs` - Registry struct, event emission, z-order arithmetic
- `windows.rs` - Window record insert/update operations and queries
*/

mod windows;

use async_broadcast::Sender;

use crate::types::{Event, WindowState};

/// z-index handed to the first window of an empty registry.
pub(crate) const BASE_Z_INDEX: u32 = 1;

/// Maximum z-index of an empty registry. `BASE_Z_INDEX - 1`, so that
/// "max + 1" yields the base value.
const EMPTY_MAX_Z_INDEX: u32 = BASE_Z_INDEX - 1;

/// Internal state storage with automatic event emission.
pub(crate) struct Registry {
  events_tx: Sender<Event>,

  /// Insertion-ordered records. Stacking lives in `z_index`, not here.
  windows: Vec<WindowState>,
}

impl Registry {
  pub(crate) const fn new(events_tx: Sender<Event>) -> Self {
    Self {
      events_tx,
      windows: Vec::new(),
    }
  }

  /// Emit an event.
  fn emit(&self, event: Event) {
    if let Err(e) = self.events_tx.try_broadcast(event) {
      if e.is_full() {
        log::error!(
          "Event channel overflow - events are being dropped. \
           Consider increasing event_channel_capacity or processing events faster."
        );
      }
    }
  }

  /// All records in insertion order.
  pub(crate) fn windows(&self) -> &[WindowState] {
    &self.windows
  }

  pub(crate) fn len(&self) -> usize {
    self.windows.len()
  }

  /// Highest z-index across all records, or the empty sentinel.
  pub(crate) fn max_z_index(&self) -> u32 {
    self
      .windows
      .iter()
      .map(|w| w.z_index)
      .max()
      .unwrap_or(EMPTY_MAX_Z_INDEX)
  }

  /// z-index that puts a window in front of every record.
  ///
  /// Once the maximum reaches `u32::MAX` the stack is renumbered from
  /// `BASE_Z_INDEX`, keeping the current order, so the result stays strictly
  /// greater than every record.
  pub(crate) fn next_z_index(&mut self) -> u32 {
    if self.max_z_index() == u32::MAX {
      log::warn!("z-index space exhausted, restacking {} windows", self.windows.len());
      self.restack();
    }
    self.max_z_index().saturating_add(1)
  }
}
