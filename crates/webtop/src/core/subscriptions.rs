/*!
Full-state subscriptions.

A subscriber gets the whole window sequence right away and again after every
mutating call, in the same call, once the registry lock is released.

Notifications triggered from inside a callback are queued: the running dispatch
loop re-reads the registry and delivers again, so every subscriber sees states
in order and always ends on the latest one.
*/

use super::WindowManager;
use crate::types::WindowState;
use parking_lot::Mutex;
use std::sync::{Arc, Weak};

type Listener = Arc<dyn Fn(&[WindowState]) + Send + Sync>;

#[derive(Default)]
pub(super) struct Subscribers {
  next_id: u64,
  listeners: Vec<(u64, Listener)>,
  dispatching: bool,
  pending: bool,
}

impl Subscribers {
  fn add(&mut self, listener: Listener) -> u64 {
    let id = self.next_id;
    self.next_id += 1;
    self.listeners.push((id, listener));
    id
  }

  fn remove(&mut self, id: u64) -> bool {
    let before = self.listeners.len();
    self.listeners.retain(|(sid, _)| *sid != id);
    self.listeners.len() != before
  }

  fn listeners(&self) -> Vec<Listener> {
    self.listeners.iter().map(|(_, l)| Arc::clone(l)).collect()
  }
}

/// Resets the dispatching flag if a callback panics.
struct DispatchGuard<'a> {
  subscribers: &'a Mutex<Subscribers>,
  armed: bool,
}

impl Drop for DispatchGuard<'_> {
  fn drop(&mut self) {
    if self.armed {
      let mut subs = self.subscribers.lock();
      subs.dispatching = false;
      subs.pending = false;
    }
  }
}

/// Handle to a registered callback. Unsubscribes on drop.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
  id: u64,
  subscribers: Weak<Mutex<Subscribers>>,
  detached: bool,
}

impl std::fmt::Debug for Subscription {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Subscription")
      .field("id", &self.id)
      .field("detached", &self.detached)
      .finish()
  }
}

impl Subscription {
  /// Stop receiving notifications.
  pub fn unsubscribe(self) {
    // Drop will handle cleanup
  }

  /// Keep the callback registered for as long as the manager lives.
  pub fn detach(mut self) {
    self.detached = true;
  }
}

impl Drop for Subscription {
  fn drop(&mut self) {
    if self.detached {
      return;
    }
    if let Some(subscribers) = self.subscribers.upgrade() {
      if !subscribers.lock().remove(self.id) {
        log::debug!("Subscription {} was already removed", self.id);
      }
    }
  }
}

impl WindowManager {
  /// Register a callback for the full window sequence.
  ///
  /// The callback runs once immediately with the current state, then after every
  /// mutating call (including calls on unknown IDs). It may call back into the
  /// manager.
  pub fn subscribe(
    &self,
    callback: impl Fn(&[WindowState]) + Send + Sync + 'static,
  ) -> Subscription {
    let listener: Listener = Arc::new(callback);
    let id = self.subscribers.lock().add(Arc::clone(&listener));

    let windows = self.read(|r| r.windows().to_vec());
    listener(&windows);

    Subscription {
      id,
      subscribers: Arc::downgrade(&self.subscribers),
      detached: false,
    }
  }

  /// Number of registered callbacks.
  pub fn subscriber_count(&self) -> usize {
    self.subscribers.lock().listeners.len()
  }

  /// Deliver the current state to every subscriber.
  ///
  /// Only one dispatch loop runs at a time. Any other caller, on this thread or
  /// another, marks the state pending and the running loop delivers it. The
  /// loop leaves `dispatching` in the same critical section that finds nothing
  /// pending.
  pub(super) fn notify(&self) {
    {
      let mut subs = self.subscribers.lock();
      subs.pending = true;
      if subs.dispatching {
        return;
      }
      subs.dispatching = true;
    }
    let mut guard = DispatchGuard {
      subscribers: &self.subscribers,
      armed: true,
    };

    loop {
      let listeners = {
        let mut subs = self.subscribers.lock();
        if !subs.pending || subs.listeners.is_empty() {
          subs.pending = false;
          subs.dispatching = false;
          guard.armed = false;
          return;
        }
        subs.pending = false;
        subs.listeners()
      };

      let windows = self.read(|r| r.windows().to_vec());
      for listener in &listeners {
        listener(&windows);
      }
    }
  }
}
