/*!
Webtop - window management core for a desktop that lives in a web page.

Keeps the window records (open/minimized/maximized flags, stacking, position)
for embedded apps such as a terminal or a photo viewer, decides where new
windows appear, and pushes every change to the view layers that draw them.

```
use webtop::{FixedViewport, WindowManager};

let wm = WindowManager::builder()
    .viewport(FixedViewport::new(1920, 1080))
    .build()?;

// Full state on subscribe and after every change
let _sub = wm.subscribe(|windows| {
    for w in windows.iter().filter(|w| w.is_visible()) {
        println!("{} at {:?} z={}", w.title, w.position, w.z_index);
    }
});

wm.open_window("terminal", "TerminalApp", "Terminal", None);
wm.open_window("photos", "PhotosApp", "Photos", None);
wm.bring_to_front("terminal");
wm.update_position("photos", (40, 60));

// Typed events for consumers that want deltas
let mut events = wm.events();
wm.minimize_window("photos");
assert!(events.try_recv().is_ok());
# Ok::<(), webtop::WebtopError>(())
```
*/

mod config;
mod core;
mod placement;
mod viewport;

mod types;
pub use types::*;

pub use crate::config::{Config, StartupWindow};
pub use crate::core::{Subscription, WindowManager, WindowManagerBuilder};
pub use crate::placement::{CascadePlacement, CenterPlacement, Placement};
pub use crate::viewport::{FixedViewport, Headless, ViewportProvider, FALLBACK_VIEWPORT};
