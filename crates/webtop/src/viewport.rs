/*!
Viewport-size providers.

The centering placement needs the current display size. Where that comes from
(a browser `window`, a test fixture, nothing at all during headless rendering)
is the host's business; the core only sees [`ViewportProvider`].
*/

use crate::types::Size;

/// Viewport assumed when no provider can answer.
pub const FALLBACK_VIEWPORT: Size = Size::new(1200, 800);

/// Reads the current viewport size.
///
/// Returning `None` means "no display context" and is not an error.
/// Implementations must be side-effect free.
pub trait ViewportProvider: Send + Sync {
  /// Current viewport size, if a display is available.
  fn size(&self) -> Option<Size>;
}

impl<F> ViewportProvider for F
where
  F: Fn() -> Option<Size> + Send + Sync,
{
  fn size(&self) -> Option<Size> {
    self()
  }
}

/// A viewport of constant size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedViewport(pub Size);

impl FixedViewport {
  /// Viewport of `width` x `height` pixels.
  pub const fn new(width: u32, height: u32) -> Self {
    Self(Size::new(width, height))
  }
}

impl ViewportProvider for FixedViewport {
  fn size(&self) -> Option<Size> {
    Some(self.0)
  }
}

/// No display context (server-side rendering, tests).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Headless;

impl ViewportProvider for Headless {
  fn size(&self) -> Option<Size> {
    None
  }
}

/// Query the provider, substituting `fallback` for a missing or zero-area viewport.
pub(crate) fn resolve(provider: &dyn ViewportProvider, fallback: Size) -> Size {
  match provider.size() {
    Some(size) if !size.is_empty() => size,
    Some(size) => {
      log::warn!("Viewport reported empty size {size:?}, using fallback {fallback:?}");
      fallback
    }
    None => {
      log::debug!("No viewport available, using fallback {fallback:?}");
      fallback
    }
  }
}
