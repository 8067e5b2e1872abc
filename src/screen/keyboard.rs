//! Keyboard events on screens
//!
//! Key press and key release slots, each with `allow` (gating), `before`,
//! and `after` variants. Callbacks receive the raw key code, scan code, and
//! modifier bitmask exactly as the host reports them.

use tracing::debug;

use super::Screen;
use crate::registry::EventRegistry;
use crate::tri_state::TriState;

// =============================================================================
// CALLBACK SIGNATURES
// =============================================================================

/// Side-effect callback for key slots: `(screen, key, scan_code, modifiers)`.
pub type KeyboardKeyCallback = Box<dyn FnMut(&mut dyn Screen, i32, i32, i32)>;

/// Gating callback for key slots, returning the verdict.
pub type KeyboardKeyCheck = Box<dyn FnMut(&mut dyn Screen, i32, i32, i32) -> TriState>;

// =============================================================================
// SLOT ADAPTERS
// =============================================================================

/// Adapter for the allow-key-press slot.
pub struct AllowKeyPress(KeyboardKeyCheck);

impl AllowKeyPress {
    pub fn invoke(
        &mut self,
        screen: &mut dyn Screen,
        key: i32,
        scan_code: i32,
        modifiers: i32,
    ) -> TriState {
        (self.0)(screen, key, scan_code, modifiers)
    }
}

/// Adapter for the before-key-press slot.
pub struct BeforeKeyPress(KeyboardKeyCallback);

impl BeforeKeyPress {
    pub fn invoke(&mut self, screen: &mut dyn Screen, key: i32, scan_code: i32, modifiers: i32) {
        (self.0)(screen, key, scan_code, modifiers);
    }
}

/// Adapter for the after-key-press slot.
pub struct AfterKeyPress(KeyboardKeyCallback);

impl AfterKeyPress {
    pub fn invoke(&mut self, screen: &mut dyn Screen, key: i32, scan_code: i32, modifiers: i32) {
        (self.0)(screen, key, scan_code, modifiers);
    }
}

/// Adapter for the allow-key-release slot.
pub struct AllowKeyRelease(KeyboardKeyCheck);

impl AllowKeyRelease {
    pub fn invoke(
        &mut self,
        screen: &mut dyn Screen,
        key: i32,
        scan_code: i32,
        modifiers: i32,
    ) -> TriState {
        (self.0)(screen, key, scan_code, modifiers)
    }
}

/// Adapter for the before-key-release slot.
pub struct BeforeKeyRelease(KeyboardKeyCallback);

impl BeforeKeyRelease {
    pub fn invoke(&mut self, screen: &mut dyn Screen, key: i32, scan_code: i32, modifiers: i32) {
        (self.0)(screen, key, scan_code, modifiers);
    }
}

/// Adapter for the after-key-release slot.
pub struct AfterKeyRelease(KeyboardKeyCallback);

impl AfterKeyRelease {
    pub fn invoke(&mut self, screen: &mut dyn Screen, key: i32, scan_code: i32, modifiers: i32) {
        (self.0)(screen, key, scan_code, modifiers);
    }
}

// =============================================================================
// REGISTRATION
// =============================================================================

/// Gate key presses on a screen. The first subscriber returning a decided
/// [`TriState`] wins.
pub fn allow_key_press<R>(
    registry: &R,
    callback: impl FnMut(&mut dyn Screen, i32, i32, i32) -> TriState + 'static,
) where
    R: EventRegistry<AllowKeyPress> + ?Sized,
{
    debug!("registering allow_key_press subscriber");
    registry.register(AllowKeyPress(Box::new(callback)));
}

/// Run before a key press is handled by the screen.
pub fn before_key_press<R>(
    registry: &R,
    callback: impl FnMut(&mut dyn Screen, i32, i32, i32) + 'static,
) where
    R: EventRegistry<BeforeKeyPress> + ?Sized,
{
    debug!("registering before_key_press subscriber");
    registry.register(BeforeKeyPress(Box::new(callback)));
}

/// Run after a key press has been handled by the screen.
pub fn after_key_press<R>(
    registry: &R,
    callback: impl FnMut(&mut dyn Screen, i32, i32, i32) + 'static,
) where
    R: EventRegistry<AfterKeyPress> + ?Sized,
{
    debug!("registering after_key_press subscriber");
    registry.register(AfterKeyPress(Box::new(callback)));
}

/// Gate key releases on a screen.
pub fn allow_key_release<R>(
    registry: &R,
    callback: impl FnMut(&mut dyn Screen, i32, i32, i32) -> TriState + 'static,
) where
    R: EventRegistry<AllowKeyRelease> + ?Sized,
{
    debug!("registering allow_key_release subscriber");
    registry.register(AllowKeyRelease(Box::new(callback)));
}

/// Run before a key release is handled by the screen.
pub fn before_key_release<R>(
    registry: &R,
    callback: impl FnMut(&mut dyn Screen, i32, i32, i32) + 'static,
) where
    R: EventRegistry<BeforeKeyRelease> + ?Sized,
{
    debug!("registering before_key_release subscriber");
    registry.register(BeforeKeyRelease(Box::new(callback)));
}

/// Run after a key release has been handled by the screen.
pub fn after_key_release<R>(
    registry: &R,
    callback: impl FnMut(&mut dyn Screen, i32, i32, i32) + 'static,
) where
    R: EventRegistry<AfterKeyRelease> + ?Sized,
{
    debug!("registering after_key_release subscriber");
    registry.register(AfterKeyRelease(Box::new(callback)));
}
