//! Mouse events on screens
//!
//! One registration function per slot: click, release, and scroll, each with
//! `allow` (gating), `before`, and `after` variants. The `allow` callbacks
//! return a [`TriState`] verdict; `before`/`after` callbacks run for side
//! effects only and cannot veto the action.

use tracing::debug;

use super::Screen;
use crate::registry::EventRegistry;
use crate::tri_state::TriState;

// =============================================================================
// CALLBACK SIGNATURES
// =============================================================================

/// Side-effect callback for click/release slots:
/// `(screen, mouse_x, mouse_y, button)`.
pub type MouseClickCallback = Box<dyn FnMut(&mut dyn Screen, f64, f64, i32)>;

/// Gating callback for click/release slots, returning the verdict.
pub type MouseClickCheck = Box<dyn FnMut(&mut dyn Screen, f64, f64, i32) -> TriState>;

/// Side-effect callback for scroll slots:
/// `(screen, mouse_x, mouse_y, scroll_x, scroll_y)`.
pub type MouseScrollCallback = Box<dyn FnMut(&mut dyn Screen, f64, f64, f64, f64)>;

/// Gating callback for scroll slots.
pub type MouseScrollCheck = Box<dyn FnMut(&mut dyn Screen, f64, f64, f64, f64) -> TriState>;

// =============================================================================
// SLOT ADAPTERS
// =============================================================================

/// Adapter for the allow-mouse-click slot.
pub struct AllowMouseClick(MouseClickCheck);

impl AllowMouseClick {
    pub fn invoke(
        &mut self,
        screen: &mut dyn Screen,
        mouse_x: f64,
        mouse_y: f64,
        button: i32,
    ) -> TriState {
        (self.0)(screen, mouse_x, mouse_y, button)
    }
}

/// Adapter for the before-mouse-click slot.
pub struct BeforeMouseClick(MouseClickCallback);

impl BeforeMouseClick {
    pub fn invoke(&mut self, screen: &mut dyn Screen, mouse_x: f64, mouse_y: f64, button: i32) {
        (self.0)(screen, mouse_x, mouse_y, button);
    }
}

/// Adapter for the after-mouse-click slot.
pub struct AfterMouseClick(MouseClickCallback);

impl AfterMouseClick {
    pub fn invoke(&mut self, screen: &mut dyn Screen, mouse_x: f64, mouse_y: f64, button: i32) {
        (self.0)(screen, mouse_x, mouse_y, button);
    }
}

/// Adapter for the allow-mouse-release slot.
pub struct AllowMouseRelease(MouseClickCheck);

impl AllowMouseRelease {
    pub fn invoke(
        &mut self,
        screen: &mut dyn Screen,
        mouse_x: f64,
        mouse_y: f64,
        button: i32,
    ) -> TriState {
        (self.0)(screen, mouse_x, mouse_y, button)
    }
}

/// Adapter for the before-mouse-release slot.
pub struct BeforeMouseRelease(MouseClickCallback);

impl BeforeMouseRelease {
    pub fn invoke(&mut self, screen: &mut dyn Screen, mouse_x: f64, mouse_y: f64, button: i32) {
        (self.0)(screen, mouse_x, mouse_y, button);
    }
}

/// Adapter for the after-mouse-release slot.
pub struct AfterMouseRelease(MouseClickCallback);

impl AfterMouseRelease {
    pub fn invoke(&mut self, screen: &mut dyn Screen, mouse_x: f64, mouse_y: f64, button: i32) {
        (self.0)(screen, mouse_x, mouse_y, button);
    }
}

/// Adapter for the allow-mouse-scroll slot.
pub struct AllowMouseScroll(MouseScrollCheck);

impl AllowMouseScroll {
    pub fn invoke(
        &mut self,
        screen: &mut dyn Screen,
        mouse_x: f64,
        mouse_y: f64,
        scroll_x: f64,
        scroll_y: f64,
    ) -> TriState {
        (self.0)(screen, mouse_x, mouse_y, scroll_x, scroll_y)
    }
}

/// Adapter for the before-mouse-scroll slot.
pub struct BeforeMouseScroll(MouseScrollCallback);

impl BeforeMouseScroll {
    pub fn invoke(
        &mut self,
        screen: &mut dyn Screen,
        mouse_x: f64,
        mouse_y: f64,
        scroll_x: f64,
        scroll_y: f64,
    ) {
        (self.0)(screen, mouse_x, mouse_y, scroll_x, scroll_y);
    }
}

/// Adapter for the after-mouse-scroll slot.
pub struct AfterMouseScroll(MouseScrollCallback);

impl AfterMouseScroll {
    pub fn invoke(
        &mut self,
        screen: &mut dyn Screen,
        mouse_x: f64,
        mouse_y: f64,
        scroll_x: f64,
        scroll_y: f64,
    ) {
        (self.0)(screen, mouse_x, mouse_y, scroll_x, scroll_y);
    }
}

// =============================================================================
// REGISTRATION
// =============================================================================

/// Gate mouse clicks on a screen. The first subscriber returning a decided
/// [`TriState`] wins.
pub fn allow_mouse_click<R>(
    registry: &R,
    callback: impl FnMut(&mut dyn Screen, f64, f64, i32) -> TriState + 'static,
) where
    R: EventRegistry<AllowMouseClick> + ?Sized,
{
    debug!("registering allow_mouse_click subscriber");
    registry.register(AllowMouseClick(Box::new(callback)));
}

/// Run before a mouse click is handled by the screen.
pub fn before_mouse_click<R>(
    registry: &R,
    callback: impl FnMut(&mut dyn Screen, f64, f64, i32) + 'static,
) where
    R: EventRegistry<BeforeMouseClick> + ?Sized,
{
    debug!("registering before_mouse_click subscriber");
    registry.register(BeforeMouseClick(Box::new(callback)));
}

/// Run after a mouse click has been handled by the screen.
pub fn after_mouse_click<R>(
    registry: &R,
    callback: impl FnMut(&mut dyn Screen, f64, f64, i32) + 'static,
) where
    R: EventRegistry<AfterMouseClick> + ?Sized,
{
    debug!("registering after_mouse_click subscriber");
    registry.register(AfterMouseClick(Box::new(callback)));
}

/// Gate mouse button releases on a screen.
pub fn allow_mouse_release<R>(
    registry: &R,
    callback: impl FnMut(&mut dyn Screen, f64, f64, i32) -> TriState + 'static,
) where
    R: EventRegistry<AllowMouseRelease> + ?Sized,
{
    debug!("registering allow_mouse_release subscriber");
    registry.register(AllowMouseRelease(Box::new(callback)));
}

/// Run before a mouse button release is handled by the screen.
pub fn before_mouse_release<R>(
    registry: &R,
    callback: impl FnMut(&mut dyn Screen, f64, f64, i32) + 'static,
) where
    R: EventRegistry<BeforeMouseRelease> + ?Sized,
{
    debug!("registering before_mouse_release subscriber");
    registry.register(BeforeMouseRelease(Box::new(callback)));
}

/// Run after a mouse button release has been handled by the screen.
pub fn after_mouse_release<R>(
    registry: &R,
    callback: impl FnMut(&mut dyn Screen, f64, f64, i32) + 'static,
) where
    R: EventRegistry<AfterMouseRelease> + ?Sized,
{
    debug!("registering after_mouse_release subscriber");
    registry.register(AfterMouseRelease(Box::new(callback)));
}

/// Gate mouse scrolling on a screen.
pub fn allow_mouse_scroll<R>(
    registry: &R,
    callback: impl FnMut(&mut dyn Screen, f64, f64, f64, f64) -> TriState + 'static,
) where
    R: EventRegistry<AllowMouseScroll> + ?Sized,
{
    debug!("registering allow_mouse_scroll subscriber");
    registry.register(AllowMouseScroll(Box::new(callback)));
}

/// Run before a mouse scroll is handled by the screen.
pub fn before_mouse_scroll<R>(
    registry: &R,
    callback: impl FnMut(&mut dyn Screen, f64, f64, f64, f64) + 'static,
) where
    R: EventRegistry<BeforeMouseScroll> + ?Sized,
{
    debug!("registering before_mouse_scroll subscriber");
    registry.register(BeforeMouseScroll(Box::new(callback)));
}

/// Run after a mouse scroll has been handled by the screen.
pub fn after_mouse_scroll<R>(
    registry: &R,
    callback: impl FnMut(&mut dyn Screen, f64, f64, f64, f64) + 'static,
) where
    R: EventRegistry<AfterMouseScroll> + ?Sized,
{
    debug!("registering after_mouse_scroll subscriber");
    registry.register(AfterMouseScroll(Box::new(callback)));
}
