//! Screen lifecycle events
//!
//! Init, render, tick, and removal slots. None of these gate anything, so
//! every callback is side-effect only. Render and tick fire once per frame
//! inside the client's main loop; registering into those slots requires a
//! [`MustRunQuick`] acknowledgment.

use tracing::debug;

use super::{Client, DrawContext, Screen};
use crate::hot_path::MustRunQuick;
use crate::registry::EventRegistry;

// =============================================================================
// CALLBACK SIGNATURES
// =============================================================================

/// Callback receiving only the screen itself.
pub type ScreenGenericCallback = Box<dyn FnMut(&mut dyn Screen)>;

/// Init callback: `(screen, client, scaled_width, scaled_height)`.
pub type ScreenInitCallback = Box<dyn FnMut(&mut dyn Screen, &dyn Client, i32, i32)>;

/// Render callback: `(screen, draw_context, mouse_x, mouse_y, tick_delta)`.
pub type ScreenRenderCallback = Box<dyn FnMut(&mut dyn Screen, &mut dyn DrawContext, i32, i32, f32)>;

// =============================================================================
// SLOT ADAPTERS
// =============================================================================

/// Adapter for the before-init slot.
pub struct BeforeInit(ScreenInitCallback);

impl BeforeInit {
    pub fn invoke(
        &mut self,
        screen: &mut dyn Screen,
        client: &dyn Client,
        scaled_width: i32,
        scaled_height: i32,
    ) {
        (self.0)(screen, client, scaled_width, scaled_height);
    }
}

/// Adapter for the after-init slot.
pub struct AfterInit(ScreenInitCallback);

impl AfterInit {
    pub fn invoke(
        &mut self,
        screen: &mut dyn Screen,
        client: &dyn Client,
        scaled_width: i32,
        scaled_height: i32,
    ) {
        (self.0)(screen, client, scaled_width, scaled_height);
    }
}

/// Adapter for the screen-removed slot.
pub struct Remove(ScreenGenericCallback);

impl Remove {
    pub fn invoke(&mut self, screen: &mut dyn Screen) {
        (self.0)(screen);
    }
}

/// Adapter for the before-render slot.
pub struct BeforeRender(ScreenRenderCallback);

impl BeforeRender {
    pub fn invoke(
        &mut self,
        screen: &mut dyn Screen,
        ctx: &mut dyn DrawContext,
        mouse_x: i32,
        mouse_y: i32,
        tick_delta: f32,
    ) {
        (self.0)(screen, ctx, mouse_x, mouse_y, tick_delta);
    }
}

/// Adapter for the after-render slot.
pub struct AfterRender(ScreenRenderCallback);

impl AfterRender {
    pub fn invoke(
        &mut self,
        screen: &mut dyn Screen,
        ctx: &mut dyn DrawContext,
        mouse_x: i32,
        mouse_y: i32,
        tick_delta: f32,
    ) {
        (self.0)(screen, ctx, mouse_x, mouse_y, tick_delta);
    }
}

/// Adapter for the before-tick slot.
pub struct BeforeTick(ScreenGenericCallback);

impl BeforeTick {
    pub fn invoke(&mut self, screen: &mut dyn Screen) {
        (self.0)(screen);
    }
}

/// Adapter for the after-tick slot.
pub struct AfterTick(ScreenGenericCallback);

impl AfterTick {
    pub fn invoke(&mut self, screen: &mut dyn Screen) {
        (self.0)(screen);
    }
}

// =============================================================================
// REGISTRATION
// =============================================================================

/// Run before a screen initializes its widgets.
pub fn before_screen_init<R>(
    registry: &R,
    callback: impl FnMut(&mut dyn Screen, &dyn Client, i32, i32) + 'static,
) where
    R: EventRegistry<BeforeInit> + ?Sized,
{
    debug!("registering before_screen_init subscriber");
    registry.register(BeforeInit(Box::new(callback)));
}

/// Run after a screen has initialized its widgets.
pub fn after_screen_init<R>(
    registry: &R,
    callback: impl FnMut(&mut dyn Screen, &dyn Client, i32, i32) + 'static,
) where
    R: EventRegistry<AfterInit> + ?Sized,
{
    debug!("registering after_screen_init subscriber");
    registry.register(AfterInit(Box::new(callback)));
}

/// Run when a screen is removed (closed or replaced).
pub fn screen_removed<R>(registry: &R, callback: impl FnMut(&mut dyn Screen) + 'static)
where
    R: EventRegistry<Remove> + ?Sized,
{
    debug!("registering screen_removed subscriber");
    registry.register(Remove(Box::new(callback)));
}

/// Run before a screen renders a frame. Hot slot: fires every frame.
pub fn before_screen_render<R>(
    _hot: MustRunQuick,
    registry: &R,
    callback: impl FnMut(&mut dyn Screen, &mut dyn DrawContext, i32, i32, f32) + 'static,
) where
    R: EventRegistry<BeforeRender> + ?Sized,
{
    debug!("registering before_screen_render subscriber");
    registry.register(BeforeRender(Box::new(callback)));
}

/// Run after a screen has rendered a frame. Hot slot: fires every frame.
pub fn after_screen_render<R>(
    _hot: MustRunQuick,
    registry: &R,
    callback: impl FnMut(&mut dyn Screen, &mut dyn DrawContext, i32, i32, f32) + 'static,
) where
    R: EventRegistry<AfterRender> + ?Sized,
{
    debug!("registering after_screen_render subscriber");
    registry.register(AfterRender(Box::new(callback)));
}

/// Run before a screen ticks. Hot slot: fires every client tick.
pub fn before_screen_tick<R>(
    _hot: MustRunQuick,
    registry: &R,
    callback: impl FnMut(&mut dyn Screen) + 'static,
) where
    R: EventRegistry<BeforeTick> + ?Sized,
{
    debug!("registering before_screen_tick subscriber");
    registry.register(BeforeTick(Box::new(callback)));
}

/// Run after a screen has ticked. Hot slot: fires every client tick.
pub fn after_screen_tick<R>(
    _hot: MustRunQuick,
    registry: &R,
    callback: impl FnMut(&mut dyn Screen) + 'static,
) where
    R: EventRegistry<AfterTick> + ?Sized,
{
    debug!("registering after_screen_tick subscriber");
    registry.register(AfterTick(Box::new(callback)));
}
