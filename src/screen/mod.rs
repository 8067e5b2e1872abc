//! Client screen events
//!
//! Typed registration functions for the host's screen event slots, split by
//! input source: [`mouse`], [`keyboard`], and screen [`lifecycle`].
//!
//! Callbacks receive host objects behind opaque trait handles. The handles
//! expose only what every host has; anything host-specific is reached by
//! downcasting through [`std::any::Any`].

pub mod keyboard;
pub mod lifecycle;
pub mod mouse;

use std::any::Any;

/// A screen currently displayed by the host's client.
pub trait Screen: Any {
    /// Title shown in the screen header.
    fn title(&self) -> &str;
}

/// Opaque handle to the host's client instance.
///
/// Downcast to the host's concrete type for anything beyond identity.
pub trait Client: Any {}

/// Opaque handle to the host's draw/matrix state for one render pass.
pub trait DrawContext: Any {}
