//! Typed convenience wrappers over a game modding framework.
//!
//! Everything in this crate delegates to host-owned collaborators: event
//! registries behind [`EventRegistry`], and the dimension-transfer utility
//! behind [`worlds::DimensionTeleporter`]. The crate contributes typed
//! callback signatures, per-slot adapters, and a checked transfer helper; it
//! owns no dispatch loop, world state, or entity lifecycle of its own.
//!
//! Registration is one call per slot, handle in hand:
//!
//! ```
//! use modwrap::screen::mouse;
//! use modwrap::{LocalRegistry, TriState};
//!
//! let allow_click = LocalRegistry::new();
//! mouse::allow_mouse_click(&allow_click, |screen, _x, _y, button| {
//!     if button == 1 && screen.title() == "inventory" {
//!         TriState::Deny
//!     } else {
//!         TriState::Default
//!     }
//! });
//! ```

pub mod hot_path;
pub mod registry;
pub mod screen;
pub mod tri_state;
pub mod worlds;

pub use hot_path::MustRunQuick;
pub use registry::{EventRegistry, LocalRegistry};
pub use tri_state::TriState;
