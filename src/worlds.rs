//! Cross-dimension entity transfer
//!
//! Thin typed wrapper over the host's teleport utility. The utility moves an
//! entity between server worlds and hands back whatever entity now stands in
//! the destination: usually a fresh copy, sometimes the original (players,
//! or entities already in the target world), sometimes nothing when the
//! transfer could not happen.

use std::any::Any;

use serde::{Deserialize, Serialize};
use tracing::debug;

// =============================================================================
// HOST SEAMS
// =============================================================================

/// A game entity as exposed by the host framework.
pub trait Entity: Any {
    /// Concrete type name, used in transfer mismatch reports.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Borrowing upcast, for inspecting an entity without consuming it.
    ///
    /// Implementations are always the one-liner `{ self }`.
    fn as_any(&self) -> &dyn Any;

    /// Consuming upcast, for runtime type recovery after a transfer.
    ///
    /// Implementations are always the one-liner `{ self }`.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

/// A server-side world that entities can be transferred into.
pub trait ServerWorld: Any {
    /// Stable identifier of the world's dimension (e.g. `"the_nether"`).
    fn dimension_id(&self) -> &str;
}

// =============================================================================
// TELEPORT TARGET
// =============================================================================

/// Destination descriptor for a transfer: position plus facing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TeleportTarget {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Yaw in degrees.
    #[serde(default)]
    pub yaw: f32,
    /// Pitch in degrees.
    #[serde(default)]
    pub pitch: f32,
}

impl TeleportTarget {
    /// Target at the given position, facing straight ahead.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// Same target with an explicit facing.
    pub fn with_rotation(mut self, yaw: f32, pitch: f32) -> Self {
        self.yaw = yaw;
        self.pitch = pitch;
        self
    }
}

// =============================================================================
// TRANSFER UTILITY SEAM
// =============================================================================

/// The host's dimension-transfer utility.
pub trait DimensionTeleporter {
    /// Move `entity` into `target`, optionally at `location`.
    ///
    /// Returns the entity now present in the target world (usually a new
    /// copy of the input), or `None` if the transfer did not happen. With a
    /// `None` location, whether and where the entity is placed is the
    /// host's call.
    fn teleport(
        &self,
        entity: &dyn Entity,
        target: &dyn ServerWorld,
        location: Option<&TeleportTarget>,
    ) -> Option<Box<dyn Entity>>;
}

// =============================================================================
// TYPED WRAPPERS
// =============================================================================

/// Transfer `entity` to `target`, keeping its static type.
///
/// Returns `None` when the utility reports that no transfer occurred. The
/// utility's contract says the returned entity, if any, has the same type as
/// the input; anything else is a defect in the host framework, not a
/// recoverable condition.
///
/// # Panics
///
/// Panics with both type names if the returned entity's runtime type is not
/// `E`.
pub fn teleport<E: Entity>(
    teleporter: &dyn DimensionTeleporter,
    entity: &E,
    target: &dyn ServerWorld,
    location: Option<&TeleportTarget>,
) -> Option<Box<E>> {
    debug!(dimension = target.dimension_id(), "requesting entity transfer");
    let moved = teleporter.teleport(entity, target, location)?;
    let actual = moved.type_name();
    match moved.into_any().downcast::<E>() {
        Ok(same) => Some(same),
        Err(_) => panic!(
            "unexpected teleported entity type: {actual} instead of {}",
            std::any::type_name::<E>()
        ),
    }
}

/// Untyped variant of [`teleport`]: forwards the utility's result as-is and
/// performs no type inspection, leaving narrowing to the caller.
pub fn teleport_dyn(
    teleporter: &dyn DimensionTeleporter,
    entity: &dyn Entity,
    target: &dyn ServerWorld,
    location: Option<&TeleportTarget>,
) -> Option<Box<dyn Entity>> {
    debug!(dimension = target.dimension_id(), "requesting entity transfer");
    teleporter.teleport(entity, target, location)
}
