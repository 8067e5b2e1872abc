//! Three-valued decision returned by gating callbacks
//!
//! `allow_*` event slots poll their subscribers for a [`TriState`]: an
//! explicit verdict, or a pass-through that defers to later subscribers and
//! finally to the host's default behavior.

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

/// Outcome of a gating (`allow_*`) callback.
///
/// The discriminants match the signed-byte encoding host frameworks use when
/// passing tri-states across FFI: `TriState::try_from(-1i8)` etc.
#[repr(i8)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    TryFromPrimitive,
    IntoPrimitive,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TriState {
    /// Explicitly block the action.
    Deny = -1,
    /// No opinion, fall through to the next subscriber.
    Default = 0,
    /// Explicitly allow the action.
    Allow = 1,
}

impl TriState {
    /// The verdict carried by this value, or `None` for [`TriState::Default`].
    pub fn decided(self) -> Option<bool> {
        match self {
            TriState::Allow => Some(true),
            TriState::Deny => Some(false),
            TriState::Default => None,
        }
    }

    /// Resolve to a bool, substituting `fallback` for [`TriState::Default`].
    pub fn to_bool(self, fallback: bool) -> bool {
        self.decided().unwrap_or(fallback)
    }
}

impl From<bool> for TriState {
    fn from(allowed: bool) -> Self {
        if allowed {
            TriState::Allow
        } else {
            TriState::Deny
        }
    }
}

impl From<Option<bool>> for TriState {
    fn from(verdict: Option<bool>) -> Self {
        match verdict {
            Some(allowed) => allowed.into(),
            None => TriState::Default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decided() {
        assert_eq!(TriState::Allow.decided(), Some(true));
        assert_eq!(TriState::Deny.decided(), Some(false));
        assert_eq!(TriState::Default.decided(), None);
    }

    #[test]
    fn test_to_bool_fallback_only_for_default() {
        assert!(TriState::Allow.to_bool(false));
        assert!(!TriState::Deny.to_bool(true));
        assert!(TriState::Default.to_bool(true));
        assert!(!TriState::Default.to_bool(false));
    }

    #[test]
    fn test_from_bool_and_option() {
        assert_eq!(TriState::from(true), TriState::Allow);
        assert_eq!(TriState::from(false), TriState::Deny);
        assert_eq!(TriState::from(Some(true)), TriState::Allow);
        assert_eq!(TriState::from(None), TriState::Default);
    }

    #[test]
    fn test_signed_byte_encoding() {
        assert_eq!(TriState::try_from(-1i8).unwrap(), TriState::Deny);
        assert_eq!(TriState::try_from(0i8).unwrap(), TriState::Default);
        assert_eq!(TriState::try_from(1i8).unwrap(), TriState::Allow);
        assert!(TriState::try_from(2i8).is_err());
        assert_eq!(i8::from(TriState::Deny), -1);
    }

    #[test]
    fn test_serde_lowercase_names() {
        assert_eq!(serde_json::to_string(&TriState::Allow).unwrap(), "\"allow\"");
        assert_eq!(
            serde_json::from_str::<TriState>("\"default\"").unwrap(),
            TriState::Default
        );
    }
}
