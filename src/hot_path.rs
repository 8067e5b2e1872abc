//! Opt-in marker for latency-sensitive event slots
//!
//! Some event slots fire once per frame inside the host's render or tick
//! loop. Registration functions for those slots take a [`MustRunQuick`]
//! token as their first argument, so every call site carries an explicit
//! acknowledgment that the callback runs on a hot path and must finish in as
//! little time as possible.

/// Call-site acknowledgment that a callback subscribes to a hot event slot.
///
/// Zero-sized and free to copy; the only way to obtain one is
/// [`MustRunQuick::acknowledge`], which is the acknowledgment itself:
///
/// ```
/// use modwrap::MustRunQuick;
///
/// let hot = MustRunQuick::acknowledge();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MustRunQuick(());

impl MustRunQuick {
    /// Acknowledge that the registered callback runs in a tight loop.
    pub const fn acknowledge() -> Self {
        MustRunQuick(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_zero_sized() {
        assert_eq!(std::mem::size_of::<MustRunQuick>(), 0);
        let _ = MustRunQuick::acknowledge();
    }
}
