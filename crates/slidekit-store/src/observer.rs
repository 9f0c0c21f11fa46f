//! Store subscription contract.
//!
//! Views never read ambient mutable state: the store notifies every
//! registered subscriber with the latest immutable snapshot after each
//! mutation, and subscribers recompute from that snapshot alone.

use crate::store::StoreState;

/// A subscriber notified after every store mutation
pub trait StoreSubscriber {
    /// Human-readable name, for logging
    fn name(&self) -> &'static str {
        "unnamed"
    }

    /// Called with the post-mutation snapshot
    fn state_changed(&self, state: &StoreState);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Silent;

    impl StoreSubscriber for Silent {
        fn state_changed(&self, _state: &StoreState) {}
    }

    #[test]
    fn test_default_name() {
        assert_eq!(Silent.name(), "unnamed");
    }
}
