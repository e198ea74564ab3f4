//! # Ledger Configuration
//!
//! Construction-time settings for a [`LedgerActor`](crate::LedgerActor) and the
//! [`Ledger`](crate::Ledger) it owns. Log verbosity is not configured here; it comes from
//! `RUST_LOG` (see [`setup_tracing`](crate::tracing::setup_tracing)).

use serde::{Deserialize, Serialize};

pub const DEFAULT_BUFFER_SIZE: usize = 32;

/// How a ledger picks the id of a newly added entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdPolicy {
    /// `len() + 1` at creation time.
    ///
    /// Collision-free only because removal always takes the highest id, which keeps the
    /// key set equal to `1..=len()`.
    #[default]
    EntryCount,
    /// A counter that only ever grows, independent of removals.
    Monotonic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Capacity of the request channel between clients and the actor.
    pub buffer_size: usize,
    pub id_policy: IdPolicy,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            id_policy: IdPolicy::default(),
        }
    }
}

impl LedgerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        // tokio's mpsc panics on a zero capacity
        self.buffer_size = buffer_size.max(1);
        self
    }

    /// Capacity actually used for the request channel; never zero, whatever was configured
    /// or deserialized.
    pub fn channel_capacity(&self) -> usize {
        self.buffer_size.max(1)
    }

    pub fn with_id_policy(mut self, id_policy: IdPolicy) -> Self {
        self.id_policy = id_policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_entry_count_ids() {
        let config = LedgerConfig::default();
        assert_eq!(config.buffer_size, DEFAULT_BUFFER_SIZE);
        assert_eq!(config.id_policy, IdPolicy::EntryCount);
    }

    #[test]
    fn zero_buffer_is_clamped() {
        let config = LedgerConfig::new().with_buffer_size(0);
        assert_eq!(config.buffer_size, 1);
    }

    #[test]
    fn zero_buffer_field_still_yields_a_usable_capacity() {
        let config = LedgerConfig {
            buffer_size: 0,
            id_policy: IdPolicy::EntryCount,
        };
        assert_eq!(config.channel_capacity(), 1);
        assert_eq!(LedgerConfig::default().channel_capacity(), DEFAULT_BUFFER_SIZE);
    }
}
