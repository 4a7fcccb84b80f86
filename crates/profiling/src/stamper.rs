// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Profiling timestamp stamper
//!
//! # Example
//!
//! ```ignore
//! let stamper = ProfilingStamper::from_env();
//!
//! if stamper.is_profiling_enabled() {
//!     stamper.add_timestamp(&mut meta, "ts_publisher_send");
//! }
//! ```

use crate::clock;
use crate::config::ProfilingConfig;
use crate::envelope::Envelope;
use crate::error::{ProfilingError, ProfilingResult};

/// Writes epoch-microsecond timestamps into message envelopes
///
/// The enabled flag is fixed at construction. The stamper holds no other
/// state, so it is `Copy` and can be shared freely between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProfilingStamper {
    enabled: bool,
}

impl ProfilingStamper {
    /// Create a stamper from an already resolved configuration
    pub fn new(config: ProfilingConfig) -> Self {
        Self {
            enabled: config.enabled,
        }
    }

    /// Create a stamper from the `PROFILING_MODE` environment variable
    ///
    /// Later changes to the environment are not observed.
    pub fn from_env() -> Self {
        Self::new(ProfilingConfig::from_env())
    }

    /// Whether profiling was enabled at construction
    pub fn is_profiling_enabled(&self) -> bool {
        self.enabled
    }

    /// Stamp the current time into `envelope` under `key`
    ///
    /// Failures are logged at error level and swallowed; profiling must not
    /// break the pipeline it observes. This does not consult the enabled
    /// flag, see [`stamp_if_enabled`](Self::stamp_if_enabled).
    pub fn add_timestamp<E>(&self, envelope: &mut E, key: &str)
    where
        E: Envelope + ?Sized,
    {
        if let Err(err) = self.try_add_timestamp(envelope, key) {
            tracing::error!("{}", err);
        }
    }

    /// Stamp the current time into `envelope` under `key`, reporting failures
    ///
    /// Returns the timestamp that was stored.
    pub fn try_add_timestamp<E>(&self, envelope: &mut E, key: &str) -> ProfilingResult<i64>
    where
        E: Envelope + ?Sized,
    {
        if key.is_empty() {
            return Err(ProfilingError::InsertionFailed {
                key: String::new(),
                reason: "key must not be empty".to_string(),
            });
        }

        let now = clock::current_epoch_micros();

        let body = envelope
            .new_integer(now)
            .map_err(|err| ProfilingError::ValueConstructionFailed(err.to_string()))?;

        envelope
            .put(key, body)
            .map_err(|err| ProfilingError::InsertionFailed {
                key: key.to_string(),
                reason: err.to_string(),
            })?;

        Ok(now)
    }

    /// Stamp only when profiling is enabled
    ///
    /// Returns `true` if a stamp was attempted.
    pub fn stamp_if_enabled<E>(&self, envelope: &mut E, key: &str) -> bool
    where
        E: Envelope + ?Sized,
    {
        if !self.enabled {
            return false;
        }
        self.add_timestamp(envelope, key);
        true
    }

    /// Current wall-clock time in epoch microseconds
    pub fn current_epoch_micros(&self) -> i64 {
        clock::current_epoch_micros()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::{ElemBody, EnvelopeError, MsgEnvelope};

    /// Envelope that refuses every put
    struct ReadOnlyEnvelope;

    impl Envelope for ReadOnlyEnvelope {
        type Body = i64;

        fn new_integer(&self, value: i64) -> Result<i64, EnvelopeError> {
            Ok(value)
        }

        fn put(&mut self, key: &str, _body: i64) -> Result<(), EnvelopeError> {
            Err(EnvelopeError::Rejected {
                key: key.to_string(),
                reason: "read-only".to_string(),
            })
        }
    }

    #[test]
    fn test_enabled_flag_follows_config() {
        assert!(ProfilingStamper::new(ProfilingConfig::new(true)).is_profiling_enabled());
        assert!(!ProfilingStamper::new(ProfilingConfig::new(false)).is_profiling_enabled());
        assert!(!ProfilingStamper::default().is_profiling_enabled());
    }

    #[test]
    fn test_try_add_timestamp_returns_stored_value() {
        let stamper = ProfilingStamper::new(ProfilingConfig::new(true));
        let mut envelope = MsgEnvelope::new();

        let stamped = stamper.try_add_timestamp(&mut envelope, "ts_key").unwrap();

        assert_eq!(envelope.get("ts_key"), Some(&ElemBody::Integer(stamped)));
    }

    #[test]
    fn test_try_add_timestamp_insertion_failure() {
        let stamper = ProfilingStamper::default();
        let err = stamper
            .try_add_timestamp(&mut ReadOnlyEnvelope, "ts_key")
            .unwrap_err();

        match err {
            ProfilingError::InsertionFailed { key, reason } => {
                assert_eq!(key, "ts_key");
                assert!(reason.contains("read-only"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_key_is_rejected_before_insert() {
        let stamper = ProfilingStamper::default();
        let mut envelope = MsgEnvelope::new();

        let err = stamper.try_add_timestamp(&mut envelope, "").unwrap_err();

        assert!(matches!(err, ProfilingError::InsertionFailed { .. }));
        assert!(envelope.is_empty());
    }

    #[test]
    fn test_stamp_if_enabled() {
        let mut envelope = MsgEnvelope::new();

        let disabled = ProfilingStamper::new(ProfilingConfig::new(false));
        assert!(!disabled.stamp_if_enabled(&mut envelope, "ts"));
        assert!(envelope.is_empty());

        let enabled = ProfilingStamper::new(ProfilingConfig::new(true));
        assert!(enabled.stamp_if_enabled(&mut envelope, "ts"));
        assert!(envelope.get_integer("ts").is_some());
    }

    #[test]
    fn test_add_timestamp_through_trait_object() {
        let stamper = ProfilingStamper::default();
        let mut envelope = MsgEnvelope::new();
        let dynamic: &mut dyn Envelope<Body = ElemBody> = &mut envelope;

        stamper.add_timestamp(dynamic, "ts");

        assert!(envelope.get_integer("ts").is_some());
    }
}
