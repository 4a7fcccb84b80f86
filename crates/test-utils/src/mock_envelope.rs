// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Mock envelope implementation for testing
//!
//! Stores integers in a map and can be told to fail element construction or
//! reject specific keys.

use msgbus_profiling::{Envelope, EnvelopeError};
use std::collections::{HashMap, HashSet};

/// In-memory mock envelope for testing
#[derive(Debug, Clone, Default)]
pub struct MockEnvelope {
    entries: HashMap<String, i64>,
    rejected_keys: HashSet<String>,
    reject_all: bool,
    fail_construction: bool,
    put_calls: usize,
}

impl MockEnvelope {
    /// Create a mock that accepts everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a mock with injected failures
    pub fn builder() -> MockEnvelopeBuilder {
        MockEnvelopeBuilder::default()
    }

    pub fn get(&self, key: &str) -> Option<i64> {
        self.entries.get(key).copied()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of times `put` was invoked, successful or not
    pub fn put_calls(&self) -> usize {
        self.put_calls
    }
}

impl Envelope for MockEnvelope {
    type Body = i64;

    fn new_integer(&self, value: i64) -> Result<i64, EnvelopeError> {
        if self.fail_construction {
            return Err(EnvelopeError::ElementCreation(
                "mock element allocation failed".to_string(),
            ));
        }
        Ok(value)
    }

    fn put(&mut self, key: &str, body: i64) -> Result<(), EnvelopeError> {
        self.put_calls += 1;

        if self.reject_all || self.rejected_keys.contains(key) {
            return Err(EnvelopeError::Rejected {
                key: key.to_string(),
                reason: "mock rejected key".to_string(),
            });
        }

        self.entries.insert(key.to_string(), body);
        Ok(())
    }
}

/// Builder for [`MockEnvelope`]
#[derive(Debug, Default)]
pub struct MockEnvelopeBuilder {
    mock: MockEnvelope,
}

impl MockEnvelopeBuilder {
    /// Reject puts for this key
    pub fn reject_key(mut self, key: impl Into<String>) -> Self {
        self.mock.rejected_keys.insert(key.into());
        self
    }

    /// Reject every put
    pub fn reject_all(mut self) -> Self {
        self.mock.reject_all = true;
        self
    }

    /// Fail integer element construction
    pub fn fail_construction(mut self) -> Self {
        self.mock.fail_construction = true;
        self
    }

    /// Pre-populate an entry
    pub fn with_entry(mut self, key: impl Into<String>, value: i64) -> Self {
        self.mock.entries.insert(key.into(), value);
        self
    }

    pub fn build(self) -> MockEnvelope {
        self.mock
    }
}
