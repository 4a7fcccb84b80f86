// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Message Envelope Abstraction
//!
//! The stamper does not own message storage. It only needs two things from
//! whatever container carries a message's meta-data:
//!
//! 1. build an integer element from an `i64`
//! 2. store an element under a string key
//!
//! [`Envelope`] captures exactly that. [`MsgEnvelope`] is an in-memory
//! implementation backed by an ordered map, suitable for tools and tests.
//!
//! ## Implementing the Envelope Trait
//!
//! ```rust,ignore
//! use msgbus_profiling::{Envelope, EnvelopeError};
//!
//! struct BusMeta { /* handle into the transport's envelope */ }
//!
//! impl Envelope for BusMeta {
//!     type Body = BusElem;
//!
//!     fn new_integer(&self, value: i64) -> Result<BusElem, EnvelopeError> {
//!         BusElem::integer(value).ok_or_else(|| EnvelopeError::ElementCreation("out of memory".into()))
//!     }
//!
//!     fn put(&mut self, key: &str, body: BusElem) -> Result<(), EnvelopeError> {
//!         // forward to the transport
//!     }
//! }
//! ```

use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors reported by an [`Envelope`] implementation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnvelopeError {
    /// Building an element failed
    #[error("Failed to create envelope element: {0}")]
    ElementCreation(String),

    /// The envelope rejected a put
    #[error("Envelope rejected key '{key}': {reason}")]
    Rejected { key: String, reason: String },
}

/// Key/value message container the stamper writes into
pub trait Envelope {
    /// Element type stored in the envelope
    type Body;

    /// Build an integer element
    fn new_integer(&self, value: i64) -> Result<Self::Body, EnvelopeError>;

    /// Store `body` under `key`
    ///
    /// Whether an existing key is overwritten or rejected is up to the
    /// implementation.
    fn put(&mut self, key: &str, body: Self::Body) -> Result<(), EnvelopeError>;
}

/// Element of a [`MsgEnvelope`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ElemBody {
    Integer(i64),
    Floating(f64),
    String(String),
    Boolean(bool),
}

impl ElemBody {
    /// Get the integer payload, if this is an integer element
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ElemBody::Integer(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<i64> for ElemBody {
    fn from(value: i64) -> Self {
        ElemBody::Integer(value)
    }
}

impl From<f64> for ElemBody {
    fn from(value: f64) -> Self {
        ElemBody::Floating(value)
    }
}

impl From<bool> for ElemBody {
    fn from(value: bool) -> Self {
        ElemBody::Boolean(value)
    }
}

impl From<&str> for ElemBody {
    fn from(value: &str) -> Self {
        ElemBody::String(value.to_string())
    }
}

impl From<String> for ElemBody {
    fn from(value: String) -> Self {
        ElemBody::String(value)
    }
}

/// In-memory message envelope
///
/// Keys are kept in sorted order so JSON dumps are stable. `put` overwrites.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MsgEnvelope {
    elements: BTreeMap<String, ElemBody>,
}

impl MsgEnvelope {
    /// Create an empty envelope
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element, builder style
    pub fn with(mut self, key: impl Into<String>, body: impl Into<ElemBody>) -> Self {
        self.elements.insert(key.into(), body.into());
        self
    }

    /// Look up an element
    pub fn get(&self, key: &str) -> Option<&ElemBody> {
        self.elements.get(key)
    }

    /// Look up an integer element
    pub fn get_integer(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(ElemBody::as_integer)
    }

    /// Remove an element, returning it
    pub fn remove(&mut self, key: &str) -> Option<ElemBody> {
        self.elements.remove(key)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.elements.keys().map(String::as_str)
    }

    /// Serialize the envelope as a JSON object
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Envelope for MsgEnvelope {
    type Body = ElemBody;

    fn new_integer(&self, value: i64) -> Result<ElemBody, EnvelopeError> {
        Ok(ElemBody::Integer(value))
    }

    fn put(&mut self, key: &str, body: ElemBody) -> Result<(), EnvelopeError> {
        self.elements.insert(key.to_string(), body);
        Ok(())
    }
}
