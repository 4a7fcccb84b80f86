// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Error types for profiling operations

use thiserror::Error;

/// Result type alias for profiling operations
pub type ProfilingResult<T> = Result<T, ProfilingError>;

/// Errors that can occur while stamping a timestamp into an envelope
///
/// These never escape [`ProfilingStamper::add_timestamp`]; they are logged
/// there and dropped.
///
/// [`ProfilingStamper::add_timestamp`]: crate::ProfilingStamper::add_timestamp
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProfilingError {
    /// The envelope could not build an integer element for the timestamp
    #[error("Failed to create profiling timestamp element: {0}")]
    ValueConstructionFailed(String),

    /// The envelope refused to store the timestamp
    #[error("Failed to wrap timestamp into meta-data envelope under '{key}': {reason}")]
    InsertionFailed { key: String, reason: String },
}
