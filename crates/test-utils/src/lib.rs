// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Testing utilities for msgbus-profiling
//!
//! This crate provides:
//! - Mock envelopes with failure injection
//! - In-memory capture of `tracing` output

pub mod log_capture;
pub mod mock_envelope;

// Re-exports for convenience
pub use log_capture::{CapturedLogs, capture_logs};
pub use mock_envelope::{MockEnvelope, MockEnvelopeBuilder};
