// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Message Bus Profiling
//!
//! Stamps microsecond wall-clock timestamps into message envelopes so that
//! latency between pipeline stages can be measured downstream.
//!
//! ## Overview
//!
//! - [`ProfilingConfig`]: the single enabled/disabled flag, usually resolved
//!   from the `PROFILING_MODE` environment variable at startup
//! - [`ProfilingStamper`]: checks the flag and writes timestamps
//! - [`Envelope`]: the seam to whatever key/value message container the
//!   caller owns; [`MsgEnvelope`] is an in-memory implementation
//!
//! Stamping is a side channel. Failures are logged through `tracing` at error
//! level and never reach the caller's data path.
//!
//! ## Usage
//!
//! ```rust
//! use msgbus_profiling::{MsgEnvelope, ProfilingConfig, ProfilingStamper};
//!
//! let stamper = ProfilingStamper::new(ProfilingConfig::new(true));
//! let mut meta = MsgEnvelope::new();
//!
//! if stamper.is_profiling_enabled() {
//!     stamper.add_timestamp(&mut meta, "ts_ingest_entry");
//! }
//!
//! assert!(meta.get_integer("ts_ingest_entry").is_some());
//! ```

pub mod clock;
pub mod config;
pub mod envelope;
pub mod error;
pub mod stamper;

pub use clock::{current_epoch_micros, epoch_micros_at};
pub use config::{PROFILING_MODE_ENV, ProfilingConfig};
pub use envelope::{ElemBody, Envelope, EnvelopeError, MsgEnvelope};
pub use error::{ProfilingError, ProfilingResult};
pub use stamper::ProfilingStamper;
