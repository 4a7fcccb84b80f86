// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Profiling Configuration
//!
//! Profiling has exactly one knob: whether it is on. The value is resolved
//! once by the composition root and handed to [`ProfilingStamper`] so that
//! the stamper itself never reads process state.
//!
//! ## Sources
//!
//! - `PROFILING_MODE` environment variable ([`ProfilingConfig::from_env`])
//! - explicit value ([`ProfilingConfig::new`])
//!
//! [`ProfilingStamper`]: crate::ProfilingStamper

/// Environment variable controlling profiling mode
pub const PROFILING_MODE_ENV: &str = "PROFILING_MODE";

/// Profiling configuration
///
/// Disabled by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProfilingConfig {
    /// Whether timestamps should be stamped into envelopes
    pub enabled: bool,
}

impl ProfilingConfig {
    /// Create a configuration with an explicit flag
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Read `PROFILING_MODE` from the process environment
    ///
    /// An unset variable, or one that is not valid Unicode, disables profiling.
    pub fn from_env() -> Self {
        let raw = std::env::var(PROFILING_MODE_ENV).ok();
        let config = Self::from_env_value(raw.as_deref());

        tracing::debug!(
            env = PROFILING_MODE_ENV,
            value = ?raw,
            enabled = config.enabled,
            "Resolved profiling mode"
        );

        config
    }

    /// Interpret a raw `PROFILING_MODE` value
    ///
    /// Only `"true"` in any ASCII casing enables profiling. Surrounding
    /// whitespace is not stripped.
    pub fn from_env_value(value: Option<&str>) -> Self {
        let enabled = value.is_some_and(|v| v.eq_ignore_ascii_case("true"));
        Self { enabled }
    }
}
