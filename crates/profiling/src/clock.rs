// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Wall-clock helpers

use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time as microseconds since the Unix epoch
///
/// Never fails, see [`epoch_micros_at`].
pub fn current_epoch_micros() -> i64 {
    epoch_micros_at(SystemTime::now())
}

/// Microseconds between the Unix epoch and `time`
///
/// Times before 1970 yield a negative value, and values outside the `i64`
/// range saturate.
pub fn epoch_micros_at(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(since) => i64::try_from(since.as_micros()).unwrap_or(i64::MAX),
        Err(err) => i64::try_from(err.duration().as_micros())
            .map(|before| -before)
            .unwrap_or(i64::MIN),
    }
}
