// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Reads of the real `PROFILING_MODE` variable
//!
//! Kept to a single test so nothing else in this binary races on the
//! process environment.

use msgbus_profiling::{PROFILING_MODE_ENV, ProfilingConfig, ProfilingStamper};

#[test]
fn test_profiling_mode_from_environment() {
    // SAFETY: the only test in this binary, no other thread touches the environment
    unsafe { std::env::remove_var(PROFILING_MODE_ENV) };
    let stamper = ProfilingStamper::from_env();
    assert!(!stamper.is_profiling_enabled());

    unsafe { std::env::set_var(PROFILING_MODE_ENV, "TRUE") };
    assert!(ProfilingConfig::from_env().enabled);
    let stamper = ProfilingStamper::from_env();
    assert!(stamper.is_profiling_enabled());

    // The flag is captured at construction
    unsafe { std::env::set_var(PROFILING_MODE_ENV, "false") };
    assert!(stamper.is_profiling_enabled());
    assert!(!ProfilingStamper::from_env().is_profiling_enabled());

    // Values that are not valid Unicode read as unset
    #[cfg(unix)]
    {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        unsafe { std::env::set_var(PROFILING_MODE_ENV, OsStr::from_bytes(b"tru\xff")) };
        assert!(!ProfilingStamper::from_env().is_profiling_enabled());
        assert_eq!(ProfilingConfig::from_env(), ProfilingConfig::default());
    }

    unsafe { std::env::remove_var(PROFILING_MODE_ENV) };
}
