// Copyright (C) 2015-2025 The Neo Project.
//
// time_provider.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Time source abstraction for nonce generation.
//!
//! Transaction nonces are derived from the wall clock. Builders hold an
//! `Arc<dyn TimeSource>` so tests can pin the clock and get byte-identical
//! transactions.
//!
//! ```rust
//! use ont_core::{FixedTimeSource, TimeSource};
//!
//! let clock = FixedTimeSource::from_unix_seconds(1_600_000_000);
//! assert_eq!(clock.nonce(), 1_600_000_000);
//! ```

use chrono::{DateTime, TimeZone, Utc};

/// Trait implemented by concrete time sources.
pub trait TimeSource: Send + Sync {
    /// Returns the current UTC time.
    fn utc_now(&self) -> DateTime<Utc>;

    /// Seconds since the Unix epoch truncated to 32 bits.
    fn nonce(&self) -> u32 {
        self.utc_now().timestamp() as u32
    }
}

/// Default system-backed time source.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn utc_now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTimeSource(DateTime<Utc>);

impl FixedTimeSource {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// Falls back to the epoch when `seconds` is out of chrono's range.
    pub fn from_unix_seconds(seconds: i64) -> Self {
        let instant = Utc.timestamp_opt(seconds, 0).single().unwrap_or_default();
        Self(instant)
    }
}

impl TimeSource for FixedTimeSource {
    fn utc_now(&self) -> DateTime<Utc> {
        self.0
    }
}
