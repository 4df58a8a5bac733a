//! Snowflake ID - 64-bit unique identifier
//!
//! Structure:
//! - Bits 63-22: Timestamp (milliseconds since custom epoch)
//! - Bits 21-12: Worker ID (0-1023)
//! - Bits 11-0:  Sequence number (0-4095)

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// 64-bit Snowflake ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Snowflake(i64);

impl Snowflake {
    /// Custom epoch: 2025-01-01 00:00:00 UTC (milliseconds)
    pub const EPOCH: i64 = 1_735_689_600_000;

    /// Create a new Snowflake from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Check if the Snowflake is zero (uninitialized)
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Extract timestamp (milliseconds since Unix epoch)
    #[inline]
    pub fn timestamp(&self) -> i64 {
        (self.0 >> 22) + Self::EPOCH
    }

    /// Convert creation timestamp to DateTime<Utc>
    pub fn created_at(&self) -> chrono::DateTime<chrono::Utc> {
        use chrono::{TimeZone, Utc};
        Utc.timestamp_millis_opt(self.timestamp())
            .single()
            .unwrap_or_else(|| Utc.timestamp_millis_opt(0).unwrap())
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, SnowflakeParseError> {
        s.parse::<i64>()
            .map(Snowflake)
            .map_err(|_| SnowflakeParseError::InvalidFormat)
    }
}

/// Error when parsing a Snowflake from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SnowflakeParseError {
    #[error("invalid snowflake format")]
    InvalidFormat,
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Snowflake {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<Snowflake> for i64 {
    fn from(id: Snowflake) -> Self {
        id.0
    }
}

impl std::str::FromStr for Snowflake {
    type Err = SnowflakeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Snowflake::parse(s)
    }
}

// Serialize as string for JSON (JavaScript BigInt safety)
impl Serialize for Snowflake {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

// Deserialize from string or number
impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SnowflakeVisitor;

        impl serde::de::Visitor<'_> for SnowflakeVisitor {
            type Value = Snowflake;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a snowflake id as string or integer")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Snowflake::parse(v).map_err(serde::de::Error::custom)
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Snowflake::new(v))
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Snowflake::new(v as i64))
            }
        }

        deserializer.deserialize_any(SnowflakeVisitor)
    }
}

/// Thread-safe Snowflake ID generator
///
/// Packs the last-used timestamp and sequence into one atomic so concurrent
/// callers never hand out the same id.
#[derive(Debug)]
pub struct SnowflakeGenerator {
    worker_id: u16,
    /// (timestamp << 12) | sequence of the last generated id
    state: AtomicI64,
}

impl SnowflakeGenerator {
    /// Create a new generator for the given worker (0-1023)
    pub fn new(worker_id: u16) -> Self {
        Self {
            worker_id: worker_id & 0x3FF,
            state: AtomicI64::new(0),
        }
    }

    /// Generate the next unique Snowflake
    pub fn generate(&self) -> Snowflake {
        loop {
            let now = Self::current_millis() - Snowflake::EPOCH;
            let prev = self.state.load(Ordering::Acquire);
            let prev_ts = prev >> 12;
            let prev_seq = prev & 0xFFF;

            let (ts, seq) = if now > prev_ts {
                (now, 0)
            } else if prev_seq < 0xFFF {
                (prev_ts, prev_seq + 1)
            } else {
                // Sequence exhausted within this millisecond, spin to the next one
                std::hint::spin_loop();
                continue;
            };

            let next = (ts << 12) | seq;
            if self
                .state
                .compare_exchange(prev, next, Ordering::AcqRel, Ordering::Acquire)
                .is_ok()
            {
                return Snowflake::new((ts << 22) | (i64::from(self.worker_id) << 12) | seq);
            }
        }
    }

    fn current_millis() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_roundtrip_string() {
        let id = Snowflake::new(123_456_789);
        assert_eq!(id.to_string(), "123456789");
        assert_eq!("123456789".parse::<Snowflake>().unwrap(), id);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Snowflake::parse("not-a-number").is_err());
        assert!(Snowflake::parse("").is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let id = Snowflake::new(42);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"42\"");
        let back: Snowflake = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_generator_unique_and_monotonic() {
        let generator = SnowflakeGenerator::new(1);
        let mut seen = HashSet::new();
        let mut last = Snowflake::new(0);
        for _ in 0..10_000 {
            let id = generator.generate();
            assert!(id > last, "ids must be strictly increasing");
            assert!(seen.insert(id));
            last = id;
        }
    }

    #[test]
    fn test_generated_timestamp_is_recent() {
        let generator = SnowflakeGenerator::new(0);
        let id = generator.generate();
        let now = chrono::Utc::now().timestamp_millis();
        assert!((now - id.timestamp()).abs() < 5_000);
    }
}
