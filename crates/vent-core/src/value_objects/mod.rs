//! Value objects - immutable domain primitives

pub mod identity;
pub mod snowflake;

pub use identity::{ClientIdentity, IdentityParseError};
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
