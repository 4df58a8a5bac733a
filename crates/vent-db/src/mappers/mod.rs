//! Entity to model mappers
//!
//! Conversions between domain entities (vent-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects

mod emotion_tag;
mod post;
mod push_subscription;
mod stamp;
mod tombstone;
