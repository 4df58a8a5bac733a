//! HTTP request handlers organized by resource

pub mod emotion_tags;
pub mod health;
pub mod identity;
pub mod notifications;
pub mod posts;
pub mod stamps;
