//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod context;
pub mod day_window;
pub mod emotion_tag;
pub mod error;
pub mod notification;
pub mod post;
pub mod stamp;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use emotion_tag::EmotionTagService;
pub use error::{ServiceError, ServiceResult};
pub use notification::NotificationService;
pub use post::PostService;
pub use stamp::StampService;
