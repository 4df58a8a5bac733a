//! # vent-client
//!
//! Client library for the venting board API.
//!
//! ## Overview
//!
//! - Typed API calls over a [`Transport`] trait (HTTP implementation via
//!   `reqwest`, mockable in tests)
//! - Per-session query cache for post listings
//! - Optimistic stamp toggles: the cached stamp set is flipped before the
//!   server round-trip, reconciled on success, restored from a snapshot on
//!   failure

pub mod cache;
pub mod client;
pub mod error;
pub mod identity;
pub mod models;
pub mod optimistic;
pub mod transport;

pub use cache::{CacheSnapshot, QueryCache, RefetchToken};
pub use client::{ListQuery, VentClient};
pub use error::{ClientError, ClientResult};
pub use models::{EmotionTag, Post, PostPage, SortOrder, Stamp};
pub use optimistic::{ToggleOutcome, ToggleState};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport};
