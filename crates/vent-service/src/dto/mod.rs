//! Data transfer objects for the API layer

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreatePostRequest, ListPostsParams, SavePushSubscriptionRequest, ToggleStampRequest,
};
pub use responses::{EmotionTagResponse, PostListResponse, PostResponse, StampResponse};
