//! Post entity <-> model mapper

use vent_core::entities::Post;
use vent_core::value_objects::{ClientIdentity, Snowflake};

use crate::models::PostModel;

impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: Snowflake::new(model.id),
            content: model.content,
            emotion_tag_id: Snowflake::new(model.emotion_tag_id),
            author_identity: ClientIdentity::new_unchecked(model.author_identity),
            created_at: model.created_at,
            expires_at: model.expires_at,
        }
    }
}
