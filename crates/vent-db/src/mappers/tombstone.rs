//! Tombstone entity <-> model mapper

use vent_core::entities::DeletedPost;
use vent_core::value_objects::{ClientIdentity, Snowflake};

use crate::models::DeletedPostModel;

impl From<DeletedPostModel> for DeletedPost {
    fn from(model: DeletedPostModel) -> Self {
        DeletedPost {
            id: Snowflake::new(model.id),
            author_identity: ClientIdentity::new_unchecked(model.author_identity),
            deleted_at: model.deleted_at,
        }
    }
}
