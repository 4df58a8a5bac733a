//! Stamp entity <-> model mapper

use vent_core::entities::Stamp;
use vent_core::value_objects::{ClientIdentity, Snowflake};

use crate::models::StampModel;

impl From<StampModel> for Stamp {
    fn from(model: StampModel) -> Self {
        Stamp {
            id: Snowflake::new(model.id),
            post_id: Snowflake::new(model.post_id),
            author_identity: ClientIdentity::new_unchecked(model.author_identity),
            kind: model.kind,
            native: model.native,
            created_at: model.created_at,
        }
    }
}
