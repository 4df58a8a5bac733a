//! Emotion tag entity <-> model mapper

use vent_core::entities::EmotionTag;
use vent_core::value_objects::Snowflake;

use crate::models::EmotionTagModel;

impl From<EmotionTagModel> for EmotionTag {
    fn from(model: EmotionTagModel) -> Self {
        EmotionTag {
            id: Snowflake::new(model.id),
            name: model.name,
        }
    }
}
