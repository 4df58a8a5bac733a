//! Emotion tag database model

use sqlx::FromRow;

/// Database model for the emotion_tags table
#[derive(Debug, Clone, FromRow)]
pub struct EmotionTagModel {
    pub id: i64,
    pub name: String,
}
