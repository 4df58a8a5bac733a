//! Entity -> response DTO mappers
//!
//! Responses are viewer-relative: the `mine` flags are computed against the
//! identity making the request.

use vent_core::entities::{EmotionTag, Post, Stamp};
use vent_core::value_objects::ClientIdentity;

use super::responses::{EmotionTagResponse, PostResponse, StampResponse};

impl From<&EmotionTag> for EmotionTagResponse {
    fn from(tag: &EmotionTag) -> Self {
        let rendering = tag.rendering();
        Self {
            id: tag.id.to_string(),
            name: tag.name.clone(),
            emoji: rendering.emoji.to_string(),
            color: rendering.color.to_string(),
        }
    }
}

impl StampResponse {
    pub fn from_entity(stamp: &Stamp, viewer: &ClientIdentity) -> Self {
        Self {
            id: stamp.id.to_string(),
            kind: stamp.kind.clone(),
            native: stamp.native.clone(),
            mine: &stamp.author_identity == viewer,
        }
    }
}

impl PostResponse {
    pub fn from_entity(
        post: &Post,
        tag: &EmotionTag,
        stamps: &[Stamp],
        viewer: &ClientIdentity,
    ) -> Self {
        Self {
            id: post.id.to_string(),
            content: post.content.clone(),
            emotion_tag: EmotionTagResponse::from(tag),
            created_at: post.created_at,
            expires_at: post.expires_at,
            stamps: stamps
                .iter()
                .map(|s| StampResponse::from_entity(s, viewer))
                .collect(),
            mine: post.is_authored_by(viewer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vent_core::value_objects::Snowflake;

    #[test]
    fn test_unknown_tag_renders_as_other() {
        let tag = EmotionTag::new(Snowflake::new(5), "nostalgic");
        let response = EmotionTagResponse::from(&tag);
        assert_eq!(response.name, "nostalgic");
        assert_eq!(response.emoji, "🫥");
        assert_eq!(response.color, "#d1d5db");
    }

    #[test]
    fn test_mine_flags_are_viewer_relative() {
        let author = ClientIdentity::parse("author").unwrap();
        let viewer = ClientIdentity::parse("viewer").unwrap();
        let tag = EmotionTag::new(Snowflake::new(5), "sad");
        let post = Post::new(
            Snowflake::new(1),
            "hello".to_string(),
            tag.id,
            author.clone(),
        );
        let stamp = Stamp::new(
            Snowflake::new(2),
            post.id,
            viewer.clone(),
            "+1".to_string(),
            "👍".to_string(),
        );

        let as_author = PostResponse::from_entity(&post, &tag, std::slice::from_ref(&stamp), &author);
        assert!(as_author.mine);
        assert!(!as_author.stamps[0].mine);

        let as_viewer = PostResponse::from_entity(&post, &tag, std::slice::from_ref(&stamp), &viewer);
        assert!(!as_viewer.mine);
        assert!(as_viewer.stamps[0].mine);
    }
}
