//! Seed the emotion_tags table from the static catalog
//!
//! Runs at startup. Inserts are keyed on the unique name, so a second run
//! against an already-seeded database is a no-op.

use tracing::{info, instrument};

use vent_core::entities::{EmotionTag, EMOTION_CATALOG};
use vent_core::traits::{EmotionTagRepository, RepoResult};
use vent_core::value_objects::SnowflakeGenerator;

/// Insert any catalog tags missing from the database
#[instrument(skip_all)]
pub async fn seed_emotion_tags(
    repository: &dyn EmotionTagRepository,
    generator: &SnowflakeGenerator,
) -> RepoResult<()> {
    let existing = repository.find_all().await?;

    let missing: Vec<EmotionTag> = EMOTION_CATALOG
        .iter()
        .filter(|entry| !existing.iter().any(|tag| tag.name == entry.name))
        .map(|entry| EmotionTag::new(generator.generate(), entry.name))
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    info!(count = missing.len(), "seeding emotion tags");
    repository.seed(&missing).await?;

    Ok(())
}
