//! Audio book structure: chapters embedding topics.
//!
//! An audio book stores its chapters as a single JSON document. Each
//! chapter holds an ordered list of topics, and each topic points at one
//! playable audio file.

use serde::{Deserialize, Serialize};

use crate::content::{validate_url, MAX_TITLE_LEN};
use crate::error::CoreError;

/// Maximum number of chapters in a single audio book.
pub const MAX_CHAPTERS: usize = 200;

/// Maximum number of topics in a single chapter.
pub const MAX_TOPICS_PER_CHAPTER: usize = 100;

/// A chapter of an audio book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioChapter {
    pub title: String,
    #[serde(default)]
    pub topics: Vec<AudioTopic>,
}

/// A single playable topic inside a chapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioTopic {
    pub title: String,
    pub audio_url: String,
    #[serde(default)]
    pub duration_secs: i32,
}

/// Validate the full chapter tree of an audio book.
///
/// Errors name the offending chapter / topic by 1-based position.
pub fn validate_chapters(chapters: &[AudioChapter]) -> Result<(), CoreError> {
    if chapters.len() > MAX_CHAPTERS {
        return Err(CoreError::Validation(format!(
            "An audio book may have at most {MAX_CHAPTERS} chapters"
        )));
    }

    for (ci, chapter) in chapters.iter().enumerate() {
        let cn = ci + 1;
        if chapter.title.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "Chapter {cn}: title must not be empty"
            )));
        }
        if chapter.title.chars().count() > MAX_TITLE_LEN {
            return Err(CoreError::Validation(format!(
                "Chapter {cn}: title must be at most {MAX_TITLE_LEN} characters"
            )));
        }
        if chapter.topics.len() > MAX_TOPICS_PER_CHAPTER {
            return Err(CoreError::Validation(format!(
                "Chapter {cn}: at most {MAX_TOPICS_PER_CHAPTER} topics allowed"
            )));
        }

        for (ti, topic) in chapter.topics.iter().enumerate() {
            let tn = ti + 1;
            if topic.title.trim().is_empty() {
                return Err(CoreError::Validation(format!(
                    "Chapter {cn}, topic {tn}: title must not be empty"
                )));
            }
            if topic.duration_secs < 0 {
                return Err(CoreError::Validation(format!(
                    "Chapter {cn}, topic {tn}: duration must not be negative"
                )));
            }
            validate_url("audio_url", &topic.audio_url).map_err(|e| match e {
                CoreError::Validation(msg) => {
                    CoreError::Validation(format!("Chapter {cn}, topic {tn}: {msg}"))
                }
                other => other,
            })?;
        }
    }
    Ok(())
}

/// Sum of all topic durations across every chapter, in seconds.
pub fn total_duration_secs(chapters: &[AudioChapter]) -> i64 {
    chapters
        .iter()
        .flat_map(|c| c.topics.iter())
        .map(|t| i64::from(t.duration_secs))
        .sum()
}

/// Total number of topics across every chapter.
pub fn topic_count(chapters: &[AudioChapter]) -> usize {
    chapters.iter().map(|c| c.topics.len()).sum()
}
