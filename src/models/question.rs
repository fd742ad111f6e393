//! Questions, their tag sets, and the ask-question draft

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Maximum number of tags on one question
pub const MAX_TAGS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub u32);

/// Ordered set of unique tags (case-sensitive), at most `MAX_TAGS`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag after trimming surrounding whitespace
    pub fn add(&mut self, tag: &str) -> Result<(), ValidationError> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(ValidationError::EmptyTag);
        }
        if self.contains(tag) {
            return Err(ValidationError::DuplicateTag(tag.to_string()));
        }
        if self.is_full() {
            return Err(ValidationError::TooManyTags { max: MAX_TAGS });
        }
        self.tags.push(tag.to_string());
        Ok(())
    }

    /// Returns true if the tag was present
    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn is_full(&self) -> bool {
        self.tags.len() >= MAX_TAGS
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

impl TryFrom<Vec<String>> for TagSet {
    type Error = ValidationError;

    fn try_from(tags: Vec<String>) -> Result<Self, Self::Error> {
        let mut set = TagSet::new();
        for tag in &tags {
            set.add(tag)?;
        }
        Ok(set)
    }
}

impl From<TagSet> for Vec<String> {
    fn from(set: TagSet) -> Self {
        set.tags
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(try_from = "QuestionRecord")]
pub struct Question {
    pub id: QuestionId,
    pub title: String,

    /// Marked-up body produced by the composer
    pub description: String,

    /// Between one and `MAX_TAGS` tags
    pub tags: TagSet,

    pub author: String,
    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub view_count: u64,
}

/// Wire shape of a `Question` before the tag-count check
#[derive(Deserialize)]
struct QuestionRecord {
    id: QuestionId,
    title: String,
    description: String,
    tags: TagSet,
    author: String,
    created_at: DateTime<Utc>,
    #[serde(default)]
    view_count: u64,
}

impl TryFrom<QuestionRecord> for Question {
    type Error = ValidationError;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        if record.tags.is_empty() {
            return Err(ValidationError::NoTags);
        }
        Ok(Question {
            id: record.id,
            title: record.title,
            description: record.description,
            tags: record.tags,
            author: record.author,
            created_at: record.created_at,
            view_count: record.view_count,
        })
    }
}

/// Ask-question form contents before submission
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct QuestionDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: TagSet,
}

impl QuestionDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::MissingDescription);
        }
        if self.tags.is_empty() {
            return Err(ValidationError::NoTags);
        }
        Ok(())
    }

    pub fn into_question(
        self,
        id: QuestionId,
        author: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Question, ValidationError> {
        self.validate()?;
        Ok(Question {
            id,
            title: self.title,
            description: self.description,
            tags: self.tags,
            author: author.into(),
            created_at,
            view_count: 0,
        })
    }
}
