//! Core types for email input and extraction results

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

/// Last id handed out by [`ProcessedEmail::new`] in this process
static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Millisecond timestamp, bumped past any id already issued
fn next_id(millis: i64) -> i64 {
    let bump = |last: i64| last.max(millis - 1) + 1;
    match LAST_ID.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| Some(bump(last))) {
        Ok(last) | Err(last) => bump(last),
    }
}

/// A normalized email ready for extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailInput {
    /// Subject line
    pub subject: String,

    /// Body text
    pub body: String,
}

impl EmailInput {
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Build an input from manually entered fields.
    ///
    /// Both fields must contain something other than whitespace. The
    /// values are kept as entered.
    pub fn from_form(subject: impl Into<String>, body: impl Into<String>) -> Result<Self> {
        let input = Self::new(subject, body);

        if input.subject.trim().is_empty() {
            return Err(Error::MissingField("subject".into()));
        }
        if input.body.trim().is_empty() {
            return Err(Error::MissingField("body".into()));
        }

        Ok(input)
    }
}

/// Structured content extracted from one email
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Sentences mentioning an importance keyword
    pub important_phrases: Vec<String>,

    /// Sentences phrased as requests or tasks
    pub action_items: Vec<String>,

    /// Mid-length informative sentences not listed above
    pub key_points: Vec<String>,

    /// Overall tone of subject and body
    pub sentiment: Sentiment,
}

impl ExtractionResult {
    /// Check if no sentence was selected in any category
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.important_phrases.is_empty()
            && self.action_items.is_empty()
            && self.key_points.is_empty()
    }
}

/// Coarse sentiment label
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl Sentiment {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An email together with its extraction, as kept in the record store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedEmail {
    /// Creation time in Unix milliseconds
    pub id: String,

    pub original_subject: String,

    pub original_body: String,

    pub extracted_content: ExtractionResult,

    pub created_at: DateTime<Utc>,
}

impl ProcessedEmail {
    /// Stamp an extraction with a unique id and the current time.
    ///
    /// Ids are Unix milliseconds, incremented when several records are
    /// created within the same millisecond.
    #[must_use]
    pub fn new(input: EmailInput, extracted_content: ExtractionResult) -> Self {
        let created_at = Utc::now();
        let mut email = Self::at(input, extracted_content, created_at);
        email.id = next_id(created_at.timestamp_millis()).to_string();
        email
    }

    /// Same as [`ProcessedEmail::new`] with an explicit timestamp; the id
    /// is exactly its Unix milliseconds
    #[must_use]
    pub fn at(
        input: EmailInput,
        extracted_content: ExtractionResult,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: created_at.timestamp_millis().to_string(),
            original_subject: input.subject,
            original_body: input.body,
            extracted_content,
            created_at,
        }
    }

    /// The id as a number, if it is one
    #[must_use]
    pub fn numeric_id(&self) -> Option<i64> {
        self.id.parse().ok()
    }
}

impl fmt::Display for ProcessedEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({})",
            self.created_at.format("%Y-%m-%d %H:%M:%S"),
            self.original_subject,
            self.extracted_content.sentiment
        )
    }
}
