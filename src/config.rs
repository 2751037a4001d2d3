//! Extractor configuration: keyword vocabularies and result limits

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const IMPORTANT_KEYWORDS: &[&str] = &[
    "urgent",
    "important",
    "deadline",
    "asap",
    "priority",
    "critical",
    "meeting",
    "call",
    "schedule",
    "appointment",
    "reminder",
    "approve",
    "confirm",
    "verify",
    "review",
    "feedback",
    "budget",
    "cost",
    "payment",
    "invoice",
    "price",
    "project",
    "task",
    "deliverable",
    "milestone",
    "goal",
];

const ACTION_PHRASES: &[&str] = &[
    "need to", "should", "must", "please", "can you", "could you", "schedule", "send", "review",
    "approve", "complete", "finish", "call", "email", "contact", "respond", "reply",
];

const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "perfect",
    "amazing",
    "wonderful",
    "fantastic",
    "awesome",
    "love",
    "like",
    "happy",
    "pleased",
    "satisfied",
    "thank",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "horrible",
    "hate",
    "dislike",
    "angry",
    "frustrated",
    "disappointed",
    "concerned",
    "worried",
    "issue",
    "problem",
    "error",
];

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(ToString::to_string).collect()
}

/// Word lists driving classification and sentiment.
///
/// All entries are matched as case-insensitive substrings, so `"love"`
/// also matches `"lovely"`. Blank entries are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    /// Keywords marking an important phrase
    pub important: Vec<String>,

    /// Phrases marking an action item
    pub actions: Vec<String>,

    /// Words counted toward positive sentiment
    pub positive: Vec<String>,

    /// Words counted toward negative sentiment
    pub negative: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            important: owned(IMPORTANT_KEYWORDS),
            actions: owned(ACTION_PHRASES),
            positive: owned(POSITIVE_WORDS),
            negative: owned(NEGATIVE_WORDS),
        }
    }
}

/// Caps and length bounds applied to extraction results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub max_important_phrases: usize,
    pub max_action_items: usize,
    pub max_key_points: usize,

    /// Exclusive lower bound on key point length, in UTF-16 code units
    pub key_point_min_len: usize,

    /// Exclusive upper bound on key point length, in UTF-16 code units
    pub key_point_max_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_important_phrases: 5,
            max_action_items: 3,
            max_key_points: 4,
            key_point_min_len: 50,
            key_point_max_len: 200,
        }
    }
}

/// Full extractor configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    pub vocabulary: Vocabulary,
    pub limits: Limits,
}

impl ExtractorConfig {
    /// Parse a TOML document; omitted tables and keys keep their defaults
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}
