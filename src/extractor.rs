//! Content extraction: important phrases, action items, key points, sentiment

use crate::config::{ExtractorConfig, Limits};
use crate::types::{EmailInput, ExtractionResult, Sentiment};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static SENTENCE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());

static DEFAULT_EXTRACTOR: LazyLock<ContentExtractor> = LazyLock::new(ContentExtractor::default);

/// Extract structured content using the built-in vocabulary
#[must_use]
pub fn process_email_content(email: &EmailInput) -> ExtractionResult {
    DEFAULT_EXTRACTOR.extract(email)
}

/// Split text into trimmed, non-empty sentences.
///
/// Any run of `.`, `!` or `?` ends a sentence.
#[must_use]
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BREAK
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Keyword-driven extractor.
///
/// Holds only immutable, pre-lowercased word lists, so one instance can be
/// shared freely between threads. Key point length is measured in UTF-16
/// code units.
#[derive(Debug, Clone)]
pub struct ContentExtractor {
    important: Vec<String>,
    actions: Vec<String>,
    positive: Vec<String>,
    negative: Vec<String>,
    limits: Limits,
}

impl Default for ContentExtractor {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

impl ContentExtractor {
    #[must_use]
    pub fn new(config: ExtractorConfig) -> Self {
        let ExtractorConfig { vocabulary, limits } = config;

        Self {
            important: lowercase_all(vocabulary.important),
            actions: lowercase_all(vocabulary.actions),
            positive: lowercase_all(vocabulary.positive),
            negative: lowercase_all(vocabulary.negative),
            limits,
        }
    }

    #[must_use]
    pub const fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Extract important phrases, action items, key points and sentiment.
    ///
    /// Important phrases and action items are chosen independently from
    /// the full sentence list, so a sentence may appear in both. Key
    /// points skip anything already present in either of those lists.
    #[must_use]
    pub fn extract(&self, email: &EmailInput) -> ExtractionResult {
        let sentences = split_sentences(&email.body);
        let lowered: Vec<String> = sentences.iter().map(|s| s.to_lowercase()).collect();

        let important_phrases = select_matching(
            &sentences,
            &lowered,
            &self.important,
            self.limits.max_important_phrases,
        );
        let action_items = select_matching(
            &sentences,
            &lowered,
            &self.actions,
            self.limits.max_action_items,
        );
        let key_points = self.select_key_points(&sentences, &important_phrases, &action_items);
        let sentiment = self.sentiment(&email.subject, &email.body);

        debug!(
            "Extracted {} phrases, {} actions, {} key points from {} sentences ({})",
            important_phrases.len(),
            action_items.len(),
            key_points.len(),
            sentences.len(),
            sentiment
        );

        ExtractionResult {
            important_phrases,
            action_items,
            key_points,
            sentiment,
        }
    }

    fn select_key_points(
        &self,
        sentences: &[&str],
        important_phrases: &[String],
        action_items: &[String],
    ) -> Vec<String> {
        let Limits {
            key_point_min_len: min,
            key_point_max_len: max,
            ..
        } = self.limits;

        sentences
            .iter()
            .filter(|&&sentence| {
                let len = sentence.encode_utf16().count();
                len > min
                    && len < max
                    && !important_phrases.iter().any(|p| p == sentence)
                    && !action_items.iter().any(|a| a == sentence)
            })
            .take(self.limits.max_key_points)
            .map(ToString::to_string)
            .collect()
    }

    /// Compare positive and negative word occurrences in subject and body.
    ///
    /// Occurrences are raw substring counts; ties resolve to neutral.
    #[must_use]
    pub fn sentiment(&self, subject: &str, body: &str) -> Sentiment {
        let text = format!("{subject} {body}").to_lowercase();

        let positive = count_occurrences(&text, &self.positive);
        let negative = count_occurrences(&text, &self.negative);

        match positive.cmp(&negative) {
            std::cmp::Ordering::Greater => Sentiment::Positive,
            std::cmp::Ordering::Less => Sentiment::Negative,
            std::cmp::Ordering::Equal => Sentiment::Neutral,
        }
    }
}

/// Lowercase every word, dropping blank ones that would match anything
fn lowercase_all(words: Vec<String>) -> Vec<String> {
    words
        .into_iter()
        .filter(|w| !w.trim().is_empty())
        .map(|w| w.to_lowercase())
        .collect()
}

fn select_matching(
    sentences: &[&str],
    lowered: &[String],
    keywords: &[String],
    limit: usize,
) -> Vec<String> {
    sentences
        .iter()
        .zip(lowered)
        .filter(|(_, lower)| keywords.iter().any(|k| lower.contains(k.as_str())))
        .take(limit)
        .map(|(sentence, _)| (*sentence).to_string())
        .collect()
}

fn count_occurrences(text: &str, words: &[String]) -> usize {
    words.iter().map(|w| text.matches(w.as_str()).count()).sum()
}
