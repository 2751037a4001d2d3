// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Email Digest
//!
//! Turns a raw email into a structured summary using fixed keyword
//! vocabularies: no language model, just substring matching.
//!
//! # Features
//!
//! - Header-framed (`.eml`) and plain-text file parsing
//! - Important phrase, action item and key point selection
//! - Coarse positive / neutral / negative sentiment
//! - Injectable vocabularies and limits, loadable from TOML
//! - Flat JSON store of processed emails
//!
//! # Example
//!
//! ```rust
//! use email_digest::{Sentiment, parse_email_file, process_email_content};
//!
//! let email = parse_email_file("Subject: Q3\nFrom: a@b.com\n\nWe must finish the report today. It is good news.");
//! let result = process_email_content(&email);
//!
//! assert_eq!(email.subject, "Q3");
//! assert_eq!(result.action_items, vec!["We must finish the report today"]);
//! assert_eq!(result.sentiment, Sentiment::Positive);
//! ```

mod config;
mod error;
mod extractor;
mod ingest;
mod parser;
mod store;
mod types;

pub use config::{ExtractorConfig, Limits, Vocabulary};
pub use error::{Error, Result};
pub use extractor::{ContentExtractor, process_email_content, split_sentences};
pub use ingest::{MAX_FILE_SIZE, read_email_file, read_text};
pub use parser::parse_email_file;
pub use store::EmailStore;
pub use types::*;
