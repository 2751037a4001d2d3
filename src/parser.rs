//! Email file parser: raw text into subject and body

use crate::types::EmailInput;
use tracing::debug;

const SUBJECT_HEADER: &str = "Subject:";
const FROM_HEADER: &str = "From:";

/// Lines scanned for a subject in plain text content
const SUBJECT_SCAN_LINES: usize = 5;

const DEFAULT_HEADER_SUBJECT: &str = "No Subject";
const DEFAULT_HEADER_BODY: &str = "No content found";
const DEFAULT_PLAIN_SUBJECT: &str = "Uploaded Email";

/// Parse uploaded file content into a normalized [`EmailInput`].
///
/// Content containing both a `Subject:` and a `From:` marker is read as a
/// header block followed by a body; anything else is treated as plain
/// text whose first non-blank line is the subject. Never fails: missing
/// parts are replaced by placeholder text.
#[must_use]
pub fn parse_email_file(content: &str) -> EmailInput {
    let email = if is_header_framed(content) {
        parse_header_framed(content)
    } else {
        parse_plain_text(content)
    };

    debug!(
        "Parsed email file: {:?} ({} body chars)",
        email.subject,
        email.body.chars().count()
    );

    email
}

fn is_header_framed(content: &str) -> bool {
    content.contains(SUBJECT_HEADER) && content.contains(FROM_HEADER)
}

fn parse_header_framed(content: &str) -> EmailInput {
    let mut subject = "";
    let mut body = String::new();
    let mut in_body = false;

    for line in content.split('\n') {
        if let Some(rest) = line.strip_prefix(SUBJECT_HEADER) {
            // Last Subject line wins, even past the header block
            subject = rest.trim();
        } else if !in_body && line.trim().is_empty() {
            in_body = true;
        } else if in_body {
            body.push_str(line);
            body.push('\n');
        }
    }

    let body = body.trim();

    EmailInput::new(
        non_empty_or(subject, DEFAULT_HEADER_SUBJECT),
        non_empty_or(body, DEFAULT_HEADER_BODY),
    )
}

fn parse_plain_text(content: &str) -> EmailInput {
    let lines: Vec<&str> = content.split('\n').collect();

    let subject_idx = lines
        .iter()
        .take(SUBJECT_SCAN_LINES)
        .position(|line| !line.trim().is_empty());

    let (subject, rest) = subject_idx.map_or((DEFAULT_PLAIN_SUBJECT, &lines[..]), |idx| {
        (lines[idx].trim(), &lines[idx + 1..])
    });

    let body = rest.join("\n");

    EmailInput::new(subject, non_empty_or(body.trim(), content.trim()))
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}
