use email_digest::parse_email_file;

#[test]
fn test_parse_header_framed() {
    let email = parse_email_file("Subject: Hi\nFrom: a@b.com\n\nLine1\n\nLine2");

    assert_eq!(email.subject, "Hi");
    assert_eq!(email.body, "Line1\n\nLine2");
}

#[test]
fn test_parse_header_framed_crlf() {
    let email = parse_email_file("Subject: Hi\r\nFrom: a@b.com\r\n\r\nLine1\r\nLine2\r\n");

    assert_eq!(email.subject, "Hi");
    assert_eq!(email.body, "Line1\r\nLine2");
}

#[test]
fn test_parse_header_framed_defaults() {
    let email = parse_email_file("Subject:   \nFrom: a@b.com");

    assert_eq!(email.subject, "No Subject");
    assert_eq!(email.body, "No content found");
}

#[test]
fn test_last_subject_wins() {
    let email = parse_email_file("Subject: First\nFrom: a@b.com\nSubject: Second\n\nBody");

    assert_eq!(email.subject, "Second");
    assert_eq!(email.body, "Body");
}

#[test]
fn test_subject_line_inside_body() {
    let email = parse_email_file("Subject: Hi\nFrom: a@b.com\n\nText\nSubject: Later\nMore");

    assert_eq!(email.subject, "Later");
    assert_eq!(email.body, "Text\nMore");
}

#[test]
fn test_subject_marker_is_case_sensitive() {
    let email = parse_email_file("subject: Hi\nFrom: a@b.com\n\nBody");

    assert_eq!(email.subject, "subject: Hi");
    assert_eq!(email.body, "From: a@b.com\n\nBody");
}

#[test]
fn test_parse_plain_text() {
    let email = parse_email_file("Hello World\n\nThis is the body.");

    assert_eq!(email.subject, "Hello World");
    assert_eq!(email.body, "This is the body.");
}

#[test]
fn test_subject_without_from_is_plain_text() {
    let email = parse_email_file("Subject: Hi\n\nbody text");

    assert_eq!(email.subject, "Subject: Hi");
    assert_eq!(email.body, "body text");
}

#[test]
fn test_plain_text_subject_on_fifth_line() {
    let email = parse_email_file("\n  \n\n\n  Title  \nBody");

    assert_eq!(email.subject, "Title");
    assert_eq!(email.body, "Body");
}

#[test]
fn test_plain_text_subject_beyond_scan_window() {
    let email = parse_email_file("\n\n\n\n\nTitle\nBody\n");

    assert_eq!(email.subject, "Uploaded Email");
    assert_eq!(email.body, "Title\nBody");
}

#[test]
fn test_plain_text_single_line() {
    let email = parse_email_file("  Hello  ");

    assert_eq!(email.subject, "Hello");
    assert_eq!(email.body, "Hello");
}

#[test]
fn test_all_blank_input() {
    let email = parse_email_file("   \n\n  \n");

    assert_eq!(email.subject, "Uploaded Email");
    assert_eq!(email.body, "");
}

#[test]
fn test_empty_input() {
    let email = parse_email_file("");

    assert_eq!(email.subject, "Uploaded Email");
    assert_eq!(email.body, "");
}
