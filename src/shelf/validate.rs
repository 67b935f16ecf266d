//! # Validation Engine
//!
//! Pure predicate functions over raw form input. They run before a draft
//! is committed to the store and are testable without any storage or UI.
//!
//! Rules:
//! - Title: no leading/trailing whitespace, no immediately-adjacent
//!   duplicate word (case-insensitive).
//! - Pages: optional; non-negative number with at most two decimals.
//! - Tag: optional; alphabetic groups separated by single spaces or
//!   hyphens.

use crate::model::RecordDraft;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

static TITLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S(?:.*\S)?$").unwrap());
static PAGES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(0|[1-9]\d*)(\.\d{1,2})?$").unwrap());
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]+(?:[ -][A-Za-z]+)*$").unwrap());

pub const TITLE_EDGE_MSG: &str = "Title cannot have leading/trailing spaces.";
pub const TITLE_DUPLICATE_MSG: &str = "Title contains duplicate words.";
pub const PAGES_MSG: &str = "Pages must be a non-negative number (max 2 decimals).";
pub const TAG_MSG: &str = "Tag should use letters, spaces or hyphens only.";

/// Field name -> first failing message. The form is valid iff this is empty.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

pub fn validate_title(title: &str) -> Result<(), &'static str> {
    if !TITLE_RE.is_match(title) {
        return Err(TITLE_EDGE_MSG);
    }
    if has_adjacent_duplicate_word(title) {
        return Err(TITLE_DUPLICATE_MSG);
    }
    Ok(())
}

pub fn validate_pages(pages: &str) -> Result<(), &'static str> {
    if pages.is_empty() {
        return Ok(());
    }
    if !PAGES_RE.is_match(pages) {
        return Err(PAGES_MSG);
    }
    Ok(())
}

pub fn validate_tag(tag: &str) -> Result<(), &'static str> {
    if tag.is_empty() {
        return Ok(());
    }
    if !TAG_RE.is_match(tag) {
        return Err(TAG_MSG);
    }
    Ok(())
}

pub fn validate_form(draft: &RecordDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if let Err(msg) = validate_title(&draft.title) {
        errors.insert("title", msg);
    }
    if let Err(msg) = validate_pages(&draft.pages) {
        errors.insert("pages", msg);
    }
    if let Err(msg) = validate_tag(&draft.tag) {
        errors.insert("tag", msg);
    }
    errors
}

// Detects `\b(\w+)\s+\1\b`: two identical words (case-insensitive) with
// nothing but whitespace between them. Hand-rolled because the regex crate
// has no backreferences. Word characters are ASCII [A-Za-z0-9_].
fn has_adjacent_duplicate_word(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut prev: Option<(usize, usize)> = None;
    let mut i = 0;

    while i < bytes.len() {
        if !is_word_byte(bytes[i]) {
            i += 1;
            continue;
        }
        let start = i;
        while i < bytes.len() && is_word_byte(bytes[i]) {
            i += 1;
        }
        if let Some((prev_start, prev_end)) = prev {
            let gap = &text[prev_end..start];
            if !gap.is_empty()
                && gap.chars().all(char::is_whitespace)
                && text[prev_start..prev_end].eq_ignore_ascii_case(&text[start..i])
            {
                return true;
            }
        }
        prev = Some((start, i));
    }
    false
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
