use std::num::{IntErrorKind, NonZeroU32};
use thiserror::Error;

/// A half-open run of zero-based page indices, `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpan {
    pub start: u32,
    pub end: u32,
}

impl PageSpan {
    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inclusive 1-based range as shown to the user, e.g. "1-5"
    pub fn display_range(&self) -> String {
        format!("{}-{}", self.start + 1, self.end)
    }
}

/// Why a `--page-ranges` token was skipped. The message is the warning shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("Invalid range format '{0}'. Expected 'start-end'.")]
    Format(String),

    #[error("Invalid page numbers in range '{0}'. Skipping.")]
    NotANumber(String),

    #[error("Invalid page range {0}. Skipping.")]
    OutOfBounds(String),
}

/// A token like "3-7" that has the right shape and integer bounds,
/// but has not yet been checked against a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeToken {
    raw: String,
    first: i64,
    last: i64,
}

impl RangeToken {
    /// Parse a "start-end" token with 1-based inclusive bounds
    pub fn parse(s: &str) -> Result<Self, RangeError> {
        let parts: Vec<&str> = s.split('-').collect();
        let [first, last] = parts.as_slice() else {
            return Err(RangeError::Format(s.to_string()));
        };

        let first = parse_bound(first).ok_or_else(|| RangeError::NotANumber(s.to_string()))?;
        let last = parse_bound(last).ok_or_else(|| RangeError::NotANumber(s.to_string()))?;

        Ok(RangeToken {
            raw: s.to_string(),
            first,
            last,
        })
    }

    /// Convert to a zero-based span, rejecting anything outside `0..total_pages` or empty
    pub fn normalize(&self, total_pages: u32) -> Result<PageSpan, RangeError> {
        let start = self.first.saturating_sub(1);
        let end = self.last;

        if start < 0 || end > i64::from(total_pages) || start >= end {
            return Err(RangeError::OutOfBounds(self.raw.clone()));
        }

        // Both bounds are now within 0..=total_pages
        Ok(PageSpan {
            start: start as u32,
            end: end as u32,
        })
    }
}

/// Integers too large for i64 are clamped so the bounds check rejects them
fn parse_bound(s: &str) -> Option<i64> {
    match s.trim().parse::<i64>() {
        Ok(n) => Some(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// Parse and bounds-check a token in one step
pub fn resolve_token(s: &str, total_pages: u32) -> Result<PageSpan, RangeError> {
    RangeToken::parse(s)?.normalize(total_pages)
}

/// Partition `0..total_pages` into consecutive spans of `per_file` pages;
/// the last span holds the remainder
pub fn chunk_spans(total_pages: u32, per_file: NonZeroU32) -> Vec<PageSpan> {
    let per_file = per_file.get();
    let count = total_pages.div_ceil(per_file);

    (0..count)
        .map(|i| {
            let start = i * per_file;
            let end = start.saturating_add(per_file).min(total_pages);
            PageSpan { start, end }
        })
        .collect()
}
