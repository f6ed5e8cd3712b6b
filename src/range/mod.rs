//! Page-range token normalization.
//!
//! Citation spans arrive as literal tokens in the exact form `p<start>-<end>`
//! (`p82-85`). Anything else (en-dashes, a `p` on the second number, stray
//! whitespace) is rejected rather than repaired, because downstream overlap
//! arithmetic assumes clean inclusive integer bounds. A near-miss token that
//! slipped through would corrupt the ratio computation instead of failing the
//! sample loudly.

pub mod error;


pub use error::RangeError;

use std::sync::LazyLock;

use regex::Regex;

static PAGE_RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^p([0-9]+)-([0-9]+)$").expect("pattern is a valid regex"));

/// An inclusive page span `[start, end]` with `start <= end`.
///
/// Construction normalizes reversed bounds, so `new(90, 85)` and `new(85, 90)`
/// denote the same interval. The invariant makes `span() >= 1` hold
/// unconditionally, which the overlap math relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInterval {
    start: u32,
    end: u32,
}

impl PageInterval {
    /// Creates an interval from two bounds in either order.
    pub fn new(a: u32, b: u32) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Number of pages covered, inclusive of both bounds. Always at least 1.
    pub fn span(&self) -> u64 {
        u64::from(self.end - self.start) + 1
    }
}

impl std::fmt::Display for PageInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Parses a `p<start>-<end>` token into a normalized [`PageInterval`].
///
/// The grammar is exact: a single ASCII `p`, ASCII digits, one ASCII hyphen,
/// digits, nothing else. The two numbers are taken in token order and stored
/// smaller-first.
pub fn parse_page_range(token: &str) -> Result<PageInterval, RangeError> {
    let captures = PAGE_RANGE_RE
        .captures(token)
        .ok_or_else(|| RangeError::Malformed {
            token: token.to_string(),
        })?;

    let a = parse_page_number(&captures[1])?;
    let b = parse_page_number(&captures[2])?;

    Ok(PageInterval::new(a, b))
}

fn parse_page_number(digits: &str) -> Result<u32, RangeError> {
    digits.parse().map_err(|_| RangeError::PageOutOfRange {
        value: digits.to_string(),
    })
}
