use serde::Serialize;

use crate::model::Question;

/// Fixed number of questions per page
pub const PAGE_SIZE: u64 = 10;

/// A 1-based page number
///
/// There is no upper bound: a page past the end of the data is valid and
/// simply comes back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest(u64);

impl PageRequest {
    /// Page `number`, with 0 treated as page 1
    pub fn new(number: u64) -> Self {
        Self(number.max(1))
    }

    pub fn first() -> Self {
        Self(1)
    }

    /// Interpret a raw `page` query value
    ///
    /// Absent, unparsable, zero and negative values all mean page 1.
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.trim().parse::<i64>().ok())
            .and_then(|n| u64::try_from(n).ok())
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn number(&self) -> u64 {
        self.0
    }

    /// Rows to skip; saturates for absurdly large page numbers
    pub fn offset(&self) -> u64 {
        (self.0 - 1).saturating_mul(PAGE_SIZE)
    }

    pub fn limit(&self) -> u64 {
        PAGE_SIZE
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// One page of a filtered listing
///
/// `total_questions` counts the whole filtered set, not just this page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionPage {
    pub total_questions: u64,
    pub questions: Vec<Question>,
}
