use super::category::CategoryId;

/// Which questions a listing covers
///
/// Adding a filter kind means adding a variant here and teaching each
/// `QuestionStore` implementation to apply it; no signature changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionFilter {
    /// Every question
    All,
    /// Questions whose text contains `keyword`
    ///
    /// Matching is a literal substring test, ASCII case-insensitive. `%` and
    /// `_` carry no wildcard meaning and an empty keyword matches everything.
    Search { keyword: String },
    /// Questions whose category equals `category_id`
    Category { category_id: CategoryId },
}

impl QuestionFilter {
    pub fn search(keyword: impl Into<String>) -> Self {
        QuestionFilter::Search {
            keyword: keyword.into(),
        }
    }

    pub fn category(category_id: CategoryId) -> Self {
        QuestionFilter::Category { category_id }
    }

    /// Short label used in log fields
    pub fn kind(&self) -> &'static str {
        match self {
            QuestionFilter::All => "all",
            QuestionFilter::Search { .. } => "search",
            QuestionFilter::Category { .. } => "category",
        }
    }

    /// Evaluate the filter against a question's text and category
    ///
    /// This is the reference semantics every store must reproduce.
    pub fn matches(&self, question: &str, category: CategoryId) -> bool {
        match self {
            QuestionFilter::All => true,
            QuestionFilter::Search { keyword } => contains_ascii_case_insensitive(question, keyword),
            QuestionFilter::Category { category_id } => category == *category_id,
        }
    }
}

fn contains_ascii_case_insensitive(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let haystack = haystack.as_bytes();
    let needle = needle.as_bytes();
    haystack
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle))
}

/// Category constraint for quiz selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryScope {
    All,
    Category(CategoryId),
}

impl CategoryScope {
    /// Interpret the raw `quiz_category` value: any positive id restricts,
    /// zero or below means every category.
    pub fn from_raw(raw: i64) -> Self {
        if raw > 0 {
            CategoryScope::Category(raw)
        } else {
            CategoryScope::All
        }
    }

    /// The listing filter that yields this scope's questions
    pub fn to_filter(self) -> QuestionFilter {
        match self {
            CategoryScope::All => QuestionFilter::All,
            CategoryScope::Category(category_id) => QuestionFilter::Category { category_id },
        }
    }
}
