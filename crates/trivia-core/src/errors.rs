use thiserror::Error;

use crate::model::QuestionId;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code. The HTTP boundary decides the
/// status code from the kind alone, so a new failure only needs a kind to be
/// reported correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,
    MissingField,

    // Lookup
    NotFound,

    // Integration/IO
    Persistence,
    Io,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::MissingField => "ERR_MISSING_FIELD",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Io => "ERR_IO",
        }
    }

    /// Whether the caller can fix the failure by changing the request
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, ExErrorKind::InvalidInput | ExErrorKind::MissingField)
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling and free-form
/// context for the logs. Only `kind` ever reaches an HTTP caller.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    field: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            field: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add the name of the offending input field
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the offending field, if any
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: {})", field)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain failures raised by the trivia core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TriviaError {
    // ===== Validation Errors =====
    /// A required request field was absent
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    /// Question text is empty
    #[error("Question text must not be empty")]
    EmptyQuestion,

    /// Answer text is empty
    #[error("Answer text must not be empty")]
    EmptyAnswer,

    /// Category is zero or negative
    #[error("Category must be a positive integer, got {value}")]
    InvalidCategory { value: i64 },

    /// Difficulty is zero or negative
    #[error("Difficulty must be a positive integer, got {value}")]
    InvalidDifficulty { value: i64 },

    // ===== Lookup Errors =====
    /// Question not found in store
    #[error("Question not found: {question_id}")]
    QuestionNotFound { question_id: QuestionId },
}

impl TriviaError {
    /// The request field this failure is about, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            TriviaError::MissingField { field } => Some(field),
            TriviaError::EmptyQuestion => Some("question"),
            TriviaError::EmptyAnswer => Some("answer"),
            TriviaError::InvalidCategory { .. } => Some("category"),
            TriviaError::InvalidDifficulty { .. } => Some("difficulty"),
            TriviaError::QuestionNotFound { .. } => None,
        }
    }
}

impl From<TriviaError> for ExError {
    fn from(err: TriviaError) -> Self {
        let message = err.to_string();
        let field = err.field();
        let ex = match err {
            TriviaError::MissingField { .. } => ExError::new(ExErrorKind::MissingField),
            TriviaError::EmptyQuestion
            | TriviaError::EmptyAnswer
            | TriviaError::InvalidCategory { .. }
            | TriviaError::InvalidDifficulty { .. } => ExError::new(ExErrorKind::InvalidInput),
            TriviaError::QuestionNotFound { question_id } => {
                ExError::new(ExErrorKind::NotFound).with_entity_id(question_id.to_string())
            }
        };
        let ex = ex.with_message(message);
        match field {
            Some(field) => ex.with_field(field),
            None => ex,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
            (ExErrorKind::MissingField, "ERR_MISSING_FIELD"),
            (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
            (ExErrorKind::Persistence, "ERR_PERSISTENCE"),
            (ExErrorKind::Io, "ERR_IO"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_user_correctable_kinds() {
        assert!(ExErrorKind::InvalidInput.is_user_correctable());
        assert!(ExErrorKind::MissingField.is_user_correctable());
        assert!(!ExErrorKind::NotFound.is_user_correctable());
        assert!(!ExErrorKind::Persistence.is_user_correctable());
    }

    #[test]
    fn test_validation_errors_map_to_invalid_input() {
        let ex: ExError = TriviaError::InvalidDifficulty { value: 0 }.into();
        assert_eq!(ex.kind(), ExErrorKind::InvalidInput);
        assert_eq!(ex.field(), Some("difficulty"));
        assert!(ex.message().contains("got 0"));
    }

    #[test]
    fn test_not_found_carries_entity_id() {
        let ex: ExError = TriviaError::QuestionNotFound { question_id: 42 }.into();
        assert_eq!(ex.kind(), ExErrorKind::NotFound);
        assert_eq!(ex.entity_id(), Some("42"));
        assert!(ex.field().is_none());
    }

    #[test]
    fn test_display_includes_code_op_and_message() {
        let ex = ExError::new(ExErrorKind::Persistence)
            .with_op("insert_question")
            .with_message("disk I/O error");
        let rendered = ex.to_string();
        assert!(rendered.starts_with("[ERR_PERSISTENCE]"));
        assert!(rendered.contains("insert_question"));
        assert!(rendered.contains("disk I/O error"));
    }
}
