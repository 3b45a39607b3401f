use crate::errors::Result;
use crate::model::{Category, NewQuestion, Question, QuestionFilter, QuestionId};

/// Persistence capability handed to every core operation
///
/// One handle serves one request. Implementations must return questions in
/// ascending id order from every listing method, apply [`QuestionFilter`]
/// with the semantics of [`QuestionFilter::matches`], and make each write
/// atomic: a failed insert or delete leaves no trace.
pub trait QuestionStore {
    /// All categories, ordered by id
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the store cannot be read.
    fn list_categories(&self) -> Result<Vec<Category>>;

    /// Number of questions matching `filter`
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the store cannot be read.
    fn count_questions(&self, filter: &QuestionFilter) -> Result<u64>;

    /// Up to `limit` matching questions after skipping `offset`, id ascending
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the store cannot be read.
    fn fetch_questions(
        &self,
        filter: &QuestionFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Question>>;

    /// Ids of every matching question, ascending
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the store cannot be read.
    fn question_ids(&self, filter: &QuestionFilter) -> Result<Vec<QuestionId>>;

    /// Look a question up by id
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the store cannot be read.
    fn get_question(&self, id: QuestionId) -> Result<Option<Question>>;

    /// Store a new question and return it with its assigned id
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the write fails; nothing is stored.
    fn insert_question(&mut self, question: &NewQuestion) -> Result<Question>;

    /// Remove a question; `false` when no such question existed
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the write fails; nothing is removed.
    fn delete_question(&mut self, id: QuestionId) -> Result<bool>;
}
