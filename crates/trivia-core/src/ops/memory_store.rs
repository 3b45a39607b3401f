use std::collections::BTreeMap;

use crate::errors::Result;
use crate::model::{Category, CategoryId, NewQuestion, Question, QuestionFilter, QuestionId};
use crate::ops::store::QuestionStore;

/// In-memory store for categories and questions
///
/// `BTreeMap` keys give the ascending-id order the store contract requires
/// for free. Ids are handed out from a counter that never goes backwards, so
/// a deleted question's id is never reused. Not thread-safe; each test or
/// caller owns its instance.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    categories: BTreeMap<CategoryId, Category>,
    questions: BTreeMap<QuestionId, Question>,
    next_id: QuestionId,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            categories: BTreeMap::new(),
            questions: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Insert or replace a category (categories are seeded, never served)
    pub fn insert_category(&mut self, category: Category) {
        self.categories.insert(category.id, category);
    }

    /// Insert a question with a caller-chosen id, bypassing validation
    ///
    /// Intended for test setup. Later inserts continue above the highest id
    /// seen so far.
    pub fn insert_question_with_id(&mut self, question: Question) {
        self.next_id = self.next_id.max(question.id.saturating_add(1));
        self.questions.insert(question.id, question);
    }

    /// Number of stored questions
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    fn matching<'a>(
        &'a self,
        filter: &'a QuestionFilter,
    ) -> impl Iterator<Item = &'a Question> + 'a {
        self.questions
            .values()
            .filter(move |q| filter.matches(&q.question, q.category))
    }
}

impl QuestionStore for MemoryStore {
    fn list_categories(&self) -> Result<Vec<Category>> {
        Ok(self.categories.values().cloned().collect())
    }

    fn count_questions(&self, filter: &QuestionFilter) -> Result<u64> {
        Ok(self.matching(filter).count() as u64)
    }

    fn fetch_questions(
        &self,
        filter: &QuestionFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Question>> {
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(self
            .matching(filter)
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    fn question_ids(&self, filter: &QuestionFilter) -> Result<Vec<QuestionId>> {
        Ok(self.matching(filter).map(|q| q.id).collect())
    }

    fn get_question(&self, id: QuestionId) -> Result<Option<Question>> {
        Ok(self.questions.get(&id).cloned())
    }

    fn insert_question(&mut self, question: &NewQuestion) -> Result<Question> {
        let id = self.next_id;
        self.next_id += 1;
        let stored = question.clone().into_question(id);
        self.questions.insert(id, stored.clone());
        Ok(stored)
    }

    fn delete_question(&mut self, id: QuestionId) -> Result<bool> {
        Ok(self.questions.remove(&id).is_some())
    }
}
