//! Query engine: filtered, id-ordered, paginated question listings

use std::collections::BTreeMap;

use crate::errors::Result;
use crate::model::{Category, CategoryId, QuestionFilter};
use crate::ops::store::QuestionStore;
use crate::queries::pagination::{PageRequest, QuestionPage};

/// List one page of questions matching `filter`
///
/// The total is computed over the filtered set independently of `page`, so
/// every page of the same listing reports the same `total_questions`. A page
/// past the end yields an empty `questions` list, never an error.
///
/// # Errors
///
/// Returns `Persistence` if either store read fails.
pub fn list_questions<S>(store: &S, filter: &QuestionFilter, page: PageRequest) -> Result<QuestionPage>
where
    S: QuestionStore + ?Sized,
{
    let total_questions = store.count_questions(filter)?;
    let questions = store.fetch_questions(filter, page.offset(), page.limit())?;

    Ok(QuestionPage {
        total_questions,
        questions,
    })
}

/// All categories, ordered by id
///
/// # Errors
///
/// Returns `Persistence` if the store read fails.
pub fn list_categories<S>(store: &S) -> Result<Vec<Category>>
where
    S: QuestionStore + ?Sized,
{
    store.list_categories()
}

/// Categories as an id → label mapping
///
/// # Errors
///
/// Returns `Persistence` if the store read fails.
pub fn category_labels<S>(store: &S) -> Result<BTreeMap<CategoryId, String>>
where
    S: QuestionStore + ?Sized,
{
    Ok(store
        .list_categories()?
        .into_iter()
        .map(|c| (c.id, c.label))
        .collect())
}
