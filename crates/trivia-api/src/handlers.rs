//! Request handlers
//!
//! Each handler turns the request into an engine query or command, runs it
//! against a per-request store, and shapes the JSON reply.

use std::collections::BTreeMap;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use trivia_core::model::{
    CategoryId, CategoryScope, Question, QuestionDraft, QuestionFilter, QuestionId,
};
use trivia_core::PageRequest;
use trivia_engine::{
    apply_engine_command, apply_engine_query, EngineCommand, EngineQuery, EngineQueryResult,
};

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request and response shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    page: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchBody {
    pub keyword: String,
}

#[derive(Debug, Deserialize)]
pub struct QuizBody {
    pub quiz_category: i64,
    pub previous_questions: Vec<QuestionId>,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: BTreeMap<CategoryId, String>,
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub success: bool,
    pub total_questions: u64,
    pub questions: Vec<Question>,
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

// ---------------------------------------------------------------------------
// Extraction helpers
// ---------------------------------------------------------------------------

/// Page from the query string; anything unusable means page 1
fn page_from(params: Result<Query<PageParams>, QueryRejection>) -> PageRequest {
    let params = params.map(|Query(p)| p).unwrap_or_default();
    PageRequest::parse(params.page.as_deref())
}

/// Decode a JSON body into `T`, failing as 422
fn body_as<T>(body: Result<Json<Value>, JsonRejection>) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    let Json(value) = body.map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))?;
    serde_json::from_value(value).map_err(|e| ApiError::InvalidBody(e.to_string()))
}

/// Integer path segment; anything else is a route miss
fn path_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|_| ApiError::RouteNotFound)
}

async fn run_query(state: &AppState, query: EngineQuery) -> Result<EngineQueryResult, ApiError> {
    state
        .with_store(move |store| apply_engine_query(query, &*store))
        .await
}

async fn list_page(
    state: &AppState,
    filter: QuestionFilter,
    page: PageRequest,
) -> Result<Json<QuestionsResponse>, ApiError> {
    match run_query(state, EngineQuery::ListQuestions { filter, page }).await? {
        EngineQueryResult::Questions(page) => Ok(Json(QuestionsResponse {
            success: true,
            total_questions: page.total_questions,
            questions: page.questions,
        })),
        other => Err(unexpected(&other)),
    }
}

fn unexpected(result: &EngineQueryResult) -> ApiError {
    ApiError::Internal(format!("unexpected engine result: {:?}", result))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    match run_query(&state, EngineQuery::ListCategories).await? {
        EngineQueryResult::Categories(categories) => Ok(Json(CategoriesResponse {
            success: true,
            categories,
        })),
        other => Err(unexpected(&other)),
    }
}

/// GET /questions?page=N
pub async fn list_questions(
    State(state): State<AppState>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<QuestionsResponse>, ApiError> {
    list_page(&state, QuestionFilter::All, page_from(params)).await
}

/// POST /filter/questions?page=N with `{"keyword": ..}`
pub async fn search_questions(
    State(state): State<AppState>,
    params: Result<Query<PageParams>, QueryRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<QuestionsResponse>, ApiError> {
    let SearchBody { keyword } = body_as(body)?;
    list_page(&state, QuestionFilter::search(keyword), page_from(params)).await
}

/// GET /categories/:category_id/questions?page=N
pub async fn questions_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<QuestionsResponse>, ApiError> {
    let category_id = path_id(&category_id)?;
    list_page(&state, QuestionFilter::category(category_id), page_from(params)).await
}

/// POST /questions
pub async fn create_question(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let draft: QuestionDraft = body_as(body)?;
    state
        .with_store(move |store| apply_engine_command(EngineCommand::CreateQuestion(draft), store))
        .await?;
    Ok(Json(SuccessResponse { success: true }))
}

/// DELETE /questions/:question_id
pub async fn delete_question(
    State(state): State<AppState>,
    Path(question_id): Path<String>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let question_id = path_id(&question_id)?;
    state
        .with_store(move |store| {
            apply_engine_command(EngineCommand::DeleteQuestion { question_id }, store)
        })
        .await?;
    Ok(Json(SuccessResponse { success: true }))
}

/// POST /quizzes with `{"quiz_category": .., "previous_questions": [..]}`
pub async fn next_quiz_question(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<QuizResponse>, ApiError> {
    let QuizBody {
        quiz_category,
        previous_questions,
    } = body_as(body)?;

    let query = EngineQuery::NextQuizQuestion {
        scope: CategoryScope::from_raw(quiz_category),
        previous: previous_questions,
    };
    match run_query(&state, query).await? {
        EngineQueryResult::QuizQuestion(question) => Ok(Json(QuizResponse {
            success: true,
            question,
        })),
        other => Err(unexpected(&other)),
    }
}

/// Fallback for unknown routes
pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}
