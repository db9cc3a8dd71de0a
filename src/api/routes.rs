//! HTTP 接口
//!
//! - `POST /api/words`         批量生成例句
//! - `GET  /api/dictFetch`      按考试类型获取词典
//! - `GET  /api/chapterWords`   获取某一章的单词
//! - `GET  /api/professions`    预设职业列表

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{error, info};

use crate::error::{AppError, AppResult, DictError, RequestError};
use crate::models::{chapter_count, load_dictionary, words_from_chapter, DictionaryEntry, ExamType, Profession, Word};
use crate::orchestrator::BatchProcessor;

/// 路由共享状态
#[derive(Clone)]
pub struct AppState {
    processor: Arc<BatchProcessor>,
    dict_folder: Arc<PathBuf>,
}

impl AppState {
    pub fn new(processor: BatchProcessor, dict_folder: impl Into<PathBuf>) -> Self {
        Self {
            processor: Arc::new(processor),
            dict_folder: Arc::new(dict_folder.into()),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/words", post(generate_sentences))
        .route("/api/dictFetch", get(fetch_dictionary))
        .route("/api/chapterWords", get(chapter_words))
        .route("/api/professions", get(list_professions))
        .with_state(state)
}

// ========== 请求 / 响应类型 ==========

/// 批量生成请求；缺失或为 null 的数组按空数组处理，数组中的 null 按空对象处理
#[derive(Debug, Deserialize)]
pub struct WordRequest {
    #[serde(default, deserialize_with = "nullable_list")]
    pub professions: Vec<Profession>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub words: Vec<Word>,
}

#[derive(Debug, Serialize)]
pub struct WordsResponse {
    pub words: Vec<Word>,
}

#[derive(Debug, Deserialize)]
pub struct DictQuery {
    #[serde(rename = "type")]
    pub exam_type: Option<String>,
    pub chapter: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct DictionaryResponse {
    pub dictionary: Vec<DictionaryEntry>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterResponse {
    pub chapter: usize,
    pub total_chapters: usize,
    pub words: Vec<Word>,
}

#[derive(Debug, Serialize)]
pub struct ProfessionsResponse {
    pub professions: Vec<Profession>,
}

fn nullable_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let items: Option<Vec<Option<T>>> = Option::deserialize(deserializer)?;
    Ok(items
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

// ========== 处理函数 ==========

/// POST /api/words
async fn generate_sentences(
    State(state): State<AppState>,
    payload: Result<Json<WordRequest>, JsonRejection>,
) -> AppResult<Json<WordsResponse>> {
    let Json(request) = payload.map_err(|rejection| {
        error!("请求体解析失败: {}", rejection);
        RequestError::invalid(rejection.body_text())
    })?;

    info!(
        "收到例句生成请求: {} 个单词, {} 个职业",
        request.words.len(),
        request.professions.len()
    );

    let outcome = state
        .processor
        .run(request.words, &request.professions)
        .await?;

    Ok(Json(WordsResponse {
        words: outcome.words,
    }))
}

/// GET /api/dictFetch?type=cet4
async fn fetch_dictionary(
    State(state): State<AppState>,
    Query(query): Query<DictQuery>,
) -> AppResult<Json<DictionaryResponse>> {
    let exam = parse_exam(query.exam_type.as_deref())?;
    let dictionary = load_dictionary(&state.dict_folder, exam).await?;

    Ok(Json(DictionaryResponse {
        count: dictionary.len(),
        dictionary,
    }))
}

/// GET /api/chapterWords?type=cet4&chapter=1
async fn chapter_words(
    State(state): State<AppState>,
    Query(query): Query<DictQuery>,
) -> AppResult<Json<ChapterResponse>> {
    let exam = parse_exam(query.exam_type.as_deref())?;
    let chapter = query.chapter.unwrap_or(1);
    let dictionary = load_dictionary(&state.dict_folder, exam).await?;

    Ok(Json(ChapterResponse {
        chapter,
        total_chapters: chapter_count(dictionary.len()),
        words: words_from_chapter(&dictionary, chapter)?,
    }))
}

/// GET /api/professions
async fn list_professions() -> Json<ProfessionsResponse> {
    Json(ProfessionsResponse {
        professions: Profession::all_predefined(),
    })
}

fn parse_exam(value: Option<&str>) -> Result<ExamType, AppError> {
    let value = value.unwrap_or_default();
    if value.trim().is_empty() {
        return Err(DictError::InvalidExamType {
            value: value.to_string(),
        }
        .into());
    }
    Ok(value.parse()?)
}
