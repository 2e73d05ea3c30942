use axum::{extract::rejection::JsonRejection, extract::Extension, Json};
use serde::Deserialize;

use crate::domains::suggestions::{similar_questions, Source};
use crate::kernel::ServerDeps;

#[derive(Debug, Deserialize)]
pub struct SimilarQuestionsRequest {
    question: String,
    #[serde(default)]
    sources: Vec<Source>,
}

/// `POST /api/getSimilarQuestions`
///
/// Never fails the caller: any problem, including a malformed request
/// body, degrades to an empty array.
pub async fn get_similar_questions_handler(
    Extension(deps): Extension<ServerDeps>,
    payload: Result<Json<SimilarQuestionsRequest>, JsonRejection>,
) -> Json<Vec<String>> {
    let Ok(Json(body)) = payload else {
        return Json(Vec::new());
    };

    match similar_questions(&body.question, &body.sources, &deps).await {
        Ok(questions) => Json(questions),
        Err(e) => {
            tracing::error!(error = %e, "Error generating similar questions");
            Json(Vec::new())
        }
    }
}
