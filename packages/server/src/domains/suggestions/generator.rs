//! Related-question generation
//!
//! Composes one instruction prompt from the original question and the
//! retrieved source snippets, invokes the language model once, and parses
//! a strict JSON contract out of the free-text response. Results are
//! memoized per distinct input for the cache's TTL.

use anyhow::{bail, Result};
use serde::Deserialize;
use tracing::warn;

use crate::kernel::ServerDeps;

/// Retrieved source snippet supplied by the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct Source {
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Source content is cut to this many characters before it enters the prompt.
const MAX_SOURCE_CONTENT_CHARS: usize = 10_000;

/// Expected shape of the model's JSON answer.
#[derive(Debug, Deserialize)]
struct SuggestionPayload {
    #[serde(default)]
    questions: Vec<String>,
}

/// Generate 3 follow-up questions for a question and its sources.
///
/// Identical inputs within the cache TTL return the memoized value
/// without a model call. Unusable model output (empty or unparseable)
/// degrades to an empty list; only a response with no candidates at all
/// is surfaced as an error, and callers degrade that to an empty list
/// too.
pub async fn similar_questions(
    question: &str,
    sources: &[Source],
    deps: &ServerDeps,
) -> Result<Vec<String>> {
    let context = sources_context(sources);
    let key = (question.to_string(), context.clone());

    if let Some(cached) = deps.suggestion_cache.get(&key).await {
        return Ok(cached);
    }

    let questions = generate(question, &context, deps).await?;
    deps.suggestion_cache.insert(key, questions.clone()).await;

    Ok(questions)
}

async fn generate(question: &str, context: &str, deps: &ServerDeps) -> Result<Vec<String>> {
    let prompt = build_prompt(question, context);
    let response = deps.model.generate(&prompt).await?;

    if response.candidates.is_empty() {
        bail!("No candidates returned from the Gemini API");
    }

    let text = response.text().unwrap_or_default();
    if text.trim().is_empty() {
        warn!("Gemini response is empty");
        return Ok(Vec::new());
    }

    // The model sometimes wraps its JSON answer in Markdown code fences.
    let cleaned = text
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim();

    match serde_json::from_str::<SuggestionPayload>(cleaned) {
        Ok(payload) => Ok(payload.questions),
        Err(e) => {
            warn!(error = %e, response = text, "Failed to parse JSON from Gemini response");
            Ok(Vec::new())
        }
    }
}

/// Concatenate "Title/Content" blocks for the prompt, truncating each
/// source to its first 10,000 characters.
fn sources_context(sources: &[Source]) -> String {
    sources
        .iter()
        .map(|source| {
            let content: String = source
                .content
                .chars()
                .take(MAX_SOURCE_CONTENT_CHARS)
                .collect();
            format!("Title: {}\nContent: {}...", source.title, content)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn build_prompt(question: &str, context: &str) -> String {
    let context = if context.is_empty() {
        "No search results provided."
    } else {
        context
    };

    format!(
        r#"You are an expert assistant who creates related follow-up questions based on a user's original question and the provided search results.

Your task is to generate 3 relevant follow-up questions.

Follow these rules strictly:
1.  Each question must be no longer than 20 words.
2.  Include specific names, locations, or events from the context so the questions can be understood on their own. For example, use "the Manhattan project" instead of "the project".
3.  The questions must be in the same language as the original question.
4.  Do NOT repeat the original question.
5.  Your response MUST be only a valid JSON object with a single key "questions" that holds an array of 3 strings. Do not add any other text or markdown formatting around the JSON.

Original Question: "{question}"

Search Results Context:
{context}"#
    )
}
