//! Advisor: orchestrates one sustainability question end to end.
//!
//! Flow: select relevant categories → build_prompt → model.generate → parse.
//!
//! `parse` is the terminal error boundary for reply shape: a JSON object is
//! passed through untouched, anything else becomes a degraded result, never an
//! error. Upstream call failures are the only errors this module returns.

use tracing::{info, warn};

use crate::advisory::prompts::ADVISORY_PROMPT_TEMPLATE;
use crate::errors::AppError;
use crate::knowledge::selector::select;
use crate::llm_client::{strip_json_fences, AdvisoryModel};
use crate::models::advisory::{Advisory, AdvisoryResult};
use crate::models::knowledge::{KnowledgeBase, RelevantKnowledge};

/// Answers `query` using `knowledge` as grounding.
pub async fn advise(
    model: &dyn AdvisoryModel,
    knowledge: &KnowledgeBase,
    query: &str,
) -> Result<Advisory, AppError> {
    let relevant = select(query, knowledge);
    info!(
        "Advisory request matched {} categories: {:?}",
        relevant.len(),
        relevant.keys().collect::<Vec<_>>()
    );

    let prompt = build_prompt(query, &relevant)?;

    let raw_reply = model
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("{} call failed: {e}", model.model_name())))?;

    let advisory = parse(&raw_reply);
    if advisory.is_degraded() {
        warn!(
            "Model reply was not a JSON object, returning degraded result: {:?}",
            raw_reply.chars().take(80).collect::<String>()
        );
    } else if advisory.result().answer().is_none() {
        warn!("Model reply has no string `answer` field; passing it through unchanged");
    }

    Ok(advisory)
}

/// Renders the advisory prompt with the selected knowledge pretty-printed as JSON.
pub fn build_prompt(query: &str, relevant: &RelevantKnowledge) -> Result<String, AppError> {
    let knowledge_json = serde_json::to_string_pretty(relevant)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize knowledge: {e}")))?;

    Ok(fill_placeholders(
        ADVISORY_PROMPT_TEMPLATE,
        &[("{knowledge_json}", knowledge_json.as_str()), ("{query}", query)],
    ))
}

/// Substitutes every placeholder in a single left-to-right pass.
/// Inserted values are never scanned again, so a query or payload that itself
/// contains `{query}` or `{knowledge_json}` is rendered literally.
fn fill_placeholders(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match values.iter().find(|(key, _)| tail.starts_with(key)) {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len()..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Interprets a raw model reply. Never fails.
pub fn parse(raw_reply: &str) -> Advisory {
    match serde_json::from_str::<AdvisoryResult>(strip_json_fences(raw_reply)) {
        Ok(result) => Advisory::Parsed(result),
        Err(_) => Advisory::Degraded(AdvisoryResult::degraded(raw_reply)),
    }
}
