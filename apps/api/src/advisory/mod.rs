// Advisory pipeline: relevance selection → prompt → model call → parse-or-degrade.
// All model calls go through llm_client; nothing here talks to Gemini directly.

pub mod advisor;
pub mod handlers;
pub mod prompts;
