//! Response Enhancer — the external capability that rewrites a filled
//! template into sharper prose.
//!
//! Like the analyzer, failures here never fail a turn: the orchestrator
//! falls back to the un-enhanced draft.

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::llm_client::{CallOptions, LlmClient};
use crate::negotiation::analyzer::TurnSummary;
use crate::negotiation::prompts::{ENHANCE_PROMPT_TEMPLATE, ENHANCE_SYSTEM};

/// Enhancement runs warmer, with a tight cap to keep replies concise.
const ENHANCE_OPTIONS: CallOptions = CallOptions::new(500, 0.7);

#[async_trait]
pub trait ResponseEnhancer: Send + Sync {
    async fn enhance(&self, draft: &str, turn: &TurnSummary<'_>) -> Result<String>;
}

/// Claude-backed enhancer — the default in production.
pub struct LlmResponseEnhancer {
    llm: LlmClient,
}

impl LlmResponseEnhancer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ResponseEnhancer for LlmResponseEnhancer {
    async fn enhance(&self, draft: &str, turn: &TurnSummary<'_>) -> Result<String> {
        let prompt = ENHANCE_PROMPT_TEMPLATE
            .replace("{draft}", draft)
            .replace("{company}", turn.company)
            .replace("{position}", turn.position)
            .replace("{target_salary}", &turn.target_salary_text())
            .replace("{leverage_points}", &turn.leverage_points_text());

        let response = self.llm.call(&prompt, ENHANCE_SYSTEM, ENHANCE_OPTIONS).await?;
        let text = response
            .text()
            .ok_or_else(|| anyhow!("enhancer returned no text content"))?
            .trim()
            .to_string();
        if text.is_empty() {
            return Err(anyhow!("enhancer returned empty text"));
        }
        Ok(text)
    }
}
