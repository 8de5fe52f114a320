//! Tactic Analyzer — the external capability that reads an employer
//! message and names the tactic in play.
//!
//! The orchestrator treats this as opaque and fallible: any error is
//! absorbed into a neutral analysis, never propagated to the caller.

use anyhow::Result;
use async_trait::async_trait;

use crate::llm_client::{CallOptions, LlmClient};
use crate::negotiation::models::TacticAnalysis;
use crate::negotiation::prompts::{TACTIC_ANALYSIS_PROMPT_TEMPLATE, TACTIC_ANALYSIS_SYSTEM};

/// Analysis runs cold and short.
const ANALYSIS_OPTIONS: CallOptions = CallOptions::new(1024, 0.3);

/// Per-turn context summary handed to the external capabilities.
#[derive(Debug, Clone)]
pub struct TurnSummary<'a> {
    pub company: &'a str,
    pub position: &'a str,
    pub target_salary: Option<i64>,
    pub leverage_points: &'a [String],
}

impl TurnSummary<'_> {
    pub fn target_salary_text(&self) -> String {
        self.target_salary
            .map(|s| s.to_string())
            .unwrap_or_else(|| "not disclosed".to_string())
    }

    pub fn leverage_points_text(&self) -> String {
        if self.leverage_points.is_empty() {
            "none identified".to_string()
        } else {
            self.leverage_points.join(", ")
        }
    }
}

/// Trait seam for tactic analysis. Carried in the orchestrator as
/// `Arc<dyn TacticAnalyzer>` so tests can swap in stubs.
#[async_trait]
pub trait TacticAnalyzer: Send + Sync {
    async fn analyze(&self, message: &str, turn: &TurnSummary<'_>) -> Result<TacticAnalysis>;
}

/// Claude-backed analyzer — the default in production.
pub struct LlmTacticAnalyzer {
    llm: LlmClient,
}

impl LlmTacticAnalyzer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl TacticAnalyzer for LlmTacticAnalyzer {
    async fn analyze(&self, message: &str, turn: &TurnSummary<'_>) -> Result<TacticAnalysis> {
        let prompt = TACTIC_ANALYSIS_PROMPT_TEMPLATE
            .replace("{message}", message)
            .replace("{company}", turn.company)
            .replace("{position}", turn.position)
            .replace("{target_salary}", &turn.target_salary_text())
            .replace("{leverage_points}", &turn.leverage_points_text());

        let analysis: TacticAnalysis = self
            .llm
            .call_json(&prompt, TACTIC_ANALYSIS_SYSTEM, ANALYSIS_OPTIONS)
            .await?;
        Ok(analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_summary_formats_missing_target() {
        let turn = TurnSummary {
            company: "TechCorp Inc",
            position: "Engineer",
            target_salary: None,
            leverage_points: &[],
        };
        assert_eq!(turn.target_salary_text(), "not disclosed");
        assert_eq!(turn.leverage_points_text(), "none identified");
    }

    #[test]
    fn test_turn_summary_joins_leverage_points() {
        let points = vec!["senior_experience".to_string(), "competing_offer".to_string()];
        let turn = TurnSummary {
            company: "TechCorp Inc",
            position: "Engineer",
            target_salary: Some(120_000),
            leverage_points: &points,
        };
        assert_eq!(turn.target_salary_text(), "120000");
        assert_eq!(
            turn.leverage_points_text(),
            "senior_experience, competing_offer"
        );
    }
}
