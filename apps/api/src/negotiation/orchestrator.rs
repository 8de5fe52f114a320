//! Response Orchestrator — coordinates one full negotiation turn.
//!
//! Flow: resolve context → record offer → tactic analysis → template
//! selection → variable fill → enhancement → history append → return text.
//!
//! Failures of the two external capabilities (analysis, enhancement) are
//! absorbed with explicit fallbacks at the call site — logged, never
//! propagated. `NoTemplateAvailable` and `TemplateVariableError` are
//! configuration bugs and do propagate.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::negotiation::analyzer::{TacticAnalyzer, TurnSummary};
use crate::negotiation::catalog::TemplateCatalog;
use crate::negotiation::enhancer::ResponseEnhancer;
use crate::negotiation::models::{HistoryRecord, OfferDetails, TacticAnalysis};
use crate::negotiation::selector::select_template;
use crate::negotiation::store::ContextStore;
use crate::negotiation::variables::fill_template;

/// The outcome of one turn.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedResponse {
    pub response: String,
    pub template_id: String,
}

#[derive(Clone)]
pub struct ResponseOrchestrator {
    store: Arc<ContextStore>,
    catalog: Arc<TemplateCatalog>,
    analyzer: Arc<dyn TacticAnalyzer>,
    enhancer: Arc<dyn ResponseEnhancer>,
}

impl ResponseOrchestrator {
    pub fn new(
        store: Arc<ContextStore>,
        catalog: Arc<TemplateCatalog>,
        analyzer: Arc<dyn TacticAnalyzer>,
        enhancer: Arc<dyn ResponseEnhancer>,
    ) -> Self {
        Self {
            store,
            catalog,
            analyzer,
            enhancer,
        }
    }

    /// Runs one full turn against the named context. The context's lock is
    /// held for the whole turn, so turns against the same context serialize.
    pub async fn generate_response(
        &self,
        context_id: &str,
        incoming_message: &str,
        offer_details: Option<OfferDetails>,
    ) -> Result<GeneratedResponse, AppError> {
        let handle = self.store.get(context_id).await?;
        let mut context = handle.lock().await;

        if let Some(offer) = offer_details {
            context.negotiation_history.push(HistoryRecord::OfferReceived {
                timestamp: Utc::now(),
                offer: offer.clone(),
            });
            context.current_offer = Some(offer);
            info!("Recorded new offer for '{context_id}'");
        }

        let turn = TurnSummary {
            company: &context.company_name,
            position: &context.position,
            target_salary: context.target_salary,
            leverage_points: &context.leverage_points,
        };

        let analysis = match self.analyzer.analyze(incoming_message, &turn).await {
            Ok(analysis) => {
                info!(
                    "Tactic analysis for '{}': tactic='{}'",
                    context_id, analysis.tactic
                );
                analysis
            }
            Err(e) => {
                warn!("Tactic analysis failed for '{context_id}', using fallback: {e:#}");
                TacticAnalysis::fallback()
            }
        };

        let template = select_template(&self.catalog, &analysis, &context)?;
        let draft = fill_template(template, &context)?;

        let response_text = match self.enhancer.enhance(&draft, &turn).await {
            Ok(enhanced) => enhanced,
            Err(e) => {
                warn!("Enhancement failed for '{context_id}', returning draft verbatim: {e:#}");
                draft
            }
        };

        let template_id = template.template_id.to_string();
        context.negotiation_history.push(HistoryRecord::ResponseSent {
            timestamp: Utc::now(),
            template_id: template_id.clone(),
            response: response_text.clone(),
        });

        info!(
            "Turn complete for '{}' using template '{}' ({} history records)",
            context_id,
            template_id,
            context.negotiation_history.len()
        );

        Ok(GeneratedResponse {
            response: response_text,
            template_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;

    use crate::negotiation::models::{
        CandidateProfile, EducationLevel, NegotiationStrategy,
    };
    use crate::negotiation::store::CreateContextParams;

    /// Stub analyzer with a fixed verdict, or a hard failure.
    struct StubAnalyzer {
        fail: bool,
    }

    #[async_trait]
    impl TacticAnalyzer for StubAnalyzer {
        async fn analyze(&self, _message: &str, _turn: &TurnSummary<'_>) -> Result<TacticAnalysis> {
            if self.fail {
                return Err(anyhow!("analysis service unavailable"));
            }
            Ok(TacticAnalysis {
                tactic: "deadline_pressure".to_string(),
                pressure_points: vec!["decision by Friday".to_string()],
                response_strategy: "stall politely".to_string(),
            })
        }
    }

    /// Stub enhancer that wraps the draft, or fails.
    struct StubEnhancer {
        fail: bool,
    }

    #[async_trait]
    impl ResponseEnhancer for StubEnhancer {
        async fn enhance(&self, draft: &str, _turn: &TurnSummary<'_>) -> Result<String> {
            if self.fail {
                return Err(anyhow!("enhancement service unavailable"));
            }
            Ok(format!("[enhanced] {draft}"))
        }
    }

    fn make_orchestrator(
        analyzer_fails: bool,
        enhancer_fails: bool,
    ) -> (ResponseOrchestrator, Arc<ContextStore>) {
        let store = Arc::new(ContextStore::new());
        let orchestrator = ResponseOrchestrator::new(
            store.clone(),
            Arc::new(TemplateCatalog::builtin()),
            Arc::new(StubAnalyzer {
                fail: analyzer_fails,
            }),
            Arc::new(StubEnhancer {
                fail: enhancer_fails,
            }),
        );
        (orchestrator, store)
    }

    async fn make_context(store: &ContextStore) -> String {
        store
            .create(CreateContextParams {
                company_name: "TechCorp Inc".to_string(),
                position: "Senior Product Manager".to_string(),
                user_profile: CandidateProfile {
                    years_experience: 7,
                    education_level: EducationLevel::Masters,
                    industry: Some("technology".to_string()),
                    ..Default::default()
                },
                target_salary: Some(120_000),
                target_benefits: Vec::new(),
                deal_breakers: Vec::new(),
            })
            .await
    }

    fn low_offer() -> OfferDetails {
        OfferDetails {
            salary: Some(85_000),
            benefits: vec!["basic_health".to_string(), "401k".to_string()],
            start_date: Some("immediately".to_string()),
            remote: Some(false),
        }
    }

    #[tokio::test]
    async fn test_low_offer_turn_records_offer_and_history() {
        let (orchestrator, store) = make_orchestrator(false, false);
        let id = make_context(&store).await;

        let result = orchestrator
            .generate_response(
                &id,
                "We're excited to offer you the position at $85,000. We need your decision by Friday.",
                Some(low_offer()),
            )
            .await
            .unwrap();

        assert!(!result.response.is_empty());

        let status = store.status(&id).await.unwrap();
        assert_eq!(
            status.current_offer.as_ref().and_then(|o| o.salary),
            Some(85_000)
        );
        assert_eq!(status.negotiation_history.len(), 2);
        assert!(matches!(
            status.negotiation_history[0],
            HistoryRecord::OfferReceived { .. }
        ));
        assert!(matches!(
            status.negotiation_history[1],
            HistoryRecord::ResponseSent { .. }
        ));

        // Default strategy — template must belong to it; with the offer
        // below target, the boosted salary template wins (0.85+0.1 > 0.90).
        assert_eq!(result.template_id, "salary_undervalued");
        assert_eq!(
            status.strategy,
            NegotiationStrategy::ProfessionalPassiveAggressive
        );
    }

    #[tokio::test]
    async fn test_analyzer_failure_still_produces_text() {
        let (orchestrator, store) = make_orchestrator(true, false);
        let id = make_context(&store).await;

        let result = orchestrator
            .generate_response(&id, "Take it or leave it.", None)
            .await
            .unwrap();
        assert!(!result.response.trim().is_empty());
    }

    #[tokio::test]
    async fn test_enhancer_failure_returns_filled_draft_verbatim() {
        let (orchestrator, store) = make_orchestrator(false, true);
        let id = make_context(&store).await;

        let result = orchestrator
            .generate_response(&id, "The offer stands as-is.", None)
            .await
            .unwrap();
        assert!(!result.response.starts_with("[enhanced]"));
        // Draft came from the chosen template with placeholders filled.
        assert!(!result.response.contains('{'));
        assert!(!result.response.is_empty());
    }

    #[tokio::test]
    async fn test_enhanced_text_is_returned_and_logged_to_history() {
        let (orchestrator, store) = make_orchestrator(false, false);
        let id = make_context(&store).await;

        let result = orchestrator
            .generate_response(&id, "Any flexibility on start date?", None)
            .await
            .unwrap();
        assert!(result.response.starts_with("[enhanced]"));

        let status = store.status(&id).await.unwrap();
        match &status.negotiation_history[0] {
            HistoryRecord::ResponseSent {
                template_id,
                response,
                ..
            } => {
                assert_eq!(template_id, &result.template_id);
                assert_eq!(response, &result.response);
            }
            other => panic!("expected ResponseSent, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_history_grows_by_turns_plus_offers() {
        let (orchestrator, store) = make_orchestrator(false, false);
        let id = make_context(&store).await;

        // 4 turns, 2 with offers: expect 4 + 2 = 6 records in call order.
        for (i, with_offer) in [true, false, true, false].into_iter().enumerate() {
            let offer = with_offer.then(|| OfferDetails {
                salary: Some(85_000 + i as i64 * 5_000),
                ..Default::default()
            });
            orchestrator
                .generate_response(&id, "Here's where we stand.", offer)
                .await
                .unwrap();
        }

        let status = store.status(&id).await.unwrap();
        assert_eq!(status.negotiation_history.len(), 6);
        // Last offer replaced the first wholesale.
        assert_eq!(
            status.current_offer.as_ref().and_then(|o| o.salary),
            Some(95_000)
        );
    }

    #[tokio::test]
    async fn test_unknown_context_is_not_found() {
        let (orchestrator, _store) = make_orchestrator(false, false);
        let err = orchestrator
            .generate_response("ghost-99", "Hello?", None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ContextNotFound(_)));
    }

    #[tokio::test]
    async fn test_empty_catalog_for_strategy_propagates() {
        let store = Arc::new(ContextStore::new());
        let orchestrator = ResponseOrchestrator::new(
            store.clone(),
            Arc::new(TemplateCatalog::new(Vec::new())),
            Arc::new(StubAnalyzer { fail: false }),
            Arc::new(StubEnhancer { fail: false }),
        );
        let id = make_context(&store).await;
        let err = orchestrator
            .generate_response(&id, "Hello", None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NoTemplateAvailable(_)));

        // A failed turn must not append a response record.
        let status = store.status(&id).await.unwrap();
        assert!(status.negotiation_history.is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_turns_on_same_context_serialize() {
        let (orchestrator, store) = make_orchestrator(false, false);
        let id = make_context(&store).await;

        let mut handles = Vec::new();
        for _ in 0..8 {
            let orch = orchestrator.clone();
            let id = id.clone();
            handles.push(tokio::spawn(async move {
                orch.generate_response(&id, "ping", None).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        // No lost updates: every turn appended exactly one record.
        let status = store.status(&id).await.unwrap();
        assert_eq!(status.negotiation_history.len(), 8);
    }
}
