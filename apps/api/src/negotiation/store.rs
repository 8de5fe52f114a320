//! Negotiation Context Store — in-memory registry of active negotiations.
//!
//! Each context sits behind its own `tokio::sync::Mutex`; a full response
//! turn holds that lock from offer recording through history append, so
//! concurrent turns against the same context serialize while different
//! contexts proceed in parallel. Nothing is persisted — contexts live for
//! the process lifetime only.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::info;

use crate::errors::AppError;
use crate::negotiation::leverage::identify_leverage_points;
use crate::negotiation::models::{
    CandidateProfile, NegotiationContext, NegotiationStatus, NegotiationStrategy,
};

/// Arguments for creating a new negotiation context.
#[derive(Debug, Clone)]
pub struct CreateContextParams {
    pub company_name: String,
    pub position: String,
    pub user_profile: CandidateProfile,
    pub target_salary: Option<i64>,
    pub target_benefits: Vec<String>,
    pub deal_breakers: Vec<String>,
}

/// Shared handle to one negotiation's state.
pub type ContextHandle = Arc<Mutex<NegotiationContext>>;

#[derive(Debug, Default)]
pub struct ContextStore {
    contexts: RwLock<HashMap<String, ContextHandle>>,
    // Monotonic creation sequence: identifiers never collide within a
    // process even for identical company/position pairs.
    next_seq: AtomicU64,
}

impl ContextStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context, deriving its leverage points from the profile,
    /// and returns the new identifier.
    pub async fn create(&self, params: CreateContextParams) -> String {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        let context_id = format!(
            "{}-{}-{}",
            slug(&params.company_name),
            slug(&params.position),
            seq
        );

        let leverage_points = identify_leverage_points(&params.user_profile);
        let context = NegotiationContext {
            company_name: params.company_name,
            position: params.position,
            current_offer: None,
            user_profile: params.user_profile,
            negotiation_history: Vec::new(),
            strategy: NegotiationStrategy::default(),
            target_salary: params.target_salary,
            target_benefits: params.target_benefits,
            deal_breakers: params.deal_breakers,
            leverage_points,
        };

        info!(
            "Created negotiation context '{}' ({} leverage points)",
            context_id,
            context.leverage_points.len()
        );

        self.contexts
            .write()
            .await
            .insert(context_id.clone(), Arc::new(Mutex::new(context)));
        context_id
    }

    /// Resolves a context handle. Never fabricates a context for an
    /// unknown identifier.
    pub async fn get(&self, context_id: &str) -> Result<ContextHandle, AppError> {
        self.contexts
            .read()
            .await
            .get(context_id)
            .cloned()
            .ok_or_else(|| AppError::ContextNotFound(context_id.to_string()))
    }

    pub async fn update_strategy(
        &self,
        context_id: &str,
        strategy: NegotiationStrategy,
    ) -> Result<(), AppError> {
        let handle = self.get(context_id).await?;
        let mut context = handle.lock().await;
        context.strategy = strategy;
        info!(
            "Strategy for '{}' updated to '{}'",
            context_id,
            strategy.as_str()
        );
        Ok(())
    }

    /// Appends a leverage point verbatim. Duplicates are allowed by design.
    pub async fn add_leverage_point(
        &self,
        context_id: &str,
        leverage_point: String,
    ) -> Result<(), AppError> {
        let handle = self.get(context_id).await?;
        let mut context = handle.lock().await;
        info!("Added leverage point '{leverage_point}' to '{context_id}'");
        context.leverage_points.push(leverage_point);
        Ok(())
    }

    /// Read-only snapshot of the full context for external display.
    pub async fn status(&self, context_id: &str) -> Result<NegotiationStatus, AppError> {
        let handle = self.get(context_id).await?;
        let context = handle.lock().await;
        Ok(context.status())
    }
}

/// Lowercases and collapses non-alphanumeric runs to single dashes.
fn slug(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_dash = false;
    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    if out.is_empty() {
        out.push_str("unnamed");
    }
    out
}
