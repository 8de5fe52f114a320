//! Template Selector — deterministic scoring and ranking of catalog
//! templates for the current negotiation state.
//!
//! Intentionally a simple, auditable heuristic: filter by the context's
//! active strategy, rank by effectiveness prior, boost salary-focused
//! templates when the offer on the table is below target. Given the same
//! catalog, context, and analysis, the result is always the same.

use std::cmp::Ordering;

use tracing::debug;

use crate::errors::AppError;
use crate::negotiation::catalog::{ResponseTemplate, TemplateCatalog};
use crate::negotiation::models::{NegotiationContext, TacticAnalysis};

/// Flat boost for salary-focused templates when the current offer
/// undershoots the target.
const BELOW_TARGET_SALARY_BOOST: f64 = 0.1;

/// Picks the best template for the context's strategy.
///
/// The `analysis` argument is part of the contract but not yet consulted:
/// ranking is driven by strategy and offer state alone (known gap).
pub fn select_template<'a>(
    catalog: &'a TemplateCatalog,
    _analysis: &TacticAnalysis,
    context: &NegotiationContext,
) -> Result<&'a ResponseTemplate, AppError> {
    let candidates = catalog.for_strategy(context.strategy);
    if candidates.is_empty() {
        return Err(AppError::NoTemplateAvailable(context.strategy));
    }

    let mut scored: Vec<(&ResponseTemplate, f64)> = candidates
        .into_iter()
        .map(|template| (template, score_template(template, context)))
        .collect();

    // Stable sort: ties keep catalog order, so selection is reproducible.
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let (best, score) = scored[0];
    debug!(
        "Selected template '{}' (score {:.2}) for strategy '{}'",
        best.template_id,
        score,
        context.strategy.as_str()
    );
    Ok(best)
}

fn score_template(template: &ResponseTemplate, context: &NegotiationContext) -> f64 {
    let mut score = template.effectiveness_score;
    if salary_boost_applies(template.template_id, context) {
        score += BELOW_TARGET_SALARY_BOOST;
    }
    score
}

/// The boost fires only for salary-focused templates, and only when an
/// offer is on the table below the target. A missing target (or a missing
/// offer salary) is treated as 0 in the comparison.
fn salary_boost_applies(template_id: &str, context: &NegotiationContext) -> bool {
    let Some(offer) = &context.current_offer else {
        return false;
    };
    template_id.contains("salary")
        && offer.salary.unwrap_or(0) < context.target_salary.unwrap_or(0)
}
