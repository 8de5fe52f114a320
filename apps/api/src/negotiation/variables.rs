//! Placeholder filling for response templates.
//!
//! Every placeholder a template may reference has a fixed default, so a
//! sparse profile never fails a turn. An unregistered placeholder is a
//! catalog authoring bug and surfaces as `TemplateVariableError`.

use crate::errors::AppError;
use crate::negotiation::catalog::ResponseTemplate;
use crate::negotiation::models::NegotiationContext;

/// Fills the template's declared placeholders from the negotiation context.
///
/// Fails only on a placeholder with no registered default — and in that
/// case returns no text at all rather than a partially filled draft.
pub fn fill_template(
    template: &ResponseTemplate,
    context: &NegotiationContext,
) -> Result<String, AppError> {
    let mut text = template.template_text.to_string();
    for name in template.variables {
        let value = resolve_variable(name, context)?;
        text = text.replace(&format!("{{{name}}}"), &value);
    }
    Ok(text)
}

fn resolve_variable(name: &str, context: &NegotiationContext) -> Result<String, AppError> {
    let profile = &context.user_profile;
    let value = match name {
        "experience_years" => {
            if profile.years_experience > 0 {
                profile.years_experience.to_string()
            } else {
                "5+".to_string()
            }
        }
        "industry" => profile
            .industry
            .clone()
            .unwrap_or_else(|| "technology".to_string()),
        "achievement" => profile
            .key_achievement
            .clone()
            .unwrap_or_else(|| "delivering exceptional results".to_string()),
        "benefit_type" => "health insurance".to_string(),
        "skill_area" => profile
            .primary_skill
            .clone()
            .unwrap_or_else(|| "software development".to_string()),
        "specific_achievement" => profile
            .key_achievement
            .clone()
            .unwrap_or_else(|| "increasing team productivity by 40%".to_string()),
        "company_name" => context.company_name.clone(),
        _ => return Err(AppError::TemplateVariable(name.to_string())),
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::negotiation::catalog::TemplateCatalog;
    use crate::negotiation::models::{
        CandidateProfile, NegotiationStrategy, ResponseTone,
    };

    fn make_context(profile: CandidateProfile) -> NegotiationContext {
        NegotiationContext {
            company_name: "TechCorp Inc".to_string(),
            position: "Senior Product Manager".to_string(),
            current_offer: None,
            user_profile: profile,
            negotiation_history: Vec::new(),
            strategy: NegotiationStrategy::default(),
            target_salary: None,
            target_benefits: Vec::new(),
            deal_breakers: Vec::new(),
            leverage_points: Vec::new(),
        }
    }

    fn builtin(template_id: &str) -> ResponseTemplate {
        TemplateCatalog::builtin()
            .templates()
            .iter()
            .find(|t| t.template_id == template_id)
            .unwrap()
            .clone()
    }

    #[test]
    fn test_fill_from_populated_profile() {
        let profile = CandidateProfile {
            years_experience: 7,
            industry: Some("fintech".to_string()),
            key_achievement: Some("led a team that increased revenue by 150%".to_string()),
            ..Default::default()
        };
        let filled = fill_template(&builtin("salary_undervalued"), &make_context(profile)).unwrap();
        assert!(filled.contains("7 years of experience in fintech"));
        assert!(filled.contains("led a team that increased revenue by 150%"));
        assert!(!filled.contains('{'), "all placeholders must be replaced");
    }

    #[test]
    fn test_fill_uses_defaults_for_missing_fields() {
        let filled = fill_template(
            &builtin("salary_undervalued"),
            &make_context(CandidateProfile::default()),
        )
        .unwrap();
        assert!(filled.contains("5+ years of experience in technology"));
        assert!(filled.contains("delivering exceptional results"));
    }

    #[test]
    fn test_company_name_comes_from_context() {
        let filled = fill_template(
            &builtin("market_value_assertion"),
            &make_context(CandidateProfile::default()),
        )
        .unwrap();
        assert!(filled.contains("TechCorp Inc"));
        assert!(filled.contains("software development"));
        assert!(filled.contains("increasing team productivity by 40%"));
    }

    #[test]
    fn test_template_without_variables_passes_through() {
        let template = builtin("timeline_pressure");
        let filled = fill_template(&template, &make_context(CandidateProfile::default())).unwrap();
        assert_eq!(filled, template.template_text);
    }

    #[test]
    fn test_unregistered_placeholder_fails_without_partial_text() {
        let template = ResponseTemplate {
            template_id: "broken",
            strategy: NegotiationStrategy::default(),
            tone: ResponseTone::PoliteButFirm,
            template_text: "Known {industry} then unknown {unregistered_var}.",
            variables: &["industry", "unregistered_var"],
            effectiveness_score: 0.5,
        };
        let err = fill_template(&template, &make_context(CandidateProfile::default())).unwrap_err();
        match err {
            AppError::TemplateVariable(name) => assert_eq!(name, "unregistered_var"),
            other => panic!("expected TemplateVariable, got {other:?}"),
        }
    }
}
