#![allow(dead_code)]

//! Template Catalog — the fixed set of response templates, loaded once at
//! startup and shared read-only across all negotiations.

use crate::negotiation::models::{NegotiationStrategy, ResponseTone};

/// A canned negotiation reply with named `{placeholder}` slots.
/// `effectiveness_score` is a prior in [0,1] used by the selector.
#[derive(Debug, Clone)]
pub struct ResponseTemplate {
    pub template_id: &'static str,
    pub strategy: NegotiationStrategy,
    pub tone: ResponseTone,
    pub template_text: &'static str,
    pub variables: &'static [&'static str],
    pub effectiveness_score: f64,
}

/// Immutable lookup table of response templates, keyed by strategy at
/// query time. Constructed once in `main` and never mutated.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: Vec<ResponseTemplate>,
}

impl TemplateCatalog {
    pub fn new(templates: Vec<ResponseTemplate>) -> Self {
        Self { templates }
    }

    /// The built-in templates covering all four strategies.
    pub fn builtin() -> Self {
        Self::new(builtin_templates())
    }

    pub fn templates(&self) -> &[ResponseTemplate] {
        &self.templates
    }

    /// Templates tagged with the given strategy, in catalog order.
    pub fn for_strategy(&self, strategy: NegotiationStrategy) -> Vec<&ResponseTemplate> {
        self.templates
            .iter()
            .filter(|t| t.strategy == strategy)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

fn builtin_templates() -> Vec<ResponseTemplate> {
    vec![
        // Professional passive-aggressive
        ResponseTemplate {
            template_id: "salary_undervalued",
            strategy: NegotiationStrategy::ProfessionalPassiveAggressive,
            tone: ResponseTone::ProfessionallyDisappointed,
            template_text: "Thank you for your offer. While I appreciate the opportunity, I must express some concern about the compensation package. Given my {experience_years} years of experience in {industry} and my track record of {achievement}, I had hoped for a more competitive offer that reflects market standards. \n\nI'm curious about your compensation philosophy - do you typically benchmark against industry standards? I'd be interested to understand how you arrived at this figure, as it seems significantly below what I've seen for similar roles at comparable companies.",
            variables: &["experience_years", "industry", "achievement"],
            effectiveness_score: 0.85,
        },
        ResponseTemplate {
            template_id: "benefits_inadequate",
            strategy: NegotiationStrategy::ProfessionalPassiveAggressive,
            tone: ResponseTone::StrategicallyCurious,
            template_text: "I notice the benefits package is quite different from what I've seen at other companies in this space. Specifically, the {benefit_type} seems limited compared to industry standards. \n\nCould you help me understand your benefits philosophy? I'm particularly interested in how you view employee retention and work-life balance, as these factors significantly impact my decision-making process.",
            variables: &["benefit_type"],
            effectiveness_score: 0.80,
        },
        ResponseTemplate {
            template_id: "timeline_pressure",
            strategy: NegotiationStrategy::ProfessionalPassiveAggressive,
            tone: ResponseTone::PoliteButFirm,
            template_text: "I understand you'd like a quick decision, but I'm currently evaluating multiple opportunities and want to ensure I make the right choice for my career. Rushing this decision wouldn't be fair to either of us.\n\nGiven the importance of this role and the long-term commitment involved, I believe taking the time to properly evaluate all aspects of the offer is in everyone's best interest. What's your typical timeline for candidates in similar situations?",
            variables: &[],
            effectiveness_score: 0.90,
        },
        // Confident assertive
        ResponseTemplate {
            template_id: "market_value_assertion",
            strategy: NegotiationStrategy::ConfidentAssertive,
            tone: ResponseTone::ConfidentlyAssertive,
            template_text: "Based on my research and conversations with industry peers, my market value for this role is significantly higher than what's being offered. My expertise in {skill_area} and proven track record of {specific_achievement} command premium compensation.\n\nI'm confident I can deliver exceptional value to {company_name}, but I need to ensure the compensation reflects that value proposition. Let's discuss how we can align the offer with market standards.",
            variables: &["skill_area", "specific_achievement", "company_name"],
            effectiveness_score: 0.88,
        },
        // Strategic questioner
        ResponseTemplate {
            template_id: "growth_opportunities",
            strategy: NegotiationStrategy::StrategicQuestioner,
            tone: ResponseTone::StrategicallyCurious,
            template_text: "I'm excited about the role, but I'd like to understand more about growth opportunities. Specifically:\n\n1. How do you typically handle salary reviews and promotions?\n2. What's the average tenure of employees in similar roles?\n3. How do you measure and reward exceptional performance?\n\nThese factors are crucial for my long-term career planning and will significantly influence my decision.",
            variables: &[],
            effectiveness_score: 0.82,
        },
        // Collaborative problem solver
        ResponseTemplate {
            template_id: "creative_solution",
            strategy: NegotiationStrategy::CollaborativeProblemSolver,
            tone: ResponseTone::PoliteButFirm,
            template_text: "I understand budget constraints, but I'm confident we can find a creative solution that works for both parties. Here are some alternatives I'd be open to discussing:\n\n- Performance-based bonuses tied to specific metrics\n- Additional equity/stock options\n- Professional development budget\n- Flexible work arrangements\n- Earlier salary review timeline\n\nWhat combination of these would make sense for your organization?",
            variables: &[],
            effectiveness_score: 0.87,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_catalog_is_nonempty() {
        assert_eq!(TemplateCatalog::builtin().len(), 6);
    }

    #[test]
    fn test_template_ids_are_unique() {
        let catalog = TemplateCatalog::builtin();
        let ids: HashSet<_> = catalog.templates().iter().map(|t| t.template_id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_effectiveness_scores_within_unit_interval() {
        for template in TemplateCatalog::builtin().templates() {
            assert!(
                (0.0..=1.0).contains(&template.effectiveness_score),
                "{} has score {}",
                template.template_id,
                template.effectiveness_score
            );
        }
    }

    #[test]
    fn test_every_strategy_has_at_least_one_template() {
        let catalog = TemplateCatalog::builtin();
        for strategy in NegotiationStrategy::ALL {
            assert!(
                !catalog.for_strategy(strategy).is_empty(),
                "no templates for {strategy:?}"
            );
        }
    }

    #[test]
    fn test_declared_variables_match_placeholders_in_text() {
        for template in TemplateCatalog::builtin().templates() {
            for var in template.variables {
                assert!(
                    template.template_text.contains(&format!("{{{var}}}")),
                    "{}: declared variable '{var}' missing from text",
                    template.template_id
                );
            }
            // And the reverse: every {placeholder} in the text is declared.
            for (start, _) in template.template_text.match_indices('{') {
                let rest = &template.template_text[start + 1..];
                if let Some(end) = rest.find('}') {
                    let name = &rest[..end];
                    assert!(
                        template.variables.contains(&name),
                        "{}: undeclared placeholder '{{{name}}}'",
                        template.template_id
                    );
                }
            }
        }
    }

    #[test]
    fn test_for_strategy_preserves_catalog_order() {
        let catalog = TemplateCatalog::builtin();
        let passive = catalog.for_strategy(NegotiationStrategy::ProfessionalPassiveAggressive);
        let ids: Vec<_> = passive.iter().map(|t| t.template_id).collect();
        assert_eq!(
            ids,
            vec!["salary_undervalued", "benefits_inadequate", "timeline_pressure"]
        );
    }
}
