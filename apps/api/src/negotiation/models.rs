//! Core domain types for an ongoing negotiation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Overall posture the candidate wants their replies to take.
/// Drives template selection — only templates tagged with the active
/// strategy are ever considered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegotiationStrategy {
    #[default]
    ProfessionalPassiveAggressive,
    ConfidentAssertive,
    CollaborativeProblemSolver,
    StrategicQuestioner,
}

impl NegotiationStrategy {
    pub const ALL: [NegotiationStrategy; 4] = [
        NegotiationStrategy::ProfessionalPassiveAggressive,
        NegotiationStrategy::ConfidentAssertive,
        NegotiationStrategy::CollaborativeProblemSolver,
        NegotiationStrategy::StrategicQuestioner,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NegotiationStrategy::ProfessionalPassiveAggressive => {
                "professional_passive_aggressive"
            }
            NegotiationStrategy::ConfidentAssertive => "confident_assertive",
            NegotiationStrategy::CollaborativeProblemSolver => "collaborative_problem_solver",
            NegotiationStrategy::StrategicQuestioner => "strategic_questioner",
        }
    }

    /// Human-readable name for display surfaces ("Confident Assertive").
    pub fn display_name(&self) -> String {
        self.as_str()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Emotional register of a response template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseTone {
    PoliteButFirm,
    ProfessionallyDisappointed,
    StrategicallyCurious,
    ConfidentlyAssertive,
}

/// Highest education level claimed by the candidate.
/// Lenient on deserialization — anything unrecognized lands in `Other`
/// rather than failing profile intake.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum EducationLevel {
    #[serde(rename = "High School")]
    HighSchool,
    Associate,
    #[default]
    #[serde(rename = "Bachelor's")]
    Bachelors,
    Masters,
    PhD,
    Other,
}

impl From<String> for EducationLevel {
    fn from(value: String) -> Self {
        match value.trim() {
            "High School" => EducationLevel::HighSchool,
            "Associate" => EducationLevel::Associate,
            "Bachelor's" | "Bachelors" => EducationLevel::Bachelors,
            "Masters" | "Master's" => EducationLevel::Masters,
            "PhD" | "Ph.D." => EducationLevel::PhD,
            _ => EducationLevel::Other,
        }
    }
}

impl EducationLevel {
    /// Masters and PhD count as advanced education for leverage purposes.
    pub fn is_advanced(&self) -> bool {
        matches!(self, EducationLevel::Masters | EducationLevel::PhD)
    }
}

/// Contact details carried along from resume parsing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// The candidate's attributes. Immutable after context creation.
///
/// Every field is defaultable so callers may pass a partial profile
/// (e.g. the best-effort output of the resume fallback parser).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateProfile {
    pub years_experience: u32,
    pub education_level: EducationLevel,
    pub industry: Option<String>,
    pub primary_skill: Option<String>,
    pub key_achievement: Option<String>,
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
    pub leadership_experience: bool,
    pub industry_awards: Vec<String>,
    /// Freeform marker that the candidate holds a competing offer.
    pub competing_offer: Option<String>,
    pub contact: Option<ContactInfo>,
}

/// A concrete offer from the employer. Replaced wholesale each time a
/// new offer arrives — never merged with the previous one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OfferDetails {
    pub salary: Option<i64>,
    pub benefits: Vec<String>,
    pub start_date: Option<String>,
    pub remote: Option<bool>,
}

/// One turn in the negotiation. History is append-only and chronological.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HistoryRecord {
    OfferReceived {
        timestamp: DateTime<Utc>,
        offer: OfferDetails,
    },
    ResponseSent {
        timestamp: DateTime<Utc>,
        template_id: String,
        response: String,
    },
}

/// Full state of one active negotiation. Lives in the `ContextStore`
/// for the process lifetime; nothing is persisted.
#[derive(Debug, Clone, Serialize)]
pub struct NegotiationContext {
    pub company_name: String,
    pub position: String,
    pub current_offer: Option<OfferDetails>,
    pub user_profile: CandidateProfile,
    pub negotiation_history: Vec<HistoryRecord>,
    pub strategy: NegotiationStrategy,
    pub target_salary: Option<i64>,
    pub target_benefits: Vec<String>,
    pub deal_breakers: Vec<String>,
    pub leverage_points: Vec<String>,
}

/// Structured output of the external tactic analyzer. Treated as
/// unstructured evidence — fields default rather than fail.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TacticAnalysis {
    pub tactic: String,
    pub pressure_points: Vec<String>,
    pub response_strategy: String,
}

impl TacticAnalysis {
    /// Neutral analysis used when the external analyzer fails — the
    /// negotiation flow must never hard-fail on a sentiment hiccup.
    pub fn fallback() -> Self {
        Self {
            tactic: "unknown".to_string(),
            pressure_points: Vec::new(),
            response_strategy: "professional".to_string(),
        }
    }
}

/// Read-only projection of a negotiation, suitable for external display.
#[derive(Debug, Clone, Serialize)]
pub struct NegotiationStatus {
    pub company: String,
    pub position: String,
    pub strategy: NegotiationStrategy,
    pub current_offer: Option<OfferDetails>,
    pub negotiation_history: Vec<HistoryRecord>,
    pub leverage_points: Vec<String>,
    pub target_salary: Option<i64>,
}

impl NegotiationContext {
    pub fn status(&self) -> NegotiationStatus {
        NegotiationStatus {
            company: self.company_name.clone(),
            position: self.position.clone(),
            strategy: self.strategy,
            current_offer: self.current_offer.clone(),
            negotiation_history: self.negotiation_history.clone(),
            leverage_points: self.leverage_points.clone(),
            target_salary: self.target_salary,
        }
    }
}
