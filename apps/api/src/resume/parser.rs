//! Resume parsing — turns raw resume text into a structured profile.
//!
//! Primary path is an LLM extraction call; when that fails for any reason
//! the deterministic regex fallback takes over, so parsing itself never
//! fails a request. Fallback defaults: zero experience, Bachelor's-level
//! education, "technology" industry, empty skill list.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{CallOptions, LlmClient};
use crate::negotiation::models::{CandidateProfile, ContactInfo, EducationLevel};
use crate::resume::prompts::RESUME_PARSE_PROMPT_TEMPLATE;

/// Parsing runs near-deterministic with room for long resumes.
const PARSE_OPTIONS: CallOptions = CallOptions::new(2000, 0.1);

/// At most this many skills survive the fallback keyword scan.
const MAX_FALLBACK_SKILLS: usize = 10;

/// One prior position listed on the resume.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkExperienceEntry {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

/// Structured data extracted from a resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedResume {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub years_experience: u32,
    pub education_level: EducationLevel,
    pub industry: String,
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
    pub achievements: Vec<String>,
    pub work_experience: Vec<WorkExperienceEntry>,
    pub languages: Vec<String>,
}

impl Default for ParsedResume {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            years_experience: 0,
            education_level: EducationLevel::Bachelors,
            industry: "technology".to_string(),
            skills: Vec::new(),
            certifications: Vec::new(),
            achievements: Vec::new(),
            work_experience: Vec::new(),
            languages: Vec::new(),
        }
    }
}

impl ParsedResume {
    /// Converts parsed fields into the profile shape the negotiation core
    /// expects, deriving the leadership flag and key achievement.
    pub fn to_profile(&self) -> CandidateProfile {
        let key_achievement = self
            .achievements
            .first()
            .cloned()
            .or_else(|| self.achievement_from_experience());

        let leadership_experience = self.work_experience.iter().any(|exp| {
            let title = exp.title.to_lowercase();
            title.contains("manager") || title.contains("lead")
        });

        CandidateProfile {
            years_experience: self.years_experience,
            education_level: self.education_level,
            industry: Some(self.industry.clone()),
            primary_skill: self.skills.first().cloned(),
            key_achievement,
            skills: self.skills.clone(),
            certifications: self.certifications.clone(),
            leadership_experience,
            industry_awards: self.achievements.iter().take(3).cloned().collect(),
            competing_offer: None,
            contact: Some(ContactInfo {
                name: self.name.clone(),
                email: self.email.clone(),
                phone: self.phone.clone(),
            }),
        }
    }

    /// Falls back to the first impact-sounding line of a job description.
    fn achievement_from_experience(&self) -> Option<String> {
        self.work_experience.iter().find_map(|exp| {
            let description = exp.description.to_lowercase();
            let impactful = description.contains("increased")
                || description.contains("improved")
                || description.contains("led");
            impactful.then(|| truncate(&exp.description, 100))
        })
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{cut}...")
    }
}

/// LLM-first resume parser with a deterministic fallback.
#[derive(Clone)]
pub struct ResumeParser {
    llm: LlmClient,
}

impl ResumeParser {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }

    /// Never fails: an LLM error or malformed response degrades to the
    /// regex fallback rather than surfacing to the caller.
    pub async fn parse(&self, raw_text: &str) -> ParsedResume {
        let prompt = RESUME_PARSE_PROMPT_TEMPLATE.replace("{resume_text}", raw_text);
        match self
            .llm
            .call_json::<ParsedResume>(&prompt, JSON_ONLY_SYSTEM, PARSE_OPTIONS)
            .await
        {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("LLM resume parsing failed, using fallback parser: {e}");
                fallback_parse(raw_text)
            }
        }
    }
}

/// Keywords scanned by the fallback skill detector.
const SKILL_KEYWORDS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "react",
    "angular",
    "vue",
    "node.js",
    "sql",
    "mongodb",
    "postgresql",
    "aws",
    "azure",
    "docker",
    "kubernetes",
    "git",
    "agile",
    "scrum",
    "project management",
    "leadership",
    "communication",
    "data analysis",
    "machine learning",
    "artificial intelligence",
    "blockchain",
    "cybersecurity",
    "devops",
    "frontend",
    "backend",
    "full stack",
];

/// Industry keyword map, checked in order; first hit wins, technology
/// is the default.
const INDUSTRY_KEYWORDS: &[(&str, &[&str])] = &[
    ("finance", &["finance", "banking", "investment", "financial"]),
    (
        "healthcare",
        &["healthcare", "medical", "pharmaceutical", "hospital"],
    ),
    (
        "education",
        &["education", "teaching", "academic", "university"],
    ),
    ("consulting", &["consulting", "advisory", "strategy"]),
    (
        "marketing",
        &["marketing", "advertising", "brand", "digital marketing"],
    ),
    ("retail", &["retail", "e-commerce", "sales", "customer service"]),
];

/// Deterministic regex/keyword parsing for when no richer extraction is
/// available.
pub fn fallback_parse(text: &str) -> ParsedResume {
    let text_lower = text.to_lowercase();

    let email = email_re()
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    let phone = phone_re()
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    let name = text
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default()
        .to_string();

    let skills: Vec<String> = SKILL_KEYWORDS
        .iter()
        .filter(|kw| text_lower.contains(*kw))
        .take(MAX_FALLBACK_SKILLS)
        .map(|kw| title_case(kw))
        .collect();

    let years_experience = experience_res()
        .iter()
        .find_map(|re| re.captures(&text_lower))
        .and_then(|caps| caps[1].parse::<u32>().ok())
        .unwrap_or(0);

    let education_level = if masters_re().is_match(&text_lower) {
        EducationLevel::Masters
    } else if phd_re().is_match(&text_lower) {
        EducationLevel::PhD
    } else if associate_re().is_match(&text_lower) {
        EducationLevel::Associate
    } else {
        EducationLevel::Bachelors
    };

    let industry = INDUSTRY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| text_lower.contains(kw)))
        .map(|(industry, _)| industry.to_string())
        .unwrap_or_else(|| "technology".to_string());

    ParsedResume {
        name,
        email,
        phone,
        years_experience,
        education_level,
        industry,
        skills,
        ..Default::default()
    }
}

fn title_case(phrase: &str) -> String {
    phrase
        .split(' ')
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

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid regex")
    })
}

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(\+?1[-.\s]?)?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}")
            .expect("valid regex")
    })
}

fn experience_res() -> &'static [Regex; 3] {
    static RES: OnceLock<[Regex; 3]> = OnceLock::new();
    RES.get_or_init(|| {
        [
            Regex::new(r"(\d+)\s*years?\s*of\s*experience").expect("valid regex"),
            Regex::new(r"experience:\s*(\d+)").expect("valid regex"),
            Regex::new(r"(\d+)\+?\s*years?\s*in").expect("valid regex"),
        ]
    })
}

fn masters_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(master'?s?|mba|m\.?sc)\b").expect("valid regex"))
}

fn phd_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(ph\.?\s?d|doctorate)\b").expect("valid regex"))
}

fn associate_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(associate|diploma)\b").expect("valid regex"))
}
