// LLM prompt constants for resume parsing.

/// Resume parsing prompt template. Replace `{resume_text}` before sending.
pub const RESUME_PARSE_PROMPT_TEMPLATE: &str = r#"Parse the following resume text and extract structured information.

Return a JSON object with this EXACT schema (no extra fields):
{
  "name": "Full name",
  "email": "email@example.com",
  "phone": "phone number",
  "years_experience": 0,
  "education_level": "High School" | "Bachelor's" | "Masters" | "PhD",
  "industry": "primary industry (technology, finance, healthcare, etc.)",
  "skills": ["skill1", "skill2"],
  "certifications": ["cert1"],
  "achievements": ["achievement1"],
  "work_experience": [
    {
      "title": "Job Title",
      "company": "Company Name",
      "duration": "Duration",
      "description": "What they did there"
    }
  ],
  "languages": ["language1"]
}

Extract as much information as possible. Where information is not available,
use sensible defaults or empty arrays. `years_experience` is total years of
professional experience as a number.

RESUME TEXT:
{resume_text}"#;
