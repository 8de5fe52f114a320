// All LLM prompt constants for the negotiation module.

/// System prompt for tactic analysis — enforces JSON-only output.
pub const TACTIC_ANALYSIS_SYSTEM: &str =
    "You are an expert negotiation analyst advising a job candidate. \
    Analyze a message from an employer and extract the negotiation tactics in play. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Tactic analysis prompt template.
/// Replace: {message}, {company}, {position}, {target_salary}, {leverage_points}
pub const TACTIC_ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze this negotiation message from a company recruiter or hiring manager.

Message: "{message}"

Context:
- Company: {company}
- Position: {position}
- Candidate's target salary: {target_salary}
- Candidate's leverage points: {leverage_points}

Determine:
1. What negotiation tactic is the company using?
2. What pressure points are they applying?
3. How should the candidate respond strategically?

Return a JSON object with this EXACT schema (no extra fields):
{
  "tactic": "short snake_case label, e.g. deadline_pressure",
  "pressure_points": ["one phrase per pressure point"],
  "response_strategy": "one-line strategic recommendation"
}"#;

/// System prompt for response enhancement — plain text out, no JSON.
pub const ENHANCE_SYSTEM: &str =
    "You are a professional negotiation coach polishing a job candidate's reply. \
    Respond with the improved message text only. \
    Do NOT add commentary, headers, or surrounding quotes.";

/// Response enhancement prompt template.
/// Replace: {draft}, {company}, {position}, {target_salary}, {leverage_points}
pub const ENHANCE_PROMPT_TEMPLATE: &str = r#"Enhance this professional negotiation response to be more persuasive and strategically effective.

Original response:
{draft}

Context:
- Company: {company}
- Position: {position}
- Target salary: {target_salary}
- Leverage points: {leverage_points}

Make the response more compelling while maintaining professionalism. Add subtle positioning that makes the candidate appear more valuable and desirable. Keep the response concise but impactful."#;
