use serde_json::Value;

use crate::wire::{Instruction, NaturalLanguageInput};

fn schema_block() -> &'static str {
r##"{
  "businessName": "string",
  "tagline": "string",
  "description": "string",
  "hero": {
    "headline": "string",
    "subheadline": "string",
    "cta": {
      "text": "string",
      "url": "string",
      "style": "primary" | "secondary" | "outline"
    },
    "imageUrl": "string (optional)"
  },
  "features": [
    {
      "title": "string",
      "description": "string",
      "icon": "string (emoji or icon name)"
    }
  ],
  "about": {
    "title": "string",
    "content": "string"
  },
  "contact": {
    "email": "string (optional)",
    "phone": "string (optional)",
    "address": "string (optional)",
    "social": {
      "twitter": "string (optional)",
      "facebook": "string (optional)",
      "instagram": "string (optional)",
      "linkedin": "string (optional)",
      "github": "string (optional)"
    }
  },
  "colors": {
    "primary": "#RRGGBB",
    "secondary": "#RRGGBB",
    "accent": "#RRGGBB",
    "background": "#RRGGBB (optional)",
    "text": "#RRGGBB (optional)"
  },
  "font": "modern" | "classic" | "playful" | "professional",
  "template": "minimal" | "bold" | "elegant" | "creative",
  "meta": {
    "title": "string (SEO title)",
    "description": "string (SEO description)",
    "keywords": ["string"]
  }
}"##
}

fn field_rules() -> &'static str {
r##"Field rules (responses that break them are rejected):
- Every string field above that is not marked optional must be present and non-empty.
- features: between 3 and 6 items.
- colors: six-digit hex only, e.g. "#1e293b". No color names, no 3-digit shorthand, no alpha.
- contact.email, when given, must be a plain address like "hello@example.com".
- contact.social: only the five listed platforms; omit the ones you do not know."##
}

fn copy_guidelines() -> &'static str {
r#"Guidelines:
1. Make the copy compelling and benefit-focused
2. Use action-oriented language for CTAs
3. Choose colors that match the business type and brand personality
4. Ensure features focus on benefits, not just features
5. Keep headlines clear and concise"#
}

pub fn system_prompt_parse() -> String {
    "You are an expert at converting natural language business descriptions into structured landing page specifications. You always respond with a single valid JSON object and nothing else.".to_string()
}

pub fn user_prompt_parse(input: &NaturalLanguageInput) -> String {
    let mut extra = String::new();
    if let Some(t) = input.business_type.as_deref().filter(|s| !s.trim().is_empty()) {
        extra.push_str(&format!("Business Type: {t}\n"));
    }
    if let Some(a) = input.target_audience.as_deref().filter(|s| !s.trim().is_empty()) {
        extra.push_str(&format!("Target Audience: {a}\n"));
    }
    if let Some(c) = input.additional_context.as_deref().filter(|s| !s.trim().is_empty()) {
        extra.push_str(&format!("Additional Context: {c}\n"));
    }

    format!(
"Business Description:
{description}

{extra}
Convert this into a complete landing page specification with the following structure:
- businessName: Extract or infer the business name
- tagline: Create a compelling tagline (max 10 words)
- description: Brief business description (2-3 sentences)
- hero: Main headline, subheadline, and call-to-action
- features: Extract or create 3-6 key features/benefits
- about: Optional about section
- contact: Extract any contact information mentioned
- colors: Suggest an appropriate color scheme (hex colors)
- font: Suggest font style (modern/classic/playful/professional)
- template: Suggest template style (minimal/bold/elegant/creative)
- meta: SEO-optimized title, description, and keywords

{guidelines}

{rules}

Return ONLY valid JSON matching this exact schema:

{schema}

Return ONLY the JSON, no additional text.",
        description = input.description.trim(),
        extra = extra,
        guidelines = copy_guidelines(),
        rules = field_rules(),
        schema = schema_block(),
    )
}

pub fn parse_instruction(input: &NaturalLanguageInput) -> Instruction {
    Instruction {
        system: system_prompt_parse(),
        user: user_prompt_parse(input),
        temperature: 0.7,
        json_only: true,
    }
}

pub fn system_prompt_enhance() -> String {
    "You are a landing page copywriting expert. You always respond with a single valid JSON object and nothing else.".to_string()
}

pub fn user_prompt_enhance(current: &Value) -> String {
    let current_json = serde_json::to_string_pretty(current)
        .unwrap_or_else(|_| "<specification-json-unavailable>".to_string());
    format!(
"Enhance the following landing page specification with better copy, compelling headlines, and engaging feature descriptions.

Current Specification:
{current_json}

Provide an enhanced version with:
- More compelling headlines and taglines
- Better feature descriptions that focus on benefits
- Engaging call-to-action text
- SEO-optimized meta descriptions

Keep the colors, font and template unless they are missing or invalid.

{rules}

Return ONLY valid JSON matching this schema:

{schema}",
        rules = field_rules(),
        schema = schema_block(),
    )
}

pub fn enhance_instruction(current: &Value) -> Instruction {
    Instruction {
        system: system_prompt_enhance(),
        user: user_prompt_enhance(current),
        temperature: 0.8,
        json_only: true,
    }
}

pub fn system_prompt_copy() -> String {
    "You are an expert copywriter. You always respond with valid JSON.".to_string()
}

pub fn user_prompt_copy(section: &str, context: &Value) -> String {
    let context_json = serde_json::to_string_pretty(context)
        .unwrap_or_else(|_| "{}".to_string());
    format!(
"Generate 3 compelling variations for the {section} section of a landing page.

Context:
{context_json}

Guidelines:
- Make each variation unique and compelling
- Focus on benefits and emotional triggers
- Use action-oriented language
- Vary the tone and approach across variations

Return a JSON object with a \"variations\" array containing 3 strings:
{{
  \"variations\": [\"variation 1\", \"variation 2\", \"variation 3\"]
}}"
    )
}

pub fn copy_instruction(section: &str, context: &Value) -> Instruction {
    Instruction {
        system: system_prompt_copy(),
        user: user_prompt_copy(section, context),
        temperature: 0.9,
        json_only: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_prompt_includes_optional_context_only_when_given() {
        let mut input = NaturalLanguageInput::new("A bakery in Lisbon");
        let bare = user_prompt_parse(&input);
        assert!(bare.contains("A bakery in Lisbon"));
        assert!(!bare.contains("Business Type:"));

        input.business_type = Some("Food & Beverage".into());
        input.target_audience = Some("   ".into());
        let with_type = user_prompt_parse(&input);
        assert!(with_type.contains("Business Type: Food & Beverage"));
        assert!(!with_type.contains("Target Audience:"));
    }

    #[test]
    fn parse_prompt_carries_schema_and_rules() {
        let ins = parse_instruction(&NaturalLanguageInput::new("x"));
        assert!(ins.json_only);
        assert!(ins.user.contains("\"businessName\": \"string\""));
        assert!(ins.user.contains("between 3 and 6 items"));
        assert!(ins.user.contains(r##""primary": "#RRGGBB","##));
        assert!(ins.user.contains(r##"six-digit hex only, e.g. "#1e293b"."##));
    }

    #[test]
    fn enhance_prompt_embeds_current_spec() {
        let ins = enhance_instruction(&json!({"businessName": "Acme"}));
        assert!(ins.user.contains("\"businessName\": \"Acme\""));
        assert_eq!(ins.temperature, 0.8);
    }

    #[test]
    fn copy_prompt_names_section() {
        let text = user_prompt_copy("hero", &json!({"businessName": "Acme"}));
        assert!(text.contains("for the hero section"));
        assert!(text.contains("\"variations\""));
    }
}
