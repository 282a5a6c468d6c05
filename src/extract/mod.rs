use serde_json::Value;
use thiserror::Error;

const EXCERPT_CHARS: usize = 200;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no JSON object found in model response (starts with: {excerpt:?})")]
pub struct ExtractionError {
    pub excerpt: String,
}

impl ExtractionError {
    pub(crate) fn from_text(text: &str) -> Self {
        Self {
            excerpt: text.trim().chars().take(EXCERPT_CHARS).collect(),
        }
    }
}

/// Locate a JSON object in free-form model output.
///
/// Tried in order: the whole text, fenced code blocks (```json or bare ```),
/// then balanced `{...}` spans anywhere in the text. Within the last two tiers
/// the largest object that parses wins, so a stray `{}` in prose never shadows
/// the real answer.
pub fn extract_json_object(text: &str) -> Result<Value, ExtractionError> {
    if let Some(v) = parse_object(text) {
        return Ok(v);
    }
    let fenced = fenced_blocks(text)
        .into_iter()
        .filter_map(|b| parse_object(b).map(|v| (b.trim().len(), v)));
    if let Some(v) = largest(fenced) {
        return Ok(v);
    }
    largest(objects_in_prose(text).into_iter()).ok_or_else(|| ExtractionError::from_text(text))
}

/// Like [`extract_json_object`] but also accepts a top-level array.
pub fn extract_json_value(text: &str) -> Result<Value, ExtractionError> {
    let trimmed = text.trim();
    if let Ok(v @ Value::Array(_)) = serde_json::from_str::<Value>(trimmed) {
        return Ok(v);
    }
    for block in fenced_blocks(text) {
        if let Ok(v @ Value::Array(_)) = serde_json::from_str::<Value>(block.trim()) {
            return Ok(v);
        }
    }
    extract_json_object(text)
}

/// Biggest candidate by source length; the earliest one on ties.
fn largest(candidates: impl Iterator<Item = (usize, Value)>) -> Option<Value> {
    let mut best: Option<(usize, Value)> = None;
    for (len, v) in candidates {
        if best.as_ref().map_or(true, |(b, _)| len > *b) {
            best = Some((len, v));
        }
    }
    best.map(|(_, v)| v)
}

fn parse_object(s: &str) -> Option<Value> {
    match serde_json::from_str::<Value>(s.trim()) {
        Ok(v @ Value::Object(_)) => Some(v),
        _ => None,
    }
}

/// Contents of ``` fenced blocks, with the info string (e.g. `json`) removed.
fn fenced_blocks(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut rest = text;
    while let Some(open) = rest.find("```") {
        let after = &rest[open + 3..];
        let body_start = match after.find('\n') {
            Some(nl) => nl + 1,
            None => break,
        };
        let body = &after[body_start..];
        match body.find("```") {
            Some(close) => {
                out.push(&body[..close]);
                rest = &body[close + 3..];
            }
            None => {
                // Unterminated fence: take the remainder.
                out.push(body);
                break;
            }
        }
    }
    out
}

/// Every balanced `{...}` span that parses as an object, with its length.
/// A span that fails to parse, or an opening brace that never closes,
/// restarts the scan one byte further on.
fn objects_in_prose(text: &str) -> Vec<(usize, Value)> {
    let bytes = text.as_bytes();
    let mut found = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'{' {
            i += 1;
            continue;
        }
        let parsed = balanced_end(bytes, i)
            .and_then(|end| parse_object(&text[i..=end]).map(|v| (end, v)));
        match parsed {
            Some((end, v)) => {
                found.push((end + 1 - i, v));
                i = end + 1;
            }
            None => i += 1,
        }
    }
    found
}

/// Index of the `}` closing the brace at `start`. Braces inside JSON strings
/// are skipped.
fn balanced_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, &b) in bytes.iter().enumerate().skip(start) {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_object() {
        let v = extract_json_object(r#"  {"a": 1}  "#).unwrap();
        assert_eq!(v, json!({"a": 1}));
    }

    #[test]
    fn fenced_json_block() {
        let text = "Here is your spec:\n```json\n{\"businessName\": \"Acme\"}\n```\nEnjoy!";
        let v = extract_json_object(text).unwrap();
        assert_eq!(v["businessName"], "Acme");
    }

    #[test]
    fn fenced_block_without_language() {
        let text = "```\n{\"ok\": true}\n```";
        assert_eq!(extract_json_object(text).unwrap(), json!({"ok": true}));
    }

    #[test]
    fn object_inside_prose() {
        let text = "Sure! {\"tagline\": \"Brace yourself: {not json}\", \"n\": {\"x\": 2}} Let me know.";
        let v = extract_json_object(text).unwrap();
        assert_eq!(v["tagline"], "Brace yourself: {not json}");
        assert_eq!(v["n"]["x"], 2);
    }

    #[test]
    fn skips_unparseable_span_and_takes_next() {
        let text = "{not: valid} then {\"good\": 1}";
        assert_eq!(extract_json_object(text).unwrap(), json!({"good": 1}));
    }

    #[test]
    fn stray_open_brace_before_the_object() {
        let text = "Sure :-{ here is the spec: {\"businessName\": \"Acme\"} hope it helps";
        assert_eq!(extract_json_object(text).unwrap(), json!({"businessName": "Acme"}));
    }

    #[test]
    fn empty_placeholder_does_not_shadow_the_answer() {
        let text = "I replaced every {} placeholder. {\"businessName\": \"Acme\"}";
        assert_eq!(extract_json_object(text).unwrap()["businessName"], "Acme");
    }

    #[test]
    fn largest_fenced_block_wins() {
        let text = "```json\n{}\n```\nand the real one:\n```json\n{\"a\": {\"b\": 1}}\n```";
        assert_eq!(extract_json_object(text).unwrap(), json!({"a": {"b": 1}}));
    }

    #[test]
    fn nothing_to_extract() {
        let err = extract_json_object("I cannot help with that.").unwrap_err();
        assert_eq!(err.excerpt, "I cannot help with that.");
        assert!(extract_json_object("[1, 2, 3]").is_err());
    }

    #[test]
    fn arrays_when_allowed() {
        assert_eq!(
            extract_json_value("```json\n[\"a\", \"b\"]\n```").unwrap(),
            json!(["a", "b"])
        );
        assert_eq!(
            extract_json_value("{\"variations\": []}").unwrap(),
            json!({"variations": []})
        );
    }
}
