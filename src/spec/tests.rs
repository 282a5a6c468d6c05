//! Specification validation tests.

use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use super::*;

fn minimal_input() -> Value {
    json!({
        "businessName": "Acme",
        "tagline": "Go",
        "description": "d",
        "hero": {
            "headline": "h",
            "subheadline": "s",
            "cta": { "text": "Go", "url": "https://a.co" }
        },
        "features": [
            { "title": "A", "description": "a" },
            { "title": "B", "description": "b" },
            { "title": "C", "description": "c" }
        ],
        "colors": { "primary": "#000000", "secondary": "#111111", "accent": "#222222" },
        "meta": { "title": "t", "description": "d" }
    })
}

fn full_input() -> Value {
    json!({
        "businessName": "TechStart Solutions",
        "tagline": "Innovate Your Future Today",
        "description": "We provide cutting-edge technology solutions for modern businesses.",
        "hero": {
            "headline": "Transform Your Business with AI",
            "subheadline": "Powerful automation tools designed for the modern enterprise",
            "cta": { "text": "Get Started Free", "url": "https://example.com/signup", "style": "outline" },
            "imageUrl": "https://example.com/hero.jpg"
        },
        "features": [
            { "title": "AI-Powered Analytics", "description": "Insights from your data", "icon": "📊" },
            { "title": "Seamless Integration", "description": "Connect your tools in minutes", "icon": "🔗" },
            { "title": "24/7 Support", "description": "Always here to help", "icon": "💬" },
            { "title": "Security", "description": "Encrypted end to end" }
        ],
        "about": { "title": "About Us", "content": "Founded in 2020." },
        "contact": {
            "email": "hello@techstart.com",
            "phone": "+1 (555) 123-4567",
            "address": "123 Tech Street, San Francisco, CA",
            "social": {
                "twitter": "https://twitter.com/techstart",
                "linkedin": "https://linkedin.com/company/techstart",
                "github": "https://github.com/techstart"
            }
        },
        "colors": {
            "primary": "#3B82F6",
            "secondary": "#8b5cf6",
            "accent": "#06b6d4",
            "background": "#ffffff",
            "text": "#1f2937"
        },
        "font": "professional",
        "template": "bold",
        "meta": {
            "title": "TechStart Solutions - AI Business Automation",
            "description": "Transform your business with AI-powered automation tools.",
            "keywords": ["AI", "automation", "business"]
        }
    })
}

fn paths(err: &ValidationError) -> Vec<&str> {
    err.violations.iter().map(|v| v.path.as_str()).collect()
}

/// Remove the value at a dotted path (object keys only).
fn remove_path(value: &mut Value, path: &str) {
    let mut parts: Vec<&str> = path.split('.').collect();
    let last = parts.pop().unwrap();
    let mut cur = value;
    for p in parts {
        cur = cur.get_mut(p).unwrap();
    }
    cur.as_object_mut().unwrap().remove(last);
}

#[test]
fn minimal_scenario_validates_with_defaults() {
    let spec = validate(&minimal_input()).expect("minimal input should validate");
    assert_eq!(spec.business_name, "Acme");
    assert_eq!(spec.font, FontStyle::Modern);
    assert_eq!(spec.template, Template::Minimal);
    assert_eq!(spec.hero.cta.style, CtaStyle::Primary);
    assert_eq!(spec.features.len(), 3);
    assert!(spec.about.is_none());
    assert!(spec.contact.is_none());
    assert!(spec.meta.keywords.is_none());
}

#[test]
fn full_input_keeps_explicit_choices() {
    let spec = validate(&full_input()).unwrap();
    assert_eq!(spec.font, FontStyle::Professional);
    assert_eq!(spec.template, Template::Bold);
    assert_eq!(spec.hero.cta.style, CtaStyle::Outline);
    assert_eq!(spec.hero.image_url.as_deref(), Some("https://example.com/hero.jpg"));
    assert_eq!(spec.features[0].icon.as_deref(), Some("📊"));
    assert_eq!(spec.features[3].icon, None);
    assert_eq!(spec.colors.background.as_deref(), Some("#ffffff"));

    let social = spec.contact.unwrap().social.unwrap();
    let platforms: Vec<SocialPlatform> = social.iter().map(|(p, _)| p).collect();
    assert_eq!(
        platforms,
        vec![
            SocialPlatform::Twitter,
            SocialPlatform::Linkedin,
            SocialPlatform::Github
        ]
    );
}

#[test]
fn round_trip_through_json() {
    for input in [minimal_input(), full_input()] {
        let spec = validate(&input).unwrap();
        let serialized = serde_json::to_value(&spec).unwrap();
        assert_eq!(validate(&serialized).unwrap(), spec);
    }
}

#[test]
fn round_trip_through_text() {
    let spec = validate(&full_input()).unwrap();
    let text = serde_json::to_string_pretty(&spec).unwrap();
    let reparsed: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(validate(&reparsed).unwrap(), spec);
}

#[test]
fn serialized_shape_is_camel_case() {
    let spec = validate(&full_input()).unwrap();
    let v = serde_json::to_value(&spec).unwrap();
    assert_eq!(v["businessName"], "TechStart Solutions");
    assert_eq!(v["hero"]["imageUrl"], "https://example.com/hero.jpg");
    assert_eq!(v["hero"]["cta"]["style"], "outline");
    assert_eq!(v["font"], "professional");
    assert_eq!(v["template"], "bold");
}

#[test]
fn missing_required_fields_are_reported() {
    let required = [
        "businessName",
        "tagline",
        "description",
        "hero",
        "hero.headline",
        "hero.subheadline",
        "hero.cta",
        "hero.cta.text",
        "hero.cta.url",
        "features",
        "colors",
        "colors.primary",
        "colors.secondary",
        "colors.accent",
        "meta",
        "meta.title",
        "meta.description",
    ];

    for path in required {
        let mut input = minimal_input();
        remove_path(&mut input, path);
        let err = validate(&input).expect_err(path);
        assert!(
            err.has_path(path),
            "expected violation at {}, got {:?}",
            path,
            paths(&err)
        );
    }
}

#[test]
fn null_required_field_counts_as_missing() {
    let mut input = minimal_input();
    input["tagline"] = Value::Null;
    let err = validate(&input).unwrap_err();
    assert_eq!(
        err.violations,
        vec![Violation::new("tagline", "missing required field")]
    );
}

#[test]
fn empty_strings_are_rejected() {
    let mut input = minimal_input();
    input["businessName"] = json!("");
    input["hero"]["cta"]["url"] = json!("   ");
    let err = validate(&input).unwrap_err();
    assert_eq!(paths(&err), vec!["businessName", "hero.cta.url"]);
    assert!(err
        .violations
        .iter()
        .all(|v| v.message == "expected non-empty string"));
}

#[test]
fn two_features_fail_with_single_violation() {
    let mut input = minimal_input();
    input["features"].as_array_mut().unwrap().pop();
    let err = validate(&input).unwrap_err();
    assert_eq!(
        err.violations,
        vec![Violation::new(
            "features",
            "expected between 3 and 6 items, got 2"
        )]
    );
}

#[test]
fn feature_count_bounds() {
    for n in 0..=8usize {
        let mut input = minimal_input();
        let items: Vec<Value> = (0..n)
            .map(|i| json!({ "title": format!("F{i}"), "description": "x" }))
            .collect();
        input["features"] = Value::Array(items);
        let result = validate(&input);
        if (3..=6).contains(&n) {
            assert!(result.is_ok(), "{} features should be accepted", n);
        } else {
            let err = result.unwrap_err();
            assert_eq!(paths(&err), vec!["features"]);
            assert!(err.violations[0].message.contains(&format!("got {}", n)));
        }
    }
}

#[test]
fn feature_items_are_checked_individually() {
    let mut input = minimal_input();
    input["features"][1] = json!({ "title": "", "icon": 7 });
    input["features"][2] = json!("not an object");
    let err = validate(&input).unwrap_err();
    assert_eq!(
        paths(&err),
        vec![
            "features[1].title",
            "features[1].description",
            "features[1].icon",
            "features[2]"
        ]
    );
}

#[test]
fn named_color_fails_on_that_field_only() {
    let mut input = minimal_input();
    input["colors"]["primary"] = json!("blue");
    let err = validate(&input).unwrap_err();
    assert_eq!(
        err.violations,
        vec![Violation::new("colors.primary", "expected hex color string")]
    );
}

#[test]
fn hex_color_pattern() {
    let bad = ["blue", "#fff", "#12345", "#1234567", "#12345678", "123456", "#GGGGGG", ""];
    for field in ["primary", "secondary", "accent"] {
        for value in bad {
            let mut input = minimal_input();
            input["colors"][field] = json!(value);
            let err = validate(&input).unwrap_err();
            assert_eq!(paths(&err), vec![format!("colors.{field}").as_str()]);
        }
    }
    assert!(is_hex_color("#aBcDeF"));
    assert!(is_hex_color("#000000"));
}

#[test]
fn optional_colors_are_checked_when_present() {
    let mut input = minimal_input();
    input["colors"]["background"] = json!("white");
    input["colors"]["text"] = json!("#333333");
    let err = validate(&input).unwrap_err();
    assert_eq!(paths(&err), vec!["colors.background"]);
}

#[test]
fn bad_email_fails_without_collateral() {
    let mut input = minimal_input();
    input["contact"] = json!({ "email": "not-an-email", "phone": "555-0100" });
    let err = validate(&input).unwrap_err();
    assert_eq!(
        err.violations,
        vec![Violation::new("contact.email", "expected email address")]
    );
}

#[test]
fn email_pattern() {
    for ok in ["a@b.co", "first.last@sub.example.org", "x+tag@y.io"] {
        assert!(is_email(ok), "{}", ok);
    }
    for bad in ["not-an-email", "@b.co", "a@b", "a@@b.co", "a b@c.io", "a@b.c@d.io"] {
        assert!(!is_email(bad), "{}", bad);
    }
}

#[test]
fn unknown_fields_are_dropped() {
    let mut input = minimal_input();
    input["extra"] = json!({ "anything": true });
    input["hero"]["badge"] = json!("new");
    input["contact"] = json!({
        "social": {
            "twitter": "https://twitter.com/acme",
            "mastodon": "https://mastodon.social/@acme",
            "facebook": ""
        }
    });

    let spec = validate(&input).unwrap();
    let social = spec.contact.unwrap().social.unwrap();
    assert_eq!(social.twitter.as_deref(), Some("https://twitter.com/acme"));
    assert_eq!(social.facebook, None);
    assert_eq!(social.iter().count(), 1);

    let out = serde_json::to_value(validate(&input).unwrap()).unwrap();
    assert!(out.get("extra").is_none());
    assert!(out["contact"]["social"].get("mastodon").is_none());
}

#[test]
fn invalid_enum_values() {
    let mut input = minimal_input();
    input["font"] = json!("gothic");
    input["template"] = json!(3);
    input["hero"]["cta"]["style"] = json!("ghost");
    let err = validate(&input).unwrap_err();
    assert_eq!(paths(&err), vec!["hero.cta.style", "font", "template"]);
    assert_eq!(
        err.violations[1].message,
        "expected one of modern, classic, playful, professional, got 'gothic'"
    );
}

#[test]
fn violations_are_collected_exhaustively() {
    let input = json!({
        "businessName": "Acme",
        "hero": { "headline": "h", "cta": { "text": "Go" } },
        "features": [{ "title": "A", "description": "a" }],
        "colors": { "primary": "red", "secondary": "#111111", "accent": "#22" },
        "contact": { "email": "nope" },
        "meta": "t"
    });
    let err = validate(&input).unwrap_err();
    assert_eq!(
        paths(&err),
        vec![
            "tagline",
            "description",
            "hero.subheadline",
            "hero.cta.url",
            "features",
            "contact.email",
            "colors.primary",
            "colors.accent",
            "meta",
        ]
    );
}

#[test]
fn wrong_container_types() {
    let err = validate(&json!([1, 2, 3])).unwrap_err();
    assert_eq!(err.violations, vec![Violation::new("$", "expected object, got array")]);

    let mut input = minimal_input();
    input["features"] = json!({ "title": "A" });
    input["about"] = json!("About");
    input["meta"]["keywords"] = json!(["ok", 1]);
    let err = validate(&input).unwrap_err();
    assert_eq!(paths(&err), vec!["features", "about", "meta.keywords[1]"]);
}

#[test]
fn about_requires_both_fields() {
    let mut input = minimal_input();
    input["about"] = json!({ "title": "About" });
    let err = validate(&input).unwrap_err();
    assert_eq!(paths(&err), vec!["about.content"]);
}

#[test]
fn error_display_lists_every_violation() {
    let mut input = minimal_input();
    input["colors"]["primary"] = json!("blue");
    input["tagline"] = json!("");
    let text = validate(&input).unwrap_err().to_string();
    assert!(text.starts_with("specification has 2 violations"));
    assert!(text.contains("tagline: expected non-empty string"));
    assert!(text.contains("colors.primary: expected hex color string"));
    assert_eq!(
        text,
        "specification has 2 violations\n  - tagline: expected non-empty string\n  - colors.primary: expected hex color string"
    );

    input["colors"]["primary"] = json!("#000000");
    let err = validate(&input).unwrap_err();
    assert_eq!(err.to_string(), "specification has 1 violation\n  - tagline: expected non-empty string");
    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert!(boxed.source().is_none());
}

#[test]
fn unknown_variant_names_the_value() {
    let err = "retro".parse::<FontStyle>().unwrap_err();
    assert_eq!(err, UnknownVariant("retro".into()));
    assert_eq!(err.to_string(), "unknown variant 'retro'");
    let any: anyhow::Error = err.into();
    assert_eq!(any.to_string(), "unknown variant 'retro'");
}

#[test]
fn enum_names_round_trip() {
    for t in Template::ALL {
        assert_eq!(t.as_str().parse::<Template>().unwrap(), t);
    }
    assert!("Minimal".parse::<Template>().is_err());
    assert_eq!(FontStyle::NAMES, &["modern", "classic", "playful", "professional"]);
}
