//! Exhaustive validation of untyped JSON into a [`LandingPageSpec`].

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use super::{
    About, ColorScheme, Contact, Cta, CtaStyle, Feature, FontStyle, Hero, LandingPageSpec, Meta,
    SocialLinks, SocialPlatform, Template, MAX_FEATURES, MIN_FEATURES,
};

const HEX_COLOR_PATTERN: &str = r"^#[0-9A-Fa-f]{6}$";
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static HEX_COLOR_REGEX: OnceLock<Regex> = OnceLock::new();
static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn hex_color_regex() -> &'static Regex {
    HEX_COLOR_REGEX.get_or_init(|| Regex::new(HEX_COLOR_PATTERN).expect("invalid regex pattern"))
}

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("invalid regex pattern"))
}

/// `#RRGGBB` only: no named colors, no short form, no alpha.
pub fn is_hex_color(s: &str) -> bool {
    hex_color_regex().is_match(s)
}

/// Cosmetic email check: one `@`, non-empty local part, dotted domain.
pub fn is_email(s: &str) -> bool {
    email_regex().is_match(s)
}

/// One failing field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Dotted path to the field, with `[i]` for list entries (e.g. `features[1].title`).
    pub path: String,
    pub message: String,
}

impl Violation {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Every violation found in a candidate specification, in document order.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{}", render(&self.violations))]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

#[cfg(test)]
impl ValidationError {
    /// True if any violation sits at `path` exactly.
    pub fn has_path(&self, path: &str) -> bool {
        self.violations.iter().any(|v| v.path == path)
    }
}

fn render(violations: &[Violation]) -> String {
    let n = violations.len();
    let mut out = format!("specification has {} violation{}", n, if n == 1 { "" } else { "s" });
    for v in violations {
        out.push_str(&format!("\n  - {v}"));
    }
    out
}

/// Validate `value` as a landing page specification.
///
/// All fields are checked before returning; the error carries every violation,
/// not just the first. Unknown fields are ignored, unknown `contact.social`
/// platforms and empty social links are dropped, and `font`, `template` and
/// `hero.cta.style` take their defaults when absent. An explicit `null` counts
/// as absent for optional fields and as missing for required ones.
pub fn validate(value: &Value) -> Result<LandingPageSpec, ValidationError> {
    let mut c = Checker::default();
    let spec = c.spec(value);
    match spec {
        Some(spec) if c.violations.is_empty() => Ok(spec),
        _ => {
            if c.violations.is_empty() {
                c.push("$", "specification could not be constructed");
            }
            Err(ValidationError {
                violations: c.violations,
            })
        }
    }
}

fn child(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Present and not `null`.
fn field<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|v| !v.is_null())
}

#[derive(Default)]
struct Checker {
    violations: Vec<Violation>,
}

impl Checker {
    fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.violations.push(Violation::new(path, message));
    }

    fn required_object<'a>(
        &mut self,
        obj: &'a Map<String, Value>,
        key: &str,
        path: &str,
    ) -> Option<&'a Map<String, Value>> {
        let p = child(path, key);
        match field(obj, key) {
            None => {
                self.push(p, "missing required field");
                None
            }
            Some(Value::Object(m)) => Some(m),
            Some(other) => {
                self.push(p, format!("expected object, got {}", kind_of(other)));
                None
            }
        }
    }

    fn optional_object<'a>(
        &mut self,
        obj: &'a Map<String, Value>,
        key: &str,
        path: &str,
    ) -> Option<&'a Map<String, Value>> {
        match field(obj, key) {
            None => None,
            Some(Value::Object(m)) => Some(m),
            Some(other) => {
                self.push(
                    child(path, key),
                    format!("expected object, got {}", kind_of(other)),
                );
                None
            }
        }
    }

    fn required_string(
        &mut self,
        obj: &Map<String, Value>,
        key: &str,
        path: &str,
    ) -> Option<String> {
        let p = child(path, key);
        match field(obj, key) {
            None => {
                self.push(p, "missing required field");
                None
            }
            Some(Value::String(s)) if s.trim().is_empty() => {
                self.push(p, "expected non-empty string");
                None
            }
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                self.push(p, format!("expected string, got {}", kind_of(other)));
                None
            }
        }
    }

    /// `Ok(None)` when absent; `Err(())` when present with the wrong type.
    fn optional_string(
        &mut self,
        obj: &Map<String, Value>,
        key: &str,
        path: &str,
    ) -> Result<Option<String>, ()> {
        match field(obj, key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => {
                self.push(
                    child(path, key),
                    format!("expected string, got {}", kind_of(other)),
                );
                Err(())
            }
        }
    }

    fn required_hex(&mut self, obj: &Map<String, Value>, key: &str, path: &str) -> Option<String> {
        let p = child(path, key);
        match field(obj, key) {
            None => {
                self.push(p, "missing required field");
                None
            }
            Some(Value::String(s)) if is_hex_color(s) => Some(s.clone()),
            Some(_) => {
                self.push(p, "expected hex color string");
                None
            }
        }
    }

    fn optional_hex(
        &mut self,
        obj: &Map<String, Value>,
        key: &str,
        path: &str,
    ) -> Result<Option<String>, ()> {
        match field(obj, key) {
            None => Ok(None),
            Some(Value::String(s)) if is_hex_color(s) => Ok(Some(s.clone())),
            Some(_) => {
                self.push(child(path, key), "expected hex color string");
                Err(())
            }
        }
    }

    /// Closed-set string with a default when absent.
    fn choice<T>(&mut self, obj: &Map<String, Value>, key: &str, path: &str, names: &[&str]) -> Option<T>
    where
        T: FromStr + Default,
    {
        match field(obj, key) {
            None => Some(T::default()),
            Some(Value::String(s)) => match s.parse::<T>() {
                Ok(v) => Some(v),
                Err(_) => {
                    self.push(
                        child(path, key),
                        format!("expected one of {}, got '{}'", names.join(", "), s),
                    );
                    None
                }
            },
            Some(other) => {
                self.push(
                    child(path, key),
                    format!(
                        "expected one of {}, got {}",
                        names.join(", "),
                        kind_of(other)
                    ),
                );
                None
            }
        }
    }

    fn spec(&mut self, value: &Value) -> Option<LandingPageSpec> {
        let root = match value {
            Value::Object(m) => m,
            other => {
                self.push("$", format!("expected object, got {}", kind_of(other)));
                return None;
            }
        };

        let business_name = self.required_string(root, "businessName", "");
        let tagline = self.required_string(root, "tagline", "");
        let description = self.required_string(root, "description", "");
        let hero = self.hero(root);
        let features = self.features(root);
        let about = self.about(root);
        let contact = self.contact(root);
        let colors = self.colors(root);
        let font = self.choice::<FontStyle>(root, "font", "", FontStyle::NAMES);
        let template = self.choice::<Template>(root, "template", "", Template::NAMES);
        let meta = self.meta(root);

        Some(LandingPageSpec {
            business_name: business_name?,
            tagline: tagline?,
            description: description?,
            hero: hero?,
            features: features?,
            about: about.ok()?,
            contact: contact.ok()?,
            colors: colors?,
            font: font?,
            template: template?,
            meta: meta?,
        })
    }

    fn hero(&mut self, root: &Map<String, Value>) -> Option<Hero> {
        let obj = self.required_object(root, "hero", "")?;
        let headline = self.required_string(obj, "headline", "hero");
        let subheadline = self.required_string(obj, "subheadline", "hero");
        let cta = self.cta(obj);
        let image_url = self.optional_string(obj, "imageUrl", "hero");
        Some(Hero {
            headline: headline?,
            subheadline: subheadline?,
            cta: cta?,
            image_url: image_url.ok()?,
        })
    }

    fn cta(&mut self, hero: &Map<String, Value>) -> Option<Cta> {
        let obj = self.required_object(hero, "cta", "hero")?;
        let text = self.required_string(obj, "text", "hero.cta");
        let url = self.required_string(obj, "url", "hero.cta");
        let style = self.choice::<CtaStyle>(obj, "style", "hero.cta", CtaStyle::NAMES);
        Some(Cta {
            text: text?,
            url: url?,
            style: style?,
        })
    }

    fn features(&mut self, root: &Map<String, Value>) -> Option<Vec<Feature>> {
        let items = match field(root, "features") {
            None => {
                self.push("features", "missing required field");
                return None;
            }
            Some(Value::Array(items)) => items,
            Some(other) => {
                self.push(
                    "features",
                    format!("expected array, got {}", kind_of(other)),
                );
                return None;
            }
        };

        let count_ok = (MIN_FEATURES..=MAX_FEATURES).contains(&items.len());
        if !count_ok {
            self.push(
                "features",
                format!(
                    "expected between {} and {} items, got {}",
                    MIN_FEATURES,
                    MAX_FEATURES,
                    items.len()
                ),
            );
        }

        let mut out = Vec::with_capacity(items.len());
        let mut all_ok = true;
        for (i, item) in items.iter().enumerate() {
            let path = format!("features[{i}]");
            match self.feature(item, &path) {
                Some(f) => out.push(f),
                None => all_ok = false,
            }
        }

        if count_ok && all_ok {
            Some(out)
        } else {
            None
        }
    }

    fn feature(&mut self, item: &Value, path: &str) -> Option<Feature> {
        let obj = match item {
            Value::Object(m) => m,
            other => {
                self.push(path, format!("expected object, got {}", kind_of(other)));
                return None;
            }
        };
        let title = self.required_string(obj, "title", path);
        let description = self.required_string(obj, "description", path);
        let icon = self.optional_string(obj, "icon", path);
        Some(Feature {
            title: title?,
            description: description?,
            icon: icon.ok()?,
        })
    }

    /// `Ok(None)` when absent, `Err(())` when present but invalid.
    fn about(&mut self, root: &Map<String, Value>) -> Result<Option<About>, ()> {
        let before = self.violations.len();
        let Some(obj) = self.optional_object(root, "about", "") else {
            return if self.violations.len() > before { Err(()) } else { Ok(None) };
        };
        let title = self.required_string(obj, "title", "about");
        let content = self.required_string(obj, "content", "about");
        match (title, content) {
            (Some(title), Some(content)) => Ok(Some(About { title, content })),
            _ => Err(()),
        }
    }

    fn contact(&mut self, root: &Map<String, Value>) -> Result<Option<Contact>, ()> {
        let before = self.violations.len();
        let Some(obj) = self.optional_object(root, "contact", "") else {
            return if self.violations.len() > before { Err(()) } else { Ok(None) };
        };

        let email = match self.optional_string(obj, "email", "contact") {
            Ok(Some(e)) if !is_email(&e) => {
                self.push("contact.email", "expected email address");
                Err(())
            }
            other => other,
        };
        let phone = self.optional_string(obj, "phone", "contact");
        let address = self.optional_string(obj, "address", "contact");
        let social = self.social(obj);

        Ok(Some(Contact {
            email: email?,
            phone: phone?,
            address: address?,
            social: social?,
        }))
    }

    fn social(&mut self, contact: &Map<String, Value>) -> Result<Option<SocialLinks>, ()> {
        let before = self.violations.len();
        let Some(obj) = self.optional_object(contact, "social", "contact") else {
            return if self.violations.len() > before { Err(()) } else { Ok(None) };
        };

        let mut links = SocialLinks::default();
        let mut ok = true;
        for platform in SocialPlatform::ALL {
            match self.optional_string(obj, platform.as_str(), "contact.social") {
                Ok(Some(url)) if !url.trim().is_empty() => links.set(platform, url),
                Ok(_) => {}
                Err(()) => ok = false,
            }
        }

        if ok {
            Ok(Some(links))
        } else {
            Err(())
        }
    }

    fn colors(&mut self, root: &Map<String, Value>) -> Option<ColorScheme> {
        let obj = self.required_object(root, "colors", "")?;
        let primary = self.required_hex(obj, "primary", "colors");
        let secondary = self.required_hex(obj, "secondary", "colors");
        let accent = self.required_hex(obj, "accent", "colors");
        let background = self.optional_hex(obj, "background", "colors");
        let text = self.optional_hex(obj, "text", "colors");
        Some(ColorScheme {
            primary: primary?,
            secondary: secondary?,
            accent: accent?,
            background: background.ok()?,
            text: text.ok()?,
        })
    }

    fn meta(&mut self, root: &Map<String, Value>) -> Option<Meta> {
        let obj = self.required_object(root, "meta", "")?;
        let title = self.required_string(obj, "title", "meta");
        let description = self.required_string(obj, "description", "meta");
        let keywords = self.keywords(obj);
        Some(Meta {
            title: title?,
            description: description?,
            keywords: keywords.ok()?,
        })
    }

    fn keywords(&mut self, meta: &Map<String, Value>) -> Result<Option<Vec<String>>, ()> {
        let items = match field(meta, "keywords") {
            None => return Ok(None),
            Some(Value::Array(items)) => items,
            Some(other) => {
                self.push(
                    "meta.keywords",
                    format!("expected array, got {}", kind_of(other)),
                );
                return Err(());
            }
        };

        let mut out = Vec::with_capacity(items.len());
        let mut ok = true;
        for (i, item) in items.iter().enumerate() {
            match item {
                Value::String(s) => out.push(s.clone()),
                other => {
                    self.push(
                        format!("meta.keywords[{i}]"),
                        format!("expected string, got {}", kind_of(other)),
                    );
                    ok = false;
                }
            }
        }
        if ok {
            Ok(Some(out))
        } else {
            Err(())
        }
    }
}
