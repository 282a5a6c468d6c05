//! Landing page specification: the typed value that flows between the model
//! call and the project scaffolder.
//!
//! Values are only ever produced by [`validate`], which checks an untyped JSON
//! tree exhaustively and fills in the three enum defaults (`font`, `template`,
//! `hero.cta.style`). Serialization uses the camelCase wire shape so a
//! validated value can be written back to disk and read again unchanged.

mod validate;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use validate::{is_email, is_hex_color, validate, ValidationError, Violation};

/// Minimum number of entries in `features`.
pub const MIN_FEATURES: usize = 3;
/// Maximum number of entries in `features`.
pub const MAX_FEATURES: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingPageSpec {
    pub business_name: String,
    pub tagline: String,
    pub description: String,
    pub hero: Hero,
    pub features: Vec<Feature>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<About>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    pub colors: ColorScheme,
    #[serde(default)]
    pub font: FontStyle,
    #[serde(default)]
    pub template: Template,
    pub meta: Meta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub headline: String,
    pub subheadline: String,
    pub cta: Cta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Call-to-action button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cta {
    pub text: String,
    pub url: String,
    #[serde(default)]
    pub style: CtaStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
    /// Emoji or icon name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social: Option<SocialLinks>,
}

/// Links keyed by a fixed set of platforms. Unknown platforms never make it
/// into this struct; empty links are dropped by the validator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SocialPlatform {
    Twitter,
    Facebook,
    Instagram,
    Linkedin,
    Github,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 5] = [
        SocialPlatform::Twitter,
        SocialPlatform::Facebook,
        SocialPlatform::Instagram,
        SocialPlatform::Linkedin,
        SocialPlatform::Github,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::Facebook => "facebook",
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::Linkedin => "linkedin",
            SocialPlatform::Github => "github",
        }
    }

    /// Display label used in generated markup.
    pub fn label(&self) -> &'static str {
        match self {
            SocialPlatform::Twitter => "Twitter",
            SocialPlatform::Facebook => "Facebook",
            SocialPlatform::Instagram => "Instagram",
            SocialPlatform::Linkedin => "LinkedIn",
            SocialPlatform::Github => "GitHub",
        }
    }
}

impl SocialLinks {
    pub fn get(&self, platform: SocialPlatform) -> Option<&str> {
        match platform {
            SocialPlatform::Twitter => self.twitter.as_deref(),
            SocialPlatform::Facebook => self.facebook.as_deref(),
            SocialPlatform::Instagram => self.instagram.as_deref(),
            SocialPlatform::Linkedin => self.linkedin.as_deref(),
            SocialPlatform::Github => self.github.as_deref(),
        }
    }

    pub(crate) fn set(&mut self, platform: SocialPlatform, url: String) {
        let slot = match platform {
            SocialPlatform::Twitter => &mut self.twitter,
            SocialPlatform::Facebook => &mut self.facebook,
            SocialPlatform::Instagram => &mut self.instagram,
            SocialPlatform::Linkedin => &mut self.linkedin,
            SocialPlatform::Github => &mut self.github,
        };
        *slot = Some(url);
    }

    /// Present links in platform order.
    pub fn iter(&self) -> impl Iterator<Item = (SocialPlatform, &str)> + '_ {
        SocialPlatform::ALL
            .into_iter()
            .filter_map(move |p| self.get(p).map(|url| (p, url)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

/// Error for an enum string outside its closed set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown variant '{0}'")]
pub struct UnknownVariant(pub String);

macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $text:literal),+ $(,)? } default $default:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $(
                #[doc = $text]
                $variant,
            )+
        }

        impl $name {
            pub const NAMES: &'static [&'static str] = &[$($text),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(UnknownVariant(other.to_string())),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }
    };
}

closed_enum! {
    /// Visual weight of the hero call-to-action button.
    CtaStyle { Primary => "primary", Secondary => "secondary", Outline => "outline" } default Primary
}

closed_enum! {
    /// Font personality; mapped to a font stack by the scaffolder.
    FontStyle {
        Modern => "modern",
        Classic => "classic",
        Playful => "playful",
        Professional => "professional",
    } default Modern
}

closed_enum! {
    /// Page layout variant.
    Template {
        Minimal => "minimal",
        Bold => "bold",
        Elegant => "elegant",
        Creative => "creative",
    } default Minimal
}

impl Template {
    pub const ALL: [Template; 4] = [
        Template::Minimal,
        Template::Bold,
        Template::Elegant,
        Template::Creative,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            Template::Minimal => "Clean, modern design with subtle gradients",
            Template::Bold => "High-contrast, impactful typography",
            Template::Elegant => "Sophisticated with refined aesthetics",
            Template::Creative => "Unique, artistic layout",
        }
    }
}
