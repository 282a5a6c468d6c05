//! Preset color palettes and luminance helpers.

use serde::Serialize;

use crate::spec::{is_hex_color, ColorScheme};

/// Light pages read dark text on pale backgrounds; dark ones the reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    Light,
    Dark,
}

impl ThemeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeKind::Light => "light",
            ThemeKind::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub name: &'static str,
    pub kind: ThemeKind,
    pub colors: Palette,
}

impl Theme {
    pub fn color_scheme(&self) -> ColorScheme {
        ColorScheme {
            primary: self.colors.primary.to_string(),
            secondary: self.colors.secondary.to_string(),
            accent: self.colors.accent.to_string(),
            background: Some(self.colors.background.to_string()),
            text: Some(self.colors.text.to_string()),
        }
    }
}

pub const MINIMAL: Theme = Theme {
    name: "minimal",
    kind: ThemeKind::Light,
    colors: Palette {
        primary: "#3b82f6",
        secondary: "#8b5cf6",
        accent: "#06b6d4",
        background: "#ffffff",
        text: "#1f2937",
    },
};

pub const BOLD: Theme = Theme {
    name: "bold",
    kind: ThemeKind::Dark,
    colors: Palette {
        primary: "#000000",
        secondary: "#ffffff",
        accent: "#ef4444",
        background: "#000000",
        text: "#ffffff",
    },
};

/// Deep slate with amber accents, laid out like `minimal`.
pub const ELEGANT: Theme = Theme {
    name: "elegant",
    kind: ThemeKind::Light,
    colors: Palette {
        primary: "#1e293b",
        secondary: "#64748b",
        accent: "#d97706",
        background: "#ffffff",
        text: "#0f172a",
    },
};

pub const ALL: [Theme; 3] = [MINIMAL, BOLD, ELEGANT];

/// Case-insensitive lookup; unknown names fall back to `minimal`.
pub fn theme_by_name(name: &str) -> Theme {
    ALL.into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name.trim()))
        .unwrap_or(MINIMAL)
}

/// Parse `#RRGGBB` into channels.
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    if !is_hex_color(hex) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(1)?, channel(3)?, channel(5)?))
}

fn linearize(c: u8) -> f64 {
    let c = f64::from(c) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance in `[0, 1]`, or `None` for a malformed color.
pub fn relative_luminance(hex: &str) -> Option<f64> {
    let (r, g, b) = parse_hex(hex)?;
    Some(0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b))
}

/// Dark when luminance is below one half. Malformed input counts as light.
pub fn kind_of_color(hex: &str) -> ThemeKind {
    match relative_luminance(hex) {
        Some(l) if l < 0.5 => ThemeKind::Dark,
        _ => ThemeKind::Light,
    }
}

pub fn infer_theme_kind(colors: &ColorScheme) -> ThemeKind {
    kind_of_color(&colors.primary)
}

/// Text color with readable contrast on `background`.
pub fn contrast_text(background: &str) -> &'static str {
    match kind_of_color(background) {
        ThemeKind::Dark => "#ffffff",
        ThemeKind::Light => "#111827",
    }
}

/// A scheme-derived theme: `explicit` wins, otherwise the kind is inferred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomTheme {
    pub kind: ThemeKind,
    pub colors: ColorScheme,
}

pub fn create_theme(colors: &ColorScheme, explicit: Option<ThemeKind>) -> CustomTheme {
    CustomTheme {
        kind: explicit.unwrap_or_else(|| infer_theme_kind(colors)),
        colors: colors.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheme(primary: &str) -> ColorScheme {
        ColorScheme {
            primary: primary.into(),
            secondary: "#ffffff".into(),
            accent: "#ff0000".into(),
            background: None,
            text: None,
        }
    }

    #[test]
    fn luminance_extremes() {
        assert_eq!(relative_luminance("#000000"), Some(0.0));
        let white = relative_luminance("#FFFFFF").unwrap();
        assert!((white - 1.0).abs() < 1e-9);
        assert!(relative_luminance("blue").is_none());
        assert!(relative_luminance("#fff").is_none());
    }

    #[test]
    fn luminance_matches_wcag_reference() {
        // Pure red: 0.2126 by definition.
        let red = relative_luminance("#ff0000").unwrap();
        assert!((red - 0.2126).abs() < 1e-9);
        // Mid gray #777777 is roughly 0.184.
        let gray = relative_luminance("#777777").unwrap();
        assert!((gray - 0.184).abs() < 0.001, "{gray}");
    }

    #[test]
    fn infers_kind_from_primary() {
        assert_eq!(infer_theme_kind(&scheme("#000000")), ThemeKind::Dark);
        assert_eq!(infer_theme_kind(&scheme("#3b82f6")), ThemeKind::Dark);
        assert_eq!(infer_theme_kind(&scheme("#fde68a")), ThemeKind::Light);
        assert_eq!(create_theme(&scheme("#000000"), Some(ThemeKind::Light)).kind, ThemeKind::Light);
    }

    #[test]
    fn lookup_defaults_to_minimal() {
        assert_eq!(theme_by_name("BOLD"), BOLD);
        assert_eq!(theme_by_name(" elegant "), ELEGANT);
        assert_eq!(theme_by_name("neon"), MINIMAL);
        assert_eq!(theme_by_name(""), MINIMAL);
    }

    #[test]
    fn preset_colors_are_valid_hex() {
        for t in ALL {
            let s = t.color_scheme();
            for c in [&s.primary, &s.secondary, &s.accent] {
                assert!(is_hex_color(c), "{} {}", t.name, c);
            }
        }
    }

    #[test]
    fn contrast_text_flips() {
        assert_eq!(contrast_text("#000000"), "#ffffff");
        assert_eq!(contrast_text("#ffffff"), "#111827");
    }
}
