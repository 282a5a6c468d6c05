//! `src/app/page.tsx` markup for each [`Template`].
//!
//! All four layouts share one section renderer; a template only picks the
//! class set it is drawn with.

use serde_json::Value;

use crate::spec::{About, Contact, CtaStyle, Feature, FontStyle, Hero, LandingPageSpec, Template};
use crate::theme::contrast_text;

/// Tailwind classes that distinguish one layout from another.
struct Look {
    hero_section: &'static str,
    /// Paint the hero with the primary color instead of a class gradient.
    hero_filled: bool,
    hero_inner: &'static str,
    headline: &'static str,
    subheadline: &'static str,
    cta: &'static str,
    features_section: &'static str,
    grid: &'static str,
    card: &'static str,
    icon: &'static str,
    feature_title: &'static str,
    feature_body: &'static str,
    about_section: &'static str,
    about_title: &'static str,
    about_body: &'static str,
    footer: &'static str,
    footer_name: &'static str,
    footer_tagline: &'static str,
    footer_link: &'static str,
    copyright: &'static str,
}

const MINIMAL: Look = Look {
    hero_section: "relative overflow-hidden bg-gradient-to-br from-white to-gray-50 py-20 px-6",
    hero_filled: false,
    hero_inner: "max-w-4xl mx-auto text-center",
    headline: "text-5xl md:text-7xl font-bold mb-6 bg-gradient-to-r from-gray-900 to-gray-600 bg-clip-text text-transparent",
    subheadline: "text-xl md:text-2xl text-gray-600 mb-8 leading-relaxed",
    cta: "inline-block px-8 py-4 text-lg font-semibold rounded-full transition-all hover:scale-105 hover:shadow-xl",
    features_section: "py-20 px-6 bg-white",
    grid: "max-w-6xl mx-auto grid md:grid-cols-3 gap-8",
    card: "p-8 rounded-2xl bg-gradient-to-br from-gray-50 to-white border border-gray-100 hover:border-gray-200 transition-all hover:shadow-lg",
    icon: "text-4xl mb-4",
    feature_title: "text-2xl font-bold mb-3 text-gray-900",
    feature_body: "text-gray-600 leading-relaxed",
    about_section: "py-20 px-6 bg-gradient-to-br from-gray-50 to-white",
    about_title: "text-4xl font-bold mb-6 text-gray-900",
    about_body: "text-lg text-gray-600 leading-relaxed",
    footer: "py-12 px-6 bg-gray-900 text-white text-center",
    footer_name: "text-2xl font-bold mb-4",
    footer_tagline: "text-gray-400 mb-6",
    footer_link: "text-gray-300 hover:text-white transition-colors",
    copyright: "text-sm text-gray-500",
};

const BOLD: Look = Look {
    hero_section: "relative h-screen flex items-center justify-center overflow-hidden",
    hero_filled: true,
    hero_inner: "relative z-10 text-center max-w-5xl mx-auto px-6",
    headline: "text-6xl md:text-8xl font-black mb-8 leading-tight tracking-tight",
    subheadline: "text-2xl md:text-3xl opacity-90 mb-12 font-medium",
    cta: "inline-block px-12 py-6 text-xl font-bold rounded-none transition-all transform hover:scale-105 uppercase tracking-wider",
    features_section: "py-24 px-6 bg-black text-white",
    grid: "max-w-7xl mx-auto grid md:grid-cols-2 lg:grid-cols-3 gap-1 bg-white/10",
    card: "p-12 bg-black hover:bg-gray-900 transition-colors group",
    icon: "text-6xl mb-6 transform group-hover:scale-110 transition-transform",
    feature_title: "text-3xl font-black mb-4 uppercase tracking-tight",
    feature_body: "text-lg text-gray-400 leading-relaxed",
    about_section: "py-24 px-6 bg-white",
    about_title: "text-5xl font-black mb-8 uppercase tracking-tight",
    about_body: "text-xl text-gray-700 leading-relaxed",
    footer: "py-16 px-6 bg-white text-center",
    footer_name: "text-3xl font-black mb-2 uppercase tracking-tight",
    footer_tagline: "text-gray-600 font-medium",
    footer_link: "font-bold underline hover:no-underline",
    copyright: "text-sm font-bold text-gray-600 uppercase tracking-wider mt-8",
};

const ELEGANT: Look = Look {
    hero_section: "py-32 px-6 bg-stone-50 border-b border-stone-200",
    hero_filled: false,
    hero_inner: "max-w-3xl mx-auto text-center",
    headline: "font-serif text-5xl md:text-6xl font-light tracking-wide mb-8 text-slate-900",
    subheadline: "font-serif italic text-xl text-slate-600 mb-10",
    cta: "inline-block px-10 py-3 text-sm tracking-[0.2em] uppercase border transition-colors",
    features_section: "py-24 px-6 bg-white",
    grid: "max-w-5xl mx-auto grid md:grid-cols-3 gap-12",
    card: "text-center p-8 border-t-2 border-amber-600/40",
    icon: "text-3xl mb-6",
    feature_title: "font-serif text-2xl mb-4 text-slate-900",
    feature_body: "text-slate-600 leading-loose",
    about_section: "py-24 px-6 bg-stone-50",
    about_title: "font-serif text-4xl font-light mb-8 text-slate-900",
    about_body: "font-serif text-lg text-slate-700 leading-loose",
    footer: "py-16 px-6 bg-slate-900 text-stone-100 text-center",
    footer_name: "font-serif text-2xl tracking-widest uppercase mb-3",
    footer_tagline: "font-serif italic text-stone-400 mb-6",
    footer_link: "text-amber-500 hover:text-amber-400 transition-colors",
    copyright: "text-xs tracking-widest uppercase text-stone-500",
};

const CREATIVE: Look = Look {
    hero_section: "relative min-h-screen flex items-center overflow-hidden",
    hero_filled: true,
    hero_inner: "relative z-10 max-w-6xl mx-auto px-6 md:-rotate-1",
    headline: "text-6xl md:text-8xl font-extrabold mb-6 leading-none",
    subheadline: "text-2xl md:text-3xl mb-10 max-w-2xl",
    cta: "inline-block px-10 py-5 text-xl font-extrabold rounded-2xl shadow-[6px_6px_0_0_rgba(0,0,0,0.8)] hover:translate-x-1 hover:translate-y-1 hover:shadow-none transition-all",
    features_section: "py-24 px-6 bg-yellow-50",
    grid: "max-w-6xl mx-auto grid md:grid-cols-3 gap-8",
    card: "p-8 bg-white rounded-3xl border-4 border-black odd:rotate-1 even:-rotate-1 hover:rotate-0 transition-transform",
    icon: "text-5xl mb-4",
    feature_title: "text-2xl font-extrabold mb-3",
    feature_body: "text-gray-700",
    about_section: "py-24 px-6 bg-black text-white",
    about_title: "text-5xl font-extrabold mb-6",
    about_body: "text-xl text-gray-300 leading-relaxed",
    footer: "py-12 px-6 bg-white border-t-4 border-black md:flex md:justify-between md:items-start",
    footer_name: "text-3xl font-extrabold mb-2",
    footer_tagline: "text-gray-600 mb-4",
    footer_link: "font-bold hover:underline",
    copyright: "text-sm text-gray-500 mt-6",
};

fn look(template: Template) -> &'static Look {
    match template {
        Template::Minimal => &MINIMAL,
        Template::Bold => &BOLD,
        Template::Elegant => &ELEGANT,
        Template::Creative => &CREATIVE,
    }
}

pub fn font_stack(font: FontStyle) -> &'static str {
    match font {
        FontStyle::Modern => "'Inter', system-ui, -apple-system, sans-serif",
        FontStyle::Classic => "Georgia, 'Times New Roman', serif",
        FontStyle::Playful => "'Comic Neue', 'Trebuchet MS', system-ui, sans-serif",
        FontStyle::Professional => "'Helvetica Neue', Arial, sans-serif",
    }
}

/// Escape text placed between JSX tags.
pub fn jsx_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a double-quoted JSX attribute value.
pub fn jsx_attr(s: &str) -> String {
    s.replace('&', "&amp;").replace('"', "&quot;")
}

/// A JavaScript string literal, quotes included.
pub fn js_str(s: &str) -> String {
    Value::String(s.to_string()).to_string()
}

pub fn render(spec: &LandingPageSpec) -> String {
    let look = look(spec.template);
    let c = &spec.colors;
    let mut out = String::new();

    out.push_str("export default function Home() {\n  return (\n");
    out.push_str(&format!(
        "    <div className=\"min-h-screen\" style={{{{\n      '--color-primary': '{}',\n      '--color-secondary': '{}',\n      '--color-accent': '{}',\n    }} as React.CSSProperties}}>\n",
        c.primary, c.secondary, c.accent
    ));
    hero(&mut out, look, &spec.hero, spec);
    features(&mut out, look, &spec.features);
    if let Some(about) = &spec.about {
        about_section(&mut out, look, about);
    }
    footer(&mut out, look, spec);
    out.push_str("    </div>\n  )\n}\n");
    out
}

fn hero(out: &mut String, look: &Look, hero: &Hero, spec: &LandingPageSpec) {
    let c = &spec.colors;
    out.push_str("      {/* Hero */}\n");
    if look.hero_filled {
        out.push_str(&format!(
            "      <section className=\"{}\" style={{{{ backgroundColor: '{}', color: '{}' }}}}>\n",
            look.hero_section,
            c.primary,
            contrast_text(&c.primary)
        ));
    } else {
        out.push_str(&format!("      <section className=\"{}\">\n", look.hero_section));
    }
    out.push_str(&format!("        <div className=\"{}\">\n", look.hero_inner));
    out.push_str(&format!(
        "          <h1 className=\"{}\">\n            {}\n          </h1>\n",
        look.headline,
        jsx_text(&hero.headline)
    ));
    out.push_str(&format!(
        "          <p className=\"{}\">\n            {}\n          </p>\n",
        look.subheadline,
        jsx_text(&hero.subheadline)
    ));
    out.push_str(&format!(
        "          <a\n            href=\"{}\"\n            className=\"{}\"\n            style={{{{ {} }}}}\n          >\n            {}\n          </a>\n",
        jsx_attr(&hero.cta.url),
        look.cta,
        cta_style(hero.cta.style, spec),
        jsx_text(&hero.cta.text)
    ));
    if let Some(url) = hero.image_url.as_deref().filter(|u| !u.trim().is_empty()) {
        out.push_str(&format!(
            "          <img src=\"{}\" alt=\"{}\" className=\"mt-12 mx-auto rounded-2xl shadow-2xl max-h-[28rem] object-cover\" />\n",
            jsx_attr(url),
            jsx_attr(&spec.business_name)
        ));
    }
    out.push_str("        </div>\n      </section>\n\n");
}

fn cta_style(style: CtaStyle, spec: &LandingPageSpec) -> String {
    let c = &spec.colors;
    match style {
        CtaStyle::Primary => format!(
            "backgroundColor: '{}', color: '{}'",
            c.accent,
            contrast_text(&c.accent)
        ),
        CtaStyle::Secondary => format!(
            "backgroundColor: '{}', color: '{}'",
            c.secondary,
            contrast_text(&c.secondary)
        ),
        CtaStyle::Outline => format!(
            "border: '2px solid {}', color: '{}', backgroundColor: 'transparent'",
            c.accent, c.accent
        ),
    }
}

fn features(out: &mut String, look: &Look, features: &[Feature]) {
    out.push_str("      {/* Features */}\n");
    out.push_str(&format!("      <section className=\"{}\">\n", look.features_section));
    out.push_str(&format!("        <div className=\"{}\">\n", look.grid));
    for f in features {
        out.push_str(&format!("          <div className=\"{}\">\n", look.card));
        if let Some(icon) = &f.icon {
            out.push_str(&format!(
                "            <div className=\"{}\">{}</div>\n",
                look.icon,
                jsx_text(icon)
            ));
        }
        out.push_str(&format!(
            "            <h3 className=\"{}\">{}</h3>\n",
            look.feature_title,
            jsx_text(&f.title)
        ));
        out.push_str(&format!(
            "            <p className=\"{}\">{}</p>\n",
            look.feature_body,
            jsx_text(&f.description)
        ));
        out.push_str("          </div>\n");
    }
    out.push_str("        </div>\n      </section>\n\n");
}

fn about_section(out: &mut String, look: &Look, about: &About) {
    out.push_str("      {/* About */}\n");
    out.push_str(&format!("      <section className=\"{}\">\n", look.about_section));
    out.push_str("        <div className=\"max-w-4xl mx-auto text-center\">\n");
    out.push_str(&format!(
        "          <h2 className=\"{}\">{}</h2>\n",
        look.about_title,
        jsx_text(&about.title)
    ));
    out.push_str(&format!(
        "          <p className=\"{}\">{}</p>\n",
        look.about_body,
        jsx_text(&about.content)
    ));
    out.push_str("        </div>\n      </section>\n\n");
}

fn footer(out: &mut String, look: &Look, spec: &LandingPageSpec) {
    let name = jsx_text(&spec.business_name);
    out.push_str("      {/* Footer */}\n");
    out.push_str(&format!("      <footer className=\"{}\">\n", look.footer));
    out.push_str("        <div>\n");
    out.push_str(&format!("          <h3 className=\"{}\">{}</h3>\n", look.footer_name, name));
    out.push_str(&format!(
        "          <p className=\"{}\">{}</p>\n",
        look.footer_tagline,
        jsx_text(&spec.tagline)
    ));
    out.push_str("        </div>\n");
    if let Some(contact) = spec.contact.as_ref().filter(|c| has_contact_details(c)) {
        contact_block(out, look, contact);
    }
    out.push_str(&format!(
        "        <p className=\"{}\">\n          © {{new Date().getFullYear()}} {}. All rights reserved.\n        </p>\n",
        look.copyright, name
    ));
    out.push_str("      </footer>\n");
}

fn has_contact_details(c: &Contact) -> bool {
    c.email.is_some()
        || c.phone.is_some()
        || c.address.is_some()
        || c.social.as_ref().is_some_and(|s| !s.is_empty())
}

fn contact_block(out: &mut String, look: &Look, contact: &Contact) {
    out.push_str("        <div className=\"space-y-2 my-6\">\n");
    if let Some(email) = &contact.email {
        out.push_str(&format!(
            "          <p><a href=\"mailto:{}\" className=\"{}\">{}</a></p>\n",
            jsx_attr(email),
            look.footer_link,
            jsx_text(email)
        ));
    }
    if let Some(phone) = &contact.phone {
        out.push_str(&format!(
            "          <p><a href=\"tel:{}\" className=\"{}\">{}</a></p>\n",
            jsx_attr(&phone.replace(' ', "")),
            look.footer_link,
            jsx_text(phone)
        ));
    }
    if let Some(address) = &contact.address {
        out.push_str(&format!("          <p>{}</p>\n", jsx_text(address)));
    }
    if let Some(social) = contact.social.as_ref().filter(|s| !s.is_empty()) {
        out.push_str("          <p className=\"flex justify-center gap-4\">\n");
        for (platform, url) in social.iter() {
            out.push_str(&format!(
                "            <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" className=\"{}\">{}</a>\n",
                jsx_attr(url),
                look.footer_link,
                platform.label()
            ));
        }
        out.push_str("          </p>\n");
    }
    out.push_str("        </div>\n");
}
