use colored::{ColoredString, Colorize};
use humansize::{format_size, DECIMAL};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Duration;

use crate::scaffold::ScaffoldSummary;
use crate::spec::{LandingPageSpec, Template, ValidationError};
use crate::theme::{self, Theme};

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

fn header(title: &str) {
    let pad = RULE.chars().count().saturating_sub(title.chars().count() + 2) / 2;
    let bar: String = RULE.chars().take(pad).collect();
    println!("\n{}", format!("┏{bar} {title} {bar}┓").bold());
}

fn footer() {
    println!("{}", format!("┗{RULE}┛").bold());
}

pub fn confirm(prompt: &str) -> bool {
    print!("{} [y/N]: ", prompt);
    let _ = io::stdout().flush();
    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        let ans = s.trim().to_lowercase();
        ans == "y" || ans == "yes"
    } else {
        false
    }
}

/// Read lines until an empty one (or EOF) and join them.
pub fn read_description(prompt: &str) -> io::Result<String> {
    println!("{}", prompt.bold());
    println!("{}", "(finish with an empty line)".dimmed());
    let stdin = io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}

pub fn spinner(msg: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg} {elapsed:.dim}") {
        pb.set_style(style);
    }
    pb.set_message(msg.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Two-cell color block, or the bare hex when it cannot be parsed.
pub fn swatch(hex: &str) -> ColoredString {
    match theme::parse_hex(hex) {
        Some((r, g, b)) => "  ".on_truecolor(r, g, b),
        None => hex.normal(),
    }
}

fn color_row(label: &str, hex: &str) -> String {
    format!("{} {:<10} {}", swatch(hex), label, hex.dimmed())
}

pub fn show_spec_preview(spec: &LandingPageSpec) {
    header("Specification");
    println!("  {} {}", "Business:".bold(), spec.business_name.cyan().bold());
    println!("  {} {}", "Tagline: ".bold(), spec.tagline);
    println!(
        "  {} {} ({})",
        "Template:".bold(),
        spec.template.as_str().magenta(),
        spec.template.description().dimmed()
    );
    println!("  {} {}", "Font:    ".bold(), spec.font);
    println!("  {} {}", "Headline:".bold(), spec.hero.headline);
    println!("  {} {} → {}", "CTA:     ".bold(), spec.hero.cta.text, spec.hero.cta.url.dimmed());

    println!("  {} {}", "Features:".bold(), spec.features.len());
    for f in &spec.features {
        let icon = f.icon.as_deref().unwrap_or("•");
        println!("    {} {}", icon, f.title);
    }
    if let Some(about) = &spec.about {
        println!("  {} {}", "About:   ".bold(), about.title);
    }
    if let Some(contact) = &spec.contact {
        if let Some(email) = &contact.email {
            println!("  {} {}", "Email:   ".bold(), email);
        }
        if let Some(social) = contact.social.as_ref().filter(|s| !s.is_empty()) {
            let names: Vec<&str> = social.iter().map(|(p, _)| p.label()).collect();
            println!("  {} {}", "Social:  ".bold(), names.join(", "));
        }
    }

    let c = &spec.colors;
    println!("  {} ({})", "Colors:".bold(), theme::create_theme(c, None).kind.as_str());
    println!("    {}", color_row("primary", &c.primary));
    println!("    {}", color_row("secondary", &c.secondary));
    println!("    {}", color_row("accent", &c.accent));
    if let Some(bg) = &c.background {
        println!("    {}", color_row("background", bg));
    }
    if let Some(text) = &c.text {
        println!("    {}", color_row("text", text));
    }
    footer();
}

pub fn print_violations(err: &ValidationError) {
    eprintln!(
        "\n{} {} violation(s)",
        "Invalid specification:".red().bold(),
        err.violations.len()
    );
    for v in &err.violations {
        eprintln!("  {} {}: {}", "✗".red(), v.path.yellow(), v.message);
    }
}

pub fn list_templates() {
    header("Templates");
    for t in Template::ALL {
        println!("  {:<10} {}", t.as_str().magenta().bold(), t.description());
    }
    footer();
}

fn theme_row(t: &Theme) -> String {
    let p = &t.colors;
    format!(
        "{:<8} {}{}{}{}{}  {}",
        t.name,
        swatch(p.primary),
        swatch(p.secondary),
        swatch(p.accent),
        swatch(p.background),
        swatch(p.text),
        t.kind.as_str()
    )
}

/// Every preset, or just the one `name` resolves to.
pub fn list_themes(name: Option<&str>) {
    header("Themes");
    let themes = match name {
        Some(n) => vec![theme::theme_by_name(n)],
        None => theme::ALL.to_vec(),
    };
    for t in themes {
        println!("  {}", theme_row(&t));
        println!(
            "           {}",
            format!(
                "primary {}  secondary {}  accent {}",
                t.colors.primary, t.colors.secondary, t.colors.accent
            )
            .dimmed()
        );
    }
    footer();
}

pub fn print_copy_variations(section: &str, variations: &[String]) {
    header(&format!("Copy: {section}"));
    if variations.is_empty() {
        println!("  (no variations returned)");
    }
    for (i, v) in variations.iter().enumerate() {
        println!("  {}. {}", (i + 1).to_string().bold(), v);
    }
    footer();
}

pub fn print_scaffold_dashboard(sum: &ScaffoldSummary) {
    header("Project");
    println!(
        "  {}: {}   {}: {}   {}: {}",
        "Files".green().bold(),
        sum.files.len(),
        "Bytes".bold(),
        format_size(sum.bytes_written, DECIMAL),
        "Path".bold(),
        sum.root.display()
    );
    footer();
    for f in &sum.files {
        let rel = f.path.strip_prefix(&sum.root).unwrap_or(&f.path);
        println!(
            "  {} {:<24} {}",
            "[CREATE]".green().bold(),
            rel.display(),
            format_size(f.bytes, DECIMAL).dimmed()
        );
    }
}

pub fn print_next_steps(root: &Path) {
    println!("\n{}", "Next steps:".bold());
    println!("  cd {}", root.display());
    println!("  npm install");
    println!("  npm run dev");
    println!("\n  Then open {} in your browser.", "http://localhost:3000".cyan());
}
