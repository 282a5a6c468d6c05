//! Next.js project scaffolding from a validated [`LandingPageSpec`].
//!
//! Rendering is pure: [`render`] returns every file as a path/contents pair.
//! [`write`] then puts them on disk in parallel, each file through a temp file
//! that is persisted over the destination.

mod page;


use anyhow::{Context, Result};
use fs_err as fs;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::spec::LandingPageSpec;

use page::{font_stack, js_str};

/// Directory name used when a business name has no ASCII letters or digits.
pub const FALLBACK_NAME: &str = "landing-page";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Relative to the project root, `/`-separated.
    pub path: &'static str,
    pub contents: String,
}

#[derive(Debug, Clone)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub bytes: u64,
}

#[derive(Debug, Clone)]
pub struct ScaffoldSummary {
    pub root: PathBuf,
    pub files: Vec<WrittenFile>,
    pub bytes_written: u64,
}

/// Lowercase, runs of anything but `[a-z0-9]` become one `-`, edges trimmed.
pub fn sanitize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut dash = false;
    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if dash && !out.is_empty() {
                out.push('-');
            }
            dash = false;
            out.push(c);
        } else {
            dash = true;
        }
    }
    out
}

/// Project directory for `spec` under `out_dir`.
pub fn project_dir(spec: &LandingPageSpec, out_dir: &Path) -> PathBuf {
    let name = sanitize_name(&spec.business_name);
    if name.is_empty() {
        out_dir.join(FALLBACK_NAME)
    } else {
        out_dir.join(name)
    }
}

/// Render and write the whole project. Returns the project directory and what
/// was written there.
pub fn scaffold(spec: &LandingPageSpec, out_dir: &Path) -> Result<ScaffoldSummary> {
    let root = project_dir(spec, out_dir);
    let files = render(spec)?;
    log::info!("scaffolding {} files into {}", files.len(), root.display());
    write(&root, &files)
}

/// Every project file, in a fixed order.
pub fn render(spec: &LandingPageSpec) -> Result<Vec<RenderedFile>> {
    let file = |path, contents| RenderedFile { path, contents };
    Ok(vec![
        file("package.json", package_json(spec)?),
        file("next.config.mjs", NEXT_CONFIG.to_string()),
        file("tsconfig.json", TSCONFIG.to_string()),
        file("tailwind.config.ts", tailwind_config()),
        file("postcss.config.js", POSTCSS_CONFIG.to_string()),
        file(".gitignore", GITIGNORE.to_string()),
        file(".env.example", "# Add environment variables here\n".to_string()),
        file("src/app/layout.tsx", layout(spec)),
        file("src/app/page.tsx", page::render(spec)),
        file("src/app/globals.css", globals_css(spec)),
        file("README.md", readme(spec)),
    ])
}

/// Write `files` under `root` concurrently. The first failure is returned and
/// names the file it happened on.
pub fn write(root: &Path, files: &[RenderedFile]) -> Result<ScaffoldSummary> {
    fs::create_dir_all(root)?;
    let written = files
        .par_iter()
        .map(|f| write_one(root, f))
        .collect::<Result<Vec<_>>>()?;
    let bytes_written = written.iter().map(|w| w.bytes).sum();
    Ok(ScaffoldSummary {
        root: root.to_path_buf(),
        files: written,
        bytes_written,
    })
}

fn write_one(root: &Path, file: &RenderedFile) -> Result<WrittenFile> {
    let abs = root.join(file.path);
    let parent = abs.parent().unwrap_or(root);
    fs::create_dir_all(parent).with_context(|| format!("creating directory for {}", file.path))?;
    let tmp = NamedTempFile::new_in(parent).with_context(|| format!("staging {}", file.path))?;
    fs::write(tmp.path(), &file.contents).with_context(|| format!("writing {}", file.path))?;
    tmp.persist(&abs).with_context(|| format!("persisting {}", file.path))?;
    log::debug!("wrote {} ({} bytes)", abs.display(), file.contents.len());
    Ok(WrittenFile {
        path: abs,
        bytes: file.contents.len() as u64,
    })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PackageJson<'a> {
    name: &'a str,
    version: &'static str,
    private: bool,
    scripts: BTreeMap<&'static str, &'static str>,
    dependencies: BTreeMap<&'static str, &'static str>,
    dev_dependencies: BTreeMap<&'static str, &'static str>,
}

fn package_json(spec: &LandingPageSpec) -> Result<String> {
    let name = match sanitize_name(&spec.business_name) {
        n if n.is_empty() => FALLBACK_NAME.to_string(),
        n => n,
    };
    let pkg = PackageJson {
        name: &name,
        version: "0.1.0",
        private: true,
        scripts: BTreeMap::from([
            ("dev", "next dev"),
            ("build", "next build"),
            ("start", "next start"),
            ("lint", "next lint"),
        ]),
        dependencies: BTreeMap::from([
            ("next", "^14.2.0"),
            ("react", "^18.3.0"),
            ("react-dom", "^18.3.0"),
        ]),
        dev_dependencies: BTreeMap::from([
            ("@types/node", "^20"),
            ("@types/react", "^18"),
            ("@types/react-dom", "^18"),
            ("autoprefixer", "^10.4.0"),
            ("postcss", "^8.4.0"),
            ("tailwindcss", "^3.4.0"),
            ("typescript", "^5"),
        ]),
    };
    let mut text = serde_json::to_string_pretty(&pkg).context("serializing package.json")?;
    text.push('\n');
    Ok(text)
}

const NEXT_CONFIG: &str = r#"/** @type {import('next').NextConfig} */
const nextConfig = {
  output: 'export',
  images: {
    unoptimized: true,
  },
};

export default nextConfig;
"#;

const TSCONFIG: &str = r#"{
  "compilerOptions": {
    "target": "ES2017",
    "lib": ["dom", "dom.iterable", "esnext"],
    "allowJs": true,
    "skipLibCheck": true,
    "strict": true,
    "noEmit": true,
    "esModuleInterop": true,
    "module": "esnext",
    "moduleResolution": "bundler",
    "resolveJsonModule": true,
    "isolatedModules": true,
    "jsx": "preserve",
    "incremental": true,
    "plugins": [{ "name": "next" }],
    "paths": { "@/*": ["./src/*"] }
  },
  "include": ["next-env.d.ts", "**/*.ts", "**/*.tsx", ".next/types/**/*.ts"],
  "exclude": ["node_modules"]
}
"#;

const POSTCSS_CONFIG: &str = r#"module.exports = {
  plugins: {
    tailwindcss: {},
    autoprefixer: {},
  },
}
"#;

const GITIGNORE: &str = "# dependencies
/node_modules
/.pnp
.pnp.js

# testing
/coverage

# next.js
/.next/
/out/

# production
/build

# misc
.DS_Store
*.pem

# debug
npm-debug.log*
yarn-debug.log*
yarn-error.log*

# local env files
.env*.local

# vercel
.vercel

# typescript
*.tsbuildinfo
next-env.d.ts
";

fn tailwind_config() -> String {
    r#"import type { Config } from 'tailwindcss'

const config: Config = {
  content: [
    './src/pages/**/*.{js,ts,jsx,tsx,mdx}',
    './src/components/**/*.{js,ts,jsx,tsx,mdx}',
    './src/app/**/*.{js,ts,jsx,tsx,mdx}',
  ],
  theme: {
    extend: {
      colors: {
        primary: 'var(--color-primary)',
        secondary: 'var(--color-secondary)',
        accent: 'var(--color-accent)',
      },
    },
  },
  plugins: [],
}
export default config
"#
    .to_string()
}

fn layout(spec: &LandingPageSpec) -> String {
    let keywords = spec
        .meta
        .keywords
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|k| js_str(k))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        r#"import type {{ Metadata }} from 'next'
import './globals.css'

export const metadata: Metadata = {{
  title: {title},
  description: {description},
  keywords: [{keywords}],
}}

export default function RootLayout({{
  children,
}}: {{
  children: React.ReactNode
}}) {{
  return (
    <html lang="en">
      <body>{{children}}</body>
    </html>
  )
}}
"#,
        title = js_str(&spec.meta.title),
        description = js_str(&spec.meta.description),
        keywords = keywords,
    )
}

fn globals_css(spec: &LandingPageSpec) -> String {
    let c = &spec.colors;
    let mut vars = format!(
        "  --color-primary: {};\n  --color-secondary: {};\n  --color-accent: {};\n",
        c.primary, c.secondary, c.accent
    );
    if let Some(bg) = &c.background {
        vars.push_str(&format!("  --color-background: {bg};\n"));
    }
    if let Some(text) = &c.text {
        vars.push_str(&format!("  --color-text: {text};\n"));
    }

    let mut body = format!("  font-family: {};\n", font_stack(spec.font));
    if c.background.is_some() {
        body.push_str("  background-color: var(--color-background);\n");
    }
    if c.text.is_some() {
        body.push_str("  color: var(--color-text);\n");
    }

    format!(
        "@tailwind base;\n@tailwind components;\n@tailwind utilities;\n\n:root {{\n{vars}}}\n\nbody {{\n{body}}}\n"
    )
}

fn readme(spec: &LandingPageSpec) -> String {
    format!(
        r#"# {name}

{description}

Template: `{template}`, font: `{font}`.

## Getting Started

Install dependencies:

```bash
npm install
```

Run the development server:

```bash
npm run dev
```

Open [http://localhost:3000](http://localhost:3000) in your browser.

## Build for Production

```bash
npm run build
```

This will generate a static export in the `out` directory, which can be
uploaded to any static hosting service.

---

Generated with webwiz
"#,
        name = spec.business_name,
        description = spec.description,
        template = spec.template,
        font = spec.font,
    )
}
