//! cppdoc — generate cross-linked API documentation from annotated C++
//! source files.
//!
//! Documentation lives in `/*** ... */` comment blocks whose lines carry
//! `* \tag value` annotations. Two output modes:
//!
//! - **HTML** (default): one cross-linked document, written to stdout or
//!   to the `-o` file: `cppdoc source/ -o docs/reference.html`
//! - **Doxygen**: per-kind stub files written into the `-o` directory:
//!   `cppdoc --doxygen source/ -o docs/dox`

mod marker;
mod model;
mod parser;
mod registry;
mod render;
mod xref;

use anyhow::{bail, Context, Result};
use clap::Parser;
use registry::Registry;
use render::Mode;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "cppdoc",
    about = "Generate API documentation from annotated C++ source files"
)]
struct Cli {
    /// Input files or directories (glob patterns supported)
    inputs: Vec<String>,

    /// Output file (HTML) or directory (Doxygen). HTML goes to stdout if omitted.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Emit a single cross-linked HTML document (default)
    #[arg(long, conflicts_with = "doxygen")]
    html: bool,

    /// Emit Doxygen-compatible stub files, one per definition kind
    #[arg(long)]
    doxygen: bool,

    /// Page title used by the HTML renderer
    #[arg(long, default_value = "API Reference")]
    title: String,

    /// Stylesheet file inlined into the HTML output
    #[arg(long)]
    stylesheet: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configuration errors abort before any parsing happens.
    let mode = render::select_mode(cli.html, cli.doxygen, cli.output.as_deref())?;
    if cli.inputs.is_empty() {
        bail!("no input files given");
    }

    let files = expand_inputs(&cli.inputs)?;

    let mut registry = Registry::new();
    for path in &files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        parser::extract_blocks(&content, &mut registry);
    }
    registry.finalize();

    match mode {
        Mode::Doxygen(dir) => render::doxygen::write_files(&registry, &dir)?,
        Mode::Html => {
            let stylesheet = load_stylesheet(cli.stylesheet.as_deref());
            let page = render::html::render(&registry, &cli.title, &stylesheet);
            match cli.output.as_deref() {
                Some(path) => fs::write(path, page)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => print!("{}", page),
            }
        }
    }

    Ok(())
}

/// File extensions scanned when an input names a directory.
const SOURCE_EXTENSIONS: &[&str] = &["cpp", "cc", "cxx"];

/// Expand input arguments into a deterministic list of source files:
/// literal files pass through, directories are scanned recursively, and
/// anything else is tried as a glob pattern.
fn expand_inputs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        if path.is_dir() {
            for ext in SOURCE_EXTENSIONS {
                let recursive = format!("{}/**/*.{}", pattern.trim_end_matches('/'), ext);
                let matches = glob::glob(&recursive)
                    .with_context(|| format!("invalid directory pattern: {}", recursive))?;
                files.extend(matches.filter_map(|r| r.ok()).filter(|p| p.is_file()));
            }
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            eprintln!("warning: no files matched: {}", pattern);
        }
        files.extend(matches);
    }

    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

/// Missing or unreadable stylesheets fall back to an empty style block.
fn load_stylesheet(path: Option<&Path>) -> String {
    match path {
        Some(path) => fs::read_to_string(path).unwrap_or_default(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn expand_inputs_scans_directories_recursively() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("sub");
        fs::create_dir(&nested).unwrap();
        fs::File::create(dir.path().join("a.cpp"))
            .unwrap()
            .write_all(b"")
            .unwrap();
        fs::File::create(nested.join("b.cc"))
            .unwrap()
            .write_all(b"")
            .unwrap();
        fs::File::create(dir.path().join("skip.txt"))
            .unwrap()
            .write_all(b"")
            .unwrap();

        let found = expand_inputs(&[dir.path().to_string_lossy().to_string()]).unwrap();
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|p| p.extension().unwrap() != "txt"));
    }

    #[test]
    fn expand_inputs_dedupes_and_sorts() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.cpp");
        fs::File::create(&file).unwrap().write_all(b"").unwrap();

        let arg = file.to_string_lossy().to_string();
        let found = expand_inputs(&[arg.clone(), arg]).unwrap();
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn missing_stylesheet_is_empty() {
        assert_eq!(load_stylesheet(Some(Path::new("/no/such/file.css"))), "");
        assert_eq!(load_stylesheet(None), "");
    }
}
