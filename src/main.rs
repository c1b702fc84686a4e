//! retroedit - print a source file with syntax highlighting
//!
//! Usage: retroedit [--language NAME] FILE

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use crossterm::style::{StyledContent, Stylize};
use tracing_subscriber::EnvFilter;

use retroedit::syntax::LanguageRegistry;
use retroedit::{Config, EditorError, Result, TextEditor};

fn main() {
    init_logging();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("RETROEDIT_LOG"))
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<()> {
    let mut args = env::args().skip(1);
    let mut language: Option<String> = None;
    let mut file: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-V" => {
                print_version();
                return Ok(());
            }
            "--language" | "-l" => match args.next() {
                Some(name) => language = Some(name),
                None => return Err(EditorError::Message("--language needs a name".to_string())),
            },
            other if other.starts_with('-') => {
                return Err(EditorError::Message(format!("unknown option {other}")));
            }
            _ => file = Some(PathBuf::from(arg)),
        }
    }

    let Some(path) = file else {
        print_usage();
        return Ok(());
    };

    let config = Config::load();
    let mut registry = LanguageRegistry::builtin()?;
    config.apply_extensions(&mut registry);

    let mut editor = TextEditor::new(Arc::new(registry), &config);
    editor.open_file(&path)?;
    if let Some(name) = language.as_deref() {
        editor.set_syntax_language(Some(name));
        if editor.language().is_none() {
            tracing::warn!(language = name, "no highlighting for this language");
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let doc = editor.document();
    for (idx, line) in doc.lines().iter().enumerate() {
        if let Some(gutter) = editor.gutter(idx) {
            write!(out, "{}", gutter.as_str().dim())?;
        }
        for run in editor.styled_line(idx) {
            let text = line.text().get(run.start..run.end).unwrap_or_default();
            write!(out, "{}", StyledContent::new(run.style.to_content_style(), text))?;
        }
        if idx + 1 < doc.line_count() {
            writeln!(out)?;
        }
    }
    out.flush()?;

    Ok(())
}

fn print_usage() {
    println!("retroedit {} - syntax highlighting viewer", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: retroedit [OPTIONS] FILE");
    println!();
    println!("Options:");
    println!("  -l, --language NAME  Highlight as NAME instead of detecting by extension");
    println!("  -h, --help           Show this help message");
    println!("  -V, --version        Show version information");
    println!();
    println!("Languages: python, javascript, rust, c");
    println!("Set line_numbers = true in the config file for a line-number gutter");
    println!("Settings are read from ~/.retroedit.toml; set RETROEDIT_LOG=debug for logs");
}

fn print_version() {
    println!("retroedit {}", env!("CARGO_PKG_VERSION"));
}
