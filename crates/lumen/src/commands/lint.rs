//! Lint command - Lint serialized JSX documents

use crate::config::{load_config, CONFIG_FILE_NAME};
use clap::{Args, ValueEnum};
use glob::glob;
use ignore::Walk;
use lumen_patina::{format_results, format_summary, Linter, OutputFormat};
use lumen_relief::RootNode;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

#[derive(Args)]
pub struct LintArgs {
    /// Glob pattern(s) or directories of AST documents (.json)
    #[arg(default_value = "./**/*.ast.json")]
    pub patterns: Vec<String>,

    /// Config file path (defaults to ./lumen.config.json when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Maximum number of warnings before failing
    #[arg(long)]
    pub max_warnings: Option<usize>,

    /// Quiet mode - only show summary
    #[arg(short, long)]
    pub quiet: bool,
}

/// Whether `path` looks like an AST document
fn is_document(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
        && path.file_name().is_some_and(|name| name != CONFIG_FILE_NAME)
        && !path.components().any(|c| c.as_os_str() == "node_modules")
}

fn collect_files(patterns: &[String]) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = patterns
        .iter()
        .flat_map(|pattern| {
            // Check if pattern contains glob characters
            if pattern.contains('*') || pattern.contains('?') || pattern.contains('[') {
                glob(pattern)
                    .ok()
                    .into_iter()
                    .flatten()
                    .filter_map(|r| r.ok())
                    .filter(|p| is_document(p))
                    .collect::<Vec<_>>()
            } else {
                // Use directory walking for paths (respects .gitignore)
                Walk::new(pattern)
                    .filter_map(|e| e.ok())
                    .filter(|e| is_document(e.path()))
                    .map(|e| e.path().to_path_buf())
                    .collect::<Vec<_>>()
            }
        })
        .collect();
    files.sort();
    files.dedup();
    files
}

pub fn run(args: LintArgs) {
    let start = Instant::now();

    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    };
    let linter = match Linter::from_config(&config.lint) {
        Ok(linter) => linter,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    };

    let files = collect_files(&args.patterns);
    if files.is_empty() {
        eprintln!("No AST documents found matching patterns: {:?}", args.patterns);
        return;
    }
    tracing::info!(files = files.len(), rules = linter.rules().len(), "linting");

    let error_count = AtomicUsize::new(0);
    let warning_count = AtomicUsize::new(0);
    let failed_count = AtomicUsize::new(0);

    // Lint all files in parallel and collect results
    let results: Vec<_> = files
        .par_iter()
        .filter_map(|path| {
            let json = match fs::read_to_string(path) {
                Ok(s) => s,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "unreadable document");
                    eprintln!("Failed to read {}: {}", path.display(), e);
                    failed_count.fetch_add(1, Ordering::Relaxed);
                    return None;
                }
            };
            let root = match RootNode::from_json(&json) {
                Ok(root) => root,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "invalid AST document");
                    eprintln!("Failed to load {}: {}", path.display(), e);
                    failed_count.fetch_add(1, Ordering::Relaxed);
                    return None;
                }
            };

            let filename = path.to_string_lossy().to_string();
            let result = linter.lint_root(&root, &filename);

            error_count.fetch_add(result.error_count, Ordering::Relaxed);
            warning_count.fetch_add(result.warning_count, Ordering::Relaxed);

            Some((filename, root.source, result))
        })
        .collect();

    let total_errors = error_count.load(Ordering::Relaxed);
    let total_warnings = warning_count.load(Ordering::Relaxed);
    let total_failed = failed_count.load(Ordering::Relaxed);

    let format = OutputFormat::from(args.format);

    // Format and print results
    if !args.quiet || total_errors > 0 || total_warnings > 0 {
        let lint_results: Vec<_> = results.iter().map(|(_, _, r)| r).cloned().collect();
        let sources: Vec<_> = results
            .iter()
            .filter_map(|(f, s, _)| s.as_ref().map(|s| (f.clone(), s.clone())))
            .collect();

        let output = format_results(&lint_results, &sources, format);
        if !output.trim().is_empty() {
            print!("{}", output);
        }
    }

    // Print summary
    let elapsed = start.elapsed();
    if format == OutputFormat::Text {
        println!(
            "\n{}",
            format_summary(total_errors, total_warnings, results.len())
        );
        println!("Linted {} files in {:.4?}", results.len(), elapsed);
    }

    // Exit with appropriate code
    if total_errors > 0 || total_failed > 0 {
        std::process::exit(1);
    }

    if let Some(max) = args.max_warnings {
        if total_warnings > max {
            eprintln!("\nToo many warnings ({} > max {})", total_warnings, max);
            std::process::exit(1);
        }
    }
}
