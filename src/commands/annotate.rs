use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use propfix::defaults;
use propfix::refactor::{self, AnnotateOptions, AnnotateResult};

use crate::commands::CmdResult;

#[derive(Args, Debug)]
pub struct AnnotateArgs {
    /// Directory to scan
    #[arg(default_value = ".")]
    pub root: PathBuf,
    /// File extension to scan (overrides propfix.json; default: tsx)
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,
    /// Directory name to skip at any depth (repeatable; replaces the configured list)
    #[arg(long = "exclude", value_name = "DIR")]
    pub exclude: Vec<String>,
    /// Config file (default: <ROOT>/propfix.json when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Report files that would change without writing them
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum AnnotateOutput {
    #[serde(rename = "annotate")]
    Annotate(AnnotateResult),
}

pub fn run(args: AnnotateArgs) -> CmdResult<AnnotateOutput> {
    let mut defaults = defaults::load_defaults(&args.root, args.config.as_deref())?;

    if let Some(extension) = args.extension {
        defaults.extension = extension;
    }
    if !args.exclude.is_empty() {
        defaults.excluded_dirs = args.exclude;
    }

    let options = AnnotateOptions {
        root: args.root,
        defaults,
        dry_run: args.dry_run,
    };

    let result = refactor::annotate_root(&options)?;

    Ok((AnnotateOutput::Annotate(result), 0))
}

/// Text rendering: one line per changed file, then a summary count.
pub fn render_text(output: &AnnotateOutput) -> String {
    let AnnotateOutput::Annotate(result) = output;
    let mut out = String::new();

    let verb = if result.dry_run { "Would fix" } else { "Fixed" };

    for edit in &result.edits {
        out.push_str(&format!("{}: {}\n", verb, edit.path));
    }
    for skipped in &result.skipped {
        out.push_str(&format!("Skipped: {} ({})\n", skipped.path, skipped.reason));
    }

    out.push_str(&format!("\n{} {} files\n", verb, result.files_modified));
    out
}
