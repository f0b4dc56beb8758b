use crate::cli::{HelpArgs, RandArgs};
use crate::commands::{self, PROGRAM};
use crate::config::StepdocConfig;
use crate::random::{self, RandOutput, RandRequest};
use crate::usage::printer::{self, PageInfo};
use crate::usage::{normalize, normalize_reader, render_raw_help};
use anyhow::{anyhow, Context, Result};
use rand::rngs::OsRng;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

pub fn run_help(args: HelpArgs, config: &StepdocConfig) -> Result<()> {
    let options = args.format.normalize_options(config);
    let (text, default_title) = match (&args.command, &args.input) {
        (Some(name), _) => {
            let doc = commands::find_doc(name).ok_or_else(|| {
                anyhow!(
                    "unknown command '{}' (available: {})",
                    name,
                    commands::doc_names().join(", ")
                )
            })?;
            let raw = render_raw_help(doc, PROGRAM);
            (normalize(raw.as_bytes(), &options), Some(doc.help_name(PROGRAM)))
        }
        (None, Some(path)) => {
            let file = fs::File::open(path)
                .with_context(|| format!("open help input {}", path.display()))?;
            (normalize_reader(file, &options), None)
        }
        (None, None) => (normalize_reader(io::stdin().lock(), &options), None),
    };

    let title = args
        .title
        .or(default_title)
        .unwrap_or_else(|| PROGRAM.to_string());
    let page = PageInfo {
        title: &title,
        parent: args.parent.as_deref(),
    };
    tracing::debug!(format = ?args.format, title = %title, "rendering help");

    // Buffer so a failed render never leaves a partial file behind.
    let mut rendered = Vec::with_capacity(text.len() * 2);
    printer::emit(&mut rendered, args.format, &text, &page, config).context("render help")?;
    write_output(args.out.as_deref(), &rendered)
}

pub fn run_rand(args: RandArgs) -> Result<()> {
    let request = RandRequest::from_args(
        args.length.as_deref(),
        args.format.as_deref(),
        args.dictionary.as_deref(),
    )?;
    tracing::debug!(source = ?request.source, length = request.length, "generating");
    let output = random::generate(&mut OsRng, &request)?;
    let mut stdout = io::stdout().lock();
    match output {
        RandOutput::Text(text) => writeln!(stdout, "{text}").context("write random string")?,
        RandOutput::Bytes(bytes) => stdout.write_all(&bytes).context("write random bytes")?,
    }
    stdout.flush().context("flush stdout")?;
    Ok(())
}

fn write_output(out: Option<&Path>, bytes: &[u8]) -> Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir {}", parent.display()))?;
            }
            fs::write(path, bytes).with_context(|| format!("write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote help");
            Ok(())
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes).context("write help")?;
            stdout.flush().context("flush stdout")?;
            Ok(())
        }
    }
}
