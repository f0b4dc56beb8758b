//! Output wrappers for normalized help: terminal, HTML page, site Markdown.

use super::NormalizeOptions;
use crate::config::{FrontMatterConfig, HtmlConfig, StepdocConfig};
use askama::Template;
use pulldown_cmark::{html, Options, Parser};
use std::io::Write;
use thiserror::Error;

/// How normalized help is emitted.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Markdown text as-is
    #[default]
    Terminal,
    /// Standalone HTML page
    Html,
    /// Markdown with static-site front matter
    Markdown,
}

impl OutputMode {
    /// Published formats use sentence-case section titles.
    pub fn normalize_options(self, config: &StepdocConfig) -> NormalizeOptions {
        NormalizeOptions {
            capitalize_first_only: self != OutputMode::Terminal,
            fence_language: config.fence_language.clone(),
        }
    }
}

#[derive(Debug, Error)]
pub enum PrintError {
    #[error("render front matter: {0}")]
    Template(#[from] askama::Error),
    #[error("write help output: {0}")]
    Io(#[from] std::io::Error),
}

/// Page identity used by the site Markdown output.
#[derive(Debug, Clone, Copy)]
pub struct PageInfo<'a> {
    pub title: &'a str,
    pub parent: Option<&'a str>,
}

#[derive(Template)]
#[template(path = "front_matter.md", escape = "none")]
struct FrontMatter<'a> {
    layout: &'a str,
    title: &'a str,
    parent: Option<&'a str>,
}

/// Render the front matter block, followed by a blank line.
pub fn render_front_matter(
    page: &PageInfo<'_>,
    config: &FrontMatterConfig,
) -> Result<String, PrintError> {
    let front = FrontMatter {
        layout: &config.layout,
        title: page.title,
        parent: page.parent.filter(|parent| !parent.is_empty()),
    };
    let mut rendered = front.render()?;
    rendered.truncate(rendered.trim_end().len());
    rendered.push_str("\n\n");
    Ok(rendered)
}

/// Markdown to HTML.
pub fn render_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

pub fn print_terminal<W: Write>(w: &mut W, text: &[u8]) -> Result<(), PrintError> {
    w.write_all(text)?;
    Ok(())
}

/// Write a full HTML page and return the rendered body.
///
/// The page is UTF-8, so bytes in `text` that are not are replaced here.
pub fn print_html<W: Write>(
    w: &mut W,
    text: &[u8],
    config: &HtmlConfig,
) -> Result<String, PrintError> {
    let body = render_html(&String::from_utf8_lossy(text));
    write!(
        w,
        "<html><head><title>{}</title><link href=\"{}\" rel=\"stylesheet\" type=\"text/css\"></head><body><div class=\"{}\">",
        config.title, config.stylesheet, config.wrapper_class
    )?;
    w.write_all(body.as_bytes())?;
    w.write_all(b"</div></body></html>")?;
    Ok(body)
}

pub fn print_markdown<W: Write>(
    w: &mut W,
    text: &[u8],
    page: &PageInfo<'_>,
    config: &FrontMatterConfig,
) -> Result<(), PrintError> {
    // Render before writing so a template failure leaves the output untouched.
    let front = render_front_matter(page, config)?;
    w.write_all(front.as_bytes())?;
    w.write_all(text)?;
    Ok(())
}

/// Emit already-normalized help in `mode`.
pub fn emit<W: Write>(
    w: &mut W,
    mode: OutputMode,
    text: &[u8],
    page: &PageInfo<'_>,
    config: &StepdocConfig,
) -> Result<(), PrintError> {
    match mode {
        OutputMode::Terminal => print_terminal(w, text),
        OutputMode::Html => print_html(w, text, &config.html).map(|_| ()),
        OutputMode::Markdown => print_markdown(w, text, page, &config.front_matter),
    }
}
