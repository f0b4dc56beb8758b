//! Help text normalization.
//!
//! Raw help comes out of the command template with placeholders, quote fences
//! and OPTIONS at the very end. `normalize` turns it into Markdown with the
//! sections in reading order; `printer` wraps the result for each output.

mod markdownify;
pub mod printer;
pub mod sections;
mod template;

use markdownify::{markdownify, markdownify_reader};
pub use printer::OutputMode;
pub use template::{render_raw_help, CommandDoc, FlagDoc};

/// Knobs for a single normalization pass.
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Lowercase section titles after their first letter.
    pub capitalize_first_only: bool,
    /// Language hint for opening code fences followed by whitespace.
    pub fence_language: String,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            capitalize_first_only: false,
            fence_language: "shell".to_string(),
        }
    }
}

/// Markdownify `raw`, put OPTIONS in place, and optionally fix header case.
///
/// Bytes that are not UTF-8 are carried through untouched.
pub fn normalize(raw: &[u8], options: &NormalizeOptions) -> Vec<u8> {
    finish(markdownify(raw, &options.fence_language), options)
}

/// Same as [`normalize`] but reads the raw text, keeping whatever was read
/// if the reader fails part way.
pub fn normalize_reader<R: std::io::Read>(reader: R, options: &NormalizeOptions) -> Vec<u8> {
    finish(markdownify_reader(reader, &options.fence_language), options)
}

fn finish(text: Vec<u8>, options: &NormalizeOptions) -> Vec<u8> {
    let text = sections::relocate_options(&text);
    if options.capitalize_first_only {
        sections::capitalize_headers(&text)
    } else {
        text
    }
}
