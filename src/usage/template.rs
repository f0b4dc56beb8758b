//! Raw help text for built-in commands.
//!
//! This is the layout the normalizer expects from a command template: NAME,
//! USAGE and DESCRIPTION first, OPTIONS appended last.

/// A command flag as it appears in help.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagDoc {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    /// Value placeholder without brackets; `None` for boolean flags.
    pub placeholder: Option<&'static str>,
    pub usage: &'static str,
}

/// Help metadata for a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDoc {
    pub name: &'static str,
    pub usage: &'static str,
    pub usage_text: &'static str,
    /// Free-form body; may carry its own `##` sections.
    pub description: &'static str,
    pub flags: &'static [FlagDoc],
}

impl CommandDoc {
    pub fn help_name(&self, program: &str) -> String {
        format!("{program} {}", self.name)
    }
}

fn flag_spelling(name: &str) -> String {
    let dashes = if name.chars().count() == 1 { "-" } else { "--" };
    format!("**{dashes}{name}**")
}

fn render_flag(flag: &FlagDoc) -> String {
    let spellings: Vec<String> = std::iter::once(flag.name)
        .chain(flag.aliases.iter().copied())
        .map(|name| match flag.placeholder {
            Some(placeholder) => format!("{}=<{placeholder}>", flag_spelling(name)),
            None => flag_spelling(name),
        })
        .collect();
    format!("{}\n: {}", spellings.join(", "), flag.usage)
}

/// Expand `doc` into raw (pre-normalization) help text.
///
/// `usage_text` is expected to already name the program; `program` is used
/// for the NAME line and for the fallback usage line.
pub fn render_raw_help(doc: &CommandDoc, program: &str) -> String {
    let help_name = doc.help_name(program);
    let mut out = String::new();
    out.push_str(&format!("## NAME\n**{help_name}** -- {}\n\n", doc.usage));

    out.push_str("## USAGE\n\n");
    if doc.usage_text.is_empty() {
        out.push_str(&format!("**{help_name}**"));
        if !doc.flags.is_empty() {
            out.push_str(" _[options]_");
        }
    } else {
        out.push_str(doc.usage_text);
    }
    out.push('\n');

    if !doc.description.is_empty() {
        out.push_str("\n## DESCRIPTION\n\n");
        out.push_str(doc.description.trim_end());
        out.push('\n');
    }

    if !doc.flags.is_empty() {
        out.push_str("\n## OPTIONS\n\n");
        let flags: Vec<String> = doc.flags.iter().map(render_flag).collect();
        out.push_str(&flags.join("\n\n"));
        out.push('\n');
    }
    out
}
