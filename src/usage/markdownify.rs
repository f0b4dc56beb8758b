//! Markdown escaping for raw help text.
//!
//! Help sources are written without backticks so they can live in raw string
//! literals. Placeholders are spelled `<foo>` and code fences `'''`; this pass
//! turns them into the Markdown they stand for.
//!
//! The scan runs over bytes. Every marker is ASCII, so text that is not valid
//! UTF-8 passes through unchanged instead of being replaced.

use std::io::Read;

const ESCAPE: u8 = b'\\';
const QUOTE: u8 = b'\'';
const FENCE: &[u8] = b"```";

/// Convert placeholder and fence syntax into Markdown.
///
/// - `<foo>` becomes `` `foo` `` outside code blocks; `\<` and `\>` stay literal.
/// - `\\` collapses to a single backslash; any other backslash is kept.
/// - `'''` becomes a fence. An opening fence followed by whitespace gets the
///   `fence_language` hint.
/// - `**` is dropped inside code blocks.
pub fn markdownify(text: &[u8], fence_language: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    let mut last: Option<u8> = None;
    let mut in_code = false;
    let mut idx = 0;

    while idx < text.len() {
        let byte = text[idx];
        let escaped = last == Some(ESCAPE);
        if escaped && !matches!(byte, b'<' | b'>' | ESCAPE) {
            out.push(ESCAPE);
        }

        match byte {
            b'<' | b'>' => {
                if escaped || in_code {
                    out.push(byte);
                } else {
                    out.push(b'`');
                }
            }
            ESCAPE => {
                if escaped {
                    out.push(ESCAPE);
                    last = None;
                    idx += 1;
                    continue;
                }
            }
            QUOTE => {
                if text.get(idx + 1) == Some(&QUOTE) && text.get(idx + 2) == Some(&QUOTE) {
                    out.extend_from_slice(FENCE);
                    if !in_code && next_char(&text[idx + 3..]).is_some_and(char::is_whitespace) {
                        out.extend_from_slice(fence_language.as_bytes());
                    }
                    in_code = !in_code;
                    last = Some(QUOTE);
                    idx += 3;
                    continue;
                }
                out.push(byte);
            }
            b'*' if in_code => {
                if text.get(idx + 1) == Some(&b'*') {
                    last = Some(b'*');
                    idx += 2;
                    continue;
                }
                out.push(byte);
            }
            _ => out.push(byte),
        }
        last = Some(byte);
        idx += 1;
    }

    if last == Some(ESCAPE) {
        out.push(ESCAPE);
    }
    out
}

/// Decode the character at the start of `bytes`; `None` if it is not UTF-8.
fn next_char(bytes: &[u8]) -> Option<char> {
    let head = &bytes[..bytes.len().min(4)];
    let valid = match std::str::from_utf8(head) {
        Ok(text) => text,
        Err(err) => std::str::from_utf8(&head[..err.valid_up_to()]).ok()?,
    };
    valid.chars().next()
}

/// Number of trailing bytes that start a UTF-8 sequence but do not finish it.
fn incomplete_tail_len(bytes: &[u8]) -> usize {
    for back in 1..=bytes.len().min(3) {
        let byte = bytes[bytes.len() - back];
        if byte & 0b1100_0000 == 0b1000_0000 {
            continue;
        }
        let width = match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => return 0,
        };
        return if width > back { back } else { 0 };
    }
    0
}

/// Read help text from `reader` and markdownify it.
///
/// A read error ends the input early; whatever was read before it is still
/// converted and returned. A character cut in half by the failed read is
/// dropped.
pub fn markdownify_reader<R: Read>(mut reader: R, fence_language: &str) -> Vec<u8> {
    let mut bytes = Vec::new();
    let mut buf = [0u8; 8192];
    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => bytes.extend_from_slice(&buf[..n]),
            Err(err) if err.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(err) => {
                bytes.truncate(bytes.len() - incomplete_tail_len(&bytes));
                tracing::warn!(error = %err, read = bytes.len(), "help input truncated");
                break;
            }
        }
    }
    markdownify(&bytes, fence_language)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn md(text: &str) -> String {
        String::from_utf8(markdownify(text.as_bytes(), "shell")).expect("utf8 output")
    }

    #[test]
    fn plain_text_is_unchanged() {
        let text = "NAME\nstep rand -- generate random strings\n\nno markers here.\n";
        assert_eq!(md(text), text);
    }

    #[test]
    fn angle_brackets_become_code_spans() {
        assert_eq!(md("a <b> c"), "a `b` c");
        assert_eq!(md("**step rand** [<length>]"), "**step rand** [`length`]");
    }

    #[test]
    fn escaped_brackets_survive_literally() {
        assert_eq!(md("\\<b\\>"), "<b>");
        assert_eq!(md("x \\< y"), "x < y");
    }

    #[test]
    fn doubled_backslash_collapses() {
        assert_eq!(md("a\\\\b"), "a\\b");
        assert_eq!(md("\\\\<b>"), "\\`b`");
    }

    #[test]
    fn lone_backslash_is_kept() {
        assert_eq!(md("C:\\temp"), "C:\\temp");
        assert_eq!(md("trailing\\"), "trailing\\");
        assert_eq!(md("\\n"), "\\n");
    }

    #[test]
    fn triple_quote_opens_shell_fence() {
        assert_eq!(md("'''\nstep rand\n'''"), "```shell\nstep rand\n```");
    }

    #[test]
    fn fence_hint_only_when_followed_by_whitespace() {
        assert_eq!(md("'''json\n{}\n'''"), "```json\n{}\n```");
        assert_eq!(md("'''"), "```");
    }

    #[test]
    fn closing_fence_gets_no_hint() {
        assert_eq!(md("''' x ''' y"), "```shell x ``` y");
    }

    #[test]
    fn brackets_inside_code_are_literal() {
        let text = "'''\n$ step rand <n>\n'''\nsee <n>";
        assert_eq!(md(text), "```shell\n$ step rand <n>\n```\nsee `n`");
    }

    #[test]
    fn single_and_double_quotes_pass_through() {
        assert_eq!(md("it's"), "it's");
        assert_eq!(md("''x"), "''x");
        assert_eq!(md("a''"), "a''");
    }

    #[test]
    fn four_quotes_fence_then_literal_quote() {
        assert_eq!(md("''''"), "```'");
    }

    #[test]
    fn double_asterisks_dropped_in_code_only() {
        assert_eq!(md("**bold**"), "**bold**");
        assert_eq!(md("'''\n**step** a*b\n'''"), "```shell\nstep a*b\n```");
    }

    #[test]
    fn custom_fence_language() {
        assert_eq!(markdownify(b"'''\nls\n'''", "bash"), b"```bash\nls\n```");
    }

    #[test]
    fn multibyte_text_is_preserved() {
        assert_eq!(md("emoji 🎲 <n> ñ"), "emoji 🎲 `n` ñ");
    }

    #[test]
    fn reader_matches_str_conversion() {
        let text = "## USAGE\n\n**step rand** [<length>]\n";
        let from_reader = markdownify_reader(text.as_bytes(), "shell");
        assert_eq!(from_reader, md(text).into_bytes());
    }

    #[test]
    fn fence_hint_sees_multibyte_whitespace() {
        // U+3000 IDEOGRAPHIC SPACE
        assert_eq!(md("'''\u{3000}x'''"), "```shell\u{3000}x```");
        assert_eq!(md("'''é\n'''"), "```é\n```");
    }

    #[test]
    fn bytes_outside_utf8_pass_through() {
        assert_eq!(markdownify(b"caf\xe9 <x>\n", "shell"), b"caf\xe9 `x`\n");
        assert_eq!(
            markdownify(b"\xff'''\n<\x80>\n'''", "shell"),
            b"\xff```shell\n<\x80>\n```"
        );
    }

    #[test]
    fn reader_keeps_bytes_outside_utf8() {
        let from_reader = markdownify_reader(&b"caf\xe9 <x>\n"[..], "shell");
        assert_eq!(from_reader, b"caf\xe9 `x`\n");
    }

    struct FailingReader {
        chunk: Option<&'static [u8]>,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            match self.chunk.take() {
                Some(chunk) => {
                    buf[..chunk.len()].copy_from_slice(chunk);
                    Ok(chunk.len())
                }
                None => Err(std::io::Error::other("device gone")),
            }
        }
    }

    #[test]
    fn reader_error_returns_partial_output() {
        let reader = FailingReader {
            chunk: Some(b"partial <arg>"),
        };
        assert_eq!(markdownify_reader(reader, "shell"), b"partial `arg`");
    }

    #[test]
    fn reader_error_drops_split_character() {
        // The read fails between the two bytes of "é" (0xC3 0xA9).
        let reader = FailingReader {
            chunk: Some(b"<a> caf\xc3"),
        };
        assert_eq!(markdownify_reader(reader, "shell"), b"`a` caf");
    }

    #[test]
    fn incomplete_tail_only_counts_unfinished_sequences() {
        assert_eq!(incomplete_tail_len(b"abc"), 0);
        assert_eq!(incomplete_tail_len("é€🎲".as_bytes()), 0);
        assert_eq!(incomplete_tail_len(b"a\xe2\x82"), 2);
        assert_eq!(incomplete_tail_len(b"a\xf0\x9f\x8e"), 3);
        assert_eq!(incomplete_tail_len(b"a\xf0"), 1);
        assert_eq!(incomplete_tail_len(b"caf\xe9"), 1);
        assert_eq!(incomplete_tail_len(b"a\x80"), 0);
    }
}
