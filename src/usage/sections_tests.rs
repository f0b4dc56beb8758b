use super::{capitalize_headers, find_section, relocate_options, sections, Section};

fn relocate(doc: &str) -> String {
    String::from_utf8(relocate_options(doc.as_bytes())).expect("utf8 document")
}

fn capitalize(doc: &str) -> String {
    String::from_utf8(capitalize_headers(doc.as_bytes())).expect("utf8 document")
}

#[test]
fn sections_split_on_headers() {
    let doc = "intro\n## NAME\nfoo\n## USAGE\nbar\n";
    let found = sections(doc.as_bytes());
    assert_eq!(
        found,
        vec![
            Section {
                title: "NAME".to_string(),
                start: 6,
                end: 18,
            },
            Section {
                title: "USAGE".to_string(),
                start: 18,
                end: doc.len(),
            },
        ]
    );
    assert_eq!(found[0].span(doc.as_bytes()), b"## NAME\nfoo\n");
}

#[test]
fn deeper_headings_close_a_section() {
    let doc = "## USAGE\nu\n### Note\nx\n";
    let found = sections(doc.as_bytes());
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].span(doc.as_bytes()), b"## USAGE\nu\n");
}

#[test]
fn section_titles_match_exactly() {
    let doc = "## DESCRIPTION\nd\n## OPTIONS EXTRA\no\n";
    let found = sections(doc.as_bytes());
    assert!(find_section(&found, "Description").is_none());
    assert!(find_section(&found, "OPTIONS").is_none());
    assert!(find_section(&found, "OPTIONS EXTRA").is_some());
}

#[test]
fn options_already_after_name_is_unchanged() {
    let doc = "## NAME\nfoo\n## OPTIONS\nbar\n## EXAMPLES\nbaz\n";
    assert_eq!(relocate(doc), doc);
}

#[test]
fn options_move_after_positional_arguments() {
    let doc = "## NAME\nn\n## OPTIONS\no\n## POSITIONAL ARGUMENTS\np\n## EXAMPLES\ne\n";
    assert_eq!(
        relocate(doc),
        "## NAME\nn\n## POSITIONAL ARGUMENTS\np\n## OPTIONS\no\n## EXAMPLES\ne\n"
    );
}

#[test]
fn generated_layout_puts_options_before_examples() {
    let doc = concat!(
        "## NAME\n**step rand** -- generate random strings\n\n",
        "## USAGE\n\n**step rand** [`length`]\n\n",
        "## DESCRIPTION\n\nGenerates things.\n\n",
        "## POSITIONAL ARGUMENTS\n\n`length`\n: The length.\n\n",
        "## EXAMPLES\n\nRoll a die.\n\n",
        "## OPTIONS\n\n**--format**=`format`\n: The format.\n",
    );
    let out = relocate(doc);
    let order: Vec<String> = sections(out.as_bytes()).into_iter().map(|s| s.title).collect();
    assert_eq!(
        order,
        vec![
            "NAME",
            "USAGE",
            "DESCRIPTION",
            "POSITIONAL ARGUMENTS",
            "OPTIONS",
            "EXAMPLES"
        ]
    );
    assert!(out.ends_with("## EXAMPLES\n\nRoll a die.\n\n"));
}

#[test]
fn anchor_priority_prefers_description_over_usage() {
    let doc = "## NAME\nn\n## USAGE\nu\n## Description\nd\n## SEE ALSO\ns\n## OPTIONS\no\n";
    assert_eq!(
        relocate(doc),
        "## NAME\nn\n## USAGE\nu\n## Description\nd\n## OPTIONS\no\n## SEE ALSO\ns\n"
    );
}

#[test]
fn uppercase_description_is_not_an_anchor() {
    let doc = "## USAGE\nu\n## DESCRIPTION\nd\n## OPTIONS\no\n";
    assert_eq!(
        relocate(doc),
        "## USAGE\nu\n## OPTIONS\no\n## DESCRIPTION\nd\n"
    );
}

#[test]
fn options_without_anchor_go_last() {
    let doc = "## OPTIONS\no\n## EXAMPLES\ne\n";
    assert_eq!(relocate(doc), "## EXAMPLES\ne\n## OPTIONS\no\n");
}

#[test]
fn missing_options_is_a_no_op() {
    let doc = "## NAME\nn\n## USAGE\nu\n";
    assert_eq!(relocate(doc), doc);
    assert_eq!(relocate(""), "");
}

#[test]
fn unterminated_options_stay_on_their_own_lines() {
    let doc = "## USAGE\nu\n## EXAMPLES\ne\n## OPTIONS\no";
    assert_eq!(
        relocate(doc),
        "## USAGE\nu\n## OPTIONS\no\n## EXAMPLES\ne\n"
    );

    let doc = "## OPTIONS\no\n## NAME\nn";
    assert_eq!(relocate(doc), "## NAME\nn\n## OPTIONS\no\n");
}

#[test]
fn subsection_bounds_the_anchor() {
    let doc = "## USAGE\nu\n### Note\nx\n## OPTIONS\no\n";
    assert_eq!(
        relocate(doc),
        "## USAGE\nu\n## OPTIONS\no\n### Note\nx\n"
    );
}

#[test]
fn capitalize_keeps_first_letter_only() {
    assert_eq!(capitalize("## OPTIONS"), "## Options");
    assert_eq!(
        capitalize("## POSITIONAL ARGUMENTS"),
        "## Positional arguments"
    );
}

#[test]
fn capitalize_touches_header_lines_only() {
    let doc = "## NAME\nKEEP THIS\n### SUB HEADING\n## SEE ALSO\n##NOSPACE\n";
    assert_eq!(
        capitalize(doc),
        "## Name\nKEEP THIS\n### SUB HEADING\n## See also\n##NOSPACE\n"
    );
}

#[test]
fn capitalize_keeps_given_case_of_first_letter() {
    assert_eq!(capitalize("## eXAMPLES"), "## examples");
    assert_eq!(capitalize("## Ünicode TITLE"), "## Ünicode title");
}

#[test]
fn bytes_outside_utf8_survive_relocation() {
    let doc: &[u8] = b"## OPTIONS\n\xff opt\n## USAGE\ncaf\xe9\n";
    assert_eq!(
        relocate_options(doc),
        b"## USAGE\ncaf\xe9\n## OPTIONS\n\xff opt\n"
    );
}

#[test]
fn capitalize_keeps_bytes_outside_utf8() {
    assert_eq!(
        capitalize_headers(b"## SEE \xe9LSO\nBODY \xff\n"),
        b"## See \xe9lso\nBODY \xff\n"
    );
    assert_eq!(capitalize_headers(b"## \xe9TC"), b"## \xe9tc");
}
