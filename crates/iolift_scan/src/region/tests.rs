use super::*;
use crate::SourceBuffer;
use pretty_assertions::assert_eq;

/// Helper: classify and pair each token with its text.
fn spans(source: &str) -> Vec<(Region, &str)> {
    let mut pos = 0usize;
    regions(source)
        .into_iter()
        .map(|t| {
            let end = pos + t.len as usize;
            let text = &source[pos..end];
            pos = end;
            (t.region, text)
        })
        .collect()
}

/// Helper: scan starting in `region` and return the tokens plus the region
/// left open at EOF.
fn scan_from(source: &str, region: Region) -> (Vec<RegionToken>, Region) {
    let buf = SourceBuffer::new(source);
    let mut scanner = RegionScanner::with_state(buf.cursor(), region);
    let tokens: Vec<_> = scanner.by_ref().collect();
    (tokens, scanner.region())
}

// ─── Invariants ────────────────────────────────────────────────

#[test]
fn total_len_equals_source_len() {
    let sources = [
        "",
        "x",
        "int a = b / c;",
        "// comment\ncode",
        "/* block */ code /* open",
        "\"str\" 'c' \"\"\"\ntext\n\"\"\" tail",
        "\"unterminated",
        "'\\",
        "caf\u{e9} \"\u{1F600}\" '\u{3bb}'",
        "a\0b\"\0\"",
    ];
    for source in sources {
        let total: u32 = regions(source).iter().map(|t| t.len).sum();
        assert_eq!(total as usize, source.len(), "length mismatch for {source:?}");
    }
}

#[test]
fn every_token_has_positive_length() {
    for source in ["a/b", "//\n//\n", "\"\"''", "/**/", "\"\"\"\"\"\""] {
        for tok in regions(source) {
            assert!(tok.len > 0, "zero-length token {tok:?} in {source:?}");
        }
    }
}

#[test]
fn empty_source_has_no_tokens() {
    assert!(regions("").is_empty());
}

// ─── Code ──────────────────────────────────────────────────────

#[test]
fn plain_code_is_one_token() {
    assert_eq!(
        spans("System.out.println(x);"),
        vec![(Region::Code, "System.out.println(x);")]
    );
}

#[test]
fn division_stays_in_code() {
    assert_eq!(spans("a / b /c"), vec![(Region::Code, "a / b /c")]);
}

#[test]
fn leading_lone_slash_is_code() {
    assert_eq!(spans("/x"), vec![(Region::Code, "/x")]);
}

// ─── Comments ──────────────────────────────────────────────────

#[test]
fn line_comment_includes_newline() {
    assert_eq!(
        spans("a; // note\nb;"),
        vec![
            (Region::Code, "a; "),
            (Region::LineComment, "// note\n"),
            (Region::Code, "b;"),
        ]
    );
}

#[test]
fn line_comment_at_eof_stays_open() {
    let (tokens, open) = scan_from("x // trailing", Region::Code);
    assert_eq!(tokens.last().map(|t| t.region), Some(Region::LineComment));
    assert_eq!(open, Region::LineComment);
}

#[test]
fn block_comment() {
    assert_eq!(
        spans("a /* \"no\" 'str' */ b"),
        vec![
            (Region::Code, "a "),
            (Region::BlockComment, "/* \"no\" 'str' */"),
            (Region::Code, " b"),
        ]
    );
}

#[test]
fn block_comment_opener_slash_does_not_close() {
    // `/*/` opens a comment; the `/` after `*` is not a closer.
    assert_eq!(
        spans("/*/ x */y"),
        vec![(Region::BlockComment, "/*/ x */"), (Region::Code, "y")]
    );
}

#[test]
fn comment_markers_inside_string_are_string() {
    assert_eq!(
        spans("\"// not a comment\";"),
        vec![
            (Region::StringLiteral, "\"// not a comment\""),
            (Region::Code, ";"),
        ]
    );
}

// ─── Literals ──────────────────────────────────────────────────

#[test]
fn string_literal_with_escaped_quote() {
    assert_eq!(
        spans(r#"s = "a\"b"; t"#),
        vec![
            (Region::Code, "s = "),
            (Region::StringLiteral, r#""a\"b""#),
            (Region::Code, "; t"),
        ]
    );
}

#[test]
fn string_literal_with_escaped_backslash() {
    assert_eq!(
        spans(r#""\\" x"#),
        vec![(Region::StringLiteral, r#""\\""#), (Region::Code, " x")]
    );
}

#[test]
fn escape_consumes_a_whole_multibyte_char() {
    assert_eq!(
        spans("\"\\\u{e9}\"x"),
        vec![(Region::StringLiteral, "\"\\\u{e9}\""), (Region::Code, "x")]
    );
}

#[test]
fn char_literals() {
    assert_eq!(
        spans(r#"c = '\''; d = '\"'; e = 'x';"#),
        vec![
            (Region::Code, "c = "),
            (Region::CharLiteral, r"'\''"),
            (Region::Code, "; d = "),
            (Region::CharLiteral, r#"'\"'"#),
            (Region::Code, "; e = "),
            (Region::CharLiteral, "'x'"),
            (Region::Code, ";"),
        ]
    );
}

#[test]
fn double_quote_inside_char_literal() {
    assert_eq!(
        spans(r#"'"' + "s""#),
        vec![
            (Region::CharLiteral, r#"'"'"#),
            (Region::Code, " + "),
            (Region::StringLiteral, r#""s""#),
        ]
    );
}

#[test]
fn empty_string_is_not_a_text_block() {
    assert_eq!(
        spans(r#"s = ""; t"#),
        vec![
            (Region::Code, "s = "),
            (Region::StringLiteral, r#""""#),
            (Region::Code, "; t"),
        ]
    );
}

#[test]
fn string_spans_newline() {
    let (tokens, open) = scan_from("\"line one\nline two\" x", Region::Code);
    assert_eq!(tokens[0].region, Region::StringLiteral);
    assert_eq!(tokens[0].len, 19);
    assert_eq!(open, Region::Code);
}

// ─── Text Blocks ───────────────────────────────────────────────

#[test]
fn text_block() {
    let source = "String t = \"\"\"\n  System.out.println(\"hi\");\n  \"\"\";";
    assert_eq!(
        spans(source),
        vec![
            (Region::Code, "String t = "),
            (
                Region::TextBlock,
                "\"\"\"\n  System.out.println(\"hi\");\n  \"\"\""
            ),
            (Region::Code, ";"),
        ]
    );
}

#[test]
fn text_block_closes_at_first_triple_quote() {
    // Escaped delimiters are not recognized inside text blocks.
    assert_eq!(
        spans("\"\"\"a\\\"\"\"b\"\"\""),
        vec![
            (Region::TextBlock, "\"\"\"a\\\"\"\""),
            (Region::Code, "b"),
            (Region::TextBlock, "\"\"\""),
        ]
    );
}

// ─── Fail-Open ─────────────────────────────────────────────────

#[test]
fn unterminated_regions_run_to_eof() {
    let cases = [
        ("x = \"abc", Region::StringLiteral),
        ("x = 'a", Region::CharLiteral),
        ("x /* abc", Region::BlockComment),
        ("x = \"\"\"\nabc\"\"", Region::TextBlock),
        ("x = \"abc\\", Region::StringLiteral),
    ];
    for (source, expected) in cases {
        let (tokens, open) = scan_from(source, Region::Code);
        let total: u32 = tokens.iter().map(|t| t.len).sum();
        assert_eq!(total as usize, source.len(), "{source:?}");
        assert_eq!(open, expected, "{source:?}");
    }
}

// ─── Resuming ──────────────────────────────────────────────────

#[test]
fn resume_inside_block_comment() {
    let (tokens, open) = scan_from(" still comment */ code", Region::BlockComment);
    assert_eq!(
        tokens,
        vec![
            RegionToken {
                region: Region::BlockComment,
                len: 17
            },
            RegionToken {
                region: Region::Code,
                len: 5
            },
        ]
    );
    assert_eq!(open, Region::Code);
}

#[test]
fn resume_inside_line_comment_ends_at_newline() {
    let (tokens, open) = scan_from("\nx", Region::LineComment);
    assert_eq!(tokens[0].region, Region::LineComment);
    assert_eq!(tokens[0].len, 1);
    assert_eq!(open, Region::Code);
}

#[test]
fn resume_inside_text_block_stays_open() {
    let (tokens, open) = scan_from("  System.out.println(1);\n", Region::TextBlock);
    assert_eq!(tokens.len(), 1);
    assert_eq!(open, Region::TextBlock);
}

// ─── Region ────────────────────────────────────────────────────

#[test]
fn region_names() {
    assert_eq!(Region::Code.to_string(), "code");
    assert_eq!(Region::TextBlock.to_string(), "text-block");
    assert!(Region::default().is_code());
    assert!(!Region::CharLiteral.is_code());
}
