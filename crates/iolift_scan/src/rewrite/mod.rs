//! Targeted call rewriter driven by the region classifier.
//!
//! The rewriter pulls [`RegionToken`]s from a [`RegionScanner`] and copies
//! every non-code token verbatim. Inside code tokens it looks for the rule's
//! target followed by optional spaces/tabs and `(`, and replaces the whole
//! match with the replacement followed by `(`. Classification and
//! replacement happen in the same forward pass.
//!
//! A match can never straddle two code tokens: code runs only end at a
//! quote or a comment opener, and the target plus its separator contain
//! neither.

use memchr::memmem;

use crate::region::{Region, RegionScanner};
use crate::source_buffer::{SourceBuffer, MAX_SOURCE_LEN};

/// The call-name substitution applied in code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RewriteRule {
    target: &'static str,
    replacement: &'static str,
}

impl RewriteRule {
    /// `System.out.println(` becomes `IO.println(`.
    pub const PRINTLN: RewriteRule = RewriteRule {
        target: "System.out.println",
        replacement: "IO.println",
    };
}

/// Result of rewriting one text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rewrite {
    /// `true` iff `output` differs from the input.
    pub changed: bool,
    pub output: String,
}

impl Rewrite {
    fn unchanged(input: &str) -> Self {
        Rewrite {
            changed: false,
            output: input.to_owned(),
        }
    }
}

/// Applies a [`RewriteRule`] to one logical text, possibly fed in chunks.
///
/// The region left open at the end of one chunk is where the next chunk
/// starts, so a block comment or text block spanning several chunks is
/// classified as if the chunks were one text.
pub struct Rewriter {
    rule: RewriteRule,
    finder: memmem::Finder<'static>,
    region: Region,
}

impl Rewriter {
    pub fn new(rule: RewriteRule) -> Self {
        Self {
            rule,
            finder: memmem::Finder::new(rule.target.as_bytes()),
            region: Region::Code,
        }
    }

    /// Rewrite the next chunk of the text.
    ///
    /// Total: never fails and never panics on malformed input. Unterminated
    /// literals and comments are copied through to the end of the chunk.
    pub fn rewrite_chunk(&mut self, chunk: &str) -> Rewrite {
        if chunk.len() > MAX_SOURCE_LEN {
            return Rewrite::unchanged(chunk);
        }

        let buffer = SourceBuffer::new(chunk);
        let source = buffer.as_bytes();
        let mut scanner = RegionScanner::with_state(buffer.cursor(), self.region);
        let mut output = Vec::with_capacity(source.len());
        let mut changed = false;
        let mut pos = 0usize;

        for token in scanner.by_ref() {
            let end = pos + token.len as usize;
            let text = &source[pos..end];
            if token.region.is_code() {
                changed |= self.rewrite_code(text, &mut output);
            } else {
                output.extend_from_slice(text);
            }
            pos = end;
        }
        debug_assert_eq!(pos, source.len(), "region tokens must cover the chunk");
        self.region = scanner.region();

        if !changed {
            return Rewrite::unchanged(chunk);
        }
        // Only ASCII was spliced in between copied runs that end on ASCII
        // bytes, so the output is valid UTF-8 whenever the input is.
        match String::from_utf8(output) {
            Ok(output) => Rewrite { changed, output },
            Err(_) => Rewrite::unchanged(chunk),
        }
    }

    /// Copy one code run into `out`, substituting every match.
    ///
    /// A match is the target, then zero or more spaces or tabs, then `(`.
    /// The separator and `(` are consumed; `(` is re-emitted directly after
    /// the replacement. A target without a following `(` on the same line is
    /// copied unchanged and the search resumes one byte after its start.
    fn rewrite_code(&self, code: &[u8], out: &mut Vec<u8>) -> bool {
        let target_len = self.rule.target.len();
        let mut copied = 0;
        let mut search = 0;
        let mut changed = false;

        while let Some(offset) = self.finder.find(&code[search..]) {
            let start = search + offset;
            let mut after = start + target_len;
            while matches!(code.get(after), Some(b' ' | b'\t')) {
                after += 1;
            }
            if code.get(after) == Some(&b'(') {
                out.extend_from_slice(&code[copied..start]);
                out.extend_from_slice(self.rule.replacement.as_bytes());
                out.push(b'(');
                copied = after + 1;
                search = copied;
                changed = true;
            } else {
                search = start + 1;
            }
        }

        out.extend_from_slice(&code[copied..]);
        changed
    }
}

impl Default for Rewriter {
    fn default() -> Self {
        Self::new(RewriteRule::PRINTLN)
    }
}

/// Rewrite `System.out.println(` calls in live code to `IO.println(`.
///
/// Pure, total, and deterministic. Occurrences inside string literals,
/// character literals, text blocks, and comments are left untouched.
pub fn rewrite(input: &str) -> Rewrite {
    Rewriter::default().rewrite_chunk(input)
}
