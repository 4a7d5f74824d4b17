//! Region classifier for Java-family source text.
//!
//! [`RegionScanner`] walks a sentinel-terminated [`Cursor`] once, forward
//! only, and reports maximal runs of a single [`Region`] as
//! [`RegionToken`]s. A token for a delimited region covers its opening
//! delimiter, its body, and its closing delimiter when one is present.
//!
//! # Transitions
//!
//! ```text
//! Code          --"//"-->  LineComment   --"\n"-->  Code
//! Code          --"/*"-->  BlockComment  --"*/"-->  Code
//! Code          --"\"\"\""--> TextBlock   --"\"\"\""--> Code
//! Code          --"\""--->  StringLiteral --"\""--->  Code   (\x consumed as a pair)
//! Code          --"'"---->  CharLiteral   --"'"---->  Code   (\x consumed as a pair)
//! ```
//!
//! Lookahead never exceeds two bytes past the current one and no nesting
//! stack is kept. Reaching the end of input inside any region is not an
//! error: the token simply ends there and the region stays open.

use std::fmt;

use crate::cursor::Cursor;

/// Lexical region of a source position.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Region {
    /// Executable code: the only region the rewriter touches.
    #[default]
    Code,
    /// `// ...` up to and including the newline.
    LineComment,
    /// `/* ... */`
    BlockComment,
    /// `"..."`
    StringLiteral,
    /// `"""` ... `"""`
    TextBlock,
    /// `'...'`
    CharLiteral,
}

impl Region {
    /// Short lowercase name, as printed by `iolift regions`.
    pub fn name(self) -> &'static str {
        match self {
            Region::Code => "code",
            Region::LineComment => "line-comment",
            Region::BlockComment => "block-comment",
            Region::StringLiteral => "string",
            Region::TextBlock => "text-block",
            Region::CharLiteral => "char",
        }
    }

    /// Returns `true` for [`Region::Code`].
    #[inline]
    pub fn is_code(self) -> bool {
        self == Region::Code
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A maximal run of source bytes in one region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionToken {
    pub region: Region,
    /// Length in bytes. Always non-zero.
    pub len: u32,
}

/// Forward-only region classifier.
///
/// Implements [`Iterator`]; iteration ends at EOF. The sum of all token
/// lengths equals the source length.
pub struct RegionScanner<'a> {
    cursor: Cursor<'a>,
    /// Region active at the cursor position.
    region: Region,
}

impl<'a> RegionScanner<'a> {
    /// Create a scanner that starts in code.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self::with_state(cursor, Region::Code)
    }

    /// Create a scanner that starts inside `region`.
    ///
    /// Used to continue a classification across consecutive chunks of one
    /// logical text (for example the line array of a notebook cell).
    pub fn with_state(cursor: Cursor<'a>, region: Region) -> Self {
        Self { cursor, region }
    }

    /// Region active at the current position.
    ///
    /// After the scanner is exhausted this is the region left open at end
    /// of input ([`Region::Code`] for well-formed text).
    pub fn region(&self) -> Region {
        self.region
    }

    /// Produce the next region token, or `None` at EOF.
    pub fn next_token(&mut self) -> Option<RegionToken> {
        if self.cursor.is_eof() {
            return None;
        }
        let start = self.cursor.pos();
        let region = match self.region {
            Region::Code => self.open_or_code(),
            open => {
                self.body(open);
                open
            }
        };
        let len = self.cursor.pos() - start;
        debug_assert!(len > 0, "region scanner made no progress at {start}");
        Some(RegionToken { region, len })
    }

    /// At a code position: either open a delimited region and scan its body,
    /// or consume a run of code up to the next opener.
    fn open_or_code(&mut self) -> Region {
        let opened = match self.cursor.current() {
            b'/' if self.cursor.peek() == b'/' => Some((Region::LineComment, 2)),
            b'/' if self.cursor.peek() == b'*' => Some((Region::BlockComment, 2)),
            b'"' if self.cursor.peek() == b'"' && self.cursor.peek2() == b'"' => {
                Some((Region::TextBlock, 3))
            }
            b'"' => Some((Region::StringLiteral, 1)),
            b'\'' => Some((Region::CharLiteral, 1)),
            _ => None,
        };

        if let Some((region, opener_len)) = opened {
            self.cursor.advance_n(opener_len);
            self.region = region;
            self.body(region);
            region
        } else {
            self.code_run();
            Region::Code
        }
    }

    // ─── Code ────────────────────────────────────────────────────

    /// Consume code up to (not including) the next region opener or EOF.
    fn code_run(&mut self) {
        // The current byte is not an opener; step over it so a lone `/`
        // does not stop the run before it starts.
        self.cursor.advance_char();
        loop {
            match self.cursor.skip_to_code_delim() {
                b'/' => {
                    if matches!(self.cursor.peek(), b'/' | b'*') {
                        return;
                    }
                    self.cursor.advance(); // division or other lone slash
                }
                // Quotes always open a literal; EOF ends the run.
                _ => return,
            }
        }
    }

    // ─── Delimited Bodies ────────────────────────────────────────

    /// Scan the body of an open region, consuming its closer when found.
    ///
    /// Sets `self.region` back to [`Region::Code`] when the closer is
    /// consumed; leaves it unchanged when EOF is reached first.
    fn body(&mut self, region: Region) {
        let closed = match region {
            Region::Code => true,
            Region::LineComment => self.line_comment_body(),
            Region::BlockComment => self.cursor.eat_through(b"*/"),
            Region::TextBlock => self.cursor.eat_through(b"\"\"\""),
            Region::StringLiteral => self.literal_body(b'"'),
            Region::CharLiteral => self.literal_body(b'\''),
        };
        if closed {
            self.region = Region::Code;
        }
    }

    fn line_comment_body(&mut self) -> bool {
        self.cursor.eat_until_newline_or_eof();
        if self.cursor.is_eof() {
            return false;
        }
        self.cursor.advance(); // the newline belongs to the comment
        true
    }

    /// String and char literal bodies. The escape marker and the character
    /// after it are consumed as one unit, whatever that character is.
    fn literal_body(&mut self, quote: u8) -> bool {
        loop {
            match self.cursor.skip_to_literal_delim(quote) {
                b'\\' => {
                    self.cursor.advance(); // consume '\'
                    if !self.cursor.is_eof() {
                        self.cursor.advance_char(); // escaped char
                    }
                }
                0 => return false, // EOF: fail open
                _ => {
                    self.cursor.advance(); // closing quote
                    return true;
                }
            }
        }
    }
}

impl Iterator for RegionScanner<'_> {
    type Item = RegionToken;

    #[inline]
    fn next(&mut self) -> Option<RegionToken> {
        self.next_token()
    }
}

/// Classify a whole source text, starting in code.
pub fn regions(source: &str) -> Vec<RegionToken> {
    let buffer = crate::SourceBuffer::new(source);
    RegionScanner::new(buffer.cursor()).collect()
}

#[cfg(test)]
mod tests;
