//! Region-classifying scanner and `println` rewriter for Java source text.
//!
//! Standalone crate: no `iolift_*` dependencies. It knows nothing about
//! files, notebooks, or the command line.
//!
//! # Architecture
//!
//! ```text
//! &str ──► SourceBuffer (sentinel-terminated)
//!              │
//!              ▼
//!          Cursor ──► RegionScanner ──► (Region, len) tokens
//!                                            │
//!                                            ▼
//!                          Rewriter: code tokens get the rule applied,
//!                                    everything else is copied verbatim
//!                                            │
//!                                            ▼
//!                                  Rewrite { changed, output }
//! ```
//!
//! [`rewrite`] is the single entry point most callers need. It is pure,
//! total, and idempotent.

mod cursor;
mod region;
mod rewrite;
mod source_buffer;

pub use cursor::Cursor;
pub use region::{regions, Region, RegionScanner, RegionToken};
pub use rewrite::{rewrite, Rewrite, RewriteRule, Rewriter};
pub use source_buffer::{SourceBuffer, MAX_SOURCE_LEN};
