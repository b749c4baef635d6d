//! Parsers for reading and writing sequence dictionaries.
//!
//! - **SAM/BAM/CRAM files**: Extract `@SQ` lines from alignment file headers
//! - **Picard .dict files**: Parse sequence dictionary files
//! - **Streaming SAM text**: Bind a header straight into a
//!   [`ReferenceContext`](crate::ReferenceContext) and write its dictionary back out
//!
//! ## Example
//!
//! ```rust
//! use ref_context::ReferenceContext;
//! use ref_context::parsing::sam::read_header_into;
//!
//! let mut context = ReferenceContext::new();
//! let text = "@SQ\tSN:chr1\tLN:248956422\n@SQ\tSN:chr2\tLN:242193529\n";
//! read_header_into(&mut text.as_bytes(), &mut context).unwrap();
//!
//! assert_eq!(context.translate_local_to_global(1), Some(1));
//! ```
//!
//! ## Supported Tags
//!
//! From SAM `@SQ` lines, the following tags are extracted:
//!
//! | Tag | Description | Required |
//! |-----|-------------|----------|
//! | SN  | Sequence name | Yes |
//! | LN  | Sequence length | Yes |
//!
//! Other tags are ignored. An `@SQ` line missing either required tag is an
//! error, since its position is the local reference id.

pub mod dict;
pub mod sam;

use std::path::Path;

use crate::core::header::SourceHeader;
use sam::ParseError;

/// Read the sequence dictionary of `path`, choosing the parser by extension
///
/// # Errors
///
/// Returns the `ParseError` of the selected parser.
pub fn parse_input(path: &Path) -> Result<SourceHeader, ParseError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    match ext.as_deref() {
        Some("dict") => dict::parse_dict_file(path),
        _ => sam::parse_file(path),
    }
}
