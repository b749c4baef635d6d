//! # ref-context
//!
//! A shared I/O context that resolves the numeric reference ids found in
//! SAM/BAM records into reference names, and back.
//!
//! BAM records do not carry reference names: they carry an index into the
//! sequence dictionary of the file they came from. When records from several
//! files are combined, or when one file is read against a dictionary that is
//! already loaded elsewhere, those per-file (local) ids must be remapped to a
//! single global id space.
//!
//! `ref-context` provides:
//!
//! - **Name and id resolution**: bounds-checked id to name lookups and
//!   accelerated name to id lookups
//! - **Header merging**: binding each source header builds its local to
//!   global id table, growing the dictionary as new names appear
//! - **Owned or borrowed tables**: a context can own its dictionary or be a
//!   view over one owned by a [`ReferenceStore`], with the view's lifetime
//!   tied to the owner
//!
//! ## Example
//!
//! ```rust
//! use ref_context::{ReferenceContext, SourceHeader, Contig};
//!
//! let mut context = ReferenceContext::new();
//!
//! let a = SourceHeader::new(vec![Contig::new("chr1", 248_956_422), Contig::new("chr2", 242_193_529)]);
//! let b = SourceHeader::new(vec![Contig::new("chrM", 16_569), Contig::new("chr1", 248_956_422)]);
//!
//! context.bind_header(&a).unwrap();
//! context.bind_header(&b).unwrap();
//!
//! // Local id 1 of the second file is chr1, global id 0
//! assert_eq!(context.translate_local_to_global(1), Some(0));
//! assert_eq!(context.resolve_name_by_id(2).as_deref(), Some("chrM"));
//! ```
//!
//! ## Modules
//!
//! - [`context`]: The reference context and its storage, lookup, and translation parts
//! - [`catalog`]: Reference stores that own dictionaries shared by many contexts
//! - [`core`]: Core data types for contigs, headers, and storage modes
//! - [`parsing`]: Parsers for SAM/BAM/CRAM headers and dict files
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod context;
pub mod core;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use catalog::store::ReferenceStore;
pub use context::{ContextError, NameIndex, NameLookup, ReferenceContext};
pub use core::contig::Contig;
pub use core::header::SourceHeader;
pub use core::types::*;
