//! Core data types for reference id resolution.
//!
//! - [`Contig`](contig::Contig): a single sequence with name, length, and optional MD5
//! - [`SourceHeader`](header::SourceHeader): the sequence dictionary of one source file
//! - [`StorageMode`](types::StorageMode), [`ContextMode`](types::ContextMode),
//!   [`Table`](types::Table): how a context holds its tables
//!
//! ## Reference ids
//!
//! | Id | Meaning |
//! |----|---------|
//! | local | position of a contig in one file's header |
//! | global | position of a contig in the merged context dictionary |
//! | `-1` | "no reference", used by unmapped reads |

pub mod contig;
pub mod header;
pub mod types;
