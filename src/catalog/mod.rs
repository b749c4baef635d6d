//! Shared reference dictionaries.
//!
//! A [`ReferenceStore`](store::ReferenceStore) owns a canonical reference
//! dictionary (names, name accelerator, lengths) and hands out borrowed
//! [`ReferenceContext`](crate::ReferenceContext) views over it. Several
//! readers can each hold their own view of one store.
//!
//! ## Example
//!
//! ```rust
//! use ref_context::ReferenceStore;
//!
//! let store = ReferenceStore::new();
//! store.append("chr1", 248_956_422).unwrap();
//!
//! let context = store.context();
//! store.append("chr2", 242_193_529).unwrap();
//!
//! // The view sees the append without copying anything
//! assert_eq!(context.resolve_name_by_id(1).as_deref(), Some("chr2"));
//! ```
//!
//! ## Catalog files
//!
//! Stores persist as JSON:
//!
//! ```json
//! {
//!   "version": "1.0.0",
//!   "created_at": "2024-01-01T00:00:00+00:00",
//!   "references": [{"name": "chr1", "length": 248956422}]
//! }
//! ```

pub mod store;
