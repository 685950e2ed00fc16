//! SeedSound Catalog
//!
//! Ties the backends together: a request goes through seed derivation, text,
//! likes, cover and music composition to become a [`Song`](seedsound_spec::Song);
//! songs can then be rendered and encoded in parallel batches.
//!
//! # Example
//!
//! ```
//! use seedsound_catalog::generate_song;
//! use seedsound_spec::SongRequest;
//!
//! let song = generate_song(&SongRequest::new("en_US", 12345, 5.0, 1)).unwrap();
//! assert_eq!(song.index, 1);
//! assert_eq!(song.likes, 5);
//! ```

pub mod error;
pub mod export;
pub mod generate;
pub mod naming;

pub use error::{CatalogError, CatalogResult};
pub use export::{export_batch, CancelToken, ExportOptions, ExportOutcome, ExportSummary};
pub use generate::{generate_page, generate_song};
pub use naming::{artifact_file_name, disambiguate, sanitize_file_stem};
