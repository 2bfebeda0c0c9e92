//! Cadence Core
//!
//! Platform-agnostic catalog types and genre filtering for Cadence.
//!
//! This crate has no I/O and no rendering dependencies. It defines:
//! - **Domain Types**: `Track`, `TrackId`, `Catalog`, `FilteredView`
//! - **Playlist Filter**: genre selection over a loaded catalog
//! - **Error Handling**: `CoreError` and `Result`
//!
//! # Example
//!
//! ```rust
//! use cadence_core::{filter, Catalog, GenreSelector};
//!
//! let catalog = Catalog::from_json(
//!     r#"[
//!         {"title": "Drift", "artist": "Lumen", "url": "drift.mp3", "albumArtUrl": "drift.jpg", "genre": "ambient"},
//!         {"title": "Pulse", "artist": "Volt", "url": "pulse.mp3", "albumArtUrl": "pulse.jpg", "genre": "techno"}
//!     ]"#,
//! )
//! .unwrap();
//!
//! let view = filter(&catalog, &GenreSelector::parse("ambient"));
//! assert_eq!(view.len(), 1);
//! assert_eq!(view.track_at(&catalog, 0).unwrap().title, "Drift");
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod filter;
pub mod types;

pub use error::{CoreError, Result};
pub use filter::{display_genre, filter, genre_options, genres, GenreOption, GenreSelector};
pub use types::{Catalog, FilteredView, Track, TrackId};
