//! Playlist core: the `Song` record, the `PlaylistStore` that owns an ordered
//! sequence of songs bound to one backing text file, and the flat-file codec.
//!
//! All durable state lives here. The interactive menu in `runtime` is a thin
//! shell that calls into this module and reports results.

mod error;
mod format;
mod song;
mod store;

pub use error::PlaylistError;
pub use song::Song;
pub use store::{DeleteOutcome, PlaylistStore, SongEdit, SortKey, PLAYLIST_EXTENSION};
