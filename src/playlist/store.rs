use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, warn};

use super::error::PlaylistError;
use super::format;
use super::song::Song;

/// Fixed extension appended to the playlist name to form the backing path.
pub const PLAYLIST_EXTENSION: &str = "txt";

/// Field to sort the playlist by.
///
/// Parsed at the menu boundary; an unrecognized key string is rejected there,
/// so `PlaylistStore::sort` itself cannot fail.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Artist,
    Duration,
}

impl FromStr for SortKey {
    type Err = PlaylistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "title" => Ok(Self::Title),
            "2" | "artist" => Ok(Self::Artist),
            "3" | "duration" => Ok(Self::Duration),
            other => Err(PlaylistError::InvalidInput(format!(
                "unknown sort key {other:?} (expected title, artist or duration)"
            ))),
        }
    }
}

/// What `PlaylistStore::delete` ended up doing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Backing file removed, in-memory sequence cleared.
    Deleted,
    /// Caller did not confirm; nothing was touched.
    Cancelled,
    /// Confirmed, but there is no backing file to remove.
    NothingToDelete,
}

/// Replacement fields for `PlaylistStore::edit`.
///
/// `None` (or an empty prompt answer mapped to `None` by the menu) means
/// "keep the current value".
#[derive(Debug, Clone, Default)]
pub struct SongEdit {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub duration: Option<String>,
}

impl SongEdit {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.artist.is_none() && self.duration.is_none()
    }
}

/// An ordered sequence of songs bound to one backing flat-file.
///
/// Mutations are memory-only until `save`; the `dirty` flag tracks whether
/// the in-memory sequence has diverged from the last loaded/saved contents.
pub struct PlaylistStore {
    path: PathBuf,
    songs: Vec<Song>,
    dirty: bool,
}

impl PlaylistStore {
    /// Open the playlist named `name` inside `directory`.
    ///
    /// The backing path is `<directory>/<name>.txt`. If the file exists its
    /// records are loaded in file order; a missing file yields an empty
    /// store, which is not an error. Malformed lines are skipped with a
    /// warning so one bad record cannot take the whole playlist down.
    pub fn open(name: &str, directory: &Path) -> Result<Self, PlaylistError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PlaylistError::InvalidInput(
                "playlist name must not be empty".to_string(),
            ));
        }

        let path = directory.join(format!("{name}.{PLAYLIST_EXTENSION}"));
        let songs = load_songs(&path)?;

        Ok(Self {
            path,
            songs,
            dirty: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// True when the in-memory sequence has unsaved changes.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// True when the backing file currently exists on disk.
    pub fn backing_file_exists(&self) -> bool {
        self.path.exists()
    }

    /// Append a song to the end of the sequence.
    ///
    /// Fields are rejected when they contain the delimiter or a newline;
    /// there is no duplicate check.
    pub fn add(
        &mut self,
        title: &str,
        artist: &str,
        duration: &str,
    ) -> Result<&Song, PlaylistError> {
        format::validate_field("title", title)?;
        format::validate_field("artist", artist)?;
        format::validate_field("duration", duration)?;

        self.songs.push(Song::new(title, artist, duration));
        self.dirty = true;
        let idx = self.songs.len() - 1;
        Ok(&self.songs[idx])
    }

    /// Remove the first song whose title matches `title` case-insensitively.
    pub fn remove(&mut self, title: &str) -> Result<Song, PlaylistError> {
        let target = title.to_lowercase();
        match self
            .songs
            .iter()
            .position(|s| s.title.to_lowercase() == target)
        {
            Some(idx) => {
                self.dirty = true;
                Ok(self.songs.remove(idx))
            }
            None => Err(PlaylistError::NotFound(title.to_string())),
        }
    }

    /// Apply `edit` to the first song whose title matches case-insensitively.
    ///
    /// Only supplied fields change; an all-empty edit is a no-op that leaves
    /// the store clean.
    pub fn edit(&mut self, title: &str, edit: SongEdit) -> Result<&Song, PlaylistError> {
        // Locate the target first so a missing song reports NotFound even
        // when the replacement fields are also bad.
        let target = title.to_lowercase();
        let idx = self
            .songs
            .iter()
            .position(|s| s.title.to_lowercase() == target)
            .ok_or_else(|| PlaylistError::NotFound(title.to_string()))?;

        if let Some(v) = &edit.title {
            format::validate_field("title", v)?;
        }
        if let Some(v) = &edit.artist {
            format::validate_field("artist", v)?;
        }
        if let Some(v) = &edit.duration {
            format::validate_field("duration", v)?;
        }

        if edit.is_empty() {
            return Ok(&self.songs[idx]);
        }

        let song = &mut self.songs[idx];
        if let Some(v) = edit.title {
            song.title = v;
        }
        if let Some(v) = edit.artist {
            song.artist = v;
        }
        if let Some(v) = edit.duration {
            song.duration = v;
        }
        self.dirty = true;
        Ok(&self.songs[idx])
    }

    /// First song whose title matches `title` case-insensitively.
    pub fn find(&self, title: &str) -> Option<&Song> {
        let target = title.to_lowercase();
        self.songs.iter().find(|s| s.title.to_lowercase() == target)
    }

    /// Songs whose title or artist contains `keyword`, case-insensitively,
    /// in store order. Does not mutate the store.
    pub fn search<'a>(&'a self, keyword: &str) -> impl Iterator<Item = &'a Song> + 'a {
        let needle = keyword.to_lowercase();
        self.songs.iter().filter(move |s| {
            s.title.to_lowercase().contains(&needle) || s.artist.to_lowercase().contains(&needle)
        })
    }

    /// Sort the sequence in place. Stable for ties.
    ///
    /// Title and artist compare case-insensitively. Duration compares by
    /// total seconds parsed from `mm:ss`, so "9:59" orders before "10:00";
    /// values that do not parse fall back to lexical order and group first.
    pub fn sort(&mut self, key: SortKey) {
        match key {
            SortKey::Title => self
                .songs
                .sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase())),
            SortKey::Artist => self
                .songs
                .sort_by(|a, b| a.artist.to_lowercase().cmp(&b.artist.to_lowercase())),
            SortKey::Duration => self.songs.sort_by(|a, b| {
                let ka = (format::duration_seconds(&a.duration), a.duration.as_str());
                let kb = (format::duration_seconds(&b.duration), b.duration.as_str());
                ka.cmp(&kb)
            }),
        }
        self.dirty = true;
    }

    /// Shuffle the sequence with the process RNG.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    /// Shuffle the sequence with a caller-supplied RNG, so tests can seed a
    /// deterministic one.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.songs.shuffle(rng);
        self.dirty = true;
    }

    /// Overwrite the backing file with the current in-memory sequence.
    pub fn save(&mut self) -> Result<(), PlaylistError> {
        let file = File::create(&self.path).map_err(|source| PlaylistError::FileUnavailable {
            path: self.path.clone(),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        let mut write_all = || -> std::io::Result<()> {
            for song in &self.songs {
                writeln!(writer, "{}", format::encode_line(song))?;
            }
            writer.flush()
        };
        write_all().map_err(|source| PlaylistError::FileUnavailable {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), songs = self.songs.len(), "saved playlist");
        self.dirty = false;
        Ok(())
    }

    /// Delete the backing file and clear the sequence, if `confirmed`.
    ///
    /// The menu is responsible for obtaining the confirmation; the store only
    /// acts on the flag. Unconfirmed calls touch nothing, and a missing
    /// backing file is reported rather than treated as an error.
    pub fn delete(&mut self, confirmed: bool) -> Result<DeleteOutcome, PlaylistError> {
        if !confirmed {
            return Ok(DeleteOutcome::Cancelled);
        }
        if !self.path.exists() {
            return Ok(DeleteOutcome::NothingToDelete);
        }

        std::fs::remove_file(&self.path).map_err(|source| PlaylistError::FileUnavailable {
            path: self.path.clone(),
            source,
        })?;
        self.songs.clear();
        self.dirty = false;

        debug!(path = %self.path.display(), "deleted playlist");
        Ok(DeleteOutcome::Deleted)
    }
}

/// Read all records from `path`, skipping malformed lines with a warning.
/// A missing file is an empty playlist.
fn load_songs(path: &Path) -> Result<Vec<Song>, PlaylistError> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(PlaylistError::FileUnavailable {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let mut songs = Vec::new();
    for (lineno, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|source| PlaylistError::FileUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        match format::parse_line(&line) {
            Ok(song) => songs.push(song),
            Err(e) => {
                warn!(
                    path = %path.display(),
                    line = lineno + 1,
                    "skipping malformed record: {e}"
                );
            }
        }
    }

    debug!(path = %path.display(), songs = songs.len(), "loaded playlist");
    Ok(songs)
}
