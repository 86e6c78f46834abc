//! Line codec for the backing file: one `title,artist,duration` record per
//! line, UTF-8, no header. Fields must not contain the delimiter or a
//! newline; `validate_field` enforces that on the way in so the format
//! round-trips.

use super::error::PlaylistError;
use super::song::Song;

pub const FIELD_DELIMITER: char = ',';

/// Reject a field value that would corrupt the line format.
pub fn validate_field(name: &str, value: &str) -> Result<(), PlaylistError> {
    if value.contains(FIELD_DELIMITER) {
        return Err(PlaylistError::InvalidInput(format!(
            "{name} must not contain '{FIELD_DELIMITER}'"
        )));
    }
    if value.contains('\n') || value.contains('\r') {
        return Err(PlaylistError::InvalidInput(format!(
            "{name} must not span multiple lines"
        )));
    }
    Ok(())
}

/// Encode one song as a single file line (without the trailing newline).
pub fn encode_line(song: &Song) -> String {
    format!(
        "{}{sep}{}{sep}{}",
        song.title,
        song.artist,
        song.duration,
        sep = FIELD_DELIMITER
    )
}

/// Parse one file line into a `Song`.
///
/// A line must contain exactly two delimiters; anything else is
/// `InvalidInput` so the loader can skip it instead of crashing.
pub fn parse_line(line: &str) -> Result<Song, PlaylistError> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    match fields.as_slice() {
        [title, artist, duration] => Ok(Song::new(*title, *artist, *duration)),
        _ => Err(PlaylistError::InvalidInput(format!(
            "expected 3 fields, found {}: {line:?}",
            fields.len()
        ))),
    }
}

/// Parse a `mm:ss` duration string into total seconds.
///
/// Returns `None` for anything that is not two numeric parts joined by a
/// colon, or whose total does not fit in `u32`; sorting falls back to
/// lexical order for those.
pub fn duration_seconds(duration: &str) -> Option<u32> {
    let (minutes, seconds) = duration.trim().split_once(':')?;
    let minutes: u32 = minutes.parse().ok()?;
    let seconds: u32 = seconds.parse().ok()?;
    if seconds >= 60 {
        return None;
    }
    minutes.checked_mul(60)?.checked_add(seconds)
}
