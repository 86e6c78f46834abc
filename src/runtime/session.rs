use std::io::{self, BufRead, Write};

use crate::config::UiSettings;
use crate::playlist::{DeleteOutcome, PlaylistError, PlaylistStore, SongEdit, SortKey};

use super::menu::{self, Choice};

/// Print `text` as a prompt and read one line of input.
///
/// Returns `None` at end of input, otherwise the answer without its line
/// ending.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

/// The interactive menu loop.
///
/// Generic over the input/output streams so tests can drive a whole session
/// from in-memory buffers. Every store error is reported and the loop keeps
/// going; only stream failures end the session early.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    store: &mut PlaylistStore,
    ui: &UiSettings,
) -> io::Result<()> {
    loop {
        menu::write_menu(out)?;
        let Some(answer) = prompt(input, out, "Enter your choice: ")? else {
            break;
        };
        let Some(choice) = menu::parse_choice(&answer) else {
            writeln!(out, "Invalid choice. Try again.")?;
            continue;
        };

        match choice {
            Choice::Add => add_song(input, out, store)?,
            Choice::Remove => remove_song(input, out, store)?,
            Choice::Display => display(out, store)?,
            Choice::Edit => edit_song(input, out, store)?,
            Choice::Save => save(out, store)?,
            Choice::Delete => delete(input, out, store)?,
            Choice::Search => search(input, out, store)?,
            Choice::Sort => sort(input, out, store)?,
            Choice::Shuffle => {
                store.shuffle();
                writeln!(out, "Playlist shuffled.")?;
            }
            Choice::Quit => {
                warn_unsaved(out, store)?;
                break;
            }
            Choice::QuitFarewell => {
                warn_unsaved(out, store)?;
                writeln!(out, "{}", ui.farewell_text)?;
                break;
            }
        }
    }
    Ok(())
}

fn report<W: Write>(out: &mut W, e: &PlaylistError) -> io::Result<()> {
    writeln!(out, "{e}")
}

fn warn_unsaved<W: Write>(out: &mut W, store: &PlaylistStore) -> io::Result<()> {
    if store.is_dirty() {
        writeln!(out, "Note: unsaved changes were discarded.")?;
    }
    Ok(())
}

fn add_song<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    store: &mut PlaylistStore,
) -> io::Result<()> {
    let Some(title) = prompt(input, out, "Song title: ")? else {
        return Ok(());
    };
    let Some(artist) = prompt(input, out, "Artist: ")? else {
        return Ok(());
    };
    let Some(duration) = prompt(input, out, "Duration (mm:ss): ")? else {
        return Ok(());
    };

    match store.add(title.trim(), artist.trim(), duration.trim()) {
        Ok(song) => writeln!(out, "Added: {song}"),
        Err(e) => report(out, &e),
    }
}

fn remove_song<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    store: &mut PlaylistStore,
) -> io::Result<()> {
    let Some(title) = prompt(input, out, "Song title to remove: ")? else {
        return Ok(());
    };

    match store.remove(title.trim()) {
        Ok(song) => writeln!(out, "Removed: {song}"),
        Err(e) => report(out, &e),
    }
}

fn display<W: Write>(out: &mut W, store: &PlaylistStore) -> io::Result<()> {
    if store.is_empty() {
        return writeln!(out, "Playlist is empty.");
    }

    writeln!(out, "Playlist:")?;
    for (i, song) in store.songs().iter().enumerate() {
        writeln!(out, "{}. {song}", i + 1)?;
    }
    Ok(())
}

fn edit_song<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    store: &mut PlaylistStore,
) -> io::Result<()> {
    let Some(title) = prompt(input, out, "Title of the song to edit: ")? else {
        return Ok(());
    };
    let title = title.trim().to_string();

    // Look the song up first so we can show it before asking for new values.
    match store.find(&title) {
        Some(song) => writeln!(out, "Editing: {song}")?,
        None => return report(out, &PlaylistError::NotFound(title)),
    }

    let Some(new_title) = prompt(input, out, "New title (leave empty to keep current): ")? else {
        return Ok(());
    };
    let Some(new_artist) = prompt(input, out, "New artist (leave empty to keep current): ")? else {
        return Ok(());
    };
    let Some(new_duration) = prompt(input, out, "New duration (leave empty to keep current): ")?
    else {
        return Ok(());
    };

    let edit = SongEdit {
        title: non_empty(new_title),
        artist: non_empty(new_artist),
        duration: non_empty(new_duration),
    };

    match store.edit(&title, edit) {
        Ok(song) => writeln!(out, "Updated: {song}"),
        Err(e) => report(out, &e),
    }
}

fn non_empty(answer: String) -> Option<String> {
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn save<W: Write>(out: &mut W, store: &mut PlaylistStore) -> io::Result<()> {
    match store.save() {
        Ok(()) => writeln!(out, "Playlist saved to {}.", store.path().display()),
        Err(e) => report(out, &e),
    }
}

fn delete<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    store: &mut PlaylistStore,
) -> io::Result<()> {
    // Nothing to confirm when there is no file on disk.
    if !store.backing_file_exists() {
        return writeln!(out, "No playlist file to delete.");
    }

    let question = format!(
        "Are you absolutely sure you want to delete '{}'? (yes/no): ",
        store.path().display()
    );
    let Some(answer) = prompt(input, out, &question)? else {
        return Ok(());
    };
    let confirmed = answer.trim().eq_ignore_ascii_case("yes");

    match store.delete(confirmed) {
        Ok(DeleteOutcome::Deleted) => writeln!(out, "Playlist deleted."),
        Ok(DeleteOutcome::Cancelled) => writeln!(out, "Deletion cancelled."),
        Ok(DeleteOutcome::NothingToDelete) => writeln!(out, "No playlist file to delete."),
        Err(e) => report(out, &e),
    }
}

fn search<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    store: &PlaylistStore,
) -> io::Result<()> {
    let Some(keyword) = prompt(input, out, "Search for a title or artist: ")? else {
        return Ok(());
    };

    let matches: Vec<_> = store.search(keyword.trim()).collect();
    if matches.is_empty() {
        return writeln!(out, "No matching songs found.");
    }

    writeln!(out, "Search results:")?;
    for song in matches {
        writeln!(out, "  {song}")?;
    }
    Ok(())
}

fn sort<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    store: &mut PlaylistStore,
) -> io::Result<()> {
    let Some(answer) = prompt(input, out, "Sort by title, artist or duration: ")? else {
        return Ok(());
    };

    match answer.parse::<SortKey>() {
        Ok(key) => {
            store.sort(key);
            writeln!(out, "Playlist sorted.")
        }
        Err(e) => report(out, &e),
    }
}
