//! Interactive runtime: settings loading, the menu definition and the
//! prompt/dispatch session loop over stdin/stdout.

use std::io::{self, Write};
use std::path::PathBuf;

use crate::playlist::PlaylistStore;

mod menu;
mod session;
mod settings;

#[cfg(test)]
mod tests;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{}", settings.ui.header_text)?;

    let name = loop {
        let answer = session::prompt(
            &mut input,
            &mut out,
            "What would you like to name your playlist? ",
        )?;
        match answer {
            None => return Ok(()),
            Some(name) if name.trim().is_empty() => {
                writeln!(out, "Playlist name must not be empty.")?;
            }
            Some(name) => break name,
        }
    };

    let directory = settings
        .storage
        .directory
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&directory)?;

    let mut store = PlaylistStore::open(&name, &directory)?;
    if store.backing_file_exists() {
        writeln!(
            out,
            "Loaded {} song(s) from {}.",
            store.len(),
            store.path().display()
        )?;
    } else {
        writeln!(out, "No existing playlist found. Starting a new one.")?;
    }

    session::run(&mut input, &mut out, &mut store, &settings.ui)?;
    Ok(())
}
