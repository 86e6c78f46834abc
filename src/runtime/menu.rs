use std::io::{self, Write};

/// One entry of the interactive menu.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Choice {
    Add,
    Remove,
    Display,
    Edit,
    Save,
    Delete,
    Search,
    Sort,
    Shuffle,
    /// `10`: leave the program without any extra message.
    Quit,
    /// `0`: leave the program with the farewell message.
    QuitFarewell,
}

/// Map a menu answer to a `Choice`; `None` means "not a valid choice".
pub fn parse_choice(answer: &str) -> Option<Choice> {
    match answer.trim() {
        "1" => Some(Choice::Add),
        "2" => Some(Choice::Remove),
        "3" => Some(Choice::Display),
        "4" => Some(Choice::Edit),
        "5" => Some(Choice::Save),
        "6" => Some(Choice::Delete),
        "7" => Some(Choice::Search),
        "8" => Some(Choice::Sort),
        "9" => Some(Choice::Shuffle),
        "10" => Some(Choice::Quit),
        "0" => Some(Choice::QuitFarewell),
        _ => None,
    }
}

/// Print the options block shown before every choice prompt.
pub fn write_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Options:")?;
    writeln!(out, "  1. Add song")?;
    writeln!(out, "  2. Remove song")?;
    writeln!(out, "  3. Display playlist")?;
    writeln!(out, "  4. Edit song")?;
    writeln!(out, "  5. Save playlist")?;
    writeln!(out, "  6. Delete playlist")?;
    writeln!(out, "  7. Search songs")?;
    writeln!(out, "  8. Sort playlist")?;
    writeln!(out, "  9. Shuffle playlist")?;
    writeln!(out, " 10. Exit")
}
