use anyhow::{Context, Result};
use clap::{Arg, Command};
use notespell::{Note, NoteContainer, NoteGrouping};

fn main() -> Result<()> {
    let matches = Command::new("notespell")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Spell, transpose and respell notes")
        .arg(
            Arg::new("notes")
                .help("Note names (e.g. C#4, Eb3) or pitch numbers (e.g. 61)")
                .required(true)
                .num_args(1..)
                .value_name("NOTES"),
        )
        .arg(
            Arg::new("transpose")
                .help("Transpose by semitones (e.g. +3, -12)")
                .long("transpose")
                .short('t')
                .allow_hyphen_values(true)
                .value_name("SEMITONES")
                .value_parser(clap::value_parser!(i32)),
        )
        .arg(
            Arg::new("augment")
                .help("Raise each note by one accidental")
                .long("augment")
                .action(clap::ArgAction::Count),
        )
        .arg(
            Arg::new("diminish")
                .help("Lower each note by one accidental")
                .long("diminish")
                .action(clap::ArgAction::Count),
        )
        .arg(
            Arg::new("flats")
                .help("Respell the result using flats")
                .long("flats")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("pitch")
                .help("Print pitch numbers instead of names")
                .long("pitch")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("sorted")
                .help("Print notes sorted ascending by pitch")
                .long("sorted")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let transpose_amount = matches.get_one::<i32>("transpose").copied().unwrap_or(0);
    let augment_count = matches.get_count("augment");
    let diminish_count = matches.get_count("diminish");
    let flats = matches.get_flag("flats");
    let pitch = matches.get_flag("pitch");
    let sorted = matches.get_flag("sorted");

    let mut notes = Vec::new();
    for raw in matches.get_many::<String>("notes").unwrap() {
        let mut note = if let Ok(value) = raw.parse::<i32>() {
            Note::from_pitch(value)
        } else {
            raw.parse::<Note>()
                .with_context(|| format!("Cannot parse note \"{}\"", raw))?
        };
        if transpose_amount != 0 {
            note.transpose(transpose_amount);
        }
        for _ in 0..augment_count {
            note.augment();
        }
        for _ in 0..diminish_count {
            note.diminish();
        }
        notes.push(note);
    }

    let notes = if sorted {
        let mut grouping = NoteGrouping::new();
        grouping.add(notes).context("Cannot collect notes")?;
        grouping.get_notes()
    } else {
        notes
    };

    let rendered: Vec<String> = notes
        .iter()
        .map(|note| {
            let note = if flats {
                Note::spell(note.to_pitch(), false)
            } else {
                note.clone()
            };
            if pitch {
                note.to_pitch().to_string()
            } else {
                note.to_string()
            }
        })
        .collect();

    println!("{}", rendered.join(" "));

    Ok(())
}
