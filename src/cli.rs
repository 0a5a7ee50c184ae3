use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

pub struct Config {
    pub output_path: PathBuf,
    pub title: String,
    pub author: String,
    pub notes: Option<String>,
    pub paths: Vec<PathBuf>,
    pub fail_fast: bool,
    pub verbosity: u8,
}

pub fn parse_args() -> Result<Config> {
    let matches = Command::new("projdoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Assembles project files, notebooks and screenshots into a single PDF document")
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Sets the output .pdf file path")
                .num_args(1),
        )
        .arg(
            Arg::new("title")
                .short('t')
                .long("title")
                .value_name("TITLE")
                .help("Document title shown on the first page")
                .default_value("Project Documentation")
                .num_args(1),
        )
        .arg(
            Arg::new("author")
                .short('a')
                .long("author")
                .value_name("NAME")
                .help("Author shown under the title")
                .default_value("Unknown")
                .num_args(1),
        )
        .arg(
            Arg::new("notes")
                .short('n')
                .long("notes")
                .value_name("TEXT")
                .help("Free-text notes appended after the file sections")
                .num_args(1),
        )
        .arg(
            Arg::new("notes-file")
                .long("notes-file")
                .value_name("FILE")
                .help("Reads the notes from a file instead; overrides --notes")
                .num_args(1),
        )
        .arg(
            Arg::new("fail-fast")
                .long("fail-fast")
                .help("Abort on the first unreadable input file instead of skipping it")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increases log verbosity (repeatable)")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("paths")
                .value_name("PATHS")
                .help("Files or directories to include, in order")
                .num_args(1..)
                .required(true),
        )
        .get_matches();

    let title = matches
        .get_one::<String>("title")
        .cloned()
        .unwrap_or_default();

    // Build dynamic default filename: {title_slug}_{epoch}.pdf
    let output_path = match matches.get_one::<String>("output") {
        Some(path) => PathBuf::from(path),
        None => {
            let timestamp = Utc::now().timestamp();
            PathBuf::from(format!("{}_{timestamp}.pdf", slugify(&title)))
        }
    };

    let notes = match matches.get_one::<String>("notes-file") {
        Some(path) => Some(
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read notes file: {path}"))?,
        ),
        None => matches.get_one::<String>("notes").cloned(),
    };

    let paths: Vec<PathBuf> = matches
        .get_many::<String>("paths")
        .map(|vals| vals.map(PathBuf::from).collect())
        .unwrap_or_default();

    Ok(Config {
        output_path,
        title,
        author: matches
            .get_one::<String>("author")
            .cloned()
            .unwrap_or_default(),
        notes,
        paths,
        fail_fast: matches.get_flag("fail-fast"),
        verbosity: matches.get_count("verbose"),
    })
}

fn slugify(title: &str) -> String {
    let slug: String = title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();

    if slug.chars().all(|c| c == '_') {
        "documentation".to_string()
    } else {
        slug
    }
}
