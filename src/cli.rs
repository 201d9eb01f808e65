use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "subtitle-renamer", version)]
#[command(about = "Match subtitle files to video files by episode number and rename them to share a name")]
pub struct Cli {
    /// Directory containing the video and subtitle files
    pub directory: PathBuf,

    /// Preview renames without making changes
    #[arg(long)]
    pub dry_run: bool,

    /// Rename video files to match subtitle filenames
    #[arg(long)]
    pub reverse: bool,

    /// Increase diagnostic logging on stderr (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

const LONG_FLAGS: [&str; 5] = ["--dry-run", "--reverse", "--verbose", "--help", "--version"];

/// Lowercases recognized long flags so `--DRY-RUN` and `--dry-run` are the
/// same. Arguments after a bare `--` are left alone.
pub fn normalize_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut positional_only = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if positional_only {
                return arg;
            }
            if arg == "--" {
                positional_only = true;
                return arg;
            }
            match arg
                .to_str()
                .and_then(|s| LONG_FLAGS.iter().find(|flag| flag.eq_ignore_ascii_case(s)))
            {
                Some(flag) => OsString::from(*flag),
                None => arg,
            }
        })
        .collect()
}
