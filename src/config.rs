use std::path::PathBuf;

use crate::cli::Cli;
use crate::domain::models::Direction;
use crate::error::{Error, Result};

/// Validated settings for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub directory: PathBuf,
    pub direction: Direction,
    pub dry_run: bool,
}

impl RunConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        if !cli.directory.is_dir() {
            return Err(Error::DirectoryNotFound(cli.directory.clone()));
        }

        Ok(RunConfig {
            directory: cli.directory.clone(),
            direction: if cli.reverse {
                Direction::Reverse
            } else {
                Direction::Forward
            },
            dry_run: cli.dry_run,
        })
    }

    pub fn mode_description(&self) -> &'static str {
        match self.direction {
            Direction::Forward => "Mode: Rename subtitle files to match video filenames.",
            Direction::Reverse => "Mode: Rename video files to match subtitle filenames.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn cli(directory: PathBuf, reverse: bool) -> Cli {
        Cli {
            directory,
            dry_run: true,
            reverse,
            verbose: 0,
        }
    }

    #[test]
    fn test_from_cli() {
        let temp_dir = TempDir::new().unwrap();
        let config = RunConfig::from_cli(&cli(temp_dir.path().to_path_buf(), true)).unwrap();

        assert_eq!(config.directory, temp_dir.path());
        assert_eq!(config.direction, Direction::Reverse);
        assert!(config.dry_run);
        assert_eq!(
            config.mode_description(),
            "Mode: Rename video files to match subtitle filenames."
        );
    }

    #[test]
    fn test_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");

        let err = RunConfig::from_cli(&cli(missing.clone(), false)).unwrap_err();
        assert!(matches!(err, Error::DirectoryNotFound(path) if path == missing));
    }

    #[test]
    fn test_file_is_not_a_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("Show.S01E01.mkv");
        File::create(&file).unwrap();

        assert!(RunConfig::from_cli(&cli(file, false)).is_err());
    }
}
