use std::collections::BTreeMap;
use std::io::Write;

use tracing::{debug, info, warn};

use crate::config::RunConfig;
use crate::domain::models::{EpisodeKey, MediaFile, MediaKind, Outcome, RenameDecision};
use crate::error::Result;
use crate::infra::fs::{self, NameIndex};
use crate::workflows::matchers;

type Groups = BTreeMap<EpisodeKey, Vec<MediaFile>>;

/// Counts and decisions from one run.
#[derive(Debug, Default)]
pub struct Summary {
    /// Renamed, or previewed under dry-run.
    pub renamed: usize,
    /// Subtitle files left alone because of a missing or ambiguous
    /// counterpart, plus targets whose new name was taken.
    pub skipped: usize,
    /// Video and subtitle files no episode pattern recognized.
    pub unrecognized: usize,
    pub outcomes: Vec<Outcome>,
}

/// Lists `config.directory`, pairs videos with subtitles by episode key and
/// renames (or previews) one side of each pair. Report lines are written to
/// `out` as decisions are made, so a fatal rename error leaves the earlier
/// lines in place.
pub fn run<W: Write>(config: &RunConfig, out: W) -> Result<Summary> {
    Renamer::new(config, out).run()
}

struct Renamer<'a, W> {
    config: &'a RunConfig,
    out: W,
    summary: Summary,
}

impl<'a, W: Write> Renamer<'a, W> {
    fn new(config: &'a RunConfig, out: W) -> Self {
        Renamer {
            config,
            out,
            summary: Summary::default(),
        }
    }

    fn run(mut self) -> Result<Summary> {
        info!(
            dir = %self.config.directory.display(),
            direction = ?self.config.direction,
            dry_run = self.config.dry_run,
            "starting run"
        );
        writeln!(self.out, "{}", self.config.mode_description())?;
        writeln!(self.out)?;

        let listing = fs::list_directory(&self.config.directory)?;
        let mut names = listing.names;
        let media: Vec<MediaFile> = listing.files.into_iter().filter_map(MediaFile::new).collect();

        let videos = self.group(&media, MediaKind::Video)?;
        let subtitles = self.group(&media, MediaKind::Subtitle)?;

        for (key, subtitle_group) in subtitles {
            let video_group = videos.get(&key).map(Vec::as_slice);
            self.process_key(key, &subtitle_group, video_group, &mut names)?;
        }

        let verb = if self.config.dry_run {
            "Would rename"
        } else {
            "Renamed"
        };
        writeln!(self.out)?;
        writeln!(
            self.out,
            "Done. {verb}: {}, Skipped: {}",
            self.summary.renamed, self.summary.skipped
        )?;

        Ok(self.summary)
    }

    /// Groups files of one kind by episode key, reporting the ones without a
    /// key.
    fn group(&mut self, media: &[MediaFile], kind: MediaKind) -> Result<Groups> {
        let mut groups = Groups::new();

        for file in media.iter().filter(|f| f.kind == kind) {
            let file_name = file.file_name();
            match matchers::extract_key(&file_name) {
                Some(key) => {
                    debug!(file = %file_name, %key, ?kind, "classified");
                    groups.entry(key).or_default().push(file.clone());
                }
                None => {
                    self.summary.unrecognized += 1;
                    self.report(Outcome::NoPattern { file: file_name })?;
                }
            }
        }

        Ok(groups)
    }

    fn process_key(
        &mut self,
        key: EpisodeKey,
        subtitles: &[MediaFile],
        videos: Option<&[MediaFile]>,
        names: &mut NameIndex,
    ) -> Result<()> {
        let Some(videos) = videos else {
            self.summary.skipped += subtitles.len();
            return self.report(Outcome::NoMatchingVideo {
                key,
                subtitles: file_names(subtitles),
            });
        };

        if videos.len() > 1 {
            self.report(Outcome::AmbiguousVideos {
                key: key.clone(),
                videos: file_names(videos),
            })?;
        }
        if subtitles.len() > 1 {
            self.report(Outcome::AmbiguousSubtitles {
                key: key.clone(),
                subtitles: file_names(subtitles),
            })?;
        }

        let ([video], [subtitle]) = (videos, subtitles) else {
            self.summary.skipped += subtitles.len();
            return Ok(());
        };

        let decision =
            RenameDecision::new(key, video.clone(), subtitle.clone(), self.config.direction);
        self.apply(decision, names)
    }

    fn apply(&mut self, decision: RenameDecision, names: &mut NameIndex) -> Result<()> {
        let RenameDecision {
            key,
            source,
            target,
            new_path,
        } = &decision;
        let from = target.file_name();
        let to = decision.new_file_name();
        debug!(%key, source = %source.file_name(), target = %from, new_name = %to, "paired");

        if fs::same_path(&target.path, new_path) {
            return self.report(Outcome::AlreadyNamed {
                key: key.clone(),
                file: from,
            });
        }

        if names.contains(new_path) {
            self.summary.skipped += 1;
            return self.report(Outcome::TargetExists {
                key: key.clone(),
                file: to,
            });
        }

        let outcome = if self.config.dry_run {
            Outcome::Preview {
                key: key.clone(),
                from,
                to,
            }
        } else {
            if let Err(e) = fs::move_file(&target.path, new_path) {
                warn!(%key, error = %e, "rename failed, aborting run");
                return Err(e);
            }
            Outcome::Renamed {
                key: key.clone(),
                from,
                to,
            }
        };

        names.record_move(&target.path, new_path);
        self.summary.renamed += 1;
        self.report(outcome)
    }

    fn report(&mut self, outcome: Outcome) -> Result<()> {
        writeln!(self.out, "{outcome}")?;
        self.summary.outcomes.push(outcome);
        Ok(())
    }
}

fn file_names(files: &[MediaFile]) -> Vec<String> {
    files.iter().map(MediaFile::file_name).collect()
}
