use std::fmt;
use std::path::{Path, PathBuf};

pub const VIDEO_EXTENSIONS: [&str; 8] = ["mkv", "mp4", "avi", "mov", "wmv", "flv", "webm", "m4v"];
pub const SUBTITLE_EXTENSIONS: [&str; 1] = ["srt"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Subtitle,
}

impl MediaKind {
    /// Classifies a file by its extension, ignoring case.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if VIDEO_EXTENSIONS.iter().any(|v| v.eq_ignore_ascii_case(ext)) {
            Some(MediaKind::Video)
        } else if SUBTITLE_EXTENSIONS.iter().any(|s| s.eq_ignore_ascii_case(ext)) {
            Some(MediaKind::Subtitle)
        } else {
            None
        }
    }
}

/// Which side of a pair gets renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Subtitles take the video's name.
    Forward,
    /// Videos take the subtitle's name.
    Reverse,
}

/// Normalized `S##E##` identifier shared by a video and its subtitle.
///
/// Always built from captured digits with an uppercase `S` and `E`, so the
/// derived equality and ordering are already case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EpisodeKey(String);

impl EpisodeKey {
    /// Pads season and episode to at least two digits. Longer numbers keep
    /// every digit.
    pub fn from_parts(season: &str, episode: &str) -> Self {
        EpisodeKey(format!("S{season:0>2}E{episode:0>2}"))
    }
}

impl fmt::Display for EpisodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    pub path: PathBuf,
    pub kind: MediaKind,
}

impl MediaFile {
    pub fn new(path: PathBuf) -> Option<Self> {
        let kind = MediaKind::from_path(&path)?;
        Some(MediaFile { path, kind })
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// File name of `source` with this file's own extension, in this file's
    /// directory.
    pub fn renamed_after(&self, source: &MediaFile) -> PathBuf {
        let mut name = source.path.file_stem().unwrap_or_default().to_os_string();
        if let Some(ext) = self.path.extension() {
            name.push(".");
            name.push(ext);
        }
        match self.path.parent() {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameDecision {
    pub key: EpisodeKey,
    pub source: MediaFile,
    pub target: MediaFile,
    pub new_path: PathBuf,
}

impl RenameDecision {
    pub fn new(key: EpisodeKey, video: MediaFile, subtitle: MediaFile, direction: Direction) -> Self {
        let (source, target) = match direction {
            Direction::Forward => (video, subtitle),
            Direction::Reverse => (subtitle, video),
        };
        let new_path = target.renamed_after(&source);
        RenameDecision {
            key,
            source,
            target,
            new_path,
        }
    }

    pub fn new_file_name(&self) -> String {
        self.new_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// One reported decision of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    NoPattern {
        file: String,
    },
    NoMatchingVideo {
        key: EpisodeKey,
        subtitles: Vec<String>,
    },
    AmbiguousVideos {
        key: EpisodeKey,
        videos: Vec<String>,
    },
    AmbiguousSubtitles {
        key: EpisodeKey,
        subtitles: Vec<String>,
    },
    AlreadyNamed {
        key: EpisodeKey,
        file: String,
    },
    TargetExists {
        key: EpisodeKey,
        file: String,
    },
    Preview {
        key: EpisodeKey,
        from: String,
        to: String,
    },
    Renamed {
        key: EpisodeKey,
        from: String,
        to: String,
    },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::NoPattern { file } => write!(f, "  SKIP (no pattern): {file}"),
            Outcome::NoMatchingVideo { key, subtitles } => write!(
                f,
                "  SKIP [{key}]: No matching video found for {}",
                subtitles.join(", ")
            ),
            Outcome::AmbiguousVideos { key, videos } => write!(
                f,
                "  SKIP [{key}]: Ambiguous — multiple videos match: {}",
                videos.join(", ")
            ),
            Outcome::AmbiguousSubtitles { key, subtitles } => write!(
                f,
                "  SKIP [{key}]: Ambiguous — multiple subtitles match: {}",
                subtitles.join(", ")
            ),
            Outcome::AlreadyNamed { key, file } => {
                write!(f, "  OK   [{key}]: Already named correctly — {file}")
            }
            Outcome::TargetExists { key, file } => {
                write!(f, "  SKIP [{key}]: Target already exists — {file}")
            }
            Outcome::Preview { key, from, to } => write!(f, "  PREVIEW [{key}]: {from} → {to}"),
            Outcome::Renamed { key, from, to } => write!(f, "  RENAMED [{key}]: {from} → {to}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_kind_from_path() {
        assert_eq!(MediaKind::from_path(Path::new("a.mkv")), Some(MediaKind::Video));
        assert_eq!(MediaKind::from_path(Path::new("a.M4V")), Some(MediaKind::Video));
        assert_eq!(MediaKind::from_path(Path::new("a.WebM")), Some(MediaKind::Video));
        assert_eq!(MediaKind::from_path(Path::new("a.SRT")), Some(MediaKind::Subtitle));
        assert_eq!(MediaKind::from_path(Path::new("a.ass")), None);
        assert_eq!(MediaKind::from_path(Path::new("a.nfo")), None);
        assert_eq!(MediaKind::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_episode_key_padding() {
        assert_eq!(EpisodeKey::from_parts("1", "5").to_string(), "S01E05");
        assert_eq!(EpisodeKey::from_parts("12", "34").to_string(), "S12E34");
        assert_eq!(EpisodeKey::from_parts("1", "123").to_string(), "S01E123");
        assert_eq!(EpisodeKey::from_parts("01", "007").to_string(), "S01E007");
    }

    #[test]
    fn test_renamed_after_keeps_target_extension() {
        let video = MediaFile::new(PathBuf::from("/tv/Show.S01E02.1080p.mkv")).unwrap();
        let subtitle = MediaFile::new(PathBuf::from("/tv/other.s01e02.SRT")).unwrap();

        assert_eq!(
            subtitle.renamed_after(&video),
            PathBuf::from("/tv/Show.S01E02.1080p.SRT")
        );
        assert_eq!(
            video.renamed_after(&subtitle),
            PathBuf::from("/tv/other.s01e02.mkv")
        );
    }

    #[test]
    fn test_decision_direction() {
        let key = EpisodeKey::from_parts("1", "2");
        let video = MediaFile::new(PathBuf::from("/tv/A.mkv")).unwrap();
        let subtitle = MediaFile::new(PathBuf::from("/tv/B.srt")).unwrap();

        let forward = RenameDecision::new(key.clone(), video.clone(), subtitle.clone(), Direction::Forward);
        assert_eq!(forward.target, subtitle);
        assert_eq!(forward.new_file_name(), "A.srt");

        let reverse = RenameDecision::new(key, video.clone(), subtitle, Direction::Reverse);
        assert_eq!(reverse.target, video);
        assert_eq!(reverse.new_file_name(), "B.mkv");
    }

    #[test]
    fn test_outcome_lines() {
        let key = EpisodeKey::from_parts("2", "3");
        let line = Outcome::AmbiguousVideos {
            key: key.clone(),
            videos: vec!["A.S02E03.mkv".into(), "B.S02E03.mkv".into()],
        }
        .to_string();
        assert_eq!(
            line,
            "  SKIP [S02E03]: Ambiguous — multiple videos match: A.S02E03.mkv, B.S02E03.mkv"
        );

        let line = Outcome::Preview {
            key,
            from: "x.srt".into(),
            to: "y.srt".into(),
        }
        .to_string();
        assert_eq!(line, "  PREVIEW [S02E03]: x.srt → y.srt");
    }
}
