use regex::Regex;
use tracing::trace;

use crate::domain::models::EpisodeKey;

pub mod cross;
pub mod season_episode;
pub mod verbose;

use cross::CrossMatcher;
use season_episode::SeasonEpisodeMatcher;
use verbose::VerboseMatcher;

/// Recognizes one way of writing a season/episode pair in a file name.
pub trait Matcher {
    fn name(&self) -> &'static str;

    /// Returns the raw season and episode digits, unpadded.
    fn match_episode<'a>(&self, file_name: &'a str) -> Option<(&'a str, &'a str)>;
}

/// Tried in order; the first matcher that recognizes a name decides its key.
pub const MATCHERS: &[&dyn Matcher] = &[&SeasonEpisodeMatcher, &CrossMatcher, &VerboseMatcher];

pub fn extract_key(file_name: &str) -> Option<EpisodeKey> {
    extract_key_with(MATCHERS, file_name)
}

pub fn extract_key_with(matchers: &[&dyn Matcher], file_name: &str) -> Option<EpisodeKey> {
    matchers.iter().find_map(|matcher| {
        let (season, episode) = matcher.match_episode(file_name)?;
        trace!(matcher = matcher.name(), file_name, season, episode, "episode pattern matched");
        Some(EpisodeKey::from_parts(season, episode))
    })
}

/// Season and episode from capture groups 1 and 2.
fn capture_pair<'a>(re: &Regex, file_name: &'a str) -> Option<(&'a str, &'a str)> {
    let caps = re.captures(file_name)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(file_name: &str) -> Option<String> {
        extract_key(file_name).map(|k| k.to_string())
    }

    #[test]
    fn test_each_family() {
        assert_eq!(key("Show.S01E02.mkv").as_deref(), Some("S01E02"));
        assert_eq!(key("Show.1x05.mkv").as_deref(), Some("S01E05"));
        assert_eq!(key("Show Season 3 Episode 7.srt").as_deref(), Some("S03E07"));
    }

    #[test]
    fn test_no_pattern() {
        assert_eq!(key("Movie.mkv"), None);
        assert_eq!(key("Show.Episode.Seven.srt"), None);
        assert_eq!(key(""), None);
    }

    #[test]
    fn test_priority_is_by_family_not_position() {
        // "2x03" comes first in the name but the S/E family is tried first.
        assert_eq!(key("2x03.Show.S04E05.mkv").as_deref(), Some("S04E05"));
        assert_eq!(key("Season 1 Episode 2 - 3x04.srt").as_deref(), Some("S03E04"));
    }

    #[test]
    fn test_earlier_family_wins_without_validation() {
        // Resolution digits are accepted as an NxNN pair; no plausibility check.
        assert_eq!(key("Show.1920x1080.mkv").as_deref(), Some("S20E108"));
    }

    #[test]
    fn test_extraction_is_pure() {
        let name = "the.show.s02e10.720p.srt";
        assert_eq!(extract_key(name), extract_key(name));
        assert_eq!(key(name).as_deref(), Some("S02E10"));
    }

    struct Fixed;

    impl Matcher for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn match_episode<'a>(&self, file_name: &'a str) -> Option<(&'a str, &'a str)> {
            file_name.starts_with("pilot").then_some(("1", "1"))
        }
    }

    #[test]
    fn test_custom_matcher_list() {
        let matchers: &[&dyn Matcher] = &[&Fixed, &SeasonEpisodeMatcher];
        assert_eq!(
            extract_key_with(matchers, "pilot.S05E05.mkv").map(|k| k.to_string()),
            Some("S01E01".to_string())
        );
        assert_eq!(
            extract_key_with(matchers, "Show.S05E05.mkv").map(|k| k.to_string()),
            Some("S05E05".to_string())
        );
    }
}
