use once_cell::sync::Lazy;
use regex::Regex;

use super::{capture_pair, Matcher};

/// `S01E02`, also multi-episode `S01E02E03` (only the first episode counts).
static SXXEXX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)S(\d{1,2})E(\d{1,3})(?:E\d{1,3})*").unwrap());

pub struct SeasonEpisodeMatcher;

impl Matcher for SeasonEpisodeMatcher {
    fn name(&self) -> &'static str {
        "sxxexx"
    }

    fn match_episode<'a>(&self, file_name: &'a str) -> Option<(&'a str, &'a str)> {
        capture_pair(&SXXEXX_RE, file_name)
    }
}
