use once_cell::sync::Lazy;
use regex::Regex;

use super::{capture_pair, Matcher};

/// `Season 1 Episode 2` with any run of `.`, whitespace, `_` or `-` (or none)
/// between the words and numbers.
static VERBOSE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Season[.\s_-]*(\d{1,2})[.\s_-]*Episode[.\s_-]*(\d{1,3})").unwrap()
});

pub struct VerboseMatcher;

impl Matcher for VerboseMatcher {
    fn name(&self) -> &'static str {
        "season-episode-words"
    }

    fn match_episode<'a>(&self, file_name: &'a str) -> Option<(&'a str, &'a str)> {
        capture_pair(&VERBOSE_RE, file_name)
    }
}
