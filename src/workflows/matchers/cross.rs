use once_cell::sync::Lazy;
use regex::Regex;

use super::{capture_pair, Matcher};

/// `1x05`, `01x005`.
static NXNN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(\d{1,2})x(\d{1,3})").unwrap());

pub struct CrossMatcher;

impl Matcher for CrossMatcher {
    fn name(&self) -> &'static str {
        "nxnn"
    }

    fn match_episode<'a>(&self, file_name: &'a str) -> Option<(&'a str, &'a str)> {
        capture_pair(&NXNN_RE, file_name)
    }
}
