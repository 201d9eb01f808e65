pub mod matchers;
pub mod renamer;
