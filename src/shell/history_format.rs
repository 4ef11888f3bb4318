// Line handling for the history formats we read
//
// Bash writes plain commands. Zsh (with EXTENDED_HISTORY) glues a
// ": <epoch>:<elapsed>;" marker on the front that has to go first.

use regex::Regex;
use std::sync::LazyLock;

/// Turns a history line plus the matched install prefix into package tokens
pub type Tokenizer = fn(&str, &str) -> Vec<String>;

/// Strips shell-specific decoration off a history line
pub type Cleanup = fn(&str) -> String;

static ZSH_TIMESTAMP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r": \d+:\d+;").expect("zsh timestamp pattern is valid"));

/// Tokenizer for histories that are just one command per line
///
/// Cuts the prefix out and splits on single spaces. Runs of spaces give
/// empty tokens; the processor throws those away.
pub fn simple_tokenizer(line: &str, prefix: &str) -> Vec<String> {
    line.replace(prefix, "")
        .split(' ')
        .map(str::to_string)
        .collect()
}

/// Remove zsh extended-history timestamp markers
pub fn zsh_cleanup(line: &str) -> String {
    ZSH_TIMESTAMP.replace_all(line, "").into_owned()
}
