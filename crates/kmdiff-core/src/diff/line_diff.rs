//! Whole-document line diff.

use diffy::{DiffOptions, Line};

/// Line-based diff of two texts.
///
/// Every line of both inputs appears once in the output: context lines are
/// prefixed with a space, lines only in `old` with `-`, lines only in `new`
/// with `+`. Empty lines are dropped so no bare prefix is emitted. Output
/// lines are joined with `\n` and carry no trailing newline.
pub fn line_diff(old: &str, new: &str) -> String {
    // Context as long as the longer input keeps the whole document in a single hunk.
    let context_len = old.lines().count().max(new.lines().count());
    let patch = DiffOptions::new()
        .set_context_len(context_len)
        .create_patch(old, new);

    let mut out: Vec<String> = Vec::new();
    for hunk in patch.hunks() {
        for line in hunk.lines() {
            let (prefix, text) = match line {
                Line::Context(text) => (' ', *text),
                Line::Delete(text) => ('-', *text),
                Line::Insert(text) => ('+', *text),
            };
            let text = text.trim_end_matches(['\n', '\r']);
            if text.is_empty() {
                continue;
            }
            out.push(format!("{prefix}{text}"));
        }
    }
    out.join("\n")
}
