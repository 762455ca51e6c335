//! Balancing of Markdown code fences.
//!
//! A README that ends inside an unterminated code block would swallow anything
//! appended after it. [`balance_code_fences`] closes such a block so that later
//! additions always render as regular Markdown.
//!
//! The check is a heuristic, not a Markdown parser: every line that contains the
//! fence marker anywhere counts once, including prose that merely mentions it.

use tracing::debug;

/// Triple backtick that opens and closes a fenced code block.
pub const FENCE_MARKER: &str = "```";

/// Line appended to close a dangling fence.
pub const CLOSING_FENCE: &str = "...\n```";

/// Number of lines containing [`FENCE_MARKER`], counting each line at most once.
pub fn count_fence_lines<S: AsRef<str>>(lines: &[S]) -> usize {
    lines
        .iter()
        .filter(|line| line.as_ref().contains(FENCE_MARKER))
        .count()
}

/// Appends [`CLOSING_FENCE`] when the number of fence-bearing lines is odd.
///
/// Returns `true` when a closing fence was appended. Afterwards the count of
/// fence-bearing lines is always even.
pub fn balance_code_fences(lines: &mut Vec<String>) -> bool {
    let fences = count_fence_lines(lines.as_slice());
    if fences % 2 == 0 {
        return false;
    }
    debug!(fences, "Unterminated code fence, appending closing fence");
    lines.push(CLOSING_FENCE.to_string());
    true
}
