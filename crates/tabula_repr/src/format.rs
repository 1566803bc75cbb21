//! Layout of rendered items into a bracketed block.
//!
//! A separator ending in `'\n'` selects multi-line layout: items go one per
//! line, indented to `depth`, and the closing bracket is indented one level
//! less. Anything else joins the items on a single line.

use crate::errors::{multiline_at_depth, ReprResult};
use crate::template::Template;

/// Format `items` into `style`.
///
/// Multi-line layout at `depth == 0` has no enclosing level to close and
/// fails with `MisconfiguredFormat`.
pub fn format_items(
    items: &[String],
    style: &Template,
    sep: &str,
    indentation: &str,
    depth: usize,
) -> ReprResult<String> {
    if !sep.ends_with('\n') {
        return Ok(style.fill(&[&items.join(sep)]));
    }
    if depth == 0 {
        return Err(multiline_at_depth(depth));
    }
    if items.is_empty() {
        return Ok(style.fill(&[""]));
    }

    let inner = indentation.repeat(depth);
    let outer = indentation.repeat(depth - 1);
    let joiner = format!("{sep}{inner}");

    let mut body = String::with_capacity(
        items.iter().map(String::len).sum::<usize>() + (joiner.len() + 1) * items.len(),
    );
    body.push('\n');
    body.push_str(&inner);
    body.push_str(&items.join(joiner.as_str()));
    body.push('\n');
    body.push_str(&outer);
    Ok(style.fill(&[&body]))
}
