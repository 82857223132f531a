//! Source location rendering for text sinks

use std::fmt::Write as _;

/// Width used by [`LocationStyle::aligned`].
pub const DEFAULT_LOCATION_WIDTH: usize = 15;

const ELLIPSIS: &str = "...";

/// How a `file:line` pair is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LocationStyle {
    /// `file:line` as is
    #[default]
    Plain,

    /// Exactly `width` characters: left-padded when short, otherwise the head
    /// of the path is replaced by `...`. The line number is never cut.
    Aligned(usize),
}

impl LocationStyle {
    pub fn aligned() -> Self {
        LocationStyle::Aligned(DEFAULT_LOCATION_WIDTH)
    }

    pub fn render(&self, file: &str, line: u32) -> String {
        match *self {
            LocationStyle::Plain => format!("{}:{}", file, line),
            LocationStyle::Aligned(width) => render_aligned(file, line, width),
        }
    }
}

fn render_aligned(file: &str, line: u32, width: usize) -> String {
    let line = line.to_string();
    let file_chars = file.chars().count();
    // +1 for ':'
    let total = file_chars + 1 + line.len();

    let mut out = String::with_capacity(width.max(total));
    if total <= width {
        let _ = write!(out, "{:>pad$}{}:{}", "", file, line, pad = width - total);
        return out;
    }

    let keep = width.saturating_sub(ELLIPSIS.len() + 1 + line.len());
    let tail: String = file.chars().skip(file_chars - keep.min(file_chars)).collect();
    out.push_str(ELLIPSIS);
    out.push_str(&tail);
    out.push(':');
    out.push_str(&line);
    out
}
