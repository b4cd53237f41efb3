//! Box-drawn grid tables for terminal output.

use crate::channel_search::ChannelMatch;
use crate::details::VideoRecord;
use crate::duration::format_duration;
use crate::summary::ChannelSummary;
use std::fmt;
use unicode_width::UnicodeWidthStr;

/// How many videos the duration report previews.
pub const PREVIEW_ROWS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
}

/// A grid table in the style of
///
/// ```text
/// ╒═══╤══════╕
/// │   │ Name │
/// ╞═══╪══════╡
/// │ 0 │ ab   │
/// ├───┼──────┤
/// │ 1 │ c    │
/// ╘═══╧══════╛
/// ```
///
/// Widths are measured in terminal cells, so wide characters in titles line up.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Option<Vec<String>>,
    rows: Vec<Vec<String>>,
    align: Vec<Align>,
    show_index: bool,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_headers<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: Some(headers.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Prefix every row with its 0-based position.
    pub fn show_index(mut self) -> Self {
        self.show_index = true;
        self
    }

    /// Sets the alignment of data column `column` (not counting the index column).
    pub fn align(mut self, column: usize, align: Align) -> Self {
        if self.align.len() <= column {
            self.align.resize(column + 1, Align::Left);
        }
        self.align[column] = align;
        self
    }

    pub fn push_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Lays the table out as a full grid of cells, index column included.
    fn cells(&self) -> (Option<Vec<String>>, Vec<Vec<String>>, Vec<Align>) {
        let columns = self
            .rows
            .iter()
            .map(Vec::len)
            .chain(self.headers.as_ref().map(Vec::len))
            .max()
            .unwrap_or(0);

        let widen = |cells: &[String], index: Option<String>| {
            let mut line: Vec<String> = index.into_iter().collect();
            line.extend(cells.iter().map(|cell| sanitize(cell)));
            line.resize(columns + usize::from(self.show_index), String::new());
            line
        };

        let header = self
            .headers
            .as_ref()
            .map(|h| widen(h.as_slice(), self.show_index.then(String::new)));
        let body = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| widen(row.as_slice(), self.show_index.then(|| i.to_string())))
            .collect();

        let mut align: Vec<Align> = self.show_index.then_some(Align::Right).into_iter().collect();
        align.extend((0..columns).map(|c| self.align.get(c).copied().unwrap_or_default()));

        (header, body, align)
    }
}

/// Keeps every cell on a single line.
fn sanitize(cell: &str) -> String {
    cell.replace(['\r', '\n', '\t'], " ")
}

fn pad(cell: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    match align {
        Align::Left => format!("{cell}{fill}"),
        Align::Right => format!("{fill}{cell}"),
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (header, body, align) = self.cells();
        if header.is_none() && body.is_empty() {
            return Ok(());
        }

        let mut widths = vec![0; align.len()];
        for line in header.iter().chain(&body) {
            for (width, cell) in widths.iter_mut().zip(line) {
                *width = (*width).max(cell.width());
            }
        }

        let rule = |left: &str, fill: &str, joint: &str, right: &str| {
            let segments: Vec<String> = widths.iter().map(|w| fill.repeat(w + 2)).collect();
            format!("{left}{}{right}", segments.join(joint))
        };
        let row = |line: &[String]| {
            let cells: Vec<String> = line
                .iter()
                .zip(&widths)
                .zip(&align)
                .map(|((cell, &width), &alignment)| format!(" {} ", pad(cell, width, alignment)))
                .collect();
            format!("│{}│", cells.join("│"))
        };

        writeln!(f, "{}", rule("╒", "═", "╤", "╕"))?;
        if let Some(header) = &header {
            writeln!(f, "{}", row(header.as_slice()))?;
            if !body.is_empty() {
                writeln!(f, "{}", rule("╞", "═", "╪", "╡"))?;
            }
        }
        for (i, line) in body.iter().enumerate() {
            if i > 0 {
                writeln!(f, "{}", rule("├", "─", "┼", "┤"))?;
            }
            writeln!(f, "{}", row(line.as_slice()))?;
        }
        write!(f, "{}", rule("╘", "═", "╧", "╛"))
    }
}

/// Table of channel search hits.
pub fn search_results_table(matches: &[ChannelMatch]) -> Table {
    let mut table = Table::with_headers(["Channel Name", "Channel ID"]).show_index();
    for m in matches {
        table.push_row([m.title.as_str(), m.channel_id.as_str()]);
    }
    table
}

/// Table of the first [`PREVIEW_ROWS`] videos with their length in seconds.
pub fn video_preview_table(records: &[VideoRecord]) -> Table {
    let mut table = Table::with_headers(["Video ID", "Video Title", "Duration (s)"])
        .show_index()
        .align(2, Align::Right);
    for record in records.iter().take(PREVIEW_ROWS) {
        table.push_row([
            record.id.clone(),
            record.title.clone(),
            record.duration_seconds.to_string(),
        ]);
    }
    table
}

/// Header-less table with the total and average duration.
pub fn summary_table(summary: &ChannelSummary) -> Table {
    let mut table = Table::new();
    table.push_row([
        "Total Duration".to_string(),
        format_duration(summary.total_duration_seconds),
    ]);
    table.push_row([
        "Average Duration".to_string(),
        format_duration(summary.average_duration_seconds),
    ]);
    table
}
