use anyhow::Result;
use arrow::{
    record_batch::RecordBatch,
    util::{display::FormatOptions, pretty::pretty_format_batches_with_options},
};
use std::io::{BufRead, Write};
use tracing::debug;

use crate::config::DisplayOptions;
use crate::prompt::Console;

pub const PAGE_SIZE: usize = 5;

/// Walks a table `PAGE_SIZE` rows at a time. Each row is yielded once.
pub struct Pager<'a> {
    batch: &'a RecordBatch,
    cursor: usize,
}

impl<'a> Pager<'a> {
    pub fn new(batch: &'a RecordBatch) -> Self {
        Self { batch, cursor: 0 }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.batch.num_rows()
    }

    pub fn next_page(&mut self) -> Option<RecordBatch> {
        if self.is_exhausted() {
            return None;
        }
        let len = PAGE_SIZE.min(self.batch.num_rows() - self.cursor);
        let page = self.batch.slice(self.cursor, len);
        self.cursor += len;
        Some(page)
    }
}

/// Render rows as a text table, limited to `options.max_columns` columns.
pub fn render(page: &RecordBatch, options: &DisplayOptions) -> Result<String> {
    let shown: Vec<usize> = (0..page.num_columns().min(options.max_columns)).collect();
    let page = page.project(&shown)?;
    let fmt = FormatOptions::new()
        .with_null(&options.null_text)
        .with_timestamp_format(Some("%Y-%m-%d %H:%M:%S"));
    Ok(pretty_format_batches_with_options(&[page], &fmt)?.to_string())
}

/// Offer the filtered rows five at a time until the user says anything but
/// "yes", or the rows run out.
pub fn display_raw_data<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    batch: &RecordBatch,
    options: &DisplayOptions,
) -> Result<()> {
    let mut pager = Pager::new(batch);
    let mut more = console.confirm("Would you like to view the raw data? (yes/no): ")?;

    if more && pager.is_exhausted() {
        writeln!(console.out(), "No rows to display.")?;
        more = false;
    }

    while more {
        let Some(page) = pager.next_page() else {
            break;
        };
        let text = render(&page, options)?;
        writeln!(console.out(), "{text}")?;
        more = console.confirm("Would you like to see more data? (yes/no): ")?;
        if pager.is_exhausted() {
            break;
        }
    }
    debug!(shown = pager.cursor(), total = batch.num_rows(), "raw data done");

    writeln!(console.out(), "{}", "-".repeat(80))?;
    Ok(())
}
