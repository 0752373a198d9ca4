//! Headless mode: one search through the controller, printed to a writer.
//!
//! Used by `mdu --headless` for scripting. The session store is in-memory,
//! so nothing is cached between runs.

use mdu_core::stats::{format_row, summarize};
use mdu_core::{Field, FilterField, MemoryStore, SearchApi, SearchController, SearchStatus};
use std::io::Write;

/// How the result set is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Status line, statistic cards and an aligned table.
    Table,
    /// The filtered records as a pretty-printed JSON array.
    Json,
}

/// Run one search and write the outcome to `out`.
///
/// Every completed search is a success here, including one that matched
/// nothing or failed at the network level; the status is returned so the
/// caller can decide what to do with it.
pub async fn run<A: SearchApi>(
    api: &A,
    filter: FilterField,
    keyword: &str,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<SearchStatus> {
    let mut controller = SearchController::new(MemoryStore::new());
    controller.restore_on_mount();
    let status = controller.search(api, filter, keyword).await.clone();
    tracing::info!(?status, records = controller.results().len(), "headless search finished");

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, controller.results())?;
            writeln!(out)?;
        }
        OutputFormat::Table => write_table(&controller, out)?,
    }

    controller.clear_on_unload();
    Ok(status)
}

fn write_table(controller: &SearchController, out: &mut impl Write) -> anyhow::Result<()> {
    if controller.no_results() {
        writeln!(out, "No Records To Display")?;
    } else {
        writeln!(out, "Displaying {} Records", controller.results().len())?;
    }
    writeln!(out)?;

    for card in summarize(controller.results(), controller.no_results()) {
        writeln!(out, "{}", card.title())?;
        writeln!(out, "  Average: {} {}", card.average, card.unit)?;
        writeln!(out, "  Median: {} {}", card.median, card.unit)?;
    }

    if controller.no_results() || controller.results().is_empty() {
        return Ok(());
    }
    writeln!(out)?;

    let header: Vec<String> = Field::ALL.iter().map(|f| f.as_str().to_string()).collect();
    let rows: Vec<Vec<String>> = controller.results().iter().map(format_row).collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    for row in std::iter::once(&header).chain(rows.iter()) {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{cell:<w$}"))
            .collect::<Vec<_>>()
            .join("  ");
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}
