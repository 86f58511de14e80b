use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{info, warn};

use crate::config::Config;
use crate::data::{load_data, CityRegistry};
use crate::pager::display_raw_data;
use crate::prompt::{collect_filters, Console};
use crate::stats;

const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.\n";

/// One pass: filters → load → raw rows → the four reports.
/// A load failure is shown to the user and ends the pass early.
pub fn run_once<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    registry: &CityRegistry,
    config: &Config,
) -> Result<()> {
    let selection = collect_filters(console, registry)?;
    let table = match load_data(registry, &selection) {
        Ok(table) => table,
        Err(err) => {
            warn!(%err, "skipping analysis");
            writeln!(
                console.out(),
                "\nCould not load data for {}: {err}",
                selection.city
            )?;
            return Ok(());
        }
    };
    info!(rows = table.num_rows(), "trips selected");

    display_raw_data(console, &table, &config.display)?;
    stats::report_all(console.out(), &table)?;
    Ok(())
}

/// Repeat sessions until the user declines to restart.
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, config: &Config) -> Result<()> {
    let registry = CityRegistry::from_config(config);
    info!(data_dir = %registry.data_dir().display(), "session start");
    loop {
        run_once(console, &registry, config)?;
        if !console.confirm(RESTART_PROMPT)? {
            break;
        }
    }
    Ok(())
}
