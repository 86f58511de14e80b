use anyhow::{anyhow, Result};
use std::io::{BufRead, Write};
use tracing::debug;

use super::Console;
use crate::data::CityRegistry;
use crate::filter::{
    DayFilter, FilterSelection, MonthFilter, CITY_OPTIONS, DAY_OPTIONS, MONTH_OPTIONS,
};

const CITY_PROMPT: &str = "\nWhich city would you like to explore?\n\
1. Chicago 2. New York City 3. Washington\n\
Type the full city name; case does not matter (e.g. chicago, Chicago or CHICAGO).\n";

const MONTH_PROMPT: &str = "\nWhich month, January to June, would you like to see?\n\
Type the full month name; case does not matter (e.g. april or April).\n\
Type 'all' to see every month.\n";

const DAY_PROMPT: &str = "\nWhich day of the week would you like to see?\n\
Type the full day name; case does not matter (e.g. monday or Monday).\n\
Type 'all' to see every day.\n";

/// Ask for city, month and day in turn, echoing each choice. The city is
/// looked up in `registry`, so the answer must name a file it knows.
pub fn collect_filters<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    registry: &CityRegistry,
) -> Result<FilterSelection> {
    writeln!(console.out(), "Hello! Let's explore some US bikeshare data!")?;

    let city = console.prompt_choice(CITY_PROMPT, &CITY_OPTIONS)?;
    let (city, path) = registry.resolve(&city)?;
    debug!(%city, path = %path.display(), "city resolved");
    writeln!(console.out(), "\nYou have chosen {} as your city.", city.title())?;

    let month = console.prompt_choice(MONTH_PROMPT, &MONTH_OPTIONS)?;
    let month =
        MonthFilter::from_name(&month).ok_or_else(|| anyhow!("unrecognised month {month:?}"))?;
    writeln!(console.out(), "\nYou have chosen {} as your month.", month.title())?;

    let day = console.prompt_choice(DAY_PROMPT, &DAY_OPTIONS)?;
    let day = DayFilter::from_name(&day).ok_or_else(|| anyhow!("unrecognised day {day:?}"))?;
    writeln!(console.out(), "\nYou have chosen {} as your day.", day.title())?;

    let selection = FilterSelection::new(city, month, day);
    writeln!(
        console.out(),
        "\nYou have chosen to view data for {selection}."
    )?;
    writeln!(console.out(), "{}", "-".repeat(80))?;
    Ok(selection)
}
