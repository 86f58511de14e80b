//! Explore US bikeshare trip data: pick a city, month and weekday, page
//! through the matching trips, and print travel statistics.

pub mod config;
pub mod data;
pub mod filter;
pub mod pager;
pub mod prompt;
pub mod session;
pub mod stats;

#[cfg(test)]
pub(crate) mod test_fixtures;
