// src/filter/mod.rs
use chrono::Weekday;
use once_cell::sync::Lazy;
use std::fmt;

/// The three cities with trip data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Lower-case name, as typed at the prompt.
    pub fn as_str(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }

    /// Case-insensitive lookup; surrounding whitespace is ignored.
    pub fn from_name(s: &str) -> Option<Self> {
        let wanted = s.trim().to_lowercase();
        City::ALL.into_iter().find(|c| c.as_str() == wanted)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// The six months covered by the datasets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    pub const ALL: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    /// Calendar month number, January = 1.
    pub fn number(&self) -> u32 {
        match self {
            Month::January => 1,
            Month::February => 2,
            Month::March => 3,
            Month::April => 4,
            Month::May => 5,
            Month::June => 6,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Month::January => "january",
            Month::February => "february",
            Month::March => "march",
            Month::April => "april",
            Month::May => "may",
            Month::June => "june",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        let wanted = s.trim().to_lowercase();
        Month::ALL.into_iter().find(|m| m.as_str() == wanted)
    }
}

/// Title-cased English weekday name, matching the derived `day_of_week` column.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

fn weekday_key(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

pub fn weekday_from_name(s: &str) -> Option<Weekday> {
    let wanted = s.trim().to_lowercase();
    WEEK.into_iter().find(|d| weekday_key(*d) == wanted)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Only(Month),
}

impl MonthFilter {
    pub fn from_name(s: &str) -> Option<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            Some(MonthFilter::All)
        } else {
            Month::from_name(s).map(MonthFilter::Only)
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            MonthFilter::All => "All",
            MonthFilter::Only(m) => m.title(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Only(Weekday),
}

impl DayFilter {
    pub fn from_name(s: &str) -> Option<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            Some(DayFilter::All)
        } else {
            weekday_from_name(s).map(DayFilter::Only)
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DayFilter::All => "All",
            DayFilter::Only(d) => weekday_name(*d),
        }
    }
}

/// One session's (city, month, day) choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterSelection {
    pub fn new(city: City, month: MonthFilter, day: DayFilter) -> Self {
        Self { city, month, day }
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "city: {}, month/s: {} and day/s: {}",
            self.city.title().to_uppercase(),
            self.month.title().to_uppercase(),
            self.day.title().to_uppercase()
        )
    }
}

// ─── allow-lists for the prompts ────────────────────────────────────

pub static CITY_OPTIONS: Lazy<Vec<&'static str>> =
    Lazy::new(|| City::ALL.iter().map(City::as_str).collect());

pub static MONTH_OPTIONS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut opts: Vec<&'static str> = Month::ALL.iter().map(Month::as_str).collect();
    opts.push("all");
    opts
});

pub static DAY_OPTIONS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut opts = vec!["all"];
    opts.extend(WEEK.into_iter().map(weekday_key));
    opts
});
