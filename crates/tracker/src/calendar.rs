//! The Inner Sea campaign calendar.
//!
//! Twelve months of 365 days, with a leap day in Calistril every eighth
//! year, giving an eight-year cycle of 2921 days. Dates are anchored to an
//! epoch day count: 1 Abadius 1 AR is epoch day 1, and epoch day 0 does
//! not exist. All arithmetic is integer; the fractional year length
//! (365 + 1/8 days) is carried exactly as eighths.

use serde::{Deserialize, Serialize};

/// Days in a year outside the leap cycle.
const YEAR_DAYS: i64 = 365;
/// Years per leap cycle.
const LEAP_CYCLE: i64 = 8;
/// Days per eight-year cycle (seven common years and one leap year).
const CYCLE_DAYS: i64 = YEAR_DAYS * LEAP_CYCLE + 1;

/// The twelve months.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::FromRepr,
)]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum MonthName {
    Abadius = 1,
    Calistril,
    Pharast,
    Gozren,
    Desnus,
    Sarenith,
    Erastus,
    Arodus,
    Rova,
    Lamashan,
    Neth,
    Kuthona,
}

impl MonthName {
    /// Month number, 1 to 12.
    pub const fn number(&self) -> u32 {
        *self as u32
    }

    /// Days in this month for the given year.
    pub const fn days(&self, year: i64) -> u32 {
        match self {
            Self::Calistril => {
                if is_leap_year(year) {
                    29
                } else {
                    28
                }
            }
            Self::Abadius
            | Self::Pharast
            | Self::Desnus
            | Self::Erastus
            | Self::Arodus
            | Self::Lamashan
            | Self::Kuthona => 31,
            Self::Gozren | Self::Sarenith | Self::Rova | Self::Neth => 30,
        }
    }
}

/// The seven-day week.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::FromRepr,
)]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum Weekday {
    Moonday = 1,
    Toilday,
    Wealday,
    Oathday,
    Fireday,
    Starday,
    Sunday,
}

/// Phases of the moon over its 29.5-day period, quantized to a 29-day
/// phase table.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
)]
pub enum MoonPhase {
    #[strum(to_string = "Full Moon")]
    FullMoon,
    #[strum(to_string = "Waning Gibbous")]
    WaningGibbous,
    #[strum(to_string = "Third Quarter")]
    ThirdQuarter,
    #[strum(to_string = "Waning Crescent")]
    WaningCrescent,
    #[strum(to_string = "New Moon")]
    NewMoon,
    #[strum(to_string = "Waxing Crescent")]
    WaxingCrescent,
    #[strum(to_string = "First Quarter")]
    FirstQuarter,
    #[strum(to_string = "Waxing Gibbous")]
    WaxingGibbous,
}

impl MoonPhase {
    const ALL: [Self; 8] = [
        Self::FullMoon,
        Self::WaningGibbous,
        Self::ThirdQuarter,
        Self::WaningCrescent,
        Self::NewMoon,
        Self::WaxingCrescent,
        Self::FirstQuarter,
        Self::WaxingGibbous,
    ];

    /// Days the phase lasts within the 29-day table.
    const fn length(&self) -> i64 {
        match self {
            Self::FullMoon => 3,
            Self::WaningGibbous | Self::ThirdQuarter | Self::WaningCrescent => 4,
            Self::NewMoon => 2,
            Self::WaxingCrescent | Self::FirstQuarter | Self::WaxingGibbous => 4,
        }
    }

    /// Night-time light level, 0 (new moon) to 3 (full moon).
    pub const fn brightness(&self) -> u32 {
        match self {
            Self::FullMoon => 3,
            Self::WaningGibbous | Self::ThirdQuarter | Self::FirstQuarter
            | Self::WaxingGibbous => 2,
            Self::WaningCrescent | Self::WaxingCrescent => 1,
            Self::NewMoon => 0,
        }
    }
}

/// Errors constructing or converting dates.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Day or month out of range for the year.
    #[error("invalid date: day {day} of month {month} in year {year}")]
    InvalidDate { year: i64, month: u32, day: u32 },

    /// Epoch days start at 1.
    #[error("epoch day {epoch_day} is before the reckoning began")]
    BeforeReckoning { epoch_day: i64 },
}

/// A calendar date in the Absalom Reckoning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarDate {
    pub year: i64,
    pub month: MonthName,
    pub day: u32,
}

/// Whether the year carries the Calistril leap day.
pub const fn is_leap_year(year: i64) -> bool {
    year % LEAP_CYCLE == 0
}

/// Days elapsed before the first day of the given year.
const fn days_before_year(year: i64) -> i64 {
    (year - 1) * CYCLE_DAYS / LEAP_CYCLE
}

impl CalendarDate {
    /// Validates and builds a date.
    pub fn new(year: i64, month: u32, day: u32) -> Result<Self, CalendarError> {
        let invalid = CalendarError::InvalidDate { year, month, day };
        if year < 1 {
            return Err(invalid);
        }
        let month = MonthName::from_repr(u8::try_from(month).map_err(|_| invalid.clone())?)
            .ok_or_else(|| invalid.clone())?;
        if day < 1 || day > month.days(year) {
            return Err(invalid);
        }
        Ok(Self { year, month, day })
    }

    /// Days since the reckoning began; 1 Abadius 1 AR is day 1.
    pub fn epoch_day(&self) -> i64 {
        let mut days = days_before_year(self.year);
        for month in <MonthName as strum::IntoEnumIterator>::iter() {
            if month == self.month {
                break;
            }
            days += month.days(self.year) as i64;
        }
        days + self.day as i64
    }

    /// Converts an epoch day back to a date.
    pub fn from_epoch_day(epoch_day: i64) -> Result<Self, CalendarError> {
        if epoch_day < 1 {
            return Err(CalendarError::BeforeReckoning { epoch_day });
        }
        // Smallest year whose span contains the day: ceil of eighths.
        let year = (epoch_day * LEAP_CYCLE + CYCLE_DAYS - 1) / CYCLE_DAYS;
        let mut day_in_year = epoch_day - days_before_year(year);

        for month in <MonthName as strum::IntoEnumIterator>::iter() {
            let span = month.days(year) as i64;
            if day_in_year <= span {
                return Ok(Self {
                    year,
                    month,
                    day: day_in_year as u32,
                });
            }
            day_in_year -= span;
        }
        // Unreachable: day_in_year never exceeds the year span.
        Err(CalendarError::BeforeReckoning { epoch_day })
    }

    /// Day of the week; the reckoning began on a Moonday.
    pub fn weekday(&self) -> Weekday {
        let index = ((self.epoch_day() - 1) % 7) as u8 + 1;
        Weekday::from_repr(index).unwrap_or(Weekday::Moonday)
    }

    /// Phase of the moon on this date.
    pub fn moon_phase(&self) -> MoonPhase {
        let epoch_day = self.epoch_day();
        // Position within the current lunation. The 29.5-day period is
        // carried as halves so the drift matches the sky, not the table.
        let lunations = 2 * epoch_day / 59;
        let mut moon_day = epoch_day - 59 * lunations / 2;

        let mut phase = 0usize;
        while moon_day > 0 {
            moon_day -= MoonPhase::ALL[phase].length();
            if moon_day > 0 {
                phase += 1;
            }
        }
        MoonPhase::ALL[phase]
    }
}
