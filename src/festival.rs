use std::fmt;

const MILLIS_PER_SECOND: i64 = 1_000;
const MILLIS_PER_DAY: i64 = 86_400 * MILLIS_PER_SECOND;
const MONTH_ABBREVIATIONS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

const YEAR_BOUNDS: (i32, i32) = (1970, 9999);

pub const DEFAULT_FESTIVAL_START: CalendarDate = CalendarDate::new(2025, 12, 3);
pub const DEFAULT_FESTIVAL_END: CalendarDate = CalendarDate::new(2025, 12, 6);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Parses `YYYY-MM-DD`, rejecting days that do not exist and years
    /// outside `1970..=9999`.
    pub fn parse(value: &str) -> Option<Self> {
        let mut parts = value.trim().splitn(3, '-');
        let year = parts
            .next()
            .filter(|year| year.len() == 4 && year.bytes().all(|byte| byte.is_ascii_digit()))?
            .parse::<i32>()
            .ok()
            .filter(|year| (YEAR_BOUNDS.0..=YEAR_BOUNDS.1).contains(year))?;
        let month = parts.next()?.parse::<u32>().ok()?;
        let day = parts.next()?.parse::<u32>().ok()?;

        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return None;
        }

        Some(Self { year, month, day })
    }

    /// Days since 1970-01-01 in the proleptic Gregorian calendar.
    pub fn days_since_epoch(self) -> i64 {
        let year = i64::from(self.year) - i64::from(self.month <= 2);
        let era = year.div_euclid(400);
        let year_of_era = year - era * 400;
        let month = i64::from(self.month);
        let shifted_month = if month > 2 { month - 3 } else { month + 9 };
        let day_of_year = (153 * shifted_month + 2) / 5 + i64::from(self.day) - 1;
        let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;

        era * 146_097 + day_of_era - 719_468
    }

    pub fn midnight_utc_millis(self) -> i64 {
        self.days_since_epoch().saturating_mul(MILLIS_PER_DAY)
    }

    fn month_abbreviation(self) -> &'static str {
        MONTH_ABBREVIATIONS[(self.month as usize).saturating_sub(1) % 12]
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Countdown {
    /// Splits a positive remaining duration, rounding partial seconds up so
    /// the display never reads zero before the festival starts.
    pub fn from_millis(remaining_ms: i64) -> Self {
        let total_seconds = (remaining_ms.max(0) as u64).div_ceil(MILLIS_PER_SECOND as u64);

        Self {
            days: total_seconds / 86_400,
            hours: (total_seconds % 86_400) / 3_600,
            minutes: (total_seconds % 3_600) / 60,
            seconds: total_seconds % 60,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FestivalPhase {
    Upcoming(Countdown),
    Live,
    Ended,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateBadge {
    pub range: String,
    pub year: String,
}

/// First and last day of the festival, both inclusive, in UTC.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FestivalWindow {
    pub start: CalendarDate,
    pub end: CalendarDate,
}

impl Default for FestivalWindow {
    fn default() -> Self {
        Self {
            start: DEFAULT_FESTIVAL_START,
            end: DEFAULT_FESTIVAL_END,
        }
    }
}

impl FestivalWindow {
    pub fn starts_at_ms(&self) -> i64 {
        self.start.midnight_utc_millis()
    }

    pub fn ends_at_ms(&self) -> i64 {
        self.end.midnight_utc_millis().saturating_add(MILLIS_PER_DAY)
    }

    pub fn phase(&self, now_ms: i64) -> FestivalPhase {
        if now_ms < self.starts_at_ms() {
            let remaining = self.starts_at_ms().saturating_sub(now_ms);
            FestivalPhase::Upcoming(Countdown::from_millis(remaining))
        } else if now_ms < self.ends_at_ms() {
            FestivalPhase::Live
        } else {
            FestivalPhase::Ended
        }
    }

    pub fn badge(&self) -> DateBadge {
        let range = if self.start.year == self.end.year && self.start.month == self.end.month {
            format!(
                "{} {}-{}",
                self.start.month_abbreviation(),
                self.start.day,
                self.end.day
            )
        } else {
            format!(
                "{} {}-{} {}",
                self.start.month_abbreviation(),
                self.start.day,
                self.end.month_abbreviation(),
                self.end.day
            )
        };
        let year = if self.start.year == self.end.year {
            self.start.year.to_string()
        } else {
            format!("{}-{}", self.start.year, self.end.year)
        };

        DateBadge { range, year }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_and_known_dates_convert_to_days() {
        assert_eq!(CalendarDate::new(1970, 1, 1).days_since_epoch(), 0);
        assert_eq!(CalendarDate::new(2000, 3, 1).days_since_epoch(), 11_017);
        assert_eq!(CalendarDate::new(2025, 12, 3).days_since_epoch(), 20_425);
        assert_eq!(CalendarDate::new(1969, 12, 31).days_since_epoch(), -1);
    }

    #[test]
    fn parse_accepts_real_days_only() {
        assert_eq!(
            CalendarDate::parse(" 2025-12-03 "),
            Some(CalendarDate::new(2025, 12, 3))
        );
        assert_eq!(
            CalendarDate::parse("2024-02-29"),
            Some(CalendarDate::new(2024, 2, 29))
        );
        assert_eq!(CalendarDate::parse("2025-02-29"), None);
        assert_eq!(CalendarDate::parse("2025-13-01"), None);
        assert_eq!(CalendarDate::parse("2025-12"), None);
        assert_eq!(CalendarDate::parse("december"), None);
    }

    #[test]
    fn parse_rejects_years_outside_four_digits() {
        assert_eq!(CalendarDate::parse("300000000-01-01"), None);
        assert_eq!(CalendarDate::parse("1969-12-31"), None);
        assert_eq!(CalendarDate::parse("+2025-12-03"), None);
        assert_eq!(CalendarDate::parse("925-12-03"), None);
        assert_eq!(
            CalendarDate::parse("9999-12-31"),
            Some(CalendarDate::new(9999, 12, 31))
        );
    }

    #[test]
    fn far_dates_saturate_instead_of_overflowing() {
        let window = FestivalWindow {
            start: CalendarDate::new(300_000_000, 1, 1),
            end: CalendarDate::new(300_000_000, 1, 1),
        };

        assert_eq!(window.starts_at_ms(), i64::MAX);
        assert_eq!(window.ends_at_ms(), i64::MAX);
        assert!(matches!(
            window.phase(1_760_000_000_000),
            FestivalPhase::Upcoming(_)
        ));
    }

    #[test]
    fn same_month_in_different_years_names_both_months() {
        let window = FestivalWindow {
            start: CalendarDate::new(2025, 12, 3),
            end: CalendarDate::new(2026, 12, 6),
        };

        let badge = window.badge();
        assert_eq!(badge.range, "DEC 3-DEC 6");
        assert_eq!(badge.year, "2025-2026");
    }

    #[test]
    fn default_badge_reads_dec_3_6_2025() {
        let badge = FestivalWindow::default().badge();
        assert_eq!(badge.range, "DEC 3-6");
        assert_eq!(badge.year, "2025");
    }

    #[test]
    fn cross_month_badge_names_both_months() {
        let window = FestivalWindow {
            start: CalendarDate::new(2025, 11, 30),
            end: CalendarDate::new(2025, 12, 2),
        };
        assert_eq!(window.badge().range, "NOV 30-DEC 2");
        assert_eq!(window.badge().year, "2025");
    }

    #[test]
    fn countdown_splits_remaining_time() {
        let window = FestivalWindow::default();
        let remaining = 2 * MILLIS_PER_DAY + 3 * 3_600_000 + 4 * 60_000 + 5_000;

        assert_eq!(
            window.phase(window.starts_at_ms() - remaining),
            FestivalPhase::Upcoming(Countdown {
                days: 2,
                hours: 3,
                minutes: 4,
                seconds: 5,
            })
        );
    }

    #[test]
    fn partial_seconds_round_up() {
        assert_eq!(
            Countdown::from_millis(1),
            Countdown {
                days: 0,
                hours: 0,
                minutes: 0,
                seconds: 1,
            }
        );
    }

    #[test]
    fn phase_is_live_for_the_whole_last_day() {
        let window = FestivalWindow::default();

        assert_eq!(window.phase(window.starts_at_ms()), FestivalPhase::Live);
        assert_eq!(
            window.phase(CalendarDate::new(2025, 12, 6).midnight_utc_millis() + 23 * 3_600_000),
            FestivalPhase::Live
        );
        assert_eq!(window.phase(window.ends_at_ms()), FestivalPhase::Ended);
    }
}
