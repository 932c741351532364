use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MONTH_ABBREVIATIONS, MONTH_NAMES,
};

/// Returns true if the year is a leap year under the Gregorian rule:
/// divisible by 4, except century years must also be divisible by 400.
pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Returns the number of days in the given month of the given year.
pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Returns the full English name for a month number in `1..=12`.
pub(crate) const fn month_name(month: u8) -> &'static str {
    debug_assert!(month != 0 && month <= MAX_MONTH);
    MONTH_NAMES[month as usize]
}

/// Resolves a three-letter month abbreviation (case-insensitive) to its
/// 1-based month number. Returns `None` for anything not in
/// [`MONTH_ABBREVIATIONS`].
pub fn month_from_abbreviation(token: &str) -> Option<u8> {
    MONTH_ABBREVIATIONS
        .iter()
        .position(|abbr| abbr.eq_ignore_ascii_case(token))
        .map(|position| position as u8 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: u16,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2020,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2024,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2023,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2100,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
            TestCase {
                year: 2400,
                is_leap: true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({}): expected {}",
                case.year,
                case.description,
                if case.is_leap {
                    "leap year"
                } else {
                    "not leap year"
                }
            );
        }
    }

    #[test]
    fn test_days_in_month_31_day_months() {
        for month in [1, 3, 5, 7, 8, 10, 12] {
            assert_eq!(
                days_in_month(2023, month),
                31,
                "Month {month} should have 31 days"
            );
        }
    }

    #[test]
    fn test_days_in_month_30_day_months() {
        for month in [4, 6, 9, 11] {
            assert_eq!(
                days_in_month(2023, month),
                30,
                "Month {month} should have 30 days"
            );
        }
    }

    #[test]
    fn test_days_in_month_february() {
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2000, 2), 29, "Century year divisible by 400");
        assert_eq!(
            days_in_month(1900, 2),
            28,
            "Century year not divisible by 400"
        );
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(2), "February");
        assert_eq!(month_name(8), "August");
        assert_eq!(month_name(12), "December");
    }

    #[test]
    fn test_month_from_abbreviation() {
        for (index, abbr) in MONTH_ABBREVIATIONS.iter().enumerate() {
            assert_eq!(
                month_from_abbreviation(abbr),
                Some(index as u8 + 1),
                "Abbreviation {abbr} should map to month {}",
                index + 1
            );
        }
    }

    #[test]
    fn test_month_from_abbreviation_case_insensitive() {
        assert_eq!(month_from_abbreviation("aug"), Some(8));
        assert_eq!(month_from_abbreviation("Aug"), Some(8));
        assert_eq!(month_from_abbreviation("jAn"), Some(1));
    }

    #[test]
    fn test_month_from_abbreviation_unknown() {
        assert_eq!(month_from_abbreviation("AUGUST"), None);
        assert_eq!(month_from_abbreviation("XYZ"), None);
        assert_eq!(month_from_abbreviation(""), None);
    }
}
