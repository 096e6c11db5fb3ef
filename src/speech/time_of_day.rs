//! Coarse, easy to remember names for the hours of a day

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    EarlyMorning,
    Morning,
    MidDay,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Classify a local hour of the day (24-hour clock).
    ///
    /// Each band includes its lower bound, so 6, 11, 14, 18 and 21 start the
    /// next band. Hours outside 0..=23 land in the first or last band.
    #[must_use]
    pub fn from_hour(hour: i64) -> Self {
        match hour {
            h if h < 6 => TimeOfDay::EarlyMorning,
            h if h < 11 => TimeOfDay::Morning,
            h if h < 14 => TimeOfDay::MidDay,
            h if h < 18 => TimeOfDay::Afternoon,
            h if h < 21 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }

    #[must_use]
    pub fn phrase(self) -> &'static str {
        match self {
            TimeOfDay::EarlyMorning => "early morning",
            TimeOfDay::Morning => "this morning",
            TimeOfDay::MidDay => "mid day",
            TimeOfDay::Afternoon => "this afternoon",
            TimeOfDay::Evening => "this evening",
            TimeOfDay::Night => "tonight",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phrase())
    }
}

/// Phrase for an hour of the day, e.g. `fuzzy_time(19) == "this evening"`
#[must_use]
pub fn fuzzy_time(hour: i64) -> &'static str {
    TimeOfDay::from_hour(hour).phrase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(3, "early morning")]
    #[case(7, "this morning")]
    #[case(11, "mid day")]
    #[case(15, "this afternoon")]
    #[case(19, "this evening")]
    #[case(23, "tonight")]
    fn test_fuzzy_time(#[case] hour: i64, #[case] phrase: &str) {
        assert_eq!(fuzzy_time(hour), phrase);
    }

    #[rstest]
    #[case(5, TimeOfDay::EarlyMorning)]
    #[case(6, TimeOfDay::Morning)]
    #[case(10, TimeOfDay::Morning)]
    #[case(11, TimeOfDay::MidDay)]
    #[case(14, TimeOfDay::Afternoon)]
    #[case(18, TimeOfDay::Evening)]
    #[case(21, TimeOfDay::Night)]
    fn test_band_boundaries(#[case] hour: i64, #[case] expected: TimeOfDay) {
        assert_eq!(TimeOfDay::from_hour(hour), expected);
    }

    #[test]
    fn test_out_of_range_hours() {
        assert_eq!(TimeOfDay::from_hour(-1), TimeOfDay::EarlyMorning);
        assert_eq!(TimeOfDay::from_hour(42), TimeOfDay::Night);
    }

    #[test]
    fn test_display_matches_phrase() {
        assert_eq!(TimeOfDay::MidDay.to_string(), "mid day");
    }
}
