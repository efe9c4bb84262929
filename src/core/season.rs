use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

/// Meteorological seasons in Portugal (northern hemisphere).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    /// `month0` is zero-based: January = 0, December = 11.
    /// Values past 11 wrap around.
    pub const fn from_month0(month0: u32) -> Self {
        match month0 % 12 {
            11 | 0 | 1 => Self::Winter,
            2..=4 => Self::Spring,
            5..=7 => Self::Summer,
            _ => Self::Autumn,
        }
    }

    pub fn of(date: NaiveDate) -> Self {
        Self::from_month0(date.month0())
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Winter => "Winter",
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Autumn => "Autumn",
        }
    }

    /// Packing tip for the travel card.
    pub const fn tip(self) -> &'static str {
        match self {
            Self::Winter => "Pack thermal clothing and an umbrella.",
            Self::Spring => "Mild weather, great for walking around outdoors.",
            Self::Summer => "Sunscreen and light clothes are essential.",
            Self::Autumn => "It can get windy, bring a windbreaker.",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_twelve_months() {
        let expected = [
            Season::Winter,
            Season::Winter,
            Season::Spring,
            Season::Spring,
            Season::Spring,
            Season::Summer,
            Season::Summer,
            Season::Summer,
            Season::Autumn,
            Season::Autumn,
            Season::Autumn,
            Season::Winter,
        ];
        for (month0, season) in expected.iter().enumerate() {
            assert_eq!(Season::from_month0(month0 as u32), *season, "month {month0}");
        }
    }

    #[test]
    fn test_of_date() {
        let july = NaiveDate::from_ymd_opt(2026, 7, 14).unwrap();
        assert_eq!(Season::of(july), Season::Summer);
        let december = NaiveDate::from_ymd_opt(2026, 12, 1).unwrap();
        assert_eq!(Season::of(december), Season::Winter);
    }
}
