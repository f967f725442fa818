//! Season codes and the months each season allows.

/// A meteorological season as encoded by the prediction service.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];

    /// Parse the form code ("1".."4"). Anything else has no season.
    pub fn from_code(code: &str) -> Option<Season> {
        match code {
            "1" => Some(Season::Spring),
            "2" => Some(Season::Summer),
            "3" => Some(Season::Autumn),
            "4" => Some(Season::Winter),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Season::Spring => "1",
            Season::Summer => "2",
            Season::Autumn => "3",
            Season::Winter => "4",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Season::Spring => "Весна",
            Season::Summer => "Лето",
            Season::Autumn => "Осень",
            Season::Winter => "Зима",
        }
    }

    /// Months of the season in calendar display order. Winter wraps the year.
    pub fn months(&self) -> &'static [u8] {
        match self {
            Season::Spring => &[3, 4, 5],
            Season::Summer => &[6, 7, 8],
            Season::Autumn => &[9, 10, 11],
            Season::Winter => &[12, 1, 2],
        }
    }
}

/// Months selectable for the given season field value.
///
/// Returns an empty slice for an empty or unknown season.
pub fn available_months(season: &str) -> &'static [u8] {
    Season::from_code(season).map(|s| s.months()).unwrap_or(&[])
}

/// Russian month name (nominative, lower case) for a month number 1-12.
pub fn month_name(month: u8) -> Option<&'static str> {
    const NAMES: [&str; 12] = [
        "январь", "февраль", "март", "апрель", "май", "июнь", "июль", "август", "сентябрь",
        "октябрь", "ноябрь", "декабрь",
    ];
    NAMES.get(usize::from(month).checked_sub(1)?).copied()
}
