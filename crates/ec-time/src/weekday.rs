//! `Weekday` — day-of-week enum.

/// Day of the week.
///
/// Variants are numbered 0–6 (Sunday = 0, Saturday = 6) so that the index
/// doubles as the column of a Sunday-first month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Weekday {
    /// Sunday (0).
    Sunday = 0,
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
}

impl Weekday {
    /// All weekdays in grid order, Sunday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Construct from the index (0 = Sunday … 6 = Saturday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_index(n: u8) -> Option<Self> {
        Self::ALL.get(n as usize).copied()
    }

    /// Weekday reached after counting `days` from index zero, wrapping in
    /// either direction.
    pub fn from_days(days: i64) -> Self {
        Self::ALL[days.rem_euclid(7) as usize]
    }

    /// Return the index (0 = Sunday … 6 = Saturday).
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Advance the weekday by `days`, which may be negative.
    pub fn advance(self, days: i64) -> Self {
        Self::from_days(self.index() as i64 + days)
    }

    /// Return the full Amharic name (`"እሁድ"`, `"ሰኞ"`, …).
    pub fn amharic_name(&self) -> &'static str {
        match self {
            Weekday::Sunday => "እሁድ",
            Weekday::Monday => "ሰኞ",
            Weekday::Tuesday => "ማክሰኞ",
            Weekday::Wednesday => "ረቡዕ",
            Weekday::Thursday => "ሐሙስ",
            Weekday::Friday => "አርብ",
            Weekday::Saturday => "ቅዳሜ",
        }
    }

    /// Return the English name.
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<Weekday> for u8 {
    fn from(w: Weekday) -> u8 {
        w as u8
    }
}
