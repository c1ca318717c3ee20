//! `Weekday`: day-of-week enum.

/// Persian weekday names, Sunday first (matching [`Weekday::number`]).
pub const WEEKDAY_NAMES: [&str; 7] = [
    "یکشنبه",
    "دوشنبه",
    "سه‌شنبه",
    "چهارشنبه",
    "پنجشنبه",
    "جمعه",
    "شنبه",
];

/// Day of the week.
///
/// Variants are numbered 0–6 (Sunday = 0, Saturday = 6), the numbering of the
/// host date library's `num_days_from_sunday`.  Persian week layouts start on
/// Saturday; see [`Weekday::saturday_first_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Weekday {
    /// Sunday (0), Yekshanbe.
    Sunday = 0,
    /// Monday (1), Doshanbe.
    Monday = 1,
    /// Tuesday (2), Seshanbe.
    Tuesday = 2,
    /// Wednesday (3), Chaharshanbe.
    Wednesday = 3,
    /// Thursday (4), Panjshanbe.
    Thursday = 4,
    /// Friday (5), Jome.
    Friday = 5,
    /// Saturday (6), Shanbe.
    Saturday = 6,
}

impl Weekday {
    /// Construct from the Sunday-based number (0 = Sunday … 6 = Saturday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            0 => Some(Weekday::Sunday),
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            _ => None,
        }
    }

    /// Return the Sunday-based number (0 = Sunday … 6 = Saturday).
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Column of this weekday in a Saturday-first week (Saturday = 0).
    pub fn saturday_first_index(&self) -> u8 {
        (self.number() + 1) % 7
    }

    /// Return the Persian name.
    pub fn localized_name(&self) -> &'static str {
        WEEKDAY_NAMES[self.number() as usize]
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(w: chrono::Weekday) -> Self {
        match w {
            chrono::Weekday::Sun => Weekday::Sunday,
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        };
        write!(f, "{name}")
    }
}
