//! `JalaliMonth`: month-of-year enum.

use crate::leap::is_leap_year;

/// Persian month names, Farvardin first.
pub const MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Month of the Jalali year.
///
/// Variants are numbered 1–12 (Farvardin = 1, Esfand = 12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum JalaliMonth {
    /// Farvardin (1).
    Farvardin = 1,
    /// Ordibehesht (2).
    Ordibehesht = 2,
    /// Khordad (3).
    Khordad = 3,
    /// Tir (4).
    Tir = 4,
    /// Mordad (5).
    Mordad = 5,
    /// Shahrivar (6).
    Shahrivar = 6,
    /// Mehr (7).
    Mehr = 7,
    /// Aban (8).
    Aban = 8,
    /// Azar (9).
    Azar = 9,
    /// Dey (10).
    Dey = 10,
    /// Bahman (11).
    Bahman = 11,
    /// Esfand (12).
    Esfand = 12,
}

impl JalaliMonth {
    /// All twelve months in calendar order.
    pub const ALL: [JalaliMonth; 12] = [
        JalaliMonth::Farvardin,
        JalaliMonth::Ordibehesht,
        JalaliMonth::Khordad,
        JalaliMonth::Tir,
        JalaliMonth::Mordad,
        JalaliMonth::Shahrivar,
        JalaliMonth::Mehr,
        JalaliMonth::Aban,
        JalaliMonth::Azar,
        JalaliMonth::Dey,
        JalaliMonth::Bahman,
        JalaliMonth::Esfand,
    ];

    /// Construct from a number (1 = Farvardin … 12 = Esfand).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(JalaliMonth::Farvardin),
            2 => Some(JalaliMonth::Ordibehesht),
            3 => Some(JalaliMonth::Khordad),
            4 => Some(JalaliMonth::Tir),
            5 => Some(JalaliMonth::Mordad),
            6 => Some(JalaliMonth::Shahrivar),
            7 => Some(JalaliMonth::Mehr),
            8 => Some(JalaliMonth::Aban),
            9 => Some(JalaliMonth::Azar),
            10 => Some(JalaliMonth::Dey),
            11 => Some(JalaliMonth::Bahman),
            12 => Some(JalaliMonth::Esfand),
            _ => None,
        }
    }

    /// Return the 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Number of days in this month of `year`.
    ///
    /// The first six months have 31 days, the next five 30, and Esfand has
    /// 30 days in a leap year and 29 otherwise.
    pub fn days(&self, year: i32) -> u8 {
        match self.number() {
            1..=6 => 31,
            7..=11 => 30,
            _ if is_leap_year(year) => 30,
            _ => 29,
        }
    }

    /// Zero-based day-of-year index of the first day of this month.
    pub fn first_day_offset(&self) -> u16 {
        let m = u16::from(self.number());
        if m <= 7 {
            (m - 1) * 31
        } else {
            186 + (m - 7) * 30
        }
    }

    /// Return the Latin transliteration (`"Farvardin"`, `"Ordibehesht"`, …).
    pub fn long_name(&self) -> &'static str {
        match self {
            JalaliMonth::Farvardin => "Farvardin",
            JalaliMonth::Ordibehesht => "Ordibehesht",
            JalaliMonth::Khordad => "Khordad",
            JalaliMonth::Tir => "Tir",
            JalaliMonth::Mordad => "Mordad",
            JalaliMonth::Shahrivar => "Shahrivar",
            JalaliMonth::Mehr => "Mehr",
            JalaliMonth::Aban => "Aban",
            JalaliMonth::Azar => "Azar",
            JalaliMonth::Dey => "Dey",
            JalaliMonth::Bahman => "Bahman",
            JalaliMonth::Esfand => "Esfand",
        }
    }

    /// Return the Persian name.
    pub fn localized_name(&self) -> &'static str {
        MONTH_NAMES[self.number() as usize - 1]
    }
}

impl std::fmt::Display for JalaliMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.long_name())
    }
}

impl From<JalaliMonth> for u8 {
    fn from(m: JalaliMonth) -> u8 {
        m as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        for n in 1..=12u8 {
            let m = JalaliMonth::from_number(n).unwrap();
            assert_eq!(m.number(), n);
        }
    }

    #[test]
    fn out_of_range() {
        assert!(JalaliMonth::from_number(0).is_none());
        assert!(JalaliMonth::from_number(13).is_none());
    }

    #[test]
    fn month_lengths() {
        assert_eq!(JalaliMonth::Shahrivar.days(1403), 31);
        assert_eq!(JalaliMonth::Mehr.days(1403), 30);
        assert_eq!(JalaliMonth::Esfand.days(1403), 30);
        assert_eq!(JalaliMonth::Esfand.days(1404), 29);
    }

    #[test]
    fn offsets_accumulate_lengths() {
        let mut expected = 0u16;
        for n in 1..=12u8 {
            let m = JalaliMonth::from_number(n).unwrap();
            assert_eq!(m.first_day_offset(), expected, "offset of {m}");
            expected += u16::from(m.days(1403));
        }
        assert_eq!(expected, 366);
    }

    #[test]
    fn names() {
        assert_eq!(JalaliMonth::Farvardin.localized_name(), "فروردین");
        assert_eq!(JalaliMonth::Esfand.localized_name(), "اسفند");
        assert_eq!(JalaliMonth::Mehr.to_string(), "Mehr");
    }
}
