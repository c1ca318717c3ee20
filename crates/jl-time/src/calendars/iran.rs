//! Iran official calendar.

use crate::calendar::{Holiday, HolidayCalendar, HolidayCategory};

/// Official holidays on fixed solar dates.
///
/// Holidays:
/// * Nowruz (Farvardin 1–4)
/// * Islamic Republic Day (Farvardin 12)
/// * Nature Day, Sizdah Bedar (Farvardin 13)
/// * Demise of Imam Khomeini (Khordad 14)
/// * Khordad 15 Uprising (Khordad 15)
/// * Revolution Victory Day (Bahman 22)
/// * Oil Nationalization Day (Esfand 29)
///
/// Religious holidays follow the lunar Hijri calendar and move through the
/// solar year; they are not part of this table.
pub static HOLIDAYS: [Holiday; 7] = [
    Holiday {
        name: "Nowruz",
        localized_name: "نوروز",
        month: 1,
        day: 1,
        duration_days: 4,
        category: HolidayCategory::National,
        description: "Persian New Year",
    },
    Holiday {
        name: "Islamic Republic Day",
        localized_name: "روز جمهوری اسلامی",
        month: 1,
        day: 12,
        duration_days: 1,
        category: HolidayCategory::National,
        description: "Anniversary of the 1979 referendum",
    },
    Holiday {
        name: "Nature Day",
        localized_name: "روز طبیعت",
        month: 1,
        day: 13,
        duration_days: 1,
        category: HolidayCategory::National,
        description: "Sizdah Bedar, the thirteenth day of Nowruz",
    },
    Holiday {
        name: "Demise of Imam Khomeini",
        localized_name: "رحلت امام خمینی",
        month: 3,
        day: 14,
        duration_days: 1,
        category: HolidayCategory::National,
        description: "Anniversary of the death of Ruhollah Khomeini",
    },
    Holiday {
        name: "Khordad 15 Uprising",
        localized_name: "قیام ۱۵ خرداد",
        month: 3,
        day: 15,
        duration_days: 1,
        category: HolidayCategory::National,
        description: "Anniversary of the 1963 uprising",
    },
    Holiday {
        name: "Revolution Victory Day",
        localized_name: "پیروزی انقلاب اسلامی",
        month: 11,
        day: 22,
        duration_days: 1,
        category: HolidayCategory::National,
        description: "Anniversary of the 1979 revolution",
    },
    Holiday {
        name: "Oil Nationalization Day",
        localized_name: "ملی شدن صنعت نفت",
        month: 12,
        day: 29,
        duration_days: 1,
        category: HolidayCategory::National,
        description: "Anniversary of the 1951 nationalization of the oil industry",
    },
];

/// Iran official calendar: Friday weekend plus [`HOLIDAYS`].
#[derive(Debug, Clone, Copy, Default)]
pub struct IranianCalendar;

impl HolidayCalendar for IranianCalendar {
    fn name(&self) -> &str {
        "Iran"
    }

    fn holidays(&self) -> &[Holiday] {
        &HOLIDAYS
    }
}
