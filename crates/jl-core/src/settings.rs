//! Global library settings.
//!
//! [`Settings`] holds the **reference date**, the date treated as "today"
//! when marking the current day in month grids or building
//! `JalaliDate::today()`.  It is a process-wide singleton accessed via a
//! `std::sync::OnceLock`.
//!
//! When no reference date is set, the local system date is used.  Code that
//! pins the reference date temporarily should use [`ScopedReferenceDate`],
//! which restores the previous value when dropped.

use std::sync::{Mutex, OnceLock, PoisonError};

use chrono::{Local, NaiveDate};

/// Process-wide settings used by the jalali library.
pub struct Settings {
    reference_date: Mutex<Option<NaiveDate>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            reference_date: Mutex::new(None),
        })
    }

    /// Return the pinned reference date, or `None` if "today" follows the
    /// system clock.
    pub fn reference_date(&self) -> Option<NaiveDate> {
        *self
            .reference_date
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Pin the reference date.
    pub fn set_reference_date(&self, date: NaiveDate) {
        self.replace(Some(date));
    }

    /// Clear the reference date, resetting it to "use the system clock".
    pub fn reset_reference_date(&self) {
        self.replace(None);
    }

    /// The date considered "today": the pinned reference date if any,
    /// otherwise the local system date.
    pub fn today(&self) -> NaiveDate {
        self.reference_date()
            .unwrap_or_else(|| Local::now().date_naive())
    }

    fn replace(&self, value: Option<NaiveDate>) -> Option<NaiveDate> {
        let mut guard = self
            .reference_date
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, value)
    }
}

/// RAII guard that pins the reference date and restores the previous value
/// on drop.
///
/// ```
/// use chrono::NaiveDate;
/// use jl_core::{ScopedReferenceDate, Settings};
///
/// let nowruz = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
/// {
///     let _guard = ScopedReferenceDate::new(nowruz);
///     assert_eq!(Settings::instance().today(), nowruz);
/// }
/// ```
#[must_use = "the reference date is restored as soon as the guard is dropped"]
pub struct ScopedReferenceDate {
    previous: Option<NaiveDate>,
}

impl ScopedReferenceDate {
    /// Pin `date` as the reference date until the guard is dropped.
    pub fn new(date: NaiveDate) -> Self {
        let previous = Settings::instance().replace(Some(date));
        Self { previous }
    }
}

impl Drop for ScopedReferenceDate {
    fn drop(&mut self) {
        Settings::instance().replace(self.previous);
    }
}
