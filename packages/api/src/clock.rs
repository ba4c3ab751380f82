//! Platform-aware wall clock.
//!
//! Uses `js_sys::Date` on wasm and `std::time::SystemTime` / `chrono::Local`
//! on native, so token expiry and "is this reservation in the past" checks
//! read the same clock the browser shows.

use chrono::NaiveDateTime;

/// Seconds since the Unix epoch.
#[cfg(target_arch = "wasm32")]
pub fn now_unix() -> i64 {
    (js_sys::Date::now() / 1000.0) as i64
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_unix() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

/// The user's local date and time, to the minute.
#[cfg(target_arch = "wasm32")]
pub fn now_local() -> NaiveDateTime {
    let date = js_sys::Date::new_0();
    chrono::NaiveDate::from_ymd_opt(
        date.get_full_year() as i32,
        date.get_month() + 1,
        date.get_date(),
    )
    .and_then(|d| d.and_hms_opt(date.get_hours(), date.get_minutes(), 0))
    .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_local() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Clock sources used by the gateway, swappable in tests.
#[derive(Clone, Copy, Debug)]
pub struct Clock {
    pub unix: fn() -> i64,
    pub local: fn() -> NaiveDateTime,
}

impl Default for Clock {
    fn default() -> Self {
        Self {
            unix: now_unix,
            local: now_local,
        }
    }
}
