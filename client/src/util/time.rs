//! Clock and timer helpers that work in the browser and on the server.
//!
//! `wasm32-unknown-unknown` has no system clock, so the hydrate build reads
//! the JS `Date` instead.

use time::Date;

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }
}

/// Today's date in the user's local time zone (UTC on the server).
pub fn today() -> Date {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        let month = u8::try_from(now.get_month() + 1).ok().and_then(|m| time::Month::try_from(m).ok());
        let day = u8::try_from(now.get_date()).ok();
        let year = i32::try_from(now.get_full_year()).ok();
        match (year, month, day) {
            (Some(year), Some(month), Some(day)) => {
                Date::from_calendar_date(year, month, day).unwrap_or(Date::MIN)
            }
            _ => Date::MIN,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().date()
    }
}

/// Today as `YYYY-MM-DD`.
pub fn today_text() -> String {
    content::filters::format_date(today())
}

/// Resolve after `ms` milliseconds. Resolves immediately off the browser.
pub async fn sleep_ms(ms: u32) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ms;
    }
}
