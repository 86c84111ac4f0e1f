// ============================================================================
// BROWSER - window dialogs and dates
// ============================================================================

use web_sys::window;

pub fn alert(message: &str) {
    if let Some(win) = window() {
        let _ = win.alert_with_message(message);
    }
}

/// `false` when the window is unavailable
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Today (UTC) as `YYYY-MM-DD`, used as the booking date minimum
pub fn today_iso() -> String {
    today().format("%Y-%m-%d").to_string()
}

pub fn today() -> chrono::NaiveDate {
    chrono::Utc::now().date_naive()
}

/// Milliseconds with sub-millisecond resolution: `performance.now()` in the
/// browser, wall clock elsewhere
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    window()
        .and_then(|win| win.performance())
        .map_or_else(wall_clock_ms, |performance| performance.now())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    wall_clock_ms()
}

fn wall_clock_ms() -> f64 {
    chrono::Utc::now().timestamp_micros() as f64 / 1000.0
}
