use web_sys::window;
use shared::constants::WHEEL_TIMING_STORAGE_KEY;
use shared::shared_wheel_game::WheelTiming;

/// Spin timings, optionally overridden by a JSON object stored under
/// `wheel_timing` in local storage, e.g. `{"spin_duration_ms": 1500}`.
pub fn get_wheel_timing() -> WheelTiming {
    let stored = window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(WHEEL_TIMING_STORAGE_KEY).ok().flatten());

    match stored {
        Some(raw) => match serde_json::from_str::<WheelTiming>(&raw) {
            Ok(timing) => {
                log::info!("Using wheel timing override: {:?}", timing);
                timing.sanitized()
            }
            Err(e) => {
                log::warn!("Ignoring malformed {} override: {}", WHEEL_TIMING_STORAGE_KEY, e);
                WheelTiming::default()
            }
        },
        None => WheelTiming::default(),
    }
}
