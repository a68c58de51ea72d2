use chrono::{DateTime, Local, LocalResult, NaiveTime};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Hour of the local civil day at which the trading session closes and
/// good-for-day orders are pruned.
pub(crate) const SESSION_CLOSE_HOUR: u32 = 16;

/// Returns the current time in milliseconds since UNIX epoch
pub fn current_time_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

/// Time from `now` until the next session close: today at
/// [`SESSION_CLOSE_HOUR`] if that is still ahead, otherwise tomorrow.
pub(crate) fn until_next_session_close(now: DateTime<Local>) -> Duration {
    let close = NaiveTime::from_hms_opt(SESSION_CLOSE_HOUR, 0, 0).expect("valid close time");

    let mut date = now.date_naive();
    if now.time() >= close {
        date = date.succ_opt().expect("calendar overflow");
    }

    let target = match date.and_time(close).and_local_timezone(Local) {
        LocalResult::Single(target) => target,
        LocalResult::Ambiguous(earliest, _) => earliest,
        // The close falls inside a DST gap; wait a full day instead.
        LocalResult::None => now + chrono::Duration::hours(24),
    };

    (target - now).to_std().unwrap_or(Duration::ZERO)
}
