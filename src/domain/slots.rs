use chrono::{Duration, Local, NaiveTime, Timelike};

const SLOT_MINUTES: u32 = 15;
const MINUTES_PER_DAY: u32 = 24 * 60;

/// Pickup windows for the next two hours in quarter-hour steps, starting at
/// the next quarter-hour boundary at or after `now`.
///
/// When `now` had to be rounded up, the first (immediately due) slot is
/// dropped, so the result holds 7 entries instead of 8.
pub fn pickup_slots(now: NaiveTime) -> Vec<String> {
    let mut start_hour = now.hour();
    let mut start_minute = now.minute().div_ceil(SLOT_MINUTES) * SLOT_MINUTES;

    if start_minute == 60 {
        start_minute = 0;
        start_hour = (start_hour + 1) % 24;
    }

    let start = start_hour * 60 + start_minute;

    (0..2u32)
        .flat_map(|h| (0..4u32).map(move |m| (h, m)))
        .filter(|&(h, m)| !(h == 0 && m == 0 && start_minute > 0))
        .map(|(h, m)| {
            // Offsets roll 45 -> 00 into the next hour instead of keeping `start_hour + h`.
            let at = (start + h * 60 + m * SLOT_MINUTES) % MINUTES_PER_DAY;
            format_slot(at / 60, at % 60)
        })
        .collect()
}

/// Slots for the current local wall-clock time.
pub fn pickup_slots_now() -> Vec<String> {
    pickup_slots(Local::now().time())
}

/// Slots a submission made at `now` may name: the current ones plus those
/// offered a quarter-hour earlier, so a form opened just before a boundary
/// still submits.
pub fn accepted_pickup_slots(now: NaiveTime) -> Vec<String> {
    let mut slots = pickup_slots(now - Duration::minutes(i64::from(SLOT_MINUTES)));
    for slot in pickup_slots(now) {
        if !slots.contains(&slot) {
            slots.push(slot);
        }
    }
    slots
}

pub fn accepted_pickup_slots_now() -> Vec<String> {
    accepted_pickup_slots(Local::now().time())
}

fn format_slot(hour: u32, minute: u32) -> String {
    let period = if hour < 12 { "AM" } else { "PM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{display_hour}:{minute:02} {period}")
}
