use std::collections::HashSet;

const OPENING_MINUTE: u32 = 11 * 60;
const LAST_SEATING_MINUTE: u32 = 22 * 60;
const SLOT_LENGTH_MINUTES: usize = 30;

/// Bookable time labels for a service day, "11:00" through "22:00".
///
/// Every day offers the same catalog, so the date is not inspected.
pub fn time_slots(_date: &str) -> Vec<String> {
    (OPENING_MINUTE..=LAST_SEATING_MINUTE)
        .step_by(SLOT_LENGTH_MINUTES)
        .map(|minute| format!("{}:{:02}", minute / 60, minute % 60))
        .collect()
}

/// Catalog entries for `date` that are not in `booked_times`, in catalog order.
pub fn available_slots(date: &str, booked_times: &HashSet<String>) -> Vec<String> {
    time_slots(date)
        .into_iter()
        .filter(|slot| !booked_times.contains(slot))
        .collect()
}
