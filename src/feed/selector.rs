use super::models::CalendarEvent;
use chrono::{DateTime, Utc};

/// Select the upcoming events to display.
///
/// "Today" is the UTC calendar day of `now`; events are kept if their start
/// day is today or later, ordered ascending by start instant (stable, so
/// feed order breaks ties) and truncated to `limit`. An empty result is a
/// valid "no events scheduled" outcome.
pub fn select_upcoming(
    events: Vec<CalendarEvent>,
    now: DateTime<Utc>,
    limit: usize,
) -> Vec<CalendarEvent> {
    let today = now.date_naive();

    let mut upcoming: Vec<CalendarEvent> = events
        .into_iter()
        .filter(|event| event.start.day() >= today)
        .collect();

    upcoming.sort_by_key(|event| event.start.instant());
    upcoming.truncate(limit);

    upcoming
}
