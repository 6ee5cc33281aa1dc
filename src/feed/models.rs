use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Start or end of a calendar event: either a whole calendar day
/// (all-day events carry no time of day) or an absolute UTC instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventTime {
    AllDay(NaiveDate),
    Timed(DateTime<Utc>),
}

impl EventTime {
    /// The calendar day this time falls on, with no timezone conversion
    pub fn day(&self) -> NaiveDate {
        match self {
            EventTime::AllDay(date) => *date,
            EventTime::Timed(instant) => instant.date_naive(),
        }
    }

    /// Instant used for chronological ordering; all-day events order at
    /// midnight UTC of their day
    pub fn instant(&self) -> DateTime<Utc> {
        match self {
            EventTime::AllDay(date) => Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)),
            EventTime::Timed(instant) => *instant,
        }
    }
}

/// A single event extracted from the calendar feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub start: EventTime,
    pub end: Option<EventTime>,
    pub summary: String,
    pub description: Option<String>,
    pub location: Option<String>,
}

/// Outcome of a refresh cycle as seen by the rendering layer.
/// An empty `Ready` list means "no events scheduled" and must be presented
/// differently from `Unavailable`, which means the feed could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedStatus {
    Ready(Vec<CalendarEvent>),
    Unavailable,
}
