use chrono::{NaiveDate, TimeZone, Utc};
use eventfeed::error::FeedResult;
use eventfeed::feed::models::{CalendarEvent, EventTime, FeedStatus};
use eventfeed::feed::{parser, selector};

/// Mock implementation of the feed handle for testing without the network
#[derive(Debug, Clone)]
pub struct MockFeedHandle {
    status: FeedStatus,
}

impl MockFeedHandle {
    /// Create a new mock handle with predefined events
    pub fn with_events() -> Self {
        let events = vec![
            CalendarEvent {
                start: EventTime::Timed(Utc.with_ymd_and_hms(2025, 7, 1, 10, 0, 0).unwrap()),
                end: Some(EventTime::Timed(
                    Utc.with_ymd_and_hms(2025, 7, 1, 11, 0, 0).unwrap(),
                )),
                summary: "Test Event 1".to_string(),
                description: Some("Test Description 1".to_string()),
                location: Some("Main Hall".to_string()),
            },
            CalendarEvent {
                start: EventTime::AllDay(NaiveDate::from_ymd_opt(2025, 7, 2).unwrap()),
                end: None,
                summary: "Test Event 2".to_string(),
                description: None,
                location: None,
            },
        ];

        Self {
            status: FeedStatus::Ready(events),
        }
    }

    /// Create a mock handle reporting an unavailable feed
    pub fn unavailable() -> Self {
        Self {
            status: FeedStatus::Unavailable,
        }
    }

    /// Create a mock handle with a legitimately empty calendar
    pub fn empty() -> Self {
        Self {
            status: FeedStatus::Ready(Vec::new()),
        }
    }

    /// Get the latest status from the mock
    pub async fn snapshot(&self) -> FeedResult<FeedStatus> {
        Ok(self.status.clone())
    }
}

/// Test that demonstrates how to use the mock
#[tokio::test]
async fn test_feed_mock() {
    let mock_handle = MockFeedHandle::with_events();

    let status = mock_handle.snapshot().await.unwrap();
    let events = match status {
        FeedStatus::Ready(events) => events,
        FeedStatus::Unavailable => panic!("expected a ready feed"),
    };

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].summary, "Test Event 1");
    assert_eq!(events[1].summary, "Test Event 2");
}

/// The rendering layer must be able to tell "feed broken" from "no events"
#[tokio::test]
async fn test_unavailable_is_distinct_from_empty() {
    let broken = MockFeedHandle::unavailable().snapshot().await.unwrap();
    let quiet = MockFeedHandle::empty().snapshot().await.unwrap();

    assert_eq!(broken, FeedStatus::Unavailable);
    assert_eq!(quiet, FeedStatus::Ready(Vec::new()));
    assert_ne!(broken, quiet);
}

/// Parse and select composed over a realistic feed excerpt
#[tokio::test]
async fn test_parse_and_select_pipeline() {
    let raw = "\
BEGIN:VCALENDAR\r\n\
PRODID:-//Google Inc//Google Calendar 70.9054//EN\r\n\
VERSION:2.0\r\n\
BEGIN:VTIMEZONE\r\n\
TZID:America/New_York\r\n\
END:VTIMEZONE\r\n\
BEGIN:VEVENT\r\n\
DTSTART:20250620T140000Z\r\n\
DTEND:20250620T150000Z\r\n\
SUMMARY:Volunteer Day\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
DTSTART;VALUE=DATE:20250625\r\n\
SUMMARY:Community Picnic\r\n\
DESCRIPTION:Bring a dish to share\\, drinks provided. Games start\r\n\
\x20\x20at noon.\r\n\
LOCATION:Riverside Park\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
DTSTART:20250701T180000Z\r\n\
SUMMARY:Fundraiser Dinner\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

    let events = parser::parse(raw);
    assert_eq!(events.len(), 3);
    assert_eq!(
        events[1].description.as_deref(),
        Some("Bring a dish to share, drinks provided. Games start at noon.")
    );

    // June 20 is already past; the remaining two stay in order
    let now = Utc.with_ymd_and_hms(2025, 6, 22, 9, 0, 0).unwrap();
    let upcoming = selector::select_upcoming(events, now, 3);

    let summaries: Vec<&str> = upcoming.iter().map(|e| e.summary.as_str()).collect();
    assert_eq!(summaries, vec!["Community Picnic", "Fundraiser Dinner"]);
}
