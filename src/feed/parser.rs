use super::models::{CalendarEvent, EventTime};
use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};

/// Accumulator for the event block currently being scanned
#[derive(Default)]
struct EventDraft {
    start: Option<EventTime>,
    end: Option<EventTime>,
    summary: Option<String>,
    description: Option<String>,
    location: Option<String>,
}

impl EventDraft {
    /// Materialize the draft; blocks without both start and summary are
    /// dropped silently (alarms, cancelled entries and the like)
    fn finish(self) -> Option<CalendarEvent> {
        Some(CalendarEvent {
            start: self.start?,
            summary: self.summary?,
            end: self.end,
            description: self.description,
            location: self.location,
        })
    }
}

/// Parse raw iCalendar text into events, best-effort.
///
/// Malformed lines and unrecognized properties never raise errors; the feed
/// is externally authored and loosely structured, so anything that does not
/// parse is skipped.
pub fn parse(raw: &str) -> Vec<CalendarEvent> {
    let lines = unfold_lines(raw);

    let mut events = Vec::new();
    let mut draft: Option<EventDraft> = None;

    for line in &lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line == "BEGIN:VEVENT" {
            draft = Some(EventDraft::default());
        } else if line == "END:VEVENT" {
            if let Some(finished) = draft.take() {
                if let Some(event) = finished.finish() {
                    events.push(event);
                }
            }
        } else if let Some(current) = draft.as_mut() {
            apply_property(current, line);
        }
    }

    events
}

/// Normalize line endings and join folded continuation lines.
///
/// A physical line starting with a space or tab continues the previous
/// logical line; the leading whitespace character is stripped. This must run
/// before field parsing because long property values are split across lines.
fn unfold_lines(raw: &str) -> Vec<String> {
    let normalized = raw.replace("\r\n", "\n").replace('\r', "\n");

    let mut joined: Vec<String> = Vec::new();
    for line in normalized.split('\n') {
        if line.starts_with(' ') || line.starts_with('\t') {
            if let Some(previous) = joined.last_mut() {
                previous.push_str(&line[1..]);
            }
        } else {
            joined.push(line.to_string());
        }
    }

    joined
}

/// Dispatch a logical line inside an open event block to the matching field
fn apply_property(draft: &mut EventDraft, line: &str) {
    if let Some(value) = property_value(line, "DTSTART") {
        draft.start = parse_feed_date(value);
    } else if let Some(value) = property_value(line, "DTEND") {
        draft.end = parse_feed_date(value);
    } else if let Some(value) = property_value(line, "SUMMARY") {
        draft.summary = Some(value.trim().to_string());
    } else if let Some(value) = property_value(line, "DESCRIPTION") {
        draft.description = Some(unescape_text(value.trim()));
    } else if let Some(value) = property_value(line, "LOCATION") {
        draft.location = Some(unescape_commas(value.trim()));
    }
}

/// Match `name` case-sensitively against the property name before any
/// parameter suffix, and return the value after the first colon.
///
/// The value keeps any colons of its own (time zone parameter blocks carry
/// them), so only the first colon splits.
fn property_value<'a>(line: &'a str, name: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(name)?;
    if !rest.starts_with(':') && !rest.starts_with(';') {
        // DTSTART must not swallow DTSTART-like property names
        return None;
    }
    let colon = line.find(':')?;
    Some(&line[colon + 1..])
}

/// Parse a feed date value: 8-digit `YYYYMMDD` for all-day events, or
/// `YYYYMMDDTHHMMSS[Z]` for timed events interpreted as UTC. Seconds default
/// to 00 when truncated. Any other form yields None.
fn parse_feed_date(value: &str) -> Option<EventTime> {
    let value = value.trim();

    if value.len() == 8 {
        let date = NaiveDate::parse_from_str(value, "%Y%m%d").ok()?;
        return Some(EventTime::AllDay(date));
    }

    let (date_part, time_part) = value.split_once('T')?;
    let time_part = time_part.strip_suffix('Z').unwrap_or(time_part);

    let date = NaiveDate::parse_from_str(date_part, "%Y%m%d").ok()?;
    let time = match time_part.len() {
        6 => NaiveTime::parse_from_str(time_part, "%H%M%S").ok()?,
        4 => NaiveTime::parse_from_str(time_part, "%H%M").ok()?,
        _ => return None,
    };

    Some(EventTime::Timed(Utc.from_utc_datetime(&date.and_time(time))))
}

/// Unescape description text: escaped newlines become a space (values are
/// rendered on one line), escaped commas become literal commas
fn unescape_text(value: &str) -> String {
    value.replace("\\n", " ").replace("\\,", ",")
}

/// Unescape location text: only escaped commas
fn unescape_commas(value: &str) -> String {
    value.replace("\\,", ",")
}
