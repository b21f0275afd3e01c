//! Individual slot rules.
//!
//! Each rule is a pure function of its inputs. Missing inputs never fail:
//! an absent interval is neither past nor booked.

use chrono::{DateTime, Duration, NaiveTime, TimeZone, Timelike, Utc};

use roombook_entity::booking::{BookingStatus, CalendarEvent, TimeInterval};
use roombook_entity::facility::ResourceRef;

/// Whether `start` lies before `now`.
///
/// An earlier calendar date is past. On the same date, the slot is past
/// iff its hour and minute are earlier than now's; seconds are ignored.
/// Dates are compared in `start`'s own time zone.
pub fn is_past<Tz: TimeZone>(start: Option<&DateTime<Tz>>, now: &DateTime<Utc>) -> bool {
    let Some(start) = start else {
        return false;
    };
    let now = now.with_timezone(&start.timezone());

    let (start_date, today) = (start.date_naive(), now.date_naive());
    if start_date != today {
        return start_date < today;
    }
    (start.hour(), start.minute()) < (now.hour(), now.minute())
}

/// Whether `interval` overlaps any blocking event on `resource`.
pub fn is_cell_booked<Tz: TimeZone>(
    interval: Option<&TimeInterval<Tz>>,
    resource: &ResourceRef,
    events: &[CalendarEvent],
) -> bool {
    interval.is_some_and(|interval| first_conflict(interval, resource, events).is_some())
}

/// The first blocking event on `resource` that overlaps `interval`.
pub(crate) fn first_conflict<'a, Tz: TimeZone>(
    interval: &TimeInterval<Tz>,
    resource: &ResourceRef,
    events: &'a [CalendarEvent],
) -> Option<&'a CalendarEvent> {
    events.iter().filter(|e| blocks_slot(e)).find(|event| {
        event.includes_resource(resource)
            && event
                .interval()
                .is_some_and(|existing| existing.overlaps(interval))
    })
}

/// Rejected and cancelled bookings free their slot again.
fn blocks_slot(event: &CalendarEvent) -> bool {
    !matches!(
        event.status(),
        BookingStatus::Rejected | BookingStatus::Cancelled
    )
}

/// Whether `start + minutes` falls after `cutoff` on `start`'s calendar day.
///
/// Ending exactly at the cutoff is allowed.
pub(crate) fn ends_after_cutoff<Tz: TimeZone>(
    start: &DateTime<Tz>,
    minutes: i64,
    cutoff: NaiveTime,
) -> bool {
    let cutoff_at = start.date_naive().and_time(cutoff);
    Duration::try_minutes(minutes)
        .and_then(|delta| start.naive_local().checked_add_signed(delta))
        .is_none_or(|end| end > cutoff_at)
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::FixedOffset;
    use roombook_entity::booking::EventProps;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 17, 12, 0, 0).unwrap()
    }

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn event(id: &str, resources: &[&str], start: &str, end: &str) -> CalendarEvent {
        CalendarEvent {
            id: id.to_string(),
            title: None,
            resource_id: None,
            resource_ids: resources.iter().map(|r| ResourceRef::from(*r)).collect(),
            start: utc(start),
            end: utc(end),
            extended_props: EventProps::default(),
        }
    }

    #[test]
    fn test_past_table_at_fixed_now() {
        let cases = [
            ("2024-05-17T12:00:00Z", true),
            ("2025-04-17T12:00:00Z", true),
            ("2025-05-16T12:00:00Z", true),
            ("2025-05-18T12:00:00Z", false),
            ("2025-05-17T10:00:00Z", true),
            ("2025-05-17T14:00:00Z", false),
        ];
        for (input, expected) in cases {
            assert_eq!(is_past(Some(&utc(input)), &now()), expected, "{input}");
        }
    }

    #[test]
    fn test_absent_start_is_not_past() {
        assert!(!is_past::<Utc>(None, &now()));
    }

    #[test]
    fn test_same_minute_is_not_past() {
        let later_seconds = Utc.with_ymd_and_hms(2025, 5, 17, 12, 0, 59).unwrap();
        assert!(!is_past(Some(&now()), &later_seconds));
    }

    #[test]
    fn test_past_uses_start_time_zone_for_the_date() {
        // 23:30 on the 16th at -05:00 is 04:30Z on the 17th.
        let minus_five = FixedOffset::west_opt(5 * 3600).unwrap();
        let start = minus_five.with_ymd_and_hms(2025, 5, 16, 23, 30, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2025, 5, 17, 3, 0, 0).unwrap();
        assert!(!is_past(Some(&start), &now));
    }

    #[test]
    fn test_conflict_example() {
        let events = vec![event(
            "1",
            &["1"],
            "2025-05-18T10:15:00Z",
            "2025-05-18T10:45:00Z",
        )];
        let candidate =
            TimeInterval::new(utc("2025-05-18T10:00:00Z"), utc("2025-05-18T10:30:00Z")).unwrap();

        assert!(is_cell_booked(
            Some(&candidate),
            &ResourceRef::from("1"),
            &events
        ));
        assert!(!is_cell_booked(
            Some(&candidate),
            &ResourceRef::from("2"),
            &events
        ));
    }

    #[test]
    fn test_numeric_resource_matches_string_id() {
        let events = vec![event(
            "1",
            &["1"],
            "2025-05-18T10:15:00Z",
            "2025-05-18T10:45:00Z",
        )];
        let candidate =
            TimeInterval::new(utc("2025-05-18T10:00:00Z"), utc("2025-05-18T10:30:00Z")).unwrap();
        assert!(is_cell_booked(
            Some(&candidate),
            &ResourceRef::from(1u64),
            &events
        ));
    }

    #[test]
    fn test_touching_intervals_do_not_conflict() {
        let events = vec![event(
            "1",
            &["1"],
            "2025-05-18T10:30:00Z",
            "2025-05-18T11:00:00Z",
        )];
        let candidate =
            TimeInterval::new(utc("2025-05-18T10:00:00Z"), utc("2025-05-18T10:30:00Z")).unwrap();
        assert!(!is_cell_booked(
            Some(&candidate),
            &ResourceRef::from("1"),
            &events
        ));
    }

    #[test]
    fn test_absent_interval_is_not_booked() {
        let events = vec![event(
            "1",
            &["1"],
            "2025-05-18T10:15:00Z",
            "2025-05-18T10:45:00Z",
        )];
        assert!(!is_cell_booked::<Utc>(None, &ResourceRef::from("1"), &events));
    }

    #[test]
    fn test_cancelled_event_does_not_block() {
        let mut cancelled = event("9", &["1"], "2025-05-18T10:00:00Z", "2025-05-18T11:00:00Z");
        cancelled.extended_props.status = BookingStatus::Cancelled;
        let candidate =
            TimeInterval::new(utc("2025-05-18T10:00:00Z"), utc("2025-05-18T10:30:00Z")).unwrap();
        assert!(!is_cell_booked(
            Some(&candidate),
            &ResourceRef::from("1"),
            &[cancelled]
        ));
    }

    #[test]
    fn test_cutoff_boundary() {
        let cutoff = NaiveTime::from_hms_opt(19, 0, 0).unwrap();
        let start = Utc.with_ymd_and_hms(2025, 5, 18, 18, 0, 0).unwrap();
        assert!(!ends_after_cutoff(&start, 60, cutoff));
        assert!(ends_after_cutoff(&start, 61, cutoff));
    }

    #[test]
    fn test_unrepresentable_duration_is_past_cutoff() {
        let cutoff = NaiveTime::from_hms_opt(19, 0, 0).unwrap();
        let start = Utc.with_ymd_and_hms(2025, 5, 18, 9, 0, 0).unwrap();
        assert!(ends_after_cutoff(&start, i64::MAX, cutoff));
    }

    #[test]
    fn test_cutoff_past_midnight() {
        let cutoff = NaiveTime::from_hms_opt(19, 0, 0).unwrap();
        let start = Utc.with_ymd_and_hms(2025, 5, 18, 23, 30, 0).unwrap();
        assert!(ends_after_cutoff(&start, 60, cutoff));
    }
}
