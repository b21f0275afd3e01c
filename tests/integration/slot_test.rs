//! End-to-end slot validation from API-shaped JSON.

use chrono::{FixedOffset, TimeZone};

use roombook_booking::calendar::{format_api_date, normalize_date, parse_local_datetime};
use roombook_booking::{
    BookingDetails, MaintenanceIndex, MaintenanceSnapshot, SlotRejection, SlotValidator,
    build_request,
};
use roombook_core::config::BookingConfig;
use roombook_entity::booking::{CalendarEvent, TimeInterval};
use roombook_entity::facility::ResourceRef;

use crate::helpers::now;

const EVENTS: &str = r#"[
    {
        "id": 11,
        "title": "Seminar",
        "resourceIds": [1],
        "start": "2025-05-18T10:15:00Z",
        "end": "2025-05-18T10:45:00Z",
        "extendedProps": {"status": "APPROVED", "isPast": false, "isMaintenance": false}
    },
    {
        "id": "12",
        "resourceIds": ["3"],
        "start": "2025-05-18T14:00:00Z",
        "end": "2025-05-18T15:00:00Z",
        "extendedProps": {"status": "REJECTED"}
    }
]"#;

const MAINTENANCE: &str = r#"{"date": "2025-05-18", "statuses": {"2": true, "3": false}}"#;

fn fixtures() -> (Vec<CalendarEvent>, MaintenanceIndex) {
    let events: Vec<CalendarEvent> = serde_json::from_str(EVENTS).unwrap();
    let snapshot: MaintenanceSnapshot = serde_json::from_str(MAINTENANCE).unwrap();
    let mut index = MaintenanceIndex::new();
    index.apply_snapshot(snapshot);
    (events, index)
}

fn utc_slot(start: &str, minutes: i64) -> TimeInterval<chrono::Utc> {
    let start = parse_local_datetime(start, &chrono::Utc).unwrap();
    TimeInterval::with_duration(start, minutes).unwrap()
}

#[test]
fn test_each_rule_from_json_fixtures() {
    let validator = SlotValidator::from_config(&BookingConfig::default()).unwrap();
    let (events, maintenance) = fixtures();
    let check = |resource: &str, start: &str, minutes: i64| {
        validator.validate(
            &utc_slot(start, minutes),
            &ResourceRef::from(resource),
            &now(),
            &events,
            &maintenance,
        )
    };

    assert!(check("1", "2025-05-18T08:00", 60).is_ok());
    assert_eq!(
        check("1", "2025-05-17T09:00", 30).unwrap_err().to_string(),
        "Cannot create bookings in the past"
    );
    assert_eq!(
        check("2", "2025-05-18T08:00", 30).unwrap_err().to_string(),
        "This facility is currently under maintenance and cannot be booked."
    );
    assert_eq!(
        check("1", "2025-05-18T18:30", 45).unwrap_err().to_string(),
        "Bookings cannot extend beyond 7:00 PM"
    );
    assert_eq!(
        check("1", "2025-05-18T10:00", 30).unwrap_err(),
        SlotRejection::Conflict {
            event_id: "11".to_string()
        }
    );
    // The same slot on a resource with no bookings is free.
    assert!(check("3", "2025-05-18T10:00", 30).is_ok());
    // A rejected booking does not hold its slot.
    assert!(check("3", "2025-05-18T14:00", 60).is_ok());
}

#[test]
fn test_accepted_slot_becomes_request() {
    let validator = SlotValidator::default();
    let (events, maintenance) = fixtures();
    let plus_eight = FixedOffset::east_opt(8 * 3600).unwrap();
    let start = plus_eight.with_ymd_and_hms(2025, 5, 18, 9, 0, 0).unwrap();
    let slot = TimeInterval::with_duration(start, 60).unwrap();
    let resource = ResourceRef::from(1u64);

    let accepted = validator
        .validate(&slot, &resource, &now(), &events, &maintenance)
        .unwrap();
    let request = build_request(
        &accepted,
        &resource,
        "student@example.com",
        BookingDetails {
            title: "Tutorial".to_string(),
            ..BookingDetails::default()
        },
        100.0,
    )
    .unwrap();

    assert_eq!(request.facility_id, 1);
    assert_eq!(request.time_slot, "09:00 - 10:00");
    assert_eq!(request.booked_date_time, "2025-05-18T01:00:00Z");
    assert_eq!(request.credits_used, "60");
    let local_date = normalize_date(&request.booked_date_time, &plus_eight).unwrap();
    assert_eq!(format_api_date(local_date), "2025-05-18");
}
