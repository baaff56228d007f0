use venueBooker::models::auth::UserData;
use venueBooker::models::booking::{Booking, CreateBookingData};
use venueBooker::models::envelope::{ErrorEnvelope, ItemResponse, ListResponse};
use venueBooker::models::profile::Profile;
use venueBooker::models::venue::Venue;

#[test]
fn venue_detail_with_owner_and_bookings_parses() {
    let body = r#"{
        "data": {
            "id": "v1",
            "name": "Fjord Cabin",
            "description": "A cabin by the fjord",
            "media": [{"url": "https://example.com/cabin.jpg", "alt": "cabin"}],
            "price": 150,
            "maxGuests": 4,
            "rating": 4.5,
            "created": "2025-06-01T00:00:00.000Z",
            "updated": "2025-06-02T00:00:00.000Z",
            "meta": {"wifi": true, "parking": false, "breakfast": true, "pets": false},
            "location": {"address": "Strandveien 1", "city": "Bergen", "zip": "5003", "country": "Norway", "continent": "Europe", "lat": 60.39, "lng": 5.32},
            "owner": {"name": "host", "email": "host@example.com", "bio": null, "avatar": null},
            "bookings": [
                {"id": "b1", "dateFrom": "2026-02-15T00:00:00.000Z", "dateTo": "2026-02-20T00:00:00.000Z", "guests": 2}
            ]
        },
        "meta": {}
    }"#;

    let response: ItemResponse<Venue> = serde_json::from_str(body).unwrap();
    let venue = response.data;
    assert_eq!(venue.max_guests, 4);
    assert_eq!(venue.price, 150.0);
    assert!(venue.meta.wifi);
    assert_eq!(venue.location.summary().as_deref(), Some("Strandveien 1, Bergen, Norway"));
    let owner = venue.owner.expect("owner requested");
    assert_eq!(owner.email, "host@example.com");
    let bookings = venue.bookings.expect("bookings requested");
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].date_from, "2026-02-15T00:00:00.000Z");
}

#[test]
fn venue_without_query_flags_has_no_owner_or_bookings() {
    let body = r#"{
        "data": {
            "id": "v2",
            "name": "City Flat",
            "description": "",
            "media": [],
            "price": 90,
            "maxGuests": 2,
            "rating": 0,
            "created": "2025-06-01T00:00:00.000Z",
            "updated": "2025-06-01T00:00:00.000Z",
            "meta": {"wifi": false, "parking": false, "breakfast": false, "pets": false},
            "location": {}
        },
        "meta": {}
    }"#;

    let response: ItemResponse<Venue> = serde_json::from_str(body).unwrap();
    assert!(response.data.owner.is_none());
    assert!(response.data.bookings.is_none());
}

#[test]
fn paged_list_meta_parses() {
    let body = r#"{
        "data": [],
        "meta": {
            "isFirstPage": true,
            "isLastPage": false,
            "currentPage": 1,
            "previousPage": null,
            "nextPage": 2,
            "pageCount": 12,
            "totalCount": 103
        }
    }"#;

    let response: ListResponse<Venue> = serde_json::from_str(body).unwrap();
    assert!(response.meta.is_first_page);
    assert_eq!(response.meta.next_page, Some(2));
    assert_eq!(response.meta.previous_page, None);
    assert_eq!(response.meta.total_count, 103);
}

#[test]
fn booking_with_embedded_venue_parses() {
    let body = r#"{
        "id": "b9",
        "dateFrom": "2026-03-01T00:00:00.000Z",
        "dateTo": "2026-03-05T00:00:00.000Z",
        "guests": 3,
        "created": "2026-01-01T00:00:00.000Z",
        "updated": "2026-01-01T00:00:00.000Z",
        "venue": {
            "id": "v1",
            "name": "Fjord Cabin",
            "description": "",
            "media": [],
            "price": 150,
            "maxGuests": 4,
            "rating": 4.5,
            "created": "2025-06-01T00:00:00.000Z",
            "updated": "2025-06-01T00:00:00.000Z",
            "meta": {"wifi": true, "parking": true, "breakfast": false, "pets": false},
            "location": {}
        }
    }"#;

    let booking: Booking = serde_json::from_str(body).unwrap();
    assert_eq!(booking.guests, 3);
    assert_eq!(booking.venue.unwrap().name, "Fjord Cabin");
}

#[test]
fn create_booking_serializes_camel_case_calendar_days() {
    let payload = CreateBookingData {
        date_from: "2026-03-01".to_string(),
        date_to: "2026-03-05".to_string(),
        guests: 2,
        venue_id: "v1".to_string(),
    };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["dateFrom"], "2026-03-01");
    assert_eq!(json["dateTo"], "2026-03-05");
    assert_eq!(json["venueId"], "v1");
    assert!(json.get("date_from").is_none());
}

#[test]
fn login_response_parses_token_and_role() {
    let body = r#"{
        "name": "kari",
        "email": "kari@example.com",
        "avatar": {"url": "https://example.com/a.jpg", "alt": "kari"},
        "banner": null,
        "accessToken": "jwt-token",
        "venueManager": true
    }"#;
    let user: UserData = serde_json::from_str(body).unwrap();
    assert_eq!(user.access_token, "jwt-token");
    assert!(user.venue_manager);
}

#[test]
fn login_response_without_role_defaults_to_guest() {
    let body = r#"{
        "name": "ola",
        "email": "ola@example.com",
        "avatar": null,
        "banner": null,
        "accessToken": "jwt-token"
    }"#;
    let user: UserData = serde_json::from_str(body).unwrap();
    assert!(!user.venue_manager);
}

#[test]
fn profile_with_counts_parses() {
    let body = r#"{
        "name": "kari",
        "email": "kari@example.com",
        "bio": "host of things",
        "avatar": null,
        "banner": null,
        "venueManager": true,
        "_count": {"venues": 3, "bookings": 7}
    }"#;
    let profile: Profile = serde_json::from_str(body).unwrap();
    let count = profile.count.expect("counts requested");
    assert_eq!(count.venues, 3);
    assert_eq!(count.bookings, 7);
}

#[test]
fn error_envelope_exposes_first_message() {
    let body = r#"{"errors": [{"message": "Venue not found"}, {"message": "secondary"}], "status": "Not Found"}"#;
    let envelope: ErrorEnvelope = serde_json::from_str(body).unwrap();
    assert_eq!(envelope.first_message(), Some("Venue not found"));

    let empty: ErrorEnvelope = serde_json::from_str(r#"{}"#).unwrap();
    assert_eq!(empty.first_message(), None);
}
