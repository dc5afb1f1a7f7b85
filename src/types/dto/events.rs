use chrono::NaiveDateTime;
use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::db::{event, registration};

/// An event as rendered in listings and detail views, with the derived
/// seat accounting and display labels.
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct EventView {
    /// Event ID (UUID)
    pub id: String,
    pub title: String,
    pub summary: String,
    pub description: String,
    pub location: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    /// Total seats
    pub capacity: i32,
    /// Category label from the closed category set
    pub category: String,
    pub image_url: Option<String>,
    pub created_at: NaiveDateTime,

    /// Capacity minus current registrations, floored at zero
    pub seats_remaining: i64,
    pub has_space: bool,

    /// e.g. "June 14, 2025"
    pub date_label: String,
    /// e.g. "Saturday"
    pub day_label: String,
    /// e.g. "02:30 PM - 04:30 PM"
    pub time_range: String,
}

impl EventView {
    pub fn from_model(event: &event::Model, registration_count: u64) -> Self {
        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            summary: event.summary.clone(),
            description: event.description.clone(),
            location: event.location.clone(),
            start_time: event.start_time,
            end_time: event.end_time,
            capacity: event.capacity,
            category: event.category.clone(),
            image_url: event.image_url.clone(),
            created_at: event.created_at,
            seats_remaining: event.seats_remaining(registration_count),
            has_space: event.has_space(registration_count),
            date_label: event.date_label(),
            day_label: event.day_label(),
            time_range: event.time_range(),
        }
    }
}

/// A registration row, optionally carrying its event's headline data
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationView {
    /// Registration ID (UUID)
    pub id: String,
    pub user_id: String,
    pub event_id: String,

    pub attendee_name: String,
    pub attendee_email: String,
    pub department: Option<String>,
    pub section: Option<String>,
    pub student_uid: Option<String>,
    pub team_selection: Option<String>,
    pub created_at: NaiveDateTime,

    /// Title of the related event, when loaded
    pub event_title: Option<String>,
    /// Start time of the related event, when loaded
    pub event_start_time: Option<NaiveDateTime>,
}

impl RegistrationView {
    pub fn from_model(registration: &registration::Model, event: Option<&event::Model>) -> Self {
        Self {
            id: registration.id.clone(),
            user_id: registration.user_id.clone(),
            event_id: registration.event_id.clone(),
            attendee_name: registration.attendee_name.clone(),
            attendee_email: registration.attendee_email.clone(),
            department: registration.department.clone(),
            section: registration.section.clone(),
            student_uid: registration.student_uid.clone(),
            team_selection: registration.team_selection.clone(),
            created_at: registration.created_at,
            event_title: event.map(|e| e.title.clone()),
            event_start_time: event.map(|e| e.start_time),
        }
    }
}

/// One day of the 7-day registration trend
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct TrendPoint {
    /// e.g. "Jun 14"
    pub label: String,
    /// Registrations created that day
    pub count: i64,
    /// Bar height as a percentage of the busiest day
    pub height: i64,
}

/// The home dashboard analytics block
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct HomeAnalytics {
    pub total_events: i64,
    pub upcoming_count: i64,
    pub total_registrations: i64,
    pub total_capacity: i64,
    /// Total capacity minus total registrations, floored at zero
    pub available_capacity: i64,
    pub capacity_percent: f64,
    pub projected_revenue: i64,
    pub projected_checked_in: i64,
    pub projected_pending: i64,
    /// Days until the next event starts, when one exists
    pub days_to_next_event: Option<i64>,
    pub next_event: Option<EventView>,
    pub trend: Vec<TrendPoint>,
    pub recent_registrations: Vec<RegistrationView>,
    pub active_locations: Vec<String>,
}

/// Response model for the home dashboard
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct HomeResponse {
    /// Filtered upcoming events, capped to the preview size
    pub upcoming_events: Vec<EventView>,
    /// True number of events matching the filters, before the cap
    pub filtered_count: i64,
    /// Category labels present in the catalog
    pub event_types: Vec<String>,
    pub search_query: String,
    pub selected_category: String,
    pub timeframe: String,
    pub selected_date: String,
    /// Event ids the caller has marked interest in (empty when anonymous)
    pub interested_event_ids: Vec<String>,
    pub analytics: HomeAnalytics,
}

/// Response model for the full event listing
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct EventListResponse {
    pub events: Vec<EventView>,
    /// Equal to the length of `events` - the listing is not capped
    pub total_results: i64,
    pub event_types: Vec<String>,
    pub search_query: String,
    pub selected_category: String,
    pub timeframe: String,
    pub selected_date: String,
    pub interested_event_ids: Vec<String>,
}

/// Response model for the event detail view
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct EventDetailResponse {
    pub event: EventView,
    pub is_registered: bool,
    pub is_interested: bool,
    /// The caller's stored interest note, empty when none
    pub interest_note: String,
    /// The fixed team preference options
    pub team_options: Vec<String>,
}

/// Request model for registering for an event. Fields mirror the paper
/// form; all are validated server-side so omissions surface as messages
/// rather than deserialization failures.
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct RegisterForEventRequest {
    pub attendee_name: Option<String>,
    pub attendee_email: Option<String>,
    pub department: Option<String>,
    pub section: Option<String>,
    pub student_uid: Option<String>,
    pub team_selection: Option<String>,
    /// Must be set to true to confirm the participation rules
    pub agreement: Option<bool>,
}

/// Request model for the interest toggle
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct InterestRequest {
    /// "remove" deletes the marker; anything else saves it
    pub action: Option<String>,
    /// Optional note, stored only when non-blank
    pub note: Option<String>,
}

/// Response model for the caller's registrations
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct MyRegistrationsResponse {
    pub registrations: Vec<RegistrationView>,
}
