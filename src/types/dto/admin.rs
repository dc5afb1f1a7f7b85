use chrono::NaiveDateTime;
use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::db::event_interest;
use crate::types::dto::auth::UserProfile;
use crate::types::dto::events::{EventView, RegistrationView};

/// Response model for the admin dashboard
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct DashboardResponse {
    /// Events visible to this admin, ordered by start time
    pub events: Vec<EventView>,

    /// Registration count across the admin's scope
    pub total_registrations: i64,

    /// Upcoming event count across the admin's scope
    pub upcoming_events: i64,

    /// The admin's scope label ("super" or a category name)
    pub admin_scope: String,
}

/// Request model for creating or editing an event. All fields are
/// validated server-side and failures come back as a message list; the
/// timestamps are ISO 8601 text (`YYYY-MM-DDTHH:MM[:SS]`).
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct EventFormRequest {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub capacity: Option<i32>,
    /// Category label; forced to the admin's scope for non-super admins
    pub category: Option<String>,
    pub image_url: Option<String>,
}

/// An interest marker as shown on the admin registrations page
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct InterestView {
    /// Interest ID (UUID)
    pub id: String,
    pub user_id: String,
    pub event_id: String,
    pub note: Option<String>,
    pub created_at: NaiveDateTime,
}

impl InterestView {
    pub fn from_model(interest: &event_interest::Model) -> Self {
        Self {
            id: interest.id.clone(),
            user_id: interest.user_id.clone(),
            event_id: interest.event_id.clone(),
            note: interest.note.clone(),
            created_at: interest.created_at,
        }
    }
}

/// Response model for an event's registration roster
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct EventRegistrationsResponse {
    pub event: EventView,
    /// Registrations, newest first
    pub registrations: Vec<RegistrationView>,
    /// Interest markers, newest first
    pub interests: Vec<InterestView>,
}

/// Response model for a single registration's detail page
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct RegistrationDetailResponse {
    pub registration: RegistrationView,
    pub event: EventView,
    /// The account that owns the registration
    pub attendee: UserProfile,
    /// The attendee's other registrations, scope-filtered for non-super
    /// admins, ordered by event start time descending
    pub other_registrations: Vec<RegistrationView>,
}
