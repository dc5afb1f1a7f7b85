use std::sync::Arc;

use chrono::{Duration, NaiveDateTime, NaiveTime, Utc};
use poem::Request;
use poem_openapi::{
    auth::Bearer,
    param::{Path, Query},
    payload::Json,
    OpenApi, Tags,
};

use crate::api::{helpers, BearerAuth};
use crate::errors::EventError;
use crate::services::TokenService;
use crate::stores::{
    AttendeeDetails, EventFilter, EventStore, RegistrationStore, UserStore, TEAM_OPTIONS,
};
use crate::types::db::{event, user};
use crate::types::dto::common::MessageResponse;
use crate::types::dto::events::{
    EventDetailResponse, EventListResponse, EventView, HomeAnalytics, HomeResponse,
    InterestRequest, MyRegistrationsResponse, RegisterForEventRequest, RegistrationView,
    TrendPoint,
};
use crate::types::internal::{EventCategory, Timeframe};

/// The home view shows at most this many upcoming events
const HOME_PREVIEW_LIMIT: u64 = 6;
const RECENT_REGISTRATION_LIMIT: u64 = 4;
const ACTIVE_LOCATION_LIMIT: usize = 3;
const TREND_DAYS: i64 = 7;
/// Flat per-seat figure used for the projected revenue stat
const TICKET_PRICE: i64 = 85;

/// Event catalog and registration workflow API
pub struct EventsApi {
    events: Arc<EventStore>,
    registrations: Arc<RegistrationStore>,
    users: Arc<UserStore>,
    tokens: Arc<TokenService>,
}

/// API tags for event endpoints
#[derive(Tags)]
enum EventTags {
    /// Event catalog and registration endpoints
    Events,
}

impl EventsApi {
    /// Create a new EventsApi with the given stores and TokenService
    pub fn new(
        events: Arc<EventStore>,
        registrations: Arc<RegistrationStore>,
        users: Arc<UserStore>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            events,
            registrations,
            users,
            tokens,
        }
    }

    /// Resolve the optional session on public endpoints. Anonymous callers
    /// and callers with a stale token both browse as guests.
    ///
    /// Manual header extraction because poem-openapi doesn't support
    /// Option<BearerAuth>.
    async fn viewer(&self, req: &Request) -> Option<user::Model> {
        let bearer = req
            .header("Authorization")
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(|token| Bearer {
                token: token.to_string(),
            })?;
        helpers::current_user(&self.users, &self.tokens, &bearer)
            .await
            .ok()
    }

    async fn interested_ids(&self, viewer: &Option<user::Model>) -> Result<Vec<String>, EventError> {
        match viewer {
            Some(user) => Ok(self.registrations.interested_event_ids(&user.id).await?),
            None => Ok(Vec::new()),
        }
    }

    /// Render events with their seat accounting, resolving registration
    /// counts in one grouped query
    async fn event_views(&self, events: &[event::Model]) -> Result<Vec<EventView>, EventError> {
        let ids: Vec<String> = events.iter().map(|e| e.id.clone()).collect();
        let counts = self.registrations.counts_by_event(&ids).await?;
        Ok(events
            .iter()
            .map(|e| EventView::from_model(e, counts.get(&e.id).copied().unwrap_or(0)))
            .collect())
    }

    async fn event_view(&self, event: &event::Model) -> Result<EventView, EventError> {
        let count = self.registrations.count_for_event(&event.id).await?;
        Ok(EventView::from_model(event, count))
    }

    async fn build_analytics(
        &self,
        now: NaiveDateTime,
        first_upcoming: Option<&event::Model>,
    ) -> Result<HomeAnalytics, EventError> {
        let total_events = self.events.total_count().await? as i64;
        let upcoming_count = self.events.upcoming_count(now).await? as i64;
        let total_registrations = self.registrations.total_count().await? as i64;
        let total_capacity = self.events.total_capacity().await?;

        let available_capacity = (total_capacity - total_registrations).max(0);
        let capacity_percent = if total_capacity > 0 {
            total_registrations as f64 / total_capacity as f64 * 100.0
        } else {
            0.0
        };

        let projected_revenue = total_registrations * TICKET_PRICE;
        let projected_checked_in = (total_registrations as f64 * 0.6).round() as i64;
        let projected_pending = (total_registrations - projected_checked_in).max(0);

        let next_model = match first_upcoming {
            Some(event) => Some(event.clone()),
            None => self.events.first_by_start().await?,
        };
        let mut next_event = None;
        let mut days_to_next_event = None;
        if let Some(model) = next_model {
            days_to_next_event = Some(
                (model.start_time.date() - now.date())
                    .num_days()
                    .max(0),
            );
            next_event = Some(self.event_view(&model).await?);
        }

        let mut trend = Vec::new();
        let mut max_count: i64 = 0;
        for offset in (0..TREND_DAYS).rev() {
            let day_start = (now - Duration::days(offset)).date().and_time(NaiveTime::MIN);
            let day_end = day_start + Duration::days(1);
            let count = self
                .registrations
                .count_created_between(day_start, day_end)
                .await? as i64;
            max_count = max_count.max(count);
            trend.push(TrendPoint {
                label: day_start.format("%b %d").to_string(),
                count,
                height: 0,
            });
        }
        let height_base = max_count.max(1);
        for point in &mut trend {
            point.height = (point.count as f64 / height_base as f64 * 100.0).round() as i64;
        }

        let recent_registrations = self
            .registrations
            .recent(RECENT_REGISTRATION_LIMIT)
            .await?
            .iter()
            .map(|(registration, event)| RegistrationView::from_model(registration, event.as_ref()))
            .collect();

        let mut active_locations: Vec<String> = Vec::new();
        for candidate in self.events.first_events(HOME_PREVIEW_LIMIT).await? {
            if !active_locations.contains(&candidate.location) {
                active_locations.push(candidate.location);
            }
            if active_locations.len() == ACTIVE_LOCATION_LIMIT {
                break;
            }
        }

        Ok(HomeAnalytics {
            total_events,
            upcoming_count,
            total_registrations,
            total_capacity,
            available_capacity,
            capacity_percent,
            projected_revenue,
            projected_checked_in,
            projected_pending,
            days_to_next_event,
            next_event,
            trend,
            recent_registrations,
            active_locations,
        })
    }
}

/// Resolve the listing query parameters into a catalog filter plus the
/// echoed selections. Unknown category values fall back to "all", like
/// unrecognized timeframes.
fn resolve_filters(
    q: &Option<String>,
    category: &Option<String>,
    timeframe: &Option<String>,
    date: &Option<String>,
) -> (EventFilter, String, String) {
    let search_query = q.as_deref().unwrap_or("").trim().to_string();
    let parsed_category = category
        .as_deref()
        .filter(|c| *c != "all")
        .and_then(EventCategory::parse);
    let selected_category = match parsed_category {
        Some(c) => c.as_str().to_string(),
        None => "all".to_string(),
    };

    let filter = EventFilter {
        category: parsed_category,
        search: (!search_query.is_empty()).then(|| search_query.clone()),
        timeframe: Timeframe::parse(timeframe.as_deref(), date.as_deref()),
    };

    (filter, selected_category, search_query)
}

fn validate_registration_form(
    body: &RegisterForEventRequest,
) -> Result<AttendeeDetails, EventError> {
    let attendee_name = body.attendee_name.as_deref().unwrap_or("").trim().to_string();
    let attendee_email = body.attendee_email.as_deref().unwrap_or("").trim().to_string();
    let department = body.department.as_deref().unwrap_or("").trim().to_string();
    let section = body.section.as_deref().unwrap_or("").trim().to_string();
    let student_uid = body.student_uid.as_deref().unwrap_or("").trim().to_string();
    let team_selection = body.team_selection.as_deref().unwrap_or("").trim().to_string();

    let mut errors = Vec::new();
    if attendee_name.is_empty() {
        errors.push("Attendee name is required.".to_string());
    }
    if attendee_email.is_empty() {
        errors.push("Email address is required.".to_string());
    }
    if department.is_empty() {
        errors.push("Department is required.".to_string());
    }
    if section.is_empty() {
        errors.push("Section or batch is required.".to_string());
    }
    if student_uid.is_empty() {
        errors.push("Unique ID is required.".to_string());
    }
    if team_selection.is_empty() {
        errors.push("Please select a team preference.".to_string());
    }
    if body.agreement != Some(true) {
        errors.push("Please confirm that you agree to the participation rules.".to_string());
    }
    if !team_selection.is_empty() && !TEAM_OPTIONS.contains(&team_selection.as_str()) {
        errors.push("Select a valid team option.".to_string());
    }

    if !errors.is_empty() {
        return Err(EventError::validation_failed(errors));
    }

    Ok(AttendeeDetails {
        attendee_name,
        attendee_email,
        department,
        section,
        student_uid,
        team_selection,
    })
}

#[OpenApi]
impl EventsApi {
    /// Home dashboard
    ///
    /// Filtered preview of upcoming events (capped, with the true total
    /// reported separately) plus the catalog analytics block.
    #[oai(path = "/", method = "get", tag = "EventTags::Events")]
    async fn home(
        &self,
        q: Query<Option<String>>,
        category: Query<Option<String>>,
        timeframe: Query<Option<String>>,
        date: Query<Option<String>>,
        req: &Request,
    ) -> Result<Json<HomeResponse>, EventError> {
        let now = Utc::now().naive_utc();
        let (filter, selected_category, search_query) =
            resolve_filters(&q.0, &category.0, &timeframe.0, &date.0);

        let (preview, filtered_count) = self
            .events
            .list_upcoming_preview(&filter, now, HOME_PREVIEW_LIMIT)
            .await?;

        let analytics = self.build_analytics(now, preview.first()).await?;
        let upcoming_events = self.event_views(&preview).await?;
        let event_types = self.events.distinct_categories().await?;

        let viewer = self.viewer(req).await;
        let interested_event_ids = self.interested_ids(&viewer).await?;

        Ok(Json(HomeResponse {
            upcoming_events,
            filtered_count: filtered_count as i64,
            event_types,
            search_query,
            selected_category,
            timeframe: filter.timeframe.as_str().to_string(),
            selected_date: filter.timeframe.selected_date(),
            interested_event_ids,
            analytics,
        }))
    }

    /// Full event listing
    ///
    /// The complete filtered catalog, past and future, ascending by start
    /// time; the reported total equals the listing length.
    #[oai(path = "/events", method = "get", tag = "EventTags::Events")]
    async fn events_list(
        &self,
        q: Query<Option<String>>,
        category: Query<Option<String>>,
        timeframe: Query<Option<String>>,
        date: Query<Option<String>>,
        req: &Request,
    ) -> Result<Json<EventListResponse>, EventError> {
        let now = Utc::now().naive_utc();
        let (filter, selected_category, search_query) =
            resolve_filters(&q.0, &category.0, &timeframe.0, &date.0);

        let matched = self.events.list(&filter, now).await?;
        let events = self.event_views(&matched).await?;
        let event_types = self.events.distinct_categories().await?;

        let viewer = self.viewer(req).await;
        let interested_event_ids = self.interested_ids(&viewer).await?;

        Ok(Json(EventListResponse {
            total_results: events.len() as i64,
            events,
            event_types,
            search_query,
            selected_category,
            timeframe: filter.timeframe.as_str().to_string(),
            selected_date: filter.timeframe.selected_date(),
            interested_event_ids,
        }))
    }

    /// Event detail
    #[oai(path = "/events/:event_id", method = "get", tag = "EventTags::Events")]
    async fn event_detail(
        &self,
        event_id: Path<String>,
        req: &Request,
    ) -> Result<Json<EventDetailResponse>, EventError> {
        let event = self
            .events
            .find_by_id(&event_id.0)
            .await?
            .ok_or_else(EventError::not_found)?;

        let viewer = self.viewer(req).await;
        let mut is_registered = false;
        let mut interest_note = String::new();
        let mut is_interested = false;
        if let Some(user) = &viewer {
            is_registered = self.registrations.find(&user.id, &event.id).await?.is_some();
            if let Some(interest) = self.registrations.find_interest(&user.id, &event.id).await? {
                is_interested = true;
                interest_note = interest.note.unwrap_or_default();
            }
        }

        Ok(Json(EventDetailResponse {
            event: self.event_view(&event).await?,
            is_registered,
            is_interested,
            interest_note,
            team_options: TEAM_OPTIONS.iter().map(|o| o.to_string()).collect(),
        }))
    }

    /// Register for an event
    ///
    /// Checks run in order: seats remaining, duplicate registration, then
    /// field validation. On success the registration insert and the removal
    /// of any interest marker commit together.
    #[oai(
        path = "/events/:event_id/register",
        method = "post",
        tag = "EventTags::Events"
    )]
    async fn register_for_event(
        &self,
        event_id: Path<String>,
        auth: BearerAuth,
        body: Json<RegisterForEventRequest>,
    ) -> Result<Json<MessageResponse>, EventError> {
        let user = helpers::current_user(&self.users, &self.tokens, &auth.0)
            .await
            .map_err(EventError::from)?;
        let event = self
            .events
            .find_by_id(&event_id.0)
            .await?
            .ok_or_else(EventError::not_found)?;

        let registered = self.registrations.count_for_event(&event.id).await?;
        if !event.has_space(registered) {
            return Err(EventError::event_full());
        }
        if self.registrations.find(&user.id, &event.id).await?.is_some() {
            return Err(EventError::already_registered());
        }

        let details = validate_registration_form(&body.0)?;

        self.registrations
            .register(&user.id, &event.id, details)
            .await
            .map_err(EventError::from)?;

        Ok(Json(MessageResponse::new(
            "You have been registered for the event!",
        )))
    }

    /// Cancel a registration
    #[oai(
        path = "/events/:event_id/unregister",
        method = "post",
        tag = "EventTags::Events"
    )]
    async fn unregister_from_event(
        &self,
        event_id: Path<String>,
        auth: BearerAuth,
    ) -> Result<Json<MessageResponse>, EventError> {
        let user = helpers::current_user(&self.users, &self.tokens, &auth.0)
            .await
            .map_err(EventError::from)?;
        let event = self
            .events
            .find_by_id(&event_id.0)
            .await?
            .ok_or_else(EventError::not_found)?;

        self.registrations
            .unregister(&user.id, &event.id)
            .await
            .map_err(EventError::from)?;

        Ok(Json(MessageResponse::new(
            "Your registration has been canceled.",
        )))
    }

    /// Save or remove an interest marker
    ///
    /// `action = "remove"` deletes the marker; anything else creates it or
    /// updates only its note.
    #[oai(
        path = "/events/:event_id/interest",
        method = "post",
        tag = "EventTags::Events"
    )]
    async fn toggle_interest(
        &self,
        event_id: Path<String>,
        auth: BearerAuth,
        body: Json<InterestRequest>,
    ) -> Result<Json<MessageResponse>, EventError> {
        let user = helpers::current_user(&self.users, &self.tokens, &auth.0)
            .await
            .map_err(EventError::from)?;
        let event = self
            .events
            .find_by_id(&event_id.0)
            .await?
            .ok_or_else(EventError::not_found)?;

        if body.action.as_deref() == Some("remove") {
            self.registrations
                .remove_interest(&user.id, &event.id)
                .await
                .map_err(EventError::from)?;
            return Ok(Json(MessageResponse::new("Removed from the interest list.")));
        }

        self.registrations
            .save_interest(&user.id, &event.id, body.note.clone())
            .await?;

        Ok(Json(MessageResponse::new(
            "Thanks! We will keep you updated about this event.",
        )))
    }

    /// The signed-in user's registrations, ordered by event start time
    #[oai(path = "/my-registrations", method = "get", tag = "EventTags::Events")]
    async fn my_registrations(
        &self,
        auth: BearerAuth,
    ) -> Result<Json<MyRegistrationsResponse>, EventError> {
        let user = helpers::current_user(&self.users, &self.tokens, &auth.0)
            .await
            .map_err(EventError::from)?;

        let registrations = self
            .registrations
            .list_for_user(&user.id)
            .await?
            .iter()
            .map(|(registration, event)| RegistrationView::from_model(registration, event.as_ref()))
            .collect();

        Ok(Json(MyRegistrationsResponse { registrations }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use migration::{Migrator, MigratorTrait};
    use poem_openapi::auth::Bearer;
    use sea_orm::{Database, DatabaseConnection};

    use crate::stores::NewEvent;

    struct TestContext {
        api: EventsApi,
        users: Arc<UserStore>,
        events: Arc<EventStore>,
        tokens: Arc<TokenService>,
    }

    async fn setup_test_api() -> (DatabaseConnection, TestContext) {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");

        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        let users = Arc::new(UserStore::new(db.clone()));
        let events = Arc::new(EventStore::new(db.clone()));
        let registrations = Arc::new(RegistrationStore::new(db.clone()));
        let tokens = Arc::new(TokenService::new(
            "test-secret-key-minimum-32-characters-long".to_string(),
        ));

        let api = EventsApi::new(
            events.clone(),
            registrations.clone(),
            users.clone(),
            tokens.clone(),
        );

        (
            db,
            TestContext {
                api,
                users,
                events,
                tokens,
            },
        )
    }

    async fn signed_in_user(ctx: &TestContext, email: &str) -> BearerAuth {
        let user = ctx
            .users
            .create("Attendee".to_string(), email.to_string(), "password123")
            .await
            .expect("create user");
        let token = ctx.tokens.generate(&user.id).expect("token");
        BearerAuth(Bearer { token })
    }

    async fn create_event(ctx: &TestContext, title: &str, capacity: i32) -> String {
        let start = Utc::now().naive_utc() + Duration::days(2);
        ctx.events
            .create(NewEvent {
                title: title.to_string(),
                summary: "Summary".to_string(),
                description: "Description".to_string(),
                location: "Hall".to_string(),
                start_time: start,
                end_time: start + Duration::hours(2),
                capacity,
                category: EventCategory::Technical,
                image_url: None,
            })
            .await
            .expect("create event")
            .id
    }

    fn anonymous_request() -> Request {
        Request::builder().finish()
    }

    fn authed_request(auth: &BearerAuth) -> Request {
        Request::builder()
            .header("Authorization", format!("Bearer {}", auth.0.token))
            .finish()
    }

    fn registration_body() -> Json<RegisterForEventRequest> {
        Json(RegisterForEventRequest {
            attendee_name: Some("Avery Stone".to_string()),
            attendee_email: Some("avery@example.com".to_string()),
            department: Some("Physics".to_string()),
            section: Some("B2".to_string()),
            student_uid: Some("PHY-2211".to_string()),
            team_selection: Some("Solo".to_string()),
            agreement: Some(true),
        })
    }

    #[tokio::test]
    async fn test_home_caps_preview_and_reports_true_total() {
        let (_db, ctx) = setup_test_api().await;
        for i in 0..8 {
            create_event(&ctx, &format!("Event {}", i), 10).await;
        }

        let response = ctx
            .api
            .home(
                Query(None),
                Query(None),
                Query(None),
                Query(None),
                &anonymous_request(),
            )
            .await
            .expect("home");

        assert_eq!(response.upcoming_events.len(), 6);
        assert_eq!(response.filtered_count, 8);
        assert_eq!(response.analytics.total_events, 8);
        assert_eq!(response.analytics.upcoming_count, 8);
        assert_eq!(response.analytics.total_registrations, 0);
        assert_eq!(response.analytics.total_capacity, 80);
        assert_eq!(response.analytics.available_capacity, 80);
        assert_eq!(response.analytics.trend.len(), 7);
    }

    #[tokio::test]
    async fn test_home_search_filters_preview() {
        let (_db, ctx) = setup_test_api().await;
        create_event(&ctx, "Tech Talk", 10).await;
        create_event(&ctx, "Sketch Jam", 10).await;

        let response = ctx
            .api
            .home(
                Query(Some("tech".to_string())),
                Query(None),
                Query(None),
                Query(None),
                &anonymous_request(),
            )
            .await
            .expect("home");

        assert_eq!(response.filtered_count, 1);
        assert_eq!(response.upcoming_events[0].title, "Tech Talk");
        assert_eq!(response.search_query, "tech");

        let response = ctx
            .api
            .home(
                Query(Some("xyz-no-match".to_string())),
                Query(None),
                Query(None),
                Query(None),
                &anonymous_request(),
            )
            .await
            .expect("home");
        assert_eq!(response.filtered_count, 0);
        assert!(response.upcoming_events.is_empty());
    }

    #[tokio::test]
    async fn test_listing_reports_total_equal_to_length() {
        let (_db, ctx) = setup_test_api().await;
        for i in 0..8 {
            create_event(&ctx, &format!("Event {}", i), 10).await;
        }

        let response = ctx
            .api
            .events_list(Query(None), Query(None), Query(None), Query(None), &anonymous_request())
            .await
            .expect("list");

        assert_eq!(response.events.len(), 8);
        assert_eq!(response.total_results, 8);
    }

    #[tokio::test]
    async fn test_unknown_category_falls_back_to_all() {
        let (_db, ctx) = setup_test_api().await;
        create_event(&ctx, "Tech Talk", 10).await;

        let response = ctx
            .api
            .events_list(
                Query(None),
                Query(Some("Underwater".to_string())),
                Query(None),
                Query(None),
                &anonymous_request(),
            )
            .await
            .expect("list");

        assert_eq!(response.selected_category, "all");
        assert_eq!(response.total_results, 1);
    }

    #[tokio::test]
    async fn test_detail_unknown_event_is_not_found() {
        let (_db, ctx) = setup_test_api().await;

        let result = ctx
            .api
            .event_detail(Path("missing-id".to_string()), &anonymous_request())
            .await;
        assert!(matches!(result, Err(EventError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_register_requires_every_field() {
        let (_db, ctx) = setup_test_api().await;
        let auth = signed_in_user(&ctx, "avery@example.com").await;
        let event_id = create_event(&ctx, "Tech Talk", 10).await;

        let result = ctx
            .api
            .register_for_event(
                Path(event_id),
                auth,
                Json(RegisterForEventRequest {
                    attendee_name: None,
                    attendee_email: None,
                    department: None,
                    section: None,
                    student_uid: None,
                    team_selection: None,
                    agreement: None,
                }),
            )
            .await;

        match result {
            Err(EventError::ValidationFailed(json)) => {
                assert_eq!(json.0.messages.len(), 7);
            }
            _ => panic!("Expected ValidationFailed error"),
        }
    }

    #[tokio::test]
    async fn test_register_rejects_unknown_team_option() {
        let (_db, ctx) = setup_test_api().await;
        let auth = signed_in_user(&ctx, "avery@example.com").await;
        let event_id = create_event(&ctx, "Tech Talk", 10).await;

        let mut body = registration_body();
        body.0.team_selection = Some("Battalion".to_string());

        let result = ctx.api.register_for_event(Path(event_id), auth, body).await;
        match result {
            Err(EventError::ValidationFailed(json)) => {
                assert_eq!(json.0.messages, vec!["Select a valid team option.".to_string()]);
            }
            _ => panic!("Expected ValidationFailed error"),
        }
    }

    #[tokio::test]
    async fn test_register_conflicts_when_full() {
        let (_db, ctx) = setup_test_api().await;
        let first = signed_in_user(&ctx, "first@example.com").await;
        let second = signed_in_user(&ctx, "second@example.com").await;
        let event_id = create_event(&ctx, "Tiny", 1).await;

        ctx.api
            .register_for_event(Path(event_id.clone()), first, registration_body())
            .await
            .expect("first registration");

        let result = ctx
            .api
            .register_for_event(Path(event_id.clone()), second, registration_body())
            .await;
        assert!(matches!(result, Err(EventError::EventFull(_))));

        // The detail view confirms the event stayed at one registration
        let detail = ctx
            .api
            .event_detail(Path(event_id), &anonymous_request())
            .await
            .expect("detail");
        assert_eq!(detail.event.seats_remaining, 0);
        assert!(!detail.event.has_space);
    }

    #[tokio::test]
    async fn test_register_twice_conflicts() {
        let (_db, ctx) = setup_test_api().await;
        let auth = signed_in_user(&ctx, "avery@example.com").await;
        let event_id = create_event(&ctx, "Tech Talk", 10).await;

        ctx.api
            .register_for_event(
                Path(event_id.clone()),
                BearerAuth(Bearer {
                    token: auth.0.token.clone(),
                }),
                registration_body(),
            )
            .await
            .expect("first registration");

        let result = ctx
            .api
            .register_for_event(Path(event_id), auth, registration_body())
            .await;
        assert!(matches!(result, Err(EventError::AlreadyRegistered(_))));
    }

    #[tokio::test]
    async fn test_interest_remove_without_marker_warns() {
        let (_db, ctx) = setup_test_api().await;
        let auth = signed_in_user(&ctx, "avery@example.com").await;
        let event_id = create_event(&ctx, "Tech Talk", 10).await;

        let result = ctx
            .api
            .toggle_interest(
                Path(event_id),
                auth,
                Json(InterestRequest {
                    action: Some("remove".to_string()),
                    note: None,
                }),
            )
            .await;
        assert!(matches!(result, Err(EventError::NotInterested(_))));
    }

    #[tokio::test]
    async fn test_interest_save_then_visible_in_detail() {
        let (_db, ctx) = setup_test_api().await;
        let auth = signed_in_user(&ctx, "avery@example.com").await;
        let event_id = create_event(&ctx, "Tech Talk", 10).await;

        ctx.api
            .toggle_interest(
                Path(event_id.clone()),
                BearerAuth(Bearer {
                    token: auth.0.token.clone(),
                }),
                Json(InterestRequest {
                    action: None,
                    note: Some("front row".to_string()),
                }),
            )
            .await
            .expect("save interest");

        let detail = ctx
            .api
            .event_detail(Path(event_id), &authed_request(&auth))
            .await
            .expect("detail");
        assert!(detail.is_interested);
        assert_eq!(detail.interest_note, "front row");
        assert!(!detail.is_registered);
    }

    #[tokio::test]
    async fn test_my_registrations_lists_joined_events() {
        let (_db, ctx) = setup_test_api().await;
        let auth = signed_in_user(&ctx, "avery@example.com").await;
        let event_id = create_event(&ctx, "Tech Talk", 10).await;

        ctx.api
            .register_for_event(
                Path(event_id),
                BearerAuth(Bearer {
                    token: auth.0.token.clone(),
                }),
                registration_body(),
            )
            .await
            .expect("register");

        let mine = ctx.api.my_registrations(auth).await.expect("mine");
        assert_eq!(mine.registrations.len(), 1);
        assert_eq!(mine.registrations[0].event_title.as_deref(), Some("Tech Talk"));
    }
}
