use std::sync::Arc;

use chrono::{NaiveDateTime, Utc};
use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};

use crate::api::{helpers, BearerAuth};
use crate::errors::AdminError;
use crate::services::TokenService;
use crate::stores::{EventStore, NewEvent, RegistrationStore, UserStore};
use crate::types::dto::admin::{
    DashboardResponse, EventFormRequest, EventRegistrationsResponse, InterestView,
    RegistrationDetailResponse,
};
use crate::types::dto::auth::UserProfile;
use crate::types::dto::common::MessageResponse;
use crate::types::dto::events::{EventView, RegistrationView};
use crate::types::internal::{AdminScope, EventCategory};

/// Admin management API. Every handler resolves the session, requires the
/// admin flag, and passes reads and writes through the caller's scope.
pub struct AdminApi {
    events: Arc<EventStore>,
    registrations: Arc<RegistrationStore>,
    users: Arc<UserStore>,
    tokens: Arc<TokenService>,
}

/// API tags for admin endpoints
#[derive(Tags)]
enum AdminTags {
    /// Scoped event and registration management
    Admin,
}

impl AdminApi {
    /// Create a new AdminApi with the given stores and TokenService
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

    /// Shared guard prelude: session, admin flag, scope
    async fn admin_scope(&self, auth: &BearerAuth) -> Result<AdminScope, AdminError> {
        let user = helpers::current_user(&self.users, &self.tokens, &auth.0)
            .await
            .map_err(AdminError::from)?;
        helpers::require_admin(&user).map_err(AdminError::from)
    }

    async fn event_view(&self, event: &crate::types::db::event::Model) -> Result<EventView, AdminError> {
        let count = self.registrations.count_for_event(&event.id).await?;
        Ok(EventView::from_model(event, count))
    }
}

fn parse_form_datetime(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()
}

/// Extract and validate the common event fields, collecting every problem
/// into one message list.
fn validate_event_form(body: &EventFormRequest) -> Result<NewEvent, AdminError> {
    let title = body.title.as_deref().unwrap_or("").trim().to_string();
    let summary = body.summary.as_deref().unwrap_or("").trim().to_string();
    let description = body.description.as_deref().unwrap_or("").trim().to_string();
    let location = body.location.as_deref().unwrap_or("").trim().to_string();
    let image_url = body
        .image_url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .map(str::to_string);

    let mut errors = Vec::new();
    for (value, label) in [
        (&title, "Title"),
        (&summary, "Summary"),
        (&description, "Description"),
        (&location, "Location"),
    ] {
        if value.is_empty() {
            errors.push(format!("{} is required.", label));
        }
    }

    let start_time = body
        .start_time
        .as_deref()
        .map(str::trim)
        .and_then(parse_form_datetime);
    if start_time.is_none() {
        errors.push("Start time must be a valid date/time.".to_string());
    }
    let end_time = body
        .end_time
        .as_deref()
        .map(str::trim)
        .and_then(parse_form_datetime);
    if end_time.is_none() {
        errors.push("End time must be a valid date/time.".to_string());
    }
    if let (Some(start), Some(end)) = (start_time, end_time) {
        if end <= start {
            errors.push("End time must be after the start time.".to_string());
        }
    }

    let capacity = body.capacity.filter(|c| *c > 0);
    if capacity.is_none() {
        errors.push("Capacity must be a positive integer.".to_string());
    }

    let category = body
        .category
        .as_deref()
        .map(str::trim)
        .and_then(EventCategory::parse);
    if category.is_none() {
        errors.push("Select a valid event type.".to_string());
    }

    if !errors.is_empty() {
        return Err(AdminError::validation_failed(errors));
    }

    // All fields verified present above
    match (start_time, end_time, capacity, category) {
        (Some(start_time), Some(end_time), Some(capacity), Some(category)) => Ok(NewEvent {
            title,
            summary,
            description,
            location,
            start_time,
            end_time,
            capacity,
            category,
            image_url,
        }),
        _ => Err(AdminError::validation_failed(vec![
            "Event form could not be processed.".to_string(),
        ])),
    }
}

#[OpenApi(prefix_path = "/admin")]
impl AdminApi {
    /// Admin dashboard
    ///
    /// Scope-filtered events ordered by start time, plus the registration
    /// and upcoming-event counts across the same scope. Read-only.
    #[oai(path = "/dashboard", method = "get", tag = "AdminTags::Admin")]
    async fn dashboard(&self, auth: BearerAuth) -> Result<Json<DashboardResponse>, AdminError> {
        let scope = self.admin_scope(&auth).await?;
        let now = Utc::now().naive_utc();

        let events = self.events.list_scoped(&scope).await?;
        let ids: Vec<String> = events.iter().map(|e| e.id.clone()).collect();
        let counts = self.registrations.counts_by_event(&ids).await?;
        let event_views = events
            .iter()
            .map(|e| EventView::from_model(e, counts.get(&e.id).copied().unwrap_or(0)))
            .collect();

        let total_registrations = self.registrations.count_scoped(&scope).await? as i64;
        let upcoming_events = self.events.upcoming_count_scoped(&scope, now).await? as i64;

        Ok(Json(DashboardResponse {
            events: event_views,
            total_registrations,
            upcoming_events,
            admin_scope: scope.label().to_string(),
        }))
    }

    /// Create an event
    ///
    /// Non-super admins always create into their own category, whatever
    /// the form says.
    #[oai(path = "/events/new", method = "post", tag = "AdminTags::Admin")]
    async fn create_event(
        &self,
        auth: BearerAuth,
        body: Json<EventFormRequest>,
    ) -> Result<Json<EventView>, AdminError> {
        let scope = self.admin_scope(&auth).await?;

        let mut form = validate_event_form(&body.0)?;
        if let AdminScope::Category(own) = scope {
            form.category = own;
        }

        let event = self.events.create(form).await?;
        Ok(Json(EventView::from_model(&event, 0)))
    }

    /// Edit an event
    ///
    /// Scope-checked against the stored event; a scoped admin can neither
    /// touch another category's event nor move one of their own out of
    /// their category.
    #[oai(path = "/events/:event_id/edit", method = "post", tag = "AdminTags::Admin")]
    async fn edit_event(
        &self,
        event_id: Path<String>,
        auth: BearerAuth,
        body: Json<EventFormRequest>,
    ) -> Result<Json<EventView>, AdminError> {
        let scope = self.admin_scope(&auth).await?;
        let event = self
            .events
            .find_by_id(&event_id.0)
            .await?
            .ok_or_else(AdminError::event_not_found)?;
        helpers::ensure_event_access(&scope, &event).map_err(AdminError::from)?;

        let mut form = validate_event_form(&body.0)?;
        if let AdminScope::Category(own) = scope {
            form.category = own;
        }

        let updated = self.events.update(event, form).await?;
        self.event_view(&updated).await.map(Json)
    }

    /// Delete an event
    ///
    /// Scope-checked; removes the event's registrations and interest
    /// markers with it.
    #[oai(path = "/events/:event_id/delete", method = "post", tag = "AdminTags::Admin")]
    async fn delete_event(
        &self,
        event_id: Path<String>,
        auth: BearerAuth,
    ) -> Result<Json<MessageResponse>, AdminError> {
        let scope = self.admin_scope(&auth).await?;
        let event = self
            .events
            .find_by_id(&event_id.0)
            .await?
            .ok_or_else(AdminError::event_not_found)?;
        helpers::ensure_event_access(&scope, &event).map_err(AdminError::from)?;

        self.events.delete(event).await?;
        Ok(Json(MessageResponse::new("Event deleted successfully.")))
    }

    /// An event's registration roster and interest list
    #[oai(
        path = "/events/:event_id/registrations",
        method = "get",
        tag = "AdminTags::Admin"
    )]
    async fn event_registrations(
        &self,
        event_id: Path<String>,
        auth: BearerAuth,
    ) -> Result<Json<EventRegistrationsResponse>, AdminError> {
        let scope = self.admin_scope(&auth).await?;
        let event = self
            .events
            .find_by_id(&event_id.0)
            .await?
            .ok_or_else(AdminError::event_not_found)?;
        helpers::ensure_event_access(&scope, &event).map_err(AdminError::from)?;

        let registrations = self
            .registrations
            .list_for_event(&event.id)
            .await?
            .iter()
            .map(|r| RegistrationView::from_model(r, Some(&event)))
            .collect();
        let interests = self
            .registrations
            .interests_for_event(&event.id)
            .await?
            .iter()
            .map(InterestView::from_model)
            .collect();

        Ok(Json(EventRegistrationsResponse {
            event: self.event_view(&event).await?,
            registrations,
            interests,
        }))
    }

    /// Registration detail with the attendee's cross-event history
    ///
    /// Scope-checked against the registration's event; the same-attendee
    /// cross-lookup is itself scope-filtered.
    #[oai(
        path = "/registrations/:registration_id",
        method = "get",
        tag = "AdminTags::Admin"
    )]
    async fn registration_detail(
        &self,
        registration_id: Path<String>,
        auth: BearerAuth,
    ) -> Result<Json<RegistrationDetailResponse>, AdminError> {
        let scope = self.admin_scope(&auth).await?;
        let registration = self
            .registrations
            .find_by_id(&registration_id.0)
            .await?
            .ok_or_else(AdminError::registration_not_found)?;

        let event = self
            .events
            .find_by_id(&registration.event_id)
            .await?
            .ok_or_else(|| {
                AdminError::internal_error("Registration references a missing event".to_string())
            })?;
        helpers::ensure_event_access(&scope, &event).map_err(AdminError::from)?;

        let attendee = self
            .users
            .find_by_id(&registration.user_id)
            .await?
            .ok_or_else(|| {
                AdminError::internal_error("Registration references a missing account".to_string())
            })?;

        let other_registrations = self
            .registrations
            .other_registrations(&attendee.id, &registration.id, &scope)
            .await?
            .iter()
            .map(|(r, e)| RegistrationView::from_model(r, e.as_ref()))
            .collect();

        Ok(Json(RegistrationDetailResponse {
            registration: RegistrationView::from_model(&registration, Some(&event)),
            event: self.event_view(&event).await?,
            attendee: UserProfile::from_model(&attendee),
            other_registrations,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use migration::{Migrator, MigratorTrait};
    use poem_openapi::auth::Bearer;
    use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};
    use uuid::Uuid;

    use crate::services::crypto;
    use crate::stores::AttendeeDetails;
    use crate::types::db::user;

    struct TestContext {
        api: AdminApi,
        events: Arc<EventStore>,
        registrations: Arc<RegistrationStore>,
        users: Arc<UserStore>,
        tokens: Arc<TokenService>,
        db: DatabaseConnection,
    }

    async fn setup_test_api() -> TestContext {
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

        let api = AdminApi::new(
            events.clone(),
            registrations.clone(),
            users.clone(),
            tokens.clone(),
        );

        TestContext {
            api,
            events,
            registrations,
            users,
            tokens,
            db,
        }
    }

    async fn seed_account(ctx: &TestContext, email: &str, is_admin: bool, scope: &str) -> String {
        let account = user::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set("Account".to_string()),
            email: Set(email.to_string()),
            password_hash: Set(crypto::hash_password("password123").expect("hash")),
            is_admin: Set(is_admin),
            admin_scope: Set(scope.to_string()),
            created_at: Set(Utc::now().naive_utc()),
        };
        account.insert(&ctx.db).await.expect("insert account").id
    }

    async fn bearer_for(ctx: &TestContext, user_id: &str) -> BearerAuth {
        BearerAuth(Bearer {
            token: ctx.tokens.generate(user_id).expect("token"),
        })
    }

    async fn create_event(ctx: &TestContext, title: &str, category: EventCategory) -> String {
        let start = Utc::now().naive_utc() + Duration::days(2);
        ctx.events
            .create(NewEvent {
                title: title.to_string(),
                summary: "Summary".to_string(),
                description: "Description".to_string(),
                location: "Hall".to_string(),
                start_time: start,
                end_time: start + Duration::hours(2),
                capacity: 40,
                category,
                image_url: None,
            })
            .await
            .expect("create event")
            .id
    }

    fn event_form(category: &str) -> Json<EventFormRequest> {
        Json(EventFormRequest {
            title: Some("Formed Event".to_string()),
            summary: Some("Summary".to_string()),
            description: Some("Description".to_string()),
            location: Some("Hall".to_string()),
            start_time: Some("2025-09-01T10:00".to_string()),
            end_time: Some("2025-09-01T12:00".to_string()),
            capacity: Some(25),
            category: Some(category.to_string()),
            image_url: None,
        })
    }

    fn attendee() -> AttendeeDetails {
        AttendeeDetails {
            attendee_name: "Avery Stone".to_string(),
            attendee_email: "avery@example.com".to_string(),
            department: "Physics".to_string(),
            section: "B2".to_string(),
            student_uid: "PHY-2211".to_string(),
            team_selection: "Solo".to_string(),
        }
    }

    #[tokio::test]
    async fn test_non_admin_is_refused_with_admin_required() {
        let ctx = setup_test_api().await;
        let user_id = seed_account(&ctx, "user@example.com", false, "super").await;
        let auth = bearer_for(&ctx, &user_id).await;

        let result = ctx.api.dashboard(auth).await;
        assert!(matches!(result, Err(AdminError::AdminRequired(_))));
    }

    #[tokio::test]
    async fn test_unauthenticated_is_refused_with_invalid_token() {
        let ctx = setup_test_api().await;
        let auth = BearerAuth(Bearer {
            token: "garbage".to_string(),
        });

        // Distinct from the signed-in non-admin outcome
        let result = ctx.api.dashboard(auth).await;
        assert!(matches!(result, Err(AdminError::InvalidToken(_))));
    }

    #[tokio::test]
    async fn test_dashboard_is_scope_filtered() {
        let ctx = setup_test_api().await;
        let arts_event = create_event(&ctx, "Gallery Night", EventCategory::Arts).await;
        create_event(&ctx, "Tech Talk", EventCategory::Technical).await;

        let registrant = seed_account(&ctx, "registrant@example.com", false, "super").await;
        ctx.registrations
            .register(&registrant, &arts_event, attendee())
            .await
            .expect("register");

        let arts_admin = seed_account(&ctx, "arts@example.com", true, "Arts").await;
        let dashboard = ctx
            .api
            .dashboard(bearer_for(&ctx, &arts_admin).await)
            .await
            .expect("dashboard");

        assert_eq!(dashboard.events.len(), 1);
        assert_eq!(dashboard.events[0].title, "Gallery Night");
        assert_eq!(dashboard.total_registrations, 1);
        assert_eq!(dashboard.upcoming_events, 1);
        assert_eq!(dashboard.admin_scope, "Arts");

        let super_admin = seed_account(&ctx, "super@example.com", true, "super").await;
        let dashboard = ctx
            .api
            .dashboard(bearer_for(&ctx, &super_admin).await)
            .await
            .expect("dashboard");
        assert_eq!(dashboard.events.len(), 2);
        assert_eq!(dashboard.admin_scope, "super");
    }

    #[tokio::test]
    async fn test_create_forces_category_to_admin_scope() {
        let ctx = setup_test_api().await;
        let arts_admin = seed_account(&ctx, "arts@example.com", true, "Arts").await;

        // The form asks for Technical; the scoped admin gets Arts anyway
        let created = ctx
            .api
            .create_event(bearer_for(&ctx, &arts_admin).await, event_form("Technical"))
            .await
            .expect("create");
        assert_eq!(created.category, "Arts");

        let super_admin = seed_account(&ctx, "super@example.com", true, "super").await;
        let created = ctx
            .api
            .create_event(bearer_for(&ctx, &super_admin).await, event_form("Technical"))
            .await
            .expect("create");
        assert_eq!(created.category, "Technical");
    }

    #[tokio::test]
    async fn test_create_collects_validation_messages() {
        let ctx = setup_test_api().await;
        let admin = seed_account(&ctx, "super@example.com", true, "super").await;

        let result = ctx
            .api
            .create_event(
                bearer_for(&ctx, &admin).await,
                Json(EventFormRequest {
                    title: None,
                    summary: Some("Summary".to_string()),
                    description: Some("Description".to_string()),
                    location: Some("Hall".to_string()),
                    start_time: Some("2025-09-01T12:00".to_string()),
                    end_time: Some("2025-09-01T10:00".to_string()),
                    capacity: Some(0),
                    category: Some("Nonsense".to_string()),
                    image_url: None,
                }),
            )
            .await;

        match result {
            Err(AdminError::ValidationFailed(json)) => {
                let messages = &json.0.messages;
                assert!(messages.contains(&"Title is required.".to_string()));
                assert!(messages.contains(&"End time must be after the start time.".to_string()));
                assert!(messages.contains(&"Capacity must be a positive integer.".to_string()));
                assert!(messages.contains(&"Select a valid event type.".to_string()));
            }
            _ => panic!("Expected ValidationFailed error"),
        }
    }

    #[tokio::test]
    async fn test_create_round_trips_valid_iso_timestamps() {
        let ctx = setup_test_api().await;
        let admin = seed_account(&ctx, "super@example.com", true, "super").await;

        let created = ctx
            .api
            .create_event(bearer_for(&ctx, &admin).await, event_form("Science"))
            .await
            .expect("create");

        let stored = ctx
            .events
            .find_by_id(&created.id)
            .await
            .expect("query")
            .expect("stored");
        assert_eq!(stored.title, "Formed Event");
        assert_eq!(stored.capacity, 25);
        assert_eq!(stored.category, "Science");
        assert_eq!(stored.start_time.format("%Y-%m-%dT%H:%M").to_string(), "2025-09-01T10:00");
        assert!(stored.end_time > stored.start_time);
    }

    #[tokio::test]
    async fn test_edit_outside_scope_is_forbidden() {
        let ctx = setup_test_api().await;
        let tech_event = create_event(&ctx, "Tech Talk", EventCategory::Technical).await;
        let arts_admin = seed_account(&ctx, "arts@example.com", true, "Arts").await;

        let result = ctx
            .api
            .edit_event(
                Path(tech_event),
                bearer_for(&ctx, &arts_admin).await,
                event_form("Technical"),
            )
            .await;
        assert!(matches!(result, Err(AdminError::ScopeForbidden(_))));
    }

    #[tokio::test]
    async fn test_edit_within_scope_updates_but_keeps_category() {
        let ctx = setup_test_api().await;
        let arts_event = create_event(&ctx, "Gallery Night", EventCategory::Arts).await;
        let arts_admin = seed_account(&ctx, "arts@example.com", true, "Arts").await;

        // The form tries to move the event to Technical
        let updated = ctx
            .api
            .edit_event(
                Path(arts_event),
                bearer_for(&ctx, &arts_admin).await,
                event_form("Technical"),
            )
            .await
            .expect("edit");

        assert_eq!(updated.title, "Formed Event");
        assert_eq!(updated.category, "Arts");
    }

    #[tokio::test]
    async fn test_delete_outside_scope_is_forbidden() {
        let ctx = setup_test_api().await;
        let tech_event = create_event(&ctx, "Tech Talk", EventCategory::Technical).await;
        let arts_admin = seed_account(&ctx, "arts@example.com", true, "Arts").await;

        let result = ctx
            .api
            .delete_event(Path(tech_event.clone()), bearer_for(&ctx, &arts_admin).await)
            .await;
        assert!(matches!(result, Err(AdminError::ScopeForbidden(_))));

        // Still there
        assert!(ctx
            .events
            .find_by_id(&tech_event)
            .await
            .expect("query")
            .is_some());
    }

    #[tokio::test]
    async fn test_super_admin_can_delete_any_category() {
        let ctx = setup_test_api().await;
        let tech_event = create_event(&ctx, "Tech Talk", EventCategory::Technical).await;
        let super_admin = seed_account(&ctx, "super@example.com", true, "super").await;

        ctx.api
            .delete_event(Path(tech_event.clone()), bearer_for(&ctx, &super_admin).await)
            .await
            .expect("delete");

        assert!(ctx
            .events
            .find_by_id(&tech_event)
            .await
            .expect("query")
            .is_none());
    }

    #[tokio::test]
    async fn test_event_registrations_is_scope_checked() {
        let ctx = setup_test_api().await;
        let tech_event = create_event(&ctx, "Tech Talk", EventCategory::Technical).await;
        let arts_admin = seed_account(&ctx, "arts@example.com", true, "Arts").await;

        let result = ctx
            .api
            .event_registrations(Path(tech_event), bearer_for(&ctx, &arts_admin).await)
            .await;
        assert!(matches!(result, Err(AdminError::ScopeForbidden(_))));
    }

    #[tokio::test]
    async fn test_event_registrations_lists_roster_and_interests() {
        let ctx = setup_test_api().await;
        let arts_event = create_event(&ctx, "Gallery Night", EventCategory::Arts).await;
        let registrant = seed_account(&ctx, "registrant@example.com", false, "super").await;
        let watcher = seed_account(&ctx, "watcher@example.com", false, "super").await;

        ctx.registrations
            .register(&registrant, &arts_event, attendee())
            .await
            .expect("register");
        ctx.registrations
            .save_interest(&watcher, &arts_event, Some("keep me posted".to_string()))
            .await
            .expect("interest");

        let arts_admin = seed_account(&ctx, "arts@example.com", true, "Arts").await;
        let roster = ctx
            .api
            .event_registrations(Path(arts_event), bearer_for(&ctx, &arts_admin).await)
            .await
            .expect("roster");

        assert_eq!(roster.registrations.len(), 1);
        assert_eq!(roster.registrations[0].attendee_name, "Avery Stone");
        assert_eq!(roster.interests.len(), 1);
        assert_eq!(roster.interests[0].note.as_deref(), Some("keep me posted"));
        assert_eq!(roster.event.seats_remaining, 39);
    }

    #[tokio::test]
    async fn test_registration_detail_scope_checks_event_and_cross_lookup() {
        let ctx = setup_test_api().await;
        let arts_event = create_event(&ctx, "Gallery Night", EventCategory::Arts).await;
        let tech_event = create_event(&ctx, "Tech Talk", EventCategory::Technical).await;
        let registrant = seed_account(&ctx, "registrant@example.com", false, "super").await;

        let arts_registration = ctx
            .registrations
            .register(&registrant, &arts_event, attendee())
            .await
            .expect("register");
        let tech_registration = ctx
            .registrations
            .register(&registrant, &tech_event, attendee())
            .await
            .expect("register");

        let arts_admin = seed_account(&ctx, "arts@example.com", true, "Arts").await;

        // Accessing the Technical registration is forbidden outright
        let result = ctx
            .api
            .registration_detail(
                Path(tech_registration.id.clone()),
                bearer_for(&ctx, &arts_admin).await,
            )
            .await;
        assert!(matches!(result, Err(AdminError::ScopeForbidden(_))));

        // The Arts registration is visible, but the cross-lookup must not
        // leak the attendee's Technical registration
        let detail = ctx
            .api
            .registration_detail(
                Path(arts_registration.id.clone()),
                bearer_for(&ctx, &arts_admin).await,
            )
            .await
            .expect("detail");
        assert_eq!(detail.attendee.email, "registrant@example.com");
        assert!(detail.other_registrations.is_empty());

        // A super admin sees the full history
        let super_admin = seed_account(&ctx, "super@example.com", true, "super").await;
        let detail = ctx
            .api
            .registration_detail(
                Path(arts_registration.id),
                bearer_for(&ctx, &super_admin).await,
            )
            .await
            .expect("detail");
        assert_eq!(detail.other_registrations.len(), 1);
        assert_eq!(
            detail.other_registrations[0].event_title.as_deref(),
            Some("Tech Talk")
        );
    }

    #[tokio::test]
    async fn test_unknown_ids_are_not_found() {
        let ctx = setup_test_api().await;
        let admin = seed_account(&ctx, "super@example.com", true, "super").await;

        let result = ctx
            .api
            .edit_event(
                Path("missing".to_string()),
                bearer_for(&ctx, &admin).await,
                event_form("Arts"),
            )
            .await;
        assert!(matches!(result, Err(AdminError::EventNotFound(_))));

        let result = ctx
            .api
            .registration_detail(Path("missing".to_string()), bearer_for(&ctx, &admin).await)
            .await;
        assert!(matches!(result, Err(AdminError::RegistrationNotFound(_))));
    }
}
