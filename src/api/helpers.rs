use poem_openapi::auth::Bearer;

use crate::errors::internal::{AccessError, SessionError};
use crate::services::TokenService;
use crate::stores::UserStore;
use crate::types::db::{event, user};
use crate::types::internal::AdminScope;

/// Resolve the session principal from a bearer token: validate the token,
/// then load the account it names.
pub async fn current_user(
    users: &UserStore,
    tokens: &TokenService,
    bearer: &Bearer,
) -> Result<user::Model, SessionError> {
    let claims = tokens.validate(&bearer.token)?;
    users
        .find_by_id(&claims.sub)
        .await?
        .ok_or(SessionError::UnknownUser)
}

/// Guard for admin-only handlers. Distinguishes the unauthenticated case
/// (handled upstream by token validation) from a signed-in non-admin, and
/// yields the admin's scope for downstream filtering. An admin row whose
/// scope is not a known category is refused like a non-admin.
pub fn require_admin(user: &user::Model) -> Result<AdminScope, AccessError> {
    if !user.is_admin {
        return Err(AccessError::AdminRequired);
    }
    AdminScope::of(user).ok_or(AccessError::AdminRequired)
}

/// Single-resource scope check: a scoped admin may only touch events of
/// their own category.
pub fn ensure_event_access(scope: &AdminScope, event: &event::Model) -> Result<(), AccessError> {
    if scope.allows_label(&event.category) {
        Ok(())
    } else {
        Err(AccessError::ScopeForbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crate::types::internal::EventCategory;

    fn user(is_admin: bool, scope: &str) -> user::Model {
        user::Model {
            id: "u1".to_string(),
            name: "User".to_string(),
            email: "user@example.com".to_string(),
            password_hash: "hash".to_string(),
            is_admin,
            admin_scope: scope.to_string(),
            created_at: Utc::now().naive_utc(),
        }
    }

    fn event(category: &str) -> event::Model {
        let start = Utc::now().naive_utc();
        event::Model {
            id: "e1".to_string(),
            title: "Event".to_string(),
            summary: "Summary".to_string(),
            description: "Description".to_string(),
            location: "Hall".to_string(),
            start_time: start,
            end_time: start + chrono::Duration::hours(1),
            capacity: 10,
            category: category.to_string(),
            image_url: None,
            created_at: start,
        }
    }

    #[test]
    fn test_require_admin_rejects_regular_users() {
        let result = require_admin(&user(false, "super"));
        assert!(matches!(result, Err(AccessError::AdminRequired)));
    }

    #[test]
    fn test_require_admin_yields_scope() {
        assert_eq!(require_admin(&user(true, "super")).unwrap(), AdminScope::Super);
        assert_eq!(
            require_admin(&user(true, "Arts")).unwrap(),
            AdminScope::Category(EventCategory::Arts)
        );
    }

    #[test]
    fn test_ensure_event_access_for_scoped_admin() {
        let scope = AdminScope::Category(EventCategory::Arts);
        assert!(ensure_event_access(&scope, &event("Arts")).is_ok());
        assert!(matches!(
            ensure_event_access(&scope, &event("Technical")),
            Err(AccessError::ScopeForbidden)
        ));
    }

    #[test]
    fn test_ensure_event_access_for_super_admin() {
        for category in ["Arts", "Cultural", "Technical", "Science", "Sports"] {
            assert!(ensure_event_access(&AdminScope::Super, &event(category)).is_ok());
        }
    }
}
