use std::collections::HashMap;

use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
    TransactionTrait,
};
use uuid::Uuid;

use crate::errors::internal::RegistrationError;
use crate::types::db::{event, event_interest, registration};
use crate::types::internal::AdminScope;

/// The fixed team preference options offered on the registration form
pub const TEAM_OPTIONS: [&str; 5] = ["Solo", "Pair", "Trio", "Squad", "Open Team"];

/// Validated attendee snapshot captured at registration time
#[derive(Debug, Clone)]
pub struct AttendeeDetails {
    pub attendee_name: String,
    pub attendee_email: String,
    pub department: String,
    pub section: String,
    pub student_uid: String,
    pub team_selection: String,
}

/// RegistrationStore manages seat-holding registrations and interest
/// markers for the (user, event) pair state machine
pub struct RegistrationStore {
    db: DatabaseConnection,
}

#[derive(FromQueryResult)]
struct EventIdCount {
    event_id: String,
    count: i64,
}

impl RegistrationStore {
    /// Create a new RegistrationStore with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find(
        &self,
        user_id: &str,
        event_id: &str,
    ) -> Result<Option<registration::Model>, DbErr> {
        registration::Entity::find()
            .filter(registration::Column::UserId.eq(user_id))
            .filter(registration::Column::EventId.eq(event_id))
            .one(&self.db)
            .await
    }

    /// Register a user for an event.
    ///
    /// Inside one transaction: re-check capacity and the uniqueness of the
    /// (user, event) pair, delete any existing interest marker, insert the
    /// registration. Either both the interest removal and the insert become
    /// visible, or neither does.
    ///
    /// The capacity check is read-then-write with no locking; concurrent
    /// requests can over-admit past capacity (see DESIGN.md).
    pub async fn register(
        &self,
        user_id: &str,
        event_id: &str,
        details: AttendeeDetails,
    ) -> Result<registration::Model, RegistrationError> {
        let txn = self.db.begin().await?;

        let event = event::Entity::find_by_id(event_id)
            .one(&txn)
            .await?
            .ok_or(RegistrationError::EventNotFound)?;

        let registered = registration::Entity::find()
            .filter(registration::Column::EventId.eq(event_id))
            .count(&txn)
            .await?;
        if !event.has_space(registered) {
            return Err(RegistrationError::EventFull);
        }

        let existing = registration::Entity::find()
            .filter(registration::Column::UserId.eq(user_id))
            .filter(registration::Column::EventId.eq(event_id))
            .one(&txn)
            .await?;
        if existing.is_some() {
            return Err(RegistrationError::AlreadyRegistered);
        }

        // Registering supersedes any interest marker for the same pair
        event_interest::Entity::delete_many()
            .filter(event_interest::Column::UserId.eq(user_id))
            .filter(event_interest::Column::EventId.eq(event_id))
            .exec(&txn)
            .await?;

        let new_registration = registration::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            user_id: Set(user_id.to_string()),
            event_id: Set(event_id.to_string()),
            attendee_name: Set(details.attendee_name),
            attendee_email: Set(details.attendee_email),
            department: Set(Some(details.department)),
            section: Set(Some(details.section)),
            student_uid: Set(Some(details.student_uid)),
            team_selection: Set(Some(details.team_selection)),
            created_at: Set(Utc::now().naive_utc()),
        };
        let model = new_registration.insert(&txn).await?;

        txn.commit().await?;
        Ok(model)
    }

    /// Cancel a registration. Reports `NotRegistered` when none exists.
    pub async fn unregister(&self, user_id: &str, event_id: &str) -> Result<(), RegistrationError> {
        let registration = self
            .find(user_id, event_id)
            .await?
            .ok_or(RegistrationError::NotRegistered)?;

        registration::Entity::delete_by_id(registration.id)
            .exec(&self.db)
            .await?;
        Ok(())
    }

    pub async fn find_interest(
        &self,
        user_id: &str,
        event_id: &str,
    ) -> Result<Option<event_interest::Model>, DbErr> {
        event_interest::Entity::find()
            .filter(event_interest::Column::UserId.eq(user_id))
            .filter(event_interest::Column::EventId.eq(event_id))
            .one(&self.db)
            .await
    }

    /// Create an interest marker, or update the note of an existing one.
    /// A blank note is stored as no value, never as an empty string.
    pub async fn save_interest(
        &self,
        user_id: &str,
        event_id: &str,
        note: Option<String>,
    ) -> Result<event_interest::Model, DbErr> {
        let note = note
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        match self.find_interest(user_id, event_id).await? {
            Some(existing) => {
                let mut active: event_interest::ActiveModel = existing.into();
                active.note = Set(note);
                active.update(&self.db).await
            }
            None => {
                let new_interest = event_interest::ActiveModel {
                    id: Set(Uuid::new_v4().to_string()),
                    user_id: Set(user_id.to_string()),
                    event_id: Set(event_id.to_string()),
                    note: Set(note),
                    created_at: Set(Utc::now().naive_utc()),
                };
                new_interest.insert(&self.db).await
            }
        }
    }

    /// Remove an interest marker. Reports `NotInterested` when none exists.
    pub async fn remove_interest(
        &self,
        user_id: &str,
        event_id: &str,
    ) -> Result<(), RegistrationError> {
        let interest = self
            .find_interest(user_id, event_id)
            .await?
            .ok_or(RegistrationError::NotInterested)?;

        event_interest::Entity::delete_by_id(interest.id)
            .exec(&self.db)
            .await?;
        Ok(())
    }

    /// Event ids the user has marked interest in
    pub async fn interested_event_ids(&self, user_id: &str) -> Result<Vec<String>, DbErr> {
        let rows: Vec<(String,)> = event_interest::Entity::find()
            .filter(event_interest::Column::UserId.eq(user_id))
            .select_only()
            .column(event_interest::Column::EventId)
            .into_tuple()
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(|(event_id,)| event_id).collect())
    }

    pub async fn count_for_event(&self, event_id: &str) -> Result<u64, DbErr> {
        registration::Entity::find()
            .filter(registration::Column::EventId.eq(event_id))
            .count(&self.db)
            .await
    }

    /// Registration counts grouped by event, for rendering seat accounting
    /// across a listing in one query
    pub async fn counts_by_event(
        &self,
        event_ids: &[String],
    ) -> Result<HashMap<String, u64>, DbErr> {
        if event_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = registration::Entity::find()
            .filter(registration::Column::EventId.is_in(event_ids.iter().cloned()))
            .select_only()
            .column(registration::Column::EventId)
            .column_as(registration::Column::Id.count(), "count")
            .group_by(registration::Column::EventId)
            .into_model::<EventIdCount>()
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| (row.event_id, row.count.max(0) as u64))
            .collect())
    }

    pub async fn count_for_user(&self, user_id: &str) -> Result<u64, DbErr> {
        registration::Entity::find()
            .filter(registration::Column::UserId.eq(user_id))
            .count(&self.db)
            .await
    }

    pub async fn total_count(&self) -> Result<u64, DbErr> {
        registration::Entity::find().count(&self.db).await
    }

    /// Registration count across the admin's scope
    pub async fn count_scoped(&self, scope: &AdminScope) -> Result<u64, DbErr> {
        let mut select = registration::Entity::find();
        if let AdminScope::Category(category) = scope {
            select = select
                .join(JoinType::InnerJoin, registration::Relation::Event.def())
                .filter(event::Column::Category.eq(category.as_str()));
        }
        select.count(&self.db).await
    }

    /// The user's registrations with their events, ordered by event start
    pub async fn list_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<(registration::Model, Option<event::Model>)>, DbErr> {
        registration::Entity::find()
            .filter(registration::Column::UserId.eq(user_id))
            .find_also_related(event::Entity)
            .order_by_asc(event::Column::StartTime)
            .all(&self.db)
            .await
    }

    /// An event's registrations, newest first
    pub async fn list_for_event(
        &self,
        event_id: &str,
    ) -> Result<Vec<registration::Model>, DbErr> {
        registration::Entity::find()
            .filter(registration::Column::EventId.eq(event_id))
            .order_by_desc(registration::Column::CreatedAt)
            .all(&self.db)
            .await
    }

    /// An event's interest markers, newest first
    pub async fn interests_for_event(
        &self,
        event_id: &str,
    ) -> Result<Vec<event_interest::Model>, DbErr> {
        event_interest::Entity::find()
            .filter(event_interest::Column::EventId.eq(event_id))
            .order_by_desc(event_interest::Column::CreatedAt)
            .all(&self.db)
            .await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<registration::Model>, DbErr> {
        registration::Entity::find_by_id(id).one(&self.db).await
    }

    /// The attendee's other registrations, excluding the one under view,
    /// scope-filtered for non-super admins and ordered by event start
    /// descending
    pub async fn other_registrations(
        &self,
        user_id: &str,
        exclude_registration_id: &str,
        scope: &AdminScope,
    ) -> Result<Vec<(registration::Model, Option<event::Model>)>, DbErr> {
        let mut select = registration::Entity::find()
            .filter(registration::Column::UserId.eq(user_id))
            .filter(registration::Column::Id.ne(exclude_registration_id))
            .find_also_related(event::Entity);

        if let AdminScope::Category(category) = scope {
            select = select.filter(event::Column::Category.eq(category.as_str()));
        }

        select
            .order_by_desc(event::Column::StartTime)
            .all(&self.db)
            .await
    }

    /// The most recent registrations with their events, newest first
    pub async fn recent(
        &self,
        limit: u64,
    ) -> Result<Vec<(registration::Model, Option<event::Model>)>, DbErr> {
        registration::Entity::find()
            .find_also_related(event::Entity)
            .order_by_desc(registration::Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
    }

    /// Registrations created in the half-open interval `[start, end)`
    pub async fn count_created_between(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<u64, DbErr> {
        registration::Entity::find()
            .filter(registration::Column::CreatedAt.gte(start))
            .filter(registration::Column::CreatedAt.lt(end))
            .count(&self.db)
            .await
    }
}
