use chrono::{NaiveDateTime, Utc};
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, Set,
    TransactionTrait,
};
use uuid::Uuid;

use crate::types::db::{event, event_interest, registration};
use crate::types::internal::{AdminScope, EventCategory, Timeframe};

/// Catalog filters as resolved from the listing query parameters
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Exact category, or `None` for "all"
    pub category: Option<EventCategory>,
    /// Case-insensitive substring matched against title, summary, or
    /// location
    pub search: Option<String>,
    pub timeframe: Timeframe,
}

/// Validated field set for creating or updating an event
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub summary: String,
    pub description: String,
    pub location: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub capacity: i32,
    pub category: EventCategory,
    pub image_url: Option<String>,
}

/// EventStore manages the event catalog: filtered listings, admin-scoped
/// queries, and event lifecycle
pub struct EventStore {
    db: DatabaseConnection,
}

#[derive(FromQueryResult)]
struct CapacitySum {
    total: Option<i64>,
}

impl EventStore {
    /// Create a new EventStore with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn apply_filter(
        mut select: Select<event::Entity>,
        filter: &EventFilter,
        now: NaiveDateTime,
    ) -> Select<event::Entity> {
        if let Some(category) = filter.category {
            select = select.filter(event::Column::Category.eq(category.as_str()));
        }

        if let Some(search) = filter.search.as_deref().filter(|s| !s.trim().is_empty()) {
            let pattern = format!("%{}%", search.trim().to_lowercase());
            select = select.filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col((
                            event::Entity,
                            event::Column::Title,
                        ))))
                        .like(pattern.as_str()),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col((
                            event::Entity,
                            event::Column::Summary,
                        ))))
                        .like(pattern.as_str()),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col((
                            event::Entity,
                            event::Column::Location,
                        ))))
                        .like(pattern.as_str()),
                    ),
            );
        }

        if let Some((start, end)) = filter.timeframe.bounds(now) {
            select = select
                .filter(event::Column::StartTime.gte(start))
                .filter(event::Column::StartTime.lt(end));
        }

        select
    }

    /// Full filtered catalog, ascending by start time
    pub async fn list(
        &self,
        filter: &EventFilter,
        now: NaiveDateTime,
    ) -> Result<Vec<event::Model>, DbErr> {
        Self::apply_filter(event::Entity::find(), filter, now)
            .order_by_asc(event::Column::StartTime)
            .all(&self.db)
            .await
    }

    /// Filtered upcoming events capped to `limit`, plus the true filtered
    /// total before the cap
    pub async fn list_upcoming_preview(
        &self,
        filter: &EventFilter,
        now: NaiveDateTime,
        limit: u64,
    ) -> Result<(Vec<event::Model>, u64), DbErr> {
        let base = Self::apply_filter(
            event::Entity::find().filter(event::Column::StartTime.gte(now)),
            filter,
            now,
        );

        let total = base.clone().count(&self.db).await?;
        let preview = base
            .order_by_asc(event::Column::StartTime)
            .limit(limit)
            .all(&self.db)
            .await?;

        Ok((preview, total))
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<event::Model>, DbErr> {
        event::Entity::find_by_id(id).one(&self.db).await
    }

    pub async fn create(&self, form: NewEvent) -> Result<event::Model, DbErr> {
        let new_event = event::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            title: Set(form.title),
            summary: Set(form.summary),
            description: Set(form.description),
            location: Set(form.location),
            start_time: Set(form.start_time),
            end_time: Set(form.end_time),
            capacity: Set(form.capacity),
            category: Set(form.category.as_str().to_string()),
            image_url: Set(form.image_url),
            created_at: Set(Utc::now().naive_utc()),
        };

        new_event.insert(&self.db).await
    }

    pub async fn update(
        &self,
        event: event::Model,
        form: NewEvent,
    ) -> Result<event::Model, DbErr> {
        let mut active: event::ActiveModel = event.into();
        active.title = Set(form.title);
        active.summary = Set(form.summary);
        active.description = Set(form.description);
        active.location = Set(form.location);
        active.start_time = Set(form.start_time);
        active.end_time = Set(form.end_time);
        active.capacity = Set(form.capacity);
        active.category = Set(form.category.as_str().to_string());
        active.image_url = Set(form.image_url);
        active.update(&self.db).await
    }

    /// Delete an event together with its registrations and interest
    /// markers, as one atomic unit
    pub async fn delete(&self, event: event::Model) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        event_interest::Entity::delete_many()
            .filter(event_interest::Column::EventId.eq(event.id.clone()))
            .exec(&txn)
            .await?;

        registration::Entity::delete_many()
            .filter(registration::Column::EventId.eq(event.id.clone()))
            .exec(&txn)
            .await?;

        event::Entity::delete_by_id(event.id).exec(&txn).await?;

        txn.commit().await
    }

    /// Distinct category labels present in the catalog, ordered
    pub async fn distinct_categories(&self) -> Result<Vec<String>, DbErr> {
        let rows: Vec<(String,)> = event::Entity::find()
            .select_only()
            .column(event::Column::Category)
            .distinct()
            .order_by_asc(event::Column::Category)
            .into_tuple()
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(|(category,)| category).collect())
    }

    pub async fn total_count(&self) -> Result<u64, DbErr> {
        event::Entity::find().count(&self.db).await
    }

    pub async fn upcoming_count(&self, now: NaiveDateTime) -> Result<u64, DbErr> {
        event::Entity::find()
            .filter(event::Column::StartTime.gte(now))
            .count(&self.db)
            .await
    }

    /// Sum of all event capacities
    pub async fn total_capacity(&self) -> Result<i64, DbErr> {
        let sum = event::Entity::find()
            .select_only()
            .column_as(event::Column::Capacity.sum(), "total")
            .into_model::<CapacitySum>()
            .one(&self.db)
            .await?;
        Ok(sum.and_then(|s| s.total).unwrap_or(0))
    }

    /// The earliest event by start time, regardless of filters
    pub async fn first_by_start(&self) -> Result<Option<event::Model>, DbErr> {
        event::Entity::find()
            .order_by_asc(event::Column::StartTime)
            .one(&self.db)
            .await
    }

    /// The first `limit` events by start time
    pub async fn first_events(&self, limit: u64) -> Result<Vec<event::Model>, DbErr> {
        event::Entity::find()
            .order_by_asc(event::Column::StartTime)
            .limit(limit)
            .all(&self.db)
            .await
    }

    fn apply_scope(select: Select<event::Entity>, scope: &AdminScope) -> Select<event::Entity> {
        match scope {
            AdminScope::Super => select,
            AdminScope::Category(category) => {
                select.filter(event::Column::Category.eq(category.as_str()))
            }
        }
    }

    /// Events visible to the given admin, ordered by start time
    pub async fn list_scoped(&self, scope: &AdminScope) -> Result<Vec<event::Model>, DbErr> {
        Self::apply_scope(event::Entity::find(), scope)
            .order_by_asc(event::Column::StartTime)
            .all(&self.db)
            .await
    }

    /// Upcoming event count across the admin's scope
    pub async fn upcoming_count_scoped(
        &self,
        scope: &AdminScope,
        now: NaiveDateTime,
    ) -> Result<u64, DbErr> {
        Self::apply_scope(
            event::Entity::find().filter(event::Column::StartTime.gte(now)),
            scope,
        )
        .count(&self.db)
        .await
    }
}
