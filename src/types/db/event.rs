use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    pub summary: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub location: String,
    pub start_time: DateTime,
    pub end_time: DateTime,
    pub capacity: i32,
    pub category: String,
    pub image_url: Option<String>,
    pub created_at: DateTime,
}

impl Model {
    /// Capacity minus the given registration count, floored at zero.
    pub fn seats_remaining(&self, registration_count: u64) -> i64 {
        (i64::from(self.capacity) - registration_count as i64).max(0)
    }

    pub fn has_space(&self, registration_count: u64) -> bool {
        self.seats_remaining(registration_count) > 0
    }

    pub fn date_label(&self) -> String {
        self.start_time.format("%B %d, %Y").to_string()
    }

    pub fn day_label(&self) -> String {
        self.start_time.format("%A").to_string()
    }

    pub fn time_range(&self) -> String {
        format!(
            "{} - {}",
            self.start_time.format("%I:%M %p"),
            self.end_time.format("%I:%M %p")
        )
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::registration::Entity")]
    Registrations,
    #[sea_orm(has_many = "super::event_interest::Entity")]
    Interests,
}

impl Related<super::registration::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Registrations.def()
    }
}

impl Related<super::event_interest::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Interests.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
