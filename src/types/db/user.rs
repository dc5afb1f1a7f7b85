use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,

    // Admin tiering: scope is a category name, or "super"/empty for
    // unrestricted access
    pub is_admin: bool,
    pub admin_scope: String,

    pub created_at: DateTime,
}

impl Model {
    /// A super admin is an admin whose scope is empty or the "super"
    /// sentinel (case-insensitive).
    pub fn is_super_admin(&self) -> bool {
        if !self.is_admin {
            return false;
        }
        let scope = self.admin_scope.trim();
        scope.is_empty() || scope.eq_ignore_ascii_case("super")
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
