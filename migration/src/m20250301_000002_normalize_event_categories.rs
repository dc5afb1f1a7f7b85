use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Legacy databases carried free-text category labels. Rewrite them into the
/// closed category set; anything unrecognized becomes "Cultural".
const LEGACY_CATEGORY_MAP: &[(&str, &str)] = &[
    ("Workshop", "Technical"),
    ("Conference", "Technical"),
    ("Pitch Event", "Technical"),
    ("Bootcamp", "Technical"),
    ("Networking", "Cultural"),
    ("Hackathon", "Technical"),
    ("Talks", "Science"),
    ("Forum", "Science"),
    ("Masterclass", "Cultural"),
    ("Fireside Chat", "Cultural"),
    ("General", "Cultural"),
    ("Expo", "Cultural"),
    ("Clinic", "Technical"),
    ("Education", "Technical"),
    ("All", "Cultural"),
];

const CATEGORY_CHOICES: [&str; 5] = ["Arts", "Cultural", "Technical", "Science", "Sports"];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (legacy, target) in LEGACY_CATEGORY_MAP {
            manager
                .exec_stmt(
                    Query::update()
                        .table(Events::Table)
                        .value(Events::Category, *target)
                        .and_where(Expr::col(Events::Category).eq(*legacy))
                        .to_owned(),
                )
                .await?;
        }

        // Catch-all for labels the map does not know about
        manager
            .exec_stmt(
                Query::update()
                    .table(Events::Table)
                    .value(Events::Category, "Cultural")
                    .and_where(Expr::col(Events::Category).is_not_in(CATEGORY_CHOICES))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        // The original free-text labels are not recoverable
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Events {
    Table,
    Category,
}
