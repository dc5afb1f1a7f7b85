use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::PasswordHash)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::IsAdmin)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Users::AdminScope)
                            .string()
                            .not_null()
                            .default("super"),
                    )
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_email")
                    .table(Users::Table)
                    .col(Users::Email)
                    .to_owned(),
            )
            .await?;

        // Create events table
        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Events::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Events::Title).string().not_null())
                    .col(ColumnDef::new(Events::Summary).string().not_null())
                    .col(ColumnDef::new(Events::Description).text().not_null())
                    .col(ColumnDef::new(Events::Location).string().not_null())
                    .col(
                        ColumnDef::new(Events::StartTime)
                            .date_time()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Events::EndTime).date_time().not_null())
                    .col(ColumnDef::new(Events::Capacity).integer().not_null())
                    .col(ColumnDef::new(Events::Category).string().not_null())
                    .col(ColumnDef::new(Events::ImageUrl).string().null())
                    .col(
                        ColumnDef::new(Events::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_events_start_time")
                    .table(Events::Table)
                    .col(Events::StartTime)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_events_category")
                    .table(Events::Table)
                    .col(Events::Category)
                    .to_owned(),
            )
            .await?;

        // Create registrations table with the denormalized attendee snapshot
        manager
            .create_table(
                Table::create()
                    .table(Registrations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Registrations::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Registrations::UserId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Registrations::EventId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Registrations::AttendeeName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Registrations::AttendeeEmail)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Registrations::Department).string().null())
                    .col(ColumnDef::new(Registrations::Section).string().null())
                    .col(ColumnDef::new(Registrations::StudentUid).string().null())
                    .col(
                        ColumnDef::new(Registrations::TeamSelection)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Registrations::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_registrations_user_id")
                            .from(Registrations::Table, Registrations::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_registrations_event_id")
                            .from(Registrations::Table, Registrations::EventId)
                            .to(Events::Table, Events::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One registration per (user, event) pair
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_registrations_user_event")
                    .table(Registrations::Table)
                    .col(Registrations::UserId)
                    .col(Registrations::EventId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_registrations_event_id")
                    .table(Registrations::Table)
                    .col(Registrations::EventId)
                    .to_owned(),
            )
            .await?;

        // Create event_interests table
        manager
            .create_table(
                Table::create()
                    .table(EventInterests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EventInterests::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EventInterests::UserId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EventInterests::EventId)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(EventInterests::Note).string().null())
                    .col(
                        ColumnDef::new(EventInterests::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_interests_user_id")
                            .from(EventInterests::Table, EventInterests::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_interests_event_id")
                            .from(EventInterests::Table, EventInterests::EventId)
                            .to(Events::Table, Events::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One interest marker per (user, event) pair
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_event_interests_user_event")
                    .table(EventInterests::Table)
                    .col(EventInterests::UserId)
                    .col(EventInterests::EventId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_event_interests_event_id")
                    .table(EventInterests::Table)
                    .col(EventInterests::EventId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventInterests::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Registrations::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    IsAdmin,
    AdminScope,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Events {
    Table,
    Id,
    Title,
    Summary,
    Description,
    Location,
    StartTime,
    EndTime,
    Capacity,
    Category,
    ImageUrl,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Registrations {
    Table,
    Id,
    UserId,
    EventId,
    AttendeeName,
    AttendeeEmail,
    Department,
    Section,
    StudentUid,
    TeamSelection,
    CreatedAt,
}

#[derive(DeriveIden)]
enum EventInterests {
    Table,
    Id,
    UserId,
    EventId,
    Note,
    CreatedAt,
}
