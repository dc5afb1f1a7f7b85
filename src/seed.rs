use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::services::crypto;
use crate::types::db::{event, user};
use crate::types::internal::EventCategory;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("database error: {0}")]
    Database(#[from] DbErr),

    #[error("password hashing failed: {0}")]
    Hash(String),
}

struct AdminProfile {
    name: String,
    email: String,
    password: String,
    scope: String,
}

fn admin_profiles() -> Vec<AdminProfile> {
    let mut profiles = vec![AdminProfile {
        name: "Event Admin".to_string(),
        email: "admin@example.com".to_string(),
        password: "admin123".to_string(),
        scope: "super".to_string(),
    }];
    for category in EventCategory::ALL {
        let lower = category.as_str().to_lowercase();
        profiles.push(AdminProfile {
            name: format!("{} Admin", category),
            email: format!("{}@eventmanage.io", lower),
            password: format!("{}123", lower),
            scope: category.as_str().to_string(),
        });
    }
    profiles
}

/// Ensure the super admin and one scoped admin per category exist,
/// upgrading existing accounts whose flag or scope has drifted. Idempotent.
pub async fn seed_admins(db: &DatabaseConnection) -> Result<(), SeedError> {
    for profile in admin_profiles() {
        let existing = user::Entity::find()
            .filter(user::Column::Email.eq(profile.email.clone()))
            .one(db)
            .await?;

        match existing {
            Some(account) => {
                if account.is_admin && account.admin_scope == profile.scope {
                    continue;
                }
                let mut active: user::ActiveModel = account.into();
                active.is_admin = Set(true);
                active.admin_scope = Set(profile.scope);
                active.update(db).await?;
            }
            None => {
                let password_hash =
                    crypto::hash_password(&profile.password).map_err(SeedError::Hash)?;
                let account = user::ActiveModel {
                    id: Set(Uuid::new_v4().to_string()),
                    name: Set(profile.name),
                    email: Set(profile.email),
                    password_hash: Set(password_hash),
                    is_admin: Set(true),
                    admin_scope: Set(profile.scope),
                    created_at: Set(Utc::now().naive_utc()),
                };
                account.insert(db).await?;
            }
        }
    }

    Ok(())
}

struct SampleEvent {
    title: &'static str,
    summary: &'static str,
    description: &'static str,
    location: &'static str,
    start_offset: Duration,
    length: Duration,
    capacity: i32,
    category: EventCategory,
    image_url: &'static str,
}

fn sample_events() -> Vec<SampleEvent> {
    vec![
        SampleEvent {
            title: "Campus Skills Combine",
            summary: "Conditioning circuits, agility metrics, and panel feedback for student athletes happening today.",
            description: "<p>Rotate through speed, strength, and vision drills led by varsity coaches. Capture professional feedback and walk away with a training blueprint for the season.</p>",
            location: "North Field Pavilion",
            start_offset: Duration::hours(3),
            length: Duration::hours(3),
            capacity: 50,
            category: EventCategory::Sports,
            image_url: "https://images.unsplash.com/photo-1502877338535-766e1452684a?auto=format&fit=crop&w=900&q=80",
        },
        SampleEvent {
            title: "Gallery Sketch Jam",
            summary: "Weekly arts meetup with live models, collaborative murals, and feedback corners.",
            description: "<p>Bring your favorite medium, explore guided warmups, and showcase work-in-progress pieces to the community. Materials table and acoustic playlist provided.</p>",
            location: "Studio 12 - Arts Annex",
            start_offset: Duration::days(3) + Duration::hours(18),
            length: Duration::hours(3),
            capacity: 40,
            category: EventCategory::Arts,
            image_url: "https://images.unsplash.com/photo-1500534314209-a25ddb2bd429?auto=format&fit=crop&w=900&q=80",
        },
        SampleEvent {
            title: "Science Discovery Expo",
            summary: "Monthly science fair covering lab breakthroughs, citizen science, and mentorship programs.",
            description: "<p>Visit expert booths, attend lightning lessons on emerging research methods, and match with mentors who align with your exploration goals.</p>",
            location: "Atrium Hall",
            start_offset: Duration::days(15) + Duration::hours(12),
            length: Duration::hours(6),
            capacity: 200,
            category: EventCategory::Science,
            image_url: "https://images.unsplash.com/photo-1523580846011-d3a5bc25702b?auto=format&fit=crop&w=900&q=80",
        },
        SampleEvent {
            title: "Design Thinking Workshop",
            summary: "Reimagine customer journeys with collaborative design exercises.",
            description: "<p>Dive into the pillars of design thinking with rapid ideation rounds, empathy mapping, and low-fidelity prototyping challenges in small teams.</p>",
            location: "Innovation Hub, Downtown",
            start_offset: Duration::days(5) + Duration::hours(10),
            length: Duration::hours(3),
            capacity: 40,
            category: EventCategory::Technical,
            image_url: "https://images.unsplash.com/photo-1529333166437-7750a6dd5a70?auto=format&fit=crop&w=900&q=80",
        },
        SampleEvent {
            title: "Tech Leaders Summit",
            summary: "A strategic summit for engineering leaders exploring AI and cloud journeys.",
            description: "<p>Keynotes from industry experts, interactive breakouts, and curated peer roundtables. Includes a leadership clinic on scaling teams sustainably.</p>",
            location: "Grand Convention Center",
            start_offset: Duration::days(8) + Duration::hours(9),
            length: Duration::hours(8),
            capacity: 220,
            category: EventCategory::Technical,
            image_url: "https://images.unsplash.com/photo-1531058020387-3be344556be6?auto=format&fit=crop&w=900&q=80",
        },
        SampleEvent {
            title: "Startup Pitch Night",
            summary: "Watch early-stage founders pitch to a live panel of investors.",
            description: "<p>Discover upcoming startups, provide feedback, and vote for the audience choice award. Networking mixer with investors after the pitches.</p>",
            location: "The Loft Space",
            start_offset: Duration::days(10) + Duration::hours(18),
            length: Duration::hours(3),
            capacity: 120,
            category: EventCategory::Cultural,
            image_url: "https://images.unsplash.com/photo-1507679799987-c73779587ccf?auto=format&fit=crop&w=900&q=80",
        },
        SampleEvent {
            title: "Cloud Native Hackathon",
            summary: "Build resilient services during a 24-hour cloud native challenge.",
            description: "<p>Teams design, deploy, and observe microservices with live mentorship and surprise infrastructure twists. Prizes for best reliability, velocity, and innovation.</p>",
            location: "Code Commons",
            start_offset: Duration::days(16) + Duration::hours(9),
            length: Duration::hours(24),
            capacity: 150,
            category: EventCategory::Technical,
            image_url: "https://images.unsplash.com/photo-1550745165-9bc0b252726f?auto=format&fit=crop&w=900&q=80",
        },
        SampleEvent {
            title: "Sustainability in Tech Forum",
            summary: "Discuss climate-forward engineering practices and green software.",
            description: "<p>Panels covering carbon-aware architectures, energy efficient code, and ESG reporting. Includes breakout roadmapping sessions.</p>",
            location: "Green Hall",
            start_offset: Duration::days(22) + Duration::hours(9),
            length: Duration::hours(7),
            capacity: 180,
            category: EventCategory::Science,
            image_url: "https://images.unsplash.com/photo-1498050108023-c5249f4df085?auto=format&fit=crop&w=900&q=80",
        },
    ]
}

fn top_of_hour(now: NaiveDateTime) -> NaiveDateTime {
    now.date()
        .and_time(NaiveTime::from_hms_opt(now.hour(), 0, 0).unwrap_or(NaiveTime::MIN))
}

/// Populate the catalog with sample events whose titles are missing.
/// Idempotent across restarts.
pub async fn seed_sample_events(db: &DatabaseConnection) -> Result<(), SeedError> {
    let base = top_of_hour(Utc::now().naive_utc());

    let mut created = 0usize;
    for sample in sample_events() {
        let existing = event::Entity::find()
            .filter(event::Column::Title.eq(sample.title))
            .one(db)
            .await?;
        if existing.is_some() {
            continue;
        }

        let start_time = base + sample.start_offset;
        let new_event = event::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            title: Set(sample.title.to_string()),
            summary: Set(sample.summary.to_string()),
            description: Set(sample.description.to_string()),
            location: Set(sample.location.to_string()),
            start_time: Set(start_time),
            end_time: Set(start_time + sample.length),
            capacity: Set(sample.capacity),
            category: Set(sample.category.as_str().to_string()),
            image_url: Set(Some(sample.image_url.to_string())),
            created_at: Set(Utc::now().naive_utc()),
        };
        new_event.insert(db).await?;
        created += 1;
    }

    if created > 0 {
        tracing::info!(created, "seeded sample events");
    }

    Ok(())
}
