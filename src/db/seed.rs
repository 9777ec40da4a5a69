use sqlx::SqlitePool;
use tracing::info;

use crate::models::event::NewEvent;
use crate::repositories::event as event_repo;

pub const SEED_EVENTS: [NewEvent<'static>; 5] = [
    NewEvent {
        title: "Ancient Wonders",
        description: "A journey through the pyramids and ancient civilizations.",
        start_date: "2025-10-01",
        end_date: "2026-03-31",
    },
    NewEvent {
        title: "Space Odyssey",
        description: "Discover the mysteries of the cosmos and space travel.",
        start_date: "2025-11-15",
        end_date: "2026-05-30",
    },
    NewEvent {
        title: "Modern Art",
        description: "Contemporary masterpieces from the 21st century.",
        start_date: "2025-09-01",
        end_date: "2026-01-15",
    },
    NewEvent {
        title: "Future Tech Expo",
        description: "Explore the latest innovations in artificial intelligence and robotics.",
        start_date: "2026-02-10",
        end_date: "2026-06-30",
    },
    NewEvent {
        title: "Wildlife Photography",
        description: "Stunning photographs capturing the beauty of nature.",
        start_date: "2026-04-01",
        end_date: "2026-09-30",
    },
];

/// Inserts the fixed exhibitions when the event table is empty.
/// Returns how many rows were written.
pub async fn seed_events(pool: &SqlitePool) -> Result<usize, sqlx::Error> {
    let mut tx = pool.begin().await?;

    if event_repo::count(&mut tx).await? > 0 {
        info!("Database already contains events, skipping seeding");
        return Ok(0);
    }

    for event in SEED_EVENTS.iter() {
        event_repo::insert(&mut tx, event).await?;
    }
    tx.commit().await?;

    info!(count = SEED_EVENTS.len(), "Database seeded with initial events");
    Ok(SEED_EVENTS.len())
}
