use chrono::{Duration, Utc};
use sqlx::SqlitePool;
use tracing::info;

use crate::database::models::RecipeItem;
use crate::database::StoreError;
use crate::services::{BarService, BookingService, ClassroomService, TriviaService};
use crate::services::booking::{ArtistInput, ShowInput, VenueInput};
use crate::services::trivia::QuestionInput;

/// Load fixture data for local development. Refuses to run against a
/// database that already has content.
pub async fn run(pool: &SqlitePool) -> Result<(), StoreError> {
    let trivia = TriviaService::new(pool.clone());
    if !trivia.categories().await?.is_empty() {
        info!("database already seeded, skipping");
        return Ok(());
    }

    let booking = BookingService::new(pool.clone());
    let bar = BarService::new(pool.clone());
    let classroom = ClassroomService::new(pool.clone());

    // trivia
    let mut category_ids = Vec::new();
    for kind in ["Science", "Art", "History", "Sports"] {
        category_ids.push(trivia.create_category(kind).await?.id);
    }
    let questions = [
        ("What is the heaviest naturally occurring element?", "Uranium", 0, 3),
        ("Which planet has the most moons?", "Saturn", 0, 2),
        ("Who painted The Starry Night?", "Vincent van Gogh", 1, 1),
        ("In which year did the Berlin Wall fall?", "1989", 2, 2),
        ("How many players are on a rugby union team?", "Fifteen", 3, 2),
    ];
    for (question, answer, category, difficulty) in questions {
        trivia
            .create_question(&QuestionInput {
                question: question.to_string(),
                answer: answer.to_string(),
                category_id: category_ids[category],
                difficulty,
            })
            .await?;
    }

    // booking
    let venue = booking
        .create_venue(&VenueInput {
            name: "The Dueling Pianos Bar".to_string(),
            genres: vec!["Classical".to_string(), "R&B".to_string(), "Hip-Hop".to_string()],
            address: "335 Delancey Street".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            phone: "914-003-1132".to_string(),
            website: "https://www.theduelingpianos.com".to_string(),
            facebook_link: "https://www.facebook.com/theduelingpianos".to_string(),
            image_link: String::new(),
            seeking_talent: true,
            seeking_description: "Looking for piano duos for weekend slots".to_string(),
        })
        .await?;
    let artist = booking
        .create_artist(&ArtistInput {
            name: "Guns N Petals".to_string(),
            genres: vec!["Rock n Roll".to_string()],
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: "326-123-5000".to_string(),
            website: "https://www.gunsnpetalsband.com".to_string(),
            facebook_link: "https://www.facebook.com/GunsNPetals".to_string(),
            image_link: String::new(),
            seeking_venue: true,
            seeking_description: "Looking for shows to perform at in the Bay Area!".to_string(),
        })
        .await?;
    booking
        .create_show(&ShowInput {
            name: "Petals Unplugged".to_string(),
            artist_id: artist.id,
            venue_id: venue.id,
            date: (Utc::now() + Duration::days(30)).date_naive(),
            start_time: "20:00".to_string(),
            end_time: "23:00".to_string(),
            fee: "35.00".to_string(),
        })
        .await?;

    // bar
    bar.create_drink(
        "Matcha Shake",
        &[
            RecipeItem { color: "lightgreen".to_string(), name: "milk".to_string(), parts: 3 },
            RecipeItem { color: "green".to_string(), name: "matcha".to_string(), parts: 1 },
        ],
    )
    .await?;
    bar.create_drink(
        "Flatiron Flat White",
        &[
            RecipeItem { color: "brown".to_string(), name: "espresso".to_string(), parts: 1 },
            RecipeItem { color: "white".to_string(), name: "steamed milk".to_string(), parts: 2 },
        ],
    )
    .await?;

    // classroom
    let question = classroom
        .create_question("What does the borrow checker prevent?", "teacher-1")
        .await?;
    classroom
        .create_answer(question.id, "Aliasing a value while it is mutably borrowed", "teacher-1")
        .await?;

    info!("seeded fixture data");
    Ok(())
}
