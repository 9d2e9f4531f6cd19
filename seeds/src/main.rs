use chrono::Utc;
use dotenv::dotenv;
use log::info;
use std::env;

use db::{get_conn, models::Question, new_pool, run_migrations};

fn main() {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = new_pool(&database_url).expect("failed to create db pool");
    run_migrations(&pool).expect("failed to run migrations");
    let mut conn = get_conn(&pool).unwrap();

    let now = Utc::now();
    for (question_text, days, choices) in &[
        ("What's new?", -2, vec!["Not much", "The sky", "Just hacking again"]),
        ("Favourite race?", -1, vec!["Terran", "Zerg", "Protoss"]),
        ("Best map of the season?", 0, vec!["Fighting Spirit", "Circuit Breaker"]),
        ("Who takes the finals?", 7, vec!["Flash", "Jaedong"]),
    ] {
        let pub_date = db::models::publish_date_from_offset(now, *days).unwrap();
        let choices: Vec<String> = choices.iter().map(|choice| choice.to_string()).collect();
        let (question, choices) =
            Question::create_with_choices(&mut conn, question_text, pub_date, &choices).unwrap();

        info!(
            "Seeded question {} \"{}\" with {} choices",
            question.id,
            question.question_text,
            choices.len()
        );
    }
}
