use actix_web::web::block;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use db::{models::Question, Connection};
use errors::Error;

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct QuestionSummary {
    pub id: i32,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
    pub was_published_recently: bool,
}

impl QuestionSummary {
    pub fn new(question: Question, now: DateTime<Utc>) -> Self {
        QuestionSummary {
            was_published_recently: question.was_published_recently_at(now),
            id: question.id,
            question_text: question.question_text,
            pub_date: question.pub_date,
        }
    }
}

pub async fn get_published_questions(
    mut connection: Connection,
    now: DateTime<Utc>,
) -> Result<Vec<QuestionSummary>, Error> {
    let questions = block(move || Question::find_published(&mut connection, now)).await??;

    Ok(questions
        .into_iter()
        .map(|question| QuestionSummary::new(question, now))
        .collect())
}
