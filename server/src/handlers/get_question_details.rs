use actix_web::web::block;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use db::{
    models::{Choice, Question},
    Connection,
};
use errors::Error;

use super::QuestionSummary;

#[derive(Debug, Deserialize, Serialize)]
pub struct QuestionDetails {
    pub question: QuestionSummary,
    pub choices: Vec<Choice>,
}

impl QuestionDetails {
    pub fn new(question: Question, choices: Vec<Choice>, now: DateTime<Utc>) -> Self {
        QuestionDetails {
            question: QuestionSummary::new(question, now),
            choices,
        }
    }
}

/// Loads a question that is live at `now` along with its choices.
pub async fn get_question_details(
    mut connection: Connection,
    question_id: i32,
    now: DateTime<Utc>,
) -> Result<QuestionDetails, Error> {
    let data: Result<(Question, Vec<Choice>), Error> = block(move || {
        let question = Question::find_published_by_id(&mut connection, question_id, now)?;
        let choices = Choice::find_by_question(&mut connection, &question)?;
        Ok((question, choices))
    })
    .await?;

    let (question, choices) = data?;

    Ok(QuestionDetails::new(question, choices, now))
}
