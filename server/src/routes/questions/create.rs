use std::borrow::Cow;

use actix_web::{
    web::{block, Data, Json},
    HttpResponse,
};
use chrono::Utc;
use log::info;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use db::{
    get_conn,
    models::{publish_date_from_offset, Question},
    DbPool,
};
use errors::Error;

use crate::handlers::QuestionDetails;
use crate::validate::validate;

const MAX_TEXT_LENGTH: usize = 200;

#[derive(Clone, Deserialize, Serialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "question_text must be between 1 and 200 characters"
    ))]
    pub question_text: String,
    /// Publish offset from now, negative for the past.
    #[serde(default)]
    pub days: i64,
    #[serde(default)]
    #[validate(custom = "validate_choices")]
    pub choices: Vec<String>,
}

fn validate_choices(choices: &[String]) -> Result<(), ValidationError> {
    let valid = choices
        .iter()
        .all(|choice| !choice.is_empty() && choice.chars().count() <= MAX_TEXT_LENGTH);
    if valid {
        return Ok(());
    }

    let mut err = ValidationError::new("length");
    err.message = Some(Cow::from("choices must be between 1 and 200 characters"));
    Err(err)
}

pub async fn create(
    pool: Data<DbPool>,
    params: Json<CreateQuestionRequest>,
) -> Result<HttpResponse, Error> {
    validate(&params)?;

    let now = Utc::now();
    let pub_date = publish_date_from_offset(now, params.days)?;
    let params = params.into_inner();

    let mut connection = get_conn(&pool)?;
    let res = block(move || {
        Question::create_with_choices(
            &mut connection,
            &params.question_text,
            pub_date,
            &params.choices,
        )
    })
    .await?;

    let (question, choices) = res?;
    info!("Created question {} publishing at {}", question.id, question.pub_date);

    Ok(HttpResponse::Created().json(QuestionDetails::new(question, choices, now)))
}

#[cfg(test)]
mod tests {
    use errors::ErrorResponse;

    use super::CreateQuestionRequest;
    use crate::handlers::{QuestionDetails, QuestionSummary};
    use crate::tests::helpers::tests::{test_get, test_pool, test_post};

    #[actix_rt::test]
    async fn test_create_question() {
        let pool = test_pool();

        let (status, details): (u16, QuestionDetails) = test_post(
            &pool,
            "/api/questions",
            CreateQuestionRequest {
                question_text: "Who wins?".to_string(),
                days: -1,
                choices: vec!["Flash".to_string(), "Jaedong".to_string()],
            },
        )
        .await;
        assert_eq!(status, 201);
        assert_eq!(details.question.question_text, "Who wins?");
        assert_eq!(details.choices.len(), 2);
        assert!(details
            .choices
            .iter()
            .all(|choice| choice.question_id == details.question.id));

        let (_, questions): (u16, Vec<QuestionSummary>) = test_get(&pool, "/api/questions").await;
        assert_eq!(questions.len(), 1);
    }

    #[actix_rt::test]
    async fn test_create_future_question_is_hidden() {
        let pool = test_pool();

        let (status, details): (u16, QuestionDetails) = test_post(
            &pool,
            "/api/questions",
            CreateQuestionRequest {
                question_text: "Next season?".to_string(),
                days: 3,
                choices: vec![],
            },
        )
        .await;
        assert_eq!(status, 201);
        assert_eq!(details.question.was_published_recently, false);

        let (_, questions): (u16, Vec<QuestionSummary>) = test_get(&pool, "/api/questions").await;
        assert_eq!(questions.len(), 0);
    }

    #[actix_rt::test]
    async fn test_create_question_with_empty_text() {
        let pool = test_pool();

        let (status, body): (u16, ErrorResponse) = test_post(
            &pool,
            "/api/questions",
            CreateQuestionRequest {
                question_text: "".to_string(),
                days: 0,
                choices: vec![],
            },
        )
        .await;
        assert_eq!(status, 422);
        assert_eq!(
            body.errors,
            vec!["question_text must be between 1 and 200 characters"]
        );
    }

    #[actix_rt::test]
    async fn test_create_question_with_empty_choice() {
        let pool = test_pool();

        let (status, body): (u16, ErrorResponse) = test_post(
            &pool,
            "/api/questions",
            CreateQuestionRequest {
                question_text: "Who wins?".to_string(),
                days: 0,
                choices: vec!["".to_string()],
            },
        )
        .await;
        assert_eq!(status, 422);
        assert_eq!(body.errors, vec!["choices must be between 1 and 200 characters"]);
    }

    #[actix_rt::test]
    async fn test_create_question_with_offset_out_of_range() {
        let pool = test_pool();

        let (status, _): (u16, ErrorResponse) = test_post(
            &pool,
            "/api/questions",
            CreateQuestionRequest {
                question_text: "Who wins?".to_string(),
                days: i64::MAX,
                choices: vec![],
            },
        )
        .await;
        assert_eq!(status, 400);
    }

    #[actix_rt::test]
    async fn test_create_question_beyond_year_9999() {
        let pool = test_pool();

        let (status, body): (u16, ErrorResponse) = test_post(
            &pool,
            "/api/questions",
            CreateQuestionRequest {
                question_text: "Far future.".to_string(),
                days: 3_000_000,
                choices: vec![],
            },
        )
        .await;
        assert_eq!(status, 400);
        assert_eq!(
            body.errors,
            vec!["Publish date must fall between years 0 and 9999"]
        );

        let (_, questions): (u16, Vec<QuestionSummary>) = test_get(&pool, "/api/questions").await;
        assert_eq!(questions.len(), 0);
    }
}
