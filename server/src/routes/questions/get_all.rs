use actix_web::{
    web::{Data, Json},
    Result,
};
use chrono::Utc;

use db::{get_conn, DbPool};
use errors::Error;

use crate::handlers::{get_published_questions, QuestionSummary};

pub async fn get_all(pool: Data<DbPool>) -> Result<Json<Vec<QuestionSummary>>, Error> {
    let connection = get_conn(&pool)?;

    let questions = get_published_questions(connection, Utc::now()).await?;

    Ok(Json(questions))
}
