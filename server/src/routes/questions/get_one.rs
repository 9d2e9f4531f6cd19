use actix_web::{
    web::{Data, Json, Path},
    Result,
};
use chrono::Utc;

use db::{get_conn, DbPool};
use errors::Error;

use crate::handlers::{get_question_details, QuestionDetails};

pub async fn get_one(
    question_id: Path<i32>,
    pool: Data<DbPool>,
) -> Result<Json<QuestionDetails>, Error> {
    let connection = get_conn(&pool)?;

    let details = get_question_details(connection, question_id.into_inner(), Utc::now()).await?;

    Ok(Json(details))
}
