use actix_web::{
    web::{Data, Path},
    HttpResponse,
};
use chrono::Utc;
use tera::Tera;

use db::{get_conn, DbPool};
use errors::Error;

use crate::handlers::get_question_details;
use crate::templates::{context_from, render};

pub async fn results(
    question_id: Path<i32>,
    pool: Data<DbPool>,
    tmpl: Data<Tera>,
) -> Result<HttpResponse, Error> {
    let connection = get_conn(&pool)?;
    let details = get_question_details(connection, question_id.into_inner(), Utc::now()).await?;

    render(&tmpl, "polls/results.html", &context_from(&details)?)
}
