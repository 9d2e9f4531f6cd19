use actix_web::{web::Data, HttpResponse};
use chrono::Utc;
use tera::{Context, Tera};

use db::{get_conn, DbPool};
use errors::Error;

use crate::handlers::get_published_questions;
use crate::templates::render;

pub async fn index(pool: Data<DbPool>, tmpl: Data<Tera>) -> Result<HttpResponse, Error> {
    let connection = get_conn(&pool)?;
    let questions = get_published_questions(connection, Utc::now()).await?;

    let mut context = Context::new();
    context.insert("latest_question_list", &questions);

    render(&tmpl, "polls/index.html", &context)
}
