use actix_web::{
    http::header,
    web::{block, Data, Form, Path},
    HttpResponse,
};
use chrono::Utc;
use log::debug;
use serde::{Deserialize, Serialize};
use tera::Tera;

use db::{get_conn, models::Choice, DbPool};
use errors::Error;

use crate::handlers::get_question_details;
use crate::templates::{context_from, render};

const NO_CHOICE_MESSAGE: &str = "You didn't select a choice.";

#[derive(Deserialize, Serialize)]
pub struct VoteForm {
    pub choice: Option<String>,
}

pub async fn vote(
    question_id: Path<i32>,
    pool: Data<DbPool>,
    tmpl: Data<Tera>,
    params: Form<VoteForm>,
) -> Result<HttpResponse, Error> {
    let question_id = question_id.into_inner();
    let connection = get_conn(&pool)?;
    let details = get_question_details(connection, question_id, Utc::now()).await?;

    let choice_id = params
        .choice
        .as_deref()
        .and_then(|choice| choice.trim().parse::<i32>().ok());

    let voted = match choice_id {
        Some(choice_id) => {
            let mut connection = get_conn(&pool)?;
            let res = block(move || Choice::vote(&mut connection, question_id, choice_id)).await?;
            match res {
                Ok(_) => true,
                Err(Error::NotFound(_)) => {
                    debug!("Choice {} is not part of question {}", choice_id, question_id);
                    false
                }
                Err(err) => return Err(err),
            }
        }
        None => false,
    };

    if !voted {
        let mut context = context_from(&details)?;
        context.insert("error_message", NO_CHOICE_MESSAGE);
        return render(&tmpl, "polls/detail.html", &context);
    }

    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, format!("/polls/{}/results/", question_id)))
        .finish())
}
