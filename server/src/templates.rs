use actix_web::{http::header::ContentType, HttpResponse};
use log::error;
use serde::Serialize;
use tera::{Context, Tera};

use errors::Error;

/// Templates are compiled into the binary so the server does not depend on
/// its working directory.
pub fn load() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../templates/base.html")),
        ("polls/index.html", include_str!("../templates/polls/index.html")),
        ("polls/detail.html", include_str!("../templates/polls/detail.html")),
        ("polls/results.html", include_str!("../templates/polls/results.html")),
    ])?;

    Ok(tera)
}

pub fn render(tera: &Tera, template_name: &str, context: &Context) -> Result<HttpResponse, Error> {
    let body = tera.render(template_name, context).map_err(|err| {
        error!("Failed to render {} - {}", template_name, err);
        Error::InternalServerError("Failed to render page".into())
    })?;

    Ok(HttpResponse::Ok().content_type(ContentType::html()).body(body))
}

pub fn context_from<T: Serialize>(value: &T) -> Result<Context, Error> {
    Context::from_serialize(value).map_err(|err| {
        error!("Failed to build template context - {}", err);
        Error::InternalServerError("Failed to render page".into())
    })
}
