#[cfg(test)]
pub mod tests {
    use actix_http::Request;
    use actix_web::{dev::ServiceResponse, http::header, test, web, web::Data, App};
    use serde::{de::DeserializeOwned, Serialize};

    use db::{
        get_conn,
        models::{Choice, Question},
        new_pool, run_migrations, DbPool, MEMORY_DATABASE_URL,
    };

    use crate::routes::{not_found, routes};
    use crate::templates;

    /// A fresh, migrated in-memory database per test.
    pub fn test_pool() -> DbPool {
        let pool = new_pool(MEMORY_DATABASE_URL).unwrap();
        run_migrations(&pool).unwrap();
        pool
    }

    /// Create a question published `days` from now, negative for the past.
    pub fn create_question(pool: &DbPool, question_text: &str, days: i64) -> Question {
        let mut conn = get_conn(pool).unwrap();
        Question::create_with_offset(&mut conn, question_text, days).unwrap()
    }

    pub fn create_choice(pool: &DbPool, question_id: i32, choice_text: &str) -> Choice {
        let mut conn = get_conn(pool).unwrap();
        Choice::create(&mut conn, question_id, choice_text).unwrap()
    }

    async fn call(pool: &DbPool, req: Request) -> ServiceResponse {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(pool.clone()))
                .app_data(Data::new(templates::load().unwrap()))
                .configure(routes)
                .default_service(web::route().to(not_found)),
        )
        .await;

        test::call_service(&app, req).await
    }

    fn parse_json<R>(status: u16, body: &[u8]) -> R
    where
        R: DeserializeOwned,
    {
        serde_json::from_slice(body).unwrap_or_else(|_| {
            panic!(
                "read_response_json failed during deserialization. response: {} status: {}",
                String::from_utf8(body.to_vec())
                    .unwrap_or_else(|_| "Could not convert Bytes -> String".to_string()),
                status
            )
        })
    }

    /// Helper for HTTP GET integration tests
    pub async fn test_get<R>(pool: &DbPool, route: &str) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let req = test::TestRequest::get().uri(route).to_request();
        let res = call(pool, req).await;

        let status = res.status().as_u16();
        let body = test::read_body(res).await;

        (status, parse_json(status, &body))
    }

    /// Helper for rendered page tests, returns the raw html
    pub async fn test_get_html(pool: &DbPool, route: &str) -> (u16, String) {
        let req = test::TestRequest::get().uri(route).to_request();
        let res = call(pool, req).await;

        let status = res.status().as_u16();
        let body = test::read_body(res).await;

        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    /// Helper for HTTP POST integration tests
    pub async fn test_post<T: Serialize, R>(pool: &DbPool, route: &str, params: T) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let req = test::TestRequest::post()
            .set_json(&params)
            .uri(route)
            .to_request();
        let res = call(pool, req).await;

        let status = res.status().as_u16();
        let body = test::read_body(res).await;

        (status, parse_json(status, &body))
    }

    /// Helper for form submissions, returns the redirect target if any
    pub async fn test_post_form(
        pool: &DbPool,
        route: &str,
        form: &[(&str, String)],
    ) -> (u16, Option<String>, String) {
        let req = test::TestRequest::post()
            .set_form(form)
            .uri(route)
            .to_request();
        let res = call(pool, req).await;

        let status = res.status().as_u16();
        let location = res
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());
        let body = test::read_body(res).await;

        (
            status,
            location,
            String::from_utf8(body.to_vec()).unwrap(),
        )
    }
}
