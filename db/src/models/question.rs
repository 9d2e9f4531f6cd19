use chrono::{DateTime, Datelike, Duration, Utc};
use diesel::{self, Connection, ExpressionMethods, QueryDsl, RunQueryDsl, SqliteConnection};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::models::Choice;
use crate::schema::questions::{self, table};

#[derive(Clone, Debug, Deserialize, Identifiable, PartialEq, Queryable, Serialize)]
#[diesel(table_name = questions)]
pub struct Question {
    pub id: i32,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = questions)]
pub struct NewQuestion<'a> {
    pub question_text: &'a str,
    pub pub_date: DateTime<Utc>,
}

/// Publish dates are stored as text, which only sorts chronologically for
/// four digit years.
pub const MIN_PUBLISH_YEAR: i32 = 0;
pub const MAX_PUBLISH_YEAR: i32 = 9999;

pub fn check_publish_date(pub_date: DateTime<Utc>) -> Result<DateTime<Utc>, Error> {
    if (MIN_PUBLISH_YEAR..=MAX_PUBLISH_YEAR).contains(&pub_date.year()) {
        return Ok(pub_date);
    }

    Err(Error::BadRequest(format!(
        "Publish date must fall between years {} and {}",
        MIN_PUBLISH_YEAR, MAX_PUBLISH_YEAR
    )))
}

/// Shifts `now` by a signed number of days. Negative offsets are in the past.
pub fn publish_date_from_offset(
    now: DateTime<Utc>,
    days: i64,
) -> Result<DateTime<Utc>, Error> {
    let pub_date = Duration::try_days(days)
        .and_then(|offset| now.checked_add_signed(offset))
        .ok_or_else(|| {
            Error::BadRequest(format!("Publish offset of {} days is out of range", days))
        })?;

    check_publish_date(pub_date)
}

impl Question {
    /// True when the question went live within the last day. A question
    /// published exactly one day ago no longer counts.
    pub fn was_published_recently(&self) -> bool {
        self.was_published_recently_at(Utc::now())
    }

    pub fn was_published_recently_at(&self, now: DateTime<Utc>) -> bool {
        now - Duration::days(1) < self.pub_date && self.pub_date <= now
    }

    pub fn create(
        conn: &mut SqliteConnection,
        question_text: &str,
        pub_date: DateTime<Utc>,
    ) -> Result<Question, Error> {
        let pub_date = check_publish_date(pub_date)?;
        let question = diesel::insert_into(table)
            .values(NewQuestion {
                question_text,
                pub_date,
            })
            .get_result(conn)?;

        Ok(question)
    }

    pub fn create_with_offset(
        conn: &mut SqliteConnection,
        question_text: &str,
        days: i64,
    ) -> Result<Question, Error> {
        let pub_date = publish_date_from_offset(Utc::now(), days)?;
        Question::create(conn, question_text, pub_date)
    }

    pub fn create_with_choices(
        conn: &mut SqliteConnection,
        question_text: &str,
        pub_date: DateTime<Utc>,
        choice_texts: &[String],
    ) -> Result<(Question, Vec<Choice>), Error> {
        conn.transaction::<_, Error, _>(|conn| {
            let question = Question::create(conn, question_text, pub_date)?;
            let choices = choice_texts
                .iter()
                .map(|choice_text| Choice::create(conn, question.id, choice_text))
                .collect::<Result<Vec<Choice>, Error>>()?;

            Ok((question, choices))
        })
    }

    /// Every question live at `now`, newest first. Questions sharing a
    /// publish date keep their creation order.
    pub fn find_published(
        conn: &mut SqliteConnection,
        now: DateTime<Utc>,
    ) -> Result<Vec<Question>, Error> {
        use crate::schema::questions::dsl::{id, pub_date, questions};

        let results = questions
            .filter(pub_date.le(now))
            .order((pub_date.desc(), id.asc()))
            .load::<Question>(conn)?;

        Ok(results)
    }

    /// Scheduled questions are reported as missing, the same as unknown ids.
    pub fn find_published_by_id(
        conn: &mut SqliteConnection,
        question_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Question, Error> {
        use crate::schema::questions::dsl::{pub_date, questions};

        let question = questions
            .find(question_id)
            .filter(pub_date.le(now))
            .first::<Question>(conn)?;

        Ok(question)
    }
}
