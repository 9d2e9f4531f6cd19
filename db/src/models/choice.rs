use diesel::{self, BelongingToDsl, ExpressionMethods, QueryDsl, RunQueryDsl, SqliteConnection};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::models::Question;
use crate::schema::choices::{self, table};

#[derive(Associations, Clone, Debug, Deserialize, Identifiable, PartialEq, Queryable, Serialize)]
#[diesel(belongs_to(Question))]
#[diesel(table_name = choices)]
pub struct Choice {
    pub id: i32,
    pub question_id: i32,
    pub choice_text: String,
    pub votes: i32,
}

#[derive(Insertable)]
#[diesel(table_name = choices)]
pub struct NewChoice<'a> {
    pub question_id: i32,
    pub choice_text: &'a str,
}

impl Choice {
    pub fn create(
        conn: &mut SqliteConnection,
        question_id: i32,
        choice_text: &str,
    ) -> Result<Choice, Error> {
        let choice = diesel::insert_into(table)
            .values(NewChoice {
                question_id,
                choice_text,
            })
            .get_result(conn)?;

        Ok(choice)
    }

    pub fn find_by_question(
        conn: &mut SqliteConnection,
        question: &Question,
    ) -> Result<Vec<Choice>, Error> {
        use choices::dsl::id;

        let results = Choice::belonging_to(question)
            .order(id.asc())
            .load::<Choice>(conn)?;

        Ok(results)
    }

    /// Adds one vote. Fails with `NotFound` when the choice belongs to a
    /// different question.
    pub fn vote(
        conn: &mut SqliteConnection,
        question_id: i32,
        choice_id: i32,
    ) -> Result<Choice, Error> {
        use choices::dsl::{choices as choices_table, id, question_id as question_id_field, votes};

        let choice = diesel::update(
            choices_table
                .filter(id.eq(choice_id))
                .filter(question_id_field.eq(question_id)),
        )
        .set(votes.eq(votes + 1))
        .get_result(conn)?;

        Ok(choice)
    }
}
