use std::borrow::Cow;

use actix_web::web::Json;
use validator::{Validate, ValidationErrors};

use errors::Error;

/// One message per invalid field, in field name order.
fn collect_errors(validation_errors: ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = validation_errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);

    fields
        .into_iter()
        .map(|(field, field_errors)| {
            let default_error = format!("{} is invalid", field);
            field_errors[0]
                .message
                .as_ref()
                .unwrap_or(&Cow::Owned(default_error))
                .to_string()
        })
        .collect()
}

pub fn validate<T>(params: &Json<T>) -> Result<(), Error>
where
    T: Validate,
{
    match params.validate() {
        Ok(_) => Ok(()),
        Err(err) => Err(Error::ValidationError(collect_errors(err))),
    }
}
