use std::borrow::Cow;

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::client::Client;
use crate::domain::types::NonBlankString;

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    NonBlankString::try_from(value).map(|_| ()).map_err(|_| {
        let mut error = ValidationError::new("not_blank");
        error.message = Some(Cow::Borrowed("must not be blank"));
        error
    })
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// JSON body of the create and update endpoints.
///
/// Required text fields default to empty when absent so that a missing field
/// is reported the same way as a blank one.
pub struct ClientPayload {
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank"))]
    pub first_name: String,
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank"))]
    pub last_name: String,
    pub mobile_number: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank"))]
    pub id_number: String,
    pub physical_address: Option<String>,
}

impl From<ClientPayload> for Client {
    fn from(payload: ClientPayload) -> Self {
        Client {
            first_name: payload.first_name,
            last_name: payload.last_name,
            mobile_number: payload.mobile_number,
            id_number: payload.id_number,
            physical_address: payload.physical_address,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Query string of the search endpoint.
pub struct SearchClientParams {
    pub first_name: Option<String>,
    pub id_number: Option<String>,
    pub mobile_number: Option<String>,
}

impl SearchClientParams {
    /// Returns `true` when at least one criterion is present, even if empty.
    pub fn has_criteria(&self) -> bool {
        self.first_name.is_some() || self.id_number.is_some() || self.mobile_number.is_some()
    }
}
