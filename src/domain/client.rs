use serde::{Deserialize, Serialize};

/// Client record as stored by the registry and exchanged over the API.
///
/// The record has no server-generated fields: what is created is what is
/// stored and returned.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: Option<String>,
    /// National identity number; primary key of the registry.
    pub id_number: String,
    pub physical_address: Option<String>,
}

impl Client {
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        mobile_number: Option<String>,
        id_number: impl Into<String>,
        physical_address: Option<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            mobile_number,
            id_number: id_number.into(),
            physical_address,
        }
    }

    /// Overwrites every field with the values from `replacement`.
    pub fn overwrite(&mut self, replacement: Client) {
        let Client {
            first_name,
            last_name,
            mobile_number,
            id_number,
            physical_address,
        } = replacement;

        self.first_name = first_name;
        self.last_name = last_name;
        self.mobile_number = mobile_number;
        self.id_number = id_number;
        self.physical_address = physical_address;
    }
}

/// Criterion honoured by a client search.
///
/// Only one criterion is ever applied; [`ClientSearchQuery::from_criteria`]
/// picks it by priority.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClientSearchQuery {
    FirstName(String),
    IdNumber(String),
    MobileNumber(String),
}

impl ClientSearchQuery {
    /// Selects the criterion to search by: first name, then ID number, then
    /// mobile number. Returns `None` when no criterion is supplied.
    pub fn from_criteria(
        first_name: Option<String>,
        id_number: Option<String>,
        mobile_number: Option<String>,
    ) -> Option<Self> {
        first_name
            .map(Self::FirstName)
            .or_else(|| id_number.map(Self::IdNumber))
            .or_else(|| mobile_number.map(Self::MobileNumber))
    }

    /// Returns `true` if `client` satisfies this criterion.
    pub fn matches(&self, client: &Client) -> bool {
        match self {
            Self::FirstName(name) => client.first_name == *name,
            Self::IdNumber(id_number) => client.id_number == *id_number,
            Self::MobileNumber(mobile) => client.mobile_number.as_deref() == Some(mobile.as_str()),
        }
    }
}
