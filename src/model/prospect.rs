use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::Id;

/// Someone met at an event whose details were captured from a QR code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prospect {
    pub id: Id<Prospect>,
    pub name: String,
    pub email_address: String,
    pub is_contacted: bool,
    pub creation_date: DateTime<Utc>,
}

impl Prospect {
    /// A blank prospect stamped with the current time.
    pub fn create() -> Self {
        Self::created_at(Utc::now())
    }

    pub fn created_at(creation_date: DateTime<Utc>) -> Self {
        Self {
            id: Id::generate(),
            name: String::new(),
            email_address: String::new(),
            is_contacted: false,
            creation_date,
        }
    }

    pub fn with_details(name: impl Into<String>, email_address: impl Into<String>) -> Self {
        let mut p = Self::create();
        p.name = name.into();
        p.email_address = email_address.into();
        p
    }
}
