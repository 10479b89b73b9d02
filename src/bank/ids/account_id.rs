use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique key of an account, shown to users as the "account number"
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        return Self(id.into());
    }

    pub fn as_str(&self) -> &str {
        return &self.0;
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        return Self::new(id);
    }
}

impl PartialEq<str> for AccountId {
    fn eq(&self, other: &str) -> bool {
        return self.0 == other;
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
