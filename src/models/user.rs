use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => f.write_str("user"),
            Role::Admin => f.write_str("admin"),
        }
    }
}

/// The signed-in user, if any. Persisted under its own key; an absent
/// document means nobody is logged in.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Session {
    #[default]
    Empty,
    Active(User),
}

impl Session {
    pub fn user(&self) -> Option<&User> {
        match self {
            Session::Active(user) => Some(user),
            Session::Empty => None,
        }
    }

    pub fn into_user(self) -> Option<User> {
        match self {
            Session::Active(user) => Some(user),
            Session::Empty => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Session::Active(_))
    }
}

impl From<Option<User>> for Session {
    fn from(value: Option<User>) -> Self {
        value.map(Session::Active).unwrap_or_default()
    }
}
