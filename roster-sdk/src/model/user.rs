use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A user as the remote service represents it.
///
/// The mock service returns many more fields (address, phone, company...);
/// they are ignored on decode. `role` is not part of its fixtures, so it
/// falls back to [`Role::User`] and such rows display `user` rather than an
/// empty role.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

impl UserRecord {
    pub fn with_fields(id: u64, fields: NewUser) -> Self {
        Self {
            id,
            username: fields.username,
            email: fields.email,
            role: fields.role,
        }
    }
}

/// candidate body for create and update, the server owns `id`
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub role: Role,
}

impl From<&UserRecord> for NewUser {
    fn from(value: &UserRecord) -> Self {
        Self {
            username: value.username.clone(),
            email: value.email.clone(),
            role: value.role.clone(),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::User, Role::Admin];

    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Admin => "Admin",
        }
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        match value {
            "admin" => Role::Admin,
            _ => Role::User,
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Admin => write!(f, "admin"),
        }
    }
}
