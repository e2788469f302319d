//! Requests the screen can issue and the responses they come back with.

use crate::api::UserApi;
use crate::model::user::{NewUser, UserRecord};
use crate::state::FlightKey;
use crate::Result;

/// what the user asked for, used to pick the failure message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Fetch,
    Add,
    Edit,
    Delete,
}

impl ActionKind {
    pub fn failure_message(&self) -> &'static str {
        match self {
            ActionKind::Fetch => "Failed to fetch users",
            ActionKind::Add => "Failed to add user",
            ActionKind::Edit => "Failed to edit user",
            ActionKind::Delete => "Failed to delete user",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Fetch,
    Add(NewUser),
    Edit { id: u64, candidate: NewUser },
    Delete(u64),
}

impl Action {
    pub fn key(&self) -> FlightKey {
        match self {
            Action::Fetch => FlightKey::List,
            Action::Add(_) => FlightKey::Create,
            Action::Edit { id, .. } => FlightKey::Update(*id),
            Action::Delete(id) => FlightKey::Delete(*id),
        }
    }
}

/// server verdict for one [`Action`]
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Fetched(Result<Vec<UserRecord>>),
    Added(Result<UserRecord>),
    Edited { id: u64, result: Result<UserRecord> },
    Deleted { id: u64, result: Result<()> },
}

impl Outcome {
    pub fn key(&self) -> FlightKey {
        match self {
            Outcome::Fetched(_) => FlightKey::List,
            Outcome::Added(_) => FlightKey::Create,
            Outcome::Edited { id, .. } => FlightKey::Update(*id),
            Outcome::Deleted { id, .. } => FlightKey::Delete(*id),
        }
    }
}

/// Send `action` once and report what the server said.
pub async fn perform(api: &dyn UserApi, action: Action) -> Outcome {
    match action {
        Action::Fetch => Outcome::Fetched(api.list().await),
        Action::Add(candidate) => Outcome::Added(api.create(candidate).await),
        Action::Edit { id, candidate } => Outcome::Edited {
            id,
            result: api.update(id, candidate).await,
        },
        Action::Delete(id) => Outcome::Deleted {
            id,
            result: api.remove(id).await,
        },
    }
}
