use crate::model::user::{NewUser, Role, UserRecord};

/// staged form values, used by the add form and by the edit session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub username: String,
    pub email: String,
    pub role: Role,
}

/// a single input change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftField {
    Username(String),
    Email(String),
    Role(Role),
}

impl UserDraft {
    pub fn set(&mut self, field: DraftField) {
        match field {
            DraftField::Username(value) => self.username = value,
            DraftField::Email(value) => self.email = value,
            DraftField::Role(value) => self.role = value,
        }
    }

    /// back to `("", "", user)`
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_candidate(&self) -> NewUser {
        NewUser {
            username: self.username.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
        }
    }
}

impl From<&UserRecord> for UserDraft {
    fn from(value: &UserRecord) -> Self {
        Self {
            username: value.username.clone(),
            email: value.email.clone(),
            role: value.role.clone(),
        }
    }
}

/// At most one record is being edited. Its staged values live here and
/// never touch the collection until the server confirms a save.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Idle,
    Editing { target_id: u64, draft: UserDraft },
}

impl EditSession {
    /// Start editing `record`, dropping whatever was staged before.
    pub fn start(&mut self, record: &UserRecord) {
        *self = EditSession::Editing {
            target_id: record.id,
            draft: UserDraft::from(record),
        };
    }

    pub fn cancel(&mut self) {
        *self = EditSession::Idle;
    }

    /// Close the session if it still targets `id`.
    pub fn finish(&mut self, id: u64) {
        if self.target() == Some(id) {
            *self = EditSession::Idle;
        }
    }

    pub fn target(&self) -> Option<u64> {
        match self {
            EditSession::Idle => None,
            EditSession::Editing { target_id, .. } => Some(*target_id),
        }
    }

    pub fn is_editing(&self, id: u64) -> bool {
        self.target() == Some(id)
    }

    pub fn draft(&self) -> Option<&UserDraft> {
        match self {
            EditSession::Idle => None,
            EditSession::Editing { draft, .. } => Some(draft),
        }
    }

    /// no-op while idle
    pub fn set(&mut self, field: DraftField) {
        if let EditSession::Editing { draft, .. } = self {
            draft.set(field);
        }
    }
}
