use yewdux::Store;

use crate::action::{Action, ActionKind, Outcome};
use crate::error::Error;
use crate::model::user::UserRecord;

pub use edit::{DraftField, EditSession, UserDraft};
pub use flight::{FlightKey, Flights};

mod edit;
mod flight;

/// Everything the user management screen shows.
///
/// The collection only changes when the server confirms an operation, and
/// always from the server's response rather than from what was sent. The
/// add form and the edit session own separate drafts.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct UserStore {
    /// server order, creations appended
    pub users: Vec<UserRecord>,
    /// add form
    pub draft: UserDraft,
    pub edit: EditSession,
    /// last failure message, replaced by the next failure
    pub error: Option<String>,
    pub flights: Flights,
}

impl UserStore {
    pub fn find(&self, id: u64) -> Option<&UserRecord> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn is_pending(&self, key: FlightKey) -> bool {
        self.flights.is_pending(&key)
    }

    /// Register `action` as outstanding. Returns false if the same request
    /// has not reported back yet, in which case it must not be sent.
    pub fn begin(&mut self, action: &Action) -> bool {
        let key = action.key();
        let started = self.flights.start(key);
        if !started {
            log::debug!("{:?} already in flight, ignored", key);
        }
        started
    }

    /// what the add form would send
    pub fn add_action(&self) -> Action {
        Action::Add(self.draft.to_candidate())
    }

    /// what saving the edit session would send, none while idle
    pub fn save_action(&self) -> Option<Action> {
        match &self.edit {
            EditSession::Idle => None,
            EditSession::Editing { target_id, draft } => Some(Action::Edit {
                id: *target_id,
                candidate: draft.to_candidate(),
            }),
        }
    }

    /// Select `id` for editing. Retargets an active session; unknown ids
    /// leave the session as it is and return false.
    pub fn begin_edit(&mut self, id: u64) -> bool {
        match self.users.iter().find(|user| user.id == id) {
            Some(record) => {
                self.edit.start(record);
                true
            }
            None => {
                log::warn!("user {} is not listed, cannot edit", id);
                false
            }
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit.cancel();
    }

    pub fn set_draft(&mut self, field: DraftField) {
        self.draft.set(field);
    }

    pub fn set_edit(&mut self, field: DraftField) {
        self.edit.set(field);
    }

    /// Fold a server response into the store and release its flight.
    pub fn apply(&mut self, outcome: Outcome) {
        let key = outcome.key();
        self.flights.finish(&key);

        match outcome {
            Outcome::Fetched(Ok(users)) => {
                log::debug!("fetched {} users", users.len());
                self.users = users;
            }
            Outcome::Added(Ok(user)) => {
                if self.find(user.id).is_some() {
                    // the mock service answers every create with the same id
                    log::warn!("server returned listed id {} for a new user", user.id);
                }
                self.users.push(user);
                self.draft.reset();
            }
            Outcome::Edited { id, result: Ok(user) } => {
                let mut replaced = false;
                for slot in self.users.iter_mut().filter(|slot| slot.id == id) {
                    *slot = user.clone();
                    replaced = true;
                }
                if !replaced {
                    log::debug!("edited user {} is no longer listed", id);
                }
                self.edit.finish(id);
            }
            Outcome::Deleted { id, result: Ok(()) } => {
                self.users.retain(|user| user.id != id);
                self.edit.finish(id);
            }
            Outcome::Fetched(Err(err))
            | Outcome::Added(Err(err))
            | Outcome::Edited { result: Err(err), .. }
            | Outcome::Deleted { result: Err(err), .. } => self.fail(key.kind(), err),
        }
    }

    fn fail(&mut self, kind: ActionKind, err: Error) {
        log::error!("{:?} failed: {}", kind, err);
        self.error = Some(kind.failure_message().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::user::{NewUser, Role};

    fn user(id: u64, username: &str, email: &str, role: Role) -> UserRecord {
        UserRecord {
            id,
            username: username.to_string(),
            email: email.to_string(),
            role,
        }
    }

    fn alice() -> UserRecord {
        user(1, "alice", "a@x.com", Role::User)
    }

    fn listed(users: Vec<UserRecord>) -> UserStore {
        let mut store = UserStore::default();
        store.apply(Outcome::Fetched(Ok(users)));
        store
    }

    fn server_down() -> Error {
        Error::Status {
            status: 500,
            reason: "Internal Server Error".to_string(),
        }
    }

    #[test]
    fn list_replaces_the_collection() {
        let mut store = listed(vec![alice(), user(2, "carol", "c@x.com", Role::Admin)]);
        store.apply(Outcome::Fetched(Ok(vec![user(5, "dave", "d@x.com", Role::User)])));
        assert_eq!(store.users, &[user(5, "dave", "d@x.com", Role::User)]);
    }

    #[test]
    fn create_appends_server_record_and_resets_draft() {
        let mut store = listed(vec![alice()]);
        store.set_draft(DraftField::Username("bob".to_string()));
        store.set_draft(DraftField::Email("b@x.com".to_string()));
        store.set_draft(DraftField::Role(Role::Admin));

        store.apply(Outcome::Added(Ok(user(11, "bob", "b@x.com", Role::Admin))));

        assert_eq!(
            store.users,
            &[alice(), user(11, "bob", "b@x.com", Role::Admin)]
        );
        assert_eq!(store.draft, UserDraft::default());
    }

    #[test]
    fn create_appends_even_when_server_repeats_an_id() {
        let mut store = listed(vec![alice()]);
        store.apply(Outcome::Added(Ok(user(11, "bob", "b@x.com", Role::Admin))));
        store.apply(Outcome::Added(Ok(user(11, "carol", "c@x.com", Role::User))));
        let names: Vec<&str> = store.users.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, ["alice", "bob", "carol"]);
    }

    #[test]
    fn update_replaces_in_place_and_closes_session() {
        let mut store = listed(vec![alice(), user(2, "carol", "c@x.com", Role::Admin)]);
        assert!(store.begin_edit(1));
        store.apply(Outcome::Edited {
            id: 1,
            result: Ok(user(1, "alice2", "a@x.com", Role::User)),
        });
        assert_eq!(store.users[0].username, "alice2");
        assert_eq!(store.users[1].username, "carol");
        assert_eq!(store.edit, EditSession::Idle);
    }

    #[test]
    fn repeated_id_rows_follow_update_and_delete() {
        let mut store = listed(vec![alice()]);
        store.apply(Outcome::Added(Ok(user(11, "bob", "b@x.com", Role::Admin))));
        store.apply(Outcome::Added(Ok(user(11, "carol", "c@x.com", Role::User))));

        store.apply(Outcome::Edited {
            id: 11,
            result: Ok(user(11, "dave", "d@x.com", Role::User)),
        });
        assert_eq!(store.users.len(), 3);
        assert!(store.users[1..].iter().all(|u| u.username == "dave"));

        store.apply(Outcome::Deleted { id: 11, result: Ok(()) });
        assert_eq!(store.users, &[alice()]);
    }

    #[test]
    fn update_for_vanished_id_leaves_collection() {
        let mut store = listed(vec![alice()]);
        let before = store.users.clone();
        store.apply(Outcome::Edited {
            id: 42,
            result: Ok(user(42, "ghost", "g@x.com", Role::User)),
        });
        assert_eq!(store.users, before);
    }

    #[test]
    fn update_of_other_record_keeps_session() {
        let mut store = listed(vec![alice(), user(2, "carol", "c@x.com", Role::Admin)]);
        store.begin_edit(2);
        store.apply(Outcome::Edited {
            id: 1,
            result: Ok(user(1, "alice2", "a@x.com", Role::User)),
        });
        assert!(store.edit.is_editing(2));
    }

    #[test]
    fn delete_removes_matching_record() {
        let mut store = listed(vec![alice(), user(2, "carol", "c@x.com", Role::Admin)]);
        store.apply(Outcome::Deleted { id: 1, result: Ok(()) });
        assert_eq!(store.users, &[user(2, "carol", "c@x.com", Role::Admin)]);

        store.apply(Outcome::Deleted { id: 9, result: Ok(()) });
        assert_eq!(store.users.len(), 1);
    }

    #[test]
    fn delete_closes_session_on_that_record() {
        let mut store = listed(vec![alice()]);
        store.begin_edit(1);
        store.apply(Outcome::Deleted { id: 1, result: Ok(()) });
        assert_eq!(store.edit, EditSession::Idle);
    }

    #[test]
    fn failures_keep_state_and_overwrite_message() {
        let mut store = listed(vec![alice()]);
        store.set_draft(DraftField::Username("bob".to_string()));
        let before = store.users.clone();

        store.apply(Outcome::Added(Err(server_down())));
        assert_eq!(store.error.as_deref(), Some("Failed to add user"));
        assert_eq!(store.draft.username, "bob");

        store.apply(Outcome::Deleted {
            id: 1,
            result: Err(Error::Network("offline".to_string())),
        });
        assert_eq!(store.error.as_deref(), Some("Failed to delete user"));

        store.apply(Outcome::Edited {
            id: 1,
            result: Err(server_down()),
        });
        assert_eq!(store.error.as_deref(), Some("Failed to edit user"));

        store.apply(Outcome::Fetched(Err(Error::Decode("eof".to_string()))));
        assert_eq!(store.error.as_deref(), Some("Failed to fetch users"));

        assert_eq!(store.users, before);
    }

    #[test]
    fn failed_save_keeps_session_open() {
        let mut store = listed(vec![alice()]);
        store.begin_edit(1);
        store.set_edit(DraftField::Username("alice2".to_string()));
        store.apply(Outcome::Edited {
            id: 1,
            result: Err(server_down()),
        });
        assert!(store.edit.is_editing(1));
        assert_eq!(store.edit.draft().unwrap().username, "alice2");
        assert_eq!(store.users[0].username, "alice");
    }

    #[test]
    fn success_does_not_clear_error_but_dismiss_does() {
        let mut store = UserStore::default();
        store.apply(Outcome::Fetched(Err(server_down())));
        store.apply(Outcome::Fetched(Ok(vec![alice()])));
        assert_eq!(store.error.as_deref(), Some("Failed to fetch users"));
        store.dismiss_error();
        assert_eq!(store.error.as_deref(), None);
    }

    #[test]
    fn edit_then_cancel_leaves_collection() {
        let mut store = listed(vec![alice()]);
        assert!(store.begin_edit(1));
        store.set_edit(DraftField::Username("alice2".to_string()));
        store.cancel_edit();
        assert_eq!(store.edit, EditSession::Idle);
        assert_eq!(store.users[0].username, "alice");
    }

    #[test]
    fn selecting_another_record_retargets() {
        let mut store = listed(vec![alice(), user(2, "carol", "c@x.com", Role::Admin)]);
        store.begin_edit(1);
        store.set_edit(DraftField::Username("alice2".to_string()));
        store.begin_edit(2);
        assert!(store.edit.is_editing(2));
        assert_eq!(store.edit.draft().unwrap().username, "carol");
    }

    #[test]
    fn begin_edit_on_unknown_id_is_a_no_op() {
        let mut store = listed(vec![alice()]);
        store.begin_edit(1);
        assert!(!store.begin_edit(7));
        assert!(store.edit.is_editing(1));
    }

    #[test]
    fn add_form_and_edit_session_are_independent() {
        let mut store = listed(vec![alice()]);
        store.set_draft(DraftField::Username("bob".to_string()));
        store.begin_edit(1);
        assert_eq!(store.draft.username, "bob");

        store.set_edit(DraftField::Email("new@x.com".to_string()));
        store.cancel_edit();
        assert_eq!(store.draft.username, "bob");
        assert_eq!(store.draft.email, "");
    }

    #[test]
    fn save_action_reflects_staged_values() {
        let mut store = listed(vec![alice()]);
        assert_eq!(store.save_action(), None);
        store.begin_edit(1);
        store.set_edit(DraftField::Username("alice2".to_string()));
        assert_eq!(
            store.save_action(),
            Some(Action::Edit {
                id: 1,
                candidate: NewUser {
                    username: "alice2".to_string(),
                    email: "a@x.com".to_string(),
                    role: Role::User,
                },
            })
        );
    }

    #[test]
    fn duplicate_request_is_refused_until_applied() {
        let mut store = listed(vec![alice()]);
        let delete = Action::Delete(1);
        assert!(store.begin(&delete));
        assert!(!store.begin(&delete));
        assert!(store.is_pending(FlightKey::Delete(1)));
        assert!(store.begin(&Action::Delete(2)));

        store.apply(Outcome::Deleted {
            id: 1,
            result: Err(server_down()),
        });
        assert!(!store.is_pending(FlightKey::Delete(1)));
        assert!(store.begin(&delete));
    }
}
