use std::collections::BTreeSet;

use crate::action::ActionKind;

/// identity of an outstanding request: one per operation kind and record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FlightKey {
    List,
    Create,
    Update(u64),
    Delete(u64),
}

impl FlightKey {
    pub fn kind(&self) -> ActionKind {
        match self {
            FlightKey::List => ActionKind::Fetch,
            FlightKey::Create => ActionKind::Add,
            FlightKey::Update(_) => ActionKind::Edit,
            FlightKey::Delete(_) => ActionKind::Delete,
        }
    }
}

/// Requests that were sent and have not reported back yet.
///
/// A key can only be in flight once; the ui disables the control that
/// would start it again.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Flights {
    pending: BTreeSet<FlightKey>,
}

impl Flights {
    /// false when the same request is still outstanding
    pub fn start(&mut self, key: FlightKey) -> bool {
        self.pending.insert(key)
    }

    pub fn finish(&mut self, key: &FlightKey) -> bool {
        self.pending.remove(key)
    }

    pub fn is_pending(&self, key: &FlightKey) -> bool {
        self.pending.contains(key)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
