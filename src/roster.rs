//! Roster of participants for the current session.

use crate::defaults::MAX_NAME_LEN;
use crate::generate_id;
use crate::storage::{self, KeyValueStore};
use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Participant {
    /// New participant with a fresh id, created now. `name` is trimmed.
    pub fn new(name: &str) -> Self {
        Self {
            id: generate_id(),
            name: name.trim().to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn with_timestamp(id: &str, name: &str, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.to_string(),
            name: name.trim().to_string(),
            created_at,
        }
    }
}

/// Rejection reasons for [`Roster::add`]. The display text is shown inline
/// under the name field.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RosterError {
    #[error("Please enter a name")]
    Empty,
    #[error("Names must be 50 characters or fewer")]
    TooLong,
    #[error("This name is already registered")]
    Duplicate,
}

/// Trim `name` and check it is non-empty and short enough.
pub fn validate_name(name: &str) -> Result<&str, RosterError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(RosterError::Empty);
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(RosterError::TooLong);
    }
    Ok(trimmed)
}

/// Ordered participant list that writes itself back to `store` after every
/// mutation.
#[derive(Debug)]
pub struct Roster<S: KeyValueStore> {
    store: S,
    members: Vec<Participant>,
}

impl<S: KeyValueStore> Roster<S> {
    /// Restore the roster saved in `store`. Unreadable data yields an empty
    /// roster.
    pub fn load(store: S) -> Self {
        let members = storage::load_members(&store);
        info!("Roster loaded with {} members", members.len());
        Self { store, members }
    }

    pub fn participants(&self) -> &[Participant] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn add(&mut self, name: &str) -> Result<&Participant, RosterError> {
        let trimmed = validate_name(name)?;
        if self.members.iter().any(|m| m.name == trimmed) {
            return Err(RosterError::Duplicate);
        }

        let mut participant = Participant::new(trimmed);
        while self.members.iter().any(|m| m.id == participant.id) {
            participant.id = generate_id();
        }
        debug!("Adding '{}' as {}", participant.name, participant.id);

        self.members.push(participant);
        self.persist();
        Ok(&self.members[self.members.len() - 1])
    }

    /// Remove the participant with `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: &str) {
        let before = self.members.len();
        self.members.retain(|m| m.id != id);
        if self.members.len() == before {
            debug!("No member with id {} to remove", id);
        }
        self.persist();
    }

    pub fn clear(&mut self) {
        debug!("Clearing {} members", self.members.len());
        self.members.clear();
        self.persist();
    }

    fn persist(&self) {
        storage::save_members(&self.store, &self.members);
    }
}
