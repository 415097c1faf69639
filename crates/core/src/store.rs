//! The in-memory visit store.
//!
//! An append-only journal of visits held for the process lifetime. Insertion
//! order is preserved and meaningful: it is the registration order used for
//! display numbering. There is no removal or update operation, and no
//! uniqueness constraint: registering the same visit twice stores it twice.

use crate::error::StoreError;
use crate::reports;
use crate::visit::Visit;
use indexmap::IndexMap;

/// Ordered, append-only collection of visits.
///
/// The store owns its visits; persistence receives them by shared reference,
/// so a failed save can never corrupt or clear in-memory state. Only
/// well-formed [`Visit`] values are representable here: rows read from disk
/// are validated through [`Visit::new`] before they can reach the store.
#[derive(Debug, Default)]
pub struct VisitStore {
    visits: Vec<Visit>,
}

impl VisitStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a visit to the journal.
    pub fn add(&mut self, visit: Visit) {
        tracing::debug!(service = visit.service(), date = %visit.date(), "visit registered");
        self.visits.push(visit);
    }

    /// Returns the visits in registration order.
    pub fn list(&self) -> &[Visit] {
        &self.visits
    }

    pub fn len(&self) -> usize {
        self.visits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    /// Counts visits per service, in first-seen order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Empty` when the store holds zero visits. Callers
    /// that prefer an empty mapping should check [`VisitStore::is_empty`]
    /// first; the store keeps the stricter "nothing to summarise" contract.
    pub fn summarise_by_service(&self) -> Result<IndexMap<String, usize>, StoreError> {
        if self.visits.is_empty() {
            return Err(StoreError::Empty);
        }
        Ok(reports::counts_by_service(&self.visits))
    }
}
