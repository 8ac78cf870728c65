use tracing::debug;
use uuid::Uuid;

/// Identity of one rendered approval row.
pub type RowId = Uuid;

/// A pending approval row in the listing. Owned by [`Listing`]; removed
/// (not hidden) exactly when the decision that targeted it is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRow {
    pub id: RowId,
    pub user_id: String,
    pub requestor_id: String,
}

/// The table of pending approvals on the current page.
#[derive(Debug, Default)]
pub struct Listing {
    rows: Vec<PendingRow>,
}

impl Listing {
    pub fn insert(&mut self, user_id: impl Into<String>, requestor_id: impl Into<String>) -> RowId {
        let row = PendingRow {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            requestor_id: requestor_id.into(),
        };
        let id = row.id;
        self.rows.push(row);
        id
    }

    /// Remove a row from the listing. Returns whether it was present;
    /// removing an already-gone row is a no-op.
    pub fn remove(&mut self, id: RowId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|r| r.id != id);
        let removed = self.rows.len() < before;
        if removed {
            debug!(row = %id, "approval row removed");
        }
        removed
    }

    pub fn contains(&self, id: RowId) -> bool {
        self.rows.iter().any(|r| r.id == id)
    }

    pub fn rows(&self) -> &[PendingRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
