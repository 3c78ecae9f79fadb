// ============================================================================
// Transaction Change Tracking
// ============================================================================
//
// Implements the Command Pattern for the writes a unit of work buffers.
// Each Change is recorded while the transaction is active, applied during
// COMMIT and discarded during ROLLBACK.
//
// Linkage changes are operational on purpose: they are evaluated against
// the owner document as it exists at commit time, so two units appending
// to the same owner cannot overwrite each other with stale copies.
//
// ============================================================================

use uuid::Uuid;

use crate::domain::{place::Place, user::User};

#[derive(Debug, Clone)]
pub enum Change {
    /// Insert or replace a place document
    PutPlace(Place),

    /// Remove a place document; absent documents are left alone
    RemovePlace(Uuid),

    /// Insert or replace a user document
    PutUser(User),

    /// Append `place_id` to the owner's owned-place vector unless already
    /// present. Fails the unit when the owner is absent.
    LinkPlace { owner_id: Uuid, place_id: Uuid },

    /// Remove `place_id` from the owner's owned-place vector. A no-op when
    /// the owner or the id is absent.
    UnlinkPlace { owner_id: Uuid, place_id: Uuid },
}

impl Change {
    /// Check if this change mutates an owned-place vector
    pub fn is_linkage(&self) -> bool {
        matches!(
            self,
            Change::LinkPlace { .. } | Change::UnlinkPlace { .. }
        )
    }
}
