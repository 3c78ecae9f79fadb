// ============================================================================
// Transaction Module
// ============================================================================
//
// A unit of work over the two entity collections. Writes are buffered as
// Change commands while the transaction is active and applied all-or-nothing
// at commit through the store's transactional seam.
//
// Design Patterns Used:
// - State Pattern: transaction lifecycle (Active, Committed, Aborted)
// - Command Pattern: buffered writes replayed at commit
//
// ============================================================================

pub mod change;
pub mod manager;
pub mod state;

pub use change::Change;
pub use manager::TransactionManager;
pub use state::{Transaction, TransactionId, TransactionState};

use thiserror::Error;

use crate::infrastructure::StoreError;

#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("transaction {0} not found")]
    UnknownTransaction(TransactionId),

    #[error("transaction {id} is {state}")]
    InvalidState {
        id: TransactionId,
        state: TransactionState,
    },

    /// The store rejected the buffered writes. The unit was rolled back and
    /// none of its writes are visible.
    #[error("commit failed: {0}")]
    CommitFailed(#[from] StoreError),
}
