// ============================================================================
// Transaction State Management
// ============================================================================
//
// Implements the State Pattern for transaction lifecycle management.
// Each transaction moves through defined states: Active -> Committed/Aborted
//
// ============================================================================

use std::sync::atomic::{AtomicU64, Ordering};

use super::{Change, TransactionError};

/// Global transaction ID counter
static NEXT_TXN_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransactionId(pub u64);

impl TransactionId {
    /// Generate a new unique transaction ID
    pub fn new() -> Self {
        TransactionId(NEXT_TXN_ID.fetch_add(1, Ordering::SeqCst))
    }

    /// Get the raw ID value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "txn_{}", self.0)
    }
}

/// Transaction state following the State Pattern
///
/// State transitions:
/// ```text
/// Active ──commit──> Committed
///   │
///   └──rollback──> Aborted
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionState {
    /// Transaction is active and can buffer writes
    Active,

    /// Transaction has been successfully committed
    Committed,

    /// Transaction has been aborted/rolled back
    Aborted,
}

impl TransactionState {
    /// Check if the transaction can buffer writes
    pub fn is_active(&self) -> bool {
        matches!(self, TransactionState::Active)
    }

    /// Check if the transaction is in a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TransactionState::Committed | TransactionState::Aborted
        )
    }
}

impl std::fmt::Display for TransactionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionState::Active => write!(f, "ACTIVE"),
            TransactionState::Committed => write!(f, "COMMITTED"),
            TransactionState::Aborted => write!(f, "ABORTED"),
        }
    }
}

/// A unit of work spanning the place and user collections
///
/// # Thread Safety
/// This structure is used from a single request task. The
/// TransactionManager handles synchronization across requests.
#[derive(Debug)]
pub struct Transaction {
    /// Unique transaction identifier
    id: TransactionId,

    /// Current state (Active, Committed, Aborted)
    state: TransactionState,

    /// Writes buffered during this transaction (Command Pattern)
    changes: Vec<Change>,

    /// Start time for diagnostics
    start_time: std::time::Instant,
}

impl Transaction {
    /// Create a new active transaction with the given ID
    pub fn new(id: TransactionId) -> Self {
        Self {
            id,
            state: TransactionState::Active,
            changes: Vec::new(),
            start_time: std::time::Instant::now(),
        }
    }

    /// Get the transaction ID
    pub fn id(&self) -> TransactionId {
        self.id
    }

    /// Get the current state
    pub fn state(&self) -> TransactionState {
        self.state
    }

    /// Get all writes buffered in this transaction
    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    /// Get the number of buffered writes
    pub fn change_count(&self) -> usize {
        self.changes.len()
    }

    /// Get transaction duration
    pub fn duration(&self) -> std::time::Duration {
        self.start_time.elapsed()
    }

    /// Buffer a write in this transaction
    ///
    /// # Errors
    /// Returns an error if the transaction is not active
    pub fn record_change(&mut self, change: Change) -> Result<(), TransactionError> {
        if !self.state.is_active() {
            return Err(TransactionError::InvalidState {
                id: self.id,
                state: self.state,
            });
        }

        self.changes.push(change);
        Ok(())
    }

    /// Mark transaction as committed
    ///
    /// # Errors
    /// Returns an error if the transaction is not active
    pub fn commit(&mut self) -> Result<(), TransactionError> {
        if !self.state.is_active() {
            return Err(TransactionError::InvalidState {
                id: self.id,
                state: self.state,
            });
        }

        self.state = TransactionState::Committed;
        Ok(())
    }

    /// Mark transaction as aborted and discard buffered writes
    ///
    /// # Errors
    /// Returns an error if the transaction is not active
    pub fn rollback(&mut self) -> Result<(), TransactionError> {
        if !self.state.is_active() {
            return Err(TransactionError::InvalidState {
                id: self.id,
                state: self.state,
            });
        }

        self.changes.clear();
        self.state = TransactionState::Aborted;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_transaction_id_generation() {
        let id1 = TransactionId::new();
        let id2 = TransactionId::new();
        assert!(id2.as_u64() > id1.as_u64());
    }

    #[test]
    fn test_transaction_lifecycle() {
        let id = TransactionId::new();
        let mut txn = Transaction::new(id);

        assert_eq!(txn.state(), TransactionState::Active);
        assert!(txn.state().is_active());
        assert!(!txn.state().is_terminal());

        txn.commit().unwrap();
        assert_eq!(txn.state(), TransactionState::Committed);
        assert!(txn.state().is_terminal());
    }

    #[test]
    fn test_cannot_commit_twice() {
        let id = TransactionId::new();
        let mut txn = Transaction::new(id);

        txn.commit().unwrap();
        assert!(txn.commit().is_err());
    }

    #[test]
    fn test_rollback_clears_changes() {
        let id = TransactionId::new();
        let mut txn = Transaction::new(id);

        let change = Change::RemovePlace(Uuid::new_v4());
        txn.record_change(change).unwrap();
        assert_eq!(txn.change_count(), 1);

        txn.rollback().unwrap();
        assert_eq!(txn.change_count(), 0);
        assert_eq!(txn.state(), TransactionState::Aborted);
    }

    #[test]
    fn test_cannot_record_change_after_commit() {
        let id = TransactionId::new();
        let mut txn = Transaction::new(id);

        txn.commit().unwrap();

        let change = Change::RemovePlace(Uuid::new_v4());
        assert!(txn.record_change(change).is_err());
    }
}
