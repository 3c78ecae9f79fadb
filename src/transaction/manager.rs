// ============================================================================
// Transaction Manager
// ============================================================================

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use super::{Change, Transaction, TransactionError, TransactionId, TransactionState};
use crate::infrastructure::TransactionalBackend;

/// Coordinates units of work over the entity store.
///
/// Buffered writes only reach the store through [`commit`](Self::commit),
/// which hands the whole buffer to the backend's all-or-nothing `apply`.
/// Exactly one of Committed/Aborted is reached for every transaction and
/// nothing is permitted after either.
pub struct TransactionManager {
    backend: Arc<dyn TransactionalBackend>,

    // Active transactions. The write guard is held across apply so
    // concurrently committing units are serialized against each other.
    transactions: RwLock<HashMap<TransactionId, Transaction>>,
}

impl TransactionManager {
    pub fn new(backend: Arc<dyn TransactionalBackend>) -> Self {
        Self {
            backend,
            transactions: RwLock::new(HashMap::new()),
        }
    }

    /// Open a new active transaction and return its id.
    pub async fn begin(&self) -> TransactionId {
        let transaction = Transaction::new(TransactionId::new());
        let id = transaction.id();

        self.transactions.write().await.insert(id, transaction);
        debug!(txn = %id, "transaction started");
        id
    }

    /// Buffer a write in the given transaction.
    ///
    /// # Errors
    /// Returns an error if the transaction is unknown or no longer active.
    pub async fn record(&self, id: TransactionId, change: Change) -> Result<(), TransactionError> {
        let mut transactions = self.transactions.write().await;
        let transaction = transactions
            .get_mut(&id)
            .ok_or(TransactionError::UnknownTransaction(id))?;

        transaction.record_change(change)
    }

    /// Apply the buffered writes atomically.
    ///
    /// On success the transaction transitions to Committed. If the store
    /// rejects the buffer, the transaction is rolled back internally and
    /// [`TransactionError::CommitFailed`] is returned; none of the unit's
    /// writes are visible in that case.
    pub async fn commit(&self, id: TransactionId) -> Result<(), TransactionError> {
        let mut transactions = self.transactions.write().await;
        let transaction = transactions
            .get_mut(&id)
            .ok_or(TransactionError::UnknownTransaction(id))?;

        if transaction.state() != TransactionState::Active {
            return Err(TransactionError::InvalidState {
                id,
                state: transaction.state(),
            });
        }

        match self.backend.apply(transaction.changes()).await {
            Ok(()) => {
                transaction.commit()?;
                debug!(
                    txn = %id,
                    changes = transaction.change_count(),
                    elapsed = ?transaction.duration(),
                    "transaction committed"
                );
                transactions.remove(&id);
                Ok(())
            }
            Err(err) => {
                transaction.rollback()?;
                transactions.remove(&id);
                debug!(txn = %id, error = %err, "commit rejected, transaction aborted");
                Err(TransactionError::CommitFailed(err))
            }
        }
    }

    /// Discard the buffered writes and abort the transaction.
    ///
    /// Rolling back a transaction that was already finalized (for example
    /// by a failed commit) is a no-op, so failure paths can always call
    /// this unconditionally.
    pub async fn rollback(&self, id: TransactionId) -> Result<(), TransactionError> {
        let mut transactions = self.transactions.write().await;

        if let Some(transaction) = transactions.get_mut(&id) {
            transaction.rollback()?;
            transactions.remove(&id);
            debug!(txn = %id, "transaction rolled back");
        }
        Ok(())
    }

    /// Check whether the given transaction is still open.
    pub async fn is_active(&self, id: TransactionId) -> bool {
        self.transactions.read().await.contains_key(&id)
    }
}
