//! Explicit propagation context.

use std::sync::{Arc, LazyLock};

use serde_json::Value;

use crate::transaction::types::Transaction;

static ZERO_TRANSACTION: LazyLock<Transaction> = LazyLock::new(Transaction::default);

/// Propagation context carried by every call along a logical operation.
///
/// Contexts are cheap to clone and never mutated in place; attaching a
/// transaction or a value yields a derived context. This is deliberately an
/// explicit parameter rather than ambient thread-local state.
#[derive(Debug, Clone, Default)]
pub struct Context {
    transaction: Option<Arc<Transaction>>,
    values: Vec<(String, Value)>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derived context carrying `transaction`, replacing any previously
    /// attached one (nesting is last-wins, not stacked).
    pub fn with_transaction(&self, transaction: Transaction) -> Context {
        let mut ctx = self.clone();
        ctx.transaction = Some(Arc::new(transaction));
        ctx
    }

    /// The attached transaction, or a zero-value one if none is attached.
    ///
    /// Never fails; callers must not treat a missing transaction as an
    /// error.
    pub fn transaction(&self) -> &Transaction {
        self.transaction.as_deref().unwrap_or(&ZERO_TRANSACTION)
    }

    /// Derived context with `key` set to `value`.
    ///
    /// Recorders use this to carry their own correlation state alongside the
    /// transaction.
    pub fn with_value(&self, key: impl Into<String>, value: impl Into<Value>) -> Context {
        let mut ctx = self.clone();
        ctx.values.push((key.into(), value.into()));
        ctx
    }

    /// The most recently set value for `key`, if any.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.values
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
}
