//! In-memory resource store for transactions, categories and budgets.
//!
//! [`Engine`] owns the three collections. Each one sits behind its own
//! lock, held for the whole operation, so concurrent requests observe a
//! consistent view of every collection they touch.
use std::collections::BTreeMap;

use serde_json::{Number, Value};
use tokio::sync::Mutex;

pub use addressing::Addressing;
pub use budgets::Budgets;
pub use collection::{Collection, ID_FIELD};
pub use error::EngineError;
pub use validation::RecordPolicy;

mod addressing;
mod budgets;
mod collection;
mod error;
mod validation;

/// A free-form JSON object as stored by the engine.
pub type Record = serde_json::Map<String, Value>;

type ResultEngine<T> = Result<T, EngineError>;

const TRANSACTION: &str = "transaction";
const CATEGORY: &str = "category";

/// Number of entries held by each collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counts {
    pub transactions: usize,
    pub categories: usize,
    pub budgets: usize,
}

#[derive(Debug)]
pub struct Engine {
    addressing: Addressing,
    transactions: Mutex<Collection>,
    categories: Mutex<Collection>,
    budgets: Mutex<Budgets>,
    transaction_policy: RecordPolicy,
    category_policy: RecordPolicy,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    pub fn addressing(&self) -> Addressing {
        self.addressing
    }

    pub async fn counts(&self) -> Counts {
        Counts {
            transactions: self.transactions.lock().await.len(),
            categories: self.categories.lock().await.len(),
            budgets: self.budgets.lock().await.len(),
        }
    }

    /// All transactions in insertion order.
    pub async fn list_transactions(&self) -> Vec<Record> {
        self.transactions.lock().await.list()
    }

    /// Store a new transaction and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// [`EngineError::Malformed`] if `body` is not an object or misses a
    /// field required by the transaction policy.
    pub async fn create_transaction(&self, body: Value) -> ResultEngine<Record> {
        let record = self.transaction_policy.check(TRANSACTION, body)?;
        Ok(self.transactions.lock().await.create(record))
    }

    /// Replace the transaction addressed by `id` with `body`, unchanged.
    ///
    /// # Errors
    ///
    /// [`EngineError::Malformed`] as for create, [`EngineError::OutOfRange`]
    /// if `id` addresses no transaction.
    pub async fn replace_transaction(&self, id: u64, body: Value) -> ResultEngine<Record> {
        let record = self.transaction_policy.check(TRANSACTION, body)?;
        self.transactions.lock().await.replace(id, record)
    }

    pub async fn delete_transaction(&self, id: u64) -> ResultEngine<Record> {
        self.transactions.lock().await.delete(id)
    }

    /// All categories in insertion order.
    pub async fn list_categories(&self) -> Vec<Record> {
        self.categories.lock().await.list()
    }

    pub async fn create_category(&self, body: Value) -> ResultEngine<Record> {
        let record = self.category_policy.check(CATEGORY, body)?;
        Ok(self.categories.lock().await.create(record))
    }

    /// Remove a category. Budgets and transactions naming it are untouched.
    pub async fn delete_category(&self, id: u64) -> ResultEngine<Record> {
        self.categories.lock().await.delete(id)
    }

    pub async fn list_budgets(&self) -> BTreeMap<String, Number> {
        self.budgets.lock().await.list()
    }

    /// Set the budget for `category`, creating or overwriting it.
    pub async fn upsert_budget(&self, category: String, amount: Number) {
        self.budgets.lock().await.upsert(category, amount);
    }

    pub async fn delete_budget(&self, category: &str) -> ResultEngine<Number> {
        self.budgets.lock().await.delete(category)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[derive(Debug, Default)]
pub struct EngineBuilder {
    addressing: Addressing,
    transaction_policy: RecordPolicy,
    category_policy: RecordPolicy,
}

impl EngineBuilder {
    /// Select how transaction and category ids are assigned and resolved.
    pub fn addressing(mut self, addressing: Addressing) -> EngineBuilder {
        self.addressing = addressing;
        self
    }

    pub fn transaction_policy(mut self, policy: RecordPolicy) -> EngineBuilder {
        self.transaction_policy = policy;
        self
    }

    pub fn category_policy(mut self, policy: RecordPolicy) -> EngineBuilder {
        self.category_policy = policy;
        self
    }

    /// Construct an empty `Engine`
    pub fn build(self) -> Engine {
        tracing::debug!(addressing = self.addressing.as_str(), "building engine");

        Engine {
            addressing: self.addressing,
            transactions: Mutex::new(Collection::new(TRANSACTION, self.addressing)),
            categories: Mutex::new(Collection::new(CATEGORY, self.addressing)),
            budgets: Mutex::new(Budgets::new()),
            transaction_policy: self.transaction_policy,
            category_policy: self.category_policy,
        }
    }
}
