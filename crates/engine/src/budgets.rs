//! The module contains `Budgets`, the category → amount mapping.

use std::collections::BTreeMap;

use serde_json::Number;

use crate::{EngineError, ResultEngine};

/// Budget amounts keyed by category name.
///
/// The category name is both the identity and the address of a budget.
/// Amounts are kept as the JSON number the caller sent, so `300` stays an
/// integer on the way back out.
#[derive(Debug, Default)]
pub struct Budgets {
    amounts: BTreeMap<String, Number>,
}

impl Budgets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    pub fn list(&self) -> BTreeMap<String, Number> {
        self.amounts.clone()
    }

    #[cfg(test)]
    fn get(&self, category: &str) -> Option<&Number> {
        self.amounts.get(category)
    }

    /// Set the amount for `category`, overwriting any previous one.
    pub fn upsert(&mut self, category: String, amount: Number) {
        tracing::debug!(%category, %amount, "budget upserted");
        self.amounts.insert(category, amount);
    }

    pub fn delete(&mut self, category: &str) -> ResultEngine<Number> {
        let amount = self
            .amounts
            .remove(category)
            .ok_or_else(|| EngineError::NotFound(category.to_string()))?;
        tracing::debug!(%category, "budget deleted");

        Ok(amount)
    }
}
