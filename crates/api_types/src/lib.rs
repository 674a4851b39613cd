use serde::{Deserialize, Serialize};
use serde_json::Number;

pub mod budget {
    use std::collections::BTreeMap;

    use super::*;

    /// Body of `POST /budgets`.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct BudgetNew {
        pub category: String,
        pub amount: Number,
    }

    /// Body of `PUT /budgets/{category}`.
    ///
    /// The category comes from the path; a `category` field in the body is
    /// accepted and ignored.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct BudgetUpdate {
        pub amount: Number,
    }

    /// Body of `GET /budgets`: category name → amount.
    pub type BudgetList = BTreeMap<String, Number>;
}

pub mod error {
    use super::*;

    /// Body returned with every non-2xx response.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ErrorBody {
        pub error: String,
    }
}

pub mod health {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Health {
        pub status: String,
    }
}
