//! Entity lifecycle coordination.
//!
//! The coordinator accepts lifecycle transition requests (submit,
//! schedule, suspend, resume), validates that the target type
//! supports scheduling, and applies each transition against the
//! execution engine inside a transaction envelope, with an audit
//! record appended before any engine mutation.
//!
//! # Example
//!
//! ```ignore
//! use conductor_lifecycle::{LifecycleCoordinator, LoggedTransactions};
//!
//! let coordinator = LifecycleCoordinator::new(registry, engine, audit,
//!     Arc::new(LoggedTransactions::new()));
//! let result = coordinator.schedule("feed", "sales-feed", &actor).await;
//! ```

mod capability;
mod coordinator;
mod error;
mod transaction;

pub use capability::{check_schedulable, parse_type};
pub use coordinator::LifecycleCoordinator;
pub use error::{LifecycleError, Result};
pub use transaction::{LoggedTransactions, Transaction, TransactionError, TransactionManager};
