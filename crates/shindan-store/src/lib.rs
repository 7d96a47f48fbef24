//! Persistent store for evaluation history

mod history;

pub use history::{EvaluationRecord, EvaluationStore};
