//! Counter feature: an integer persisted under the `count` key.
//!
//! Stored text is converted without validation. Text that is not a number
//! becomes [`Count::NotANumber`] instead of falling back to zero, and that
//! value is kept (and persisted) until the next reset.

use std::fmt;

use crate::cell::StateCell;
use crate::diagnostics::{swallow, DiagnosticSink, COUNT_WRITE_FAILED, READ_FAILED};
use crate::storage::{KeyValueStore, StoreError};

/// Storage key of the counter value.
pub const COUNT_KEY: &str = "count";

/// Current counter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Count {
    Number(i64),
    NotANumber,
}

impl Default for Count {
    fn default() -> Self {
        Count::Number(0)
    }
}

impl Count {
    /// Converts stored text into a count.
    ///
    /// Surrounding whitespace is ignored and whitespace-only text is zero.
    /// Integral floats such as `1e3` are accepted; anything else is `NotANumber`.
    /// Fractional (`1.5`) and hex (`0x10`) text map to `NotANumber` on purpose.
    pub fn from_stored(text: &str) -> Count {
        let text = text.trim();
        if text.is_empty() {
            return Count::Number(0);
        }
        if let Ok(n) = text.parse::<i64>() {
            return Count::Number(n);
        }
        match text.parse::<f64>() {
            Ok(f) if f.is_finite()
                && f.fract() == 0.0
                && f >= i64::MIN as f64
                && f < i64::MAX as f64 =>
            {
                Count::Number(f as i64)
            }
            _ => Count::NotANumber,
        }
    }

    pub fn is_nan(self) -> bool {
        matches!(self, Count::NotANumber)
    }

    /// The value one higher. Saturates at `i64::MAX`; `NotANumber` stays put.
    pub fn incremented(self) -> Count {
        match self {
            Count::Number(n) => Count::Number(n.saturating_add(1)),
            Count::NotANumber => Count::NotANumber,
        }
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Count::Number(n) => write!(f, "{}", n),
            Count::NotANumber => f.write_str("NaN"),
        }
    }
}

fn load(store: &dyn KeyValueStore) -> Result<Option<Count>, StoreError> {
    let stored = store.get(COUNT_KEY)?;
    Ok(stored
        .filter(|text| !text.is_empty())
        .map(|text| Count::from_stored(&text)))
}

fn persist(store: &mut dyn KeyValueStore, count: Count) -> Result<(), StoreError> {
    store.set(COUNT_KEY, &count.to_string())
}

/// Seeds `cell` from the store at mount time.
///
/// An absent or empty entry leaves the cell alone. A read failure is reported
/// to `sink` and the cell keeps its default.
pub fn initialize(cell: &mut StateCell<Count>, store: &dyn KeyValueStore, sink: &dyn DiagnosticSink) {
    tracing::debug!("counter initialization running");
    if let Some(Some(count)) = swallow(sink, READ_FAILED, load(store)) {
        cell.set(count);
    }
}

/// Adds one to the counter and persists the result.
///
/// The cell is updated even when the write fails.
pub fn increment(cell: &mut StateCell<Count>, store: &mut dyn KeyValueStore, sink: &dyn DiagnosticSink) {
    let next = cell.get().incremented();
    cell.set(next);
    swallow(sink, COUNT_WRITE_FAILED, persist(store, next));
}

/// Sets the counter back to zero and persists `"0"`.
pub fn reset(cell: &mut StateCell<Count>, store: &mut dyn KeyValueStore, sink: &dyn DiagnosticSink) {
    let zero = Count::default();
    cell.set(zero);
    swallow(sink, COUNT_WRITE_FAILED, persist(store, zero));
}
