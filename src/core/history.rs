//! Bounded conversion history.
//!
//! The history keeps the most recent conversions first and never grows past
//! its capacity: inserting into a full buffer evicts the oldest record.
//! Observers registered through [`HistoryBuffer::subscribe`] are called
//! synchronously after every mutation with the post-mutation records.

use crate::core::ConversionRecord;
use std::fmt;

/// Default number of records kept.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Handle returned by [`HistoryBuffer::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&[ConversionRecord])>;

/// Most-recent-first, fixed-capacity list of conversion records.
///
/// # Examples
///
/// ```
/// use tempconv::core::{ConversionRecord, HistoryBuffer, TemperatureUnit};
///
/// let mut history = HistoryBuffer::new();
/// history.add_record(ConversionRecord::new(
///     "0".to_string(),
///     TemperatureUnit::Celsius,
///     TemperatureUnit::Kelvin,
///     "273.15".to_string(),
/// ));
/// assert_eq!(history.len(), 1);
/// assert_eq!(history.records()[0].result(), "273.15");
/// ```
pub struct HistoryBuffer {
    records: Vec<ConversionRecord>,
    capacity: usize,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl HistoryBuffer {
    /// Creates an empty history holding up to [`DEFAULT_HISTORY_CAPACITY`] records.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Creates an empty history with a custom capacity.
    ///
    /// A capacity of zero is raised to one so a saved record is always visible.
    /// Storage grows with the records actually saved, not with the capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: Vec::new(),
            capacity,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Inserts a record at the front, dropping the oldest records beyond capacity.
    pub fn add_record(&mut self, record: ConversionRecord) {
        self.records.insert(0, record);
        if self.records.len() > self.capacity {
            let evicted = self.records.len() - self.capacity;
            self.records.truncate(self.capacity);
            tracing::debug!(evicted, capacity = self.capacity, "trimmed history");
        }
        self.notify();
    }

    /// Removes every record.
    pub fn clear_history(&mut self) {
        if self.records.is_empty() {
            return;
        }
        tracing::debug!(cleared = self.records.len(), "cleared history");
        self.records.clear();
        self.notify();
    }

    /// Records, newest first.
    #[must_use]
    pub fn records(&self) -> &[ConversionRecord] {
        &self.records
    }

    /// Record at `index` (0 is the newest).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ConversionRecord> {
        self.records.get(index)
    }

    /// The most recently added record.
    #[must_use]
    pub fn latest(&self) -> Option<&ConversionRecord> {
        self.records.first()
    }

    /// Number of records held.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the history is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Maximum number of records held.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Registers a callback invoked after each mutation.
    ///
    /// Callbacks run in subscription order, before the mutating call returns.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&[ConversionRecord]) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes a callback. Returns `false` if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    fn notify(&mut self) {
        let records = &self.records;
        for (_, observer) in &mut self.observers {
            observer(records);
        }
    }
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HistoryBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryBuffer")
            .field("records", &self.records)
            .field("capacity", &self.capacity)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TemperatureUnit;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn record(input: &str) -> ConversionRecord {
        ConversionRecord::new(
            input.to_string(),
            TemperatureUnit::Celsius,
            TemperatureUnit::Fahrenheit,
            "0.00".to_string(),
        )
    }

    #[test]
    fn test_new_is_empty() {
        let history = HistoryBuffer::new();
        assert!(history.is_empty());
        assert_eq!(history.capacity(), DEFAULT_HISTORY_CAPACITY);
        assert!(history.latest().is_none());
    }

    #[test]
    fn test_add_inserts_at_front() {
        let mut history = HistoryBuffer::new();
        history.add_record(record("1"));
        history.add_record(record("2"));
        assert_eq!(history.len(), 2);
        assert_eq!(history.records()[0].input_value(), "2");
        assert_eq!(history.records()[1].input_value(), "1");
        assert_eq!(history.latest().map(ConversionRecord::input_value), Some("2"));
    }

    #[test]
    fn test_eleven_inserts_keep_ten() {
        let mut history = HistoryBuffer::new();
        for i in 1..=11 {
            history.add_record(record(&i.to_string()));
        }
        assert_eq!(history.len(), 10);
        assert_eq!(history.records()[0].input_value(), "11");
        assert_eq!(history.records()[9].input_value(), "2");
        assert!(history.records().iter().all(|r| r.input_value() != "1"));
    }

    #[test]
    fn test_custom_capacity() {
        let mut history = HistoryBuffer::with_capacity(3);
        for i in 0..5 {
            history.add_record(record(&i.to_string()));
        }
        let inputs: Vec<_> = history.records().iter().map(|r| r.input_value()).collect();
        assert_eq!(inputs, vec!["4", "3", "2"]);
    }

    #[test]
    fn test_zero_capacity_raised_to_one() {
        let mut history = HistoryBuffer::with_capacity(0);
        assert_eq!(history.capacity(), 1);
        history.add_record(record("a"));
        history.add_record(record("b"));
        assert_eq!(history.len(), 1);
        assert_eq!(history.get(0).map(ConversionRecord::input_value), Some("b"));
    }

    #[test]
    fn test_huge_capacity_allocates_lazily() {
        let mut history = HistoryBuffer::with_capacity(usize::MAX);
        assert_eq!(history.capacity(), usize::MAX);
        history.add_record(record("a"));
        history.add_record(record("b"));
        assert_eq!(history.len(), 2);
        assert_eq!(history.latest().map(ConversionRecord::input_value), Some("b"));
    }

    #[test]
    fn test_clear() {
        let mut history = HistoryBuffer::new();
        history.add_record(record("1"));
        history.add_record(record("2"));
        history.clear_history();
        assert_eq!(history.len(), 0);
        history.clear_history();
        assert!(history.is_empty());
    }

    #[test]
    fn test_observer_sees_post_mutation_state() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut history = HistoryBuffer::with_capacity(2);
        history.subscribe(move |records| {
            let front = records.first().map(|r| r.input_value().to_string());
            sink.borrow_mut().push((records.len(), front));
        });

        history.add_record(record("a"));
        history.add_record(record("b"));
        history.add_record(record("c"));
        history.clear_history();

        assert_eq!(
            *seen.borrow(),
            vec![
                (1, Some("a".to_string())),
                (2, Some("b".to_string())),
                (2, Some("c".to_string())),
                (0, None),
            ]
        );
    }

    #[test]
    fn test_clear_on_empty_does_not_notify() {
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let mut history = HistoryBuffer::new();
        history.subscribe(move |_| *counter.borrow_mut() += 1);
        history.clear_history();
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_unsubscribe() {
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let mut history = HistoryBuffer::new();
        let id = history.subscribe(move |_| *counter.borrow_mut() += 1);

        history.add_record(record("1"));
        assert!(history.unsubscribe(id));
        assert!(!history.unsubscribe(id));
        history.add_record(record("2"));

        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_debug_hides_observers() {
        let mut history = HistoryBuffer::new();
        history.subscribe(|_| {});
        let debug = format!("{history:?}");
        assert!(debug.contains("observers: 1"));
    }
}
