use fastrace::trace;
use roster_types::{Record, RecordId};
use tracing::debug;

use crate::auth::Authenticatable;

/// Ordered, append-only collection of records.
///
/// Records are kept in insertion order and duplicates are allowed. There is no
/// removal and no capacity limit; `MAX_RECORDS` is informational only.
#[derive(Debug, Clone, Default)]
pub struct RecordService {
    records: Vec<Record>,
}

impl RecordService {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut service = Self::new();
        service.extend(records);
        service
    }

    pub fn add_record(&mut self, record: Record) {
        debug!("Adding record {:?} at position {}", record.name, self.records.len());
        self.records.push(record);
    }

    /// Returns the first record whose name matches exactly, in insertion order.
    ///
    /// The result borrows from the service, so no record can be added while it
    /// is held. Use `.cloned()` for a detached copy.
    #[trace]
    pub fn get_record(&self, name: &str) -> Option<&Record> {
        let found = self.records.iter().find(|r| r.name == name);
        debug!("Lookup {:?}: {}", name, if found.is_some() { "hit" } else { "miss" });
        found
    }

    #[trace]
    pub fn position(&self, name: &str) -> Option<RecordId> {
        self.records
            .iter()
            .position(|r| r.name == name)
            .map(|i| i as RecordId)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Authenticatable for RecordService {
    /// Presence check: any non-empty token is accepted.
    fn authenticate(&self, token: &str) -> bool {
        let ok = !token.is_empty();
        debug!("Authenticate token of length {}: {}", token.len(), ok);
        ok
    }
}

impl Extend<Record> for RecordService {
    fn extend<T: IntoIterator<Item = Record>>(&mut self, iter: T) {
        for record in iter {
            self.add_record(record);
        }
    }
}

impl FromIterator<Record> for RecordService {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        Self::from_records(iter)
    }
}

impl<'a> IntoIterator for &'a RecordService {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
