use std::collections::HashMap;

use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::control::emergency::EmergencyNotice;
use crate::telemetry_system::record::SimulationRecord;

const ID_LENGTH: usize = 16;

/// Anything the service layer keeps in the event log: finished simulation
/// runs and emergency activation notices.
#[derive(Debug, Clone, PartialEq)]
pub enum StoredRecord {
    Simulation(SimulationRecord),
    Emergency(EmergencyNotice),
}

/// In-memory event log keyed by generated string identifiers. Lives for the
/// process only; the trajectory core never touches it.
#[derive(Debug, Default)]
pub struct EventLog {
    records: HashMap<String, StoredRecord>,
}

impl EventLog {
    pub fn new() -> Self {
        EventLog {
            records: HashMap::new(),
        }
    }

    /// Stores a record under a fresh identifier and returns it.
    pub fn put(&mut self, record: StoredRecord) -> String {
        let mut id = generate_id();
        while self.records.contains_key(&id) {
            id = generate_id();
        }
        self.records.insert(id.clone(), record);
        id
    }

    pub fn get(&self, id: &str) -> Option<&StoredRecord> {
        self.records.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn generate_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ID_LENGTH)
        .map(char::from)
        .collect()
}
