//! Token Events
//!
//! Observable, append-only records of every successful state change.
//! Events are the only output an external indexer can rely on: tests and
//! clients assert on emitted records rather than on internal fields.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::crypto::Address;

/// Event emitted by a successful mutation
///
/// Zero addresses stand in for "no principal" (mint source, burn target,
/// renounced owner).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum Event {
    OwnershipTransferred {
        previous_owner: Address,
        new_owner: Address,
    },
    Paused {
        account: Address,
    },
    Unpaused {
        account: Address,
    },
    Transfer {
        from: Address,
        to: Address,
        value: u64,
    },
    Approval {
        owner: Address,
        spender: Address,
        value: u64,
    },
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Self::OwnershipTransferred { .. } => "OwnershipTransferred",
            Self::Paused { .. } => "Paused",
            Self::Unpaused { .. } => "Unpaused",
            Self::Transfer { .. } => "Transfer",
            Self::Approval { .. } => "Approval",
        }
    }
}

/// Event as stored in the log, with its position
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Position in the log (0-based, strictly increasing)
    pub log_index: u64,
    pub event: Event,
}

/// Output channel for events
pub trait EventSink {
    fn emit(&mut self, event: Event);
}

// Staging buffer: events collected during a call before commit
impl EventSink for Vec<Event> {
    fn emit(&mut self, event: Event) {
        self.push(event);
    }
}

/// Append-only event log
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    records: Vec<EventRecord>,
}

impl EventLog {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&Event> {
        self.records.last().map(|record| &record.event)
    }

    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.records.iter().map(|record| &record.event)
    }

    /// All records after the given log index (exclusive)
    pub fn since(&self, log_index: u64) -> &[EventRecord] {
        let start = usize::try_from(log_index.saturating_add(1))
            .unwrap_or(usize::MAX)
            .min(self.records.len());
        &self.records[start..]
    }

    /// All events with the given name, in emission order
    pub fn named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Event> + 'a {
        self.events().filter(move |event| event.name() == name)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.records)
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: Event) {
        let log_index = self.records.len() as u64;
        if log::log_enabled!(log::Level::Trace) {
            trace!("event #{} {:?}", log_index, event);
        }
        self.records.push(EventRecord { log_index, event });
    }
}
