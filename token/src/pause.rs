//! Global pause switch

use arigatai_common::{
    crypto::Address,
    event::{Event, EventSink},
};
use log::debug;
use serde::{Deserialize, Serialize};

/// Operational flag: paused blocks transfers, active permits them
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PauseSwitch {
    paused: bool,
}

impl PauseSwitch {
    pub fn new() -> Self {
        Self { paused: false }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Flip the flag without any check, recording who triggered it
    pub(crate) fn set_paused(&mut self, paused: bool, account: Address, sink: &mut impl EventSink) {
        self.paused = paused;

        if log::log_enabled!(log::Level::Debug) {
            debug!(
                "{} by {}",
                if paused { "paused" } else { "unpaused" },
                account
            );
        }

        let event = if paused {
            Event::Paused { account }
        } else {
            Event::Unpaused { account }
        };
        sink.emit(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_active() {
        assert!(!PauseSwitch::new().is_paused());
        assert!(!PauseSwitch::default().is_paused());
    }

    #[test]
    fn test_flip_emits_matching_event() {
        let account = Address::new([3u8; 32]);
        let mut switch = PauseSwitch::new();
        let mut events: Vec<Event> = Vec::new();

        switch.set_paused(true, account, &mut events);
        assert!(switch.is_paused());

        switch.set_paused(false, account, &mut events);
        assert!(!switch.is_paused());

        assert_eq!(
            events,
            vec![Event::Paused { account }, Event::Unpaused { account }]
        );
    }
}
