use serde::{Deserialize, Serialize};

use offerwiz_core::SessionId;

use crate::event::Event;

/// Envelope for an event, carrying session + ordering metadata.
///
/// `sequence_number` is the aggregate version right after the change was
/// applied, so a subscriber holding a snapshot can tell whether it is stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope<E> {
    session_id: SessionId,

    /// Monotonically increasing position in the session's change stream.
    sequence_number: u64,

    payload: E,
}

impl<E> EventEnvelope<E> {
    pub fn new(session_id: SessionId, sequence_number: u64, payload: E) -> Self {
        Self {
            session_id,
            sequence_number,
            payload,
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }

    pub fn into_payload(self) -> E {
        self.payload
    }
}

impl<E: Event> EventEnvelope<E> {
    pub fn event_type(&self) -> &'static str {
        self.payload.event_type()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Renamed;

    impl Event for Renamed {
        fn event_type(&self) -> &'static str {
            "test.renamed"
        }

        fn version(&self) -> u32 {
            1
        }
    }

    #[test]
    fn envelope_carries_session_and_sequence() {
        let session = SessionId::new();
        let envelope = EventEnvelope::new(session, 7, Renamed);
        assert_eq!(envelope.session_id(), session);
        assert_eq!(envelope.sequence_number(), 7);
        assert_eq!(envelope.event_type(), "test.renamed");
        assert_eq!(envelope.into_payload(), Renamed);
    }
}
