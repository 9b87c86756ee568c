// Session snapshot
// What survives between two CLI invocations

use serde::{Deserialize, Serialize};

use crate::value_objects::EventId;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSnapshot {
    pub token: Option<String>,
    pub pending_event_id: Option<EventId>,
}
