use serde::{Deserialize, Serialize};

/// Raw field values as captured from the upstream page, before translation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawAtis {
    pub time: Option<String>,
    pub information: Option<String>,
    pub runway: Option<String>,
    pub circuit: Option<String>,
    pub qnh: Option<String>,
    pub qfe: Option<String>,
}

/// Spoken-word ATIS fields, built fresh per request and discarded after
/// the response is rendered. A field is `None` when the upstream page did
/// not contain it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtisSnapshot {
    pub time: Option<String>,
    pub information: Option<String>,
    pub runway: Option<String>,
    pub circuit: Option<String>,
    pub qnh: Option<String>,
    pub qfe: Option<String>,
}

impl AtisSnapshot {
    pub fn is_empty(&self) -> bool {
        self.time.is_none()
            && self.information.is_none()
            && self.runway.is_none()
            && self.circuit.is_none()
            && self.qnh.is_none()
            && self.qfe.is_none()
    }
}
