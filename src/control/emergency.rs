use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A fixed emergency response. Selection is a static lookup by severity,
/// entirely separate from the trajectory core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmergencyProtocol {
    pub name: &'static str,
    pub procedure: &'static str,
}

const HOLD_AND_MONITOR: EmergencyProtocol = EmergencyProtocol {
    name: "Hold and monitor",
    procedure: "Suspend non-essential operations and increase telemetry sampling.",
};

const ABORT_TO_SAFE_STATE: EmergencyProtocol = EmergencyProtocol {
    name: "Abort to safe state",
    procedure: "Cut thrust, secure propellant lines and prepare recovery systems.",
};

const FULL_EVACUATION: EmergencyProtocol = EmergencyProtocol {
    name: "Full evacuation",
    procedure: "Trigger flight termination and evacuate the launch complex.",
};

/// Selects the protocol for a severity level.
///
/// Severity 4 ("critical") appears in request models but has never had a
/// protocol of its own; it falls through to the same response as 3. That
/// behavior is kept as-is.
pub fn protocol_for(severity: u8) -> &'static EmergencyProtocol {
    match severity {
        1 => &HOLD_AND_MONITOR,
        2 => &ABORT_TO_SAFE_STATE,
        _ => &FULL_EVACUATION,
    }
}

/// Confirmation produced by activating a protocol, suitable for the event log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyNotice {
    pub severity: u8,
    pub protocol: String,
    pub confirmation: String,
    pub resolved: bool,
    pub issued_at: DateTime<Utc>,
}

impl EmergencyProtocol {
    pub fn activate(&self, severity: u8) -> EmergencyNotice {
        EmergencyNotice {
            severity,
            protocol: self.name.to_string(),
            confirmation: format!("Protocol '{}' activated: {}", self.name, self.procedure),
            resolved: true,
            issued_at: Utc::now(),
        }
    }
}
