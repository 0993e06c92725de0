use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;

use crate::errors::SimulationError;
use crate::trajectory_system::dynamics::RocketParameters;
use crate::trajectory_system::events::{find_apogee_sample, find_burnout_sample};
use crate::trajectory_system::integrator::TrajectorySample;

/// Parallel trajectory columns in the persisted wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryData {
    #[serde(rename = "tempo")]
    pub time_s: Vec<f64>,
    #[serde(rename = "altitude")]
    pub altitude_m: Vec<f64>,
    #[serde(rename = "velocidade")]
    pub velocity_mps: Vec<f64>,
}

impl TrajectoryData {
    pub fn from_series(series: &[TrajectorySample]) -> Self {
        TrajectoryData {
            time_s: series.iter().map(|s| s.time_s).collect(),
            altitude_m: series.iter().map(|s| s.altitude_m).collect(),
            velocity_mps: series.iter().map(|s| s.velocity_mps).collect(),
        }
    }

    /// Rebuilds the sample sequence from the columns. Truncates to the
    /// shortest column if a hand-edited document is ragged.
    pub fn samples(&self) -> Vec<TrajectorySample> {
        self.time_s
            .iter()
            .zip(&self.altitude_m)
            .zip(&self.velocity_mps)
            .map(|((&time_s, &altitude_m), &velocity_mps)| TrajectorySample {
                time_s,
                altitude_m,
                velocity_mps,
            })
            .collect()
    }
}

/// The structured document a finished run is persisted as. The serialized
/// field names are the wire contract; the Rust names stay idiomatic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRecord {
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "resultado")]
    pub outcome: String,
    #[serde(rename = "dataExecucao")]
    pub executed_at: DateTime<Utc>,
    #[serde(rename = "dados")]
    pub data: TrajectoryData,
}

impl SimulationRecord {
    pub fn from_series(
        description: &str,
        kind: &str,
        outcome: &str,
        series: &[TrajectorySample],
    ) -> Self {
        SimulationRecord {
            description: description.to_string(),
            kind: kind.to_string(),
            outcome: outcome.to_string(),
            executed_at: Utc::now(),
            data: TrajectoryData::from_series(series),
        }
    }

    /// JSON with 4-space indentation, for human-readable documents.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
        self.serialize(&mut serializer)?;
        Ok(String::from_utf8(buffer).expect("serde_json emits valid UTF-8"))
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

/// Derived metrics of a finished run, in reporting units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub burn_time_s: f64,
    pub burnout_altitude_km: f64,
    pub burnout_velocity_kms: f64,
    pub apogee_km: f64,
    pub apogee_time_s: f64,
}

impl SimulationSummary {
    pub fn from_series(
        params: &RocketParameters,
        series: &[TrajectorySample],
    ) -> Result<Self, SimulationError> {
        let burnout = find_burnout_sample(series, params.burn_time_s)?;
        let apogee = find_apogee_sample(series)?;

        Ok(SimulationSummary {
            burn_time_s: params.burn_time_s,
            burnout_altitude_km: burnout.altitude_m / 1000.0,
            burnout_velocity_kms: burnout.velocity_mps / 1000.0,
            apogee_km: apogee.altitude_m / 1000.0,
            apogee_time_s: apogee.time_s,
        })
    }
}

impl fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Burn time: {} s", self.burn_time_s)?;
        writeln!(f, "Altitude at burnout: {:.2} km", self.burnout_altitude_km)?;
        writeln!(f, "Velocity at burnout: {:.2} km/s", self.burnout_velocity_kms)?;
        writeln!(f, "Apogee: {:.2} km", self.apogee_km)?;
        write!(f, "Time to apogee: {:.2} s", self.apogee_time_s)
    }
}
