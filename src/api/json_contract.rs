use serde::{Deserialize, Serialize};

use crate::error::{CarouselError, CarouselResult};

use super::CarouselSnapshot;

pub const CAROUSEL_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: CarouselSnapshot,
}

impl CarouselSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> CarouselResult<String> {
        let payload = CarouselSnapshotJsonContractV1 {
            schema_version: CAROUSEL_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            CarouselError::InvalidInput(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Parses either a bare snapshot or a versioned v1 contract payload.
    pub fn from_json_compat_str(input: &str) -> CarouselResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<CarouselSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: CarouselSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            CarouselError::InvalidInput(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != CAROUSEL_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(CarouselError::InvalidInput(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
