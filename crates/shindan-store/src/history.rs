//! Evaluation history store
//!
//! Stores past charging evaluations in a JSON file on disk, keyed by a hash
//! of the measurement input so re-running the same measurement updates the
//! existing entry instead of growing the file.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use shindan_domain::model::ChargingMeasurement;
use shindan_domain::service::VoltageStatus;
use shindan_types::Result;

/// A stored charging evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRecord {
    /// Unique identifier
    pub id: String,
    /// Hash of the measurement input
    pub input_hash: String,
    /// The measurement as evaluated
    pub measurement: ChargingMeasurement,
    /// Resulting status
    pub status: VoltageStatus,
    /// When the evaluation ran
    pub recorded_at: DateTime<Utc>,
    /// Notes/memo
    #[serde(default)]
    pub notes: Option<String>,
}

/// Persistent store for evaluation records
pub struct EvaluationStore {
    store_path: PathBuf,
    entries: HashMap<String, EvaluationRecord>,
}

impl EvaluationStore {
    /// Create or load an evaluation store
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("evaluations.json");

        let entries = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).unwrap_or_default()
        } else {
            HashMap::new()
        };

        Ok(Self { store_path, entries })
    }

    /// Hash the measurement input for use as a store key
    pub fn hash_measurement(measurement: &ChargingMeasurement) -> String {
        let mut hasher = Sha256::new();
        let voltage = match measurement.voltage {
            Some(v) if v.is_finite() => format!("{:.4}", v),
            _ => "none".to_string(),
        };
        hasher.update(voltage.as_bytes());
        hasher.update([
            measurement.headlights_on as u8,
            measurement.blower_on as u8,
            measurement.rear_defroster_on as u8,
        ]);
        format!("{:x}", hasher.finalize())
    }

    /// Save store to disk
    fn save(&self) -> Result<()> {
        let file = File::create(&self.store_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.entries)?;
        Ok(())
    }

    /// Record an evaluation, replacing any prior record of the same input
    pub fn add_evaluation(
        &mut self,
        measurement: ChargingMeasurement,
        status: VoltageStatus,
        notes: Option<String>,
    ) -> Result<String> {
        let hash = Self::hash_measurement(&measurement);
        let record = EvaluationRecord {
            id: uuid::Uuid::new_v4().to_string(),
            input_hash: hash.clone(),
            measurement,
            status,
            recorded_at: Utc::now(),
            notes,
        };
        self.entries.insert(hash.clone(), record);
        self.save()?;
        Ok(hash)
    }

    /// Get a record by input hash
    pub fn get_by_hash(&self, hash: &str) -> Option<&EvaluationRecord> {
        self.entries.get(hash)
    }

    /// All records, newest first
    pub fn all_entries(&self) -> Vec<&EvaluationRecord> {
        let mut entries: Vec<_> = self.entries.values().collect();
        entries.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        entries
    }

    /// Total record count
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurement(voltage: f64) -> ChargingMeasurement {
        ChargingMeasurement::new(Some(voltage)).with_full_load()
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let hash;
        {
            let mut store = EvaluationStore::open(dir.path().to_path_buf()).unwrap();
            hash = store
                .add_evaluation(measurement(14.0), VoltageStatus::Ok, None)
                .unwrap();
            assert_eq!(store.count(), 1);
        }
        let store = EvaluationStore::open(dir.path().to_path_buf()).unwrap();
        assert_eq!(store.count(), 1);
        let record = store.get_by_hash(&hash).unwrap();
        assert_eq!(record.status, VoltageStatus::Ok);
    }

    #[test]
    fn test_same_input_replaces_entry() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = EvaluationStore::open(dir.path().to_path_buf()).unwrap();
        store
            .add_evaluation(measurement(14.0), VoltageStatus::Ok, None)
            .unwrap();
        store
            .add_evaluation(measurement(14.0), VoltageStatus::Ok, Some("retest".to_string()))
            .unwrap();
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_distinct_inputs_get_distinct_hashes() {
        let a = EvaluationStore::hash_measurement(&measurement(14.0));
        let b = EvaluationStore::hash_measurement(&measurement(12.5));
        let c = EvaluationStore::hash_measurement(&ChargingMeasurement::new(Some(14.0)));
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_entries_sorted_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = EvaluationStore::open(dir.path().to_path_buf()).unwrap();
        store
            .add_evaluation(measurement(14.0), VoltageStatus::Ok, None)
            .unwrap();
        store
            .add_evaluation(measurement(12.5), VoltageStatus::Low, None)
            .unwrap();
        let entries = store.all_entries();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].recorded_at >= entries[1].recorded_at);
    }
}
