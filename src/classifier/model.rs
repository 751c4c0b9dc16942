//! GBDT model wrapper for transportation prediction
//!
//! Wraps `gbdt::gradient_boost::GBDT` behind the two operations the app
//! needs: load the serialized artifact, and estimate the positive-class
//! probability for one passenger record.
//!
//! The artifact is re-read from disk on every prediction action; there is
//! no cross-action cache. A missing or corrupt artifact surfaces as
//! [`ModelError::Unavailable`], and since `predict` only exists on a
//! successfully loaded classifier, inference cannot be reached when the
//! load fails.
//!
//! Note: the gbdt crate works in `f32` (`ValueType`); probabilities are
//! widened to `f64` at this boundary.

use std::path::{Path, PathBuf};

use gbdt::decision_tree::Data;
use gbdt::gradient_boost::GBDT;
use thiserror::Error;

use crate::passenger::PassengerRecord;

/// Well-known artifact location, relative to the working directory.
pub const DEFAULT_MODEL_PATH: &str = "models/transport_model.json";

/// Errors from the inference adapter
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("model artifact unavailable at {path}: {reason}")]
    Unavailable { path: PathBuf, reason: String },
}

/// Result of running one record through the classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransportPrediction {
    /// Probability that the passenger is transported (0.0..=1.0).
    pub probability: f64,

    /// Hard verdict: `true` when `probability >= 0.5`.
    pub is_transported: bool,
}

impl TransportPrediction {
    /// Build a prediction from a raw positive-class probability.
    pub(crate) fn from_probability(p: f64) -> Self {
        let probability = p.clamp(0.0, 1.0);
        Self {
            probability,
            is_transported: probability >= 0.5,
        }
    }
}

/// Thin wrapper around `gbdt::gradient_boost::GBDT` providing a
/// record-aware prediction interface.
pub struct TransportClassifier {
    model: GBDT,
}

impl TransportClassifier {
    /// Load the artifact (gbdt-rs native JSON format) from disk.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let path_str = path.to_str().ok_or_else(|| ModelError::Unavailable {
            path: path.to_path_buf(),
            reason: "invalid UTF-8 in model path".to_string(),
        })?;
        let model = GBDT::load_model(path_str).map_err(|e| ModelError::Unavailable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), "loaded classifier artifact");
        Ok(Self { model })
    }

    /// Estimate the transportation probability for a single record.
    ///
    /// Deterministic for a fixed artifact and record. The record is framed
    /// as a one-row batch with the feature layout described in
    /// [`crate::passenger::PassengerRecord::features`].
    pub fn predict(&self, record: &PassengerRecord) -> TransportPrediction {
        let data = vec![Data::new_test_data(record.features().to_vec(), None)];
        let preds = self.model.predict(&data);
        let p = preds.first().copied().unwrap_or(0.5_f32) as f64;
        TransportPrediction::from_probability(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::passenger::{PassengerForm, NUM_FEATURES};
    use gbdt::config::Config;

    /// Train a tiny model: cryosleep passengers transported, big spenders
    /// not. Enough signal for a clean split with a handful of trees.
    fn train_tiny_model() -> GBDT {
        let mut samples = Vec::new();
        for i in 0..30 {
            let mut v = vec![0.0_f32; NUM_FEATURES];
            v[0] = 20.0 + (i % 40) as f32; // age
            v[1] = 1.0; // cryosleep
            v[6] = (i * 37 % 2000) as f32; // cabin number
            samples.push(Data::new_training_data(v, 1.0, 1.0, None));
        }
        for i in 0..30 {
            let mut v = vec![0.0_f32; NUM_FEATURES];
            v[0] = 20.0 + (i % 40) as f32;
            v[8] = 500.0 + i as f32 * 10.0; // room service
            v[11] = 300.0; // spa
            samples.push(Data::new_training_data(v, 1.0, -1.0, None));
        }

        let mut cfg = Config::new();
        cfg.set_feature_size(NUM_FEATURES);
        cfg.set_max_depth(3);
        cfg.set_iterations(10);
        cfg.set_shrinkage(0.3);
        cfg.set_loss("LogLikelyhood");
        cfg.set_debug(false);
        cfg.set_training_optimization_level(2);
        cfg.set_min_leaf_size(1);

        let mut model = GBDT::new(&cfg);
        model.fit(&mut samples);
        model
    }

    #[test]
    fn prediction_thresholds_at_half() {
        let pred = TransportPrediction::from_probability(0.85);
        assert!(pred.is_transported);
        assert!((pred.probability - 0.85).abs() < f64::EPSILON);

        let pred_low = TransportPrediction::from_probability(0.3);
        assert!(!pred_low.is_transported);

        // Boundary: exactly 0.5 counts as transported.
        let pred_edge = TransportPrediction::from_probability(0.5);
        assert!(pred_edge.is_transported);
    }

    #[test]
    fn prediction_clamps_out_of_range_probabilities() {
        assert_eq!(TransportPrediction::from_probability(1.3).probability, 1.0);
        assert_eq!(TransportPrediction::from_probability(-0.2).probability, 0.0);
    }

    #[test]
    fn load_missing_artifact_is_unavailable() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("transport_model.json");

        let err = TransportClassifier::load(&path).err().expect("load should fail");
        let ModelError::Unavailable { path: err_path, .. } = err;
        assert_eq!(err_path, path);
    }

    #[test]
    fn load_corrupt_artifact_is_unavailable() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("transport_model.json");
        std::fs::write(&path, "not a serialized model").unwrap();

        assert!(matches!(
            TransportClassifier::load(&path),
            Err(ModelError::Unavailable { .. })
        ));
    }

    #[test]
    fn save_load_predict_roundtrip() {
        let model = train_tiny_model();

        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("transport_model.json");
        model
            .save_model(path.to_str().unwrap())
            .expect("save should succeed");

        let classifier = TransportClassifier::load(&path).expect("load should succeed");

        let form = PassengerForm {
            cryo_sleep: true,
            ..Default::default()
        };
        let record = crate::passenger::PassengerRecord::from_form(&form);

        let pred = classifier.predict(&record);
        assert!(
            (0.0..=1.0).contains(&pred.probability),
            "probability should be in [0, 1], got {}",
            pred.probability,
        );
        assert_eq!(pred.is_transported, pred.probability >= 0.5);
    }

    #[test]
    fn predict_is_deterministic_for_identical_records() {
        let classifier = TransportClassifier {
            model: train_tiny_model(),
        };

        let form = PassengerForm {
            room_service: 800,
            spa: 300,
            ..Default::default()
        };
        let record = crate::passenger::PassengerRecord::from_form(&form);

        let first = classifier.predict(&record);
        let second = classifier.predict(&record);
        assert_eq!(first.probability, second.probability);
        assert_eq!(first.is_transported, second.is_transported);
    }
}
