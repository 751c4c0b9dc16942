//! Inference adapter around the pre-trained classifier artifact
//!
//! The artifact is opaque: a gradient boosted decision tree model trained
//! and serialized elsewhere (gbdt-rs native JSON). This module loads it
//! from disk and runs single-record probability inference; it never
//! reimplements the model internals.

mod model;

pub use model::{ModelError, TransportClassifier, TransportPrediction, DEFAULT_MODEL_PATH};
