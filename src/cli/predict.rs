//! Non-interactive predict command
//!
//! Builds the record from parsed flags, loads the classifier, and renders
//! the result in the selected format. The model is loaded per invocation;
//! when the artifact is unavailable the command fails before any inference
//! is attempted.

use anyhow::{Context, Result};
use std::path::Path;

use crate::classifier::TransportClassifier;
use crate::passenger::{PassengerForm, PassengerRecord};
use crate::report::{self, OutputFormat};

pub fn run(
    form: &PassengerForm,
    model_path: &Path,
    format: &str,
    output: Option<&Path>,
) -> Result<()> {
    let format: OutputFormat = format.parse()?;

    let record = PassengerRecord::from_form(form);
    tracing::debug!(?record, "assembled prediction request");

    let classifier = TransportClassifier::load(model_path)?;
    let prediction = classifier.predict(&record);

    let rendered = match format {
        OutputFormat::Text => report::render_text(&record, &prediction),
        OutputFormat::Json => report::render_json(&record, &prediction)?,
        OutputFormat::Html => report::render_html(&record, &prediction),
    };

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("writing report to {}", path.display()))?;
            eprintln!("Report written to {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
