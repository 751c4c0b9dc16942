//! About command: describes the classifier behind the predictions

use anyhow::Result;
use console::style;

/// Model description shown by `transported about` and the TUI's About page.
pub const ABOUT_TEXT: &str = "\
This application uses a Random Forest classifier to predict whether a
passenger will be transported.

Model features:
  - Passenger demographic information
  - Travel details
  - Cabin information
  - Spending habits

Model performance:
  - Accuracy: ~80-85% (approximate)
  - Trained on a dataset of passenger transportation records.";

pub fn run() -> Result<()> {
    println!("{}", style("About the Model").cyan().bold());
    println!();
    println!("{ABOUT_TEXT}");
    Ok(())
}
