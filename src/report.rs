//! Output rendering for prediction results
//!
//! Shared by the interactive form and the `predict` subcommand:
//! - `text` - terminal output with colors
//! - `json` - machine-readable JSON
//! - `html` - embeddable fragment with an inline-styled probability meter
//!
//! The meter fill is always `probability * 100` percent, colored with the
//! success color at or above the 0.5 threshold and the failure color below.

use console::style;
use serde_json::json;
use std::str::FromStr;

use crate::classifier::TransportPrediction;
use crate::passenger::PassengerRecord;

/// Meter color when the verdict is "likely transported".
pub const SUCCESS_COLOR: &str = "#36b37e";
/// Meter color when the verdict is "not likely transported".
pub const FAILURE_COLOR: &str = "#ff4b4b";

/// Width of the text meter track, in cells.
const METER_CELLS: usize = 50;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Html,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "html" => Ok(OutputFormat::Html),
            _ => Err(anyhow::anyhow!(
                "Unknown format '{}'. Valid formats: text, json, html",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Html => write!(f, "html"),
        }
    }
}

/// Human-readable verdict, thresholded at 0.5 (0.5 counts as likely).
pub fn verdict(prediction: &TransportPrediction) -> &'static str {
    if prediction.is_transported {
        "likely transported"
    } else {
        "not likely transported"
    }
}

/// Meter fill percentage: probability × 100.
pub fn bar_width_pct(prediction: &TransportPrediction) -> f64 {
    prediction.probability * 100.0
}

/// Two-decimal probability label.
pub fn probability_label(prediction: &TransportPrediction) -> String {
    format!("{:.2}", prediction.probability)
}

/// Record echo as (field, value) rows, in dataset column order.
pub fn record_rows(record: &PassengerRecord) -> Vec<(&'static str, String)> {
    vec![
        ("PassengerId", record.passenger_id.clone()),
        ("HomePlanet", record.home_planet.to_string()),
        ("CryoSleep", yes_no(record.cryo_sleep)),
        ("Cabin", record.cabin.to_string()),
        ("Destination", record.destination.to_string()),
        ("Age", record.age.to_string()),
        ("VIP", yes_no(record.vip)),
        ("RoomService", record.room_service.to_string()),
        ("FoodCourt", record.food_court.to_string()),
        ("ShoppingMall", record.shopping_mall.to_string()),
        ("Spa", record.spa.to_string()),
        ("VRDeck", record.vr_deck.to_string()),
        ("Name", record.name.clone()),
    ]
}

fn yes_no(v: bool) -> String {
    if v { "Yes" } else { "No" }.to_string()
}

/// Terminal rendering: record table, proportional meter, label, verdict.
pub fn render_text(record: &PassengerRecord, prediction: &TransportPrediction) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", style("Input Data").bold()));
    for (field, value) in record_rows(record) {
        out.push_str(&format!("  {field:<14} {value}\n"));
    }

    out.push_str(&format!("\n{}\n", style("Prediction Probability").bold()));
    out.push_str(&format!(
        "  {}  {}\n",
        text_meter(prediction),
        probability_label(prediction)
    ));

    let line = format!(
        "This passenger is {} (probability {})",
        verdict(prediction),
        probability_label(prediction)
    );
    let banner = if prediction.is_transported {
        style(line).green().bold()
    } else {
        style(line).red().bold()
    };
    out.push_str(&format!("\n{banner}\n"));

    out
}

/// Fixed-width track filled proportionally to the probability.
fn text_meter(prediction: &TransportPrediction) -> String {
    let filled = ((prediction.probability * METER_CELLS as f64).round() as usize).min(METER_CELLS);
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(METER_CELLS - filled));
    let bar = if prediction.is_transported {
        style(bar).green()
    } else {
        style(bar).red()
    };
    format!("[{bar}]")
}

/// JSON rendering: serialized record plus probability and verdict.
pub fn render_json(
    record: &PassengerRecord,
    prediction: &TransportPrediction,
) -> serde_json::Result<String> {
    let payload = json!({
        "record": record,
        "probability": prediction.probability,
        "transported": prediction.is_transported,
        "verdict": verdict(prediction),
    });
    serde_json::to_string_pretty(&payload)
}

/// HTML fragment: record table, inline-styled meter, verdict banner.
///
/// Kept embeddable (no document wrapper); the meter markup matches the
/// fill-width/color contract exactly.
pub fn render_html(record: &PassengerRecord, prediction: &TransportPrediction) -> String {
    let mut html = String::new();

    html.push_str("<h3>Input Data</h3>\n<table>\n");
    for (field, value) in record_rows(record) {
        html.push_str(&format!(
            "  <tr><th>{field}</th><td>{value}</td></tr>\n"
        ));
    }
    html.push_str("</table>\n");

    let color = if prediction.is_transported {
        SUCCESS_COLOR
    } else {
        FAILURE_COLOR
    };
    html.push_str("<h3>Prediction Probability</h3>\n");
    html.push_str(&format!(
        r#"<div style="width: 100%; background: #ddd; border-radius: 20px; padding: 5px;">
    <div style="width: {}%; background: {}; height: 25px; border-radius: 15px; transition: width 0.5s;"></div>
</div>
<p style="text-align: center; font-size: 18px; font-weight: bold;">{}</p>
"#,
        bar_width_pct(prediction),
        color,
        probability_label(prediction)
    ));

    let banner_class = if prediction.is_transported {
        "success"
    } else {
        "error"
    };
    html.push_str(&format!(
        r#"<div class="{}" style="color: {};">This passenger is {} (probability {})</div>
"#,
        banner_class,
        color,
        verdict(prediction),
        probability_label(prediction)
    ));

    html
}
