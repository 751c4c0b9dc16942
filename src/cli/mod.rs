//! CLI command definitions and handlers

pub(crate) mod about;
mod predict;
mod tui;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::PredictorConfig;
use crate::passenger::{CabinSide, Deck, Destination, HomePlanet, PassengerForm};

/// Parse and validate an age (0-120)
fn parse_age(s: &str) -> Result<u8, String> {
    let n: u8 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid age", s))?;
    if n > 120 {
        Err("age cannot exceed 120".to_string())
    } else {
        Ok(n)
    }
}

/// Parse and validate a cabin number (0-2000)
fn parse_cabin_number(s: &str) -> Result<u16, String> {
    let n: u16 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid cabin number", s))?;
    if n > 2000 {
        Err("cabin number cannot exceed 2000".to_string())
    } else {
        Ok(n)
    }
}

fn parse_home_planet(s: &str) -> Result<HomePlanet, String> {
    s.parse()
}

fn parse_destination(s: &str) -> Result<Destination, String> {
    s.parse()
}

fn parse_deck(s: &str) -> Result<Deck, String> {
    s.parse()
}

fn parse_side(s: &str) -> Result<CabinSide, String> {
    s.parse()
}

/// Transported - passenger transportation predictor
#[derive(Parser, Debug)]
#[command(name = "transported")]
#[command(
    version,
    about = "Predict whether a passenger will be transported, from a pre-trained classifier",
    long_about = "Transported collects passenger details through an interactive terminal form \
(or plain CLI flags), runs them through a pre-trained classifier loaded from disk, and \
renders the transportation probability as a meter and a verdict.\n\n\
Run without a subcommand to open the interactive form.",
    after_help = "\
Examples:
  transported                                  Open the interactive form
  transported predict --age 30 --deck B        Predict from flags
  transported predict --cryosleep -f json      JSON output for scripting
  transported predict -f html -o meter.html    Embeddable HTML fragment
  transported about                            Describe the model"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Path to the classifier artifact (default: models/transport_model.json)
    #[arg(long, global = true)]
    pub model: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive prediction form (default when no subcommand is given)
    Form,

    /// Predict from field flags, without the interactive form
    #[command(after_help = "\
Examples:
  transported predict                                Defaults for every field
  transported predict --age 64 --vip --deck C        Override individual fields
  transported predict --home-planet Mars --spa 500   Spending fields take raw amounts
  transported predict --format json                  JSON output for scripting
  transported predict --format html -o meter.html    Write the HTML fragment to a file")]
    Predict {
        /// Passenger age
        #[arg(long, default_value = "30", value_parser = parse_age)]
        age: u8,

        /// VIP status
        #[arg(long)]
        vip: bool,

        /// Passenger is in cryosleep
        #[arg(long)]
        cryosleep: bool,

        /// Home planet: Earth, Mars, Europa
        #[arg(long, default_value = "Earth", value_parser = parse_home_planet)]
        home_planet: HomePlanet,

        /// Destination: TRAPPIST-1e, PSO J318.5-22, 55 Cancri e
        #[arg(long, default_value = "TRAPPIST-1e", value_parser = parse_destination)]
        destination: Destination,

        /// Cabin deck: A-G or T
        #[arg(long, default_value = "A", value_parser = parse_deck)]
        deck: Deck,

        /// Cabin number (0-2000)
        #[arg(long, default_value = "100", value_parser = parse_cabin_number)]
        cabin_number: u16,

        /// Cabin side: P or S
        #[arg(long, default_value = "P", value_parser = parse_side)]
        side: CabinSide,

        /// Room service expenditure
        #[arg(long, default_value = "0")]
        room_service: u32,

        /// Food court expenditure
        #[arg(long, default_value = "0")]
        food_court: u32,

        /// Shopping mall expenditure
        #[arg(long, default_value = "0")]
        shopping_mall: u32,

        /// Spa expenditure
        #[arg(long, default_value = "0")]
        spa: u32,

        /// VR deck expenditure
        #[arg(long, default_value = "0")]
        vr_deck: u32,

        /// Output format: text, json, html
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json", "html"])]
        format: String,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Describe the classifier behind the predictions
    About,

    /// Show version information
    Version,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let config = PredictorConfig::load(Path::new("."))?;
    let model_path = config.resolve_model_path(cli.model.as_deref());

    match cli.command {
        None | Some(Commands::Form) => tui::run(model_path),

        Some(Commands::Predict {
            age,
            vip,
            cryosleep,
            home_planet,
            destination,
            deck,
            cabin_number,
            side,
            room_service,
            food_court,
            shopping_mall,
            spa,
            vr_deck,
            format,
            output,
        }) => {
            let form = PassengerForm {
                age,
                vip,
                cryo_sleep: cryosleep,
                home_planet,
                destination,
                deck,
                cabin_num: cabin_number,
                side,
                room_service,
                food_court,
                shopping_mall,
                spa,
                vr_deck,
            };
            predict::run(&form, &model_path, &format, output.as_deref())
        }

        Some(Commands::About) => about::run(),

        Some(Commands::Version) => {
            println!("transported {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
