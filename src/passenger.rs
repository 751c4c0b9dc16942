//! Passenger data assembled from form input
//!
//! One record is built per prediction action and discarded after rendering.
//! The field enums carry the fixed domains the form exposes, and the record
//! owns the numeric feature encoding the classifier consumes.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Number of values in the classifier's feature vector.
///
/// The artifact is trained against this exact layout; see
/// [`PassengerRecord::features`] for the order.
pub const NUM_FEATURES: usize = 13;

/// Planet the passenger embarked from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HomePlanet {
    Earth,
    Mars,
    Europa,
}

impl HomePlanet {
    pub const ALL: [HomePlanet; 3] = [HomePlanet::Earth, HomePlanet::Mars, HomePlanet::Europa];

    fn ordinal(self) -> u8 {
        match self {
            HomePlanet::Earth => 0,
            HomePlanet::Mars => 1,
            HomePlanet::Europa => 2,
        }
    }
}

impl fmt::Display for HomePlanet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HomePlanet::Earth => write!(f, "Earth"),
            HomePlanet::Mars => write!(f, "Mars"),
            HomePlanet::Europa => write!(f, "Europa"),
        }
    }
}

impl FromStr for HomePlanet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| s.eq_ignore_ascii_case(&p.to_string()))
            .ok_or_else(|| format!("unknown home planet '{s}' (expected Earth, Mars, Europa)"))
    }
}

/// Travel destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Destination {
    #[serde(rename = "TRAPPIST-1e")]
    Trappist1E,
    #[serde(rename = "PSO J318.5-22")]
    PsoJ318,
    #[serde(rename = "55 Cancri e")]
    Cancri55E,
}

impl Destination {
    pub const ALL: [Destination; 3] = [
        Destination::Trappist1E,
        Destination::PsoJ318,
        Destination::Cancri55E,
    ];

    fn ordinal(self) -> u8 {
        match self {
            Destination::Trappist1E => 0,
            Destination::PsoJ318 => 1,
            Destination::Cancri55E => 2,
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Trappist1E => write!(f, "TRAPPIST-1e"),
            Destination::PsoJ318 => write!(f, "PSO J318.5-22"),
            Destination::Cancri55E => write!(f, "55 Cancri e"),
        }
    }
}

impl FromStr for Destination {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| s.eq_ignore_ascii_case(&d.to_string()))
            .ok_or_else(|| {
                format!("unknown destination '{s}' (expected TRAPPIST-1e, PSO J318.5-22, 55 Cancri e)")
            })
    }
}

/// Cabin deck letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Deck {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    T,
}

impl Deck {
    pub const ALL: [Deck; 8] = [
        Deck::A,
        Deck::B,
        Deck::C,
        Deck::D,
        Deck::E,
        Deck::F,
        Deck::G,
        Deck::T,
    ];

    fn ordinal(self) -> u8 {
        match self {
            Deck::A => 0,
            Deck::B => 1,
            Deck::C => 2,
            Deck::D => 3,
            Deck::E => 4,
            Deck::F => 5,
            Deck::G => 6,
            Deck::T => 7,
        }
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Deck::A => "A",
            Deck::B => "B",
            Deck::C => "C",
            Deck::D => "D",
            Deck::E => "E",
            Deck::F => "F",
            Deck::G => "G",
            Deck::T => "T",
        };
        write!(f, "{letter}")
    }
}

impl FromStr for Deck {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| s.eq_ignore_ascii_case(&d.to_string()))
            .ok_or_else(|| format!("unknown cabin deck '{s}' (expected A-G or T)"))
    }
}

/// Side of the ship the cabin is on: P (port) or S (starboard)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CabinSide {
    #[serde(rename = "P")]
    Port,
    #[serde(rename = "S")]
    Starboard,
}

impl CabinSide {
    pub const ALL: [CabinSide; 2] = [CabinSide::Port, CabinSide::Starboard];

    fn ordinal(self) -> u8 {
        match self {
            CabinSide::Port => 0,
            CabinSide::Starboard => 1,
        }
    }
}

impl fmt::Display for CabinSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CabinSide::Port => write!(f, "P"),
            CabinSide::Starboard => write!(f, "S"),
        }
    }
}

impl FromStr for CabinSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|side| s.eq_ignore_ascii_case(&side.to_string()))
            .ok_or_else(|| format!("unknown cabin side '{s}' (expected P or S)"))
    }
}

/// Cabin location, rendered in slash form: `<deck>/<number>/<side>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cabin {
    pub deck: Deck,
    pub num: u16,
    pub side: CabinSide,
}

impl fmt::Display for Cabin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.deck, self.num, self.side)
    }
}

impl Serialize for Cabin {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Editable form fields with their default values.
///
/// Held by the form controller (TUI state or parsed CLI flags) and turned
/// into a fresh [`PassengerRecord`] on each prediction action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassengerForm {
    pub age: u8,
    pub vip: bool,
    pub cryo_sleep: bool,
    pub home_planet: HomePlanet,
    pub destination: Destination,
    pub deck: Deck,
    pub cabin_num: u16,
    pub side: CabinSide,
    pub room_service: u32,
    pub food_court: u32,
    pub shopping_mall: u32,
    pub spa: u32,
    pub vr_deck: u32,
}

impl Default for PassengerForm {
    fn default() -> Self {
        Self {
            age: 30,
            vip: false,
            cryo_sleep: false,
            home_planet: HomePlanet::Earth,
            destination: Destination::Trappist1E,
            deck: Deck::A,
            cabin_num: 100,
            side: CabinSide::Port,
            room_service: 0,
            food_court: 0,
            shopping_mall: 0,
            spa: 0,
            vr_deck: 0,
        }
    }
}

/// One prediction request: the form fields plus generated identity.
///
/// Field names serialize to the column names of the dataset the classifier
/// was trained on.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PassengerRecord {
    pub passenger_id: String,
    pub home_planet: HomePlanet,
    pub cryo_sleep: bool,
    pub cabin: Cabin,
    pub destination: Destination,
    pub age: u8,
    #[serde(rename = "VIP")]
    pub vip: bool,
    pub room_service: u32,
    pub food_court: u32,
    pub shopping_mall: u32,
    pub spa: u32,
    #[serde(rename = "VRDeck")]
    pub vr_deck: u32,
    pub name: String,
}

impl PassengerRecord {
    /// Build a record from form fields, generating a fresh identity.
    ///
    /// The identity has no external meaning; it exists to satisfy the input
    /// schema of the dataset the model was trained on and never feeds the
    /// feature vector.
    pub fn from_form(form: &PassengerForm) -> Self {
        let id = short_id();
        Self {
            name: format!("Pass_{id}"),
            passenger_id: id,
            home_planet: form.home_planet,
            cryo_sleep: form.cryo_sleep,
            cabin: Cabin {
                deck: form.deck,
                num: form.cabin_num,
                side: form.side,
            },
            destination: form.destination,
            age: form.age,
            vip: form.vip,
            room_service: form.room_service,
            food_court: form.food_court,
            shopping_mall: form.shopping_mall,
            spa: form.spa,
            vr_deck: form.vr_deck,
        }
    }

    /// Encode the record into the classifier's fixed feature layout.
    ///
    /// Order is part of the artifact contract and must not change without
    /// retraining:
    /// age, cryosleep, vip, home planet, destination, deck, cabin number,
    /// side, room service, food court, shopping mall, spa, VR deck.
    /// Categorical fields are ordinal-encoded in declaration order.
    pub fn features(&self) -> [f32; NUM_FEATURES] {
        [
            f32::from(self.age),
            if self.cryo_sleep { 1.0 } else { 0.0 },
            if self.vip { 1.0 } else { 0.0 },
            f32::from(self.home_planet.ordinal()),
            f32::from(self.destination.ordinal()),
            f32::from(self.cabin.deck.ordinal()),
            f32::from(self.cabin.num),
            f32::from(self.cabin.side.ordinal()),
            self.room_service as f32,
            self.food_court as f32,
            self.shopping_mall as f32,
            self.spa as f32,
            self.vr_deck as f32,
        ]
    }
}

/// Random 8-character passenger identifier (UUID v4 prefix).
fn short_id() -> String {
    Uuid::new_v4().to_string()[..8].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form() -> PassengerForm {
        PassengerForm {
            age: 30,
            vip: false,
            cryo_sleep: false,
            home_planet: HomePlanet::Earth,
            destination: Destination::Trappist1E,
            deck: Deck::B,
            cabin_num: 50,
            side: CabinSide::Port,
            room_service: 0,
            food_court: 0,
            shopping_mall: 0,
            spa: 0,
            vr_deck: 0,
        }
    }

    #[test]
    fn cabin_renders_slash_form() {
        let cabin = Cabin {
            deck: Deck::B,
            num: 50,
            side: CabinSide::Port,
        };
        assert_eq!(cabin.to_string(), "B/50/P");

        let cabin = Cabin {
            deck: Deck::T,
            num: 2000,
            side: CabinSide::Starboard,
        };
        assert_eq!(cabin.to_string(), "T/2000/S");
    }

    #[test]
    fn form_defaults_match_the_ui_contract() {
        let form = PassengerForm::default();
        assert_eq!(form.age, 30);
        assert!(!form.vip);
        assert!(!form.cryo_sleep);
        assert_eq!(form.home_planet, HomePlanet::Earth);
        assert_eq!(form.destination, Destination::Trappist1E);
        assert_eq!(form.deck, Deck::A);
        assert_eq!(form.cabin_num, 100);
        assert_eq!(form.side, CabinSide::Port);
        assert_eq!(form.room_service, 0);
        assert_eq!(form.food_court, 0);
        assert_eq!(form.shopping_mall, 0);
        assert_eq!(form.spa, 0);
        assert_eq!(form.vr_deck, 0);
    }

    #[test]
    fn record_gets_generated_identity() {
        let record = PassengerRecord::from_form(&sample_form());
        assert_eq!(record.passenger_id.len(), 8);
        assert_eq!(record.name, format!("Pass_{}", record.passenger_id));

        // Identity is fresh per record, never reused across requests.
        let other = PassengerRecord::from_form(&sample_form());
        assert_ne!(record.passenger_id, other.passenger_id);
    }

    #[test]
    fn record_copies_form_fields() {
        let mut form = sample_form();
        form.age = 64;
        form.vip = true;
        form.spa = 1200;

        let record = PassengerRecord::from_form(&form);
        assert_eq!(record.age, 64);
        assert!(record.vip);
        assert_eq!(record.spa, 1200);
        assert_eq!(record.cabin.to_string(), "B/50/P");
    }

    #[test]
    fn feature_layout_is_stable() {
        let form = PassengerForm {
            age: 42,
            vip: true,
            cryo_sleep: true,
            home_planet: HomePlanet::Europa,
            destination: Destination::Cancri55E,
            deck: Deck::G,
            cabin_num: 1234,
            side: CabinSide::Starboard,
            room_service: 10,
            food_court: 20,
            shopping_mall: 30,
            spa: 40,
            vr_deck: 50,
        };
        let features = PassengerRecord::from_form(&form).features();

        assert_eq!(features.len(), NUM_FEATURES);
        assert_eq!(features[0], 42.0); // age
        assert_eq!(features[1], 1.0); // cryosleep
        assert_eq!(features[2], 1.0); // vip
        assert_eq!(features[3], 2.0); // Europa
        assert_eq!(features[4], 2.0); // 55 Cancri e
        assert_eq!(features[5], 6.0); // deck G
        assert_eq!(features[6], 1234.0); // cabin number
        assert_eq!(features[7], 1.0); // starboard
        assert_eq!(&features[8..], &[10.0, 20.0, 30.0, 40.0, 50.0][..]);
    }

    #[test]
    fn enums_parse_their_display_form() {
        for planet in HomePlanet::ALL {
            assert_eq!(planet.to_string().parse::<HomePlanet>().unwrap(), planet);
        }
        for dest in Destination::ALL {
            assert_eq!(dest.to_string().parse::<Destination>().unwrap(), dest);
        }
        for deck in Deck::ALL {
            assert_eq!(deck.to_string().parse::<Deck>().unwrap(), deck);
        }
        for side in CabinSide::ALL {
            assert_eq!(side.to_string().parse::<CabinSide>().unwrap(), side);
        }

        // Parsing is case-insensitive for CLI ergonomics.
        assert_eq!("earth".parse::<HomePlanet>().unwrap(), HomePlanet::Earth);
        assert_eq!("b".parse::<Deck>().unwrap(), Deck::B);
        assert_eq!("s".parse::<CabinSide>().unwrap(), CabinSide::Starboard);

        assert!("Pluto".parse::<HomePlanet>().is_err());
        assert!("Z".parse::<Deck>().is_err());
        assert!("Q".parse::<CabinSide>().is_err());
        assert!("Alpha Centauri".parse::<Destination>().is_err());
    }

    #[test]
    fn record_serializes_dataset_column_names() {
        let record = PassengerRecord::from_form(&sample_form());
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["Cabin"], "B/50/P");
        assert_eq!(json["HomePlanet"], "Earth");
        assert_eq!(json["Destination"], "TRAPPIST-1e");
        assert_eq!(json["CryoSleep"], false);
        assert_eq!(json["VIP"], false);
        assert_eq!(json["Age"], 30);
        assert_eq!(json["RoomService"], 0);
        assert_eq!(json["VRDeck"], 0);
        assert_eq!(json["Name"], format!("Pass_{}", record.passenger_id));
    }
}
