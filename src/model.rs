use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An airport, as embedded in flights and as listed in the airports dataset
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Airport {
    #[serde(default, deserialize_with = "crate::serde::text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "crate::serde::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::serde::text")]
    pub city: Option<String>,
    /// The three-letter IATA code (e.g. `BNE`)
    #[serde(default, deserialize_with = "crate::serde::text")]
    pub iata: Option<String>,
    /// Degrees, as written in the dataset (e.g. `-6.0816890`)
    #[serde(default, deserialize_with = "crate::serde::text")]
    pub latitude: Option<String>,
    #[serde(default, deserialize_with = "crate::serde::text")]
    pub longitude: Option<String>,
    #[serde(default, deserialize_with = "crate::serde::text")]
    pub altitude: Option<String>,
    #[serde(default, deserialize_with = "crate::serde::text")]
    pub timezone: Option<String>,
}

impl Airport {
    /// The (latitude, longitude) of the airport, when both are known numbers
    pub fn position(&self) -> Option<(f64, f64)> {
        let latitude = crate::serde::parse_number(self.latitude.as_deref()?)?;
        let longitude = crate::serde::parse_number(self.longitude.as_deref()?)?;
        Some((latitude, longitude))
    }

    /// The value of every field as written in the dataset, in declaration order
    pub fn fields(&self) -> [Option<&str>; 8] {
        [
            self.id.as_deref(),
            self.name.as_deref(),
            self.city.as_deref(),
            self.iata.as_deref(),
            self.latitude.as_deref(),
            self.longitude.as_deref(),
            self.altitude.as_deref(),
            self.timezone.as_deref(),
        ]
    }
}

/// An airline operating a [`Flight`]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Airline {
    #[serde(default, deserialize_with = "crate::serde::text")]
    pub name: Option<String>,
    /// Every other attribute of the airline, kept as-is
    #[serde(flatten)]
    pub other: BTreeMap<String, serde_json::Value>,
}

/// Returns the great-circle distance in km between two airports,
/// or `None` when any of their coordinates is unknown.
pub fn direct_distance(from: &Airport, to: &Airport) -> Option<f64> {
    Some(crate::distance(from.position()?, to.position()?))
}

/// A route between two airports, flown by an airline with one or more aircraft.
///
/// The direct distance is computed once, when the flight is created, and cannot be
/// changed afterwards: all fields are read-only.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(from = "RawFlight")]
pub struct Flight {
    source_airport: Airport,
    destination_airport: Airport,
    airline: Airline,
    aircraft: Vec<String>,
    direct_distance: Option<f64>,
}

/// [`Flight`] as it is stored on disk
#[derive(Deserialize)]
struct RawFlight {
    #[serde(default, deserialize_with = "crate::serde::or_default")]
    source_airport: Airport,
    #[serde(default, deserialize_with = "crate::serde::or_default")]
    destination_airport: Airport,
    #[serde(default, deserialize_with = "crate::serde::or_default")]
    airline: Airline,
    #[serde(default, deserialize_with = "crate::serde::strings")]
    aircraft: Vec<String>,
}

impl From<RawFlight> for Flight {
    fn from(raw: RawFlight) -> Self {
        Flight::new(
            raw.source_airport,
            raw.destination_airport,
            raw.airline,
            raw.aircraft,
        )
    }
}

impl Flight {
    pub fn new(
        source_airport: Airport,
        destination_airport: Airport,
        airline: Airline,
        aircraft: Vec<String>,
    ) -> Self {
        let direct_distance = direct_distance(&source_airport, &destination_airport);
        Self {
            source_airport,
            destination_airport,
            airline,
            aircraft,
            direct_distance,
        }
    }

    pub fn source_airport(&self) -> &Airport {
        &self.source_airport
    }

    pub fn destination_airport(&self) -> &Airport {
        &self.destination_airport
    }

    pub fn airline(&self) -> &Airline {
        &self.airline
    }

    /// The aircraft types flying this route (e.g. `["737", "320"]`)
    pub fn aircraft(&self) -> &[String] {
        &self.aircraft
    }

    /// Great-circle distance between source and destination in km
    pub fn direct_distance(&self) -> Option<f64> {
        self.direct_distance
    }
}

/// A dataset on disk: either a bare list of records or `{"data": [...]}`
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum Records<T> {
    Wrapped { data: Vec<T> },
    Bare(Vec<T>),
}

impl<T> From<Records<T>> for Vec<T> {
    fn from(records: Records<T>) -> Self {
        match records {
            Records::Wrapped { data } => data,
            Records::Bare(data) => data,
        }
    }
}
