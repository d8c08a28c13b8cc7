use std::str::FromStr;

use crate::render::{render_airports, render_flights, Format};
use crate::{city_options, Airport, AirportQuery, Flight, FlightOptions, FlightQuery};

/// The flights and airports loaded for a session. They are never mutated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Explorer {
    flights: Vec<Flight>,
    airports: Vec<Airport>,
}

impl Explorer {
    pub fn new(flights: Vec<Flight>, airports: Vec<Airport>) -> Self {
        Self { flights, airports }
    }

    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    pub fn airports(&self) -> &[Airport] {
        &self.airports
    }

    pub fn filter_flights(&self, query: &FlightQuery) -> Vec<&Flight> {
        query.apply(&self.flights)
    }

    pub fn filter_airports(&self, query: &AirportQuery) -> Vec<&Airport> {
        query.apply(&self.airports)
    }

    /// The values offered by the flight controls
    pub fn flight_options(&self) -> FlightOptions {
        FlightOptions::new(&self.flights)
    }

    /// The values offered by the city control
    pub fn city_options(&self) -> Vec<String> {
        city_options(&self.airports)
    }
}

/// One of the six controls of the explorer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    SourceAirport,
    DestinationAirport,
    Airline,
    Aircraft,
    City,
    Search,
}

impl Control {
    pub const ALL: [Control; 6] = [
        Control::SourceAirport,
        Control::DestinationAirport,
        Control::Airline,
        Control::Aircraft,
        Control::City,
        Control::Search,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Control::SourceAirport => "source-airport",
            Control::DestinationAirport => "destination-airport",
            Control::Airline => "airline",
            Control::Aircraft => "aircraft",
            Control::City => "city",
            Control::Search => "search",
        }
    }
}

/// A control name that is not one of [`Control::ALL`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownControl(pub String);

impl std::error::Error for UnknownControl {}

impl std::fmt::Display for UnknownControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let known = Control::ALL.map(|c| c.name()).join(", ");
        write!(f, "unknown control \"{}\" (expected one of {known})", self.0)
    }
}

impl FromStr for Control {
    type Err = UnknownControl;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Control::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| UnknownControl(s.to_string()))
    }
}

/// Parses an input event of the form `<control> <value>`.
/// The value is everything after the first space, and may be empty (e.g. `search`).
pub fn parse_event(line: &str) -> Result<(Control, &str), UnknownControl> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (control, value) = line.split_once(' ').unwrap_or((line, ""));
    Ok((control.parse()?, value))
}

/// The state of the six controls over an [`Explorer`]. Every change of a control
/// re-filters the corresponding dataset and re-renders it.
#[derive(Debug, Clone)]
pub struct Session {
    explorer: Explorer,
    flights: FlightQuery,
    airports: AirportQuery,
    format: Format,
}

impl Session {
    pub fn new(explorer: Explorer, format: Format) -> Self {
        Self {
            explorer,
            flights: FlightQuery::default(),
            airports: AirportQuery::default(),
            format,
        }
    }

    pub fn explorer(&self) -> &Explorer {
        &self.explorer
    }

    pub fn flight_query(&self) -> &FlightQuery {
        &self.flights
    }

    pub fn airport_query(&self) -> &AirportQuery {
        &self.airports
    }

    /// Sets `control` to `value` and returns the re-rendered list it drives
    pub fn apply(
        &mut self,
        control: Control,
        value: &str,
    ) -> Result<String, tinytemplate::error::Error> {
        match control {
            Control::SourceAirport => self.flights.source_airport = value.into(),
            Control::DestinationAirport => self.flights.destination_airport = value.into(),
            Control::Airline => self.flights.airline = value.into(),
            Control::Aircraft => self.flights.aircraft = value.into(),
            Control::City => self.airports.city = value.into(),
            Control::Search => self.airports.search = value.to_string(),
        }
        log::debug!("{} = {value:?}", control.name());

        match control {
            Control::City | Control::Search => self.render_airports(),
            _ => self.render_flights(),
        }
    }

    pub fn render_flights(&self) -> Result<String, tinytemplate::error::Error> {
        render_flights(&self.explorer.filter_flights(&self.flights), self.format)
    }

    pub fn render_airports(&self) -> Result<String, tinytemplate::error::Error> {
        render_airports(&self.explorer.filter_airports(&self.airports), self.format)
    }
}
