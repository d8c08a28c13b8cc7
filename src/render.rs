//! Renders filtered flights and airports as numbered lists.
use serde::Serialize;
use tinytemplate::TinyTemplate;

use crate::{Airport, Flight};

static FLIGHTS_MARKDOWN: &str = include_str!("templates/flights.md");
static FLIGHTS_HTML: &str = include_str!("templates/flights.html");
static AIRPORTS_MARKDOWN: &str = include_str!("templates/airports.md");
static AIRPORTS_HTML: &str = include_str!("templates/airports.html");
static TEMPLATE_NAME: &str = "t";

/// Rendered in place of any absent or empty value
pub const NOT_SPECIFIED: &str = "Not Specified";
/// Rendered in place of an empty list of flights
pub const NO_FLIGHTS: &str = "There are no flights that match this query, please try again.";
/// Rendered in place of an empty list of airports
pub const NO_AIRPORTS: &str = "There are no airports that match this query, please try again.";

/// The output format of a rendered list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Format {
    /// A numbered Markdown list
    #[default]
    Markdown,
    /// An HTML `<ol>`, with values escaped
    Html,
}

#[derive(Serialize)]
struct Context<R> {
    rows: Vec<R>,
}

#[derive(Serialize)]
struct FlightRow {
    position: usize,
    source_name: String,
    source_id: String,
    destination_name: String,
    destination_id: String,
    airline: String,
    aircraft: String,
    distance: String,
}

#[derive(Serialize)]
struct AirportRow {
    position: usize,
    id: String,
    name: String,
    city: String,
    iata: String,
    latitude: String,
    longitude: String,
    altitude: String,
    timezone: String,
}

fn or_not_specified(value: Option<&str>) -> String {
    match value {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => NOT_SPECIFIED.to_string(),
    }
}

/// Formats a distance in km with two decimals, e.g. `751.23km`
pub fn format_distance(distance: Option<f64>) -> String {
    distance
        .map(|distance| format!("{distance:.2}km"))
        .unwrap_or_else(|| NOT_SPECIFIED.to_string())
}

impl FlightRow {
    fn new(position: usize, flight: &Flight) -> Self {
        let source = flight.source_airport();
        let destination = flight.destination_airport();
        Self {
            position,
            source_name: or_not_specified(source.name.as_deref()),
            source_id: or_not_specified(source.id.as_deref()),
            destination_name: or_not_specified(destination.name.as_deref()),
            destination_id: or_not_specified(destination.id.as_deref()),
            airline: or_not_specified(flight.airline().name.as_deref()),
            aircraft: or_not_specified(Some(flight.aircraft().join(", ").as_str())),
            distance: format_distance(flight.direct_distance()),
        }
    }
}

impl AirportRow {
    fn new(position: usize, airport: &Airport) -> Self {
        Self {
            position,
            id: or_not_specified(airport.id.as_deref()),
            name: or_not_specified(airport.name.as_deref()),
            city: or_not_specified(airport.city.as_deref()),
            iata: or_not_specified(airport.iata.as_deref()),
            latitude: or_not_specified(airport.latitude.as_deref()),
            longitude: or_not_specified(airport.longitude.as_deref()),
            altitude: or_not_specified(airport.altitude.as_deref()),
            timezone: or_not_specified(airport.timezone.as_deref()),
        }
    }
}

fn render<R: Serialize>(
    template: &str,
    rows: Vec<R>,
    format: Format,
) -> Result<String, tinytemplate::error::Error> {
    let mut tt = TinyTemplate::new();
    if format == Format::Markdown {
        tt.set_default_formatter(&tinytemplate::format_unescaped);
    }
    tt.add_template(TEMPLATE_NAME, template)?;

    let rendered = tt.render(TEMPLATE_NAME, &Context { rows })?;
    Ok(rendered.trim_end().to_string())
}

/// Renders `flights` as a numbered list, or [`NO_FLIGHTS`] when there are none.
pub fn render_flights(
    flights: &[&Flight],
    format: Format,
) -> Result<String, tinytemplate::error::Error> {
    if flights.is_empty() {
        return Ok(NO_FLIGHTS.to_string());
    }
    let rows = flights
        .iter()
        .enumerate()
        .map(|(i, flight)| FlightRow::new(i + 1, flight))
        .collect();
    let template = match format {
        Format::Markdown => FLIGHTS_MARKDOWN,
        Format::Html => FLIGHTS_HTML,
    };
    render(template, rows, format)
}

/// Renders `airports` as a numbered list, or [`NO_AIRPORTS`] when there are none.
pub fn render_airports(
    airports: &[&Airport],
    format: Format,
) -> Result<String, tinytemplate::error::Error> {
    if airports.is_empty() {
        return Ok(NO_AIRPORTS.to_string());
    }
    let rows = airports
        .iter()
        .enumerate()
        .map(|(i, airport)| AirportRow::new(i + 1, airport))
        .collect();
    let template = match format {
        Format::Markdown => AIRPORTS_MARKDOWN,
        Format::Html => AIRPORTS_HTML,
    };
    render(template, rows, format)
}
