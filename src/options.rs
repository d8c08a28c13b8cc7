use itertools::Itertools;

use crate::{Airport, Flight};

/// Returns the distinct, non-empty `values`, sorted.
/// Absent values are skipped.
pub fn options<'a>(values: impl IntoIterator<Item = Option<&'a str>>) -> Vec<String> {
    values
        .into_iter()
        .flatten()
        .filter(|value| !value.is_empty())
        .unique()
        .sorted()
        .map(str::to_string)
        .collect()
}

/// Returns the distinct, non-empty elements across list-valued `values`, sorted.
pub fn options_flat<'a, I>(values: impl IntoIterator<Item = I>) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    options(values.into_iter().flatten().map(Some))
}

/// The values offered by each of the four flight controls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlightOptions {
    pub source_airports: Vec<String>,
    pub destination_airports: Vec<String>,
    pub airlines: Vec<String>,
    pub aircraft: Vec<String>,
}

impl FlightOptions {
    pub fn new(flights: &[Flight]) -> Self {
        Self {
            source_airports: options(flights.iter().map(|f| f.source_airport().name.as_deref())),
            destination_airports: options(
                flights
                    .iter()
                    .map(|f| f.destination_airport().name.as_deref()),
            ),
            airlines: options(flights.iter().map(|f| f.airline().name.as_deref())),
            aircraft: options_flat(
                flights
                    .iter()
                    .map(|f| f.aircraft().iter().map(String::as_str)),
            ),
        }
    }
}

/// The values offered by the city control
pub fn city_options(airports: &[Airport]) -> Vec<String> {
    options(airports.iter().map(|a| a.city.as_deref()))
}
