use crate::{Airport, Flight};

/// The control value that disables a filter
pub const ANY: &str = "any";

/// A filter over one field of a record: either everything passes, or only
/// records whose field equals the value exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    Any,
    Exact(String),
}

impl From<&str> for Filter {
    fn from(value: &str) -> Self {
        value.to_string().into()
    }
}

impl From<String> for Filter {
    fn from(value: String) -> Self {
        if value == ANY {
            Self::Any
        } else {
            Self::Exact(value)
        }
    }
}

impl Filter {
    /// Whether a field with `value` passes this filter
    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(expected) => value == Some(expected.as_str()),
        }
    }

    /// Whether a list-valued field with `values` passes this filter
    pub fn matches_any<'a>(&self, mut values: impl Iterator<Item = &'a str>) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(expected) => values.any(|value| value == expected),
        }
    }
}

fn filter_by<'a, T, F>(items: impl IntoIterator<Item = &'a T>, predicate: F) -> Vec<&'a T>
where
    T: 'a,
    F: Fn(&T) -> bool,
{
    items.into_iter().filter(|item| predicate(*item)).collect()
}

/// Returns the flights departing from the airport named by `filter`
pub fn filter_by_source_airport<'a>(
    flights: impl IntoIterator<Item = &'a Flight>,
    filter: &Filter,
) -> Vec<&'a Flight> {
    filter_by(flights, |f: &Flight| filter.matches(f.source_airport().name.as_deref()))
}

/// Returns the flights arriving at the airport named by `filter`
pub fn filter_by_destination_airport<'a>(
    flights: impl IntoIterator<Item = &'a Flight>,
    filter: &Filter,
) -> Vec<&'a Flight> {
    filter_by(flights, |f: &Flight| {
        filter.matches(f.destination_airport().name.as_deref())
    })
}

/// Returns the flights operated by the airline named by `filter`
pub fn filter_by_airline<'a>(
    flights: impl IntoIterator<Item = &'a Flight>,
    filter: &Filter,
) -> Vec<&'a Flight> {
    filter_by(flights, |f: &Flight| filter.matches(f.airline().name.as_deref()))
}

/// Returns the flights where one of the aircraft is `filter`
pub fn filter_by_aircraft<'a>(
    flights: impl IntoIterator<Item = &'a Flight>,
    filter: &Filter,
) -> Vec<&'a Flight> {
    filter_by(flights, |f: &Flight| {
        filter.matches_any(f.aircraft().iter().map(String::as_str))
    })
}

/// Returns the airports in the city named by `filter`
pub fn filter_by_city<'a>(
    airports: impl IntoIterator<Item = &'a Airport>,
    filter: &Filter,
) -> Vec<&'a Airport> {
    filter_by(airports, |a: &Airport| filter.matches(a.city.as_deref()))
}

/// Returns the airports with at least one field equal to `query`.
/// The match is on the whole value, e.g. `BNE` matches the IATA code `BNE` but `BN` does not.
/// An empty query returns every airport.
pub fn search<'a>(airports: impl IntoIterator<Item = &'a Airport>, query: &str) -> Vec<&'a Airport> {
    if query.is_empty() {
        return airports.into_iter().collect();
    }
    filter_by(airports, |a: &Airport| {
        a.fields().contains(&Some(query))
    })
}

/// The state of the four flight controls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlightQuery {
    pub source_airport: Filter,
    pub destination_airport: Filter,
    pub airline: Filter,
    pub aircraft: Filter,
}

impl FlightQuery {
    /// Returns the flights passing every filter of this query
    pub fn apply<'a>(&self, flights: impl IntoIterator<Item = &'a Flight>) -> Vec<&'a Flight> {
        let flights = filter_by_source_airport(flights, &self.source_airport);
        let flights = filter_by_destination_airport(flights, &self.destination_airport);
        let flights = filter_by_airline(flights, &self.airline);
        filter_by_aircraft(flights, &self.aircraft)
    }
}

/// The state of the city control and of the search box
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AirportQuery {
    pub city: Filter,
    pub search: String,
}

impl AirportQuery {
    /// Returns the airports passing the city filter and the search
    pub fn apply<'a>(&self, airports: impl IntoIterator<Item = &'a Airport>) -> Vec<&'a Airport> {
        search(filter_by_city(airports, &self.city), &self.search)
    }
}
