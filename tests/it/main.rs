use flight_explorer::render::{NOT_SPECIFIED, NO_AIRPORTS, NO_FLIGHTS};
use flight_explorer::*;

static FLIGHTS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/flights.json");
static AIRPORTS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/airports.json");

async fn explorer() -> Explorer {
    load(FLIGHTS, AIRPORTS, &LocalDisk).await
}

/// Verifies that both fixtures load and that flights are decorated with their distance.
/// Brisbane -> Sydney is ca. 750 km according to https://www.greatcirclemapper.net/
#[tokio::test]
async fn acceptance_load() {
    let explorer = explorer().await;
    assert_eq!(explorer.flights().len(), 4);
    assert_eq!(explorer.airports().len(), 5);

    let there = explorer.flights()[0].direct_distance().unwrap();
    let back = explorer.flights()[1].direct_distance().unwrap();
    assert!(there > 700.0 && there < 800.0, "{there}");
    assert!((there - back).abs() < 1e-6);

    // Perth has no coordinates
    assert_eq!(explorer.flights()[2].direct_distance(), None);
    assert_eq!(explorer.flights()[3].airline().name, None);
}

#[tokio::test]
async fn missing_dataset_is_empty() {
    let explorer = load("does/not/exist.json", AIRPORTS, &LocalDisk).await;
    assert!(explorer.flights().is_empty());
    assert_eq!(explorer.airports().len(), 5);

    let rendered = render_flights(
        &explorer.filter_flights(&FlightQuery::default()),
        Format::Markdown,
    )
    .unwrap();
    assert_eq!(rendered, NO_FLIGHTS);
}

#[tokio::test]
async fn filter_flights() {
    let explorer = explorer().await;

    assert_eq!(explorer.filter_flights(&FlightQuery::default()).len(), 4);

    let query = FlightQuery {
        source_airport: "Brisbane International Airport".into(),
        ..Default::default()
    };
    let flights = explorer.filter_flights(&query);
    assert_eq!(flights.len(), 2);
    assert!(flights
        .iter()
        .all(|f| f.source_airport().iata.as_deref() == Some("BNE")));

    let query = FlightQuery {
        airline: "Qantas".into(),
        aircraft: "330".into(),
        ..Default::default()
    };
    assert_eq!(explorer.filter_flights(&query).len(), 2);

    let query = FlightQuery {
        airline: "Qantas".into(),
        aircraft: "737".into(),
        destination_airport: "Perth International Airport".into(),
        ..Default::default()
    };
    let flights = explorer.filter_flights(&query);
    assert!(flights.is_empty());
    assert_eq!(render_flights(&flights, Format::Html).unwrap(), NO_FLIGHTS);
}

#[tokio::test]
async fn filter_airports() {
    let explorer = explorer().await;

    assert_eq!(explorer.filter_airports(&AirportQuery::default()).len(), 5);

    let query = AirportQuery {
        city: "Brisbane".into(),
        search: String::new(),
    };
    assert_eq!(explorer.filter_airports(&query).len(), 2);

    let query = AirportQuery {
        city: Filter::Any,
        search: "MEL".to_string(),
    };
    let airports = explorer.filter_airports(&query);
    assert_eq!(airports.len(), 1);
    assert_eq!(airports[0].id.as_deref(), Some("3339"));

    // numbers are matched on their text, as written in the dataset
    let query = AirportQuery {
        city: "Brisbane".into(),
        search: "-27.5702991486".to_string(),
    };
    assert_eq!(explorer.filter_airports(&query)[0].iata.as_deref(), Some("ACF"));

    let query = AirportQuery {
        city: Filter::Any,
        search: "3321".to_string(),
    };
    assert_eq!(explorer.filter_airports(&query)[0].iata.as_deref(), Some("ACF"));

    let query = AirportQuery {
        city: Filter::Any,
        search: "Melbourne International".to_string(),
    };
    let airports = explorer.filter_airports(&query);
    assert_eq!(render_airports(&airports, Format::Markdown).unwrap(), NO_AIRPORTS);
}

#[tokio::test]
async fn options() {
    let explorer = explorer().await;
    let options = explorer.flight_options();

    assert_eq!(
        options.source_airports,
        vec![
            "Brisbane International Airport",
            "Melbourne International Airport",
            "Sydney Kingsford Smith International Airport"
        ]
    );
    assert_eq!(options.airlines, vec!["Qantas", "Virgin Australia"]);
    assert_eq!(options.aircraft, vec!["330", "737", "738"]);
    assert_eq!(
        explorer.city_options(),
        vec!["Brisbane", "Melbourne", "Perth", "Sydney"]
    );
}

#[tokio::test]
async fn render() {
    let explorer = explorer().await;
    let query = FlightQuery {
        source_airport: "Melbourne International Airport".into(),
        ..Default::default()
    };
    let rendered = render_flights(&explorer.filter_flights(&query), Format::Markdown).unwrap();
    assert_eq!(
        rendered,
        format!("1. **Source Airport:** Melbourne International Airport (3339) | **Destination Airport:** Perth International Airport (3351) | **Airline:** Qantas | **Aircraft/s:** 330, 738 | **Distance:** {NOT_SPECIFIED}")
    );

    let query = AirportQuery {
        city: "Perth".into(),
        search: String::new(),
    };
    let rendered = render_airports(&explorer.filter_airports(&query), Format::Html).unwrap();
    assert!(rendered.contains("<span class=\"fw-bold\">IATA:</span> Not Specified"));
    assert!(rendered.contains("<span class=\"fw-bold\">Latitude:</span> Not Specified"));
    assert!(rendered.contains("<span class=\"fw-bold\">Altitude:</span> 67"));
}

#[tokio::test]
async fn interactive_session() {
    let mut session = Session::new(explorer().await, Format::Markdown);

    let events = [
        "airline Virgin Australia",
        "aircraft 737",
        "city Sydney",
        "search SYD",
        "search BNE",
    ];
    let rendered = events
        .into_iter()
        .map(|line| {
            let (control, value) = parse_event(line).unwrap();
            session.apply(control, value).unwrap()
        })
        .collect::<Vec<_>>();

    assert_eq!(rendered[0].lines().count(), 1);
    assert_eq!(rendered[0], rendered[1]);
    assert!(rendered[2].contains("**City:** Sydney"));
    assert_eq!(rendered[2], rendered[3]);
    assert_eq!(rendered[4], NO_AIRPORTS);
}
