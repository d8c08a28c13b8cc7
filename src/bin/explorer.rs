use std::error::Error;
use std::io::BufRead;

use clap::{Parser, Subcommand};
use simple_logger::SimpleLogger;

use flight_explorer::*;

const ABOUT: &'static str = r#"Explores a dataset of flights and a dataset of airports.
Flights can be filtered by source airport, destination airport, airline and aircraft;
airports by city and by a search term that must equal one of their fields.
A filter set to "any" matches every record."#;

#[derive(Parser, Debug)]
#[command(author, version, about = ABOUT)]
struct Cli {
    /// The JSON file with the flights
    #[arg(long, default_value = "Combined_Data.json")]
    flights: String,
    /// The JSON file with the airports
    #[arg(long, default_value = "A2_Airports.json")]
    airports: String,
    /// The format of the rendered lists
    #[arg(short, long, value_enum, default_value_t=Format::Markdown)]
    format: Format,
    /// Log each control change
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lists the flights matching every filter
    Flights {
        /// The name of the source airport
        #[arg(long, default_value = ANY)]
        source_airport: String,
        /// The name of the destination airport
        #[arg(long, default_value = ANY)]
        destination_airport: String,
        /// The name of the airline
        #[arg(long, default_value = ANY)]
        airline: String,
        /// One of the aircraft of the flight
        #[arg(long, default_value = ANY)]
        aircraft: String,
    },
    /// Lists the airports matching the city and the search term
    Airports {
        /// The city of the airport
        #[arg(long, default_value = ANY)]
        city: String,
        /// A value that one of the fields of the airport must equal (e.g. `BNE`)
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Lists the values available to each filter
    Options,
    /// Reads `<control> <value>` lines from stdin and renders the list each change drives.
    /// Controls are `source-airport`, `destination-airport`, `airline`, `aircraft`, `city` and `search`.
    Interactive,
}

fn print_options(title: &str, options: &[String]) {
    println!("## {title}");
    for option in options {
        println!("- {option}");
    }
    println!();
}

fn interactive(explorer: Explorer, format: Format) -> Result<(), Box<dyn Error>> {
    let mut session = Session::new(explorer, format);
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_event(&line) {
            Ok((control, value)) => println!("{}", session.apply(control, value)?),
            Err(e) => log::error!("{e}"),
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    SimpleLogger::new()
        .with_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init()?;

    let explorer = load(&cli.flights, &cli.airports, &LocalDisk).await;

    match cli.command {
        Command::Flights {
            source_airport,
            destination_airport,
            airline,
            aircraft,
        } => {
            let query = FlightQuery {
                source_airport: source_airport.into(),
                destination_airport: destination_airport.into(),
                airline: airline.into(),
                aircraft: aircraft.into(),
            };
            let flights = explorer.filter_flights(&query);
            log::info!("{} flights match", flights.len());
            println!("{}", render_flights(&flights, cli.format)?);
        }
        Command::Airports { city, search } => {
            let query = AirportQuery {
                city: city.into(),
                search,
            };
            let airports = explorer.filter_airports(&query);
            log::info!("{} airports match", airports.len());
            println!("{}", render_airports(&airports, cli.format)?);
        }
        Command::Options => {
            let options = explorer.flight_options();
            print_options("Source airports", &options.source_airports);
            print_options("Destination airports", &options.destination_airports);
            print_options("Airlines", &options.airlines);
            print_options("Aircraft", &options.aircraft);
            print_options("Cities", &explorer.city_options());
        }
        Command::Interactive => interactive(explorer, cli.format)?,
    }

    Ok(())
}
