use crate::io::{get_json, Error};
use crate::{Airport, BlobStorageProvider, Explorer, Flight};

/// Returns the flights at `key`, each decorated with its direct distance
pub async fn load_flights(
    key: &str,
    client: &dyn BlobStorageProvider,
) -> Result<Vec<Flight>, Error> {
    get_json::<Flight>(key, client).await
}

/// Returns the airports at `key`
pub async fn load_airports(
    key: &str,
    client: &dyn BlobStorageProvider,
) -> Result<Vec<Airport>, Error> {
    get_json::<Airport>(key, client).await
}

fn or_empty<T>(name: &str, result: Result<Vec<T>, Error>) -> Vec<T> {
    match result {
        Ok(records) => {
            log::info!("{name} - {} records", records.len());
            records
        }
        Err(e) => {
            log::error!("{name} - {e}");
            vec![]
        }
    }
}

/// Loads the flights and airports datasets concurrently.
/// # Implementation
/// A dataset that cannot be read or parsed is logged and left empty; it is not retried.
pub async fn load(
    flights_key: &str,
    airports_key: &str,
    client: &dyn BlobStorageProvider,
) -> Explorer {
    let (flights, airports) = futures::join!(
        load_flights(flights_key, client),
        load_airports(airports_key, client)
    );

    Explorer::new(
        or_empty(flights_key, flights),
        or_empty(airports_key, airports),
    )
}
