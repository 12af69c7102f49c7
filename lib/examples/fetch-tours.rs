use std::{env, time::Duration};

use color_eyre::eyre::Result;
use tours_lib::fetcher::{DEFAULT_TOURS_ENDPOINT, HttpTourFetcher, TourFetcher};

fn main() -> Result<()> {
    color_eyre::install()?;

    let endpoint = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_TOURS_ENDPOINT.to_string());

    let fetcher = HttpTourFetcher::builder()
        .endpoint(endpoint)
        .timeout(Duration::from_secs(10))
        .build()?;

    let tours = fetcher.fetch_tours()?;

    for tour in tours.iter() {
        println!("[{}] {} - ${}", tour.id, tour.name, tour.price);
    }

    println!("fetched {} tours", tours.len());

    Ok(())
}
