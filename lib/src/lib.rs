//! Library package for fetching tour listings from the tours JSON API
//!
//! # Examples
//!
//! ## Fetching Tours
//!
//! ```bash
//! cargo run --example fetch-tours -p tours-lib
//! ```
//!
//! ```no_run
//! use tours_lib::fetcher::{HttpTourFetcher, TourFetcher};
//!
//! let fetcher = HttpTourFetcher::builder().build().unwrap();
//!
//! for tour in fetcher.fetch_tours().unwrap() {
//!     println!("{} ${}", tour.name, tour.price);
//! }
//! ```

#![deny(missing_docs)]
pub mod error;
pub mod fetcher;
pub mod tour;
