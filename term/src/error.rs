//! Conversions from thread failures into error reports.

use std::any::Any;

use color_eyre::eyre::{Report, eyre};

/// Turns the payload of a panicked worker thread into a report, keeping the
/// panic message when it is a string.
pub fn report_from_thread_panic(payload: Box<dyn Any + Send>) -> Report {
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned());

    match message {
        Some(message) => eyre!("worker thread panicked: {message}"),
        None => eyre!("worker thread panicked for unknown reason"),
    }
}

#[cfg(test)]
#[path = "./error_tests.rs"]
mod tests;
