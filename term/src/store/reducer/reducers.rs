//! Reducers grouped by the slice of state they update.

pub mod tours;
