//! Configuration loader and schema types.
//!
//! Settings control where playlist files live and the banner/farewell text;
//! everything has a default so the tool runs fine with no config at all.

mod load;
mod schema;

pub use schema::*;

#[cfg(test)]
mod tests;
