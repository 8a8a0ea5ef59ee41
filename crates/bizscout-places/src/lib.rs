//! Client for the Google Places web service.
//!
//! Runs the text search for a [`bizscout_core::SearchRequest`], fetches
//! details for each retained candidate, and normalizes the results into
//! [`bizscout_core::BusinessRecord`]s.

pub mod client;
pub mod error;
mod gateway;
pub mod types;

pub use client::PlacesClient;
pub use error::PlacesError;
pub use types::{PlaceCandidate, PlaceDetails};
