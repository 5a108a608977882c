//! Access to the Wikidata action API.

mod client;
mod source;
pub mod time;

pub use client::WikidataClient;
pub use source::EntitySource;
