//! The lookup pipeline: resolve candidates, keep the people, extract their
//! facts and format them for display.

pub mod extractor;
pub mod filter;
pub mod formatter;
mod lookup;
mod resolver;

pub use lookup::LookupService;
pub use resolver::EntityResolver;
