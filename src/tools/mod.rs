//! Concrete web-search backends behind the
//! [`WebSearch`](crate::ports::WebSearch) port.

pub mod search;

pub use search::DuckDuckGoSearch;
