pub mod competition;
pub mod config;
pub mod dates;
pub mod error;
pub mod filter;
pub mod handler;
pub mod model;
pub mod picks;
pub mod search;
pub mod snapshot;
