// Composition root.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the in memory adapters, optionally from a seed document.
// - Wire adapters into the use case handlers and expose them over HTTP and GraphQL.

pub mod auth;
pub mod config;
pub mod error;
pub mod graphql;
pub mod http;
pub mod path;
pub mod state;
