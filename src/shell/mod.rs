// Composition root for the todos service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the store and wire it into the REST and GraphQL adapters.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
