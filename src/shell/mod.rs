// Composition root for the travel service.
//
// - Read config from environment.
// - Instantiate the store and wire it into the use case handlers.
// - Expose the REST router and the GraphQL schema.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
