//! Career Explorer: interest normalization, combination listing, job fit scoring,
//! ranking, hybrid role suggestions and the HTTP surface over them.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod explore;
pub mod models;
pub mod routes;
pub mod state;
