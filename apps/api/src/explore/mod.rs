// Exploration engine: interest normalization, combination enumeration, fit scoring,
// ranking, hybrid-role rules and the interest ↔ job graph.
// Everything here is synchronous and pure; handlers wrap it for the HTTP surface.

pub mod combinations;
pub mod fit_scoring;
pub mod graph;
pub mod handlers;
pub mod hybrid;
pub mod normalize;
pub mod pipeline;
pub mod ranking;
pub mod weights;
