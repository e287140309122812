//! Core logic for the grocery route planner: planner strategies, the
//! in-memory repository, the route service that glues them together, and
//! the sample-data generator.
//!
//! Everything here is synchronous and side-effect-free (UUID generation
//! for new entities is the one source of non-determinism). A host may
//! call [`planner::RoutePlanner::plan`] concurrently from many requests;
//! planning only reads its inputs and allocates fresh output.

pub mod planner;
pub mod repo;
pub mod route;
pub mod seed;
