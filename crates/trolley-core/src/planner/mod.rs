//! Planner strategy interface for converting a store and a list of items
//! into an ordered shopping route.
//!
//! This module defines the [`RoutePlanner`] trait that every planning
//! strategy implements, plus the [`PlannerRegistry`] for runtime lookup
//! by strategy name.
//!
//! # Architecture
//!
//! ```text
//! Route service
//!     |
//!     v
//! get_planner(Some("linear")) --> Box<dyn RoutePlanner>
//!     |                                |
//!     |   plan(&store, &items) --------+
//!     |        |
//!     |        v
//!     |   Vec<RouteStep>   (ascending aisle order)
//! ```

pub mod linear;
pub mod registry;
pub mod trait_def;

// Re-export the primary public API at the module level.
pub use linear::LinearAislePlanner;
pub use registry::{PlannerRegistry, get_planner};
pub use trait_def::{PlanError, PlannerError, RoutePlanner};
