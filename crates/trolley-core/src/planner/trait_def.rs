//! The `RoutePlanner` trait -- the strategy interface for route planning.
//!
//! Each planning strategy (currently only [`super::LinearAislePlanner`])
//! implements this trait. The trait is intentionally object-safe so it
//! can be stored as `Box<dyn RoutePlanner>` in the
//! [`super::PlannerRegistry`].

use thiserror::Error;

use trolley_model::{Item, RouteStep, Store};

/// A planning precondition was violated by the caller.
///
/// These indicate a programming or input error, never a transient
/// condition: they are synchronous and non-retryable, and map to
/// 400-class responses when surfaced by a hosting API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The store value is not structurally valid (e.g. an aisle number
    /// outside 1..=20).
    #[error("invalid store provided: {reason}")]
    InvalidStore { reason: String },

    /// An item in the input is not a valid entity.
    #[error("invalid items provided: {reason}")]
    InvalidItems { reason: String },
}

/// Errors from planner lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlannerError {
    /// The requested strategy name is not registered.
    #[error("unknown planner type: {0}")]
    UnknownKind(String),
}

/// Strategy interface for turning a store layout and a list of items
/// into an ordered sequence of route steps.
///
/// Implementations must be pure over their inputs: read `store` and
/// `items`, allocate fresh [`RouteStep`] values, mutate nothing. That
/// makes concurrent planning calls over shared inputs safe without
/// coordination.
pub trait RoutePlanner: Send + Sync {
    /// Strategy name used for registry lookup (e.g. "linear").
    fn name(&self) -> &str;

    /// Plan a route through `store` collecting every item in `items`.
    ///
    /// Returns one step per aisle that has items to collect, ordered by
    /// ascending aisle number. Items whose category no aisle stocks are
    /// still included; see the concrete strategy for where they land.
    fn plan(&self, store: &Store, items: &[Item]) -> Result<Vec<RouteStep>, PlanError>;
}

impl std::fmt::Debug for dyn RoutePlanner + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutePlanner")
            .field("name", &self.name())
            .finish()
    }
}
