//! Planner registry -- a named collection of available planning strategies.
//!
//! The registry allows callers to look up planners by name at runtime
//! (e.g. when a route request carries `planner = "linear"`). Unknown
//! names fail loudly; lookup never silently falls back to a default.

use std::collections::HashMap;

use super::linear::LinearAislePlanner;
use super::trait_def::{PlannerError, RoutePlanner};

/// Strategy name used when a request does not ask for one.
pub const DEFAULT_PLANNER: &str = "linear";

/// A collection of registered [`RoutePlanner`] strategies, keyed by name.
///
/// # Example
///
/// ```
/// use trolley_core::planner::{LinearAislePlanner, PlannerRegistry};
///
/// let mut registry = PlannerRegistry::new();
/// registry.register(LinearAislePlanner::new());
/// assert_eq!(registry.get("linear").unwrap().name(), "linear");
/// ```
#[derive(Default)]
pub struct PlannerRegistry {
    planners: HashMap<String, Box<dyn RoutePlanner>>,
}

impl PlannerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in strategies registered
    /// (currently just `linear`).
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(LinearAislePlanner::new());
        registry
    }

    /// Register a planning strategy.
    ///
    /// The planner is stored under the name returned by
    /// [`RoutePlanner::name`]. If a planner with the same name is already
    /// registered, it is replaced and the old one is returned.
    pub fn register(&mut self, planner: impl RoutePlanner + 'static) -> Option<Box<dyn RoutePlanner>> {
        let name = planner.name().to_string();
        self.planners.insert(name, Box::new(planner))
    }

    /// Look up a planner by name.
    pub fn get(&self, name: &str) -> Option<&dyn RoutePlanner> {
        self.planners.get(name).map(|b| b.as_ref())
    }

    /// Look up a planner by name, or the default when `None`.
    ///
    /// Unknown names are an error, never a fallback.
    pub fn resolve(&self, name: Option<&str>) -> Result<&dyn RoutePlanner, PlannerError> {
        let name = name.unwrap_or(DEFAULT_PLANNER);
        self.get(name)
            .ok_or_else(|| PlannerError::UnknownKind(name.to_string()))
    }

    /// List the names of all registered planners.
    ///
    /// The order is not guaranteed (HashMap iteration order).
    pub fn list(&self) -> Vec<&str> {
        self.planners.keys().map(|s| s.as_str()).collect()
    }

    /// Return the number of registered planners.
    pub fn len(&self) -> usize {
        self.planners.len()
    }

    /// Return `true` if no planners are registered.
    pub fn is_empty(&self) -> bool {
        self.planners.is_empty()
    }
}

impl std::fmt::Debug for PlannerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlannerRegistry")
            .field("planners", &self.planners.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Resolve a planner from the built-in strategies.
///
/// `None` means the default (`linear`). Convenience for callers that
/// don't hold a long-lived registry.
pub fn get_planner(kind: Option<&str>) -> Result<Box<dyn RoutePlanner>, PlannerError> {
    match kind.unwrap_or(DEFAULT_PLANNER) {
        "linear" => Ok(Box::new(LinearAislePlanner::new())),
        other => Err(PlannerError::UnknownKind(other.to_string())),
    }
}
