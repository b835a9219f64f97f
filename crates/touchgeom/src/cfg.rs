//! Tolerance and capacity defaults (internal).
//!
//! Policy
//! - Defaults are fixed constants; the kernel has no runtime configuration.
//!   Callers that need a different touch capacity pass it explicitly to
//!   `TouchSet::with_capacity`.

/// Relative slack for enclosing-circle membership: `d² <= r² (1 + eps)`.
/// Keeps boundary points (diameter endpoints, circumcircle vertices) inside
/// despite rounding in the center computation.
pub(crate) const CIRCLE_REL_EPS: f64 = 1e-12;

/// Touch slots allocated when no device maximum is known.
pub const DEFAULT_MAX_TOUCHES: usize = 10;
