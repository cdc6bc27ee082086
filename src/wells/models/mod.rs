//! models — user-facing response and well types.
//!
//! Purpose
//! -------
//! Expose the two types callers work with: [`WellResponse`], one pumping
//! well's effect on one observation target, and [`Well`], the fan-out of a
//! well across every configured target with name-keyed aggregation. Both
//! validate at construction and compute their series lazily, memoized, on
//! top of the event-superposition engine in
//! [`wells::core`](crate::wells::core).

pub mod response;
pub mod well;

pub use self::response::{ResponseKind, WellResponse};
pub use self::well::Well;
