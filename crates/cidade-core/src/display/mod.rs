//! Display formatting wrappers and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! this module adds newtype wrappers for collections and operation results
//! so that the CLI and the MCP server print identical markdown.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Formatted     │
//! │ (MissionSummary,│───▶│ Result Types    │───▶│    Output       │
//! │  PointOfInter.) │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (MissionSummaries,
//!   PointsOfInterest)
//! - [`results`]: Operation result types (CreateResult, UpdateResult,
//!   ClaimResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! ```rust
//! use cidade_core::display::OperationStatus;
//!
//! let done = OperationStatus::success("Points of interest imported".to_string());
//! assert_eq!(done.to_string(), "Success: Points of interest imported\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{MissionSummaries, PointsOfInterest};
pub use datetime::LocalDateTime;
pub use results::{ClaimResult, CreateResult, UpdateResult};
pub use status::OperationStatus;
