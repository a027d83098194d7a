//! Data models for missions, progress and points of interest.
//!
//! Display implementations for these models live in
//! [`crate::display::models`] so that data structures and presentation stay
//! separate.
//!
//! # Examples
//!
//! ```rust
//! use cidade_core::models::{MissionDefinition, MissionKind, MissionSummary};
//!
//! let mission = MissionDefinition {
//!     id: 1,
//!     kind: MissionKind::Daily,
//!     title: "Hidratação".to_string(),
//!     description: "Beba água ao longo do dia".to_string(),
//!     icon: "water".to_string(),
//!     points: 10,
//!     tasks: vec!["Beber 2 litros de água".to_string()],
//!     development_ids: None,
//! };
//!
//! // No stored progress yet: the summary starts from a fresh record
//! let summary = MissionSummary::new(mission, None);
//! assert_eq!(summary.percent, 0);
//! println!("{}", summary);
//! ```

pub mod claim;
pub mod filters;
pub mod kind;
pub mod mission;
pub mod poi;
pub mod progress;
pub mod summary;


pub use claim::ClaimReceipt;
pub use filters::{CategoryFilter, ALL_CATEGORIES};
pub use kind::{MissionKind, MissionState};
pub use mission::MissionDefinition;
pub use poi::PointOfInterest;
pub use progress::MissionProgress;
pub use summary::MissionSummary;
