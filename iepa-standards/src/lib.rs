//! iepa-standards library interface
//!
//! Standards catalog and goal alignment analysis for IEP goals. The binary
//! in `main.rs` is a thin command-line driver over these modules.

pub mod analyzer;
pub mod catalog;
pub mod models;

pub use analyzer::{validate_goal_text, GoalAlignmentAnalyzer};
pub use catalog::{StandardsCatalog, StateExtension};
pub use models::{AlignmentRequest, AlignmentResult, Domain, Standard, StandardMatch, Subject};
