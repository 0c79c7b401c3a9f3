//! Dependency resolution for catalog applications
//!
//! - [`build_plan`]: dependency-first install order for one requested app
//! - [`dependents_of`]: reverse lookup used to protect installed dependents

pub mod graph;
pub mod plan;
pub mod sort;

pub use graph::dependents_of;
pub use plan::InstallPlan;
pub use sort::build_plan;
