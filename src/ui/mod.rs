//! Presentation layer for command output
//!
//! Results go to stdout; failures and progress go to stderr.

pub mod formatter;

pub use formatter::{
    display_app_details, display_app_line, display_failure, display_plan, display_status,
};
