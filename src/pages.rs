//! Page generation modules
//!
//! One module per generated page. Each page builds on the shared layout
//! wrapper and components.

pub mod home;
