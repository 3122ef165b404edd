//! Reusable HTML components for page generation
//!
//! This module provides the Maud component functions the landing page
//! composes. Every component is a pure, input-less render unit; the page
//! only relies on each one being renderable with zero arguments.

pub mod content;
pub mod footer;
pub mod layout;
