//! Site footer component

use maud::{Markup, html};

use crate::styles::FOOTER;

/// Renders the site footer
///
/// Two fixed text lines: the copyright line, then the author line. No
/// inputs, no variability.
pub fn footer() -> Markup {
    html! {
        footer class=(FOOTER.container) {
            div class=(FOOTER.logo) { "clean. @2024" }
            div class=(FOOTER.logo) { "konrad kapusta" }
        }
    }
}
