//! Embedded content block
//!
//! Collaborator component the home page embeds between the action row and
//! the footer. Self-contained: it renders with zero arguments and has no
//! effect on the host page beyond its own markup.

use maud::{Markup, html};

/// Renders the supplementary content block
///
/// A short pitch for the language followed by a sample program. Bounded
/// static markup; the page only depends on this being renderable.
pub fn content() -> Markup {
    html! {
        section class="content" {
            p class="content-lead" {
                "clean. reads the way you think. no semicolons, no ceremony; "
                "whitespace is the syntax and the interpreter fits in a "
                "single file."
            }
            pre class="content-sample" {
                code {
                    "name = in: \"what should we call you?\"\n"
                    "out: \"hello, \" + name"
                }
            }
        }
    }
}
