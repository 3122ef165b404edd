//! Landing page generation

use maud::{Markup, html};

use crate::components::content::content;
use crate::components::footer::footer;
use crate::components::layout::{PAGE_META, page_wrapper};
use crate::config::DownloadAction;
use crate::styles::HOME;

/// Absolute URL of the language's source repository.
pub const REPOSITORY_URL: &str = "https://github.com/konradekk14/clean-project";

/// Generates the landing page HTML
///
/// Produces the fixed visual tree: container, title, subtitle, action row,
/// embedded content block, footer. The action row holds exactly two
/// actionable elements: the repository link (opened in a new browsing
/// context without referrer or opener access) and the configured download
/// action.
///
/// # Arguments
///
/// * `action`: Configured form of the download action
///
/// # Returns
///
/// Complete HTML markup for the landing page
pub fn generate(action: &DownloadAction) -> Markup {
    page_wrapper(
        &PAGE_META,
        &["assets/home.css"],
        html! {
            div class=(HOME.container) {
                h2 class=(HOME.logo) { "clean." }
                h3 class=(HOME.subtitle) { "the minimalist programming language" }

                div class=(HOME.buttons) {
                    a href=(REPOSITORY_URL) class=(HOME.button) target="_blank" rel="noopener noreferrer" {
                        "github"
                    }
                    @match action {
                        DownloadAction::Asset { target } => {
                            a href=(target) class=(HOME.button) download {
                                "download"
                            }
                        },
                        DownloadAction::Button => {
                            button class=(HOME.button) type="button" {
                                "download"
                            }
                        }
                    }
                }

                (content())
                (footer())
            }
        },
    )
}
