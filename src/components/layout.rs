//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

/// Document head metadata surfaced to the hosting page.
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
}

/// Head metadata for the landing page.
pub const PAGE_META: PageMeta = PageMeta {
    title: "clean.",
    description: "the clean. programming lang",
};

/// Wraps page content with standard HTML structure
///
/// Provides consistent DOCTYPE, html, head, and body structure for any
/// generated page. The wrapper handles viewport configuration, charset,
/// head metadata, and stylesheet loading while the caller provides the
/// page-specific body content.
///
/// # Arguments
///
/// * `meta`: Title and description for the document head
/// * `stylesheets`: Array of CSS file paths to include
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(meta: &PageMeta, stylesheets: &[&str], body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(meta.description);
                title { (meta.title) }
                @for stylesheet in stylesheets {
                    link rel="stylesheet" href=(stylesheet);
                }
            }
            body {
                (body)
            }
        }
    }
}
