//! Style-binding namespaces for page components.
//!
//! Each component owns one namespace: a fixed set of semantic class names
//! scoped by a component prefix. Markup refers to bindings through these
//! structs, so a missing binding is a compile error instead of a silently
//! unstyled element. The visual rules for each namespace live in the CSS
//! files bundled by the assets module.

/// Class bindings for the home page namespace.
pub struct HomeStyles {
    pub container: &'static str,
    pub logo: &'static str,
    pub subtitle: &'static str,
    pub buttons: &'static str,
    pub button: &'static str,
}

/// Class bindings for the footer namespace.
pub struct FooterStyles {
    pub container: &'static str,
    pub logo: &'static str,
}

/// Home page style namespace. Visual rules in `assets/page-home.css`.
pub const HOME: HomeStyles = HomeStyles {
    container: "home-container",
    logo: "home-logo",
    subtitle: "home-subtitle",
    buttons: "home-buttons",
    button: "home-button",
};

/// Footer style namespace. Visual rules in `assets/components/footer.css`.
pub const FOOTER: FooterStyles = FooterStyles {
    container: "footer-container",
    logo: "footer-logo",
};
