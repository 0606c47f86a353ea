//! Core trait to define the pages of the site.
//!
//! Every page must implement the [`Route`] trait. Routes are then passed to
//! [`build_site()`](crate::build::build_site), through the [`routes!`] macro, to be built.
use maud::Markup;
use std::path::{Path, PathBuf};

pub trait Route {
    /// Clean URL of the route, e.g. `/`.
    fn path(&self) -> &'static str;

    /// Renders the full document for this route.
    ///
    /// Rendering is pure: it takes no input and cannot fail, so rendering the
    /// same route twice yields byte-identical markup.
    fn render(&self) -> Markup;

    /// File the route is written to inside the output directory.
    ///
    /// Clean URLs map to directories, e.g. `/` becomes `index.html` and
    /// `/contact` becomes `contact/index.html`.
    fn file_path(&self, output_dir: &Path) -> PathBuf {
        let trimmed = self.path().trim_matches('/');

        if trimmed.is_empty() {
            output_dir.join("index.html")
        } else {
            output_dir.join(trimmed).join("index.html")
        }
    }
}

/// Helps to define every route that should be built by [`build_site()`](crate::build::build_site).
macro_rules! routes {
    [$($route:expr),*] => {
        &[$(&$route),*]
    };
}

pub(crate) use routes;

#[cfg(test)]
mod tests {
    use super::*;
    use maud::html;

    struct Root;
    impl Route for Root {
        fn path(&self) -> &'static str {
            "/"
        }
        fn render(&self) -> Markup {
            html! { h1 { "root" } }
        }
    }

    struct Contact;
    impl Route for Contact {
        fn path(&self) -> &'static str {
            "/contact"
        }
        fn render(&self) -> Markup {
            html! { h1 { "contact" } }
        }
    }

    #[test]
    fn test_root_file_path() {
        assert_eq!(
            Root.file_path(Path::new("dist")),
            PathBuf::from("dist/index.html")
        );
    }

    #[test]
    fn test_nested_file_path() {
        assert_eq!(
            Contact.file_path(Path::new("dist")),
            PathBuf::from("dist/contact/index.html")
        );
    }
}
