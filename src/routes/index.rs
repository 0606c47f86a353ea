use maud::{html, Markup};

use crate::layout::{header, layout};
use crate::route::Route;
use crate::sections::{features, footer, hero, showcase};

pub struct Index;

impl Route for Index {
    fn path(&self) -> &'static str {
        "/"
    }

    // Sections always render in this order; nothing is conditional.
    fn render(&self) -> Markup {
        layout(
            html! {
                (header())
                (hero())
                (features())
                (showcase())
                (footer())
            },
            None,
        )
    }
}
