mod features;
mod footer;
mod hero;
mod showcase;

pub use features::features;
pub use footer::footer;
pub use hero::hero;
pub use showcase::showcase;
