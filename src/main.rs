use build::{build_site, BuildOptions, BuildOutput};
use route::routes;

mod build;
mod catalog;
mod errors;
mod layout;
mod logging;
mod route;
mod routes;
mod sections;

use routes::Index;

fn main() -> Result<BuildOutput, errors::BuildError> {
    logging::init_logging();

    build_site(
        routes![Index],
        &BuildOptions {
            ..Default::default()
        },
    )
}
