use std::io;
use tracing::error;
use library_catalog::catalog::controller::CatalogController;
use library_catalog::core::controller::AppState;
use library_catalog::core::library::LibraryError;
use library_catalog::core::repository::RepositoryStore;
use library_catalog::utils::logging::setup_tracing;

fn main() -> Result<(), LibraryError> {
    let state = AppState::new("dev", RepositoryStore::InMemory);
    setup_tracing(&state.config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut controller = CatalogController::new(&state, stdin.lock(), stdout.lock());
    controller.run().map_err(|err| {
        error!(branch = state.config.branch_id.as_str(), "catalog console stopped: {}", err);
        err
    })
}
