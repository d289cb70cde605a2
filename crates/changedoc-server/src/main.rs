//! ChangeDoc server binary

use changedoc_core::logging_facility;
use changedoc_server::{server, AppState, Cli};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    logging_facility::init(cli.log_profile);

    let state = AppState::new(cli.build_advisory()?, cli.acquirer());
    server::run(state, cli.bind).await
}
