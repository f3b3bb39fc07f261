mod cli;
mod infra;
mod query;
mod routes;
mod server;

use profile_intake::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
