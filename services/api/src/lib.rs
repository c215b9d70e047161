mod cli;
mod commands;
mod infra;
mod pages;
mod routes;
mod server;

use pillar_review::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
