use book_gateway::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let _logger = book_gateway::infra::logging::init_logging(&config.log_level)?;

    book_gateway::interface::stdio::run(config).await
}
