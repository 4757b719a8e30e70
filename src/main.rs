use color_eyre::eyre::Result;
use coursesched_shell::config::ShellConfig;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ShellConfig::from_env()?;

    // Logs go to stderr, shell output to stdout
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!(data_file = %config.data_file.display(), "Starting course scheduler");

    coursesched_shell::start_shell(config).await?;

    Ok(())
}
