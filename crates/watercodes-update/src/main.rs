mod config;
mod error;
mod update;

use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use update::UpdateService;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = Config::from_env()?;
    info!(
        data_path = %config.data_path,
        incoming_path = %config.incoming_path,
        csv = config.csv_path.is_some(),
        "configuration loaded"
    );

    let summary = UpdateService::new(config).run()?;
    info!(
        candidates = summary.candidates,
        added = summary.added_json,
        added_csv = ?summary.added_csv,
        "update completed"
    );
    Ok(())
}
