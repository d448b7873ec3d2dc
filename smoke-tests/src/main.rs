use smoke_tests::observability::init_tracing;
use smoke_tests::{Prober, RunOutcome, Settings, Transcript};
use std::io::IsTerminal;
use tracing::warn;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(&settings.log_level, settings.log_json);

    let stdout = std::io::stdout();
    let color = stdout.is_terminal();
    let mut transcript = Transcript::new(stdout, color);

    // Login aborts and probe failures are part of the transcript, not the exit code.
    if let RunOutcome::Aborted(e) = Prober::new(settings).run(&mut transcript).await? {
        warn!("Run aborted at login: {}", e);
    }

    Ok(())
}
