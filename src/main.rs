use std::sync::Arc;

use dialog_prompt::actions::ActionRegistry;
use dialog_prompt::config::DialogConfig;
use dialog_prompt::dialog::{DialogService, WatsonClient};
use dialog_prompt::dispatch::Dispatcher;
use dialog_prompt::docs::DocumentTable;
use dialog_prompt::session::Session;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Credentials may live in a .env file next to the working directory
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        return Err(e.into());
    }

    // Initialize tracing (stderr, quiet by default so the prompt stays clean)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = DialogConfig::from_env().inspect_err(|_| {
        eprintln!("Error: dialog service credentials not set");
        eprintln!("  export CONVERSATION_USERNAME=... CONVERSATION_PASSWORD=... CONVERSATION_WORKSPACE_ID=...");
    })?;

    // ── Documentation links ─────────────────────────────────────────────
    let docs = Arc::new(DocumentTable::load(&config.docs_path).await?);
    if docs.is_empty() {
        tracing::warn!(path = %config.docs_path.display(), "Documentation table is empty");
    }

    // ── Actions ─────────────────────────────────────────────────────────
    let registry = Arc::new(ActionRegistry::with_builtins(docs));
    for (name, description) in registry.descriptions() {
        tracing::info!(action = %name, "{}", description);
    }
    tracing::info!("{} action(s) registered", registry.count());

    // ── Session ─────────────────────────────────────────────────────────
    let service: Arc<dyn DialogService> = Arc::new(WatsonClient::new(&config));
    let mut session = Session::new(service, Dispatcher::new(registry));

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    session.run(stdin, &mut stdout).await?;

    Ok(())
}
