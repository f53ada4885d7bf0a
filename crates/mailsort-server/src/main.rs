//! MailSort — email triage server.

use std::path::PathBuf;
use std::sync::Arc;

use mailsort_core::MailSortConfig;
use mailsort_remote::RemoteConfig;
use mailsort_server::{build_router, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn build_state() -> AppState {
    let config = MailSortConfig::from_env();
    let remote = RemoteConfig::load(&config.remote_config_file);
    AppState::new(config, remote)
}

/// Classify one file and print the outcome as JSON.
async fn classify_file(path: PathBuf) -> anyhow::Result<()> {
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("")
        .to_string();
    let data = std::fs::read(&path)?;
    let text = mailsort_extract::extract_text(&filename, &data)?;

    let state = build_state();
    let outcome = mailsort_classify::analyze(
        state.classifier.as_ref(),
        &text,
        state.config.min_message_chars,
    )
    .await?;

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    // Handle CLI subcommands
    if args.len() > 1 {
        match args[1].as_str() {
            "classify" => {
                if args.len() < 3 {
                    eprintln!("Usage: mailsort classify <file.txt|file.pdf>");
                    std::process::exit(1);
                }
                return classify_file(PathBuf::from(&args[2])).await;
            }
            "--help" | "-h" | "help" => {
                println!("MailSort — classifies emails as Produtivo or Improdutivo");
                println!();
                println!("Usage: mailsort [command]");
                println!();
                println!("Commands:");
                println!("  (none)                   Start the server");
                println!("  classify <file>          Classify a .txt or .pdf file and print JSON");
                println!("  help                     Show this help message");
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'mailsort help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    let state = Arc::new(build_state());
    let port = state.config.port;
    info!(
        "Remote classification {}",
        if state.remote_active() { "enabled" } else { "disabled" }
    );

    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("MailSort server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
