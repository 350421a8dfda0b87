use dotenvy::dotenv;
use moneybook::{config, store::Ledger};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> moneybook::errors::Result<()> {
    // Initialize tracing as early as possible.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Env vars can also be set externally, so a missing .env is fine.
    dotenv().ok();

    let app_config = config::load_app_configuration()
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;
    info!("Using database at {}", app_config.database_path);

    if let Some(parent) = std::path::Path::new(&app_config.database_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let ledger = Ledger::open(&app_config.database_path)
        .await
        .inspect_err(|e| error!("Failed to open ledger: {}", e))?;

    let summary = ledger.summary().await?;
    let transactions = ledger.transactions().await?;
    let money_boxes = ledger.money_boxes().await?;
    let currency = ledger.currency().await?;

    info!(
        "{} transactions, {} money boxes. Balance: {}{:.2} (income {}{:.2}, expense {}{:.2})",
        transactions.len(),
        money_boxes.len(),
        currency.symbol,
        summary.balance,
        currency.symbol,
        summary.incomes,
        currency.symbol,
        summary.expenses,
    );

    Ok(())
}
