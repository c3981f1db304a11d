use clap::Parser;
use std::path::Path;
use trade_desk::adapters::sample;
use trade_desk::config::{Command, FavoritesAction, QueryArgs};
use trade_desk::core::aggregate;
use trade_desk::core::{ConfigProvider, Provenance, Rows};
use trade_desk::domain::countries;
use trade_desk::utils::{logger, validation};
use trade_desk::{
    CliConfig, ComtradeClient, Credentials, FirmCatalog, FavoritesStore, QueryResolver, ResultSet,
    Session,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::info!("Starting trade-desk CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = validation::validate_url("api_endpoint", config.api_endpoint()) {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let favorites = FavoritesStore::new(config.favorites_path());

    match &config.command {
        Command::Countries => {
            for name in countries::supported_names() {
                println!("{:<16} {}", name, countries::resolve(name));
            }
        }
        Command::Favorites { action } => match action {
            FavoritesAction::List => {
                let entries = favorites.load_all();
                if entries.is_empty() {
                    println!("No favorites saved.");
                }
                for (i, fav) in entries.iter().enumerate() {
                    println!(
                        "{}. {} — {} {} ({:?})",
                        i + 1,
                        fav.label,
                        fav.country,
                        fav.query,
                        fav.kind
                    );
                }
            }
            FavoritesAction::Clear => {
                favorites.clear()?;
                println!("✅ Favorites cleared.");
            }
        },
        Command::Query(args) => {
            run_query(&config, args, &favorites).await?;
        }
    }

    Ok(())
}

async fn run_query(
    config: &CliConfig,
    args: &QueryArgs,
    favorites: &FavoritesStore,
) -> anyhow::Result<()> {
    let session = login(config);
    let request = args.to_request()?;

    let trade = ComtradeClient::new(config.api_endpoint(), config.timeout_secs());
    let firms = if Path::new(config.firms_path()).exists() {
        FirmCatalog::from_path(config.firms_path())?
    } else {
        tracing::debug!("firm file not found, using bundled demo catalog");
        FirmCatalog::bundled()
    };
    let resolver = QueryResolver::new(trade, firms, sample::bundled_trade_rows());

    let result = match resolver.resolve(&session, &request).await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("❌ Query failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    match result.provenance {
        Provenance::Live => {}
        Provenance::Sample => {
            eprintln!("⚠ Live data unavailable or disabled, showing sample data.")
        }
        Provenance::Empty => eprintln!("⚠ No matching rows, showing an empty result."),
    }

    println!("Total rows: {}", result.len());
    print_table(&result);

    let totals = aggregate::partner_totals(&result);
    if !totals.is_empty() {
        println!("\nTotal value by partner (USD):");
        for t in &totals {
            println!("{:<28} {:>16.2}  ({} rows)", t.partner, t.total, t.records);
        }
    }

    if let Some(dir) = &args.export_dir {
        let csv = trade_desk::export::to_csv(&result)?;
        let name = trade_desk::export::filename(request.country.as_deref(), request.year);
        let path = Path::new(dir).join(name);
        std::fs::create_dir_all(dir)?;
        std::fs::write(&path, csv)?;
        println!("📁 Exported to {}", path.display());
    }

    if let Some(label) = &args.save {
        favorites.append(request.to_favorite(label))?;
        println!("✅ Favorite saved: {}", label);
    }

    Ok(())
}

fn login(config: &CliConfig) -> Session {
    let creds = Credentials::resolve(config.secrets_path.as_deref().map(Path::new));
    let user = config.user.clone().unwrap_or_else(|| creds.user.clone());
    let password = config
        .password
        .clone()
        .unwrap_or_else(|| creds.password.clone());
    creds.login(&user, &password)
}

fn print_table(result: &ResultSet) {
    match &result.rows {
        Rows::Trade(rows) => {
            println!("{:<28} {:>16} {:>14} {:>8}", "partner", "value", "netWgt", "unit");
            for r in rows {
                println!(
                    "{:<28} {:>16.2} {:>14.1} {:>8}",
                    r.partner_desc, r.primary_value, r.net_wgt, r.qty_unit
                );
            }
        }
        Rows::Firms(rows) => {
            println!(
                "{:<24} {:<14} {:<14} {:<20} {:>14}",
                "firm", "country", "partner", "product", "value"
            );
            for r in rows {
                println!(
                    "{:<24} {:<14} {:<14} {:<20} {:>14.2}",
                    r.firm_name, r.country, r.partner_desc, r.product, r.value_usd
                );
            }
        }
    }
}
