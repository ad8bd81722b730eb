use clap::Parser;
use contactos_etl::utils::error::ErrorSeverity;
use contactos_etl::utils::{logger, validation::Validate};
use contactos_etl::{CliConfig, ContactPipeline, EtlEngine, LocalStorage};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting contactos-etl");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = ContactPipeline::new(storage, config);
    let engine = EtlEngine::new(pipeline);

    match engine.run() {
        Ok(summary) => {
            tracing::info!(
                "Process completed: {} valid record(s) in {} batch file(s)",
                summary.total_contacts,
                summary.batch_files.len()
            );
            println!(
                "\n✅ Process completed. Total valid records: {}",
                summary.total_contacts
            );
            if !summary.batch_files.is_empty() {
                println!("📁 Batches saved to: {}", summary.output_path);
            }
        }
        Err(e) => {
            tracing::error!(
                "Pipeline failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }
}
