use clap::Parser;
use staff_setup_guide::utils::{logger, validation::Validate};
use staff_setup_guide::{CliConfig, GuideError, InstructionPrinter, TomlConfig};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!("❌ Printing the setup guide failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }
}

fn run(config: &CliConfig) -> Result<(), GuideError> {
    let printer = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading staff accounts from: {}", path);
            let accounts = TomlConfig::from_file(path)?;
            accounts.validate()?;
            InstructionPrinter::new(&accounts)?
        }
        None => InstructionPrinter::default(),
    };

    printer.print()?;
    tracing::debug!("Guide printed for {} accounts", printer.accounts().len());
    Ok(())
}
