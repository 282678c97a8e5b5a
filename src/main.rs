use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use budget_calc::cli::{handle_calc_command, CalcArgs, IncomeArgs};
use budget_calc::config::{paths::BudgetPaths, settings::Settings};
use budget_calc::logging::{init_tracing, LogTarget, LOG_ENV_VAR};

#[derive(Parser)]
#[command(
    name = "budget-calc",
    version,
    about = "Household budget calculator",
    long_about = "budget-calc turns two monthly incomes and an income-to-rent ratio \
                  into a recommended rent and a split of the rest across spending \
                  categories. Run without a command to open the interactive view."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui(IncomeArgs),

    /// Calculate a budget and print it
    Calc(CalcArgs),

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Tui(IncomeArgs::default()));

    // The TUI owns the terminal, so its logs go to a file
    let target = match command {
        Commands::Tui(_) => LogTarget::File,
        _ => LogTarget::Stderr,
    };
    init_tracing(target, &paths, &settings)?;

    match command {
        Commands::Tui(args) => {
            budget_calc::tui::run_tui(&settings, args.to_inputs(&settings))?;
        }
        Commands::Calc(args) => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            handle_calc_command(&args, &settings, &mut out)?;
        }
        Commands::Init => {
            paths.ensure_directories()?;
            settings.save(&paths)?;
            info!(path = %paths.settings_file().display(), "settings written");
            println!("Initialized budget-calc at: {}", paths.base_dir().display());
            println!("Edit {} to change the starting values.", paths.settings_file().display());
        }
        Commands::Config => {
            println!("budget-calc Configuration");
            println!("=========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Log file:       {}", paths.log_file().display());
            println!("Initialized:    {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Default income (you):     {}", settings.default_income1);
            println!("  Default income (partner): {}", settings.default_income2);
            println!("  Default rent ratio:       {}", settings.default_rent_ratio);
            println!("  Slider step:              {}", settings.slider_step);
            println!("  Show advanced on launch:  {}", settings.show_advanced);
            println!("  Log level:                {} (override with {})", settings.log_level, LOG_ENV_VAR);
        }
    }

    Ok(())
}
