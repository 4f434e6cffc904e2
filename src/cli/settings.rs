//! Settings and onboarding CLI commands

use clap::Subcommand;

use crate::display::format_settings;
use crate::error::{PocketError, PocketResult};
use crate::services::LedgerService;
use crate::storage::Storage;

/// Currency symbols offered during onboarding
pub const SUPPORTED_CURRENCIES: [&str; 5] = ["Rs", "$", "€", "£", "₹"];

/// Settings subcommands
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show current settings
    Show,
    /// Set the monthly budget
    Budget {
        /// Budget amount (e.g., "1500")
        amount: String,
    },
    /// Set the currency symbol
    Currency {
        /// One of the listed symbols, or any custom one
        symbol: String,
    },
    /// List the suggested currency symbols
    Currencies,
}

pub fn handle_settings_command(storage: &Storage, cmd: SettingsCommands) -> PocketResult<()> {
    let service = LedgerService::new(storage);

    match cmd {
        SettingsCommands::Show => {
            print!("{}", format_settings(&storage.settings.snapshot()?));
        }
        SettingsCommands::Budget { amount } => {
            let value = parse_budget(&amount)?;
            service.set_budget(value)?;
            println!("Budget set to {}{:.2}", service.currency()?, value);
        }
        SettingsCommands::Currency { symbol } => {
            service.set_currency(&symbol)?;
            println!("Currency set to {}", service.currency()?);
        }
        SettingsCommands::Currencies => {
            for symbol in SUPPORTED_CURRENCIES {
                println!("{}", symbol);
            }
        }
    }

    Ok(())
}

/// Record the initial budget and currency and mark onboarding done
pub fn handle_onboard(
    storage: &Storage,
    budget: Option<String>,
    currency: Option<String>,
) -> PocketResult<()> {
    let service = LedgerService::new(storage);
    let budget = budget.as_deref().map(parse_budget).transpose()?;

    service.complete_onboarding(budget, currency.as_deref())?;

    println!("Onboarding complete.");
    println!(
        "  Budget:   {}{:.2}",
        service.currency()?,
        service.budget()?
    );
    println!("  Currency: {}", service.currency()?);
    if !service.is_logged_in()? {
        println!();
        println!("Next: pocket register <username>");
    }
    Ok(())
}

fn parse_budget(s: &str) -> PocketResult<f64> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .ok_or_else(|| PocketError::Validation(format!("Please enter a valid budget: '{}'", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_budget() {
        assert_eq!(parse_budget(" 1500 ").unwrap(), 1500.0);
        assert_eq!(parse_budget("0").unwrap(), 0.0);
        assert!(parse_budget("-1").is_err());
        assert!(parse_budget("lots").is_err());
        assert!(parse_budget("inf").is_err());
    }
}
