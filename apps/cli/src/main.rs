//! # shopkit CLI
//!
//! ```text
//! shopkit [--config shop.toml] <command>
//!
//!   coupons                         list the coupon catalog
//!   discount <price> <code>         apply a coupon
//!   validate-user <username> <age>  check a sign-up form
//!   price-in-range <p> <min> <max>  inclusive range check
//!   username <name>                 account-name rule
//!   can-drive <age> <country>       driving-age rule
//!   online                          business-hours check
//!   fizz-buzz <n>
//! ```

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use shopkit_core::Money;
use shopkit_services::ShopConfig;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Storefront rules from the command line
#[derive(Parser)]
#[command(name = "shopkit", version)]
#[command(about = "Run shopkit's storefront rules from the command line", long_about = None)]
struct Cli {
    /// Path to shop.toml (defaults to the platform config directory)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the coupon catalog
    Coupons,
    /// Apply a coupon code to a price (e.g. 100 or 12.50)
    Discount {
        #[arg(allow_negative_numbers = true)]
        price: Money,
        code: String,
    },
    /// Validate a sign-up form
    ValidateUser { username: String, age: i64 },
    /// Check that a price lies within [min, max]
    PriceInRange {
        #[arg(allow_negative_numbers = true)]
        price: Money,
        #[arg(allow_negative_numbers = true)]
        min: Money,
        #[arg(allow_negative_numbers = true)]
        max: Money,
    },
    /// Check an account name against the 5-15 character rule
    Username { name: String },
    /// Check the minimum driving age for a country
    CanDrive { age: u32, country: String },
    /// Report whether the shop is open right now
    Online,
    /// Fizz, Buzz or the number itself
    FizzBuzz { n: u32 },
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = ShopConfig::load(cli.config)?;
    debug!(coupons = config.coupons.coupons().len(), "Configuration loaded");

    let output = match cli.command {
        Command::Coupons => commands::coupons(&config),
        Command::Discount { price, code } => commands::discount(&config, price, &code)?,
        Command::ValidateUser { username, age } => commands::validate_user(&username, age)?,
        Command::PriceInRange { price, min, max } => commands::price_in_range(price, min, max),
        Command::Username { name } => commands::username(&name),
        Command::CanDrive { age, country } => commands::can_drive(&config, age, &country)?,
        Command::Online => commands::online(&config),
        Command::FizzBuzz { n } => shopkit_core::intro::fizz_buzz(n),
    };

    println!("{}", output);
    Ok(())
}

/// Logs go to stderr so command output stays clean on stdout.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,shopkit=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_prices_parse_as_values() {
        let cli = Cli::try_parse_from(["shopkit", "discount", "-1", "SAVE10"]).unwrap();
        match cli.command {
            Command::Discount { price, code } => {
                assert_eq!(price, Money::from_cents(-100));
                assert_eq!(code, "SAVE10");
            }
            _ => panic!("expected the discount command"),
        }

        let cli = Cli::try_parse_from(["shopkit", "price-in-range", "-5", "-10", "-0.50"]).unwrap();
        match cli.command {
            Command::PriceInRange { price, min, max } => {
                assert_eq!(price.cents(), -500);
                assert_eq!(min.cents(), -1000);
                assert_eq!(max.cents(), -50);
            }
            _ => panic!("expected the price-in-range command"),
        }
    }

    #[test]
    fn test_negative_price_reaches_the_discount_rule() {
        let cli = Cli::try_parse_from(["shopkit", "discount", "-1", "SAVE10"]).unwrap();
        let Command::Discount { price, code } = cli.command else {
            panic!("expected the discount command");
        };
        let err = commands::discount(&ShopConfig::default(), price, &code).unwrap_err();
        assert!(err.to_string().starts_with("Invalid price"));
    }
}
