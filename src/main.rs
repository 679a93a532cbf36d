use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::path::PathBuf;
use stripe_checkout::domain::currency::{
    get_amount_for_stripe, get_amount_from_stripe, get_currency_for_stripe,
    get_currency_from_stripe,
};
use stripe_checkout::domain::payment::PaymentInformation;
use stripe_checkout::infrastructure::config_file;
use stripe_checkout::interfaces::html::CheckoutWidget;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the Stripe Checkout script tag for a payment
    Widget {
        /// Gateway configuration JSON file
        #[arg(long)]
        config: PathBuf,
        #[arg(long)]
        amount: Decimal,
        #[arg(long)]
        currency: String,
        #[arg(long)]
        email: String,
        /// Extra attribute as key=value; may be repeated
        #[arg(long = "attr", value_parser = parse_attr)]
        attrs: Vec<(String, String)>,
    },
    /// Convert a decimal amount into Stripe's integer amount
    ToStripe {
        #[arg(allow_hyphen_values = true)]
        amount: Decimal,
        currency: String,
    },
    /// Convert a Stripe integer amount back into a decimal amount
    FromStripe {
        #[arg(allow_hyphen_values = true)]
        amount: i64,
        currency: String,
    },
}

fn parse_attr(raw: &str) -> std::result::Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected key=value, got `{raw}`"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Widget {
            config,
            amount,
            currency,
            email,
            attrs,
        } => {
            let config = config_file::load(&config).into_diagnostic()?;
            let payment = PaymentInformation::new(amount, currency, email);
            let widget = CheckoutWidget::new(payment, config.connection_params).with_attrs(attrs);
            println!("{}", widget.render().into_diagnostic()?);
        }
        Command::ToStripe { amount, currency } => {
            let units = get_amount_for_stripe(amount, &currency).into_diagnostic()?;
            println!("{} {}", units, get_currency_for_stripe(&currency));
        }
        Command::FromStripe { amount, currency } => {
            let decimal = get_amount_from_stripe(amount, &currency);
            println!("{} {}", decimal, get_currency_from_stripe(&currency));
        }
    }

    Ok(())
}
