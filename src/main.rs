//! resale-kit - Listing writer and flip calculator for secondhand resellers

use anyhow::Result;
use clap::{Parser, Subcommand};
use resale_kit::commands::{ListingArgs, ListingCommand, ProfitArgs, ProfitCommand};
use resale_kit::config::{Config, OutputFormat};
use resale_kit::listing::{Condition, Platform};
use resale_kit::profit::{FeePreset, ShippingMethod};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "resale-kit",
    version,
    about = "Listing writer and flip calculator for resellers",
    long_about = "Builds platform-tuned listing titles and descriptions, and estimates profit after fees and shipping."
)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format (text, json, markdown, csv)
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build listing titles and a description
    #[command(alias = "l")]
    Listing {
        /// Read the full listing input from a JSON file
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Target platform
        #[arg(short, long)]
        platform: Option<Platform>,

        /// Brand name
        #[arg(long)]
        brand: Option<String>,

        /// Item name
        #[arg(long)]
        item: Option<String>,

        /// Model or part number
        #[arg(long)]
        model: Option<String>,

        /// Condition (new, open-box, like-new, good, fair, poor, parts)
        #[arg(long)]
        condition: Option<Condition>,

        /// Category, used for the description and photo checklist
        #[arg(long)]
        category: Option<String>,

        /// Quantity available
        #[arg(short, long)]
        qty: Option<u32>,

        /// Feature line (repeatable)
        #[arg(long = "feature")]
        features: Vec<String>,

        /// Defect or note line (repeatable)
        #[arg(long = "defect")]
        defects: Vec<String>,

        /// Skip the condition boilerplate
        #[arg(long)]
        no_condition_template: bool,

        /// Skip the parts/repair note
        #[arg(long)]
        no_parts_note: bool,

        /// Include the photo checklist for the category
        #[arg(long)]
        checklist: bool,

        /// Build the description around title variant N (1 = first)
        #[arg(short, long, value_name = "N")]
        title: Option<usize>,
    },

    /// Estimate profit and flip score
    #[command(alias = "p")]
    Profit {
        /// Read the full profit input from a JSON file
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Sale price
        #[arg(long, required_unless_present = "input")]
        price: Option<f64>,

        /// Cost of goods
        #[arg(long)]
        cogs: Option<f64>,

        /// Packaging cost
        #[arg(long)]
        packaging: Option<f64>,

        /// Manual shipping cost (skips the estimate)
        #[arg(long)]
        shipping: Option<f64>,

        /// Shipping method for the estimate (ground, priority, pickup, other)
        #[arg(short, long)]
        method: Option<ShippingMethod>,

        /// Parcel weight in pounds
        #[arg(short, long)]
        weight: Option<f64>,

        /// Platform fee percent
        #[arg(long)]
        platform_fee: Option<f64>,

        /// Payment processing percent
        #[arg(long)]
        processing_pct: Option<f64>,

        /// Payment processing fixed fee
        #[arg(long)]
        processing_fixed: Option<f64>,

        /// Fee preset (ebay, facebook, local-pickup, custom)
        #[arg(long)]
        preset: Option<FeePreset>,
    },

    /// List fee presets
    Presets,

    /// List supported platforms
    Platforms,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    if let Some(format) = cli.format {
        config.format = format;
    }

    match cli.command {
        Commands::Listing {
            input,
            platform,
            brand,
            item,
            model,
            condition,
            category,
            qty,
            features,
            defects,
            no_condition_template,
            no_parts_note,
            checklist,
            title,
        } => {
            let args = ListingArgs {
                input,
                platform,
                brand,
                item,
                model,
                condition,
                category,
                quantity: qty,
                features,
                defects,
                no_condition_template,
                no_parts_note,
                checklist,
                title,
            };

            let cmd = ListingCommand::new(config);
            println!("{}", cmd.execute(&args)?);
        }

        Commands::Profit {
            input,
            price,
            cogs,
            packaging,
            shipping,
            method,
            weight,
            platform_fee,
            processing_pct,
            processing_fixed,
            preset,
        } => {
            let args = ProfitArgs {
                input,
                preset,
                sale_price: price,
                cogs,
                packaging_cost: packaging,
                shipping_cost: shipping,
                shipping_method: method,
                weight_lb: weight,
                platform_fee_pct: platform_fee,
                processing_pct,
                processing_fixed,
            };

            let cmd = ProfitCommand::new(config);
            println!("{}", cmd.execute(&args)?);
        }

        Commands::Presets => {
            println!("Fee presets:\n");
            println!(
                "{:<14} {:<40} {:>8} {:>8} {:>7} {:<10}",
                "Code", "Name", "Fee %", "Proc %", "Fixed", "Shipping"
            );
            println!("{:-<14} {:-<40} {:->8} {:->8} {:->7} {:-<10}", "", "", "", "", "", "");

            for preset in FeePreset::all() {
                let s = preset.schedule();
                println!(
                    "{:<14} {:<40} {:>8.2} {:>8.2} {:>7.2} {:<10}",
                    preset.to_string(),
                    preset.label(),
                    s.platform_fee_pct,
                    s.processing_pct,
                    s.processing_fixed,
                    s.shipping_method.to_string()
                );
            }
        }

        Commands::Platforms => {
            println!("Supported platforms:\n");
            println!("{:<22} {:<24} {:>11}", "Code", "Name", "Title limit");
            println!("{:-<22} {:-<24} {:->11}", "", "", "");

            for platform in Platform::all() {
                println!(
                    "{:<22} {:<24} {:>11}",
                    platform.to_string(),
                    platform.name(),
                    platform.title_limit()
                );
            }
        }
    }

    Ok(())
}
