//! Profit command implementation.

use crate::config::Config;
use crate::format::Formatter;
use crate::profit::{compute_profit, FeePreset, ProfitInput, ShippingMethod};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Numbers collected from the command line. Anything unset keeps the preset or file value.
#[derive(Debug, Clone, Default)]
pub struct ProfitArgs {
    /// JSON file holding a full profit input
    pub input: Option<PathBuf>,
    pub preset: Option<FeePreset>,
    pub sale_price: Option<f64>,
    pub cogs: Option<f64>,
    pub packaging_cost: Option<f64>,
    /// Manual shipping cost; skips the estimate
    pub shipping_cost: Option<f64>,
    pub shipping_method: Option<ShippingMethod>,
    pub weight_lb: Option<f64>,
    pub platform_fee_pct: Option<f64>,
    pub processing_pct: Option<f64>,
    pub processing_fixed: Option<f64>,
}

/// Runs a profit check.
pub struct ProfitCommand {
    config: Config,
}

impl ProfitCommand {
    /// Creates a new profit command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Computes the profit breakdown and returns formatted output.
    pub fn execute(&self, args: &ProfitArgs) -> Result<String> {
        let input = self.resolve_input(args)?.clamped();
        info!("Checking flip at {:.2}", input.sale_price);

        let result = compute_profit(&input);
        if !result.is_profitable() {
            warn!("Sale at {:.2} does not cover costs ({:.2})", input.sale_price, result.total_cost);
        }

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_profit(&input, &result))
    }

    /// Layers the preset (or input file) and command-line values.
    pub fn resolve_input(&self, args: &ProfitArgs) -> Result<ProfitInput> {
        let mut input = match &args.input {
            Some(path) => Self::read_input(path)?,
            None => {
                let mut input = ProfitInput::default();
                let preset = args.preset.unwrap_or(self.config.preset);
                debug!("Applying preset: {}", preset.label());
                preset.apply(&mut input);
                input
            }
        };

        if args.input.is_some() {
            if let Some(preset) = args.preset {
                preset.apply(&mut input);
            }
        }

        if let Some(v) = args.sale_price {
            input.sale_price = v;
        }
        if let Some(v) = args.cogs {
            input.cogs = v;
        }
        if let Some(v) = args.packaging_cost {
            input.packaging_cost = v;
        }
        if let Some(v) = args.shipping_cost {
            input.shipping_cost = Some(v);
        }
        if let Some(v) = args.shipping_method {
            input.shipping_method = v;
        }
        if let Some(v) = args.weight_lb {
            input.weight_lb = v;
        }
        if let Some(v) = args.platform_fee_pct {
            input.platform_fee_pct = v;
        }
        if let Some(v) = args.processing_pct {
            input.processing_pct = v;
        }
        if let Some(v) = args.processing_fixed {
            input.processing_fixed = v;
        }

        Ok(input)
    }

    fn read_input(path: &Path) -> Result<ProfitInput> {
        debug!("Reading profit input from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read profit input: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse profit input: {}", path.display()))
    }
}
