//! Runtime configuration
//!
//! Indicator parameters come from defaults, a JSON document or environment
//! variables (`.env` is loaded when present):
//!
//! - `ZIGZAG_MODE`, `ZIGZAG_PERCENT_CHANGE`
//! - `PIVOTS_LEFT_SPAN`, `PIVOTS_RIGHT_SPAN`, `PIVOTS_MAX_TREND_PERIODS`, `PIVOTS_MODE`
//! - `ENVIRONMENT` selects the log format (see [`crate::logging`])

use std::collections::HashMap;
use std::env;

use serde::{Deserialize, Serialize};

use crate::indicators::error::IndicatorError;
use crate::indicators::parser::{parse_pivot_params_from_map, parse_zigzag_params_from_map};
use crate::indicators::validation::{validate_pivot_params, validate_zigzag_params};
use crate::models::{PivotParams, ZigZagParams};

const ZIGZAG_PREFIX: &str = "ZIGZAG_";
const PIVOTS_PREFIX: &str = "PIVOTS_";

/// Deployment environment name, `sandbox` unless `ENVIRONMENT` is set.
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub zigzag: ZigZagParams,
    #[serde(default)]
    pub pivots: PivotParams,
}

impl Config {
    /// Load from process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, IndicatorError> {
        dotenvy::dotenv().ok();
        Self::from_map(&env::vars().collect())
    }

    /// Build from `ZIGZAG_*` / `PIVOTS_*` keys; other keys are ignored.
    pub fn from_map(vars: &HashMap<String, String>) -> Result<Self, IndicatorError> {
        let zigzag = parse_zigzag_params_from_map(&section(vars, ZIGZAG_PREFIX))?;
        let pivots = parse_pivot_params_from_map(&section(vars, PIVOTS_PREFIX))?;
        Ok(Self { zigzag, pivots })
    }

    pub fn from_json(json: &str) -> Result<Self, IndicatorError> {
        let config: Config = serde_json::from_str(json)
            .map_err(|e| IndicatorError::invalid_parameter("config", e.to_string()))?;
        validate_zigzag_params(&config.zigzag)?;
        validate_pivot_params(&config.pivots)?;
        Ok(config)
    }
}

/// Keys starting with `prefix`, stripped and lowercased.
fn section(vars: &HashMap<String, String>, prefix: &str) -> HashMap<String, String> {
    vars.iter()
        .filter_map(|(key, value)| {
            key.strip_prefix(prefix)
                .map(|field| (field.to_ascii_lowercase(), value.clone()))
        })
        .collect()
}
