//! Color and styling helpers for CLI output.
//!
//! Semantic Color Theme:
//!   - Success/Healthy: green   (HEALTHY, all-clear recommendations)
//!   - Warning:         yellow  (single-cause health states, issues)
//!   - Error:           red     (FRAGILE, cycles)
//!   - Info/Reference:  cyan    (service names, edge IDs)
//!   - Muted:           dimmed  (field labels, arrows)
//!   - Emphasis:        bold    (section headers)

use crate::domain::{Criticality, HealthStatus};
use colored::Colorize;

use super::OutputConfig;

/// Apply semantic "success" color (green) to text.
pub fn success(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.green().to_string()
}

/// Apply semantic "error" color (red) to text.
pub fn error(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.red().to_string()
}

/// Apply semantic "warning" color (yellow) to text.
pub fn warning(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.yellow().to_string()
}

/// Apply semantic "info" color (cyan) to text.
pub fn info(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.cyan().to_string()
}

/// Color a health classification by severity.
pub(crate) fn colorize_health(health: HealthStatus, config: &OutputConfig) -> String {
    let text = health.as_str();
    if !config.use_colors {
        return text.to_string();
    }
    match health {
        HealthStatus::Healthy => text.green().bold().to_string(),
        HealthStatus::HasCycles | HealthStatus::SinglePoints | HealthStatus::DeepChains => {
            text.yellow().bold().to_string()
        }
        HealthStatus::Fragile => text.red().bold().to_string(),
    }
}

/// Color a criticality level.
pub(crate) fn colorize_criticality(criticality: Criticality, config: &OutputConfig) -> String {
    let text = criticality.as_str();
    if !config.use_colors {
        return text.to_string();
    }
    match criticality {
        Criticality::Critical => text.red().bold().to_string(),
        Criticality::High => text.yellow().to_string(),
        Criticality::Medium | Criticality::Low | Criticality::Optional => text.to_string(),
    }
}

/// Apply dimmed style to text (for labels and arrows).
pub(crate) fn dimmed(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.dimmed().to_string()
}

/// Apply bold style to text (for section headers).
pub(crate) fn bold(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.bold().to_string()
}
