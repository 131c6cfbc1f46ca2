//! `formsmith label` and `formsmith strategies`

use colored::Colorize;
use formsmith_config::FormsmithConfig;
use formsmith_labels::{LabelStrategy, LabelTranslator};

/// Label for `label` under the configured strategy
///
/// `context` and `field_type` fall back to the configured defaults.
pub fn translate(
    config: &FormsmithConfig,
    label: &str,
    context: Option<&str>,
    field_type: Option<&str>,
) -> String {
    config.label_strategy.get_label(
        label,
        context.unwrap_or(&config.label_context),
        field_type.unwrap_or(&config.label_field_type),
    )
}

pub fn run_label(
    config: &FormsmithConfig,
    label: &str,
    context: Option<&str>,
    field_type: Option<&str>,
) {
    println!("{}", translate(config, label, context, field_type));
}

/// Print every strategy key, marking the active one
pub fn run_strategies(config: &FormsmithConfig) {
    for strategy in LabelStrategy::ALL {
        if strategy == config.label_strategy {
            println!("{} {}", "*".green(), strategy.key().green());
        } else {
            println!("  {}", strategy.key());
        }
    }
}
