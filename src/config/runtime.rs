use super::MedibotConfig;
use crate::i18n::Locale;
use tracing::warn;

/// Env var naming the TOML config file read by the binary
pub const CONFIG_PATH_ENV: &str = "MEDIBOT_CONFIG";

const TICK_INTERVAL_ENV: &str = "MEDIBOT_TICK_INTERVAL_MS";
const LOCALE_ENV: &str = "MEDIBOT_LOCALE";

/// Apply env var overrides on top of a loaded config.
pub fn apply_env_overrides(config: &mut MedibotConfig) {
    apply_overrides(config, |key| std::env::var(key).ok());
}

/// Override logic with an injectable lookup, so tests avoid process env
pub(crate) fn apply_overrides(
    config: &mut MedibotConfig,
    lookup: impl Fn(&str) -> Option<String>,
) {
    if let Some(v) = lookup(TICK_INTERVAL_ENV) {
        match v.parse::<u64>() {
            Ok(ms) if ms > 0 => config.simulation.tick_interval_ms = ms,
            _ => warn!(value = %v, "Ignoring invalid {}", TICK_INTERVAL_ENV),
        }
    }
    if let Some(v) = lookup(LOCALE_ENV) {
        match v.parse::<Locale>() {
            Ok(locale) => config.session.locale = locale,
            Err(e) => warn!(error = %e, "Ignoring invalid {}", LOCALE_ENV),
        }
    }
}
