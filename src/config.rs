use crate::models::OutputFormat;
use crate::plan::{PlanRenderer, DEFAULT_LINK_SCHEME};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Rendering
    pub output_format: OutputFormat,
    pub link_scheme: String,

    // Logging
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output_format: OutputFormat::LinkedNotes,
            link_scheme: DEFAULT_LINK_SCHEME.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let env = |key: &str, default: &str| -> String {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };

        Self::from_lookup(env)
    }

    /// Build from any key lookup; unparsable values fall back to defaults.
    pub fn from_lookup(env: impl Fn(&str, &str) -> String) -> Self {
        let defaults = Config::default();

        let link_scheme = env("PLAN_LINK_SCHEME", DEFAULT_LINK_SCHEME);
        Config {
            output_format: env("PLAN_OUTPUT_FORMAT", "linked")
                .parse()
                .unwrap_or(defaults.output_format),
            link_scheme: if link_scheme.trim().is_empty() {
                defaults.link_scheme
            } else {
                link_scheme.trim().to_string()
            },
            log_level: env("LOG_LEVEL", &defaults.log_level),
        }
    }

    pub fn renderer(&self) -> PlanRenderer {
        PlanRenderer::new(self.link_scheme.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str, &str) -> String {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str, default: &str| map.get(key).cloned().unwrap_or_else(|| default.to_string())
    }

    #[test]
    fn defaults_without_env() {
        let cfg = Config::from_lookup(lookup(&[]));
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.renderer().link_scheme(), "roam");
    }

    #[test]
    fn reads_overrides() {
        let cfg = Config::from_lookup(lookup(&[
            ("PLAN_OUTPUT_FORMAT", "plain"),
            ("PLAN_LINK_SCHEME", "id"),
            ("LOG_LEVEL", "debug"),
        ]));
        assert_eq!(cfg.output_format, OutputFormat::PlainText);
        assert_eq!(cfg.link_scheme, "id");
        assert_eq!(cfg.log_level, "debug");
    }

    #[test]
    fn bad_values_fall_back() {
        let cfg = Config::from_lookup(lookup(&[
            ("PLAN_OUTPUT_FORMAT", "markdown"),
            ("PLAN_LINK_SCHEME", "  "),
        ]));
        assert_eq!(cfg.output_format, OutputFormat::LinkedNotes);
        assert_eq!(cfg.link_scheme, "roam");
    }
}
