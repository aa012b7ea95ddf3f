//! Settings for the external syntax checker

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::error::{Result, config_invalid};

/// External checker invocation and its fixed rule set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Program and leading arguments; must produce unix-reporter output
    pub command: Vec<String>,

    /// Rule set written to the checker's configuration file
    pub rules: Map<String, Value>,
}

impl Default for LintConfig {
    fn default() -> Self {
        let rules = json!({
            "esversion": 11,
            "expr": true,
            "laxbreak": true,
            "loopfunc": true,
            "sub": true,
        });

        Self {
            command: vec!["jshint".to_string(), "--reporter=unix".to_string()],
            rules: match rules {
                Value::Object(map) => map,
                _ => Map::new(),
            },
        }
    }
}

impl LintConfig {
    /// Validate lint settings
    pub fn validate(&self) -> Result<()> {
        match self.command.first() {
            Some(program) if !program.trim().is_empty() => Ok(()),
            _ => Err(config_invalid("lint.command must name a program")),
        }
    }

    /// Rule set serialized as the checker expects it
    pub fn rules_json(&self) -> String {
        Value::Object(self.rules.clone()).to_string()
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command() {
        let lint = LintConfig::default();
        assert_eq!(lint.command[0], "jshint");
        assert!(lint.validate().is_ok());
    }

    #[test]
    fn test_empty_command_rejected() {
        let lint = LintConfig {
            command: vec![],
            rules: Map::new(),
        };
        assert!(lint.validate().is_err());

        let blank = LintConfig {
            command: vec!["  ".to_string()],
            rules: Map::new(),
        };
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_rules_from_yaml() {
        let yaml = "command: [eslint-unix]\nrules:\n  esversion: 6\n  undef: true\n";
        let lint: LintConfig = serde_yaml::from_str(yaml).expect("lint yaml");
        assert_eq!(lint.command, vec!["eslint-unix".to_string()]);
        assert_eq!(lint.rules.get("esversion"), Some(&json!(6)));

        let parsed: Value = serde_json::from_str(&lint.rules_json()).expect("rules json");
        assert_eq!(parsed["undef"], json!(true));
    }
}
