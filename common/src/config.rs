use std::fs;
use std::path::Path;

use log::debug;
use toml::{Table, Value};

use crate::ConfigError;

/// What a rule checks on an input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleKind {
    Prefix(String),
    Suffix(String),
    Contains(String),
    Exact(String),
    /// Optional `-` followed by ASCII digits, surrounding whitespace ignored.
    Numeric,
    Any,
}

impl RuleKind {
    pub fn matches(&self, line: &str) -> bool {
        match self {
            RuleKind::Prefix(pattern) => line.starts_with(pattern.as_str()),
            RuleKind::Suffix(pattern) => line.ends_with(pattern.as_str()),
            RuleKind::Contains(pattern) => line.contains(pattern.as_str()),
            RuleKind::Exact(pattern) => line == pattern,
            RuleKind::Numeric => {
                let trimmed = line.trim();
                let digits = trimmed.strip_prefix('-').unwrap_or(trimmed);
                !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
            }
            RuleKind::Any => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleConfig {
    pub name: String,
    pub kind: RuleKind,
}

/// Rules in the order they are chained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteConfig {
    pub rules: Vec<RuleConfig>,
}

impl RouteConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::parse(&content)?;
        debug!("loaded {} rules from {}", config.rules.len(), path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let table: Table = content.parse()?;

        let rules = table
            .get("rules")
            .and_then(Value::as_array)
            .ok_or(ConfigError::MissingRules)?;

        if rules.is_empty() {
            return Err(ConfigError::EmptyRules);
        }

        let rules = rules
            .iter()
            .enumerate()
            .map(|(index, rule)| parse_rule(index, rule))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rules })
    }
}

fn parse_rule(index: usize, rule: &Value) -> Result<RuleConfig, ConfigError> {
    let rule = rule.as_table().ok_or(ConfigError::NotATable { index })?;

    let field = |field: &'static str| {
        rule.get(field)
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or(ConfigError::MissingField { index, field })
    };

    let name = field("name")?;
    let kind = match field("kind")?.as_str() {
        "prefix" => RuleKind::Prefix(field("pattern")?),
        "suffix" => RuleKind::Suffix(field("pattern")?),
        "contains" => RuleKind::Contains(field("pattern")?),
        "exact" => RuleKind::Exact(field("pattern")?),
        "numeric" => RuleKind::Numeric,
        "any" => RuleKind::Any,
        other => {
            return Err(ConfigError::UnknownKind {
                index,
                kind: other.to_owned(),
            })
        }
    };

    Ok(RuleConfig { name, kind })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const RULES: &str = r#"
        [[rules]]
        name = "http"
        kind = "prefix"
        pattern = "GET "

        [[rules]]
        name = "number"
        kind = "numeric"

        [[rules]]
        name = "rest"
        kind = "any"
    "#;

    #[test]
    fn parses_rules_in_order() {
        let config = RouteConfig::parse(RULES).unwrap();

        assert_eq!(
            config.rules,
            [
                RuleConfig {
                    name: "http".to_owned(),
                    kind: RuleKind::Prefix("GET ".to_owned()),
                },
                RuleConfig {
                    name: "number".to_owned(),
                    kind: RuleKind::Numeric,
                },
                RuleConfig {
                    name: "rest".to_owned(),
                    kind: RuleKind::Any,
                },
            ]
        );
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(RULES.as_bytes()).unwrap();

        let config = RouteConfig::load(file.path()).unwrap();
        assert_eq!(config.rules.len(), 3);
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = RouteConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn rejects_bad_documents() {
        assert!(matches!(
            RouteConfig::parse("rules = ["),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            RouteConfig::parse("other = 1"),
            Err(ConfigError::MissingRules)
        ));
        assert!(matches!(
            RouteConfig::parse("rules = []"),
            Err(ConfigError::EmptyRules)
        ));
        assert!(matches!(
            RouteConfig::parse("rules = [1]"),
            Err(ConfigError::NotATable { index: 0 })
        ));
    }

    #[test]
    fn rejects_bad_rules() {
        let err = RouteConfig::parse(
            r#"
            [[rules]]
            name = "a"
            kind = "any"

            [[rules]]
            name = "b"
            kind = "prefix"
            "#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingField {
                index: 1,
                field: "pattern"
            }
        ));

        let err = RouteConfig::parse("[[rules]]\nname = \"a\"\nkind = \"regex\"").unwrap_err();
        assert_eq!(err.to_string(), "rule #0: unknown kind `regex`");

        let err = RouteConfig::parse("[[rules]]\nkind = \"any\"").unwrap_err();
        assert_eq!(err.to_string(), "rule #0: missing string field `name`");
    }

    #[test]
    fn rule_kinds_match() {
        assert!(RuleKind::Prefix("GET ".to_owned()).matches("GET /index"));
        assert!(!RuleKind::Prefix("GET ".to_owned()).matches("POST /"));
        assert!(RuleKind::Suffix(".rs".to_owned()).matches("main.rs"));
        assert!(RuleKind::Contains("err".to_owned()).matches("an error"));
        assert!(RuleKind::Exact("quit".to_owned()).matches("quit"));
        assert!(!RuleKind::Exact("quit".to_owned()).matches("quit "));
        assert!(RuleKind::Numeric.matches(" -42 "));
        assert!(!RuleKind::Numeric.matches("-"));
        assert!(!RuleKind::Numeric.matches("4.2"));
        assert!(!RuleKind::Numeric.matches(""));
        assert!(RuleKind::Any.matches(""));
    }
}
