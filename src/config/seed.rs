use crate::core::repository::InMemoryPersonRepository;
use crate::core::Person;
use crate::utils::error::{DirectoryError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 自訂的人員資料檔
///
/// ```toml
/// [[persons]]
/// id = 1
/// first_name = "Hansi"
/// last_name = "${HANSI_LAST_NAME}"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default)]
    pub persons: Vec<Person>,
}

impl SeedConfig {
    /// 從 TOML 檔案載入
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析並驗證
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        let config: Self =
            toml::from_str(&processed_content).map_err(|e| DirectoryError::ConfigError {
                message: format!("TOML parsing error: {}", e),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// 替換環境變數 (例如 ${LAST_NAME})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DirectoryError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn into_repository(self) -> Result<InMemoryPersonRepository> {
        self.validate()?;
        Ok(InMemoryPersonRepository::from_persons(self.persons))
    }
}

impl Validate for SeedConfig {
    fn validate(&self) -> Result<()> {
        if self.persons.is_empty() {
            return Err(DirectoryError::ValidationError {
                message: "Seed file must contain at least one [[persons]] entry".to_string(),
            });
        }
        for (index, person) in self.persons.iter().enumerate() {
            validate_non_empty_string(&format!("persons[{}].first_name", index), &person.first_name)?;
            validate_non_empty_string(&format!("persons[{}].last_name", index), &person.last_name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed() {
        let seed = SeedConfig::from_toml_str(
            r#"
            [[persons]]
            id = 10
            first_name = "Sepp"
            last_name = "Huber"

            [[persons]]
            id = 11
            first_name = "Resi"
            last_name = "Grün"
            "#,
        )
        .unwrap();
        assert_eq!(seed.persons.len(), 2);
        assert_eq!(seed.persons[1], Person::new(11, "Resi", "Grün"));
    }

    #[test]
    fn test_empty_seed_is_rejected() {
        let result = SeedConfig::from_toml_str("");
        assert!(matches!(result, Err(DirectoryError::ValidationError { .. })));
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let result = SeedConfig::from_toml_str(
            r#"
            [[persons]]
            id = 1
            first_name = ""
            last_name = "Huber"
            "#,
        );
        assert!(matches!(
            result,
            Err(DirectoryError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let result = SeedConfig::from_toml_str("[[persons]\nid = ");
        assert!(matches!(result, Err(DirectoryError::ConfigError { .. })));
    }

    #[test]
    fn test_unset_env_var_is_left_untouched() {
        let out = SeedConfig::substitute_env_vars("x = \"${PERSON_DIRECTORY_SURELY_UNSET}\"").unwrap();
        assert_eq!(out, "x = \"${PERSON_DIRECTORY_SURELY_UNSET}\"");
    }
}
