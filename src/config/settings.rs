//! User settings for budget-calc
//!
//! Startup defaults for the calculator. The file is read on launch and
//! only written by `budget-calc init`; nothing the user types in the UI
//! is saved back.

use serde::{Deserialize, Serialize};

use super::paths::BudgetPaths;
use crate::error::BudgetError;
use crate::models::{BudgetInputs, Money, RentRatio};

/// User settings for budget-calc
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Starting value for "Your Monthly Income"
    #[serde(default = "default_income")]
    pub default_income1: i64,

    /// Starting value for "Partner's Monthly Income"
    #[serde(default = "default_income")]
    pub default_income2: i64,

    /// Starting income-to-rent ratio
    #[serde(default)]
    pub default_rent_ratio: RentRatio,

    /// Dollars moved per arrow key on a category slider
    #[serde(default = "default_slider_step")]
    pub slider_step: i64,

    /// Open the advanced slider grid on launch
    #[serde(default)]
    pub show_advanced: bool,

    /// Log filter used when `BUDGET_CALC_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_income() -> i64 {
    2000
}

fn default_slider_step() -> i64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_income1: default_income(),
            default_income2: default_income(),
            default_rent_ratio: RentRatio::default(),
            slider_step: default_slider_step(),
            show_advanced: false,
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                BudgetError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BudgetError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            BudgetError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            BudgetError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Slider step, never less than one dollar
    pub fn effective_slider_step(&self) -> i64 {
        self.slider_step.max(1)
    }

    /// The calculator's starting state
    pub fn initial_inputs(&self) -> BudgetInputs {
        BudgetInputs::new(
            Money::bounded(self.default_income1),
            Money::bounded(self.default_income2),
            self.default_rent_ratio,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.default_income1, 2000);
        assert_eq!(settings.default_income2, 2000);
        assert_eq!(settings.default_rent_ratio, RentRatio::default());
        assert!(!settings.show_advanced);
        assert_eq!(settings.initial_inputs(), BudgetInputs::default());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.slider_step, 10);
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.default_income1 = 3100;
        settings.default_rent_ratio = RentRatio::from_value(2.5);
        settings.show_advanced = true;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_income1, 3100);
        assert_eq!(loaded.default_rent_ratio.tenths(), 25);
        assert!(loaded.show_advanced);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{ "default_income2": 0 }"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_income1, 2000);
        assert_eq!(loaded.default_income2, 0);
        assert_eq!(loaded.log_level, "info");
    }

    #[test]
    fn test_saved_file_holds_only_known_keys() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        Settings::default().save(&paths).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(paths.settings_file()).unwrap()).unwrap();
        let mut keys: Vec<&str> = written.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "default_income1",
                "default_income2",
                "default_rent_ratio",
                "log_level",
                "show_advanced",
                "slider_step"
            ]
        );

        // Files from older builds still load
        std::fs::write(
            paths.settings_file(),
            r#"{ "schema_version": 1, "default_income1": 4200 }"#,
        )
        .unwrap();
        assert_eq!(Settings::load_or_create(&paths).unwrap().default_income1, 4200);
    }

    #[test]
    fn test_oversized_incomes_are_clamped_on_load() {
        let settings = Settings {
            default_income1: i64::MAX,
            default_income2: i64::MIN,
            ..Settings::default()
        };
        let inputs = settings.initial_inputs();
        assert_eq!(inputs.income1.dollars(), Money::MAX_DOLLARS);
        assert_eq!(inputs.income2.dollars(), -Money::MAX_DOLLARS);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, BudgetError::Config(_)));
    }

    #[test]
    fn test_slider_step_floor() {
        let settings = Settings {
            slider_step: 0,
            ..Settings::default()
        };
        assert_eq!(settings.effective_slider_step(), 1);
    }
}
