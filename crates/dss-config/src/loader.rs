use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, TOML parsing fails, or
    /// validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::from_toml(&raw)
    }

    /// Parse and validate configuration from a TOML document
    ///
    /// # Errors
    ///
    /// Returns an error if TOML parsing or validation fails
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(raw).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the service name or log filter is empty
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.telemetry.service_name.trim().is_empty() {
            anyhow::bail!("telemetry.service_name must not be empty");
        }

        if self.telemetry.filter.trim().is_empty() {
            anyhow::bail!("telemetry.filter must not be empty");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use indoc::indoc;

    use crate::{Config, LogFormat};

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::from_toml("").unwrap();

        assert_eq!(config.telemetry.service_name, "dss");
        assert_eq!(config.telemetry.filter, "info");
        assert_eq!(config.telemetry.format, LogFormat::Text);
    }

    #[test]
    fn full_document() {
        let config = Config::from_toml(indoc! {r#"
            [telemetry]
            service_name = "dss-core"
            filter = "info,dss_boundary=debug"
            format = "json"
        "#})
        .unwrap();

        assert_eq!(config.telemetry.service_name, "dss-core");
        assert_eq!(config.telemetry.filter, "info,dss_boundary=debug");
        assert_eq!(config.telemetry.format, LogFormat::Json);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = Config::from_toml(indoc! {r"
            [boundary]
            log_details = false
        "})
        .unwrap_err();

        assert!(err.to_string().contains("failed to parse config"));
    }

    #[test]
    fn empty_filter_fails_validation() {
        let err = Config::from_toml(indoc! {r#"
            [telemetry]
            filter = "  "
        "#})
        .unwrap_err();

        assert_eq!(err.to_string(), "telemetry.filter must not be empty");
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[telemetry]\nformat = \"json\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.telemetry.format, LogFormat::Json);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Config::load(std::path::Path::new("/nonexistent/dss.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/dss.toml"));
    }
}
