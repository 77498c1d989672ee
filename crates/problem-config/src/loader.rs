use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, then parses it the way [`Config::parse`] does.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let config = Self::parse(&raw)?;
        tracing::debug!("loaded problem configuration from {}", path.display());

        Ok(config)
    }

    /// Parse configuration from raw TOML text
    ///
    /// Expands `{{ env.VAR }}` placeholders, then deserializes and
    /// validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable expansion fails, TOML
    /// parsing fails, or validation fails
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the problem type base cannot have type names
    /// appended to it
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_type_base()?;
        Ok(())
    }

    fn validate_type_base(&self) -> anyhow::Result<()> {
        let Some(ref base) = self.render.type_base else {
            return Ok(());
        };

        if base.cannot_be_a_base() {
            anyhow::bail!("render.type_base must be a hierarchical URL, got '{base}'");
        }

        if !base.path().ends_with('/') {
            anyhow::bail!("render.type_base must end with '/', got '{base}'");
        }

        Ok(())
    }
}
