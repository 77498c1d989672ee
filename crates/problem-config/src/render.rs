use serde::Deserialize;
use url::Url;

/// How problems are turned into responses
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// Base URI for problem types; problems without an explicit type render
    /// as `<type_base><error_type>` (e.g. `https://errors.example.com/not_found`)
    #[serde(default)]
    pub type_base: Option<Url>,
    /// Include the detail of 5xx problems in rendered documents
    #[serde(default)]
    pub expose_server_detail: bool,
    /// Render `WWW-Authenticate`, `Proxy-Authenticate`, `Allow` and `Retry-After`
    #[serde(default = "default_emit_headers")]
    pub emit_headers: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            type_base: None,
            expose_server_detail: false,
            emit_headers: true,
        }
    }
}

#[allow(clippy::missing_const_for_fn)]
fn default_emit_headers() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_section_uses_defaults() {
        let config: RenderConfig = toml::from_str("").unwrap();
        assert_eq!(config, RenderConfig::default());
        assert!(config.emit_headers);
        assert!(!config.expose_server_detail);
    }

    #[test]
    fn deserialize_full_section() {
        let toml = r#"
            type_base = "https://errors.example.com/probs/"
            expose_server_detail = true
            emit_headers = false
        "#;

        let config: RenderConfig = toml::from_str(toml).unwrap();
        assert_eq!(
            config.type_base.as_ref().map(Url::as_str),
            Some("https://errors.example.com/probs/")
        );
        assert!(config.expose_server_detail);
        assert!(!config.emit_headers);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = toml::from_str::<RenderConfig>("verbose = true");
        assert!(result.is_err());
    }
}
