use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use ubx_assist::AssistNowConfig;

/// Loader configuration file, e.g.
///
/// ```toml
/// [AssistNowOnline]
/// token = "XXXXXXXXXXXXXXXXXXXXXX"
/// datatype = "eph,alm,aux,pos"
/// gnss = "gps,glo"
/// lat = 30.2
/// lon = -97.5
/// alt = 200.0
/// delay = 100
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoaderConfig {
    #[serde(rename = "AssistNowOnline")]
    pub assist_now: AssistNowConfig,
}

impl LoaderConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
        Self::parse(&text)
            .with_context(|| format!("Invalid configuration file: {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    #[test]
    fn test_parse_section() {
        let cfg = LoaderConfig::parse(
            "[AssistNowOnline]\ntoken = \"abc\"\ngnss = \"gps\"\ndelay = 250\n",
        )
        .unwrap();
        assert_eq!(cfg.assist_now.token(), Some("abc"));
        assert_eq!(cfg.assist_now.gnss.as_deref(), Some("gps"));
        assert_eq!(
            cfg.assist_now.inter_message_delay(),
            Duration::from_millis(250)
        );
    }

    #[test]
    fn test_missing_section() {
        assert!(LoaderConfig::parse("").is_err());
        assert!(LoaderConfig::parse("[assistnow]\ntoken = \"abc\"\n").is_err());
    }

    #[test]
    fn test_wrong_value_type() {
        assert!(LoaderConfig::parse("[AssistNowOnline]\ndelay = \"fast\"\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[AssistNowOnline]").unwrap();
        writeln!(file, "token = \"abc\"").unwrap();
        writeln!(file, "filteronpos = true").unwrap();
        let cfg = LoaderConfig::load(file.path()).unwrap();
        assert_eq!(
            cfg.assist_now.query_string(),
            "token=abc&format=mga&filteronpos=True"
        );
    }

    #[test]
    fn test_missing_file() {
        let err = LoaderConfig::load(Path::new("/nonexistent/assistnow.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/assistnow.toml"));
    }
}
