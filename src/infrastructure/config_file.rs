use crate::domain::config::GatewayConfig;
use crate::error::Result;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Loads a gateway configuration from a JSON file.
pub fn load(path: impl AsRef<Path>) -> Result<GatewayConfig> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let config = from_reader(BufReader::new(file))?;
    debug!(path = %path.display(), gateway = %config.gateway_name, "Loaded gateway config");
    Ok(config)
}

pub fn from_reader<R: Read>(source: R) -> Result<GatewayConfig> {
    Ok(serde_json::from_reader(source)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GatewayError;
    use std::io::Write;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{"gateway_name": "stripe", "template_path": "template.html",
                "connection_params": {{"public_key": "public", "prefill": true}}}}"#
        )
        .unwrap();

        let config = load(file.path()).unwrap();
        assert_eq!(config.template_path.as_deref(), Some("template.html"));
        assert_eq!(config.connection_params.public_key.as_deref(), Some("public"));
        assert!(config.connection_params.prefill);
    }

    #[test]
    fn test_missing_file() {
        let result = load("does/not/exist.json");
        assert!(matches!(result, Err(GatewayError::IoError(_))));
    }

    #[test]
    fn test_malformed_json() {
        let result = from_reader("{ not json".as_bytes());
        assert!(matches!(result, Err(GatewayError::ConfigError(_))));
    }
}
