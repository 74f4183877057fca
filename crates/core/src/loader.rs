use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::{FaceHandle, FaceLayer, FaceLayerRegistry};

/// Errors emitted while loading a face layout.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Wrap IO errors when reading layouts.
    #[error("failed to read face layout: {0}")]
    Io(#[from] std::io::Error),
    /// Wrap serde parsing issues.
    #[error("failed to parse face layout: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One entry of a JSON face layout.
#[derive(Debug, Deserialize)]
pub struct FaceLayerDefinition {
    /// Identity of the face object.
    pub handle: u64,
    /// Face name (e.g., "TopFace").
    pub name: String,
}

/// Load a face registry from the provided JSON file path.
pub fn registry_from_file(path: &Path) -> Result<FaceLayerRegistry, RegistryError> {
    let data = fs::read_to_string(path)?;
    registry_from_str(&data)
}

/// Load a face registry from an in-memory JSON string.
pub fn registry_from_str(input: &str) -> Result<FaceLayerRegistry, RegistryError> {
    let defs: Vec<FaceLayerDefinition> = serde_json::from_str(input)?;
    Ok(FaceLayerRegistry::new(
        defs.into_iter()
            .map(|def| FaceLayer::new(FaceHandle(def.handle), def.name))
            .collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUT: &str = r#"
    [
      { "handle": 40, "name": "FrontFace" },
      { "handle": 41, "name": "TopFace" }
    ]
    "#;

    #[test]
    fn parses_layout_in_order() {
        let registry = registry_from_str(LAYOUT).expect("valid layout");
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.position_of_handle(FaceHandle(41)), Some(1));
        assert_eq!(registry.position_of_name("FrontFace"), Some(0));
    }

    #[test]
    fn rejects_malformed_layout() {
        let err = registry_from_str(r#"[{ "handle": "x" }]"#).unwrap_err();
        assert!(matches!(err, RegistryError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = registry_from_file(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, RegistryError::Io(_)));
    }
}
