//! Runtime language a stack trace was produced by.

use crate::utils::error::CodecError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Runtime family whose stack-trace output conventions we recognize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtifactLanguage {
    #[serde(rename = "JVM")]
    Jvm,
    #[serde(rename = "PYTHON")]
    Python,
    #[serde(rename = "NODEJS")]
    NodeJs,
}

impl ArtifactLanguage {
    /// Interchange name of the language
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jvm => "JVM",
            Self::Python => "PYTHON",
            Self::NodeJs => "NODEJS",
        }
    }
}

impl fmt::Display for ArtifactLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ArtifactLanguage {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "JVM" => Ok(Self::Jvm),
            "PYTHON" => Ok(Self::Python),
            "NODEJS" => Ok(Self::NodeJs),
            _ => Err(CodecError::UnknownVariant {
                kind: "language",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("nodejs".parse::<ArtifactLanguage>().unwrap(), ArtifactLanguage::NodeJs);
        assert_eq!("JVM".parse::<ArtifactLanguage>().unwrap(), ArtifactLanguage::Jvm);
        assert!("ruby".parse::<ArtifactLanguage>().is_err());
    }

    #[test]
    fn test_serialized_names() {
        let json = serde_json::to_string(&ArtifactLanguage::NodeJs).unwrap();
        assert_eq!(json, "\"NODEJS\"");
    }
}
