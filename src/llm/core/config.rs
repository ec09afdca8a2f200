//! Generation configuration parameters

use serde::{Deserialize, Serialize};

/// Parameters for controlling text generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Maximum number of tokens to generate
    pub max_tokens: u32,
    /// Randomness (0.0-2.0, higher = more random)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Nucleus sampling threshold
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
}

impl GenerationConfig {
    /// Create a new configuration with the specified max tokens
    pub fn new(max_tokens: u32) -> Self {
        Self {
            max_tokens,
            temperature: None,
            top_p: None,
        }
    }

    /// Set the temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the top_p value
    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_tokens: 1024,
            temperature: None,
            top_p: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = GenerationConfig::new(2048);
        assert_eq!(config.max_tokens, 2048);
        assert!(config.temperature.is_none());
        assert!(config.top_p.is_none());
    }

    #[test]
    fn test_config_default() {
        let config = GenerationConfig::default();
        assert_eq!(config.max_tokens, 1024);
    }

    #[test]
    fn test_config_builder() {
        let config = GenerationConfig::new(2048).with_temperature(0.0).with_top_p(0.9);

        assert_eq!(config.max_tokens, 2048);
        assert_eq!(config.temperature, Some(0.0));
        assert_eq!(config.top_p, Some(0.9));
    }

    #[test]
    fn test_config_serialization_omits_unset_fields() {
        let config = GenerationConfig::new(1024).with_temperature(0.5);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"max_tokens\":1024"));
        assert!(json.contains("\"temperature\":0.5"));
        assert!(!json.contains("\"top_p\""));
    }
}
