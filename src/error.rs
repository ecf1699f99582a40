// Error types shared by the data source, transform layer and service.

#[derive(Debug, Clone, PartialEq)]
pub enum PokedexError {
    ConfigError(String),
    NetworkError(String),
    DecodeError(String),
}

pub type Result<T> = std::result::Result<T, PokedexError>;

impl std::fmt::Display for PokedexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PokedexError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            PokedexError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            PokedexError::DecodeError(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for PokedexError {}

impl From<toml::de::Error> for PokedexError {
    fn from(err: toml::de::Error) -> Self {
        PokedexError::ConfigError(err.to_string())
    }
}
