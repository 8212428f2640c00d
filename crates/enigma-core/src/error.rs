use thiserror::Error;

pub type Result<T> = std::result::Result<T, EnigmaError>;

#[derive(Debug, Error)]
pub enum EnigmaError {
    #[error("wiring must have 26 letters, got {len}")]
    InvalidWiringLength { len: usize },

    #[error("wiring is not a bijection: {letter} appears more than once")]
    InvalidWiringNotBijective { letter: char },

    #[error("reflector encoding must have 26 letters, got {len}")]
    InvalidReflectorEncoding { len: usize },

    #[error("reflector wiring is not self-inverse at {letter}")]
    ReflectorNotInvolution { letter: char },

    #[error("plugboard letter {letter} is connected more than once")]
    DuplicateConnection { letter: char },

    #[error("plugboard connection must be a pair of letters, got {0:?}")]
    InvalidConnection(String),

    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    #[error("not a letter A-Z: {0:?}")]
    InvalidSymbol(char),

    #[error("indicator must be exactly 3 letters, got {0:?}")]
    InvalidIndicator(String),

    #[error("unknown rotor: {0:?}")]
    UnknownRotor(String),

    #[error("unknown reflector: {0:?}")]
    UnknownReflector(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("key format error: {0}")]
    KeyFormat(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
