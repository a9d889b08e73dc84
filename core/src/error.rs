use thiserror::Error;

/// Feiltaksonomi for kjernen. Alt feiler før beregning – aldri halvveis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HealthError {
    /// Ikke-positiv eller ikke-endelig inputverdi fra skjemaet.
    #[error("invalid_input: {field}")]
    InvalidInput { field: &'static str },

    /// Aktivitetsnivå utenfor de fem kjente verdiene.
    #[error("invalid_activity_level: {0}")]
    InvalidActivityLevel(String),

    /// JSON-payload som ikke lot seg parse (inkluderer feilstien).
    #[error("parse error at {0}")]
    Parse(String),
}
