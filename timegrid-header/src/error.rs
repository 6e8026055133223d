//! Error type shared by configuration, resource loading and prop validation.

/// Errors raised while assembling a header.
///
/// Rendering and event handling never fail; everything here surfaces at
/// integration time, before the first draw.
#[derive(Debug)]
pub enum HeaderError {
    /// A required collaborator or input was not supplied to the builder.
    MissingInput(&'static str),
    /// A working-day value outside `0..=6`.
    InvalidWeekday(u8),
    /// Malformed JSON configuration or resource list.
    Config(serde_json::Error),
    /// Log file could not be created.
    Io(std::io::Error),
}

impl std::fmt::Display for HeaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeaderError::MissingInput(name) => write!(f, "missing required input: {name}"),
            HeaderError::InvalidWeekday(day) => {
                write!(f, "invalid weekday {day} (expected 0 = Sunday ..= 6 = Saturday)")
            }
            HeaderError::Config(e) => write!(f, "invalid configuration: {e}"),
            HeaderError::Io(e) => write!(f, "i/o error: {e}"),
        }
    }
}

impl std::error::Error for HeaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HeaderError::Config(e) => Some(e),
            HeaderError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for HeaderError {
    fn from(e: serde_json::Error) -> Self {
        HeaderError::Config(e)
    }
}

impl From<std::io::Error> for HeaderError {
    fn from(e: std::io::Error) -> Self {
        HeaderError::Io(e)
    }
}
