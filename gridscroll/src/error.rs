use core::fmt;

/// A configuration error, rejected before any grouping math runs.
///
/// Misconfiguration is a programmer error: it surfaces when options are
/// applied, never as a division by zero at an arbitrary call site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `group_capacity` must be at least 1.
    GroupCapacity { capacity: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GroupCapacity { capacity } => {
                write!(f, "group_capacity must be >= 1 (got {capacity})")
            }
        }
    }
}

impl core::error::Error for ConfigError {}
