use crate::constants::MAX_EDGE_LENGTH;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Invalid edge length: {0} (must be positive)")]
    InvalidEdgeLength(u32),
    #[error("Edge length {edge} exceeds maximum of {max}")]
    EdgeTooLarge { edge: u32, max: u32 },
}

/// Validate an edge length before allocating a canvas
pub fn validate_edge_length(edge: u32) -> Result<(), RenderError> {
    if edge == 0 {
        return Err(RenderError::InvalidEdgeLength(edge));
    }
    if edge > MAX_EDGE_LENGTH {
        return Err(RenderError::EdgeTooLarge {
            edge,
            max: MAX_EDGE_LENGTH,
        });
    }
    Ok(())
}

/// Truncating `edge * fraction`, matching integer pixel geometry
pub fn fraction_of(edge: u32, fraction: f64) -> u32 {
    (edge as f64 * fraction) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_edge_length() {
        assert!(validate_edge_length(1).is_ok());
        assert!(validate_edge_length(MAX_EDGE_LENGTH).is_ok());
        assert_eq!(
            validate_edge_length(0),
            Err(RenderError::InvalidEdgeLength(0))
        );
        assert!(matches!(
            validate_edge_length(MAX_EDGE_LENGTH + 1),
            Err(RenderError::EdgeTooLarge { .. })
        ));
    }

    #[test]
    fn test_fraction_truncates() {
        assert_eq!(fraction_of(1024, 0.06), 61);
        assert_eq!(fraction_of(1024, 0.22), 225);
        assert_eq!(fraction_of(32, 0.05), 1);
        assert_eq!(fraction_of(10, 0.06), 0);
    }
}
