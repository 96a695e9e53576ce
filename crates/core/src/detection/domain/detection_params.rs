use crate::shared::constants::{DEFAULT_MIN_FACE_SIZE, DEFAULT_MIN_NEIGHBORS, DEFAULT_SCALE_FACTOR};

/// Fixed cascade scan configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetectionParams {
    /// Window shrink factor between scanning passes; must exceed 1.0.
    pub scale_factor: f64,
    /// Overlapping hits needed to confirm a face.
    pub min_neighbors: i32,
    /// Smallest detectable face, in pixels per side.
    pub min_size: u32,
}

impl DetectionParams {
    pub fn validate(&self) -> Result<(), String> {
        if self.scale_factor.is_nan() || self.scale_factor <= 1.0 {
            return Err(format!(
                "Scale factor must be greater than 1.0, got {}",
                self.scale_factor
            ));
        }
        if self.min_neighbors < 0 {
            return Err(format!(
                "Minimum neighbors must be non-negative, got {}",
                self.min_neighbors
            ));
        }
        if self.min_size == 0 {
            return Err("Minimum face size must be at least 1 pixel".into());
        }
        Ok(())
    }
}

impl Default for DetectionParams {
    fn default() -> Self {
        Self {
            scale_factor: DEFAULT_SCALE_FACTOR,
            min_neighbors: DEFAULT_MIN_NEIGHBORS,
            min_size: DEFAULT_MIN_FACE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_defaults() {
        let params = DetectionParams::default();
        assert_relative_eq!(params.scale_factor, 1.1);
        assert_eq!(params.min_neighbors, 5);
        assert_eq!(params.min_size, 30);
        assert!(params.validate().is_ok());
    }

    #[rstest]
    #[case::scale_one(DetectionParams { scale_factor: 1.0, ..Default::default() })]
    #[case::scale_nan(DetectionParams { scale_factor: f64::NAN, ..Default::default() })]
    #[case::negative_neighbors(DetectionParams { min_neighbors: -1, ..Default::default() })]
    #[case::zero_size(DetectionParams { min_size: 0, ..Default::default() })]
    fn test_invalid_params_rejected(#[case] params: DetectionParams) {
        assert!(params.validate().is_err());
    }
}
