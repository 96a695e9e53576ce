use crate::detection::domain::cascade_classifier::CascadeClassifier;
use crate::detection::domain::detection_params::DetectionParams;
use crate::detection::domain::face_detector::FaceDetector;
use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// Face detector backed by a cascade classifier.
///
/// Converts each frame to grayscale, runs the multi-scale scan with fixed
/// parameters, and clips every hit to the frame bounds.
pub struct CascadeFaceDetector {
    classifier: Box<dyn CascadeClassifier>,
    params: DetectionParams,
}

impl CascadeFaceDetector {
    pub fn new(classifier: Box<dyn CascadeClassifier>, params: DetectionParams) -> Self {
        Self { classifier, params }
    }
}

impl FaceDetector for CascadeFaceDetector {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<Region>, Box<dyn std::error::Error>> {
        let gray = frame.to_grayscale();
        let raw = self.classifier.detect_multi_scale(&gray, &self.params)?;
        let regions = Region::clamp_all(&raw, frame.width(), frame.height());
        if regions.len() != raw.len() {
            log::debug!(
                "Dropped {} detections outside frame {}",
                raw.len() - regions.len(),
                frame.index()
            );
        }
        Ok(regions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    // --- Stubs ---

    #[derive(Default)]
    struct Seen {
        channels: Vec<u8>,
        params: Vec<DetectionParams>,
    }

    struct StubClassifier {
        hits: Vec<Region>,
        seen: Arc<Mutex<Seen>>,
    }

    impl StubClassifier {
        fn new(hits: Vec<Region>) -> (Self, Arc<Mutex<Seen>>) {
            let seen = Arc::new(Mutex::new(Seen::default()));
            (
                Self {
                    hits,
                    seen: seen.clone(),
                },
                seen,
            )
        }
    }

    impl CascadeClassifier for StubClassifier {
        fn detect_multi_scale(
            &mut self,
            gray: &Frame,
            params: &DetectionParams,
        ) -> Result<Vec<Region>, Box<dyn std::error::Error>> {
            let mut seen = self.seen.lock().unwrap();
            seen.channels.push(gray.channels());
            seen.params.push(*params);
            Ok(self.hits.clone())
        }
    }

    struct FailingClassifier;

    impl CascadeClassifier for FailingClassifier {
        fn detect_multi_scale(
            &mut self,
            _gray: &Frame,
            _params: &DetectionParams,
        ) -> Result<Vec<Region>, Box<dyn std::error::Error>> {
            Err("classifier exploded".into())
        }
    }

    fn colour_frame(width: u32, height: u32) -> Frame {
        Frame::new(vec![90; (width * height * 3) as usize], width, height, 3, 0)
    }

    // --- Tests ---

    #[test]
    fn test_classifier_receives_grayscale_and_params() {
        let (classifier, seen) = StubClassifier::new(vec![]);
        let params = DetectionParams {
            scale_factor: 1.3,
            min_neighbors: 2,
            min_size: 12,
        };
        let mut detector = CascadeFaceDetector::new(Box::new(classifier), params);
        detector.detect(&colour_frame(64, 48)).unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.channels, vec![1]);
        assert_eq!(seen.params, vec![params]);
    }

    #[test]
    fn test_no_faces_is_empty_not_error() {
        let (classifier, _) = StubClassifier::new(vec![]);
        let mut detector =
            CascadeFaceDetector::new(Box::new(classifier), DetectionParams::default());
        let regions = detector.detect(&colour_frame(64, 48)).unwrap();
        assert!(regions.is_empty());
    }

    #[test]
    fn test_results_always_within_frame() {
        let (classifier, _) = StubClassifier::new(vec![
            Region::new(10, 10, 20, 20),
            Region::new(-5, 40, 30, 30),
            Region::new(50, -10, 40, 100),
            Region::new(200, 200, 30, 30),
        ]);
        let mut detector =
            CascadeFaceDetector::new(Box::new(classifier), DetectionParams::default());
        let regions = detector.detect(&colour_frame(64, 48)).unwrap();

        assert_eq!(regions.len(), 3);
        for r in &regions {
            assert!(r.fits_within(64, 48), "{r:?} escapes the frame");
        }
    }

    #[test]
    fn test_backend_error_propagates() {
        let mut detector =
            CascadeFaceDetector::new(Box::new(FailingClassifier), DetectionParams::default());
        assert!(detector.detect(&colour_frame(8, 8)).is_err());
    }
}
