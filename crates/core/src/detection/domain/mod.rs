pub mod cascade_classifier;
pub mod detection_params;
pub mod face_detector;
