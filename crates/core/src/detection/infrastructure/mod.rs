pub mod cascade_face_detector;
pub mod cascade_resolver;
#[cfg(feature = "opencv")]
pub mod opencv_cascade_classifier;
