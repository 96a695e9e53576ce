#[cfg(feature = "opencv")]
pub mod highgui_key_signal;
