pub const CASCADE_FILE_NAME: &str = "haarcascade_frontalface_default.xml";

/// Environment variable naming an extra directory to search for the cascade.
pub const CASCADE_DIR_ENV: &str = "FACECAM_CASCADE_DIR";

/// Directories where distribution OpenCV packages install Haar cascades.
pub const SYSTEM_CASCADE_DIRS: &[&str] = &[
    "/usr/share/opencv4/haarcascades",
    "/usr/local/share/opencv4/haarcascades",
    "/usr/share/opencv/haarcascades",
    "/usr/local/share/opencv/haarcascades",
];

pub const DEFAULT_CAMERA_INDEX: i32 = 0;
pub const DEFAULT_FRAMEBUFFER_PATH: &str = "/dev/fb0";
pub const DEFAULT_FRAMEBUFFER_WIDTH: u32 = 1280;
pub const DEFAULT_FRAMEBUFFER_HEIGHT: u32 = 720;

pub const DEFAULT_SCALE_FACTOR: f64 = 1.1;
pub const DEFAULT_MIN_NEIGHBORS: i32 = 5;
pub const DEFAULT_MIN_FACE_SIZE: u32 = 30;

/// Outline colour in B, G, R order.
pub const DEFAULT_OUTLINE_COLOR: [u8; 3] = [255, 0, 0];
pub const DEFAULT_OUTLINE_THICKNESS: u32 = 2;

pub const QUIT_KEY: char = 'q';
/// Key poll wait per loop iteration.
pub const KEY_POLL_MS: i32 = 1;
