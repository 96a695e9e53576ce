use std::path::PathBuf;
use std::process;

use clap::Parser;

use facecam_core::annotation::domain::frame_annotator::AnnotationStyle;
use facecam_core::annotation::infrastructure::rectangle_annotator::RectangleAnnotator;
use facecam_core::capture::domain::frame_source::FrameSource;
use facecam_core::control::domain::quit_signal::QuitSignal;
use facecam_core::detection::domain::detection_params::DetectionParams;
use facecam_core::detection::domain::face_detector::FaceDetector;
use facecam_core::display::domain::framebuffer_config::FramebufferConfig;
use facecam_core::display::infrastructure::framebuffer_renderer::FramebufferRenderer;
use facecam_core::pipeline::live_detection_use_case::{LiveDetectionUseCase, LoopExit};
use facecam_core::pipeline::pipeline_logger::LogPipelineLogger;
use facecam_core::shared::constants::{
    DEFAULT_CAMERA_INDEX, DEFAULT_FRAMEBUFFER_HEIGHT, DEFAULT_FRAMEBUFFER_PATH,
    DEFAULT_FRAMEBUFFER_WIDTH, DEFAULT_MIN_FACE_SIZE, DEFAULT_MIN_NEIGHBORS,
    DEFAULT_OUTLINE_COLOR, DEFAULT_OUTLINE_THICKNESS, DEFAULT_SCALE_FACTOR, QUIT_KEY,
};

/// Live camera face detection rendered straight to a Linux framebuffer.
#[derive(Parser, Debug)]
#[command(name = "facecam")]
struct Cli {
    /// Camera device index.
    #[arg(long, default_value_t = DEFAULT_CAMERA_INDEX)]
    camera: i32,

    /// Cascade classifier XML (searched in OpenCV data dirs when omitted).
    #[arg(long)]
    cascade: Option<PathBuf>,

    /// Framebuffer device to write to.
    #[arg(long, default_value = DEFAULT_FRAMEBUFFER_PATH)]
    framebuffer: PathBuf,

    /// Framebuffer width in pixels.
    #[arg(long, default_value_t = DEFAULT_FRAMEBUFFER_WIDTH)]
    width: u32,

    /// Framebuffer height in pixels.
    #[arg(long, default_value_t = DEFAULT_FRAMEBUFFER_HEIGHT)]
    height: u32,

    /// Window shrink factor between detection passes (> 1.0).
    #[arg(long, default_value_t = DEFAULT_SCALE_FACTOR)]
    scale_factor: f64,

    /// Overlapping detections required to confirm a face.
    #[arg(long, default_value_t = DEFAULT_MIN_NEIGHBORS)]
    min_neighbors: i32,

    /// Smallest detectable face, in pixels per side.
    #[arg(long, default_value_t = DEFAULT_MIN_FACE_SIZE)]
    min_size: u32,

    /// Outline thickness in pixels.
    #[arg(long, default_value_t = DEFAULT_OUTLINE_THICKNESS)]
    thickness: u32,

    /// Keep the framebuffer open between frames.
    #[arg(long)]
    keep_open: bool,

    /// Stop after this many frames.
    #[arg(long)]
    max_frames: Option<usize>,
}

impl Cli {
    fn detection_params(&self) -> DetectionParams {
        DetectionParams {
            scale_factor: self.scale_factor,
            min_neighbors: self.min_neighbors,
            min_size: self.min_size,
        }
    }

    fn framebuffer_config(&self) -> FramebufferConfig {
        FramebufferConfig {
            path: self.framebuffer.clone(),
            width: self.width,
            height: self.height,
            keep_open: self.keep_open,
        }
    }

    fn annotation_style(&self) -> AnnotationStyle {
        AnnotationStyle {
            color: DEFAULT_OUTLINE_COLOR,
            thickness: self.thickness,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let (source, detector) = backend::open_devices(&cli)?;

    log::info!("Press '{QUIT_KEY}' to quit.");
    let mut use_case = LiveDetectionUseCase::new(
        source,
        detector,
        Box::new(RectangleAnnotator::new(cli.annotation_style())),
        Box::new(FramebufferRenderer::new(cli.framebuffer_config())),
        backend::quit_signal(),
        Box::new(LogPipelineLogger::default()),
    )
    .with_max_frames(cli.max_frames);

    let summary = use_case.execute();
    match &summary.exit {
        LoopExit::QuitRequested => log::info!("Quit requested"),
        LoopExit::StreamEnded { reason } => log::info!("Capture stopped: {reason}"),
        LoopExit::FrameLimit => log::info!("Frame limit reached"),
    }
    if summary.render_failures > 0 {
        log::warn!(
            "{} of {} frames were not rendered",
            summary.render_failures,
            summary.frames
        );
    }
    log::info!("Exiting...");
    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    cli.detection_params().validate()?;
    cli.framebuffer_config().validate()?;
    if cli.thickness == 0 {
        return Err("Thickness must be at least 1 pixel".into());
    }
    if cli.camera < 0 {
        return Err(format!("Camera index must be non-negative, got {}", cli.camera).into());
    }
    if cli.max_frames == Some(0) {
        return Err("Max frames must be at least 1".into());
    }
    Ok(())
}

#[cfg(feature = "opencv")]
mod backend {
    use facecam_core::capture::infrastructure::opencv_camera::OpenCvCamera;
    use facecam_core::control::infrastructure::highgui_key_signal::HighGuiKeySignal;
    use facecam_core::detection::infrastructure::cascade_face_detector::CascadeFaceDetector;
    use facecam_core::detection::infrastructure::cascade_resolver::CascadeResolver;
    use facecam_core::detection::infrastructure::opencv_cascade_classifier::OpenCvCascadeClassifier;
    use facecam_core::pipeline::live_detection_use_case::initialize;
    use facecam_core::shared::constants::{CASCADE_FILE_NAME, KEY_POLL_MS};

    use super::*;

    pub(super) fn open_devices(
        cli: &Cli,
    ) -> Result<(Box<dyn FrameSource>, Box<dyn FaceDetector>), Box<dyn std::error::Error>> {
        let params = cli.detection_params();
        let devices = initialize(
            || {
                let path = CascadeResolver::from_environment()
                    .resolve(CASCADE_FILE_NAME, cli.cascade.as_deref())?;
                let classifier = OpenCvCascadeClassifier::load(&path)?;
                Ok(Box::new(CascadeFaceDetector::new(Box::new(classifier), params))
                    as Box<dyn FaceDetector>)
            },
            || Ok(Box::new(OpenCvCamera::open(cli.camera)?) as Box<dyn FrameSource>),
        )?;
        Ok(devices)
    }

    pub(super) fn quit_signal() -> Box<dyn QuitSignal> {
        Box::new(HighGuiKeySignal::new(QUIT_KEY, KEY_POLL_MS))
    }
}

#[cfg(not(feature = "opencv"))]
mod backend {
    use facecam_core::control::domain::quit_signal::NeverQuit;

    use super::*;

    pub(super) fn open_devices(
        _cli: &Cli,
    ) -> Result<(Box<dyn FrameSource>, Box<dyn FaceDetector>), Box<dyn std::error::Error>> {
        Err("built without camera support; rebuild with `--features opencv`".into())
    }

    pub(super) fn quit_signal() -> Box<dyn QuitSignal> {
        Box::new(NeverQuit)
    }
}
