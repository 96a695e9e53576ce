use std::time::Instant;

use crate::annotation::domain::frame_annotator::FrameAnnotator;
use crate::capture::domain::frame_source::FrameSource;
use crate::control::domain::quit_signal::QuitSignal;
use crate::detection::domain::face_detector::FaceDetector;
use crate::display::domain::frame_sink::FrameSink;
use crate::shared::error::InitError;

use super::pipeline_logger::PipelineLogger;

/// Why the capture loop stopped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoopExit {
    QuitRequested,
    StreamEnded { reason: String },
    FrameLimit,
}

/// Outcome of one [`LiveDetectionUseCase::execute`] run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoopSummary {
    pub frames: usize,
    pub render_failures: usize,
    pub exit: LoopExit,
}

/// Loads the detector, then opens the frame source.
///
/// Either failure is returned before anything is captured or rendered.
pub fn initialize<L, O>(
    load_detector: L,
    open_source: O,
) -> Result<(Box<dyn FrameSource>, Box<dyn FaceDetector>), InitError>
where
    L: FnOnce() -> Result<Box<dyn FaceDetector>, InitError>,
    O: FnOnce() -> Result<Box<dyn FrameSource>, InitError>,
{
    let detector = load_detector()?;
    let source = open_source()?;
    Ok((source, detector))
}

/// Single-threaded capture → detect → annotate → render loop.
///
/// Stages run strictly in sequence. A read failure or quit signal ends the
/// loop; detection, annotation and render failures only skip their stage
/// for the current frame. The source is released whenever `execute` returns.
pub struct LiveDetectionUseCase {
    source: Box<dyn FrameSource>,
    detector: Box<dyn FaceDetector>,
    annotator: Box<dyn FrameAnnotator>,
    sink: Box<dyn FrameSink>,
    quit: Box<dyn QuitSignal>,
    logger: Box<dyn PipelineLogger>,
    max_frames: Option<usize>,
}

impl LiveDetectionUseCase {
    pub fn new(
        source: Box<dyn FrameSource>,
        detector: Box<dyn FaceDetector>,
        annotator: Box<dyn FrameAnnotator>,
        sink: Box<dyn FrameSink>,
        quit: Box<dyn QuitSignal>,
        logger: Box<dyn PipelineLogger>,
    ) -> Self {
        Self {
            source,
            detector,
            annotator,
            sink,
            quit,
            logger,
            max_frames: None,
        }
    }

    /// Stops after `max_frames` frames (at least one).
    pub fn with_max_frames(mut self, max_frames: Option<usize>) -> Self {
        self.max_frames = max_frames.map(|n| n.max(1));
        self
    }

    pub fn execute(&mut self) -> LoopSummary {
        let mut frames = 0;
        let mut render_failures = 0;

        let exit = loop {
            let start = Instant::now();
            let mut frame = match self.source.read() {
                Ok(frame) => frame,
                Err(e) => {
                    log::error!("Unable to read frame: {e}");
                    break LoopExit::StreamEnded {
                        reason: e.to_string(),
                    };
                }
            };
            self.logger.timing("capture", elapsed_ms(start));

            let start = Instant::now();
            let regions = match self.detector.detect(&frame) {
                Ok(regions) => regions,
                Err(e) => {
                    self.logger
                        .warn(&format!("Detection failed on frame {}: {e}", frame.index()));
                    Vec::new()
                }
            };
            self.logger.timing("detect", elapsed_ms(start));
            self.logger.metric("faces", regions.len() as f64);

            let start = Instant::now();
            if let Err(e) = self.annotator.annotate(&mut frame, &regions) {
                self.logger
                    .warn(&format!("Annotation failed on frame {}: {e}", frame.index()));
            }
            self.logger.timing("annotate", elapsed_ms(start));

            let start = Instant::now();
            if let Err(e) = self.sink.render(&frame) {
                render_failures += 1;
                self.logger.warn(&format!("Error: {e}"));
            }
            self.logger.timing("render", elapsed_ms(start));

            frames += 1;
            self.logger.progress(frames);

            if self.quit.should_terminate() {
                break LoopExit::QuitRequested;
            }
            if self.max_frames.is_some_and(|max| frames >= max) {
                break LoopExit::FrameLimit;
            }
        };

        self.source.release();
        self.sink.close();
        self.logger.summary();

        LoopSummary {
            frames,
            render_failures,
            exit,
        }
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
