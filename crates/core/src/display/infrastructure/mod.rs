pub mod bgr565;
pub mod frame_resizer;
pub mod framebuffer_renderer;
