pub mod frame_sink;
pub mod framebuffer_config;
