pub mod quit_signal;
