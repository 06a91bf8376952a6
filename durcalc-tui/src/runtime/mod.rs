mod event_loop;
mod keys;
mod mouse;

pub use event_loop::run_app;
