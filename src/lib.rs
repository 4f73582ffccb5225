mod app;
mod board;
mod dom;
mod history;
mod input;
mod render;
mod state;

pub use app::run;
