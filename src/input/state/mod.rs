mod actions;
mod core;
mod export;
mod pointer;
mod render;
#[cfg(test)]
mod tests;

pub use self::core::{DrawingSession, DrawingState, SessionSettings};
