//! Rendering module
//!
//! `scene` draws the game through the `Canvas` trait. The WebGPU pipeline
//! draws the rectangles; text goes to whatever the frontend pairs it with.

pub mod canvas;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use canvas::{Canvas, Color, DrawCommand, Recorder};
pub use pipeline::RenderState;
pub use scene::draw_frame;
pub use shapes::QuadBatch;
