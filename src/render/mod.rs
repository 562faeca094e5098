//! Backend-agnostic rendering module
//!
//! The sim never draws. Each frame the host asks `scene::build_scene` for
//! an ordered draw list and replays it with whatever graphics API it has.
//! `shapes` tessellates the filled primitives into raw triangles for hosts
//! that want vertex buffers.

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::{DrawCmd, ScreenImage, build_scene, fit_screen_rect};
pub use vertex::{Vertex, colors};
