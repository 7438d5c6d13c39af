//! Rendering module
//!
//! Screens are drawn onto an abstract [`Canvas`]. [`MeshCanvas`] tessellates
//! the drawing into colored triangles for the wgpu pipeline; [`CommandList`]
//! records it for inspection.

pub mod builtin_font;
pub mod canvas;
pub mod mesh;
pub mod pipeline;
pub mod recorder;
pub mod screens;
pub mod shapes;
pub mod text;
pub mod vertex;

pub use canvas::{Canvas, Paint, TextStyle, Weight};
pub use mesh::MeshCanvas;
pub use pipeline::RenderState;
pub use recorder::{CommandList, DrawCommand};
pub use screens::render_frame;
pub use text::{Font, FontError};
pub use vertex::Vertex;
