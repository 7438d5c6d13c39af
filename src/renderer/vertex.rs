//! Vertex type and palette for 2D rendering

use bytemuck::{Pod, Zeroable};

/// 2D vertex in canvas space with a straight-alpha color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for screen elements
pub mod colors {
    use crate::{rgb, rgba};

    pub const WHITE: [f32; 4] = rgb(255, 255, 255);
    pub const GOLD: [f32; 4] = rgb(255, 215, 0);

    pub const SKY_TOP: [f32; 4] = rgb(20, 30, 48);
    pub const SKY_BOTTOM: [f32; 4] = rgb(36, 59, 85);

    pub const LIGHT_BLUE: [f32; 4] = rgb(173, 216, 230);
    pub const TURQUOISE: [f32; 4] = rgb(72, 209, 204);
    pub const TEAL: [f32; 4] = rgb(0, 128, 128);
    pub const STEEL_BLUE: [f32; 4] = rgb(70, 130, 180);
    pub const MIDNIGHT_BLUE: [f32; 4] = rgb(25, 25, 112);
    pub const ROYAL_BLUE: [f32; 4] = rgb(65, 105, 225);

    pub const HEADER_FILL: [f32; 4] = rgba(139, 0, 0, 200);
    pub const HEADER_BORDER: [f32; 4] = rgba(255, 69, 0, 150);
}
