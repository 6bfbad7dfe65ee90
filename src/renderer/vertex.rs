//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
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

/// Convert an 8-bit sRGB triple to a vertex color
pub const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

/// Colors for game elements
pub mod colors {
    use super::rgb;

    pub const SKY: [f32; 4] = rgb(135, 206, 235);
    pub const GROUND: [f32; 4] = rgb(100, 100, 100);
    pub const SHIRT: [f32; 4] = rgb(255, 107, 107);
    pub const SKIN: [f32; 4] = rgb(255, 212, 163);
    pub const HAIR: [f32; 4] = rgb(92, 64, 51);
    pub const EYES: [f32; 4] = rgb(0, 0, 0);
    pub const TRUNK: [f32; 4] = rgb(139, 69, 19);
    pub const LEAVES: [f32; 4] = rgb(34, 139, 34);
    pub const COIN: [f32; 4] = rgb(255, 215, 0);
    pub const BILL: [f32; 4] = rgb(34, 139, 34);
    pub const PASTRY: [f32; 4] = rgb(210, 105, 30);
}
