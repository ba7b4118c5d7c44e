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

/// Colors for game elements
pub mod colors {
    /// 8-bit RGB to normalized RGBA
    const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
    }

    pub const SKY: [f32; 4] = rgb(0x70, 0xc5, 0xce);
    pub const FLAME_BASE: [f32; 4] = rgb(0xff, 0x45, 0x00);
    pub const FLAME_MID: [f32; 4] = rgb(0xff, 0x63, 0x47);
    pub const FLAME_TIP: [f32; 4] = rgb(0xff, 0xd7, 0x00);
    /// Flat obstacle when flame effects are off
    pub const OBSTACLE: [f32; 4] = FLAME_BASE;
    /// Player box when no sprite is available
    pub const PLAYER_FALLBACK: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const START_OVERLAY: [f32; 4] = [0.0, 0.0, 0.0, 0.5];

    pub const BIRD_BODY: [f32; 4] = rgb(0xf4, 0xc4, 0x30);
    pub const BIRD_WING: [f32; 4] = rgb(0xe0, 0x9a, 0x1c);
    pub const BIRD_BEAK: [f32; 4] = rgb(0xf0, 0x6a, 0x1e);
    pub const BIRD_EYE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BIRD_PUPIL: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}
