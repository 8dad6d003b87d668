//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
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
    /// Daytime sky, same as the clear color
    pub const SKY: [f32; 4] = [0.529, 0.808, 0.922, 1.0];
    pub const TILE: [f32; 4] = [0.45, 0.30, 0.16, 1.0];
    pub const TILE_TOP: [f32; 4] = [0.36, 0.62, 0.25, 1.0];
    pub const PLAYER: [f32; 4] = [0.16, 0.35, 0.78, 1.0];
    pub const PLAYER_LIMB: [f32; 4] = [0.10, 0.22, 0.52, 1.0];
    pub const WALKER: [f32; 4] = [0.80, 0.22, 0.18, 1.0];
    pub const JUMPER: [f32; 4] = [0.85, 0.55, 0.12, 1.0];
    pub const WAIT_AND_GO: [f32; 4] = [0.55, 0.20, 0.62, 1.0];
    /// Stomped enemies linger as a faint ghost
    pub const DEFEATED_ALPHA: f32 = 0.18;
}
