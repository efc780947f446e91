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

/// Convert one sRGB channel to linear light
#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Colors for game elements (sRGB)
pub mod colors {
    const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
    }

    pub const SKY: [f32; 4] = rgb(135, 206, 235);
    pub const BALL: [f32; 4] = rgb(255, 140, 0);
    pub const HOOP: [f32; 4] = rgb(255, 0, 0);
    pub const NET: [f32; 4] = rgb(255, 255, 255);
    pub const BACKBOARD: [f32; 4] = rgb(255, 255, 255);
    pub const TEXT: [f32; 4] = rgb(0, 0, 0);
    pub const LEVEL_TEXT: [f32; 4] = rgb(0, 128, 0);
    pub const POWER_FILL: [f32; 4] = rgb(255, 0, 0);
    pub const POWER_FRAME: [f32; 4] = rgb(0, 0, 0);
    pub const AIM_LINE: [f32; 4] = rgb(0, 0, 0);
    pub const GAME_OVER: [f32; 4] = rgb(255, 0, 0);
}
