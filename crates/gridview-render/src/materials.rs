//! Material descriptors for cell geometry.
//!
//! The host renderer owns the actual pipelines; these descriptors carry the
//! shading decisions made while building a cell, plus `Pod` uniform layouts
//! that can be uploaded as-is.

use glam::Vec3;

/// Shading style of a solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadeStyle {
    /// Smooth shading using interpolated vertex normals.
    Smooth,
    /// Flat shading using face normals.
    #[default]
    Flat,
}

/// Policy for rendering backfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackfacePolicy {
    /// Backfaces rendered identically to front faces (double sided).
    #[default]
    Identical,
    /// Backfaces are culled (not rendered).
    Cull,
}

/// Material of a cell's solid surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidMaterial {
    /// Uniform surface color.
    pub color: Vec3,
    /// Shading style.
    pub shade_style: ShadeStyle,
    /// Backface handling.
    pub backface_policy: BackfacePolicy,
}

impl SolidMaterial {
    /// Flat-shaded, double-sided material with a single color.
    pub fn flat(color: Vec3) -> Self {
        Self {
            color,
            shade_style: ShadeStyle::Flat,
            backface_policy: BackfacePolicy::Identical,
        }
    }

    /// Returns whether both windings of a triangle are drawn.
    pub fn is_double_sided(&self) -> bool {
        self.backface_policy == BackfacePolicy::Identical
    }
}

/// Material of a cell outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMaterial {
    /// Line color.
    pub color: Vec3,
    /// Line opacity (0.0 = invisible, 1.0 = opaque).
    pub opacity: f32,
}

impl LineMaterial {
    /// Creates a line material; opacity is clamped to `[0, 1]`.
    pub fn new(color: Vec3, opacity: f32) -> Self {
        Self {
            color,
            opacity: opacity.clamp(0.0, 1.0),
        }
    }

    /// Returns whether the lines need blending.
    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }
}

impl Default for LineMaterial {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 0.5)
    }
}

/// Uniforms for solid cell rendering.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SolidUniforms {
    /// Surface color (RGBA)
    pub color: [f32; 4],
    /// Shading style: 0 = smooth, 1 = flat
    pub shade_style: u32,
    /// Backface policy: 0 = identical, 1 = cull
    pub backface_policy: u32,
    /// Padding to 16 bytes
    pub _pad: [u32; 2],
}

impl From<&SolidMaterial> for SolidUniforms {
    fn from(material: &SolidMaterial) -> Self {
        Self {
            color: material.color.extend(1.0).to_array(),
            shade_style: match material.shade_style {
                ShadeStyle::Smooth => 0,
                ShadeStyle::Flat => 1,
            },
            backface_policy: match material.backface_policy {
                BackfacePolicy::Identical => 0,
                BackfacePolicy::Cull => 1,
            },
            _pad: [0; 2],
        }
    }
}

/// Uniforms for outline rendering.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineUniforms {
    /// Line color (RGBA), alpha holds the opacity
    pub color: [f32; 4],
}

impl From<&LineMaterial> for LineUniforms {
    fn from(material: &LineMaterial) -> Self {
        Self {
            color: material.color.extend(material.opacity).to_array(),
        }
    }
}
