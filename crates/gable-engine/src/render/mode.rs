use std::fmt;

/// How the shared index buffer is interpreted when drawing.
///
/// The same indices feed every mode: triples become triangles, pairs become
/// line segments, and each index becomes a point.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum RenderMode {
    #[default]
    Triangles,
    Lines,
    Points,
}

impl RenderMode {
    pub const ALL: [RenderMode; 3] = [RenderMode::Triangles, RenderMode::Lines, RenderMode::Points];

    pub const fn topology(self) -> wgpu::PrimitiveTopology {
        match self {
            RenderMode::Triangles => wgpu::PrimitiveTopology::TriangleList,
            RenderMode::Lines => wgpu::PrimitiveTopology::LineList,
            RenderMode::Points => wgpu::PrimitiveTopology::PointList,
        }
    }

    /// Indices consumed per primitive.
    pub const fn indices_per_primitive(self) -> u32 {
        match self {
            RenderMode::Triangles => 3,
            RenderMode::Lines => 2,
            RenderMode::Points => 1,
        }
    }

    /// Largest count `<= count` that forms whole primitives.
    #[inline]
    pub const fn primitive_aligned(self, count: u32) -> u32 {
        count - count % self.indices_per_primitive()
    }

    pub const fn name(self) -> &'static str {
        match self {
            RenderMode::Triangles => "triangles",
            RenderMode::Lines => "lines",
            RenderMode::Points => "points",
        }
    }

    #[inline]
    pub(crate) const fn slot(self) -> usize {
        match self {
            RenderMode::Triangles => 0,
            RenderMode::Lines => 1,
            RenderMode::Points => 2,
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
