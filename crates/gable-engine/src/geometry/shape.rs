use super::vec3::Vec3;

/// Rigid mesh: a vertex list plus connectivity into it.
///
/// The index list is interpreted by the draw primitive (triangles, line pairs or
/// single points); it is fixed at construction and never changes. Vertices move
/// only through [`translate`](Self::translate).
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    vertices: Vec<Vec3>,
    indices: Vec<u32>,
}

impl Shape {
    /// Creates a shape from its vertices and indices.
    ///
    /// Every index must reference an existing vertex.
    pub fn new(vertices: Vec<Vec3>, indices: Vec<u32>) -> Self {
        debug_assert!(
            indices.iter().all(|&i| (i as usize) < vertices.len()),
            "Shape::new: index out of range for {} vertices",
            vertices.len()
        );
        Self { vertices, indices }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Adds `delta` to every vertex in place.
    pub fn translate(&mut self, delta: Vec3) {
        debug_assert!(delta.is_finite(), "non-finite translation {delta:?}");
        for v in &mut self.vertices {
            *v += delta;
        }
    }

    /// Appends `x, y, z` for every vertex to `out`.
    pub(crate) fn write_vertices(&self, out: &mut Vec<f32>) {
        out.extend(self.vertices.iter().flat_map(|v| v.to_array()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> Shape {
        Shape::new(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            vec![0, 1, 2, 0, 2, 3],
        )
    }

    #[test]
    fn translate_offsets_every_vertex() {
        let mut s = quad();
        let before = s.vertices().to_vec();
        let d = Vec3::new(0.5, -0.25, 2.0);

        s.translate(d);

        for (old, new) in before.iter().zip(s.vertices()) {
            assert_eq!(*new, *old + d);
        }
    }

    #[test]
    fn translate_keeps_topology() {
        let mut s = quad();
        let indices = s.indices().to_vec();

        s.translate(Vec3::new(3.0, 3.0, 3.0));
        s.translate(Vec3::new(-1.0, 0.0, 0.5));

        assert_eq!(s.vertices().len(), 4);
        assert_eq!(s.indices(), indices.as_slice());
    }

    #[test]
    fn translate_by_zero_is_noop() {
        let mut s = quad();
        let original = s.clone();
        s.translate(Vec3::zero());
        assert_eq!(s, original);
    }

    #[test]
    fn write_vertices_is_xyz_packed() {
        let s = Shape::new(
            vec![Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)],
            vec![0, 1],
        );
        let mut out = vec![9.0];
        s.write_vertices(&mut out);
        assert_eq!(out, vec![9.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }
}
