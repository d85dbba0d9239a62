use core::ops::Range;

use super::FLOATS_PER_VERTEX;
use super::shape::Shape;
use super::vec3::Vec3;

/// Named part of the house, in draw/flatten order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Part {
    Wall,
    Roof,
    Door,
}

impl Part {
    /// All parts in wall → roof → door order.
    pub const ALL: [Part; 3] = [Part::Wall, Part::Roof, Part::Door];

    pub const fn name(self) -> &'static str {
        match self {
            Part::Wall => "wall",
            Part::Roof => "roof",
            Part::Door => "door",
        }
    }

    #[inline]
    const fn slot(self) -> usize {
        match self {
            Part::Wall => 0,
            Part::Roof => 1,
            Part::Door => 2,
        }
    }
}

/// Location of one part inside the flattened house buffers.
///
/// `indices` is the range to pass to an indexed draw over the buffer returned by
/// [`House::flatten_indices`]; `base_vertex` is added to every index of that
/// range, since indices are stored local to their shape.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawRange {
    pub part: Part,
    pub indices: Range<u32>,
    pub base_vertex: i32,
}

/// Wall, roof and door moved together as one rigid body.
#[derive(Debug, Clone, PartialEq)]
pub struct House {
    shapes: [Shape; 3],
    offset: Vec3,
}

impl House {
    /// Builds the house at its initial position.
    ///
    /// The roof rests on the top edge of the wall and the door stands on the
    /// bottom edge, inside the wall face.
    pub fn new() -> Self {
        let wall = Shape::new(
            vec![
                Vec3::new(-0.5, -0.6, 0.0),
                Vec3::new(0.5, -0.6, 0.0),
                Vec3::new(0.5, 0.2, 0.0),
                Vec3::new(-0.5, 0.2, 0.0),
            ],
            vec![0, 1, 2, 0, 2, 3],
        );

        let roof = Shape::new(
            vec![
                Vec3::new(-0.65, 0.2, 0.0),
                Vec3::new(0.65, 0.2, 0.0),
                Vec3::new(0.3, 0.65, 0.0),
                Vec3::new(-0.3, 0.65, 0.0),
            ],
            vec![0, 1, 2, 0, 2, 3],
        );

        let door = Shape::new(
            vec![
                Vec3::new(-0.15, -0.6, 0.0),
                Vec3::new(0.15, -0.6, 0.0),
                Vec3::new(0.0, -0.15, 0.0),
            ],
            vec![0, 1, 2],
        );

        Self {
            shapes: [wall, roof, door],
            offset: Vec3::zero(),
        }
    }

    #[inline]
    pub fn part(&self, part: Part) -> &Shape {
        &self.shapes[part.slot()]
    }

    #[inline]
    pub fn wall(&self) -> &Shape {
        self.part(Part::Wall)
    }

    #[inline]
    pub fn roof(&self) -> &Shape {
        self.part(Part::Roof)
    }

    #[inline]
    pub fn door(&self) -> &Shape {
        self.part(Part::Door)
    }

    /// Iterates parts in wall → roof → door order.
    pub fn parts(&self) -> impl Iterator<Item = (Part, &Shape)> + '_ {
        Part::ALL.into_iter().map(move |p| (p, self.part(p)))
    }

    /// Total displacement applied through [`move_by`](Self::move_by).
    #[inline]
    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    /// Translates wall, roof and door (in that order) by `delta`.
    pub fn move_by(&mut self, delta: Vec3) {
        for shape in &mut self.shapes {
            shape.translate(delta);
        }
        self.offset += delta;
    }

    pub fn vertex_count(&self) -> usize {
        self.shapes.iter().map(|s| s.vertices().len()).sum()
    }

    pub fn index_count(&self) -> usize {
        self.shapes.iter().map(|s| s.indices().len()).sum()
    }

    /// Returns every vertex as packed `x, y, z` floats, wall → roof → door.
    pub fn flatten_vertices(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.vertex_count() * FLOATS_PER_VERTEX);
        self.flatten_vertices_into(&mut out);
        out
    }

    /// Like [`flatten_vertices`](Self::flatten_vertices) but reuses `out`.
    ///
    /// `out` is cleared first.
    pub fn flatten_vertices_into(&self, out: &mut Vec<f32>) {
        out.clear();
        out.reserve(self.vertex_count() * FLOATS_PER_VERTEX);
        for shape in &self.shapes {
            shape.write_vertices(out);
        }
    }

    /// Returns every shape's indices concatenated, wall → roof → door.
    ///
    /// Indices are local to their shape; see [`draw_ranges`](Self::draw_ranges).
    pub fn flatten_indices(&self) -> Vec<u32> {
        let mut out = Vec::with_capacity(self.index_count());
        for shape in &self.shapes {
            out.extend_from_slice(shape.indices());
        }
        out
    }

    /// Per-part ranges into the flattened buffers.
    pub fn draw_ranges(&self) -> [DrawRange; 3] {
        let mut first_index = 0u32;
        let mut base_vertex = 0i32;

        Part::ALL.map(|part| {
            let shape = self.part(part);
            let count = shape.indices().len() as u32;
            let range = DrawRange {
                part,
                indices: first_index..first_index + count,
                base_vertex,
            };
            first_index += count;
            base_vertex += shape.vertices().len() as i32;
            range
        })
    }
}

impl Default for House {
    fn default() -> Self {
        Self::new()
    }
}
