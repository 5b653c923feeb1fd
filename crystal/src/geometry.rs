use crate::vector::Vec3;

/// Axis-aligned bounding box, stored as component-wise minimum and maximum.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    pub min: Vec3<f32>,
    pub max: Vec3<f32>,
}

impl Aabb {
    pub const fn new(min: Vec3<f32>, max: Vec3<f32>) -> Self {
        Self { min, max }
    }

    /// Smallest box containing every point, `None` if there are no points.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Vec3<f32>>,
    {
        let mut points = points.into_iter();
        let first = *points.next()?;

        let mut bounds = Self::new(first, first);
        for point in points {
            bounds.grow(point);
        }
        Some(bounds)
    }

    /// Grows the box to include the given point.
    pub fn grow(&mut self, point: &Vec3<f32>) {
        self.min = self.min.component_min(point);
        self.max = self.max.component_max(point);
    }

    pub fn size(&self) -> Vec3<f32> {
        self.max - self.min
    }

    pub fn center(&self) -> Vec3<f32> {
        (self.min + self.max) * 0.5
    }

    pub fn extents(&self) -> Vec3<f32> {
        self.size() * 0.5
    }

    pub fn contains(&self, point: &Vec3<f32>) -> bool {
        point.x >= self.min.x
            && point.y >= self.min.y
            && point.z >= self.min.z
            && point.x <= self.max.x
            && point.y <= self.max.y
            && point.z <= self.max.z
    }
}

/// Calculates smooth per-vertex normals from indexed triangles.
// for each triangle:
// - u = v1 - v0, v = v2 - v0
// - face normal = cross(u, v), counter-clockwise winding is front facing
// - the unnormalized cross product weights each face by its area
// for each vertex:
// - sum the normals of all faces using it, then normalize
// vertices without a (non-degenerate) face keep a zero normal
pub fn vertex_normals<I>(positions: &[Vec3<f32>], triangles: I) -> Vec<Vec3<f32>>
where
    I: IntoIterator<Item = [u32; 3]>,
{
    let mut normals = vec![Vec3::zero(); positions.len()];

    for [i0, i1, i2] in triangles {
        let (i0, i1, i2) = (i0 as usize, i1 as usize, i2 as usize);
        let (v0, v1, v2) = match (positions.get(i0), positions.get(i1), positions.get(i2)) {
            (Some(v0), Some(v1), Some(v2)) => (*v0, *v1, *v2),
            _ => continue,
        };

        let u = v1 - v0;
        let v = v2 - v0;
        let face_normal = u.cross_product(&v);

        normals[i0] += face_normal;
        normals[i1] += face_normal;
        normals[i2] += face_normal;
    }

    normals
        .into_iter()
        .map(|normal| normal.normalize().unwrap_or_else(Vec3::zero))
        .collect()
}
