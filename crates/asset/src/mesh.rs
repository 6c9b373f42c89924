//! Mesh assembly: smoothed fallback normals and the ordered draw stream.

use glam::Vec3;

use crate::obj::{ParsedMesh, Triangle};

/// Magnitudes at or below this are treated as degenerate.
pub const NORMAL_EPSILON: f32 = 1e-8;

/// Normal used for positions that no non-degenerate face touches.
pub const DEFAULT_NORMAL: [f32; 3] = [0.0, 0.0, 1.0];

/// Where the normal of a [`DrawVertex`] came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum NormalSource {
    /// `vn` record referenced by the corner.
    File,
    /// Smoothed per-position normal.
    Computed,
}

/// One resolved corner of the draw stream. Values are in object space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub normal_source: NormalSource,
    pub texcoord: Option<[f32; 2]>,
}

/// Counts reported back to the UI layer after a load.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MeshSummary {
    pub vertex_count: usize,
    pub texcoord_count: usize,
    pub normal_count: usize,
    pub triangle_count: usize,
    /// Triangles that made it into the stream.
    pub drawn_triangle_count: usize,
    /// At least one drawn corner carries a texcoord.
    pub textured: bool,
}

/// Renderer-agnostic output of a load: the pools plus the ordered stream,
/// three records per surviving triangle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawPackage {
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    texcoords: Vec<[f32; 2]>,
    triangles: Vec<Triangle>,
    computed_normals: Vec<[f32; 3]>,
    stream: Vec<DrawVertex>,
}

impl DrawPackage {
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    /// File-supplied normals.
    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    pub fn texcoords(&self) -> &[[f32; 2]] {
        &self.texcoords
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// One smoothed normal per position.
    pub fn computed_normals(&self) -> &[[f32; 3]] {
        &self.computed_normals
    }

    pub fn stream(&self) -> &[DrawVertex] {
        &self.stream
    }

    pub fn has_texcoords(&self) -> bool {
        self.stream.iter().any(|v| v.texcoord.is_some())
    }

    pub fn summary(&self) -> MeshSummary {
        MeshSummary {
            vertex_count: self.positions.len(),
            texcoord_count: self.texcoords.len(),
            normal_count: self.normals.len(),
            triangle_count: self.triangles.len(),
            drawn_triangle_count: self.stream.len() / 3,
            textured: self.has_texcoords(),
        }
    }
}

/// Unit normal of triangle `abc` (counter-clockwise winding), or zero when
/// the triangle is degenerate or its cross product is not finite.
pub fn face_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    let n = (b - a).cross(c - a);
    let len = n.length();
    if len.is_finite() && len > NORMAL_EPSILON {
        n / len
    } else {
        Vec3::ZERO
    }
}

/// Per-position normals: sum of incident face normals, then normalized.
pub fn smooth_normals(positions: &[[f32; 3]], triangles: &[[usize; 3]]) -> Vec<[f32; 3]> {
    let mut acc = vec![Vec3::ZERO; positions.len()];

    for &[ia, ib, ic] in triangles {
        let (Some(a), Some(b), Some(c)) = (positions.get(ia), positions.get(ib), positions.get(ic))
        else {
            continue;
        };
        let n = face_normal(Vec3::from_array(*a), Vec3::from_array(*b), Vec3::from_array(*c));
        acc[ia] += n;
        acc[ib] += n;
        acc[ic] += n;
    }

    acc.into_iter()
        .map(|n| {
            let len = n.length();
            if len > NORMAL_EPSILON {
                (n / len).to_array()
            } else {
                DEFAULT_NORMAL
            }
        })
        .collect()
}

/// Build the draw package from a parsed mesh.
pub fn assemble(parsed: ParsedMesh) -> DrawPackage {
    let ParsedMesh {
        positions,
        normals,
        texcoords,
        triangles,
        position_triangles,
    } = parsed;

    let computed_normals = smooth_normals(&positions, &position_triangles);

    let mut stream = Vec::with_capacity(triangles.len() * 3);
    for tri in &triangles {
        // A corner without a position cannot be drawn; drop the whole
        // triangle so the stream stays a multiple of three.
        if tri.positions().is_none() {
            continue;
        }
        for corner in tri.corners {
            let Some(v) = corner.v else { continue };
            let position = positions[v];
            let (normal, normal_source) = match corner.vn.and_then(|i| normals.get(i)) {
                Some(n) => (*n, NormalSource::File),
                None => (computed_normals[v], NormalSource::Computed),
            };
            let texcoord = corner.vt.and_then(|i| texcoords.get(i).copied());
            stream.push(DrawVertex {
                position,
                normal,
                normal_source,
                texcoord,
            });
        }
    }

    DrawPackage {
        positions,
        normals,
        texcoords,
        triangles,
        computed_normals,
        stream,
    }
}
