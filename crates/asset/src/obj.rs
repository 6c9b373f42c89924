//! Lenient OBJ parser for `v`, `vt`, `vn` and `f` records.
//!
//! Malformed tokens degrade to defaults or absent indices instead of failing
//! the whole file; only an unreadable file or a file with no usable geometry
//! is reported as an error.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
    str::SplitWhitespace,
};

use crate::error::{LoadError, LoadResult};

/// One vertex-within-a-face reference. `None` marks an absent index.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Corner {
    pub v: Option<usize>,
    pub vt: Option<usize>,
    pub vn: Option<usize>,
}

impl Corner {
    pub fn new(v: Option<usize>, vt: Option<usize>, vn: Option<usize>) -> Self {
        Self { v, vt, vn }
    }
}

/// Three corners in winding order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Triangle {
    pub corners: [Corner; 3],
}

impl Triangle {
    pub fn new(a: Corner, b: Corner, c: Corner) -> Self {
        Self { corners: [a, b, c] }
    }

    /// Position indices of all three corners, if every corner has one.
    pub fn positions(&self) -> Option<[usize; 3]> {
        let [a, b, c] = self.corners;
        Some([a.v?, b.v?, c.v?])
    }
}

/// Raw attribute pools and fan-triangulated faces, in file order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedMesh {
    pub(crate) positions: Vec<[f32; 3]>,
    pub(crate) normals: Vec<[f32; 3]>,
    pub(crate) texcoords: Vec<[f32; 2]>,
    pub(crate) triangles: Vec<Triangle>,
    /// Fan over the corners of each face that carry a position.
    pub(crate) position_triangles: Vec<[usize; 3]>,
}

impl ParsedMesh {
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    pub fn texcoords(&self) -> &[[f32; 2]] {
        &self.texcoords
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn position_triangles(&self) -> &[[usize; 3]] {
        &self.position_triangles
    }
}

/// Parse an OBJ file from a path.
pub fn parse(path: impl AsRef<Path>) -> LoadResult<ParsedMesh> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;
    parse_obj(BufReader::new(file), path)
}

/// Convenience helper to parse an OBJ string literal.
pub fn parse_str(contents: &str) -> LoadResult<ParsedMesh> {
    parse_obj(io::Cursor::new(contents), Path::new("<string>"))
}

fn parse_obj<R: BufRead>(reader: R, source: &Path) -> LoadResult<ParsedMesh> {
    let mut mesh = ParsedMesh::default();

    for (line_no, raw) in reader.split(b'\n').enumerate() {
        let raw = raw.map_err(|err| LoadError::NotFound {
            path: source.to_path_buf(),
            source: err,
        })?;
        let line = String::from_utf8_lossy(&raw);
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut parts = trimmed.split_whitespace();
        let Some(tag) = parts.next() else {
            continue;
        };

        match tag {
            "v" => mesh.positions.push(read_floats(&mut parts)),
            "vn" => mesh.normals.push(read_floats(&mut parts)),
            "vt" => {
                let [u, v, _w] = read_floats::<3>(&mut parts);
                mesh.texcoords.push([u, v]);
            }
            "f" => {
                let tokens: Vec<&str> = parts.collect();
                if tokens.len() < 3 {
                    log::warn!(
                        "{}: skipping face with {} corner(s) on line {}",
                        source.display(),
                        tokens.len(),
                        line_no + 1
                    );
                    continue;
                }
                let counts = PoolCounts {
                    positions: mesh.positions.len(),
                    texcoords: mesh.texcoords.len(),
                    normals: mesh.normals.len(),
                };
                let corners: Vec<Corner> = tokens
                    .iter()
                    .map(|token| parse_corner(token, counts))
                    .collect();
                push_face(&mut mesh, &corners);
            }
            _ => {
                // g/o/s/usemtl/mtllib and friends are not supported
            }
        }
    }

    log::debug!(
        "{}: parsed {} positions, {} texcoords, {} normals, {} triangles",
        source.display(),
        mesh.positions.len(),
        mesh.texcoords.len(),
        mesh.normals.len(),
        mesh.triangles.len()
    );

    let drawable = mesh.triangles.iter().any(|t| t.positions().is_some());
    if mesh.positions.is_empty() || mesh.position_triangles.is_empty() || !drawable {
        return Err(LoadError::EmptyOrUnsupported {
            path: source.to_path_buf(),
        });
    }

    Ok(mesh)
}

/// Fan-triangulate a face around corner 0, once over full corners and once
/// over the corners that carry a position.
fn push_face(mesh: &mut ParsedMesh, corners: &[Corner]) {
    for k in 2..corners.len() {
        mesh.triangles
            .push(Triangle::new(corners[0], corners[k - 1], corners[k]));
    }

    let with_position: Vec<usize> = corners.iter().filter_map(|c| c.v).collect();
    for k in 2..with_position.len() {
        mesh.position_triangles
            .push([with_position[0], with_position[k - 1], with_position[k]]);
    }
}

/// Read up to `N` floats. Missing components default to 0, and reading stops
/// at the first unparsable component.
fn read_floats<const N: usize>(parts: &mut SplitWhitespace<'_>) -> [f32; N] {
    let mut out = [0.0; N];
    for slot in out.iter_mut() {
        match parts.next().and_then(|token| token.parse::<f32>().ok()) {
            Some(value) => *slot = value,
            None => break,
        }
    }
    out
}

/// Pool sizes at the moment a face line is read.
#[derive(Clone, Copy, Debug)]
struct PoolCounts {
    positions: usize,
    texcoords: usize,
    normals: usize,
}

/// Parse a face token of the form `v`, `v/vt`, `v//vn` or `v/vt/vn`.
fn parse_corner(token: &str, counts: PoolCounts) -> Corner {
    let mut split = token.splitn(3, '/');
    let v = split.next().and_then(|s| resolve_index(s, counts.positions));
    let vt = split.next().and_then(|s| resolve_index(s, counts.texcoords));
    let vn = split.next().and_then(|s| resolve_index(s, counts.normals));
    Corner::new(v, vt, vn)
}

/// Resolve a 1-based or negative-relative OBJ index against `len`.
fn resolve_index(token: &str, len: usize) -> Option<usize> {
    let raw = token.parse::<i64>().ok()?;
    let idx = match raw {
        0 => return None,
        r if r > 0 => r - 1,
        r => i64::try_from(len).ok()?.checked_add(r)?,
    };
    let idx = usize::try_from(idx).ok()?;
    (idx < len).then_some(idx)
}
