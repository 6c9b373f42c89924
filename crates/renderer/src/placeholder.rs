//! Built-in cube shown when no model could be loaded.

use crate::GpuVertex;

const HALF: f32 = 0.5;

/// Cube of side 1 centred at the origin: 12 CCW triangles with flat normals.
pub fn placeholder_cube() -> Vec<GpuVertex> {
    let c = [
        [-HALF, -HALF, -HALF], // 0
        [HALF, -HALF, -HALF],  // 1
        [HALF, HALF, -HALF],   // 2
        [-HALF, HALF, -HALF],  // 3
        [-HALF, -HALF, HALF],  // 4
        [HALF, -HALF, HALF],   // 5
        [HALF, HALF, HALF],    // 6
        [-HALF, HALF, HALF],   // 7
    ];
    #[rustfmt::skip]
    let faces: [([usize; 6], [f32; 3]); 6] = [
        ([4, 5, 6, 4, 6, 7], [0.0, 0.0, 1.0]),   // +Z
        ([0, 2, 1, 0, 3, 2], [0.0, 0.0, -1.0]),  // -Z
        ([3, 7, 6, 3, 6, 2], [0.0, 1.0, 0.0]),   // +Y
        ([0, 1, 5, 0, 5, 4], [0.0, -1.0, 0.0]),  // -Y
        ([0, 4, 7, 0, 7, 3], [-1.0, 0.0, 0.0]),  // -X
        ([1, 2, 6, 1, 6, 5], [1.0, 0.0, 0.0]),   // +X
    ];

    faces
        .iter()
        .flat_map(|(idx, normal)| idx.iter().map(move |&i| GpuVertex::new(c[i], *normal, None)))
        .collect()
}
