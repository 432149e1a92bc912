/// WaterPlane - flat grid geometry for the water surface

/// Square grid in the z = 0 plane, centered on the origin
///
/// Vertices are laid out row by row along +y, `divisions + 1` per row.
#[derive(Debug, Clone, PartialEq)]
pub struct WaterPlane {
    /// x, y, z per vertex
    pub positions: Vec<f32>,
    /// u, v per vertex, 0..1 across the plane
    pub uvs: Vec<f32>,
    /// Two counter-clockwise triangles per cell (seen from +z)
    pub indices: Vec<u16>,
}

impl WaterPlane {
    /// Largest grid whose vertices are all addressable with `u16` indices
    pub const MAX_DIVISIONS: u32 = 255;

    /// Build a `size` x `size` plane split into `divisions` cells per side
    ///
    /// `divisions` is clamped to `1..=MAX_DIVISIONS`.
    pub fn generate(size: f32, divisions: u32) -> Self {
        let divisions = divisions.clamp(1, Self::MAX_DIVISIONS);
        let row = divisions + 1;
        let vertex_count = (row * row) as usize;

        let mut positions = Vec::with_capacity(vertex_count * 3);
        let mut uvs = Vec::with_capacity(vertex_count * 2);
        for j in 0..row {
            let v = j as f32 / divisions as f32;
            for i in 0..row {
                let u = i as f32 / divisions as f32;
                positions.extend_from_slice(&[(u - 0.5) * size, (v - 0.5) * size, 0.0]);
                uvs.extend_from_slice(&[u, v]);
            }
        }

        let mut indices = Vec::with_capacity((divisions * divisions * 6) as usize);
        for j in 0..divisions {
            for i in 0..divisions {
                let a = (j * row + i) as u16;
                let b = a + 1;
                let c = a + row as u16;
                let d = c + 1;
                indices.extend_from_slice(&[a, b, d, a, d, c]);
            }
        }

        Self { positions, uvs, indices }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }
}

#[cfg(test)]
#[path = "water_plane_tests.rs"]
mod tests;
