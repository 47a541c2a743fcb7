use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use three_d::{CpuMesh, Indices, Positions};

/// Polyhedra the scene can be built from. Every shape is centered on the origin
/// and fits inside the unit sphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Icosahedron,
    /// Three-sided cone, radius 1, height 1, axis along +y.
    Cone,
    Tetrahedron,
    Octahedron,
    /// Unit cube (edge length 1).
    Cube,
    Dodecahedron,
}

impl ShapeKind {
    pub const DEFAULT_SET: [ShapeKind; 2] = [ShapeKind::Icosahedron, ShapeKind::Cone];

    /// Outward-facing triangles of this shape.
    pub fn triangles(self) -> Vec<[Vector3<f32>; 3]> {
        match self {
            ShapeKind::Icosahedron => icosahedron(),
            ShapeKind::Cone => cone(3),
            ShapeKind::Tetrahedron => tetrahedron(),
            ShapeKind::Octahedron => octahedron(),
            ShapeKind::Cube => cube(),
            ShapeKind::Dodecahedron => dodecahedron(),
        }
    }

    /// Flat shaded, non-indexed mesh: three vertices and one face normal per triangle.
    pub fn cpu_mesh(self) -> CpuMesh {
        let triangles = self.triangles();

        let mut positions = Vec::with_capacity(triangles.len() * 3);
        let mut normals = Vec::with_capacity(triangles.len() * 3);

        for tri in triangles.iter() {
            let n = face_normal(tri);
            for v in tri {
                positions.push(three_d::vec3(v.x, v.y, v.z));
                normals.push(three_d::vec3(n.x, n.y, n.z));
            }
        }

        assert!(
            positions.len() % 3 == 0,
            "Require 3 verts per triangle, got {}",
            positions.len()
        );

        CpuMesh {
            positions: Positions::F32(positions),
            indices: Indices::None,
            normals: Some(normals),
            tangents: None,
            uvs: None,
            colors: None,
        }
    }
}

fn face_normal(tri: &[Vector3<f32>; 3]) -> Vector3<f32> {
    (tri[1] - tri[0]).cross(&(tri[2] - tri[0])).normalize()
}

/// Builds triangles from an index list, flipping any whose winding faces the origin.
/// All shapes here are convex and contain the origin, so this makes every face point outward.
fn outward_faces(verts: &[Vector3<f32>], faces: &[[usize; 3]]) -> Vec<[Vector3<f32>; 3]> {
    faces
        .iter()
        .map(|&[a, b, c]| {
            let tri = [verts[a], verts[b], verts[c]];
            let centroid = (tri[0] + tri[1] + tri[2]) / 3.0;
            if face_normal(&tri).dot(&centroid) < 0.0 {
                [tri[0], tri[2], tri[1]]
            } else {
                tri
            }
        })
        .collect()
}

fn icosahedron() -> Vec<[Vector3<f32>; 3]> {
    let t = (1.0 + 5f32.sqrt()) / 2.0;

    #[rustfmt::skip]
    let verts: Vec<Vector3<f32>> = [
        (-1.0, t, 0.0), (1.0, t, 0.0), (-1.0, -t, 0.0), (1.0, -t, 0.0),
        (0.0, -1.0, t), (0.0, 1.0, t), (0.0, -1.0, -t), (0.0, 1.0, -t),
        (t, 0.0, -1.0), (t, 0.0, 1.0), (-t, 0.0, -1.0), (-t, 0.0, 1.0),
    ]
    .into_iter()
    .map(|(x, y, z)| Vector3::new(x, y, z).normalize())
    .collect();

    #[rustfmt::skip]
    let faces = [
        [0, 11, 5], [0, 5, 1], [0, 1, 7], [0, 7, 10], [0, 10, 11],
        [1, 5, 9], [5, 11, 4], [11, 10, 2], [10, 7, 6], [7, 1, 8],
        [3, 9, 4], [3, 4, 2], [3, 2, 6], [3, 6, 8], [3, 8, 9],
        [4, 9, 5], [2, 4, 11], [6, 2, 10], [8, 6, 7], [9, 8, 1],
    ];

    outward_faces(&verts, &faces)
}

/// Cone with `segments` sides plus a base cap. Centered on its height,
/// so the apex is at y = 0.5 and the base at y = -0.5.
fn cone(segments: usize) -> Vec<[Vector3<f32>; 3]> {
    let apex = Vector3::new(0.0, 0.5, 0.0);
    let base_center = Vector3::new(0.0, -0.5, 0.0);

    let rim: Vec<Vector3<f32>> = (0..segments)
        .map(|i| {
            let theta = i as f32 / segments as f32 * std::f32::consts::TAU;
            Vector3::new(theta.sin(), -0.5, theta.cos())
        })
        .collect();

    let mut verts = rim.clone();
    verts.push(apex);
    verts.push(base_center);
    let apex_idx = segments;
    let base_idx = segments + 1;

    let mut faces = Vec::with_capacity(segments * 2);
    for i in 0..segments {
        let next = (i + 1) % segments;
        faces.push([apex_idx, i, next]);
        faces.push([base_idx, next, i]);
    }

    outward_faces(&verts, &faces)
}

fn tetrahedron() -> Vec<[Vector3<f32>; 3]> {
    let corners: [(f32, f32, f32); 4] = [
        (1.0, 1.0, 1.0),
        (-1.0, -1.0, 1.0),
        (-1.0, 1.0, -1.0),
        (1.0, -1.0, -1.0),
    ];
    let verts: Vec<Vector3<f32>> = corners
        .into_iter()
        .map(|(x, y, z)| Vector3::new(x, y, z).normalize())
        .collect();

    outward_faces(&verts, &[[2, 1, 0], [0, 3, 2], [1, 3, 0], [2, 3, 1]])
}

fn octahedron() -> Vec<[Vector3<f32>; 3]> {
    let verts: [Vector3<f32>; 6] = [
        Vector3::x(),
        -Vector3::x(),
        Vector3::y(),
        -Vector3::y(),
        Vector3::z(),
        -Vector3::z(),
    ];

    #[rustfmt::skip]
    let faces = [
        [0, 2, 4], [0, 4, 3], [0, 3, 5], [0, 5, 2],
        [1, 2, 5], [1, 5, 3], [1, 3, 4], [1, 4, 2],
    ];

    outward_faces(&verts, &faces)
}

fn cube() -> Vec<[Vector3<f32>; 3]> {
    // corner i has bit 0 -> x, bit 1 -> y, bit 2 -> z
    let verts: Vec<Vector3<f32>> = (0..8)
        .map(|i| {
            let pick = |bit: usize| if i & (1 << bit) != 0 { 0.5 } else { -0.5 };
            Vector3::new(pick(0), pick(1), pick(2))
        })
        .collect();

    #[rustfmt::skip]
    let faces = [
        [0, 2, 3], [0, 3, 1], // -z
        [4, 5, 7], [4, 7, 6], // +z
        [0, 1, 5], [0, 5, 4], // -y
        [2, 6, 7], [2, 7, 3], // +y
        [0, 4, 6], [0, 6, 2], // -x
        [1, 3, 7], [1, 7, 5], // +x
    ];

    outward_faces(&verts, &faces)
}

/// Twelve pentagons, each fanned into three triangles. Vertices are the cube corners
/// plus the cyclic permutations of (0, ±1/φ, ±φ), all pushed out to radius 1.
fn dodecahedron() -> Vec<[Vector3<f32>; 3]> {
    let phi = (1.0 + 5f32.sqrt()) / 2.0;
    let inv = 1.0 / phi;

    let mut verts = Vec::with_capacity(20);
    for x in [-1.0, 1.0] {
        for y in [-1.0, 1.0] {
            for z in [-1.0, 1.0] {
                verts.push(Vector3::new(x, y, z));
            }
        }
    }
    for a in [-inv, inv] {
        for b in [-phi, phi] {
            verts.push(Vector3::new(0.0, a, b));
            verts.push(Vector3::new(a, b, 0.0));
            verts.push(Vector3::new(b, 0.0, a));
        }
    }
    let verts: Vec<Vector3<f32>> = verts.into_iter().map(|v| v.normalize()).collect();

    // face normals: cyclic permutations of (±1, 0, ±φ)
    let mut normals = Vec::with_capacity(12);
    for a in [-1.0, 1.0] {
        for b in [-phi, phi] {
            normals.push(Vector3::new(a, 0.0, b).normalize());
            normals.push(Vector3::new(0.0, b, a).normalize());
            normals.push(Vector3::new(b, a, 0.0).normalize());
        }
    }

    let mut triangles = Vec::with_capacity(36);
    for n in normals {
        let top = verts.iter().map(|v| v.dot(&n)).fold(f32::MIN, f32::max);
        let mut ring: Vec<Vector3<f32>> = verts
            .iter()
            .filter(|v| v.dot(&n) > top - 1e-4)
            .copied()
            .collect();
        assert_eq!(ring.len(), 5, "dodecahedron face must be a pentagon");

        // walk the pentagon in order around its normal
        let center = ring.iter().sum::<Vector3<f32>>() / ring.len() as f32;
        let u = (ring[0] - center).normalize();
        let w = n.cross(&u);
        let angle = |p: &Vector3<f32>| (p - center).dot(&w).atan2((p - center).dot(&u));
        ring.sort_by(|a, b| angle(a).total_cmp(&angle(b)));

        for i in 1..ring.len() - 1 {
            triangles.push([ring[0], ring[i], ring[i + 1]]);
        }
    }

    let flat: Vec<Vector3<f32>> = triangles.iter().flatten().copied().collect();
    let faces: Vec<[usize; 3]> = (0..triangles.len())
        .map(|i| [i * 3, i * 3 + 1, i * 3 + 2])
        .collect();
    outward_faces(&flat, &faces)
}
