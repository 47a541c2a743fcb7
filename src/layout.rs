use crate::{config::SceneConfig, constants::SCATTER_EXTENT, shapes::ShapeKind};
use log::info;
use nalgebra::Vector3;
use rand::Rng;

/// The two parent groups objects hang off. Each rotates about the z axis in its own direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pivot {
    Clockwise,
    CounterClockwise,
}

impl Pivot {
    /// Even indices go clockwise, odd ones counter-clockwise.
    pub fn for_index(idx: usize) -> Self {
        if idx % 2 == 0 {
            Pivot::Clockwise
        } else {
            Pivot::CounterClockwise
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub shape: ShapeKind,
    /// Index into the palette.
    pub material: usize,
    /// Position relative to the pivot.
    pub position: Vector3<f32>,
    pub pivot: Pivot,
}

pub struct SceneLayout {
    pub placements: Vec<Placement>,
}

impl SceneLayout {
    /// Executed at start
    pub fn generate<R: Rng + ?Sized>(config: &SceneConfig, rng: &mut R) -> anyhow::Result<Self> {
        config.validate()?;
        info!(
            "Scattering {} objects over {} shape kinds...",
            config.count,
            config.shapes.len()
        );

        let placements = (0..config.count)
            .map(|idx| {
                let shape = config.shapes[rng.random_range(0..config.shapes.len())];
                let position = Vector3::new(
                    (rng.random::<f32>() - 0.5) * SCATTER_EXTENT[0],
                    (rng.random::<f32>() - 0.5) * SCATTER_EXTENT[1],
                    (rng.random::<f32>() - 0.5) * SCATTER_EXTENT[2],
                );

                Placement {
                    shape,
                    material: idx % config.palette_size,
                    position,
                    pivot: Pivot::for_index(idx),
                }
            })
            .collect();

        Ok(Self { placements })
    }

    pub fn count_in(&self, pivot: Pivot) -> usize {
        self.placements.iter().filter(|p| p.pivot == pivot).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_generate_default() {
        let config = SceneConfig::default();
        let layout = SceneLayout::generate(&config, &mut StdRng::seed_from_u64(42)).unwrap();

        assert_eq!(layout.placements.len(), 240);
        assert_eq!(layout.count_in(Pivot::Clockwise), 120);
        assert_eq!(layout.count_in(Pivot::CounterClockwise), 120);

        for (idx, p) in layout.placements.iter().enumerate() {
            assert_eq!(p.material, idx % 10);
            assert_eq!(p.pivot, Pivot::for_index(idx));
            assert!(ShapeKind::DEFAULT_SET.contains(&p.shape));
            assert!(p.position.x >= -20.0 && p.position.x < 20.0);
            assert!(p.position.y >= -20.0 && p.position.y < 20.0);
            assert!(p.position.z >= -35.0 && p.position.z < 35.0);
        }

        // both shapes show up in a scene this size
        assert!(layout.placements.iter().any(|p| p.shape == ShapeKind::Icosahedron));
        assert!(layout.placements.iter().any(|p| p.shape == ShapeKind::Cone));
    }

    #[test]
    fn test_generate_is_seeded() {
        let config = SceneConfig::default();
        let a = SceneLayout::generate(&config, &mut StdRng::seed_from_u64(1)).unwrap();
        let b = SceneLayout::generate(&config, &mut StdRng::seed_from_u64(1)).unwrap();
        let c = SceneLayout::generate(&config, &mut StdRng::seed_from_u64(2)).unwrap();
        assert_eq!(a.placements, b.placements);
        assert_ne!(a.placements, c.placements);
    }

    #[test]
    fn test_generate_rejects_empty_shape_set() {
        let config = SceneConfig {
            shapes: vec![],
            ..Default::default()
        };
        assert!(SceneLayout::generate(&config, &mut StdRng::seed_from_u64(0)).is_err());
    }

    #[test]
    fn test_empty_scene() {
        let config = SceneConfig {
            count: 0,
            ..Default::default()
        };
        let layout = SceneLayout::generate(&config, &mut StdRng::seed_from_u64(0)).unwrap();
        assert!(layout.placements.is_empty());
    }
}
