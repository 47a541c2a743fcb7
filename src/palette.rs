use rand::Rng;
use three_d::Srgba;

/// Lifts a random channel value in [0, 1) into a light pastel range.
pub fn pastel_channel(c: f32) -> f32 {
    ((c + 1.0) % 2.0) * c * 0.5 + 0.3
}

/// Channels above 1.0 saturate.
pub fn to_srgba(r: f32, g: f32, b: f32) -> Srgba {
    let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    Srgba::new(byte(r), byte(g), byte(b), 255)
}

pub fn sample_pastels<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<Srgba> {
    let mut colors = Vec::with_capacity(n);

    for _ in 0..n {
        let r = pastel_channel(rng.random::<f32>());
        let g = pastel_channel(rng.random::<f32>());
        let b = pastel_channel(rng.random::<f32>());

        colors.push(to_srgba(r, g, b));
    }

    colors
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_pastel_channel() {
        assert_eq!(pastel_channel(0.0), 0.3);
        assert!((pastel_channel(0.5) - 0.675).abs() < 1e-6);
        // never darker than the floor
        for i in 0..100 {
            assert!(pastel_channel(i as f32 / 100.0) >= 0.3);
        }
    }

    #[test]
    fn test_to_srgba_saturates() {
        assert_eq!(to_srgba(1.3, 0.3, 0.0), Srgba::new(255, 77, 0, 255));
    }

    #[test]
    fn test_sample_pastels() {
        let mut rng = StdRng::seed_from_u64(7);
        let colors = sample_pastels(&mut rng, 10);
        assert_eq!(colors.len(), 10);
        for c in colors {
            assert!(c.r >= 76 && c.g >= 76 && c.b >= 76, "too dark: {:?}", c);
            assert_eq!(c.a, 255);
        }

        let again = sample_pastels(&mut StdRng::seed_from_u64(7), 10);
        assert_eq!(again, sample_pastels(&mut StdRng::seed_from_u64(7), 10));
    }
}
