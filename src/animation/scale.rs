// src/animation/scale.rs
//
// Splitting one 0..1 progress value into sub-progress values.

use std::f32::consts::PI;

/// Number of sub-parts a shape's progress is divided into.
pub const PARTS: usize = 4;

pub fn inverse(n: usize) -> f32 {
    1.0 / n as f32
}

pub fn max_scale(value: f32, i: usize, n: usize) -> f32 {
    (value - i as f32 * inverse(n)).max(0.0)
}

/// Progress of the i-th of n equal slices of `value`, rescaled to 0..1.
pub fn divide_scale(value: f32, i: usize, n: usize) -> f32 {
    max_scale(value, i, n).min(inverse(n)) * n as f32
}

/// 0 -> 1 -> 0 over a linear 0..1 input.
pub fn sinify(value: f32) -> f32 {
    (value * PI).sin()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_divide_scale_stays_in_slice() {
        for n in 1..=6 {
            for i in 0..n {
                for step in 0..=100 {
                    let v = step as f32 / 100.0;
                    let raw = max_scale(v, i, n).min(inverse(n));
                    assert!(
                        (0.0..=inverse(n) + EPS).contains(&raw),
                        "raw slice out of range for v:{}, i:{}, n:{}",
                        v,
                        i,
                        n
                    );
                    let scaled = divide_scale(v, i, n);
                    assert!(
                        (0.0..=1.0 + EPS).contains(&scaled),
                        "scaled slice out of range for v:{}, i:{}, n:{}",
                        v,
                        i,
                        n
                    );
                }
            }
        }
    }

    #[test]
    fn test_divide_scale_slices() {
        let tests = vec![
            // (value, i, n, expected)
            (0.0, 0, 4, 0.0),
            (0.125, 0, 4, 0.5),
            (0.25, 0, 4, 1.0),
            (0.25, 1, 4, 0.0),
            (0.5, 1, 4, 1.0),
            (0.625, 2, 4, 0.5),
            (0.625, 3, 4, 0.0),
            (1.0, 3, 4, 1.0),
            (0.3, 0, 1, 0.3),
        ];

        for (value, i, n, expected) in tests {
            let result = divide_scale(value, i, n);
            assert!(
                (result - expected).abs() < EPS,
                "Failed for value:{}, i:{}, n:{}: got {}",
                value,
                i,
                n,
                result
            );
        }
    }

    #[test]
    fn test_sinify_profile() {
        assert!(sinify(0.0).abs() < EPS);
        assert!((sinify(0.5) - 1.0).abs() < EPS);
        assert!(sinify(1.0).abs() < EPS);
        assert!((sinify(0.25) - sinify(0.75)).abs() < EPS);
    }
}
