//! Dominant-color extraction with k-means clustering.
//!
//! The clustering is synchronous and runs a fixed number of iterations, so
//! callers should sample large images down with [`sample_pixels`] first.

use serde::Serialize;

use crate::color::Rgb;

pub const KMEANS_ITERATIONS: usize = 20;

/// Pixels with alpha below this are skipped when sampling.
pub const MIN_ALPHA: u8 = 128;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteColor {
    pub rgb: Rgb,
    pub hex: String,
    /// Fraction of the samples assigned to this color.
    pub share: f64,
}

/// Take every `step`-th pixel from an RGBA buffer, skipping mostly
/// transparent ones. A `step` of 0 is treated as 1.
pub fn sample_pixels(rgba: &[u8], step: usize) -> Vec<Rgb> {
    rgba.chunks_exact(4)
        .step_by(step.max(1))
        .filter(|px| px[3] >= MIN_ALPHA)
        .map(|px| Rgb::new(px[0], px[1], px[2]))
        .collect()
}

/// Pick a sampling step so that at most `max_samples` pixels are kept.
pub fn sample_step(pixel_count: usize, max_samples: usize) -> usize {
    if max_samples == 0 {
        return 1;
    }
    pixel_count.div_ceil(max_samples).max(1)
}

fn distance_sq(a: [f64; 3], b: [f64; 3]) -> f64 {
    (a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2) + (a[2] - b[2]).powi(2)
}

fn nearest(point: [f64; 3], centroids: &[[f64; 3]]) -> usize {
    centroids
        .iter()
        .enumerate()
        .map(|(i, c)| (i, distance_sq(point, *c)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Cluster `pixels` into at most `k` colors, largest cluster first.
pub fn extract_palette(pixels: &[Rgb], k: usize) -> Vec<PaletteColor> {
    if pixels.is_empty() || k == 0 {
        return Vec::new();
    }

    let points: Vec<[f64; 3]> = pixels
        .iter()
        .map(|p| [p.r as f64, p.g as f64, p.b as f64])
        .collect();

    // Seed with evenly spaced distinct samples so runs are reproducible.
    let mut distinct: Vec<Rgb> = pixels.to_vec();
    distinct.sort_by_key(|p| (p.r, p.g, p.b));
    distinct.dedup();
    let k = k.min(distinct.len());
    let mut centroids: Vec<[f64; 3]> = (0..k)
        .map(|i| {
            let p = distinct[i * distinct.len() / k];
            [p.r as f64, p.g as f64, p.b as f64]
        })
        .collect();

    let mut assignments = vec![0usize; points.len()];
    for _ in 0..KMEANS_ITERATIONS {
        for (slot, point) in assignments.iter_mut().zip(&points) {
            *slot = nearest(*point, &centroids);
        }

        let mut sums = vec![[0.0f64; 3]; k];
        let mut counts = vec![0usize; k];
        for (&cluster, point) in assignments.iter().zip(&points) {
            for channel in 0..3 {
                sums[cluster][channel] += point[channel];
            }
            counts[cluster] += 1;
        }

        for (i, centroid) in centroids.iter_mut().enumerate() {
            if counts[i] > 0 {
                let n = counts[i] as f64;
                *centroid = [sums[i][0] / n, sums[i][1] / n, sums[i][2] / n];
            }
        }
    }

    let mut counts = vec![0usize; k];
    for &cluster in &assignments {
        counts[cluster] += 1;
    }

    let total = points.len() as f64;
    let mut palette: Vec<PaletteColor> = centroids
        .iter()
        .zip(&counts)
        .filter(|(_, count)| **count > 0)
        .map(|(c, &count)| {
            let rgb = Rgb::new(
                c[0].round() as u8,
                c[1].round() as u8,
                c[2].round() as u8,
            );
            PaletteColor {
                rgb,
                hex: rgb.to_hex(),
                share: count as f64 / total,
            }
        })
        .collect();

    palette.sort_by(|a, b| b.share.total_cmp(&a.share));
    palette
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba(pixels: &[(u8, u8, u8, u8)]) -> Vec<u8> {
        pixels
            .iter()
            .flat_map(|&(r, g, b, a)| [r, g, b, a])
            .collect()
    }

    #[test]
    fn test_sample_pixels_skips_transparent() {
        let data = rgba(&[(1, 2, 3, 255), (4, 5, 6, 0), (7, 8, 9, 200)]);
        assert_eq!(
            sample_pixels(&data, 1),
            vec![Rgb::new(1, 2, 3), Rgb::new(7, 8, 9)]
        );
    }

    #[test]
    fn test_sample_pixels_step() {
        let data = rgba(&[(1, 1, 1, 255), (2, 2, 2, 255), (3, 3, 3, 255), (4, 4, 4, 255)]);
        assert_eq!(
            sample_pixels(&data, 2),
            vec![Rgb::new(1, 1, 1), Rgb::new(3, 3, 3)]
        );
        assert_eq!(sample_pixels(&data, 0).len(), 4);
    }

    #[test]
    fn test_sample_step() {
        assert_eq!(sample_step(100, 10), 10);
        assert_eq!(sample_step(101, 10), 11);
        assert_eq!(sample_step(5, 10), 1);
    }

    #[test]
    fn test_extract_palette_two_colors() {
        let mut pixels = vec![Rgb::new(255, 0, 0); 30];
        pixels.extend(vec![Rgb::new(0, 0, 255); 10]);

        let palette = extract_palette(&pixels, 2);
        assert_eq!(palette.len(), 2);
        assert_eq!(palette[0].hex, "#ff0000");
        assert_eq!(palette[1].hex, "#0000ff");
        assert!((palette[0].share - 0.75).abs() < 1e-9);
        let total: f64 = palette.iter().map(|c| c.share).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_extract_palette_clamps_k_to_distinct_colors() {
        let pixels = vec![Rgb::new(10, 20, 30); 5];
        let palette = extract_palette(&pixels, 8);
        assert_eq!(palette.len(), 1);
        assert_eq!(palette[0].rgb, Rgb::new(10, 20, 30));
    }

    #[test]
    fn test_extract_palette_averages_clusters() {
        let pixels = vec![
            Rgb::new(0, 0, 0),
            Rgb::new(10, 10, 10),
            Rgb::new(250, 250, 250),
            Rgb::new(240, 240, 240),
        ];
        let palette = extract_palette(&pixels, 2);
        let hexes: Vec<&str> = palette.iter().map(|c| c.hex.as_str()).collect();
        assert!(hexes.contains(&"#050505"));
        assert!(hexes.contains(&"#f5f5f5"));
    }

    #[test]
    fn test_extract_palette_empty() {
        assert!(extract_palette(&[], 3).is_empty());
        assert!(extract_palette(&[Rgb::new(1, 1, 1)], 0).is_empty());
    }
}
