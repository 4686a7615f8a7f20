//! Grid placement and luminosity sampling over the pixel buffer.
//!
//! The image is partitioned into a (grid_size + 1)-way subdivision along both
//! axes; sample points sit on the interior division boundaries, so the extreme
//! border is never sampled directly even when autocrop is disabled. Around
//! each sample point, a square window of 3x3-smoothed pixels is averaged into
//! one scalar luminosity.

/// Center coordinates of the sample squares, in x-major order.
pub(super) fn compute_square_centers(width: i64, height: i64, grid_size: u32) -> Vec<(i64, i64)> {
    let divisions = i64::from(grid_size) + 1;
    let x_offset = width as f64 / divisions as f64;
    let y_offset = height as f64 / divisions as f64;

    let mut centers = Vec::with_capacity((grid_size as usize).pow(2));
    for x in 0..i64::from(grid_size) {
        for y in 0..i64::from(grid_size) {
            centers.push((
                (x_offset * (x + 1) as f64).round() as i64,
                (y_offset * (y + 1) as f64).round() as i64,
            ));
        }
    }

    centers
}

/// Side length of the sampling window, tied to grid density and the
/// oversampling ratio so finer grids get smaller windows. Never below 2.
pub(super) fn compute_square_size(
    width: i64,
    height: i64,
    grid_size: u32,
    sample_size_ratio: f64,
) -> i64 {
    let divisions = f64::from(grid_size) + 1.0;
    let side = width.min(height) as f64 / (divisions * sample_size_ratio);

    side.round().max(2.0) as i64
}

/// Average luminosity of every sample square, in center order.
pub(super) fn compute_average_sample_luminosities(
    pixels: &[u8],
    width: i64,
    height: i64,
    grid_size: u32,
    sample_size_ratio: f64,
) -> Vec<f64> {
    let square_size = compute_square_size(width, height, grid_size, sample_size_ratio);

    compute_square_centers(width, height, grid_size)
        .into_iter()
        .map(|center| compute_square_average(pixels, width, height, center, square_size))
        .collect()
}

/// Average gray level of one square, centered at the given point.
///
/// The divisor is the number of visited window positions; the bound check
/// deliberately admits positions on the far edge (`coord == dimension`),
/// whose 3x3 sample then only picks up in-bounds pixels.
fn compute_square_average(
    pixels: &[u8],
    width: i64,
    height: i64,
    center: (i64, i64),
    square_size: i64,
) -> f64 {
    let corner_x = (center.0 as f64 - square_size as f64 / 2.0).round() as i64;
    let corner_y = (center.1 as f64 - square_size as f64 / 2.0).round() as i64;

    let mut count = 0u32;
    let mut sum = 0.0;
    for y in corner_y..corner_y + square_size {
        if y > height || y < 0 {
            continue;
        }

        for x in corner_x..corner_x + square_size {
            if x > width || x < 0 {
                continue;
            }

            sum += sample_3x3_point(pixels, width, height, (x, y));
            count += 1;
        }
    }

    if count == 0 {
        return 0.0;
    }

    sum / f64::from(count)
}

/// Average intensity of the 3x3 block centered at the given point.
///
/// Out-of-bounds neighbors are skipped from the sum, but the divisor stays a
/// constant 9, which biases samples near the border toward darker values.
/// Switching to a divide-by-actual-count would change every signature
/// generated near an edge, so the undercount stays.
fn sample_3x3_point(pixels: &[u8], width: i64, height: i64, point: (i64, i64)) -> f64 {
    let mut sum = 0.0;

    for y_offset in 0..3 {
        let y = point.1 - 1 + y_offset;

        if y > height - 1 || y < 0 {
            continue;
        }

        for x_offset in 0..3 {
            let x = point.0 - 1 + x_offset;

            if x > width - 1 || x < 0 {
                continue;
            }

            sum += f64::from(pixels[(x + y * width) as usize]);
        }
    }

    sum / 9.0
}
