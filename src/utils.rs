use ndarray::{Array2, Zip};

/// Final color mapping function
/// Maps a value in [0, 1] onto [0, 255], rounding half away from zero
///
#[inline(always)]
pub fn to_channel(x: f64) -> u8 {
    (255.0 * x).round().clamp(0.0, 255.0) as u8
}

/// Red channel: sine component of the (radius, angle) pair, shifted into [0, 1]
pub fn red(radius: f64, angle: f64) -> u8 {
    to_channel((radius * angle.sin() + 1.0) / 2.0)
}

/// Green channel: cosine component of the (radius, angle) pair, shifted into [0, 1]
pub fn green(radius: f64, angle: f64) -> u8 {
    to_channel((radius * angle.cos() + 1.0) / 2.0)
}

pub fn blue(radius: f64) -> u8 {
    to_channel(radius * radius)
}

/// Evaluate all three channel planes for the given radius and angle planes.
///
/// Channels are pure functions of the samples, so the planes are filled in parallel.
pub fn polar_channels(radius: &Array2<f64>, angle: &Array2<f64>) -> [Array2<u8>; 3] {
    assert_eq!(radius.dim(), angle.dim(), "sample planes differ in shape");

    let shape = radius.dim();
    let mut r = Array2::zeros(shape);
    let mut g = Array2::zeros(shape);
    let mut b = Array2::zeros(shape);
    Zip::from(&mut r)
        .and(&mut g)
        .and(&mut b)
        .and(radius)
        .and(angle)
        .par_for_each(|r, g, b, &e1, &theta| {
            *r = red(e1, theta);
            *g = green(e1, theta);
            *b = blue(e1);
        });

    [r, g, b]
}
