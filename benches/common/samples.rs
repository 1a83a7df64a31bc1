use bezfit::PointSequence;
use nalgebra::Vector2;
use once_cell::sync::Lazy;
use std::f64::consts::PI;

pub static SEQUENCES: Lazy<Vec<PointSequence>> = Lazy::new(|| {
    vec![sine(), circle(), zigzag()]
});

/// 120 samples of a sine wave, long stretches of stress fits
fn sine() -> PointSequence {
    let points = (0..120)
        .map(|i| Vector2::new(i as f64, 8.0 * (i as f64 / 5.0).sin()))
        .collect();
    PointSequence::new(points, false).unwrap()
}

/// Closed polygon approximating a circle
fn circle() -> PointSequence {
    let points = (0..64)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / 64.0;
            Vector2::new(50.0 * angle.cos(), 50.0 * angle.sin())
        })
        .collect();
    PointSequence::new(points, true).unwrap()
}

/// Sharp corners everywhere, only short windows
fn zigzag() -> PointSequence {
    let points = (0..120)
        .map(|i| Vector2::new(i as f64, if i % 2 == 0 { 0.0 } else { 10.0 }))
        .collect();
    PointSequence::new(points, false).unwrap()
}
