use bezfit::{fit, segment, FitConfig};
use criterion::{black_box, Criterion};
use crate::common::samples::SEQUENCES;

pub fn segmentation(c: &mut Criterion) {
    let config = FitConfig::default();
    c.bench_function("segment", |b| {
        for sequence in SEQUENCES.iter() {
            b.iter(|| black_box(segment(sequence, &config)))
        }
    });
}

pub fn full(c: &mut Criterion) {
    let config = FitConfig::default();
    c.bench_function("fit", |b| {
        for sequence in SEQUENCES.iter() {
            b.iter(|| black_box(fit(sequence, &config)))
        }
    });
}

pub fn all(c: &mut Criterion) {
    segmentation(c);
    full(c);
}
