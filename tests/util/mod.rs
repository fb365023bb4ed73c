#![allow(dead_code)]
use bildkanalo::Bit;
use ndarray::Array3;
use rand::{Rng, SeedableRng, rngs::StdRng};

pub mod ber;

pub fn seeded_bits(seed: u64, num_bits: usize) -> Vec<Bit> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..num_bits).map(|_| rng.random()).collect()
}

pub fn gradient_image(height: usize, width: usize) -> Array3<u8> {
    Array3::from_shape_fn((height, width, 3), |(i, j, k)| {
        (i * 31 + j * 17 + k * 11) as u8
    })
}
