use crate::{Bit, Error, Result};
use ndarray::{Array3, ArrayD, Ix3};

/// Boundary check for pixel data handed over by an external loader.
pub fn from_dyn(image: ArrayD<u8>) -> Result<Array3<u8>> {
    let ndim = image.ndim();
    image
        .into_dimensionality::<Ix3>()
        .map_err(|_| Error::InvalidShape { ndim })
}

/// Flattens the image row-major, one sample as 8 bits, most-significant first.
pub fn encode(image: &Array3<u8>) -> Vec<Bit> {
    image
        .iter()
        .flat_map(|&sample| sample_to_bits(sample))
        .collect()
}

/// Exact inverse of [`encode`] for a known shape.
pub fn decode(bits: &[Bit], shape: (usize, usize, usize)) -> Result<Array3<u8>> {
    let (height, width, channels) = shape;
    let expected = 8 * height * width * channels;
    if bits.len() != expected {
        return Err(Error::LengthMismatch {
            expected,
            got: bits.len(),
        });
    }
    let samples: Vec<u8> = bits.chunks(8).map(bits_to_sample).collect();
    Array3::from_shape_vec(shape, samples).map_err(|_| Error::LengthMismatch {
        expected,
        got: bits.len(),
    })
}

fn sample_to_bits(sample: u8) -> [Bit; 8] {
    let mut out: [Bit; 8] = [false; 8];
    for (i, bit) in out.iter_mut().enumerate() {
        *bit = sample & (0x80 >> i) != 0
    }
    out
}

fn bits_to_sample(bits: &[Bit]) -> u8 {
    let mut out: u8 = 0x0;
    for (i, &bit) in bits.iter().enumerate().take(std::cmp::min(bits.len(), 8)) {
        if bit {
            out |= 0x80 >> i
        }
    }
    out
}
