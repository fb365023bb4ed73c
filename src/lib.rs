use rand::Rng;

pub mod channel;
pub mod image;
pub mod iter;
pub mod pipeline;
pub mod qpsk;
pub mod spectrum;

pub use channel::AwgnChannel;
pub use pipeline::{LinkConfig, LinkReport, run};
pub use qpsk::CarrierPair;

pub type Bit = bool;

/// Errors reported by the link stages.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("image has {ndim} dimension(s), expected height x width x channels")]
    InvalidShape { ndim: usize },
    #[error("length mismatch: expected {expected} elements, got {got}")]
    LengthMismatch { expected: usize, got: usize },
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[inline]
pub fn db(x: f64) -> f64 {
    10f64 * x.log10()
}

#[inline]
pub fn undb(x: f64) -> f64 {
    10f64.powf(x / 10f64)
}

#[inline]
pub fn linspace(start: f64, stop: f64, num: usize) -> impl Iterator<Item = f64> {
    let step = (stop - start) / ((num - 1) as f64);
    (0..num).map(move |i| start + step * (i as f64))
}

#[inline]
pub fn bit_to_nrz(bit: Bit) -> f64 {
    if bit {
        1_f64
    } else {
        -1_f64
    }
}

pub fn trapezoid(signal: &[f64], dx: f64) -> f64 {
    if signal.len() < 2 {
        return 0f64;
    }
    let ends = (signal[0] + signal[signal.len() - 1]) / 2f64;
    dx * (signal.iter().sum::<f64>() - ends)
}

/// Time-average power over the full simulated span.
pub fn avg_power(signal: &[f64], dx: f64) -> f64 {
    let squared: Vec<f64> = signal.iter().map(|&s_i| s_i * s_i).collect();
    trapezoid(&squared, dx) / (signal.len() as f64 * dx)
}

#[inline]
pub fn ber(tx: &[Bit], rx: &[Bit]) -> f64 {
    let len: usize = std::cmp::min(tx.len(), rx.len());
    let errors: usize = tx
        .iter()
        .zip(rx.iter())
        .map(|(&ti, &ri)| if ti == ri { 0 } else { 1 })
        .sum();
    (errors as f64) / (len as f64)
}

#[inline]
pub fn erf(x: f64) -> f64 {
    let t: f64 = 1f64 / (1f64 + 0.5 * x.abs());
    let tau = t
        * (-x.powi(2) - 1.26551223
            + 1.00002368 * t
            + 0.37409196 * t.powi(2)
            + 0.09678418 * t.powi(3)
            - 0.18628806 * t.powi(4)
            + 0.27886807 * t.powi(5)
            - 1.13520398 * t.powi(6)
            + 1.48851587 * t.powi(7)
            - 0.82215223 * t.powi(8)
            + 0.17087277 * t.powi(9))
        .exp();
    if x >= 0f64 {
        1f64 - tau
    } else {
        tau - 1f64
    }
}

#[inline]
pub fn erfc(x: f64) -> f64 {
    1f64 - erf(x)
}

pub fn random_bits(num_bits: usize) -> Vec<Bit> {
    let mut rng = rand::rng();
    (0..num_bits).map(|_| rng.random()).collect()
}
