use std::f64::consts::PI;

use crate::{Bit, Error, Result, avg_power, bit_to_nrz, iter::Iter};

/// Sine and cosine bases over one symbol period, orthogonal by construction.
#[derive(Debug, Clone)]
pub struct CarrierPair {
    sine: Vec<f64>,
    cosine: Vec<f64>,
    dt: f64,
}

impl CarrierPair {
    /// Samples both carriers at `mpp` points spanning `[0, Tc)`.
    pub fn new(fc: f64, mpp: usize) -> Result<CarrierPair> {
        if !fc.is_finite() || fc <= 0f64 {
            return Err(Error::InvalidParameter(format!(
                "carrier frequency must be positive and finite, got {fc}"
            )));
        }
        if mpp == 0 {
            return Err(Error::InvalidParameter(String::from(
                "samples per symbol must be positive",
            )));
        }
        let dt = 1f64 / (fc * mpp as f64);
        let phases: Vec<f64> = (0..mpp)
            .map(|k| 2f64 * PI * k as f64 / mpp as f64)
            .collect();
        Ok(CarrierPair {
            sine: phases.iter().map(|&phi| phi.sin()).collect(),
            cosine: phases.iter().map(|&phi| phi.cos()).collect(),
            dt,
        })
    }

    pub fn sine(&self) -> &[f64] {
        &self.sine
    }

    pub fn cosine(&self) -> &[f64] {
        &self.cosine
    }

    pub fn mpp(&self) -> usize {
        self.sine.len()
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn sample_rate(&self) -> f64 {
        1f64 / self.dt
    }

    /// Combined correlation reference used by the receiver.
    pub fn reference(&self) -> Vec<f64> {
        self.sine
            .iter()
            .zip(self.cosine.iter())
            .map(|(s_i, c_i)| s_i + c_i)
            .collect()
    }
}

// The carrier alternates with the running bit count, never with bit values.
#[inline]
fn sine_slot(index: usize) -> bool {
    index % 2 == 0
}

pub fn tx_qpsk_signal<I: Iterator<Item = Bit>>(
    message: I,
    carriers: &CarrierPair,
) -> impl Iterator<Item = f64> {
    let sine = carriers.sine.clone();
    let cosine = carriers.cosine.clone();
    message.enumerate().flat_map(move |(index, bit)| {
        let carrier = if sine_slot(index) {
            sine.clone()
        } else {
            cosine.clone()
        };
        carrier
            .into_iter()
            .map(move |sample| bit_to_nrz(bit) * sample)
    })
}

pub fn rx_qpsk_signal<I: Iterator<Item = f64>>(
    signal: I,
    reference: &[f64],
) -> impl Iterator<Item = Bit> {
    let reference = reference.to_vec();
    signal.chunks(reference.len()).map(move |segment| {
        segment
            .iter()
            .zip(reference.iter())
            .map(|(s_i, r_i)| s_i * r_i)
            .sum::<f64>()
            > 0f64
    })
}

#[derive(Debug, Clone)]
pub struct Modulated {
    pub waveform: Vec<f64>,
    pub power: f64,
    pub reference: Vec<f64>,
    pub symbol_trace: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct Demodulated {
    pub bits: Vec<Bit>,
    pub correlation: Vec<f64>,
    pub reference_energy: f64,
}

pub fn modulate(message: &[Bit], carriers: &CarrierPair) -> Result<Modulated> {
    if message.is_empty() {
        return Err(Error::InvalidParameter(String::from(
            "message must hold at least one bit",
        )));
    }
    let waveform: Vec<f64> = tx_qpsk_signal(message.iter().cloned(), carriers).collect();
    let power = avg_power(&waveform, carriers.dt());
    let symbol_trace: Vec<f64> = message
        .iter()
        .map(|&bit| if bit { 1f64 } else { 0f64 })
        .inflate(carriers.mpp())
        .collect();
    Ok(Modulated {
        waveform,
        power,
        reference: carriers.reference(),
        symbol_trace,
    })
}

pub fn demodulate(waveform: &[f64], reference: &[f64]) -> Result<Demodulated> {
    if reference.is_empty() {
        return Err(Error::InvalidParameter(String::from(
            "reference carrier must not be empty",
        )));
    }
    let mpp = reference.len();
    if waveform.len() % mpp != 0 {
        return Err(Error::LengthMismatch {
            expected: waveform.len() - waveform.len() % mpp,
            got: waveform.len(),
        });
    }
    let reference_energy: f64 = reference.iter().map(|&r_i| r_i * r_i).sum();
    let correlation: Vec<f64> = waveform
        .iter()
        .zip(reference.iter().cycle())
        .map(|(&s_i, &r_i)| s_i * r_i)
        .collect();
    // The decision threshold sits at zero; `reference_energy` records the detector scale.
    let bits: Vec<Bit> = correlation
        .chunks(mpp)
        .map(|segment| segment.iter().sum::<f64>() > 0f64)
        .collect();
    Ok(Demodulated {
        bits,
        correlation,
        reference_energy,
    })
}
