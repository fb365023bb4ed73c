use crate::{Error, Result};
use itertools::Itertools;
use num_complex::Complex;
use realfft::RealFftPlanner;

/// One-sided amplitude spectrum of a real waveform.
#[derive(Debug, Clone)]
pub struct Spectrum {
    pub freqs: Vec<f64>,
    pub magnitude: Vec<f64>,
}

impl Spectrum {
    pub fn peak_frequency(&self) -> f64 {
        match self
            .magnitude
            .iter()
            .position_max_by(|a, b| a.total_cmp(b))
        {
            Some(idx) => self.freqs[idx],
            None => 0f64,
        }
    }
}

pub fn spectrum(waveform: &[f64], sample_rate: f64) -> Result<Spectrum> {
    if waveform.is_empty() {
        return Err(Error::InvalidParameter(String::from(
            "waveform must not be empty",
        )));
    }
    if !sample_rate.is_finite() || sample_rate <= 0f64 {
        return Err(Error::InvalidParameter(format!(
            "sample rate must be positive and finite, got {sample_rate}"
        )));
    }

    let n = waveform.len();
    let mut planner = RealFftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(n);

    let mut input = waveform.to_vec();
    let mut output: Vec<Complex<f64>> = fft.make_output_vec();
    fft.process(&mut input, &mut output)
        .map_err(|err| Error::InvalidParameter(err.to_string()))?;

    let freqs = (0..output.len())
        .map(|k| k as f64 * sample_rate / n as f64)
        .collect();
    let magnitude = output.iter().map(|bin| bin.norm() / n as f64).collect();
    Ok(Spectrum { freqs, magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qpsk::{CarrierPair, modulate};
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn peak_sits_on_the_carrier() {
        let fc = 5_000f64;
        let carriers = CarrierPair::new(fc, 16).unwrap();
        let message = vec![true; 64];

        let modulated = modulate(&message, &carriers).unwrap();
        let spectrum = spectrum(&modulated.waveform, carriers.sample_rate()).unwrap();

        assert_eq!(spectrum.freqs.len(), 64 * 16 / 2 + 1);
        assert_approx_eq!(spectrum.peak_frequency(), fc, 1e-6);
    }

    #[test]
    fn rejects_bad_parameters() {
        assert!(spectrum(&[], 1_000f64).is_err());
        assert!(spectrum(&[1f64, 0f64], 0f64).is_err());
        assert!(spectrum(&[1f64, 0f64], f64::NAN).is_err());
    }
}
