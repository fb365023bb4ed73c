use crate::{Error, Result, undb};
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Noise power that realizes `snr_db` against the transmitted power.
pub fn noise_power(power: f64, snr_db: f64) -> Result<f64> {
    if !power.is_finite() || power < 0f64 {
        return Err(Error::InvalidParameter(format!(
            "transmit power must be non-negative and finite, got {power}"
        )));
    }
    if !snr_db.is_finite() {
        return Err(Error::InvalidParameter(format!(
            "SNR must be finite, got {snr_db} dB"
        )));
    }
    Ok(power / undb(snr_db))
}

/// Additive white Gaussian noise fed by a caller-supplied generator.
#[derive(Debug, Clone)]
pub struct AwgnChannel {
    distr: Normal<f64>,
}

impl AwgnChannel {
    pub fn new(sigma: f64) -> Result<AwgnChannel> {
        let distr = Normal::new(0f64, sigma).map_err(|_| {
            Error::InvalidParameter(format!(
                "noise deviation must be non-negative and finite, got {sigma}"
            ))
        })?;
        Ok(AwgnChannel { distr })
    }

    /// Calibrates the channel so a signal of `power` arrives at `snr_db`.
    pub fn from_snr(power: f64, snr_db: f64) -> Result<AwgnChannel> {
        AwgnChannel::new(noise_power(power, snr_db)?.sqrt())
    }

    pub fn sigma(&self) -> f64 {
        self.distr.std_dev()
    }

    /// Fresh noisy copy; every call draws independent samples.
    pub fn add_noise<R: Rng>(&self, rng: &mut R, signal: &[f64]) -> Vec<f64> {
        signal
            .iter()
            .map(|&sample| sample + self.distr.sample(rng))
            .collect()
    }
}
