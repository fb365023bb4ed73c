use std::time::{Duration, Instant};

use crate::{
    Bit, Result,
    channel::AwgnChannel,
    image,
    qpsk::{self, CarrierPair},
    spectrum::{self, Spectrum},
};
use ndarray::Array3;
use rand::Rng;

/// Link parameters: carrier frequency (Hz), samples per symbol, channel SNR (dB).
#[derive(Debug, Clone, PartialEq)]
pub struct LinkConfig {
    pub fc: f64,
    pub mpp: usize,
    pub snr_db: f64,
}

impl Default for LinkConfig {
    fn default() -> LinkConfig {
        LinkConfig {
            fc: 5_000f64,
            mpp: 20,
            snr_db: 5f64,
        }
    }
}

/// Everything a run produces, kept for inspection and plotting.
#[derive(Debug, Clone)]
pub struct LinkReport {
    pub sent_bits: Vec<Bit>,
    pub recovered_bits: Vec<Bit>,
    pub recovered_image: Array3<u8>,
    pub symbol_trace: Vec<f64>,
    pub clean_waveform: Vec<f64>,
    pub noisy_waveform: Vec<f64>,
    pub correlation: Vec<f64>,
    pub spectrum: Spectrum,
    pub power: f64,
    pub reference_energy: f64,
    pub bit_errors: usize,
    pub ber: f64,
    pub modulation_time: Duration,
    pub demodulation_time: Duration,
}

/// Runs the whole link: encode, modulate, add noise, demodulate, rebuild.
pub fn run<R: Rng>(image: &Array3<u8>, config: &LinkConfig, rng: &mut R) -> Result<LinkReport> {
    let carriers = CarrierPair::new(config.fc, config.mpp)?;
    let sent_bits = image::encode(image);

    let modulation_start = Instant::now();
    let modulated = qpsk::modulate(&sent_bits, &carriers)?;
    let modulation_time = modulation_start.elapsed();

    let channel = AwgnChannel::from_snr(modulated.power, config.snr_db)?;
    let noisy_waveform = channel.add_noise(rng, &modulated.waveform);

    let demodulation_start = Instant::now();
    let demodulated = qpsk::demodulate(&noisy_waveform, &modulated.reference)?;
    let demodulation_time = demodulation_start.elapsed();

    let recovered_image = image::decode(&demodulated.bits, image.dim())?;

    let bit_errors = sent_bits
        .iter()
        .zip(demodulated.bits.iter())
        .filter(|(sent, recovered)| sent != recovered)
        .count();
    let ber = bit_errors as f64 / sent_bits.len() as f64;

    let spectrum = spectrum::spectrum(&modulated.waveform, carriers.sample_rate())?;

    Ok(LinkReport {
        sent_bits,
        recovered_bits: demodulated.bits,
        recovered_image,
        symbol_trace: modulated.symbol_trace,
        clean_waveform: modulated.waveform,
        noisy_waveform,
        correlation: demodulated.correlation,
        spectrum,
        power: modulated.power,
        reference_energy: demodulated.reference_energy,
        bit_errors,
        ber,
        modulation_time,
        demodulation_time,
    })
}
