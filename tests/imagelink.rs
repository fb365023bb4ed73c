use assert_approx_eq::assert_approx_eq;
use rand::{SeedableRng, rngs::StdRng};
use welch_sde::{Build, SpectralDensity};

mod util;
use util::gradient_image;

use bildkanalo::{LinkConfig, pipeline};

#[test]
fn clean_image_survives_the_link() {
    let image = gradient_image(8, 6);
    let config = LinkConfig {
        fc: 5_000f64,
        mpp: 20,
        snr_db: 100f64,
    };
    let mut rng = StdRng::seed_from_u64(0x1337);

    let report = pipeline::run(&image, &config, &mut rng).unwrap();

    assert_eq!(report.recovered_image, image);
    assert_eq!(report.bit_errors, 0);
    assert_eq!(report.sent_bits.len(), 8 * 8 * 6 * 3);
}

#[test]
fn noisy_image_arrives_with_errors() {
    let image = gradient_image(8, 6);
    let config = LinkConfig {
        snr_db: -5f64,
        ..LinkConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(0xCAFE);

    let report = pipeline::run(&image, &config, &mut rng).unwrap();

    assert!(report.bit_errors > 0);
    assert!(report.ber > 0f64 && report.ber < 0.5);
    assert_eq!(report.recovered_image.dim(), image.dim());
    assert_ne!(report.recovered_image, image);
}

#[test]
fn transmitted_waveform_spectrum() {
    // The Welch estimate and the report's own transform agree on the carrier.
    let image = gradient_image(6, 6);
    let config = LinkConfig::default();
    let mut rng = StdRng::seed_from_u64(7);

    let report = pipeline::run(&image, &config, &mut rng).unwrap();

    let fs = config.fc * config.mpp as f64;
    let welch: SpectralDensity<f64> =
        SpectralDensity::<f64>::builder(&report.clean_waveform, fs).build();
    let sd = welch.periodogram();

    let (mut peak_freq, mut peak) = (0f64, 0f64);
    for (&freq, &psd) in sd.frequency().iter().zip(sd.iter()) {
        if psd > peak {
            peak = psd;
            peak_freq = freq;
        }
    }
    assert!(
        (peak_freq - config.fc).abs() < 0.1 * config.fc,
        "PSD peaks at {peak_freq} Hz, expected {} Hz", config.fc
    );

    assert!((report.spectrum.peak_frequency() - config.fc).abs() < 0.1 * config.fc);
}

#[test]
fn waveform_time_average_vanishes() {
    // The time average matches the process's zero ensemble mean.
    let image = gradient_image(8, 8);
    let mut rng = StdRng::seed_from_u64(21);

    let report = pipeline::run(&image, &LinkConfig::default(), &mut rng).unwrap();

    let num_samples = report.noisy_waveform.len() as f64;
    let time_average = report.noisy_waveform.iter().sum::<f64>() / num_samples;
    assert_approx_eq!(time_average, 0f64, 0.05);
}
