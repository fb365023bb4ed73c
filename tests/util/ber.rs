use bildkanalo::erfc;

// Error rate of the zero-threshold detector against the combined reference:
// per symbol, Ep ~ N(±mpp/2, sigma^2 * mpp) with sigma^2 = Pm / snr and Pm = 1/2,
// so Pe = Q(sqrt(mpp * snr / 2)).
pub fn ber_energy_detect(snr: f64, mpp: usize) -> f64 {
    0.5 * erfc((mpp as f64 * snr / 4f64).sqrt())
}
