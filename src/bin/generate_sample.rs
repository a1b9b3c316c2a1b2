use std::f64::consts::PI;
use std::io::{BufWriter, Write};

/// A complex tone: frequency (Hz, may be negative) and amplitude.
type Tone = (f64, f64);

fn iq_sample(t: f64, tones: &[Tone], noise_level: f64, rng: &mut SimpleRng) -> (f64, f64) {
    let (re, im) = tones.iter().fold((0.0, 0.0), |(re, im), &(freq, amp)| {
        let phase = 2.0 * PI * freq * t;
        (re + amp * phase.cos(), im + amp * phase.sin())
    });
    (
        re + rng.gauss(0.0, noise_level),
        im + rng.gauss(0.0, noise_level),
    )
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() -> std::io::Result<()> {
    let mut rng = SimpleRng::new(42);

    let sample_rate = 1000.0;
    let n_samples = 1000;

    // One tone set per channel; negative frequencies show up left of DC
    // once the spectrum is centred.
    let channels: [(&str, Vec<Tone>, f64); 3] = [
        ("ch1", vec![(50.0, 1.0), (-120.0, 0.3)], 0.01),
        ("ch2", vec![(200.0, 0.5), (210.0, 0.5)], 0.05),
        ("ch3", vec![(-333.0, 0.8)], 0.2),
    ];

    let output_path = "sample_iq.txt";
    let mut out = BufWriter::new(std::fs::File::create(output_path)?);

    let header: Vec<String> = channels
        .iter()
        .flat_map(|(name, _, _)| [format!("{name}_re"), format!("{name}_im")])
        .collect();
    writeln!(out, "{}", header.join("\t"))?;

    for i in 0..n_samples {
        let t = i as f64 / sample_rate;
        let row: Vec<String> = channels
            .iter()
            .flat_map(|(_, tones, noise)| {
                let (re, im) = iq_sample(t, tones, *noise, &mut rng);
                [format!("{re:.6}"), format!("{im:.6}")]
            })
            .collect();
        writeln!(out, "{}", row.join("\t"))?;
    }
    out.flush()?;

    println!(
        "Wrote {n_samples} samples x {} channels at {sample_rate} Hz to {output_path}",
        channels.len()
    );
    Ok(())
}
