//! Writes synthetic `diet.json` and `disk.json` run files so the viewers can
//! be tried without a benchmark harness:
//!
//! ```text
//! cargo run --bin generate-sample -- [dir]
//! cargo run --bin diet-plot -- diet.json
//! cargo run --bin disk-plot -- disk.json
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{json, Value};

/// Minimal deterministic PRNG (splitmix64), enough for sample jitter.
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }

    /// Uniform in [0, 1).
    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform in [-amplitude, amplitude].
    fn jitter(&mut self, amplitude: f64) -> f64 {
        (self.unit() * 2.0 - 1.0) * amplitude
    }
}

const DIET_METRICS: [&str; 3] = [
    "diet/add_interval",
    "diet/remove_interval",
    "diet/take_interval",
];

/// (kind, per-metric base cost) for the grouped dataset.
const DIET_KINDS: [(&str, f64); 3] = [
    ("monotonic-clock", 85.0),
    ("major-allocated", 3.0),
    ("minor-allocated", 24.0),
];

/// (metric, seconds per block) for the flat dataset.
const DISK_METRICS: [(&str, f64); 6] = [
    ("sequential.read", 0.0016),
    ("append.read", 0.0019),
    ("random.read", 0.0031),
    ("sequential.write", 0.0024),
    ("append.write", 0.0027),
    ("random.write", 0.0042),
];

/// Grouped form: `[[kind, [[metric, n, value], …]], …]`. Costs grow roughly
/// logarithmically with structure size, like a balanced-tree operation.
fn diet_document(rng: &mut SimpleRng) -> Value {
    let groups: Vec<Value> = DIET_KINDS
        .iter()
        .map(|&(kind, base)| {
            let mut measures = Vec::new();
            for (slot, metric) in DIET_METRICS.iter().enumerate() {
                let weight = 1.0 + slot as f64 * 0.4;
                for step in 1..=60u64 {
                    let n = step * 25;
                    let value =
                        base * weight * (n as f64).ln() * (1.0 + rng.jitter(0.15));
                    measures.push(json!([metric, n, value]));
                }
            }
            json!([kind, measures])
        })
        .collect();
    Value::Array(groups)
}

/// Flat form: `[[metric, n, value], …]`, values in seconds. Latency grows
/// linearly with block count, which is what the trend fit should recover.
fn disk_document(rng: &mut SimpleRng) -> Value {
    let mut rows = Vec::new();
    for &(metric, per_block) in &DISK_METRICS {
        for step in 1..=50u64 {
            let n = step * 8;
            let value = per_block * n as f64 * (1.0 + rng.jitter(0.1)) + 0.0005;
            rows.push(json!([metric, n, value]));
        }
    }
    Value::Array(rows)
}

fn write_document(dir: &Path, name: &str, document: &Value) -> Result<PathBuf> {
    let path = dir.join(name);
    let text = serde_json::to_string_pretty(document).context("serializing sample document")?;
    std::fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn main() -> Result<()> {
    env_logger::init();

    let dir = PathBuf::from(std::env::args().nth(1).unwrap_or_else(|| ".".to_string()));
    let mut rng = SimpleRng::new(0x42);

    let diet_path = write_document(&dir, "diet.json", &diet_document(&mut rng))?;
    let disk_path = write_document(&dir, "disk.json", &disk_document(&mut rng))?;

    log::info!("sample run files written to {}", dir.display());
    println!("Wrote {} and {}", diet_path.display(), disk_path.display());
    Ok(())
}
