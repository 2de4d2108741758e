//! Minimal wall-clock benchmark harness used by the `benches/` targets.
use std::fs;
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};

use log::info;

#[derive(Clone)]
pub struct Benchmark {
    f: Rc<dyn Fn()>,
    name: String,
    iterations: usize,
}

impl Benchmark {
    pub fn iter<F: Fn() + 'static>(name: &str, n: usize, f: F) -> Self {
        Self {
            f: Rc::new(f),
            name: name.to_string(),
            iterations: n.max(1),
        }
    }

    pub fn once<F: Fn() + 'static>(name: &str, f: F) -> Self {
        Self::iter(name, 1, f)
    }

    fn run(&self) -> Measurement {
        let start = Instant::now();
        for _ in 0..self.iterations {
            (self.f)();
        }
        Measurement {
            name: self.name.clone(),
            iterations: self.iterations,
            total: start.elapsed(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Measurement {
    pub name: String,
    pub iterations: usize,
    pub total: Duration,
}

impl Measurement {
    pub fn per_call(&self) -> Duration {
        self.total.div_f64(self.iterations as f64)
    }

    fn csv_line(&self) -> String {
        format!(
            "{},{},{},{}",
            self.name,
            self.total.as_micros(),
            self.iterations,
            self.per_call().as_micros()
        )
    }
}

#[derive(Default)]
pub struct BenchmarkReport {
    benches: Vec<Benchmark>,
    results: Vec<Measurement>,
}

impl BenchmarkReport {
    pub fn with_benches(benches: &[Benchmark]) -> Self {
        Self {
            benches: benches.to_vec(),
            results: vec![],
        }
    }

    pub fn results(&self) -> &[Measurement] {
        &self.results
    }

    pub fn run(&mut self) {
        for bench in &self.benches {
            let m = bench.run();
            info!(
                "{: <30} total {:>12?}   per call {:>12?}",
                m.name,
                m.total,
                m.per_call()
            );
            self.results.push(m);
        }
    }

    pub fn to_csv(&self) -> String {
        let mut lines = vec!["benchmark,total_us,iterations,per_call_us".to_string()];
        lines.extend(self.results.iter().map(Measurement::csv_line));
        lines.push(String::new());
        lines.join("\n")
    }

    pub fn report(&mut self, name: &str) -> io::Result<()> {
        info!("benchmark: {}", name);
        self.run();
        fs::write(format!("benchmark_{}.csv", name), self.to_csv())
    }
}
