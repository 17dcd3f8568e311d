// Integration Test Utilities
//
// A tiny stack-machine "program" domain with a seeded, noisy measurement
// source. Programs map an input x to an output; every run is observed with
// uniform noise, so properties can only be checked statistically.
#![allow(dead_code)]

use aislar::oracle::{Measurement, MeasurementSource};
use aislar::stats::compare_samples;
use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

/// One instruction of a program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Op {
    Add(i64),
    Mul(i64),
    Nop,
}

/// Deterministic output of `program` on `x`
pub fn run(program: &[Op], x: i64) -> i64 {
    program.iter().fold(x, |acc, op| match op {
        Op::Add(k) => acc + k,
        Op::Mul(k) => acc * k,
        Op::Nop => acc,
    })
}

/// The behavior the properties expect: 2x + 1
pub fn reference(x: i64) -> i64 {
    2 * x + 1
}

/// Properties checked against every candidate program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Output distribution matches `reference(x)`
    ExpectedValue,
    /// Output grows by 2 per unit of input
    UnitStep,
}

/// Measurement source backed by a seeded RNG
pub struct SimulatedSource {
    rng: StdRng,
    pub measure_calls: usize,
    pub verify_calls: usize,
}

impl SimulatedSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            measure_calls: 0,
            verify_calls: 0,
        }
    }

    fn noisy(&mut self, value: i64, shots: usize) -> Vec<f32> {
        (0..shots)
            .map(|_| value as f32 + self.rng.gen_range(-0.5f32..0.5))
            .collect()
    }

    fn observe(&mut self, check: Check, program: &[Op], x: i64, shots: usize) -> Vec<f32> {
        match check {
            Check::ExpectedValue => self.noisy(run(program, x), shots),
            Check::UnitStep => {
                let low = self.noisy(run(program, x), shots);
                let high = self.noisy(run(program, x + 1), shots);
                high.iter().zip(&low).map(|(h, l)| h - l).collect()
            }
        }
    }

    fn expected(&mut self, check: Check, x: i64, shots: usize) -> Vec<f32> {
        match check {
            Check::ExpectedValue => self.noisy(reference(x), shots),
            Check::UnitStep => {
                let low = self.noisy(reference(x), shots);
                let high = self.noisy(reference(x + 1), shots);
                high.iter().zip(&low).map(|(h, l)| h - l).collect()
            }
        }
    }
}

impl MeasurementSource<Op> for SimulatedSource {
    type Property = Check;
    type Input = i64;
    type Observation = Vec<f32>;

    fn measure(
        &mut self,
        property: &Check,
        configuration: &[Op],
        inputs: usize,
        measurements: usize,
    ) -> Result<Vec<Measurement<i64, Vec<f32>>>> {
        self.measure_calls += 1;
        (0..inputs)
            .map(|_| -> Result<Measurement<i64, Vec<f32>>> {
                let x = self.rng.gen_range(-50i64..50);
                let observation = self.observe(*property, configuration, x, measurements);
                let expected = self.expected(*property, x, measurements);
                let comparison = compare_samples(&expected, &observation)?;
                Ok(Measurement {
                    input: x,
                    observation,
                    p_values: vec![comparison.p_value],
                })
            })
            .collect()
    }

    fn verify(
        &mut self,
        property: &Check,
        failing: &[Op],
        measurement: &Measurement<i64, Vec<f32>>,
        measurements: usize,
    ) -> Result<Vec<f64>> {
        self.verify_calls += 1;
        let failing_observation = self.observe(*property, failing, measurement.input, measurements);
        let comparison = compare_samples(&failing_observation, &measurement.observation)?;
        Ok(vec![comparison.p_value])
    }
}

/// Install a test-writer subscriber once per test binary
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
