// Property-based test oracle
//
// A candidate configuration is checked against a fixed set of properties.
// For each property the measurement source runs a batch of experiments on
// fresh random inputs and reports p-values. Holm-Bonferroni over all p-values
// decides whether any property is violated (first stage). Every flagged
// experiment is then re-checked against the original failing configuration
// on the same input (second stage): if the candidate's output is
// distinguishable from the failing one, the failure seen in the first stage
// is not the failure being isolated, and the verdict is Inconclusive.

use super::{TestOracle, TestResult};
use crate::config::IsolationConfig;
use crate::delta::{apply, order_by, EditOperation};
use crate::stats::{holm_bonferroni, PValueRecord};
use anyhow::{Context, Result};
use std::fmt;
use tracing::{debug, warn};

/// One experiment run by a [`MeasurementSource`]
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement<I, O> {
    /// Random input the experiment was run on
    pub input: I,

    /// What the candidate configuration produced on `input`
    ///
    /// Kept so the second stage can compare it with the failing
    /// configuration's output on the same input.
    pub observation: O,

    /// One p-value per statistical comparison in this experiment
    ///
    /// Small p-values mean the property looks violated.
    pub p_values: Vec<f64>,
}

/// Produces p-values for a configuration under a property
///
/// `Property` is a closed set of variants (typically an enum) chosen by the
/// caller. Errors are treated by [`PropertyBasedOracle`] as "no information".
pub trait MeasurementSource<T> {
    type Property: fmt::Debug;
    type Input;
    type Observation;

    /// Run `inputs` experiments of `property` on `configuration`, each
    /// sampled `measurements` times
    fn measure(
        &mut self,
        property: &Self::Property,
        configuration: &[T],
        inputs: usize,
        measurements: usize,
    ) -> Result<Vec<Measurement<Self::Input, Self::Observation>>>;

    /// Compare a previous observation with `failing` run on the same input
    ///
    /// Small p-values mean the observation differs from the failing
    /// configuration's behavior.
    fn verify(
        &mut self,
        property: &Self::Property,
        failing: &[T],
        measurement: &Measurement<Self::Input, Self::Observation>,
        measurements: usize,
    ) -> Result<Vec<f64>>;
}

/// Test oracle backed by statistical property checks
///
/// Holds borrowed `base`/`target` configurations and their full canonical
/// delta list; every evaluated subset is re-ordered against that list and
/// applied to `base` before measuring.
pub struct PropertyBasedOracle<'a, T, M: MeasurementSource<T>> {
    base: &'a [T],
    target: &'a [T],
    deltas: &'a [EditOperation],
    source: M,
    properties: Vec<M::Property>,
    config: IsolationConfig,
}

impl<'a, T: Clone, M: MeasurementSource<T>> PropertyBasedOracle<'a, T, M> {
    pub fn new(
        base: &'a [T],
        target: &'a [T],
        deltas: &'a [EditOperation],
        source: M,
        properties: Vec<M::Property>,
        config: IsolationConfig,
    ) -> Self {
        Self {
            base,
            target,
            deltas,
            source,
            properties,
            config,
        }
    }

    pub fn properties(&self) -> &[M::Property] {
        &self.properties
    }

    pub fn source(&self) -> &M {
        &self.source
    }

    pub fn into_source(self) -> M {
        self.source
    }

    /// Run both correction stages on `subset`
    ///
    /// # Errors
    /// Fails if the subset cannot be applied or the measurement source fails.
    pub fn classify(&mut self, subset: &[EditOperation]) -> Result<TestResult> {
        let ordered = order_by(subset, self.deltas);
        let candidate = apply(self.base, self.target, &ordered)
            .context("Failed to rebuild candidate configuration")?;
        let alpha = self.config.significance_level;

        let mut observed = Vec::with_capacity(self.properties.len());
        let mut first_stage = Vec::new();

        for (group_key, property) in self.properties.iter().enumerate() {
            let experiments = self
                .source
                .measure(
                    property,
                    &candidate,
                    self.config.inputs_per_property,
                    self.config.measurements,
                )
                .with_context(|| format!("Failed to measure property {:?}", property))?;

            for (sub_key, experiment) in experiments.iter().enumerate() {
                first_stage.extend(
                    experiment
                        .p_values
                        .iter()
                        .map(|&p_value| PValueRecord::new(group_key, sub_key, p_value)),
                );
            }
            observed.push(experiments);
        }

        let flagged = holm_bonferroni(&first_stage, alpha);
        if flagged.is_empty() {
            return Ok(TestResult::Passed);
        }

        let mut second_stage = Vec::new();
        for &(group_key, sub_key) in &flagged {
            let (Some(property), Some(experiment)) = (
                self.properties.get(group_key),
                observed.get(group_key).and_then(|e| e.get(sub_key)),
            ) else {
                continue;
            };

            let p_values = self
                .source
                .verify(property, self.target, experiment, self.config.measurements)
                .with_context(|| format!("Failed to verify property {:?}", property))?;
            second_stage.extend(
                p_values
                    .into_iter()
                    .map(|p_value| PValueRecord::new(group_key, sub_key, p_value)),
            );
        }

        let distinguishable = holm_bonferroni(&second_stage, alpha);
        debug!(
            subset_len = subset.len(),
            flagged = flagged.len(),
            distinguishable = distinguishable.len(),
            "property checks complete"
        );

        if distinguishable.is_empty() {
            Ok(TestResult::Failed)
        } else {
            Ok(TestResult::Inconclusive)
        }
    }
}

impl<T: Clone, M: MeasurementSource<T>> TestOracle<EditOperation> for PropertyBasedOracle<'_, T, M> {
    fn evaluate(&mut self, subset: &[EditOperation]) -> TestResult {
        match self.classify(subset) {
            Ok(result) => result,
            Err(e) => {
                warn!(subset_len = subset.len(), "treating candidate as inconclusive: {:#}", e);
                TestResult::Inconclusive
            }
        }
    }
}
