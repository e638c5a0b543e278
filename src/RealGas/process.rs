//! Real-gas process between two states:
//! total = ideal-gas change (2 - 1) + departure(1) - departure(2)
use super::errors::RealGasError;
use super::ideal_gas::{IdealGasChange, ideal_gas_change_between};
use super::peng_robinson::{DepartureResult, PengRobinsonParameters, departure_change};
use super::quadrature::QuadratureConfig;
use super::state::{PropertyChange, State};
use super::substance::Substance;
use log::info;
use serde::{Deserialize, Serialize};

/// Everything computed for one process, for diagnostics and reports
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProcessResult {
    pub state1: State,
    pub state2: State,
    pub ideal: IdealGasChange,
    pub departure1: DepartureResult,
    pub departure2: DepartureResult,
    /// departure(1) - departure(2)
    pub departure_change: PropertyChange,
    pub total: PropertyChange,
}

/// Calculator bound to one substance
#[derive(Debug, Clone)]
pub struct RealGasProcess {
    substance: Substance,
    parameters: PengRobinsonParameters,
    config: QuadratureConfig,
}

impl RealGasProcess {
    pub fn new(substance: Substance, config: QuadratureConfig) -> Self {
        let parameters = PengRobinsonParameters::from_substance(&substance);
        Self {
            substance,
            parameters,
            config,
        }
    }

    /// calculator with user supplied PR constants, e.g. a = b = 0 for the ideal-gas limit
    pub fn with_parameters(
        substance: Substance,
        parameters: PengRobinsonParameters,
        config: QuadratureConfig,
    ) -> Self {
        Self {
            substance,
            parameters,
            config,
        }
    }

    pub fn substance(&self) -> &Substance {
        &self.substance
    }

    pub fn parameters(&self) -> &PengRobinsonParameters {
        &self.parameters
    }

    pub fn config(&self) -> &QuadratureConfig {
        &self.config
    }

    pub fn departure(&self, state: &State) -> Result<DepartureResult, RealGasError> {
        self.parameters.departure(state)
    }

    pub fn ideal_gas(&self, state1: &State, state2: &State) -> Result<IdealGasChange, RealGasError> {
        ideal_gas_change_between(state1, state2, &self.substance, &self.config)
    }

    pub fn evaluate(&self, state1: &State, state2: &State) -> Result<ProcessResult, RealGasError> {
        info!(
            "{}: process ({}) -> ({})",
            self.substance.name(),
            state1,
            state2
        );
        let departure1 = self.departure(state1)?;
        let departure2 = self.departure(state2)?;
        let ideal = self.ideal_gas(state1, state2)?;
        let departure_change = departure_change(&departure1, &departure2);
        let total = ideal.change + departure_change;
        info!("{}: total change {:?}", self.substance.name(), total);
        Ok(ProcessResult {
            state1: *state1,
            state2: *state2,
            ideal,
            departure1,
            departure2,
            departure_change,
            total,
        })
    }

    /// total property change only
    pub fn property_change(
        &self,
        state1: &State,
        state2: &State,
    ) -> Result<PropertyChange, RealGasError> {
        Ok(self.evaluate(state1, state2)?.total)
    }
}
