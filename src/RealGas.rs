/// universal gas constant, J/(mol·K)
pub const R: f64 = 8.314462618;

/// error types
pub mod errors;
/// heat capacity correlations (DIPPR 107, DIPPR 100)
pub mod heat_capacity;
/// ideal-gas property changes between two states
pub mod ideal_gas;
/// Peng-Robinson equation of state and departure functions
pub mod peng_robinson;
/// real-gas process: ideal-gas change plus departures
/// # Examples
/// ```
/// use RealGasThermo::RealGas::process::RealGasProcess;
/// use RealGasThermo::RealGas::quadrature::QuadratureConfig;
/// use RealGasThermo::RealGas::state::State;
/// use RealGasThermo::RealGas::substance::SubstanceLibrary;
///
/// let library = SubstanceLibrary::builtin().unwrap();
/// let methane = library.get("methane").unwrap().clone();
/// let process = RealGasProcess::new(methane, QuadratureConfig::default());
/// let state1 = State::new(173.15, 1.0 / 18800.0).unwrap();
/// let state2 = State::new(298.15, 1.0 / 750.0).unwrap();
/// let result = process.evaluate(&state1, &state2).unwrap();
/// assert!((result.total.dh - 10031.6).abs() < 1.0);
/// ```
pub mod process;
/// adaptive Gauss-Legendre quadrature
pub mod quadrature;
/// tables comparing computed changes with literature values
pub mod report;
/// states and property changes
pub mod state;
/// entropy of the ideal gas from statistical mechanics
pub mod statistical_entropy;
/// substances and the substance library
pub mod substance;

/// tests of the ideal-gas integrator
pub mod ideal_gas_tests;
