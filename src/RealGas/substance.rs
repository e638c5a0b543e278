//! # Substance data
//!
//! Immutable value objects describing a pure gas: critical constants and acentric factor
//! for the Peng-Robinson equation of state, the ideal-gas heat capacity correlation and
//! the molecular data used by the statistical-mechanics entropy.
//!
//! Substances are constructed directly from a [`SubstanceRecord`] or looked up by name
//! (or formula) in a [`SubstanceLibrary`]. The library shipped with the crate is a JSON
//! document; a user library with the same layout can be loaded from a file:
//! ```json
//! {
//!   "methane": {
//!     "formula": "CH4", "Tc": 190.0, "Pc": 4599000.0, "omega": 0.012,
//!     "cp": { "DIPPR107": { "A": 33298.0, "B": 79933.0, "C": 2086.9, "D": 41602.0, "E": 991.96 } },
//!     "stat_mech": { "molar_mass": 16.043, "symmetry_number": 12.0,
//!                    "rotor": { "Nonlinear": { "theta_a": 7.54, "theta_b": 7.54, "theta_c": 7.54 } },
//!                    "theta_vib": [4170.0], "degeneracy": 1.0 }
//!   }
//! }
//! ```
use super::errors::RealGasError;
use super::heat_capacity::{CpCorrelation, HeatCapacity};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const BUILTIN_LIBRARY: &str = include_str!("substances.json");

/// Rotational characteristic temperatures, K
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Rotor {
    /// linear molecule, one rotational temperature
    Linear { theta: f64 },
    /// nonlinear molecule, one temperature per principal moment of inertia
    Nonlinear {
        theta_a: f64,
        theta_b: f64,
        theta_c: f64,
    },
}

/// Molecular data for the statistical-mechanics entropy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatMechData {
    /// g/mol
    pub molar_mass: f64,
    pub symmetry_number: f64,
    pub rotor: Rotor,
    /// vibrational characteristic temperatures, K; a degenerate mode is listed once per degeneracy
    pub theta_vib: Vec<f64>,
    /// ground-state electronic degeneracy
    pub degeneracy: f64,
}

/// Raw substance data as found in a library file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[allow(non_snake_case)]
pub struct SubstanceRecord {
    #[serde(default)]
    pub formula: String,
    /// critical temperature, K
    pub Tc: f64,
    /// critical pressure, Pa
    pub Pc: f64,
    /// acentric factor
    pub omega: f64,
    pub cp: CpCorrelation,
    pub stat_mech: StatMechData,
}

/// Validated, immutable substance
#[derive(Debug, Clone, PartialEq, Serialize)]
#[allow(non_snake_case)]
pub struct Substance {
    name: String,
    formula: String,
    Tc: f64,
    Pc: f64,
    omega: f64,
    cp: CpCorrelation,
    stat_mech: StatMechData,
}

#[allow(non_snake_case)]
impl Substance {
    pub fn new(name: &str, record: SubstanceRecord) -> Result<Self, RealGasError> {
        let invalid = |reason: String| RealGasError::InvalidSubstance {
            name: name.to_string(),
            reason,
        };
        let positive = |what: &str, x: f64| {
            if x.is_finite() && x > 0.0 {
                Ok(())
            } else {
                Err(invalid(format!("{} must be positive, got {}", what, x)))
            }
        };
        positive("critical temperature Tc", record.Tc)?;
        positive("critical pressure Pc", record.Pc)?;
        if !record.omega.is_finite() {
            return Err(invalid(format!("acentric factor is {}", record.omega)));
        }
        record.cp.validate().map_err(invalid)?;

        let sm = &record.stat_mech;
        positive("molar mass", sm.molar_mass)?;
        positive("symmetry number", sm.symmetry_number)?;
        positive("electronic degeneracy", sm.degeneracy)?;
        match sm.rotor {
            Rotor::Linear { theta } => positive("rotational temperature", theta)?,
            Rotor::Nonlinear {
                theta_a,
                theta_b,
                theta_c,
            } => {
                positive("rotational temperature theta_a", theta_a)?;
                positive("rotational temperature theta_b", theta_b)?;
                positive("rotational temperature theta_c", theta_c)?;
            }
        }
        for theta in &sm.theta_vib {
            positive("vibrational temperature", *theta)?;
        }

        Ok(Self {
            name: name.to_string(),
            formula: record.formula,
            Tc: record.Tc,
            Pc: record.Pc,
            omega: record.omega,
            cp: record.cp,
            stat_mech: record.stat_mech,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn formula(&self) -> &str {
        &self.formula
    }
    /// critical temperature, K
    pub fn Tc(&self) -> f64 {
        self.Tc
    }
    /// critical pressure, Pa
    pub fn Pc(&self) -> f64 {
        self.Pc
    }
    /// acentric factor
    pub fn omega(&self) -> f64 {
        self.omega
    }
    pub fn cp(&self) -> &CpCorrelation {
        &self.cp
    }
    pub fn stat_mech(&self) -> &StatMechData {
        &self.stat_mech
    }

    /// copy of the substance with other critical constants, everything else kept
    pub fn with_critical_constants(&self, Tc: f64, Pc: f64, omega: f64) -> Result<Self, RealGasError> {
        Substance::new(&self.name, self.to_record_with(Tc, Pc, omega))
    }

    fn to_record_with(&self, Tc: f64, Pc: f64, omega: f64) -> SubstanceRecord {
        SubstanceRecord {
            formula: self.formula.clone(),
            Tc,
            Pc,
            omega,
            cp: self.cp.clone(),
            stat_mech: self.stat_mech.clone(),
        }
    }
}

/// Collection of substances addressable by name or formula (case-insensitive)
#[derive(Debug, Clone, Default)]
pub struct SubstanceLibrary {
    substances: HashMap<String, Substance>,
}

impl SubstanceLibrary {
    /// library shipped with the crate
    pub fn builtin() -> Result<Self, RealGasError> {
        Self::from_json_str(BUILTIN_LIBRARY)
    }

    pub fn from_json_str(json: &str) -> Result<Self, RealGasError> {
        let records: HashMap<String, SubstanceRecord> = serde_json::from_str(json)?;
        let mut substances = HashMap::new();
        for (name, record) in records {
            let substance = Substance::new(&name, record)?;
            substances.insert(name.to_lowercase(), substance);
        }
        Ok(Self { substances })
    }

    pub fn from_file(path: &Path) -> Result<Self, RealGasError> {
        let content = fs::read_to_string(path)?;
        let library = Self::from_json_str(&content)?;
        info!(
            "loaded {} substances from '{}'",
            library.substances.len(),
            path.display()
        );
        Ok(library)
    }

    pub fn insert(&mut self, substance: Substance) {
        self.substances
            .insert(substance.name().to_lowercase(), substance);
    }

    /// lookup by name first, then by formula
    pub fn get(&self, name_or_formula: &str) -> Result<&Substance, RealGasError> {
        let key = name_or_formula.trim().to_lowercase();
        self.substances
            .get(&key)
            .or_else(|| {
                self.substances
                    .values()
                    .find(|s| !s.formula.is_empty() && s.formula.to_lowercase() == key)
            })
            .ok_or_else(|| RealGasError::UnknownSubstance(name_or_formula.to_string()))
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.substances.values().map(|s| s.name.clone()).collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.substances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.substances.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_library() {
        let lib = SubstanceLibrary::builtin().unwrap();
        assert_eq!(lib.len(), 3);
        assert_eq!(lib.names(), vec!["carbon dioxide", "methane", "nitrogen"]);
        let ch4 = lib.get("Methane").unwrap();
        assert_eq!(ch4.Tc(), 190.0);
        assert_eq!(ch4.Pc(), 4.599e6);
        assert_eq!(ch4.omega(), 0.012);
        assert_eq!(ch4.stat_mech().theta_vib.len(), 9);
    }

    #[test]
    fn test_lookup_by_formula() {
        let lib = SubstanceLibrary::builtin().unwrap();
        assert_eq!(lib.get("co2").unwrap().name(), "carbon dioxide");
        assert_eq!(lib.get(" N2 ").unwrap().name(), "nitrogen");
    }

    #[test]
    fn test_unknown_substance() {
        let lib = SubstanceLibrary::builtin().unwrap();
        let err = lib.get("unobtainium").unwrap_err();
        assert!(matches!(err, RealGasError::UnknownSubstance(ref s) if s == "unobtainium"));
    }

    #[test]
    fn test_invalid_record_is_rejected() {
        let lib = SubstanceLibrary::builtin().unwrap();
        let ch4 = lib.get("methane").unwrap();
        let err = ch4.with_critical_constants(190.0, -1.0, 0.012).unwrap_err();
        assert!(matches!(err, RealGasError::InvalidSubstance { .. }));
        assert!(err.to_string().contains("critical pressure"));
    }

    #[test]
    fn test_with_critical_constants_keeps_molecular_data() {
        let lib = SubstanceLibrary::builtin().unwrap();
        let ch4 = lib.get("methane").unwrap();
        let modified = ch4.with_critical_constants(190.56, 4.5992e6, 0.011).unwrap();
        assert_eq!(modified.Tc(), 190.56);
        assert_eq!(modified.cp(), ch4.cp());
        assert_eq!(modified.stat_mech(), ch4.stat_mech());
    }

    #[test]
    fn test_library_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = r#"{
            "argon": {
                "formula": "Ar", "Tc": 150.7, "Pc": 4863000.0, "omega": -0.002,
                "cp": { "DIPPR100": { "coeffs": [20786.0] } },
                "stat_mech": { "molar_mass": 39.948, "symmetry_number": 1.0,
                               "rotor": { "Linear": { "theta": 1.0 } },
                               "theta_vib": [], "degeneracy": 1.0 }
            }
        }"#;
        file.write_all(json.as_bytes()).unwrap();
        let lib = SubstanceLibrary::from_file(file.path()).unwrap();
        assert_eq!(lib.get("Ar").unwrap().name(), "argon");
    }

    #[test]
    fn test_malformed_json_is_a_serde_error() {
        let err = SubstanceLibrary::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, RealGasError::SerdeError(_)));
    }
}
