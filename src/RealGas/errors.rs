use thiserror::Error;

/// Errors raised by the real-gas calculations.
///
/// Every variant names the physical quantity and the state (or calculation step)
/// where the problem was detected, so the message can be shown to the user as is.
#[derive(Debug, Error)]
pub enum RealGasError {
    #[error("{quantity} must be positive and finite, got {value} ({context})")]
    NonPositive {
        quantity: String,
        value: f64,
        context: String,
    },
    #[error(
        "molar volume {volume} m3/mol must exceed the Peng-Robinson co-volume b = {covolume} m3/mol ({context})"
    )]
    VolumeBelowCovolume {
        volume: f64,
        covolume: f64,
        context: String,
    },
    #[error("argument of {function} in {quantity} is {value}, outside its domain ({context})")]
    InvalidArgument {
        function: String,
        quantity: String,
        value: f64,
        context: String,
    },
    #[error("{quantity} evaluated to a non-finite value {value} ({context})")]
    NonFinite {
        quantity: String,
        value: f64,
        context: String,
    },
    #[error("substance '{0}' not found in the library")]
    UnknownSubstance(String),
    #[error("invalid substance data for '{name}': {reason}")]
    InvalidSubstance { name: String, reason: String },
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to deserialize data: {0}")]
    SerdeError(#[from] serde_json::Error),
}

impl RealGasError {
    pub fn non_positive(quantity: &str, value: f64, context: &str) -> Self {
        RealGasError::NonPositive {
            quantity: quantity.to_string(),
            value,
            context: context.to_string(),
        }
    }

    pub fn non_finite(quantity: &str, value: f64, context: &str) -> Self {
        RealGasError::NonFinite {
            quantity: quantity.to_string(),
            value,
            context: context.to_string(),
        }
    }

    pub fn invalid_argument(function: &str, quantity: &str, value: f64, context: &str) -> Self {
        RealGasError::InvalidArgument {
            function: function.to_string(),
            quantity: quantity.to_string(),
            value,
            context: context.to_string(),
        }
    }

    /// true for the errors caused by physically invalid input (T, ν, P out of range)
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            RealGasError::NonPositive { .. } | RealGasError::VolumeBelowCovolume { .. }
        )
    }

    /// true for the errors caused by a formula leaving its numerical domain
    pub fn is_numerical_instability(&self) -> bool {
        matches!(
            self,
            RealGasError::InvalidArgument { .. } | RealGasError::NonFinite { .. }
        )
    }
}

/// Checks that a quantity is finite and strictly positive.
pub fn ensure_positive(quantity: &str, value: f64, context: &str) -> Result<f64, RealGasError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(RealGasError::non_positive(quantity, value, context))
    }
}

/// Checks that a computed quantity is finite.
pub fn ensure_finite(quantity: &str, value: f64, context: &str) -> Result<f64, RealGasError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RealGasError::non_finite(quantity, value, context))
    }
}
