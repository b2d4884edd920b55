use crate::cubic::ShapeParameters;
use crate::state::EosConfig;

/// Logarithm of the fugacity coefficient
/// $$\ln\varphi=Z-1-\ln(Z-B)+I$$
/// with the dimensionless parameters $A=ap/(RT)^2$ and $B=bp/(RT)$.
///
/// For $\sigma\neq\varepsilon$
/// $$I=\frac{A}{B(\varepsilon-\sigma)}\ln\frac{Z+\sigma B}{Z+\varepsilon B}$$
/// otherwise $I=-A/Z$. The compressibility factor has to exceed $B$.
pub fn ln_fugacity_coefficient(shape: &ShapeParameters, z: f64, a: f64, b: f64) -> f64 {
    let (sigma, epsilon) = (shape.sigma, shape.epsilon);
    let attraction = if shape.is_degenerate() {
        -a / z
    } else {
        a / (b * (epsilon - sigma)) * ((z + sigma * b) / (z + epsilon * b)).ln()
    };
    z - 1.0 - (z - b).ln() + attraction
}

impl EosConfig {
    /// Logarithm of the fugacity coefficient for the model of the configuration.
    ///
    /// See [ln_fugacity_coefficient].
    pub fn log_fugacity(&self, z: f64, a: f64, b: f64) -> f64 {
        ln_fugacity_coefficient(&self.shape_parameters(), z, a, b)
    }

    /// Dimensionless parameters $A=ap/(RT)^2$ and $B=bp/(RT)$ at the state of the configuration.
    pub fn dimensionless_parameters(&self) -> (f64, f64) {
        let rt = self.gas_constant * self.temperature;
        (
            self.attraction_parameter() * self.pressure / (rt * rt),
            self.co_volume() * self.pressure / rt,
        )
    }
}
