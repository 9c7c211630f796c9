use crate::error::SystemError;
use crate::traits::{DynamicalSystem, Scalar};
use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

/// Number of state variables (x, y, z).
pub const DIMENSION: usize = 3;

/// Damping coefficient at which the attractor is chaotic.
pub const DEFAULT_B: f64 = 0.208186;

/// Thomas attractor vector field at `xyz` with damping coefficient `b`.
///
/// Returns `(sin(y) - b x, sin(z) - b y, sin(x) - b z)`. The input is left
/// untouched and non-finite values propagate into the matching component.
#[inline]
pub fn thomas_attractor<T: Scalar>(xyz: &[T; 3], b: T) -> [T; 3] {
    let [x, y, z] = *xyz;
    [y.sin() - b * x, z.sin() - b * y, x.sin() - b * z]
}

/// Partial derivatives of the field, row `i` holding d(f_i)/d(x, y, z).
pub fn jacobian(xyz: &[f64; 3], b: f64) -> Matrix3<f64> {
    let [x, y, z] = *xyz;
    Matrix3::new(
        -b,
        y.cos(),
        0.0,
        0.0,
        -b,
        z.cos(),
        x.cos(),
        0.0,
        -b,
    )
}

/// Parameter set of the Thomas attractor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: Scalar + Deserialize<'de>"))]
pub struct ThomasAttractor<T = f64> {
    pub b: T,
}

impl<T: Scalar> Default for ThomasAttractor<T> {
    fn default() -> Self {
        Self {
            b: T::from_f64(DEFAULT_B).unwrap(),
        }
    }
}

impl<T: Scalar> ThomasAttractor<T> {
    pub fn new(b: T) -> Self {
        tracing::debug!(b = ?b, "configured Thomas attractor");
        Self { b }
    }

    pub fn derivative(&self, xyz: &[T; 3]) -> [T; 3] {
        thomas_attractor(xyz, self.b)
    }

    /// Slice entry point that checks both buffers hold exactly three values.
    pub fn try_apply(&self, x: &[T], out: &mut [T]) -> Result<(), SystemError> {
        if x.len() != DIMENSION || out.len() != DIMENSION {
            return Err(SystemError::DimensionMismatch {
                expected: DIMENSION,
                state: x.len(),
                out: out.len(),
            });
        }
        self.apply(T::zero(), x, out);
        Ok(())
    }
}

impl ThomasAttractor<f64> {
    pub fn jacobian(&self, xyz: &[f64; 3]) -> Matrix3<f64> {
        jacobian(xyz, self.b)
    }
}

impl<T: Scalar> DynamicalSystem<T> for ThomasAttractor<T> {
    fn dimension(&self) -> usize {
        DIMENSION
    }

    // Autonomous: t does not enter the field.
    fn apply(&self, _t: T, x: &[T], out: &mut [T]) {
        let dxdt = thomas_attractor(&[x[0], x[1], x[2]], self.b);
        out[..DIMENSION].copy_from_slice(&dxdt);
    }
}
