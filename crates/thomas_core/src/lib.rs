pub mod error;
/// The `thomas_core` crate evaluates the vector field of the Thomas attractor,
///
/// dx/dt = sin(y) - b x
/// dy/dt = sin(z) - b y
/// dz/dt = sin(x) - b z
///
/// It is generic over the scalar type so it can be evaluated with `f64`, `f32`
/// or any other `num_traits::Float`.
///
/// Key components:
/// - **Traits**: `Scalar` (numeric type abstraction), `DynamicalSystem` (slice-based ODE interface).
/// - **Thomas**: the pure `thomas_attractor` function, the `ThomasAttractor` parameter set and its Jacobian.
/// - **Error**: `SystemError` for the checked slice entry point.
pub mod thomas;
pub mod traits;

pub use error::SystemError;
pub use thomas::{jacobian, thomas_attractor, ThomasAttractor, DEFAULT_B, DIMENSION};
pub use traits::{DynamicalSystem, Scalar};
