pub use crate::quad::{QuadratureIntegrator, QuadratureIntegratorBuilder};
pub use crate::result::{QuadratureError, QuadratureResult};
pub use crate::simpson::simpson;
pub use crate::strategy::SummationStrategy;
pub use crate::trapezoid::trapezoid;
