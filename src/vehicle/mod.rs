//! Vehicle model: bicycle kinematics, body/wheel geometry and turn envelopes.

mod envelope;
mod model;

pub use envelope::{SweepEnvelope, TurningRadii};
pub use model::{VehicleModel, WheelFootprints, WheelPositions};
