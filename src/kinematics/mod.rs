// kinematics/ - Walking figure and creature motion
//
// Everything here is a pure function of phase and layout: no state, no
// allocation. The renderer solves a pose each frame and traces the creature
// outlines straight from the control tables.

mod creature;
mod gait;
mod pose;

pub use creature::*;
pub use gait::*;
pub use pose::{Limb, Pose};
