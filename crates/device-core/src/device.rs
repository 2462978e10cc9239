use crate::profile::Profile;
use rand::RngCore;

/// Lifecycle shared by every simulated hardware entity.
///
/// An inactive device always reports a measurement of zero.
pub trait Device {
    fn activate(&mut self, rng: &mut dyn RngCore);
    fn deactivate(&mut self);
    fn is_active(&self) -> bool;
    fn measurement(&self) -> f64;
    fn profile(&self) -> &'static Profile;

    fn name(&self) -> &'static str {
        self.profile().name
    }
}
