//! # Application Hooks
//!
//! What a program supplies to a facade: how to build the System, which
//! controllers, models and views to attach, and what to do between steps.

use anyhow::Result;

use super::facade::Facade;

/// Integrator-side hooks driven by [`Facade::init`] and [`Facade::run`]
pub trait Application<I: 'static> {
    /// Construct the System and install it with [`Facade::set_system`]
    fn init_system(&mut self, facade: &mut Facade<I>) -> Result<()>;

    fn attach_controllers(&mut self, _facade: &mut Facade<I>) -> Result<()> {
        Ok(())
    }

    fn attach_models(&mut self, _facade: &mut Facade<I>) -> Result<()> {
        Ok(())
    }

    fn attach_views(&mut self, _facade: &mut Facade<I>) -> Result<()> {
        Ok(())
    }

    /// Called once per loop iteration, after the System step
    fn idle(&mut self, _facade: &mut Facade<I>) -> Result<()> {
        Ok(())
    }
}
