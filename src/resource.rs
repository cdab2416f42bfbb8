//! The resource module wraps domain values and configuration for use with Bevy.

use std::ops::{Deref, DerefMut};

use bevy::ecs::system::Resource;

use crate::{config::SimulationConfig, domain};

#[derive(Resource)]
pub struct SceneRes(domain::Scene);

impl Deref for SceneRes {
    type Target = domain::Scene;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for SceneRes {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<domain::Scene> for SceneRes {
    fn from(value: domain::Scene) -> Self {
        Self(value)
    }
}

#[derive(Resource)]
pub struct ConfigRes(SimulationConfig);

impl Deref for ConfigRes {
    type Target = SimulationConfig;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<SimulationConfig> for ConfigRes {
    fn from(value: SimulationConfig) -> Self {
        Self(value)
    }
}

/// The barrier obstacle, which can be taken out of the scene and put back at runtime.
#[derive(Resource)]
pub struct BarrierRes {
    pub id: domain::ObjectId,
    pub parked: Option<Box<dyn domain::SceneObject>>,
}
