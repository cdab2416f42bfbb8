use bevy::prelude::*;

#[cfg(test)]
mod tests;

mod config;
mod controller;
mod domain;
mod resource;
mod simulator;
mod visualizer;

fn main() {
    let config = config::SimulationConfig::default();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: config.title.to_string(),
                resolution: (config.arena.width as f32, config.arena.height as f32).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(controller::Controller)
        .add_plugins(visualizer::Visualizer)
        .add_plugins(simulator::Simulator { config })
        .run();
}
