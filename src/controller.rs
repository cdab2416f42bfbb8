//! Keyboard control of the running simulation.
//!
//! Escape or Alt+F4 quits. D toggles the sensing rays, T the status text and B takes the barrier
//! out of the scene or puts it back.

use bevy::{app::AppExit, prelude::*};

use crate::{
    resource::{BarrierRes, SceneRes},
    visualizer::Overlay,
};

pub struct Controller;

impl Plugin for Controller {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (handle_quit, handle_overlay, handle_barrier));
    }
}

fn handle_quit(keys: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    let alt = keys.any_pressed([KeyCode::AltLeft, KeyCode::AltRight]);
    if keys.just_pressed(KeyCode::Escape) || (alt && keys.just_pressed(KeyCode::F4)) {
        info!("quit requested");
        exit.send(AppExit);
    }
}

fn handle_overlay(keys: Res<ButtonInput<KeyCode>>, mut overlay: ResMut<Overlay>) {
    if keys.just_pressed(KeyCode::KeyD) {
        overlay.show_rays = !overlay.show_rays;
    }

    if keys.just_pressed(KeyCode::KeyT) {
        overlay.show_text = !overlay.show_text;
    }
}

fn handle_barrier(
    keys: Res<ButtonInput<KeyCode>>,
    mut scene: ResMut<SceneRes>,
    mut barrier: ResMut<BarrierRes>,
) {
    if !keys.just_pressed(KeyCode::KeyB) {
        return;
    }

    if scene.contains(barrier.id) {
        barrier.parked = scene.remove(barrier.id);
        info!(id = %barrier.id, "barrier removed");
    } else if let Some(object) = barrier.parked.take() {
        barrier.id = scene.add_boxed(object);
        info!(id = %barrier.id, "barrier restored");
    }
}
