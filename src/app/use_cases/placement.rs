//! Use-Case: Owner platzieren, löschen und konfigurieren.

use factory_belt_engine::{BeltId, OwnerId};
use glam::Vec2;

use crate::app::AppState;
use crate::core::JunctionKind;

fn placement_position(state: &AppState, world_pos: Vec2) -> Vec2 {
    if state.options.snap_on_drop {
        state.layout.snap_to_grid(world_pos)
    } else {
        world_pos
    }
}

/// Platziert eine Maschine; die linke obere Ecke rastet laut Optionen ein.
pub fn place_machine(
    state: &mut AppState,
    machine_id: &str,
    world_pos: Vec2,
) -> anyhow::Result<OwnerId> {
    let position = placement_position(state, world_pos);
    let id = state.layout.add_factory(&state.catalog, machine_id, position)?;
    state.status_message = Some(format!("Maschine '{}' platziert", machine_id));
    Ok(id)
}

pub fn place_junction(
    state: &mut AppState,
    kind: JunctionKind,
    world_pos: Vec2,
) -> anyhow::Result<OwnerId> {
    let center = placement_position(state, world_pos);
    state.layout.add_junction(kind, center)
}

/// Löscht einen Owner samt Belts und räumt Werkzeug-Zustände auf, die auf ihn zeigen.
pub fn remove_owner(state: &mut AppState, owner: OwnerId) -> anyhow::Result<()> {
    let removed = state.layout.remove_owner(owner)?;

    if state.belt_tool.pending.is_some_and(|p| p.owner == owner) {
        state.belt_tool.reset();
    }
    if state.drag.is_some_and(|d| d.owner == owner) {
        state.drag = None;
    }
    state.status_message = Some(format!(
        "Owner {} und {} Belts gelöscht",
        owner,
        removed.len()
    ));
    Ok(())
}

pub fn remove_belt(state: &mut AppState, belt: BeltId) {
    if state.layout.remove_belt(belt).is_none() {
        state.warn(format!("{} existiert nicht", belt));
    }
}

pub fn set_recipe(
    state: &mut AppState,
    owner: OwnerId,
    recipe: Option<&str>,
) -> anyhow::Result<()> {
    state.layout.set_recipe(owner, recipe, &state.catalog)
}
