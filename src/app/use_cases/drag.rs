//! Use-Case: Owner ziehen. Angeschlossene Belts werden bei jeder Bewegung
//! neu geroutet, beim Loslassen rastet der Owner laut Optionen ein.

use glam::Vec2;

use crate::app::state::DragState;
use crate::app::AppState;

/// Greift den obersten Owner unter `world_pos` (zuletzt platzierte liegen oben).
pub fn begin(state: &mut AppState, world_pos: Vec2) {
    let grabbed = state
        .layout
        .owners()
        .iter()
        .filter(|owner| owner.body().contains(world_pos))
        .last()
        .map(|owner| DragState {
            owner: owner.owner_id(),
            grab_offset: owner.origin() - world_pos,
        });

    state.drag = grabbed;
    if grabbed.is_none() {
        log::debug!("Kein Owner unter {:?}", world_pos);
    }
}

pub fn drag_to(state: &mut AppState, world_pos: Vec2) -> anyhow::Result<()> {
    let Some(drag) = state.drag else {
        return Ok(());
    };
    state.layout.move_owner(drag.owner, world_pos + drag.grab_offset)
}

pub fn end(state: &mut AppState) -> anyhow::Result<()> {
    let Some(drag) = state.drag.take() else {
        return Ok(());
    };
    if state.options.snap_on_drop {
        state.layout.snap_owner(drag.owner)?;
    }
    Ok(())
}
