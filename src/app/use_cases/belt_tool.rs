//! Use-Case: Zwei-Klick-Belt-Werkzeug.
//!
//! Erster Klick wählt einen freien Port, zweiter Klick verbindet mit dem Port
//! unter der Maus oder legt (falls erlaubt) ein freies Ende an. Ungültige
//! Paare werden vor dem Routing abgelehnt.

use glam::Vec2;

use crate::app::AppState;

/// Verarbeitet einen Klick des Belt-Werkzeugs.
///
/// Getroffen wird der nächste freie Port im Radius; belegte Ports davor
/// werden übersprungen.
pub fn pick(state: &mut AppState, world_pos: Vec2, max_distance: f32) -> anyhow::Result<()> {
    let hit = state
        .layout
        .nearest_free_port(world_pos, max_distance)
        .map(|hit| hit.port);
    let occupied_only =
        hit.is_none() && state.layout.nearest_port(world_pos, max_distance).is_some();

    let Some(pending) = state.belt_tool.pending else {
        // Erster Klick
        match hit {
            Some(port) => {
                state.belt_tool.pending = Some(port);
                state.status_message = Some(format!(
                    "Port {} an {} gewählt, Ziel anklicken",
                    port.port, port.owner
                ));
            }
            None if occupied_only => state.warn("Port ist bereits belegt"),
            None => state.status_message = Some("Kein Port unter dem Mauszeiger".into()),
        }
        return Ok(());
    };

    // Zweiter Klick: Werkzeug kehrt in jedem Fall in den Ausgangszustand zurück
    state.belt_tool.reset();

    let Some(target) = hit else {
        if occupied_only {
            state.warn("Ziel-Port ist bereits belegt, Belt verworfen");
        } else if state.options.allow_free_endpoints {
            let id = state.layout.attach_free(pending, world_pos)?;
            state.status_message = Some(format!("{} mit freiem Ende angelegt", id));
        } else {
            state.warn("Kein Ziel-Port getroffen, Belt verworfen");
        }
        return Ok(());
    };

    if target == pending {
        state.status_message = Some("Auswahl aufgehoben".into());
        return Ok(());
    }

    let verdict = match (state.layout.port(pending), state.layout.port(target)) {
        (Some(from), Some(to)) => Some(from.check_connect(to)),
        _ => None,
    };
    match verdict {
        None => {
            state.warn("Gewählter Port existiert nicht mehr");
            return Ok(());
        }
        Some(Err(reason)) => {
            state.warn(format!("Verbindung abgelehnt: {}", reason));
            return Ok(());
        }
        Some(Ok(())) => {}
    }

    let id = state.layout.connect(pending, target)?;
    state.status_message = Some(format!("{} angelegt", id));
    Ok(())
}

pub fn cancel(state: &mut AppState) {
    state.belt_tool.reset();
}
