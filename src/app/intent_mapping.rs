//! Mapping von Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

#[cfg(test)]
mod tests;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PlaceMachineRequested {
            machine_id,
            world_pos,
        } => vec![AppCommand::PlaceMachine {
            machine_id,
            position: world_pos,
        }],
        AppIntent::PlaceJunctionRequested { kind, world_pos } => {
            vec![AppCommand::PlaceJunction {
                kind,
                center: world_pos,
            }]
        }
        AppIntent::BeltToolClicked { world_pos } => vec![AppCommand::BeltToolPick {
            world_pos,
            max_distance: state.options.port_pick_radius,
        }],
        AppIntent::BeltToolCancelled => vec![AppCommand::CancelBeltTool],
        AppIntent::DragStarted { world_pos } => {
            // Ein offener Belt-Klick verfällt, sobald ein Owner gegriffen wird
            let mut commands = Vec::with_capacity(2);
            if state.belt_tool.is_pending() {
                commands.push(AppCommand::CancelBeltTool);
            }
            commands.push(AppCommand::BeginDrag { world_pos });
            commands
        }
        AppIntent::DragMoved { world_pos } => {
            if state.drag.is_some() {
                vec![AppCommand::DragTo { world_pos }]
            } else {
                Vec::new()
            }
        }
        AppIntent::DragEnded => {
            if state.drag.is_some() {
                vec![AppCommand::EndDrag]
            } else {
                Vec::new()
            }
        }
        AppIntent::FreeEndpointMoved {
            belt,
            end,
            world_pos,
        } => vec![AppCommand::MoveFreeEndpoint {
            belt,
            end,
            position: world_pos,
        }],
        AppIntent::RemoveOwnerRequested { owner } => vec![AppCommand::RemoveOwner { owner }],
        AppIntent::RemoveBeltRequested { belt } => vec![AppCommand::RemoveBelt { belt }],
        AppIntent::RecipeSelected { owner, recipe } => {
            vec![AppCommand::SetRecipe { owner, recipe }]
        }
        AppIntent::RerouteAllRequested => vec![AppCommand::RerouteAll],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::LoadLayoutRequested { path } => vec![AppCommand::LoadLayout { path }],
        AppIntent::SaveLayoutRequested { path } => vec![AppCommand::SaveLayout { path }],
    }
}
