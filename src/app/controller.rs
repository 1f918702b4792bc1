//! Application Controller für zentrale Event-Verarbeitung.

use super::use_cases;
use super::{AppCommand, AppIntent, AppState};

/// Orchestriert Host-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);

        match command {
            // === Platzieren & Löschen ===
            AppCommand::PlaceMachine {
                machine_id,
                position,
            } => {
                use_cases::placement::place_machine(state, &machine_id, position)?;
            }
            AppCommand::PlaceJunction { kind, center } => {
                use_cases::placement::place_junction(state, kind, center)?;
            }
            AppCommand::RemoveOwner { owner } => use_cases::placement::remove_owner(state, owner)?,
            AppCommand::RemoveBelt { belt } => use_cases::placement::remove_belt(state, belt),
            AppCommand::SetRecipe { owner, recipe } => {
                use_cases::placement::set_recipe(state, owner, recipe.as_deref())?
            }

            // === Belt-Werkzeug ===
            AppCommand::BeltToolPick {
                world_pos,
                max_distance,
            } => use_cases::belt_tool::pick(state, world_pos, max_distance)?,
            AppCommand::CancelBeltTool => use_cases::belt_tool::cancel(state),
            AppCommand::MoveFreeEndpoint {
                belt,
                end,
                position,
            } => state.layout.move_free_endpoint(belt, end, position)?,

            // === Drag ===
            AppCommand::BeginDrag { world_pos } => use_cases::drag::begin(state, world_pos),
            AppCommand::DragTo { world_pos } => use_cases::drag::drag_to(state, world_pos)?,
            AppCommand::EndDrag => use_cases::drag::end(state)?,

            // === Layout & Optionen ===
            AppCommand::RerouteAll => state.layout.reroute_all(),
            AppCommand::ApplyOptions { options } => use_cases::options::apply(state, *options),
            AppCommand::LoadLayout { path } => use_cases::file_io::load(state, &path)?,
            AppCommand::SaveLayout { path } => use_cases::file_io::save(state, &path)?,
        }

        Ok(())
    }
}
