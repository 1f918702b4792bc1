use glam::Vec2;

use crate::app::state::DragState;
use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::PortRef;
use factory_belt_engine::OwnerId;

use super::map_intent_to_commands;

#[test]
fn test_belt_tool_click_uses_pick_radius_from_options() {
    let mut state = AppState::new();
    state.options.port_pick_radius = 20.0;

    let commands = map_intent_to_commands(
        &state,
        AppIntent::BeltToolClicked {
            world_pos: Vec2::new(5.0, 5.0),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::BeltToolPick { max_distance, .. } if max_distance == 20.0
    ));
}

#[test]
fn test_drag_start_cancels_pending_belt_first() {
    let mut state = AppState::new();
    state.belt_tool.pending = Some(PortRef::new(OwnerId(1), 0));

    let commands = map_intent_to_commands(
        &state,
        AppIntent::DragStarted {
            world_pos: Vec2::ZERO,
        },
    );

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::CancelBeltTool));
    assert!(matches!(commands[1], AppCommand::BeginDrag { .. }));
}

#[test]
fn test_drag_moves_without_grab_are_ignored() {
    let mut state = AppState::new();
    let intent = AppIntent::DragMoved {
        world_pos: Vec2::ONE,
    };
    assert!(map_intent_to_commands(&state, intent.clone()).is_empty());
    assert!(map_intent_to_commands(&state, AppIntent::DragEnded).is_empty());

    state.drag = Some(DragState {
        owner: OwnerId(1),
        grab_offset: Vec2::ZERO,
    });
    assert!(matches!(
        map_intent_to_commands(&state, intent).as_slice(),
        [AppCommand::DragTo { .. }]
    ));
    assert!(matches!(
        map_intent_to_commands(&state, AppIntent::DragEnded).as_slice(),
        [AppCommand::EndDrag]
    ));
}
