use factory_belt_engine::{is_orthogonal, OwnerId, PortOwner, Side};
use factory_belt_sandbox::{
    AppCommand, AppController, AppIntent, AppState, BeltEndpoint, Junction, JunctionBalance,
    JunctionKind, PortRef, SandboxOptions,
};
use glam::Vec2;

fn v(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

fn place(controller: &mut AppController, state: &mut AppState, machine: &str, pos: Vec2) {
    controller
        .handle_intent(
            state,
            AppIntent::PlaceMachineRequested {
                machine_id: machine.to_string(),
                world_pos: pos,
            },
        )
        .expect("Platzieren sollte funktionieren");
}

fn click(controller: &mut AppController, state: &mut AppState, pos: Vec2) {
    controller
        .handle_intent(state, AppIntent::BeltToolClicked { world_pos: pos })
        .expect("Belt-Klick sollte ohne Fehler durchlaufen");
}

/// Bohrer #1 bei (0,0), Ofen #2 bei (200,0), per Belt-Werkzeug verbunden.
fn connected_setup() -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    place(&mut controller, &mut state, "miner", v(0.0, 0.0));
    place(&mut controller, &mut state, "furnace", v(205.0, 3.0));
    click(&mut controller, &mut state, v(81.0, 39.0));
    click(&mut controller, &mut state, v(199.0, 41.0));
    (controller, state)
}

#[test]
fn test_placement_snaps_to_grid() {
    let (_, state) = connected_setup();
    assert_eq!(state.owner_count(), 2);
    assert_eq!(
        state.layout.factory(OwnerId(2)).map(|f| f.position()),
        Some(v(200.0, 0.0))
    );
}

#[test]
fn test_belt_tool_connects_two_ports() {
    let (_, state) = connected_setup();

    assert_eq!(state.belt_count(), 1);
    assert!(!state.belt_tool.is_pending());
    let belt = state.layout.belts().next().expect("Belt vorhanden");
    assert_eq!(
        belt.path,
        vec![v(80.0, 40.0), v(120.0, 40.0), v(160.0, 40.0), v(200.0, 40.0)]
    );
}

#[test]
fn test_belt_tool_rejects_two_outputs_before_routing() {
    let (mut controller, mut state) = connected_setup();
    place(&mut controller, &mut state, "miner", v(0.0, 200.0));

    // Ofen-Ausgang, dann Ausgang des zweiten Bohrers
    click(&mut controller, &mut state, v(280.0, 40.0));
    assert!(state.belt_tool.is_pending());
    click(&mut controller, &mut state, v(80.0, 240.0));

    assert_eq!(state.belt_count(), 1);
    assert!(!state.belt_tool.is_pending());
    let message = state.status_message.clone().unwrap_or_default();
    assert!(message.contains("abgelehnt"), "Statusmeldung: {message}");
}

#[test]
fn test_belt_tool_ignores_occupied_first_port() {
    let (mut controller, mut state) = connected_setup();
    click(&mut controller, &mut state, v(80.0, 40.0));
    assert!(!state.belt_tool.is_pending());
    assert_eq!(state.belt_count(), 1);
}

#[test]
fn test_click_into_void_respects_free_endpoint_option() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    place(&mut controller, &mut state, "miner", v(0.0, 0.0));

    click(&mut controller, &mut state, v(80.0, 40.0));
    click(&mut controller, &mut state, v(400.0, 400.0));
    assert_eq!(state.belt_count(), 0);

    let options = SandboxOptions {
        allow_free_endpoints: true,
        ..SandboxOptions::default()
    };
    controller
        .handle_intent(
            &mut state,
            AppIntent::OptionsChanged {
                options: Box::new(options),
            },
        )
        .expect("Optionen übernehmen");

    click(&mut controller, &mut state, v(80.0, 40.0));
    click(&mut controller, &mut state, v(400.0, 400.0));
    assert_eq!(state.belt_count(), 1);

    let belt = state.layout.belts().next().expect("Belt vorhanden");
    assert!(matches!(belt.end, BeltEndpoint::FreeNode(_)));
    assert_eq!(belt.path.last(), Some(&v(400.0, 400.0)));
    assert!(is_orthogonal(&belt.path));
}

#[test]
fn test_drag_reroutes_live_and_snaps_on_release() {
    let (mut controller, mut state) = connected_setup();

    controller
        .handle_intent(
            &mut state,
            AppIntent::DragStarted {
                world_pos: v(220.0, 20.0),
            },
        )
        .expect("Drag-Start");
    assert_eq!(state.drag.map(|d| d.owner), Some(OwnerId(2)));

    controller
        .handle_intent(
            &mut state,
            AppIntent::DragMoved {
                world_pos: v(233.0, 150.0),
            },
        )
        .expect("Drag-Bewegung");
    let belt = state.layout.belts().next().expect("Belt vorhanden");
    assert_eq!(belt.path.last(), Some(&v(213.0, 170.0)));
    assert!(is_orthogonal(&belt.path));

    controller
        .handle_intent(&mut state, AppIntent::DragEnded)
        .expect("Drag-Ende");
    assert!(state.drag.is_none());
    assert_eq!(
        state.layout.factory(OwnerId(2)).map(|f| f.position()),
        Some(v(200.0, 120.0))
    );
    let belt = state.layout.belts().next().expect("Belt vorhanden");
    assert_eq!(belt.path.last(), Some(&v(200.0, 160.0)));
    assert!(state.layout.blocked_belts().is_empty());
}

#[test]
fn test_remove_owner_via_intent_drops_belts() {
    let (mut controller, mut state) = connected_setup();

    controller
        .handle_intent(
            &mut state,
            AppIntent::RemoveOwnerRequested { owner: OwnerId(2) },
        )
        .expect("Owner löschen");

    assert_eq!(state.owner_count(), 1);
    assert_eq!(state.belt_count(), 0);
    assert!(matches!(
        state.command_log.last(),
        Some(AppCommand::RemoveOwner { owner }) if *owner == OwnerId(2)
    ));

    let result = controller.handle_intent(
        &mut state,
        AppIntent::RemoveOwnerRequested { owner: OwnerId(2) },
    );
    assert!(result.is_err());
}

#[test]
fn test_junction_balance_through_controller() {
    let (mut controller, mut state) = connected_setup();
    controller
        .handle_intent(
            &mut state,
            AppIntent::PlaceJunctionRequested {
                kind: JunctionKind::Merger,
                world_pos: v(318.0, 122.0),
            },
        )
        .expect("Kreuzung platzieren");

    let junction_id = OwnerId(3);
    let junction = state.layout.junction(junction_id).expect("Kreuzung vorhanden");
    assert_eq!(junction.center(), v(320.0, 120.0));

    // Ofen-Ausgang (280,40) auf den oberen Merger-Eingang (320,110)
    let top = junction.ports()[Junction::port_index(Side::Top)].position();
    assert_eq!(top, v(320.0, 110.0));
    click(&mut controller, &mut state, v(280.0, 40.0));
    click(&mut controller, &mut state, top);

    assert_eq!(state.belt_count(), 2);
    let junction = state.layout.junction(junction_id).expect("Kreuzung vorhanden");
    assert_eq!(junction.balance(), JunctionBalance::InputHeavy);
    assert_eq!(
        state.options.junction_color(junction.balance()),
        state.options.junction_color_input_heavy
    );
}

#[test]
fn test_belt_tool_skips_occupied_port_for_free_neighbour() {
    let (mut controller, mut state) = connected_setup();
    controller
        .handle_intent(
            &mut state,
            AppIntent::PlaceJunctionRequested {
                kind: JunctionKind::Merger,
                world_pos: v(320.0, 120.0),
            },
        )
        .expect("Kreuzung platzieren");
    let merger = OwnerId(3);

    // Ofen-Ausgang auf den oberen Eingang (320,110)
    click(&mut controller, &mut state, v(280.0, 40.0));
    click(&mut controller, &mut state, v(320.0, 110.0));
    assert_eq!(state.belt_count(), 2);

    // Oberer Port (belegt) liegt näher als der linke (310,120), beide im Radius
    click(&mut controller, &mut state, v(316.0, 114.0));
    assert_eq!(
        state.belt_tool.pending,
        Some(PortRef::new(merger, Junction::port_index(Side::Left)))
    );
    controller
        .handle_intent(&mut state, AppIntent::BeltToolCancelled)
        .expect("Abbrechen");

    // Nur belegte Ports im Radius: auch mit freien Enden entsteht kein Belt
    let options = SandboxOptions {
        allow_free_endpoints: true,
        ..SandboxOptions::default()
    };
    controller
        .handle_intent(
            &mut state,
            AppIntent::OptionsChanged {
                options: Box::new(options),
            },
        )
        .expect("Optionen übernehmen");
    place(&mut controller, &mut state, "miner", v(0.0, 200.0));
    click(&mut controller, &mut state, v(80.0, 240.0));
    assert!(state.belt_tool.is_pending());
    click(&mut controller, &mut state, v(320.0, 110.0));
    assert!(!state.belt_tool.is_pending());
    assert_eq!(state.belt_count(), 2);
    let message = state.status_message.clone().unwrap_or_default();
    assert!(message.contains("belegt"), "Statusmeldung: {message}");
}

#[test]
fn test_recipe_selection_is_validated() {
    let (mut controller, mut state) = connected_setup();

    controller
        .handle_intent(
            &mut state,
            AppIntent::RecipeSelected {
                owner: OwnerId(2),
                recipe: Some("iron_plate".into()),
            },
        )
        .expect("erlaubtes Rezept");
    assert_eq!(
        state.layout.factory(OwnerId(2)).and_then(|f| f.recipe()),
        Some("iron_plate")
    );

    let result = controller.handle_intent(
        &mut state,
        AppIntent::RecipeSelected {
            owner: OwnerId(2),
            recipe: Some("circuit".into()),
        },
    );
    assert!(result.is_err());
}

#[test]
fn test_save_and_load_layout_roundtrip() {
    let (mut controller, mut state) = connected_setup();
    let path = std::env::temp_dir().join(format!(
        "factory_belt_sandbox_roundtrip_{}.json",
        std::process::id()
    ));

    controller
        .handle_intent(
            &mut state,
            AppIntent::SaveLayoutRequested { path: path.clone() },
        )
        .expect("Speichern");

    let mut fresh = AppState::new();
    controller
        .handle_intent(
            &mut fresh,
            AppIntent::LoadLayoutRequested { path: path.clone() },
        )
        .expect("Laden");
    let _ = std::fs::remove_file(&path);

    assert_eq!(fresh.owner_count(), state.owner_count());
    assert_eq!(fresh.belt_count(), state.belt_count());
    let original: Vec<_> = state.layout.belts().map(|b| b.path.clone()).collect();
    let reloaded: Vec<_> = fresh.layout.belts().map(|b| b.path.clone()).collect();
    assert_eq!(original, reloaded);
}
