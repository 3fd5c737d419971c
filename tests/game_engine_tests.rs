use battleship_sim::{
    placement::in_usable_area, EngineError, GameConfig, GameEngine, GameStatus, Orientation,
    OwnershipBoard, Placement, ShipKind, ShotMark, State,
};

fn placement(kind: ShipKind, row: usize, col: usize, orientation: Orientation) -> Placement {
    Placement::new(kind, row, col, orientation)
}

/// Destroyer at (0,0) going down, carrier along row 2 from column 1.
fn small_fleet() -> OwnershipBoard {
    OwnershipBoard::from_placements(
        10,
        10,
        &[
            placement(ShipKind::Destroyer, 0, 0, Orientation::Vertical),
            placement(ShipKind::AircraftCarrier, 2, 1, Orientation::Horizontal),
        ],
    )
    .unwrap()
}

fn engine_with(boards: Vec<OwnershipBoard>) -> GameEngine {
    GameEngine::from_state(State::from_boards(boards).unwrap()).unwrap()
}

#[test]
fn miss_marks_shot_grid_and_water() {
    let mut engine = engine_with(vec![small_fleet(), small_fleet()]);
    assert_eq!(engine.fire(0, 1, 99).unwrap(), ShotMark::Miss);

    let state = engine.state();
    assert_eq!(state.shot_grid(0, 1).unwrap().get(99), Some(&ShotMark::Miss));
    assert_eq!(state.ownership(1).unwrap().encoded().get(99), Some(&-1));
    // the shooter's own board is untouched
    assert_eq!(state.ownership(0).unwrap().encoded().get(99), Some(&0));
}

#[test]
fn last_cell_of_ship_sinks_it() {
    let mut engine = engine_with(vec![small_fleet(), small_fleet()]);
    // carrier cells: 21..=25
    for cell in 21..25 {
        assert_eq!(engine.fire(0, 1, cell).unwrap(), ShotMark::Hit);
    }
    assert_eq!(engine.fire(0, 1, 25).unwrap(), ShotMark::Sunk);

    assert_eq!(engine.fire(0, 1, 0).unwrap(), ShotMark::Hit);
    assert_eq!(engine.fire(0, 1, 10).unwrap(), ShotMark::Sunk);

    let board = engine.state().ownership(1).unwrap();
    assert_eq!(board.remaining(ShipKind::AircraftCarrier), 0);
    assert_eq!(board.encoded().get(21), Some(&-2));
    assert_eq!(board.encoded().get(10), Some(&-6));
    assert!(board.is_defeated());
}

#[test]
fn apply_action_records_and_shrinks_valid_actions() {
    let mut engine = engine_with(vec![small_fleet(), small_fleet()]);
    let before = engine.valid_actions(0).unwrap();
    assert_eq!(before.len(), 1);
    assert_eq!(before[0].len(), 100);

    let state = engine.apply_action(&[21], 0).unwrap();
    assert_eq!(state.shot_grid(0, 1).unwrap().get(21), Some(&ShotMark::Hit));

    let after = engine.valid_actions(0).unwrap();
    assert_eq!(after[0].len(), 99);
    assert!(!after[0].contains(&21));
    assert!(after[0].windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn wrong_action_count_is_rejected_without_mutation() {
    let mut engine = engine_with(vec![small_fleet(), small_fleet()]);
    let snapshot = engine.state().clone();
    assert_eq!(
        engine.apply_action(&[1, 2], 0).unwrap_err(),
        EngineError::ActionCountMismatch { expected: 1, got: 2 }
    );
    assert_eq!(
        engine.apply_action(&[], 1).unwrap_err(),
        EngineError::ActionCountMismatch { expected: 1, got: 0 }
    );
    assert_eq!(engine.state(), &snapshot);
}

#[test]
fn reshooting_a_cell_is_an_error() {
    let mut engine = engine_with(vec![small_fleet(), small_fleet()]);
    engine.apply_action(&[0], 0).unwrap();
    let snapshot = engine.state().clone();
    assert_eq!(
        engine.apply_action(&[0], 0).unwrap_err(),
        EngineError::AlreadyShot {
            player: 0,
            opponent: 1,
            cell: 0
        }
    );
    assert_eq!(engine.state(), &snapshot);
    assert_eq!(engine.state().ownership(1).unwrap().remaining(ShipKind::Destroyer), 1);
}

#[test]
fn bad_indices_are_rejected() {
    let mut engine = engine_with(vec![small_fleet(), small_fleet()]);
    assert_eq!(
        engine.apply_action(&[100], 0).unwrap_err(),
        EngineError::CellOutOfRange { cell: 100, cells: 100 }
    );
    assert_eq!(
        engine.apply_action(&[0], 2).unwrap_err(),
        EngineError::InvalidPlayer { player: 2, n_players: 2 }
    );
    assert_eq!(
        engine.fire(1, 1, 0).unwrap_err(),
        EngineError::NotAnOpponent { player: 1 }
    );
    assert!(engine.valid_actions(5).is_err());
}

#[test]
fn turns_alternate_by_shot_count() {
    let mut engine = engine_with(vec![small_fleet(), small_fleet()]);
    assert_eq!(engine.current_player().unwrap(), 0);
    engine.apply_action(&[50], 0).unwrap();
    assert_eq!(engine.current_player().unwrap(), 1);
    engine.apply_action(&[50], 1).unwrap();
    assert_eq!(engine.current_player().unwrap(), 0);
    assert_eq!(engine.shots_taken(0).unwrap(), 1);
    assert_eq!(engine.shots_taken(1).unwrap(), 1);
}

#[test]
fn turn_order_is_two_player_only() {
    let engine = engine_with(vec![small_fleet(), small_fleet(), small_fleet()]);
    assert_eq!(
        engine.current_player().unwrap_err(),
        EngineError::UnsupportedTurnOrder { n_players: 3 }
    );
}

#[test]
fn status_reports_winner_once_fleet_is_gone() {
    let mut engine = engine_with(vec![small_fleet(), small_fleet()]);
    assert_eq!(engine.status(), GameStatus::InProgress);
    for cell in [0, 10, 21, 22, 23, 24] {
        engine.fire(1, 0, cell).unwrap();
        assert_eq!(engine.status(), GameStatus::InProgress);
    }
    engine.fire(1, 0, 25).unwrap();
    assert_eq!(engine.status(), GameStatus::Won(1));
    assert!(engine.status().is_finished());
    assert_eq!(engine.status().winner(), Some(1));
}

#[test]
fn empty_fleet_means_opponent_wins() {
    let engine = engine_with(vec![small_fleet(), OwnershipBoard::new(10, 10)]);
    assert_eq!(engine.status(), GameStatus::Won(0));

    let engine = engine_with(vec![OwnershipBoard::new(10, 10), small_fleet()]);
    assert_eq!(engine.status(), GameStatus::Won(1));
}

#[test]
fn three_player_shots_target_each_opponent() {
    let mut engine = engine_with(vec![small_fleet(), small_fleet(), small_fleet()]);
    let valid = engine.valid_actions(1).unwrap();
    assert_eq!(valid.len(), 2);
    assert_eq!(engine.action_space().len(), 2);

    // player 1 shoots player 0 at cell 0 and player 2 at cell 99
    engine.apply_action(&[0, 99], 1).unwrap();
    let state = engine.state();
    assert_eq!(state.shot_grid(1, 0).unwrap().get(0), Some(&ShotMark::Hit));
    assert_eq!(state.shot_grid(1, 2).unwrap().get(99), Some(&ShotMark::Miss));
    assert_eq!(state.shot_grid_index(1, 0).unwrap(), 0);
    assert_eq!(state.shot_grid_index(1, 2).unwrap(), 1);
    assert_eq!(
        engine.apply_action(&[1], 1).unwrap_err(),
        EngineError::ActionCountMismatch { expected: 2, got: 1 }
    );
}

#[test]
fn cell_hit_by_another_shooter_keeps_counts() {
    let mut engine = engine_with(vec![small_fleet(), small_fleet(), small_fleet()]);
    assert_eq!(engine.fire(0, 2, 0).unwrap(), ShotMark::Hit);
    assert_eq!(engine.fire(1, 2, 0).unwrap(), ShotMark::Hit);
    assert_eq!(engine.state().ownership(2).unwrap().remaining(ShipKind::Destroyer), 1);
    assert_eq!(engine.fire(1, 2, 10).unwrap(), ShotMark::Sunk);
    assert_eq!(engine.fire(0, 2, 10).unwrap(), ShotMark::Sunk);
}

#[test]
fn exhausting_shots_does_not_end_the_game() {
    let mut engine = engine_with(vec![small_fleet(), small_fleet(), small_fleet()]);
    for cell in 0..100 {
        engine.fire(0, 1, cell).unwrap();
    }
    assert!(engine.has_exhausted_opponent(0).unwrap());
    assert!(!engine.has_exhausted_opponent(1).unwrap());
    assert!(engine.valid_actions(0).unwrap()[0].is_empty());
    // player 2 still has a fleet
    assert_eq!(engine.status(), GameStatus::InProgress);
}

#[test]
fn encoded_grids_follow_block_layout() {
    let mut engine = engine_with(vec![small_fleet(), small_fleet(), small_fleet()]);
    engine.fire(0, 2, 0).unwrap();
    let grids = engine.state().encoded_grids();
    assert_eq!(grids.len(), engine.state().grid_count());
    assert_eq!(grids.len(), 3 + 3 * 2);
    // block 0: ownership, vs player 1, vs player 2
    assert_eq!(grids[0].get(0), Some(&6));
    assert_eq!(grids[2].get(0), Some(&2));
    // block 2 ownership shows the hit
    assert_eq!(grids[6].get(0), Some(&-6));
}

#[test]
fn action_space_is_static() {
    let mut engine = GameEngine::initialize(2, 10, 10, 5).unwrap();
    let before = engine.action_space();
    engine.apply_action(&[0], 0).unwrap();
    assert_eq!(engine.action_space(), before);
    assert_eq!(before, vec![(0..100).collect::<Vec<_>>()]);
}

#[test]
fn manual_placement_checks() {
    let mut board = OwnershipBoard::new(10, 10);
    board
        .place(placement(ShipKind::Battleship, 6, 9, Orientation::Vertical))
        .unwrap();
    assert_eq!(
        board.place(placement(ShipKind::Battleship, 0, 0, Orientation::Vertical)),
        Err(EngineError::ShipAlreadyPlaced(ShipKind::Battleship))
    );
    assert_eq!(
        board.place(placement(ShipKind::Cruiser, 9, 8, Orientation::Horizontal)),
        Err(EngineError::ShipOutOfBounds)
    );
    assert_eq!(
        board.place(placement(ShipKind::Cruiser, 7, 7, Orientation::Horizontal)),
        Err(EngineError::ShipOverlaps)
    );
    assert_eq!(board.ships_remaining(), 1);
    assert_eq!(board.cells_remaining(), 4);
}

#[test]
fn far_off_grid_placements_are_out_of_bounds() {
    let mut board = OwnershipBoard::new(10, 10);
    let down = placement(ShipKind::Destroyer, usize::MAX, 0, Orientation::Vertical);
    let across = placement(ShipKind::Destroyer, 0, usize::MAX, Orientation::Horizontal);
    for p in [down, across] {
        assert_eq!(p.end(), None);
        assert!(!board.is_clear(&p));
        assert!(!in_usable_area(10, 10, &p));
        assert_eq!(board.place(p), Err(EngineError::ShipOutOfBounds));
    }
    assert_eq!(board.ships_remaining(), 0);

    // touching the last row and column is fine for manual placement
    board
        .place(placement(ShipKind::Destroyer, 8, 9, Orientation::Vertical))
        .unwrap();
    assert_eq!(board.cells_remaining(), 2);
}

#[test]
fn seeded_config_matches_initialize() {
    let config = GameConfig::default().with_seed(7);
    let from_config = GameEngine::from_config(&config).unwrap();
    let initialized = GameEngine::initialize(2, 10, 10, 7).unwrap();
    assert_eq!(from_config.state(), initialized.state());
}

#[test]
fn status_is_stable_across_queries() {
    let mut engine = engine_with(vec![small_fleet(), OwnershipBoard::new(10, 10)]);
    assert_eq!(engine.status(), GameStatus::Won(0));
    assert_eq!(engine.status(), engine.status());
    engine.fire(1, 0, 0).unwrap();
    assert_eq!(engine.status(), GameStatus::Won(0));
}
