// --- File: quoridor-room-server/quoridor-server/tests/scenarios.rs ---

//! End-to-end scenarios mirroring the concrete walkthroughs used to pin
//! down turn rotation, jump legality, barrier rejection and concurrency
//! behavior for this server.

use quoridor_core::{GameMode, MoveError, Orientation};
use quoridor_server::{action_api, ActionError};
use quoridor_store::{ActionOp, InMemoryRoomStore, RoomStatus, RoomStore, StoreError};

async fn four_player_room() -> (InMemoryRoomStore, String) {
    let store = InMemoryRoomStore::new();
    let created = action_api::create_room(&store, GameMode::FourPlayer, "host").await.unwrap();
    action_api::join_room(&store, &created.code, "p1").await.unwrap();
    action_api::join_room(&store, &created.code, "p2").await.unwrap();
    action_api::join_room(&store, &created.code, "p3").await.unwrap();
    action_api::start_room(&store, &created.code, "host").await.unwrap();
    (store, created.code)
}

async fn two_player_room() -> (InMemoryRoomStore, String) {
    let store = InMemoryRoomStore::new();
    let created = action_api::create_room(&store, GameMode::TwoPlayer, "host").await.unwrap();
    action_api::join_room(&store, &created.code, "guest").await.unwrap();
    action_api::start_room(&store, &created.code, "host").await.unwrap();
    (store, created.code)
}

/// Alternates a seat between two adjacent cells so it always has a legal,
/// non-winning move available each round.
async fn shuffle_seat(store: &InMemoryRoomStore, code: &str, identity: &str, a: (usize, usize), b: (usize, usize)) {
    let room = store.load_room(code).await.unwrap();
    let player = room.players.iter().find(|p| p.session_binding == identity).unwrap();
    let to = if player.pos == a { b } else { a };
    action_api::make_move(store, code, identity, to.0, to.1).await.unwrap();
}

/// S1 - simple win race: player 0 marches straight down their own column
/// while the other three seats shuffle in place, never reaching a goal.
/// Rotation is FOUR_PLAYER cyclic over all four seats; player 0's winning
/// move is its 9th commit, landing on turn_number 33 (8 full 4-seat rounds,
/// then one final commit that is not followed by the other three since the
/// room is already FINISHED).
#[tokio::test]
async fn s1_simple_win_race_four_player() {
    let (store, code) = four_player_room().await;

    let target_rows = [2, 3, 4, 5, 6, 7, 8, 9, 10];
    for (i, &row) in target_rows.iter().enumerate() {
        let outcome = action_api::make_move(&store, &code, "host", row, 5).await.unwrap();
        if i < target_rows.len() - 1 {
            assert_eq!(outcome.winner, None);
            shuffle_seat(&store, &code, "p1", (5, 9), (4, 9)).await;
            shuffle_seat(&store, &code, "p2", (9, 5), (9, 4)).await;
            shuffle_seat(&store, &code, "p3", (5, 1), (4, 1)).await;
        } else {
            assert_eq!(outcome.winner, Some(0));
            assert_eq!(outcome.turn_number, 33);
        }
    }

    let room = store.load_room(&code).await.unwrap();
    assert_eq!(room.status, RoomStatus::Finished);
    assert_eq!(room.winner, Some(0));
}

/// S3 - straight jump: once the two pawns are vertically adjacent with no
/// intervening barrier, jumping straight over the opponent is legal and
/// lands two cells away.
#[tokio::test]
async fn s3_straight_jump() {
    let (store, code) = two_player_room().await;
    action_api::make_move(&store, &code, "host", 2, 5).await.unwrap(); // host: (1,5) -> (2,5)
    action_api::make_move(&store, &code, "guest", 8, 5).await.unwrap(); // guest: (9,5) -> (8,5)
    action_api::make_move(&store, &code, "host", 3, 5).await.unwrap();
    action_api::make_move(&store, &code, "guest", 7, 5).await.unwrap();
    action_api::make_move(&store, &code, "host", 4, 5).await.unwrap();
    action_api::make_move(&store, &code, "guest", 6, 5).await.unwrap();
    action_api::make_move(&store, &code, "host", 5, 5).await.unwrap();
    action_api::make_move(&store, &code, "guest", 4, 5).await.unwrap(); // jumps over host: adjacent now

    let outcome = action_api::make_move(&store, &code, "host", 3, 5).await.unwrap();
    assert_eq!(outcome.winner, None);
    let room = store.load_room(&code).await.unwrap();
    let host = room.players.iter().find(|p| p.session_binding == "host").unwrap();
    let guest = room.players.iter().find(|p| p.session_binding == "guest").unwrap();
    assert_eq!(host.pos, (3, 5));
    assert_eq!(guest.pos, (4, 5));
}

/// S4 - side-step jump: the same face-to-face configuration as S3, but an
/// H-barrier directly behind the jumped pawn seals the straight landing, so
/// the diagonal side-step is what must be accepted instead. A harmless,
/// unrelated barrier is placed first purely to give the two seats an equal
/// number of total turns, since every turn here mutates state and neither
/// side can pass.
#[tokio::test]
async fn s4_side_step_jump_when_straight_landing_is_sealed() {
    let (store, code) = two_player_room().await;

    action_api::place_barrier(&store, &code, "host", 1, 1, Orientation::Horizontal).await.unwrap();
    action_api::make_move(&store, &code, "guest", 9, 4).await.unwrap();
    action_api::place_barrier(&store, &code, "host", 3, 5, Orientation::Horizontal).await.unwrap();
    action_api::make_move(&store, &code, "guest", 9, 5).await.unwrap();
    action_api::make_move(&store, &code, "host", 2, 5).await.unwrap();
    action_api::make_move(&store, &code, "guest", 8, 5).await.unwrap();
    action_api::make_move(&store, &code, "host", 3, 5).await.unwrap();
    action_api::make_move(&store, &code, "guest", 7, 5).await.unwrap();
    action_api::make_move(&store, &code, "host", 3, 4).await.unwrap(); // detour around the (3,5)-(4,5) seal
    action_api::make_move(&store, &code, "guest", 6, 5).await.unwrap();
    action_api::make_move(&store, &code, "host", 4, 4).await.unwrap();
    action_api::make_move(&store, &code, "guest", 6, 4).await.unwrap();
    action_api::make_move(&store, &code, "host", 4, 5).await.unwrap();
    action_api::make_move(&store, &code, "guest", 6, 5).await.unwrap();
    action_api::make_move(&store, &code, "host", 5, 5).await.unwrap();
    action_api::make_move(&store, &code, "guest", 4, 5).await.unwrap(); // jumps over host, lands right behind the seal

    let straight_jump = action_api::make_move(&store, &code, "host", 3, 5).await;
    assert_eq!(straight_jump, Err(ActionError::Move(MoveError::BlockedByBarrier)));

    let outcome = action_api::make_move(&store, &code, "host", 4, 4).await.unwrap();
    assert_eq!(outcome.winner, None);
    let room = store.load_room(&code).await.unwrap();
    let host = room.players.iter().find(|p| p.session_binding == "host").unwrap();
    assert_eq!(host.pos, (4, 4));
}

/// S5 - stale commit under interleaving: a job whose expected_turn no longer
/// matches the room's turn_number (because a human already moved) is
/// rejected with STALE and leaves no trace of a mutation.
#[tokio::test]
async fn s5_stale_commit_is_rejected_without_mutation() {
    let (store, code) = two_player_room().await;
    let room = store.load_room(&code).await.unwrap();
    assert_eq!(room.turn_number, 0);

    action_api::make_move(&store, &code, "host", 2, 5).await.unwrap();
    let room_after = store.load_room(&code).await.unwrap();
    assert_eq!(room_after.turn_number, 1);

    // A worker holding a stale expected_turn=0 job attempts to act for the
    // seat that has since moved on; the store's commit path rejects it.
    let stale_result = store.commit_action(&code, 0, ActionOp::Move { player_id: 0, to: (5, 5) }, 2, None).await;
    assert_eq!(stale_result, Err(StoreError::Stale));

    let room_final = store.load_room(&code).await.unwrap();
    assert_eq!(room_final.players[0].pos, (2, 5)); // unchanged by the stale attempt
    assert_eq!(room_final.turn_number, 1);
}

/// S6 - deterministic bot replay: two independently-constructed seeded RNGs
/// built from the same (room seed, turn number, player id) drive a strategy
/// to identical decisions over identical snapshots.
#[tokio::test]
async fn s6_identical_seeds_produce_identical_bot_decisions() {
    use quoridor_core::{select_strategy, GameSnapshot, GoalSide, PlayerState, PlayerType, SeededRng};

    let snapshot = GameSnapshot {
        game_mode: GameMode::TwoPlayer,
        players: vec![
            PlayerState::new(0, (5, 5), GoalSide::Bottom, 10, PlayerType::BotMedium, "bot-a".into()),
            PlayerState::new(2, (4, 5), GoalSide::Top, 10, PlayerType::Human, "human".into()),
        ],
        barriers: vec![],
        current_turn: 0,
        turn_number: 7,
    };

    let mut rng_a = SeededRng::new("R", 7, 0);
    let mut rng_b = SeededRng::new("R", 7, 0);
    let strategy = select_strategy(PlayerType::BotMedium);

    let decision_a = strategy.decide(&snapshot, 0, &mut rng_a);
    let decision_b = strategy.decide(&snapshot, 0, &mut rng_b);

    assert_eq!(decision_a.kind, decision_b.kind);
    assert_eq!(decision_a.row, decision_b.row);
    assert_eq!(decision_a.col, decision_b.col);
    assert_eq!(decision_a.orientation, decision_b.orientation);
}

/// Acting when it is not the caller's seat's turn is rejected before any
/// validation runs, and leaves the room entirely unchanged.
#[tokio::test]
async fn acting_out_of_turn_is_rejected_without_mutation() {
    let (store, code) = two_player_room().await;
    let before = store.load_room(&code).await.unwrap();

    let result = action_api::make_move(&store, &code, "guest", 8, 5).await;
    assert_eq!(result, Err(ActionError::NotYourTurn));

    let after = store.load_room(&code).await.unwrap();
    assert_eq!(before.players, after.players);
    assert_eq!(before.turn_number, after.turn_number);
    assert_eq!(before.current_turn, after.current_turn);
}

/// Undo reverses the most recent action end-to-end through the Action API,
/// restoring position and wall count without rewinding turn_number.
#[tokio::test]
async fn undo_reverses_the_last_action_through_the_action_api() {
    let (store, code) = two_player_room().await;
    action_api::make_move(&store, &code, "host", 2, 5).await.unwrap();

    action_api::undo_last(&store, &code, "host").await.unwrap();

    let room = store.load_room(&code).await.unwrap();
    let host = room.players.iter().find(|p| p.session_binding == "host").unwrap();
    assert_eq!(host.pos, (1, 5));
    assert_eq!(room.current_turn, 0);
    assert_eq!(room.turn_number, 1);
}
