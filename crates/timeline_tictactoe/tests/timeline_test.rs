//! Tests for playing and time-travelling through a game.

use timeline_tictactoe::{
    IgnoreReason, Outcome, PlayResult, Player, Position, SortOrder, Square, TimelineGame,
    history_entries,
};

#[test]
fn test_x_completes_top_row() {
    let mut game = TimelineGame::new();

    assert!(game.play_index(0).is_placed()); // X
    assert!(game.play_index(3).is_placed()); // O
    assert!(game.play_index(1).is_placed()); // X
    assert!(game.play_index(4).is_placed()); // O
    assert_eq!(game.outcome(), Outcome::InProgress);

    assert_eq!(
        game.play_index(2),
        PlayResult::Placed {
            player: Player::X,
            position: Position::TopRight
        }
    );
    assert_eq!(
        game.outcome(),
        Outcome::Winner {
            player: Player::X,
            line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
        }
    );
    assert_eq!(game.history().len(), 6);
    assert_eq!(game.current_index(), 5);
}

#[test]
fn test_play_after_win_is_noop() {
    let mut game = TimelineGame::replay([
        Position::TopLeft,
        Position::MiddleLeft,
        Position::TopCenter,
        Position::Center,
        Position::TopRight,
    ]);
    let before = game.clone();

    assert_eq!(
        game.play(Position::BottomRight),
        PlayResult::Ignored(IgnoreReason::GameDecided)
    );
    assert_eq!(game, before);
}

#[test]
fn test_play_after_draw_is_noop() {
    let mut game = TimelineGame::replay([
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::Center,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
        Position::BottomLeft,
        Position::BottomRight,
    ]);
    assert_eq!(game.outcome(), Outcome::Draw);
    assert_eq!(game.history().len(), 10);

    // Every square is taken; decided wins over occupied.
    assert_eq!(
        game.play(Position::Center),
        PlayResult::Ignored(IgnoreReason::GameDecided)
    );
    assert_eq!(game.history().len(), 10);
}

#[test]
fn test_play_from_every_position_grows_by_one() {
    let moves = [
        Position::Center,
        Position::TopLeft,
        Position::BottomRight,
        Position::TopRight,
    ];
    let full = TimelineGame::replay(moves);

    for p in 0..full.history().len() {
        let mut game = full.clone();
        game.jump_to(p);
        let target = Position::valid_moves(game.current().board())[0];
        let mover = game.to_move();
        let old = *game.current().board();

        assert!(game.play(target).is_placed());
        assert_eq!(game.history().len(), p + 2);
        assert_eq!(game.current_index(), p + 1);
        assert_eq!(game.current().board(), &old.with_mark(target, mover));
        assert_eq!(*game.current().location(), Some(target.location()));
        // Everything before the branch point is untouched.
        assert_eq!(&game.history()[..=p], &full.history()[..=p]);
    }
}

#[test]
fn test_jump_back_resumes_with_correct_player() {
    let mut game = TimelineGame::replay([
        Position::Center,
        Position::TopLeft,
        Position::BottomRight,
    ]);
    game.jump_to(2);
    assert_eq!(game.to_move(), Player::X);

    game.play(Position::BottomLeft);
    assert_eq!(game.history().len(), 4);
    assert_eq!(
        game.current().board().get(Position::BottomLeft),
        Square::Occupied(Player::X)
    );
    assert!(game.current().board().is_empty(Position::BottomRight));
}

#[test]
fn test_jump_to_start_and_replay_different_game() {
    let mut game = TimelineGame::replay([Position::Center, Position::TopLeft]);
    game.jump_to(0);
    game.play(Position::BottomRight);

    assert_eq!(game.history().len(), 2);
    let labels: Vec<_> = history_entries(&game).into_iter().map(|e| e.label).collect();
    assert_eq!(labels, vec!["Go to game start", "You are at move #1 (2, 2)"]);
}

#[test]
fn test_jumping_to_a_won_position_blocks_moves_there_only() {
    let mut game = TimelineGame::replay([
        Position::TopLeft,
        Position::MiddleLeft,
        Position::TopCenter,
        Position::Center,
        Position::TopRight,
    ]);
    assert!(game.outcome().is_decided());

    game.jump_to(4);
    assert_eq!(game.outcome(), Outcome::InProgress);
    assert!(game.play(Position::BottomRight).is_placed()); // X
    assert!(game.play(Position::MiddleRight).is_placed()); // O takes the middle row
    assert_eq!(game.history().len(), 7);
    assert_eq!(game.outcome().winner(), Some(Player::O));
}

#[test]
fn test_game_serializes_with_history() {
    let mut game = TimelineGame::replay([Position::Center, Position::TopLeft]);
    game.jump_to(1);
    game.toggle_sort_order();

    let json = serde_json::to_value(&game).unwrap();
    assert_eq!(json["current"], 1);
    assert_eq!(json["sort_order"], "descending");
    assert_eq!(json["history"].as_array().unwrap().len(), 3);
    assert_eq!(json["history"][0]["location"], serde_json::Value::Null);
    assert_eq!(json["history"][2]["location"]["row"], 0);

    let back: TimelineGame = serde_json::from_value(json).unwrap();
    assert_eq!(back, game);
    assert_eq!(back.sort_order(), SortOrder::Descending);
}

fn rejects(json: serde_json::Value) -> String {
    serde_json::from_value::<TimelineGame>(json)
        .unwrap_err()
        .to_string()
}

#[test]
fn test_empty_history_is_rejected() {
    let json = serde_json::json!({"history": [], "current": 0, "sort_order": "ascending"});
    let message = rejects(json);
    assert!(message.starts_with("Invalid timeline"));
    assert!(message.contains("Current position lies within the history"));
}

#[test]
fn test_dangling_current_is_rejected() {
    let mut json = serde_json::to_value(TimelineGame::new()).unwrap();
    json["current"] = 5.into();
    assert!(rejects(json).contains("Current position lies within the history"));
}

#[test]
fn test_non_empty_start_is_rejected() {
    let mut json = serde_json::to_value(TimelineGame::replay([Position::Center])).unwrap();
    json["history"].as_array_mut().unwrap().remove(0);
    json["current"] = 0.into();
    assert!(rejects(json).contains("Each snapshot adds exactly one mark"));
}

#[test]
fn test_two_marks_in_one_step_is_rejected() {
    let mut json =
        serde_json::to_value(TimelineGame::replay([Position::Center, Position::TopLeft])).unwrap();
    json["history"].as_array_mut().unwrap().remove(1);
    json["current"] = 1.into();
    assert!(rejects(json).contains("Each snapshot adds exactly one mark"));
}

#[test]
fn test_wrong_mover_is_rejected() {
    let mut json = serde_json::to_value(TimelineGame::replay([Position::Center])).unwrap();
    json["history"][1]["board"]["squares"][4] = serde_json::json!({"Occupied": "O"});
    assert!(rejects(json).contains("Marks alternate"));
}

#[test]
fn test_mismatched_location_is_rejected() {
    let mut json = serde_json::to_value(TimelineGame::replay([Position::Center])).unwrap();
    json["history"][1]["location"] = serde_json::json!({"row": 0, "col": 0});
    assert!(rejects(json).contains("Each snapshot adds exactly one mark"));
}

#[test]
fn test_missing_sort_order_defaults() {
    let mut json = serde_json::to_value(TimelineGame::replay([Position::Center])).unwrap();
    json.as_object_mut().unwrap().remove("sort_order");
    let game: TimelineGame = serde_json::from_value(json).unwrap();
    assert_eq!(game.sort_order(), SortOrder::Ascending);
    assert_eq!(game.current_index(), 1);
}
