
mod test {
    use Direction::*;
    use crate::core::*;
    use crate::test::test_util::LevelTestState;

    #[test]
    fn when_nothing_to_undo_level_is_unchanged() {
        let level = r#"
#@$.#
"#;
        let mut game = LevelTestState::new(level);
        let before = game.snapshot();

        assert_eq!(game.level.undo(), None);
        assert_eq!(before, game.snapshot());
    }

    #[test]
    fn when_plain_move_undone_player_returns() {
        let level = r#"
#@ #
"#;
        let mut game = LevelTestState::new(level);
        game.assert_move(Right);

        let record = game.assert_undo();

        assert_eq!(record, MoveRecord { prior_player: Vec2 { x: 1, y: 0 }, box_move: None });
        game.assert_matches(level);
        assert_eq!(game.level.move_count(), 0);
        assert_eq!(game.level.undo_depth(), 0);
    }

    #[test]
    fn when_push_undone_box_returns() {
        let level = r#"
#@$ #
"#;
        let mut game = LevelTestState::new(level);
        game.assert_move(Right);

        let record = game.assert_undo();

        assert_eq!(
            record.box_move,
            Some((Vec2 { x: 2, y: 0 }, Vec2 { x: 3, y: 0 }))
        );
        game.assert_matches(level);
        game.assert_player_consistent();
    }

    #[test]
    fn when_push_onto_target_undone_target_is_bare_again() {
        let level = r#"
#@$.#
"#;
        let mut game = LevelTestState::new(level);
        game.assert_move(Right);
        assert!(game.level.is_solved());

        game.assert_undo();

        game.assert_matches(level);
        assert!(!game.level.is_solved());
    }

    #[test]
    fn when_push_off_target_undone_box_is_back_on_target() {
        let level = r#"
#.*  #
#  @ #
"#;
        let mut game = LevelTestState::new(level);
        game.assert_moves(&[Up, Left]);
        game.assert_matches(r#"
#*+  #
#    #
"#);

        game.assert_undo();
        game.assert_matches(r#"
#.*@ #
#    #
"#);
        game.assert_undo();
        game.assert_matches(level);
    }

    #[test]
    fn when_player_started_on_target_undo_restores_player_on_target() {
        let level = r#"
#+$ #
"#;
        let mut game = LevelTestState::new(level);
        game.assert_move(Right);
        game.assert_matches(r#"
#.@$#
"#);

        game.assert_undo();
        game.assert_matches(level);
    }

    #[test]
    fn undo_steps_back_one_move_at_a_time() {
        let level = r#"
#######
#@ $ .#
#  $ .#
#######
"#;
        let mut game = LevelTestState::new(level);
        let mut history = vec![game.snapshot()];
        for dir in [Right, Right, Right, Down, Left, Down, Right, Right] {
            if let GameUpdate::Moved(_) = game.level.try_move(dir) {
                history.push(game.snapshot());
            }
        }
        assert_eq!(game.level.move_count() as usize, history.len() - 1);

        history.pop();
        while let Some(expected) = history.pop() {
            game.assert_undo();
            assert_eq!(expected, game.snapshot());
            game.assert_player_consistent();
        }
        assert_eq!(game.level.undo(), None);
        game.assert_matches(level);
    }

    #[test]
    fn when_history_full_moves_still_happen_but_are_not_recorded() {
        let level = r#"
#@ #
"#;
        let mut game = LevelTestState::with_undo_capacity(level, 3);
        game.assert_moves(&[Right, Left, Right]);
        assert_eq!(game.level.undo_depth(), 3);

        game.assert_move(Left);
        assert_eq!(game.level.undo_depth(), 3);
        assert_eq!(game.level.move_count(), 4);

        game.assert_undo();
        game.assert_undo();
        game.assert_undo();
        assert_eq!(game.level.undo(), None);
        assert_eq!(game.level.move_count(), 1);
        game.assert_player_consistent();
    }

    #[test]
    fn move_after_undo_capacity_of_1024_cannot_be_undone() {
        let level = r#"
#@ #
"#;
        let mut game = LevelTestState::new(level);
        for i in 0..UNDO_CAPACITY {
            game.assert_move(if i % 2 == 0 { Right } else { Left });
        }
        assert_eq!(game.level.undo_depth(), UNDO_CAPACITY);

        game.assert_move(Right);
        assert_eq!(game.level.move_count() as usize, UNDO_CAPACITY + 1);
        assert_eq!(game.level.undo_depth(), UNDO_CAPACITY);

        for _ in 0..UNDO_CAPACITY {
            game.assert_undo();
        }
        assert_eq!(game.level.undo(), None);
        assert_eq!(game.level.move_count(), 1);
        game.assert_matches(level);
        game.assert_player_consistent();
    }

    #[test]
    fn loading_a_level_clears_history() {
        let mut game = LevelTestState::new(r#"
#@ #
"#);
        game.assert_moves(&[Right, Left]);

        game.level.load_level(&["#@ #"]);

        assert_eq!(game.level.undo_depth(), 0);
        assert_eq!(game.level.move_count(), 0);
        assert_eq!(game.level.undo(), None);
    }
}
