use proptest::prelude::*;
use crate::core::{Direction, GameUpdate};
use crate::snapshot::LevelSnapshot;
use crate::test::test_util::LevelTestState;

const LEVEL: &str = r#"
########
# @$  .#
# $  $ #
# .# $ #
#..#   #
########
"#;

fn directions() -> impl Strategy<Value = Vec<Direction>> {
    prop::collection::vec(prop::sample::select(Direction::all().to_vec()), 0..120)
}

proptest! {
    #[test]
    fn undo_restores_every_earlier_state(dirs in directions(), undo_fraction in 0.0f64..=1.0) {
        let mut game = LevelTestState::new(LEVEL);
        let mut history: Vec<LevelSnapshot> = vec![game.snapshot()];
        for dir in dirs {
            if let GameUpdate::Moved(_) = game.level.try_move(dir) {
                history.push(game.snapshot());
            }
        }

        let moves = history.len() - 1;
        let k = ((moves as f64) * undo_fraction).round() as usize;
        for _ in 0..k {
            prop_assert!(game.level.undo().is_some());
        }

        prop_assert_eq!(&history[moves - k], &game.snapshot());
        game.assert_player_consistent();
    }

    #[test]
    fn move_count_tracks_successful_moves_and_undos(dirs in directions(), undo_every in 2usize..7) {
        let mut game = LevelTestState::new(LEVEL);
        for (i, dir) in dirs.into_iter().enumerate() {
            let before = game.level.move_count();
            if i % undo_every == 0 {
                let undone = game.level.undo();
                let expected = if undone.is_some() { before - 1 } else { before };
                prop_assert_eq!(game.level.move_count(), expected);
            } else {
                let expected = match game.level.try_move(dir) {
                    GameUpdate::Moved(_) => before + 1,
                    GameUpdate::Blocked(_) => before,
                };
                prop_assert_eq!(game.level.move_count(), expected);
            }
            prop_assert_eq!(game.level.move_count() as usize, game.level.undo_depth());
        }
        game.assert_player_consistent();
    }

    #[test]
    fn box_and_target_totals_never_change(dirs in directions()) {
        let mut game = LevelTestState::new(LEVEL);
        let boxes = game.level.box_count();
        for dir in dirs {
            game.level.try_move(dir);
            prop_assert_eq!(game.level.box_count(), boxes);
            prop_assert_eq!(game.level.is_solved(), game.level.boxes_on_targets() == boxes);
        }
    }
}
