//! Test suite for the rules engine
//! Validates move generation, push legality, and surround capture semantics

mod common;

use corral::{
    Color, Direction, EventBus, ExecutionContext, Grid, Move, MoveEngine, Position,
    rules::check_and_capture,
};

use common::{find_move, game_from};

mod surround_detection {
    use super::*;

    fn sweep(grid: &mut Grid) -> usize {
        let mut bus = EventBus::new();
        check_and_capture(grid, &ExecutionContext::real(), &mut bus)
            .unwrap()
            .len()
    }

    #[test]
    fn test_edge_token_needs_all_four_logical_sides() {
        // Black at (0, 1): the top side is off-board and blocked, (0, 0)
        // and (1, 1) are occupied, but (0, 2) is still open.
        let mut grid = Grid::parse("WB.../.W.../...../...../.....").unwrap();
        assert_eq!(sweep(&mut grid), 0);
        assert!(!grid.token_at(Position::new(0, 1)).unwrap().is_captured);

        // Closing the last side captures exactly once.
        grid.set_token(
            Position::new(0, 2),
            Some(corral::Token::new(Color::White)),
        );
        assert_eq!(sweep(&mut grid), 1);
        assert!(grid.token_at(Position::new(0, 1)).unwrap().is_captured);
    }

    #[test]
    fn test_detection_is_idempotent() {
        let mut grid = Grid::parse("BW.../W..../...../...../.....").unwrap();
        assert_eq!(sweep(&mut grid), 1);
        assert_eq!(sweep(&mut grid), 0);
    }

    #[test]
    fn test_corner_needs_only_two_occupied_neighbors() {
        let mut grid = Grid::parse("...WB/....W/...../...../.....").unwrap();
        assert_eq!(sweep(&mut grid), 1);
        assert!(grid.token_at(Position::new(0, 4)).unwrap().is_captured);
    }

    #[test]
    fn test_capture_is_color_agnostic() {
        // A token of the same color participates in the surround.
        let mut grid = Grid::parse("BW.../W..../...../...../.....").unwrap();
        assert_eq!(sweep(&mut grid), 1);

        let mut own_wall = Grid::parse("BB.../B..../...../...../.....").unwrap();
        assert_eq!(sweep(&mut own_wall), 1);
        assert!(own_wall.token_at(Position::new(0, 0)).unwrap().is_captured);
    }
}

mod push_validation {
    use super::*;

    #[test]
    fn test_push_succeeds_iff_one_past_the_run_is_open() {
        let engine = MoveEngine::new();
        let grid = Grid::parse("...../.WBB./...../...../.....").unwrap();
        // Run (1, 2)..(1, 3), one past is (1, 4): on-board and empty.
        assert_eq!(
            engine.validate_push(&grid, Position::new(1, 1), Direction::Right),
            Some(vec![Position::new(1, 2), Position::new(1, 3)])
        );
        // An empty destination is never a push.
        assert_eq!(
            engine.validate_push(&grid, Position::new(1, 1), Direction::Down),
            None
        );

        // Extending the run to the edge removes the open cell past it.
        let walled = Grid::parse("...../.WBBB/...../...../.....").unwrap();
        assert_eq!(
            engine.validate_push(&walled, Position::new(1, 1), Direction::Right),
            None
        );
    }

    #[test]
    fn test_line_is_never_pushed_off_the_board() {
        let engine = MoveEngine::new();
        let grid = Grid::parse("...WB/...../...../...../.....").unwrap();
        assert_eq!(
            engine.validate_push(&grid, Position::new(0, 3), Direction::Right),
            None
        );
    }

    #[test]
    fn test_column_push_against_bottom_edge_is_illegal() {
        let engine = MoveEngine::new();
        let grid = Grid::parse("...../...../...../.W.../.B...").unwrap();
        assert_eq!(
            engine.validate_push(&grid, Position::new(3, 1), Direction::Down),
            None
        );
        assert_eq!(
            engine.validate_push(&grid, Position::new(4, 1), Direction::Up),
            Some(vec![Position::new(3, 1)])
        );
    }
}

mod move_generation {
    use super::*;

    #[test]
    fn test_lone_center_token_has_exactly_four_simple_moves() {
        let game = game_from("...../...../..W../...../.....", Color::White);
        let moves = game.legal_moves();
        assert_eq!(moves.len(), 4);
        let targets: Vec<Position> = moves.iter().map(Move::to).collect();
        assert_eq!(
            targets,
            vec![
                Position::new(1, 2),
                Position::new(3, 2),
                Position::new(2, 1),
                Position::new(2, 3),
            ]
        );
    }

    #[test]
    fn test_generation_is_deterministic() {
        let game = game_from("B.B../...../..W../...../.W.WB", Color::White);
        assert_eq!(game.legal_moves(), game.legal_moves());
    }
}

mod push_execution {
    use super::*;

    #[test]
    fn test_push_relocates_and_deactivates() {
        // White at (2, 1), Black at (2, 2), (2, 3) empty: pushing leaves
        // White on the destination and Black shoved one cell, inactive.
        let mut game = game_from("...../...../.WB../...../.....", Color::White);
        let push = find_move(&game, Position::new(2, 1), Direction::Right).unwrap();
        assert!(push.is_push());

        let outcome = game.play(&push).unwrap();
        assert!(outcome.captured.is_empty());
        assert_eq!(outcome.deactivated, vec![Position::new(2, 3)]);

        let grid = game.grid();
        assert!(grid.token_at(Position::new(2, 1)).is_none());
        assert_eq!(grid.token_at(Position::new(2, 2)).unwrap().color, Color::White);
        let shoved = grid.token_at(Position::new(2, 3)).unwrap();
        assert_eq!(shoved.color, Color::Black);
        assert!(!shoved.is_active);
    }

    #[test]
    fn test_shoved_token_sits_out_one_turn() {
        let mut game = game_from("...../...../.WB../...../....B", Color::White);
        let push = find_move(&game, Position::new(2, 1), Direction::Right).unwrap();
        game.play(&push).unwrap();

        // Black to move: the shoved token at (2, 3) may not move.
        assert!(
            game.legal_moves()
                .iter()
                .all(|mv| mv.from() == Position::new(4, 4))
        );

        // After Black moves elsewhere the token is active again.
        let other = find_move(&game, Position::new(4, 4), Direction::Up).unwrap();
        game.play(&other).unwrap();
        assert!(game.grid().token_at(Position::new(2, 3)).unwrap().is_active);
    }
}
