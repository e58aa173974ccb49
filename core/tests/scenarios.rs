use std::collections::BTreeSet;

use textsweeper_core::*;

fn field(width: Coord, height: Coord, mines: &[Square]) -> MineField {
    let grid = Grid::new(width, height).unwrap();
    MineField::from_layout(MineLayout::from_mine_coords(grid, mines).unwrap())
}

#[test]
fn generated_layouts_respect_size_and_density() {
    let configs = [
        GameConfig::new(1, 1, 0.0),
        GameConfig::new(1, 1, 100.0),
        GameConfig::new(2, 1, 50.0),
        GameConfig::new(10, 10, 25.0),
        GameConfig::new(26, 40, 12.5),
        GameConfig::new(7, 3, 99.0),
    ];

    for (seed, config) in configs.into_iter().enumerate() {
        let field = MineField::new(config, seed as u64).unwrap();
        let grid = field.grid();
        let mines = field.mine_coordinates();
        let distinct: BTreeSet<_> = mines.iter().copied().collect();

        assert_eq!(
            u16::from(field.row_count()) * u16::from(field.column_count()),
            grid.total_squares()
        );
        assert_eq!(mines.len(), usize::from(config.mine_count()));
        assert_eq!(distinct.len(), mines.len());
        assert!(mines.iter().all(|&square| grid.contains(square)));
        assert_eq!(field.safe_square_count(), grid.total_squares() - config.mine_count());
    }
}

#[test]
fn flood_fill_visits_each_square_at_most_once() {
    let config = GameConfig::new(12, 9, 10.0);

    for seed in 0..32 {
        let mut field = MineField::new(config, seed).unwrap();
        let mines: BTreeSet<_> = field.mine_coordinates().into_iter().collect();
        let Some(start) = field
            .grid()
            .squares()
            .find(|square| !mines.contains(square))
        else {
            continue;
        };

        let outcomes = field.click(start).unwrap();
        let touched: BTreeSet<_> = outcomes.iter().map(|outcome| outcome.square).collect();

        assert_eq!(touched.len(), outcomes.len(), "seed {seed}");
        assert!(outcomes.iter().all(|outcome| !outcome.was_mine), "seed {seed}");
        assert_eq!(usize::from(field.revealed_count()), outcomes.len(), "seed {seed}");
    }
}

#[test]
fn flagging_twice_restores_unflagged_state() {
    let mut field = field(3, 3, &[Square::new(1, 2)]);

    let flagged = field.submit_command("flag C3").unwrap();
    let unflagged = field.submit_command("Flag c3").unwrap();

    assert_eq!(flagged.len(), 1);
    assert!(flagged[0].was_flag && !flagged[0].was_unflag);
    assert_eq!(unflagged.len(), 1);
    assert!(!unflagged[0].was_flag && unflagged[0].was_unflag);
    assert!(!field.is_flagged(Square::new(2, 3)));
    assert_eq!(field.state(), GameState::InProgress);
}

#[test]
fn single_safe_square_click_wins() {
    let mut field = field(2, 1, &[Square::new(0, 1)]);

    let outcomes = field.submit_command("B1").unwrap();

    assert_eq!(outcomes.len(), 1);
    assert!(outcomes[0].was_winning_click);
    assert!(!outcomes[0].was_mine);
    assert_eq!(outcomes[0].neighbor_mine_count, 1);
    assert_eq!(field.state(), GameState::Won);
}

#[test]
fn seeded_two_square_board_is_won_by_the_safe_click() {
    let mut field = MineField::new(GameConfig::new(2, 1, 50.0), 99).unwrap();
    let mine = field.mine_coordinates()[0];
    let safe = field
        .grid()
        .squares()
        .find(|&square| square != mine)
        .unwrap();

    let outcomes = field.submit_command(&safe.to_string()).unwrap();

    assert!(outcomes[0].was_winning_click);
    assert!(!outcomes[0].was_mine);
}

#[test]
fn mine_click_yields_single_terminal_outcome() {
    let mut field = field(4, 4, &[Square::new(2, 3)]);
    field.submit_command("A1").unwrap();
    let revealed_before = field.revealed_count();
    let revealed_squares_before: Vec<_> = field
        .grid()
        .squares()
        .filter(|&square| field.is_revealed(square))
        .collect();

    let outcomes = field.submit_command("C3").unwrap();

    assert_eq!(outcomes.len(), 1);
    assert!(outcomes[0].was_mine);
    assert!(!outcomes[0].was_winning_click);
    assert_eq!(field.revealed_count(), revealed_before);
    assert!(!field.is_revealed(Square::new(2, 3)));
    assert_eq!(field.state(), GameState::Lost);

    let revealed_squares_after: Vec<_> = field
        .grid()
        .squares()
        .filter(|&square| field.is_revealed(square))
        .collect();
    assert_eq!(revealed_squares_after, revealed_squares_before);
}

#[test]
fn cascade_from_corner_covers_whole_board_once() {
    let mut field = field(5, 5, &[Square::new(4, 5)]);

    let outcomes = field.submit_command("A1").unwrap();
    let touched: BTreeSet<_> = outcomes.iter().map(|outcome| outcome.square).collect();

    assert_eq!(outcomes[0].square, Square::new(0, 1));
    assert_eq!(outcomes[0].neighbor_mine_count, 0);
    assert_eq!(outcomes.len(), 24);
    assert_eq!(touched.len(), 24);
    assert!(!touched.contains(&Square::new(4, 5)));

    let numbered: BTreeSet<_> = outcomes
        .iter()
        .filter(|outcome| outcome.has_neighbor_mines())
        .map(|outcome| outcome.square)
        .collect();
    assert_eq!(
        numbered,
        BTreeSet::from([Square::new(3, 4), Square::new(3, 5), Square::new(4, 4)])
    );

    assert_eq!(outcomes.iter().filter(|o| o.was_winning_click).count(), 1);
    assert_eq!(field.state(), GameState::Won);
}

#[test]
fn cascade_stops_at_numbered_border() {
    // a wall of mines down column C splits the board in two
    let mines = [Square::new(0, 3), Square::new(1, 3), Square::new(2, 3)];
    let mut field = field(5, 3, &mines);

    let outcomes = field.submit_command("A2").unwrap();
    let touched: BTreeSet<_> = outcomes.iter().map(|outcome| outcome.square).collect();

    let expected: BTreeSet<_> = (0..3)
        .flat_map(|row| [Square::new(row, 1), Square::new(row, 2)])
        .collect();
    assert_eq!(touched, expected);
    assert_eq!(field.state(), GameState::InProgress);
}

#[test]
fn flagged_square_rejects_click() {
    let mut field = field(3, 3, &[]);
    field.submit_command("flag A1").unwrap();
    let before = field.clone();

    assert_eq!(field.submit_command("A1"), Err(CommandError::Flagged));
    assert_eq!(field, before);
    assert!(field.is_flagged(Square::new(0, 1)));
    assert_eq!(field.revealed_count(), 0);
}

#[test]
fn parser_examples() {
    let grid = Grid::new(10, 10).unwrap();

    assert_eq!(
        Command::parse("flag B3", grid),
        Ok(Command {
            mode: CommandMode::Flag,
            square: Square::new(2, 2)
        })
    );
    assert_eq!(
        Command::parse("c10", grid),
        Ok(Command {
            mode: CommandMode::Click,
            square: Square::new(9, 3)
        })
    );
}

#[test]
fn rejected_commands_change_nothing() {
    let mut field = field(4, 4, &[Square::new(3, 4)]);
    let before = field.clone();

    for command in ["", "quit", "E1", "A5", "A0", "flag", "flag A1 A2", "reveal A1", "11"] {
        assert!(field.submit_command(command).is_err(), "{command:?}");
    }
    assert_eq!(field, before);
}

#[test]
fn outcomes_serialize_with_field_names() {
    let mut field = field(2, 1, &[Square::new(0, 2)]);
    let outcomes = field.submit_command("A1").unwrap();

    let json = serde_json::to_value(&outcomes[0]).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "square": { "row": 0, "column": 1 },
            "was_mine": false,
            "was_winning_click": true,
            "was_flag": false,
            "was_unflag": false,
            "neighbor_mine_count": 1,
        })
    );
}
