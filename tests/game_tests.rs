use naval_combat::{
    CellState, Game, GameError, GameMode, Orientation, Phase, Point, Side, BoardError, FLEET,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn pt(row: usize, col: usize) -> Point {
    Point::new(row, col).unwrap()
}

fn place_fleet_by_hand(game: &mut Game) -> Phase {
    let mut phase = game.phase();
    for row in (0..2 * FLEET.len()).step_by(2) {
        phase = game.place_ship(pt(row, 0), Orientation::Horizontal).unwrap();
    }
    phase
}

fn cells_of(game: &Game, side: Side, state: CellState) -> Vec<Point> {
    let board = game.board(side);
    Point::all().filter(|&p| board.cell(p) == state).collect()
}

#[test]
fn human_vs_computer_setup() {
    let mut game = Game::new(GameMode::HumanVsComputer, SmallRng::seed_from_u64(10)).unwrap();
    assert_eq!(game.phase(), Phase::Placement(Side::First));
    assert!(game.is_human(Side::First));
    assert!(!game.is_human(Side::Second));
    assert_eq!(game.board(Side::Second).ships().len(), FLEET.len());
    assert_eq!(game.next_ship_length(), Some(FLEET[0]));

    game.place_ship(pt(0, 0), Orientation::Horizontal).unwrap();
    assert_eq!(game.next_ship_length(), Some(FLEET[1]));
    assert_eq!(
        game.place_ship(pt(1, 0), Orientation::Horizontal),
        Err(GameError::Board(BoardError::ShipTouches))
    );
    assert_eq!(
        game.place_ship(pt(9, 9), Orientation::Vertical),
        Err(GameError::Board(BoardError::ShipOutOfBounds))
    );
    assert_eq!(game.phase(), Phase::Placement(Side::First));
    assert_eq!(game.fire(pt(0, 0)), Err(GameError::WrongPhase));
}

#[test]
fn turns_follow_hits_and_misses() {
    let mut game = Game::new(GameMode::HumanVsComputer, SmallRng::seed_from_u64(11)).unwrap();
    assert_eq!(place_fleet_by_hand(&mut game), Phase::Battle(Side::First));
    assert_eq!(game.play_computer_turn(), Err(GameError::NotComputerTurn));
    assert_eq!(
        game.place_ship(pt(0, 0), Orientation::Vertical),
        Err(GameError::WrongPhase)
    );

    // a hit keeps the turn, shooting it again is ignored
    let ship_cell = cells_of(&game, Side::Second, CellState::Ship)[0];
    assert_eq!(game.fire(ship_cell), Ok(CellState::Hit));
    assert_eq!(game.phase(), Phase::Battle(Side::First));
    assert_eq!(game.fire(ship_cell), Ok(CellState::Hit));
    assert_eq!(game.shots_fired(Side::First), 1);

    // a miss hands the turn over
    let water = cells_of(&game, Side::Second, CellState::Empty)[0];
    assert_eq!(game.fire(water), Ok(CellState::Miss));
    assert_eq!(game.phase(), Phase::Battle(Side::Second));
    assert_eq!(game.fire(water), Err(GameError::NotHumanTurn));

    let (shot, outcome) = game.play_computer_turn().unwrap();
    assert_eq!(game.board(Side::First).cell(shot), outcome);
    let expected = match outcome {
        CellState::Hit => Phase::Battle(Side::Second),
        _ => Phase::Battle(Side::First),
    };
    assert_eq!(game.phase(), expected);
    assert_eq!(game.shots_fired(Side::Second), 1);
}

#[test]
fn human_vs_human_to_the_end() {
    let mut game = Game::new(GameMode::HumanVsHuman, SmallRng::seed_from_u64(12)).unwrap();
    assert_eq!(place_fleet_by_hand(&mut game), Phase::Placement(Side::Second));
    assert_eq!(place_fleet_by_hand(&mut game), Phase::Battle(Side::First));

    let targets = cells_of(&game, Side::Second, CellState::Ship);
    let (last, rest) = targets.split_last().unwrap();
    for &p in rest {
        game.fire(p).unwrap();
        assert_eq!(game.phase(), Phase::Battle(Side::First));
    }
    assert_eq!(game.fire(*last), Ok(CellState::Sunk));
    assert_eq!(game.phase(), Phase::Over { winner: Side::First });
    assert_eq!(game.winner(), Some(Side::First));
    assert!(game.board(Side::Second).is_defeated());
    assert_eq!(game.fire(pt(9, 9)), Err(GameError::WrongPhase));

    game.new_game().unwrap();
    assert_eq!(game.phase(), Phase::Placement(Side::First));
    assert_eq!(game.shots_fired(Side::First), 0);
    assert!(game.board(Side::Second).ships().is_empty());
}

#[test]
fn computer_vs_computer_plays_out() {
    let mut game = Game::new(GameMode::ComputerVsComputer, SmallRng::seed_from_u64(13)).unwrap();
    assert_eq!(game.phase(), Phase::Battle(Side::First));
    assert_eq!(game.next_ship_length(), None);
    assert_eq!(game.fire(pt(0, 0)), Err(GameError::NotHumanTurn));

    let mut turns = 0;
    while game.winner().is_none() {
        let (_, outcome) = game.play_computer_turn().unwrap();
        assert_ne!(outcome, CellState::Empty);
        turns += 1;
        assert!(turns <= 200, "game took too many turns");
    }
    let winner = game.winner().unwrap();
    assert!(game.board(winner.opponent()).is_defeated());
    assert!(!game.board(winner).is_defeated());
    assert!(game.shots_fired(winner) <= 100);
    assert_eq!(game.play_computer_turn(), Err(GameError::WrongPhase));
}

#[test]
fn off_grid_targets_cannot_be_named() {
    assert_eq!(Point::new(10, 0), None);
    assert_eq!(Point::new(0, 10), None);
    let corner = pt(9, 9);
    assert_eq!((corner.row(), corner.col()), (9, 9));
    assert_eq!(corner.offset(1, 0), None);
    assert_eq!(corner.offset(0, 1), None);
    assert_eq!(pt(0, 0).offset(-1, 0), None);

    let mut game = Game::new(GameMode::HumanVsHuman, SmallRng::seed_from_u64(14)).unwrap();
    place_fleet_by_hand(&mut game);
    place_fleet_by_hand(&mut game);
    // the edge rows are as far as a shot can reach
    let shot = Point::new(9, 0).unwrap();
    assert!(game.fire(shot).is_ok());
    assert!(game.board(Side::Second).cell(shot).is_targeted());
}
