use std::collections::VecDeque;

use engine::{Direction, GameConfig, GameMode, GameState, Position, Snake, StepResult};

fn pos(x: i32, y: i32) -> Position {
    Position { x, y }
}

fn classic_state() -> GameState {
    GameState::new(GameConfig::default(), 7).expect("default config should be valid")
}

fn leveled_state() -> GameState {
    let config = GameConfig {
        mode: GameMode::Leveled,
        ..GameConfig::default()
    };
    GameState::new(config, 7).expect("leveled config should be valid")
}

/// Pin the state to the classic starting snake with the food out of the way.
fn with_snake(state: &mut GameState, body: Vec<Position>, direction: Direction) {
    state.snake = Snake {
        body: VecDeque::from(body),
        direction,
    };
    state.food = pos(580, 380);
}

#[test]
fn new_game_starts_sane() {
    let state = classic_state();
    assert_eq!(state.score, 0);
    assert_eq!(state.level, 1);
    assert!(state.running);
    assert!(state.obstacles.is_empty());
    assert_eq!(state.snake.len(), 3);
    assert_eq!(state.snake.direction, Direction::Right);

    // Food is grid-aligned, in bounds, and off the snake.
    assert!(state.food.x >= 0 && state.food.x < state.config.width);
    assert!(state.food.y >= 0 && state.food.y < state.config.height);
    assert_eq!(state.food.x % state.config.cell_size, 0);
    assert_eq!(state.food.y % state.config.cell_size, 0);
    assert!(!state.snake.contains(state.food));
}

#[test]
fn invalid_config_is_rejected() {
    let config = GameConfig {
        width: 610, // not a multiple of the cell size
        ..GameConfig::default()
    };
    assert!(GameState::new(config, 1).is_err());

    let config = GameConfig {
        cell_size: 0,
        ..GameConfig::default()
    };
    assert!(GameState::new(config, 1).is_err());
}

#[test]
fn same_seed_same_game() {
    let a = classic_state();
    let b = classic_state();
    assert_eq!(a, b);
}

#[test]
fn reverse_direction_request_is_ignored() {
    let mut state = classic_state();
    with_snake(
        &mut state,
        vec![pos(100, 100), pos(90, 100), pos(80, 100)],
        Direction::Right,
    );

    assert_eq!(state.step(Some(Direction::Left)), StepResult::Continued);
    assert_eq!(state.snake.direction, Direction::Right);
    assert_eq!(state.snake.head(), pos(120, 100));
}

#[test]
fn turn_applies_before_the_move() {
    let mut state = classic_state();
    with_snake(
        &mut state,
        vec![pos(100, 100), pos(90, 100), pos(80, 100)],
        Direction::Right,
    );

    assert_eq!(state.step(Some(Direction::Down)), StepResult::Continued);
    assert_eq!(state.snake.direction, Direction::Down);
    assert_eq!(state.snake.head(), pos(100, 120));
}

#[test]
fn plain_move_prepends_head_and_drops_tail() {
    let mut state = classic_state();
    with_snake(
        &mut state,
        vec![pos(100, 100), pos(90, 100), pos(80, 100)],
        Direction::Right,
    );

    assert_eq!(state.step(None), StepResult::Continued);
    assert_eq!(
        state.snake.body,
        VecDeque::from(vec![pos(120, 100), pos(100, 100), pos(90, 100)])
    );
    assert_eq!(state.score, 0);
}

#[test]
fn eating_grows_and_scores() {
    let mut state = classic_state();
    with_snake(
        &mut state,
        vec![pos(100, 100), pos(90, 100), pos(80, 100)],
        Direction::Right,
    );
    state.food = pos(120, 100);

    assert_eq!(state.step(None), StepResult::Continued);
    assert_eq!(state.snake.len(), 4);
    assert_eq!(state.score, 10);
    assert_eq!(state.snake.head(), pos(120, 100));

    // Respawned food never lands on the snake.
    assert!(!state.snake.contains(state.food));
    assert!(state.food.x >= 0 && state.food.x < state.config.width);
    assert!(state.food.y >= 0 && state.food.y < state.config.height);
}

#[test]
fn wall_collision_ends_the_game_without_moving() {
    let mut state = classic_state();
    with_snake(
        &mut state,
        vec![pos(0, 100), pos(20, 100), pos(40, 100)],
        Direction::Left,
    );

    assert_eq!(state.step(None), StepResult::GameOver);
    assert!(!state.running);
    // No head was inserted for the rejected move.
    assert_eq!(
        state.snake.body,
        VecDeque::from(vec![pos(0, 100), pos(20, 100), pos(40, 100)])
    );
}

#[test]
fn terminal_state_is_idempotent() {
    let mut state = classic_state();
    with_snake(
        &mut state,
        vec![pos(0, 100), pos(20, 100), pos(40, 100)],
        Direction::Left,
    );
    assert_eq!(state.step(None), StepResult::GameOver);

    let snapshot = state.clone();
    assert_eq!(state.step(Some(Direction::Down)), StepResult::GameOver);
    assert_eq!(state, snapshot);
}

#[test]
fn running_into_the_body_ends_the_game() {
    let mut state = classic_state();
    // Hook shape: turning down from the head runs into a mid-body segment.
    with_snake(
        &mut state,
        vec![
            pos(100, 100),
            pos(120, 100),
            pos(140, 100),
            pos(140, 120),
            pos(120, 120),
            pos(100, 120),
            pos(80, 120),
        ],
        Direction::Left,
    );

    assert_eq!(state.step(Some(Direction::Down)), StepResult::GameOver);
    assert!(!state.running);
}

#[test]
fn moving_into_the_vacated_tail_cell_is_allowed() {
    let mut state = classic_state();
    // Same hook, one segment shorter: the target cell is the tail, which
    // vacates on this step.
    with_snake(
        &mut state,
        vec![
            pos(100, 100),
            pos(120, 100),
            pos(140, 100),
            pos(140, 120),
            pos(120, 120),
            pos(100, 120),
        ],
        Direction::Left,
    );

    assert_eq!(state.step(Some(Direction::Down)), StepResult::Continued);
    assert_eq!(state.snake.head(), pos(100, 120));
    assert_eq!(state.snake.len(), 6);
}

#[test]
fn obstacle_collision_ends_the_game() {
    let mut state = leveled_state();
    with_snake(
        &mut state,
        vec![pos(100, 100), pos(90, 100), pos(80, 100)],
        Direction::Right,
    );
    state.obstacles.insert(pos(120, 100));

    assert_eq!(state.step(None), StepResult::GameOver);
    assert!(!state.running);
}

#[test]
fn classic_mode_ignores_obstacles() {
    let mut state = classic_state();
    with_snake(
        &mut state,
        vec![pos(100, 100), pos(90, 100), pos(80, 100)],
        Direction::Right,
    );
    state.obstacles.insert(pos(120, 100));

    assert_eq!(state.step(None), StepResult::Continued);
    assert_eq!(state.snake.head(), pos(120, 100));
}

#[test]
fn level_change_regenerates_obstacles_and_speed() {
    let mut state = leveled_state();
    with_snake(
        &mut state,
        vec![pos(100, 100), pos(90, 100), pos(80, 100)],
        Direction::Right,
    );
    state.score = 50;

    // The step may or may not survive the freshly placed obstacles; the
    // progression itself is what's under test here.
    state.step(None);
    assert_eq!(state.level, 2);
    assert_eq!(state.speed, state.config.policy.speed_for(2));
    assert_eq!(state.obstacles.len(), 3);
    for &obstacle in &state.obstacles {
        assert!(!state.snake.contains(obstacle));
        assert_ne!(obstacle, state.food);
    }
}

#[test]
fn classic_level_is_cosmetic() {
    let mut state = classic_state();
    with_snake(
        &mut state,
        vec![pos(100, 100), pos(90, 100), pos(80, 100)],
        Direction::Right,
    );
    state.score = 50;
    let speed_before = state.speed;

    assert_eq!(state.step(None), StepResult::Continued);
    assert_eq!(state.level, 2);
    assert_eq!(state.speed, speed_before);
    assert!(state.obstacles.is_empty());
}

#[test]
fn state_survives_a_serde_round_trip() {
    let mut state = leveled_state();
    state.score = 50;
    state.step(None);

    let json = serde_json::to_string(&state).expect("state should serialize");
    let back: GameState = serde_json::from_str(&json).expect("state should deserialize");
    assert_eq!(back.snake, state.snake);
    assert_eq!(back.food, state.food);
    assert_eq!(back.obstacles, state.obstacles);
    assert_eq!(back.score, state.score);
    assert_eq!(back.level, state.level);
    assert_eq!(back.running, state.running);
}
