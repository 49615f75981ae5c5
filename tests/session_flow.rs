use grid_snake::config::{GridSize, INITIAL_TICK_INTERVAL_MS};
use grid_snake::food::Food;
use grid_snake::game::{GameState, GameStatus};
use grid_snake::input::{Direction, GameInput};
use grid_snake::snake::{Position, Snake};

const BOUNDS: GridSize = GridSize {
    width: 6,
    height: 6,
};

#[test]
fn stepwise_session_eat_pause_crash_restart_exit() {
    let mut state = GameState::new_with_seed(BOUNDS, 42);
    state.snake = Snake::new(Position { x: 1, y: 1 });
    state.food = Food::at(Position { x: 2, y: 1 });

    // No key pressed yet: the ticker fires but nothing moves.
    state.tick();
    assert_eq!(state.snake.head(), Position { x: 1, y: 1 });
    assert_eq!(state.score, 0);

    // First meal: grow, score, speed up.
    state.apply_input(GameInput::Direction(Direction::Right));
    state.tick();
    assert_eq!(state.status, GameStatus::Running);
    assert_eq!(state.score, 1);
    assert_eq!(state.snake.len(), 2);
    assert_eq!(state.snake.head(), Position { x: 2, y: 1 });
    assert_eq!(state.tick_interval_ms, INITIAL_TICK_INTERVAL_MS - 5);

    // Pause holds the world still while the ticker keeps firing.
    state.apply_input(GameInput::Pause);
    state.tick();
    state.tick();
    assert_eq!(state.snake.head(), Position { x: 2, y: 1 });
    state.apply_input(GameInput::Pause);

    // Head for the top wall.
    state.food = Food::at(Position { x: 5, y: 5 });
    state.apply_input(GameInput::Direction(Direction::Up));
    state.tick();
    assert_eq!(state.status, GameStatus::Running);
    assert_eq!(state.snake.head(), Position { x: 2, y: 0 });

    state.tick();
    assert_eq!(state.status, GameStatus::GameOver);
    assert_eq!(state.score, 1);

    // Restart recovers a fresh session even after losing.
    state.apply_input(GameInput::Restart);
    assert_eq!(state.status, GameStatus::Running);
    assert_eq!(state.score, 0);
    assert_eq!(state.tick_interval_ms, INITIAL_TICK_INTERVAL_MS);
    assert_eq!(state.direction, None);
    assert_eq!(state.snake.len(), 1);
    assert_eq!(state.snake.head(), Position { x: 5, y: 5 });

    // Exit is terminal; only restart leaves it.
    state.apply_input(GameInput::Exit);
    state.apply_input(GameInput::Direction(Direction::Left));
    state.tick();
    assert_eq!(state.status, GameStatus::Exited);
    assert_eq!(state.direction, None);
}
