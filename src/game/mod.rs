mod direction;
mod food;
mod grid;
mod snake;
use self::direction::Direction;
use self::food::Food;
use self::grid::{Cell, Grid};
use self::snake::Snake;
use crate::app::Screen;
use crate::audio;
use crate::command::Command;
use crate::config::Config;
use crate::consts;
use crate::util::center_rect;
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect, Size},
    style::Style,
    text::Line,
    widgets::{Block, Widget},
    Frame,
};
use std::io;
use std::time::{Duration, Instant};

/// The running game: grid, snake, food, and the fixed-tick scheduler that
/// steps them in lockstep.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    grid: Grid,
    snake: Snake,
    food: Food,
    state: GameState,
    tick_period: Duration,
    next_tick: Option<Instant>,
    /// Set when this tick's advance ate the food; cleared once the audio cue
    /// has been emitted
    chime: bool,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(config: &Config) -> Game {
        Game::new_with_rng(config, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(config: &Config, mut rng: R) -> Game<R> {
        let grid = Grid::new(config.board_side_cells());
        let snake = Snake::new(grid);
        let food = Food::new(&mut rng, grid, &snake);
        Game {
            rng,
            grid,
            snake,
            food,
            state: GameState::Running,
            tick_period: config.tick_period(),
            next_tick: None,
            chime: false,
        }
    }

    /// Wait out the remainder of the current tick, handling any input that
    /// arrives in the meantime.  Directional keys steer the snake as they
    /// come in, so the last one before the tick boundary wins; the
    /// simulation itself only steps once the boundary passes, and a quit
    /// takes effect between ticks, never mid-tick.
    pub(crate) fn process_input(&mut self) -> io::Result<Option<Screen>> {
        if !self.running() {
            return Ok(Some(Screen::Quit));
        }
        let when = *self
            .next_tick
            .get_or_insert_with(|| Instant::now() + self.tick_period);
        let wait = when.saturating_duration_since(Instant::now());
        if wait.is_zero() || !poll(wait)? {
            self.advance();
            if std::mem::take(&mut self.chime) {
                audio::food_eaten();
            }
            self.next_tick = None;
            Ok(None)
        } else {
            Ok(self.handle_event(read()?))
        }
    }

    /// One simulation step.  The order is load-bearing: the collision reset
    /// runs before the eat check, and the win check runs every tick no
    /// matter what the earlier steps did.
    fn advance(&mut self) {
        self.snake.advance();
        if self.snake.check_collision(self.grid) {
            self.snake.reset();
        } else if self.snake.eats(self.food.pos()) {
            self.chime = true;
            self.snake.grow();
            self.food.respawn(&mut self.rng, self.grid, &self.snake);
        }
        if self.snake.has_filled(self.grid) {
            self.snake.reset();
            self.food.respawn(&mut self.rng, self.grid, &self.snake);
        }
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    /// What the render sink sees this tick
    pub(crate) fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            body: self.snake.body(),
            food: self.food.pos(),
            score: self.snake.len(),
        }
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match Command::from_key_event(event.as_key_press_event()?)? {
            Command::Quit => {
                self.state = GameState::Stopped;
                Some(Screen::Quit)
            }
            Command::Up => {
                self.snake.turn(Direction::Up);
                None
            }
            Command::Down => {
                self.snake.turn(Direction::Down);
                None
            }
            Command::Left => {
                self.snake.turn(Direction::Left);
                None
            }
            Command::Right => {
                self.snake.turn(Direction::Right);
                None
            }
        }
    }

    fn running(&self) -> bool {
        self.state == GameState::Running
    }
}

/// A per-tick render snapshot: the occupied cells (head first), the food
/// cell, and the score (the current body length).  Borrows the body so that
/// drawing a frame does not allocate.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Snapshot<'a> {
    pub(crate) body: &'a [Cell],
    pub(crate) food: Cell,
    pub(crate) score: usize,
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let scene = self.snapshot();
        let [score_area, board_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);
        Line::styled(format!(" Score: {}", scene.score), consts::SCORE_BAR_STYLE)
            .render(score_area, buf);
        let side = self.grid.side();
        let block_size = Size {
            width: side.saturating_add(2),
            height: side.saturating_add(2),
        };
        let block_area = center_rect(board_area, block_size);
        Block::bordered().render(block_area, buf);
        let mut board = Board {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        draw_food(&mut board, &scene);
        draw_snake(&mut board, &scene, self.snake.head_symbol());
    }
}

/// Rendering adapter for the snake.  The head is drawn last so that it
/// overwrites any segment it shares a cell with.
fn draw_snake(board: &mut Board<'_>, scene: &Snapshot<'_>, head_symbol: char) {
    if let Some((&head, rest)) = scene.body.split_first() {
        for &cell in rest {
            board.draw_cell(cell, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        board.draw_cell(head, head_symbol, consts::SNAKE_STYLE);
    }
}

/// Rendering adapter for the food
fn draw_food(board: &mut Board<'_>, scene: &Snapshot<'_>) {
    board.draw_cell(scene.food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
}

#[derive(Debug, Eq, PartialEq)]
struct Board<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Board<'_> {
    fn draw_cell(&mut self, cell: Cell, symbol: char, style: Style) {
        let Ok(col) = u16::try_from(cell.col) else {
            return;
        };
        let Ok(row) = u16::try_from(cell.row) else {
            return;
        };
        let Some(x) = self.area.x.checked_add(col) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(row) else {
            return;
        };
        if x >= self.area.right() || y >= self.area.bottom() {
            return;
        }
        if let Some(buf_cell) = self.buf.cell_mut((x, y)) {
            buf_cell.set_char(symbol);
            buf_cell.set_style(Style::reset().patch(style));
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    Running,
    Stopped,
}
