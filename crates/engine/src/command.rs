use crate::outcome::Outcome;
use crate::session::GameSession;
use crate::types::{Command, Direction};

impl GameSession {
    /// Apply one input command
    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::MoveLeft => self.move_piece(Direction::Left),
            Command::MoveRight => self.move_piece(Direction::Right),
            Command::MoveDown => self.move_piece(Direction::Down),
            Command::Rotate => self.rotate(),
            Command::HardDrop => self.hard_drop(),
            Command::Grab(cell) => self.begin_drag(cell),
            Command::DragTo(cell) => self.drag_to(cell),
            Command::Release => self.end_drag(),
            Command::TogglePause => self.toggle_pause(),
            Command::Restart => self.reset(),
            Command::SpeedUp => self.speed_up(),
            Command::SpeedDown => self.speed_down(),
        }
    }
}
