mod payoff_game;
pub use self::payoff_game::*;

mod parser;
pub use self::parser::*;

mod game_error;
pub use game_error::GameError;
