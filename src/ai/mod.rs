//! Scripted-opponent move search and turn driver.

mod evaluator;

pub use evaluator::{
    best_move, enumerate_target_sets, opponent_seat, take_action, take_turn,
    Move, SETUP_MOVE_THRESHOLD,
};
