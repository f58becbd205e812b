use std::cell::RefCell;

use wheel_core::ColorAssigner;

use crate::random::MathRandom;

/// Per-page state shared by the exported functions.
pub struct State {
    pub assigner: ColorAssigner,
    pub rng: MathRandom,
}

thread_local! {
    pub static STATE: RefCell<State> = RefCell::new(State {
        assigner: ColorAssigner::default(),
        rng: MathRandom,
    });
}
