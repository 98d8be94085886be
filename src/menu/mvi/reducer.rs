use super::intent::Intent;
use super::state::State;

/// Pure transition: (State, Intent) -> State. Output is written by the
/// caller, never by the reducer.
pub trait Reducer {
    type State: State;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
