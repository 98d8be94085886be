use crate::menu::intent::MenuIntent;
use crate::menu::mvi::Reducer;
use crate::menu::state::MenuState;

pub struct MenuReducer;

impl Reducer for MenuReducer {
    type State = MenuState;
    type Intent = MenuIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            (MenuState::Exited, _) | (_, MenuIntent::EndOfInput) => MenuState::Exited,
            (MenuState::AwaitingChoice, MenuIntent::Select(scale)) => {
                MenuState::AwaitingTemperature { scale }
            }
            (MenuState::AwaitingChoice, MenuIntent::Exit) => MenuState::Exited,
            // Done converting: back to the menu
            (MenuState::AwaitingTemperature { .. }, MenuIntent::Temperature(_)) => {
                MenuState::AwaitingChoice
            }
            // Bad number: ask for the same scale again
            (state @ MenuState::AwaitingTemperature { .. }, MenuIntent::InvalidTemperature(_)) => {
                state
            }
            (state, _) => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::temperature::Scale;

    #[test]
    fn select_moves_to_temperature_prompt() {
        let state = MenuReducer::reduce(
            MenuState::AwaitingChoice,
            MenuIntent::Select(Scale::Fahrenheit),
        );
        assert_eq!(
            state,
            MenuState::AwaitingTemperature {
                scale: Scale::Fahrenheit
            }
        );
    }

    #[test]
    fn temperature_intent_is_ignored_at_menu() {
        let state = MenuReducer::reduce(MenuState::AwaitingChoice, MenuIntent::Temperature(1.0));
        assert_eq!(state, MenuState::AwaitingChoice);
    }

    #[test]
    fn exited_is_terminal() {
        let state = MenuReducer::reduce(MenuState::Exited, MenuIntent::Select(Scale::Celsius));
        assert!(state.is_exited());
    }
}
