use crate::menu::mvi::State;
use crate::temperature::Scale;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MenuState {
    #[default]
    AwaitingChoice,
    AwaitingTemperature {
        scale: Scale,
    },
    Exited,
}

impl State for MenuState {}

impl MenuState {
    pub fn is_exited(&self) -> bool {
        matches!(self, Self::Exited)
    }
}
