/// Position of the menu conversation; decides the next prompt.
pub trait State: Clone + PartialEq + Default + Send + 'static {}
