/// One interpreted line of input: a menu selection, a parsed number,
/// end of input.
pub trait Intent: Send + 'static {}
