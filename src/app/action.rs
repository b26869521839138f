/// Side effects requested by the event handler and carried out by the main
/// loop.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
}
