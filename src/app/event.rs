use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// The controlled home search reported an edit; its owner decides
    /// what the field shows next.
    QueryChanged(String),

    /// Tick for clock refresh
    Tick,
}
