use crate::app::event::AppEvent;
use crate::components::{AuthToggle, SearchInput, SearchInputProps};
use crate::config::AppConfig;
use crate::listings::{self, Listing};
use chrono::Local;
use ratatui::layout::Rect;
use tokio::sync::mpsc::UnboundedSender;

const CLOCK_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    HeaderSearch,
    AuthButton,
    HomeSearch,
    StartButton,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::HeaderSearch => Focus::AuthButton,
            Focus::AuthButton => Focus::HomeSearch,
            Focus::HomeSearch => Focus::StartButton,
            Focus::StartButton => Focus::HeaderSearch,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::HeaderSearch => Focus::StartButton,
            Focus::AuthButton => Focus::HeaderSearch,
            Focus::HomeSearch => Focus::AuthButton,
            Focus::StartButton => Focus::HomeSearch,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Focus::HeaderSearch => "HEADER SEARCH",
            Focus::AuthButton => "ACCOUNT",
            Focus::HomeSearch => "PROPERTY SEARCH",
            Focus::StartButton => "START",
        }
    }
}

pub struct AppState {
    pub config: AppConfig,
    /// Uncontrolled: keeps its own text.
    pub header_search: SearchInput,
    pub auth: AuthToggle,
    /// Controlled by `listing_query`. Edits are posted as
    /// [`AppEvent::QueryChanged`] and only show up once handled.
    pub home_search: SearchInput,
    pub listing_query: String,
    pub focus: Focus,
    /// Last known terminal size, used for mouse hit-testing.
    pub viewport: Rect,
    pub clock: String,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig, owner_tx: UnboundedSender<AppEvent>) -> Self {
        let header_search = SearchInput::new(
            SearchInputProps::default()
                .placeholder(config.ui.header_placeholder.clone())
                .on_change(|text| tracing::debug!(query = text, "header search edited")),
        );

        let listing_query = String::new();
        let home_search = SearchInput::new(
            SearchInputProps::default()
                .placeholder(config.ui.home_placeholder.clone())
                .value(listing_query.clone())
                .on_change(move |text| {
                    let _ = owner_tx.send(AppEvent::QueryChanged(text.to_string()));
                }),
        );

        Self {
            config,
            header_search,
            auth: AuthToggle::new(),
            home_search,
            listing_query,
            focus: Focus::HeaderSearch,
            viewport: Rect::default(),
            clock: Local::now().format(CLOCK_FORMAT).to_string(),
            should_quit: false,
            dirty: true,
        }
    }

    /// The search field that currently receives typed characters, if any.
    pub fn focused_search_mut(&mut self) -> Option<&mut SearchInput> {
        match self.focus {
            Focus::HeaderSearch => Some(&mut self.header_search),
            Focus::HomeSearch => Some(&mut self.home_search),
            Focus::AuthButton | Focus::StartButton => None,
        }
    }

    pub fn set_focus(&mut self, focus: Focus) {
        if self.focus != focus {
            tracing::debug!(from = ?self.focus, to = ?focus, "focus changed");
            self.focus = focus;
        }
        self.dirty = true;
    }

    pub fn cycle_focus(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn cycle_focus_back(&mut self) {
        self.set_focus(self.focus.prev());
    }

    /// Store a new listing query and hand it to the controlled home search.
    pub fn set_query(&mut self, query: String) {
        if let Err(e) = self.home_search.set_value(query.clone()) {
            tracing::warn!(error = %e, "home search rejected query");
            return;
        }
        self.listing_query = query;
        self.dirty = true;
    }

    pub fn visible_listings(&self) -> Vec<&Listing> {
        listings::filter(&self.config.listings, &self.listing_query)
    }

    /// Returns true when the displayed clock changed.
    pub fn refresh_clock(&mut self) -> bool {
        let now = Local::now().format(CLOCK_FORMAT).to_string();
        if now == self.clock {
            return false;
        }
        self.clock = now;
        self.dirty = true;
        true
    }
}
