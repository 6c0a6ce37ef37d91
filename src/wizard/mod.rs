//! The career wizard: navigator, profile store and the active screen.

pub mod actions;
pub mod catalog;
pub mod logic;
pub mod screens;
pub mod state;

use std::cell::RefCell;
use std::mem;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};

use catalog::Catalog;
use logic::route;
use screens::{create_screen, Reaction, Screen, ScreenContext};
use state::{Navigator, Profile, ScreenEvent, ScreenId};

/// Top-level session. Owns the profile and routes screen events.
pub struct Wizard {
    catalog: Catalog,
    navigator: Navigator,
    profile: Profile,
    screen: Box<dyn Screen>,
}

impl Wizard {
    pub fn new(catalog: Catalog) -> Self {
        let navigator = Navigator::new();
        let screen = create_screen(navigator.current());
        Self {
            catalog,
            navigator,
            profile: Profile::default(),
            screen,
        }
    }

    pub fn current_screen(&self) -> ScreenId {
        self.navigator.current()
    }

    #[cfg(test)]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    #[cfg(test)]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Feed one input to the active screen. Returns true if anything changed.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        let ctx = ScreenContext {
            profile: &self.profile,
            catalog: &self.catalog,
        };
        match self.screen.handle_input(event, &ctx) {
            Reaction::Ignored => false,
            Reaction::Consumed => true,
            Reaction::Emit(screen_event) => self.dispatch(screen_event),
        }
    }

    /// Apply the route for `event`: profile update first, then navigation.
    pub fn dispatch(&mut self, event: ScreenEvent) -> bool {
        let transition = route(self.navigator.current(), event);
        if transition.is_noop() {
            return false;
        }
        if let Some(update) = transition.update {
            self.profile = mem::take(&mut self.profile).apply(update);
        }
        if let Some(target) = transition.target {
            self.navigate_to(target);
        }
        true
    }

    /// Switch screens. A fresh screen is built only when the target differs,
    /// so re-selecting the active screen keeps its local state.
    pub fn navigate_to(&mut self, target: ScreenId) {
        if !self.navigator.navigate_to(target) {
            return;
        }
        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(&format!("navigate: {} -> {}", self.screen.id(), target).into());
        self.screen = create_screen(target);
    }

    pub fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        let ctx = ScreenContext {
            profile: &self.profile,
            catalog: &self.catalog,
        };
        self.screen.render(&ctx, f, area, click_state);
    }
}
