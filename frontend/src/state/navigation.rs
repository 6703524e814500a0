use leptos::*;

/// Mobile navigation menu state, owned by the page header.
#[derive(Clone, Copy, Debug)]
pub struct NavigationState {
    menu_open: RwSignal<bool>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self {
            menu_open: create_rw_signal(false),
        }
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.menu_open.get()
    }

    pub fn set_mobile_menu_open(&self, open: bool) {
        self.menu_open.set(open);
    }

    pub fn toggle_mobile_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_navigation() -> NavigationState {
    let state = NavigationState::new();
    provide_context(state);
    state
}

pub fn use_navigation() -> NavigationState {
    use_context::<NavigationState>().unwrap_or_default()
}
