// ============================================================================
// ROUTER STATE - active page, tabs and modals
// ============================================================================

use std::collections::BTreeSet;

/// Top-level page sections
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Home,
    Login,
    Signup,
    Profile,
    Services,
    Walkers,
    Bookings,
    Demo,
}

impl Page {
    pub const ALL: [Page; 8] = [
        Page::Home,
        Page::Login,
        Page::Signup,
        Page::Profile,
        Page::Services,
        Page::Walkers,
        Page::Bookings,
        Page::Demo,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Login => "login",
            Page::Signup => "signup",
            Page::Profile => "profile",
            Page::Services => "services",
            Page::Walkers => "walkers",
            Page::Bookings => "bookings",
            Page::Demo => "demo",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.id() == id)
    }

    /// Data loaders fired every time the page is shown
    pub fn loaders(self) -> &'static [PageLoad] {
        match self {
            Page::Home => &[PageLoad::PlatformStats],
            Page::Profile => &[PageLoad::Pets, PageLoad::Profile],
            Page::Bookings => &[PageLoad::Bookings],
            Page::Services => &[PageLoad::PetsForBooking],
            Page::Demo => &[PageLoad::DemoStats, PageLoad::ServiceStatus, PageLoad::ServiceInfo],
            Page::Login | Page::Signup | Page::Walkers => &[],
        }
    }

    /// Login and signup are left for home once a user is known
    pub fn is_auth_form(self) -> bool {
        matches!(self, Page::Login | Page::Signup)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageLoad {
    Pets,
    Profile,
    Bookings,
    PetsForBooking,
    DemoStats,
    ServiceStatus,
    ServiceInfo,
    PlatformStats,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProfileTab {
    #[default]
    Info,
    Pets,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BookingsTab {
    #[default]
    Upcoming,
    Past,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Modal {
    AddPet,
    Review,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RouterState {
    pub page: Page,
    /// Bumped on every navigation so showing the same page reloads it
    pub visit: u32,
    pub profile_tab: ProfileTab,
    pub bookings_tab: BookingsTab,
    open_modals: BTreeSet<Modal>,
}

impl RouterState {
    /// Activate `page`; its loaders run on the visit bump
    pub fn navigate(&mut self, page: Page) {
        self.page = page;
        self.visit = self.visit.wrapping_add(1);
    }

    /// Navigate by section id and hand back the loaders that will run.
    /// Unknown ids leave everything as is.
    pub fn show_page(&mut self, id: &str) -> Option<&'static [PageLoad]> {
        let page = Page::from_id(id)?;
        self.navigate(page);
        Some(page.loaders())
    }

    pub fn is_active(&self, page: Page) -> bool {
        self.page == page
    }

    pub fn show_profile_tab(&mut self, tab: ProfileTab) {
        self.profile_tab = tab;
    }

    pub fn show_bookings_tab(&mut self, tab: BookingsTab) {
        self.bookings_tab = tab;
    }

    pub fn show_modal(&mut self, modal: Modal) {
        self.open_modals.insert(modal);
    }

    pub fn close_modal(&mut self, modal: Modal) {
        self.open_modals.remove(&modal);
    }

    pub fn is_open(&self, modal: Modal) -> bool {
        self.open_modals.contains(&modal)
    }
}
