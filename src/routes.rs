use dioxus::prelude::*;
use crate::views::{ Navbar, SettingsPage, TimerPage };

#[derive(Clone, Copy, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[layout(Navbar)]
    #[route("/")]
    TimerPage,
    #[route("/settings")]
    SettingsPage,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::TimerPage, Route::SettingsPage];

    pub fn path(self) -> &'static str {
        match self {
            Route::TimerPage => "/",
            Route::SettingsPage => "/settings",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Route::TimerPage => "timer",
            Route::SettingsPage => "settings",
        }
    }

    /// Exact lookup in the route table. Unknown paths are left to the router.
    pub fn from_path(path: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|route| route.path() == path)
    }
}
