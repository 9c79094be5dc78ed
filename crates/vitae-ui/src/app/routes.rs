//! Routing definitions for the Vitae UI.
use crate::core::navigation::Router;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/app/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Router for Navigator {
    fn navigate_to(&self, path: &str) {
        let route = Route::recognize(path).unwrap_or(Route::NotFound);
        self.push(&route);
    }
}
