pub mod config;
pub mod hooks;
pub mod pages;
pub mod styles;

use yew::prelude::*;
use yew_router::prelude::*;
use crate::pages::{
   name_entry::NameEntry,
   not_found::NotFound,
   spin_wheel::SpinWheel,
};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
   #[at("/")] NameEntry,
   #[at("/spin-wheel")] SpinWheel,
   #[not_found]
   #[at("/404")] NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen w-full">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
   match route {
       Route::NameEntry => html! { <NameEntry /> },
       Route::SpinWheel => html! { <SpinWheel /> },
       Route::NotFound => html! { <NotFound /> },
   }
}
