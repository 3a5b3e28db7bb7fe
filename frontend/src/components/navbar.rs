use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let entries = [
        (Route::Home, "Home"),
        (Route::Dashboard, "Dashboard"),
        (Route::Upload, "New Analysis"),
        (Route::Chat, "Chat"),
    ];

    html! {
        <nav class="navbar">
            { for entries.iter().map(|(route, label)| html! {
                <Link<Route> to={route.clone()} classes="nav-link">{ *label }</Link<Route>>
            })}
        </nav>
    }
}
