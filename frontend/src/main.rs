use shared::DiagnosisResult;
use yew::prelude::*;
use yew_router::prelude::*;

mod api;
mod components;
mod config;
mod upload;

use components::chat::ChatPanel;
use components::home::Home;
use components::navbar::Navbar;
use components::results::ResultsView;
use components::upload_form::UploadForm;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/upload")]
    Upload,
    #[at("/results")]
    Results,
    #[at("/dashboard")]
    Dashboard,
    #[at("/chat")]
    Chat,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(UploadPage)]
fn upload_page() -> Html {
    // No `on_result` prop: the form delivers through a page transition to
    // the results route with the payload as transient navigation state.
    html! {
        <>
            <Navbar />
            <main class="page">
                <h1>{"Upload Medical Image"}</h1>
                <UploadForm />
            </main>
        </>
    }
}

#[function_component(ResultsPage)]
fn results_page() -> Html {
    // Read once on mount. Navigation state lives only in memory: a direct
    // load or a reload has none and falls through to the empty state.
    let data = use_location()
        .and_then(|location| location.state::<DiagnosisResult>())
        .map(|state| (*state).clone());

    html! {
        <>
            <Navbar />
            <main class="page">
                <ResultsView {data} />
            </main>
        </>
    }
}

#[function_component(DashboardPage)]
fn dashboard_page() -> Html {
    // Callback delivery: the form hands the result to this page and the
    // results view renders inline, no page transition involved.
    let result = use_state(|| None::<DiagnosisResult>);
    let on_result = {
        let result = result.clone();
        Callback::from(move |data: DiagnosisResult| result.set(Some(data)))
    };

    html! {
        <>
            <Navbar />
            <main class="page dashboard">
                <h1>{"Dashboard"}</h1>
                <UploadForm {on_result} />
                <ResultsView data={(*result).clone()} />
            </main>
        </>
    }
}

#[function_component(ChatPage)]
fn chat_page() -> Html {
    html! {
        <>
            <Navbar />
            <main class="page">
                <ChatPanel />
            </main>
        </>
    }
}

#[function_component(NotFoundPage)]
fn not_found_page() -> Html {
    html! {
        <>
            <Navbar />
            <main class="page">
                <h1>{"Page not found"}</h1>
            </main>
        </>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Upload => html! { <UploadPage /> },
        Route::Results => html! { <ResultsPage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Chat => html! { <ChatPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<App>::new().render();
}
