use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

#[function_component]
pub fn NotFound() -> Html {
    html! {
        <div class="lookup-page" style="text-align: center; padding: 4rem 2rem;">
            <h1>{"Page not found"}</h1>
            <Link<Route> to={Route::Home}>
                {"Back to the lookup"}
            </Link<Route>>
        </div>
    }
}
