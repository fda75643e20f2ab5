use yew::prelude::*;
use yew_router::prelude::*;
use crate::{styles, Route};

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class={styles::NAME_CONTAINER}>
            <div class={classes!(styles::NAME_CARD, "text-center")}>
                <h1 class={styles::TEXT_TITLE}>{"404"}</h1>
                <p class={styles::TEXT_SUBTITLE}>{"There is no wheel here."}</p>
                <Link<Route> to={Route::NameEntry} classes={classes!(styles::LINK)}>
                    {"Back to the start"}
                </Link<Route>>
            </div>
        </div>
    }
}
