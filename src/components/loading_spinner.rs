use leptos::prelude::*;

#[component]
pub fn LoadingSpinner(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="loading">
            <div class="spinner"></div>
            <p>{message}</p>
        </div>
    }
}
