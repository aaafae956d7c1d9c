use leptos::prelude::*;

use crate::app::use_flow;
use crate::flow::FlowEvent;

#[component]
pub fn NavBar() -> impl IntoView {
    let flow = use_flow();
    let dashboard_disabled = move || !flow.state.with(|s| s.dashboard_available());

    view! {
        <nav class="navbar">
            <div class="navbar-brand">
                <h1 class="navbar-title">"NextObjective"</h1>
                <p class="navbar-subtitle">"Career Guidance"</p>
            </div>
            <ul class="nav-list">
                <li class="nav-item">
                    <button class="nav-link" on:click=move |_| flow.send(FlowEvent::HomeRequested)>
                        "Home"
                    </button>
                </li>
                <li class="nav-item">
                    <button
                        class="nav-link"
                        disabled=dashboard_disabled
                        on:click=move |_| flow.send(FlowEvent::DashboardRequested)
                    >
                        "Dashboard"
                    </button>
                </li>
            </ul>
        </nav>
    }
}
