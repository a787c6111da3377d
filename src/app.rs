//! Root page component and shared context wiring.
//!
//! The host application embeds [`App`] with the outbound [`EventSender`]
//! wired to its persistent connection and the board snapshot it rendered or
//! fetched; both default to empty/disconnected so the page still mounts and
//! the interaction layer degrades to no-ops.

use leptos::prelude::*;

use crate::components::kanban_board::KanbanBoard;
use crate::components::scroll_region::ScrollRegion;
use crate::net::push::EventSender;
use crate::state::board::Column;

/// Install the console logger and panic hook (hydrate builds only).
pub fn init_browser_logging() {
    #[cfg(feature = "hydrate")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
    }
}

/// Request-desk board page.
#[component]
pub fn App(
    #[prop(optional)] sender: Option<EventSender>,
    #[prop(optional)] columns: Option<Vec<Column>>,
) -> impl IntoView {
    let sender = sender.unwrap_or_default();
    let columns = RwSignal::new(columns.unwrap_or_default());

    provide_context(sender);
    provide_context(columns);

    view! {
        <main class="board-page">
            <aside class="board-page__detail">
                <ScrollRegion>
                    <div class="request-detail" id="request-detail-slot"></div>
                </ScrollRegion>
            </aside>
            <section class="board-page__board">
                <KanbanBoard columns=columns/>
            </section>
        </main>
    }
}

/// Browser entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    init_browser_logging();
    leptos::mount::hydrate_body(|| view! { <App/> });
}
