//! Kanban board surface and its controller bridge.
//!
//! Renders the structural contract the [`KanbanScroll`] hook binds to:
//! columns marked with `data-column-status`, card lists (`.kanban-cards`)
//! carrying both data attributes, and draggable cards (`.kanban-card`) with
//! `data-request-id`. The hook itself is constructed on mount with the
//! outbound [`EventSender`] from context and destroyed on cleanup.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::hooks::kanban::KanbanScroll;
#[cfg(feature = "hydrate")]
use crate::net::push::EventSender;
use crate::state::board::{Card, Column};

/// Horizontal board of status columns with drag-and-drop cards.
#[component]
pub fn KanbanBoard(#[prop(into)] columns: Signal<Vec<Column>>) -> impl IntoView {
    let board_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let sender = use_context::<EventSender>().unwrap_or_default();
        // Stored locally: the hook holds browser handles and must never
        // cross threads, while `on_cleanup` requires a Send + Sync closure.
        let hook = StoredValue::new_local(None::<KanbanScroll>);
        Effect::new(move || {
            let Some(board) = board_ref.get() else {
                return;
            };
            hook.update_value(|slot| {
                if slot.is_none() {
                    *slot = Some(KanbanScroll::mounted(
                        web_sys::Element::from(board),
                        sender.clone(),
                    ));
                }
            });
        });
        on_cleanup(move || {
            // Dropping the hook removes every listener and resets any drag.
            hook.set_value(None);
        });
    }

    view! {
        <div class="kanban-scroll-wrap">
            <div id="scroll-indicator-left" class="scroll-indicator" aria-hidden="true">"◀"</div>
            <div class="kanban-board" node_ref=board_ref>
                <For
                    each=move || columns.get()
                    key=|column| column.id.clone()
                    children=move |column| view! { <KanbanColumn column=column/> }
                />
            </div>
            <div id="scroll-indicator-right" class="scroll-indicator" aria-hidden="true">"▶"</div>
        </div>
    }
}

/// One status column with its drop target and cards.
#[component]
fn KanbanColumn(column: Column) -> impl IntoView {
    let status = column.status.as_str();
    view! {
        <div class="kanban-column" data-column-status=status>
            <h2 class="kanban-column__title">{column.title.clone()}</h2>
            <div class="kanban-cards" data-column-id=column.id.clone() data-column-status=status>
                {column
                    .cards
                    .iter()
                    .cloned()
                    .map(|card| view! { <KanbanCard card=card/> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// One draggable request card.
#[component]
fn KanbanCard(card: Card) -> impl IntoView {
    view! {
        <div class="kanban-card" draggable="true" data-request-id=card.id.clone()>
            <span class="kanban-card__title">{card.title.clone()}</span>
        </div>
    }
}
