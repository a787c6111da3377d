//! Scrollable region with "more content above/below" markers.
//!
//! Bridge component between Leptos and the imperative [`ScrollIndicator`]
//! hook: it renders the structural contract (`.scroll-content` plus the two
//! indicator elements) and owns the hook for the lifetime of the mount.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::hooks::scroll_indicator::ScrollIndicator;

/// Wraps arbitrary children in a scrollable container with edge indicators.
///
/// `revision` is the host's re-render counter; bumping it schedules an
/// indicator recompute, covering content swaps the mutation observer may
/// see only after layout settles.
#[component]
pub fn ScrollRegion(
    children: Children,
    #[prop(optional, into)] revision: Option<Signal<u64>>,
) -> impl IntoView {
    let region_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        // Stored locally: the hook holds browser handles and must never
        // cross threads, while `on_cleanup` requires a Send + Sync closure.
        let hook = StoredValue::new_local(None::<ScrollIndicator>);
        Effect::new(move || {
            if let Some(revision) = revision {
                revision.get();
            }
            let Some(region) = region_ref.get() else {
                return;
            };
            hook.update_value(|slot| match slot.as_ref() {
                Some(mounted) => mounted.updated(),
                None => *slot = Some(ScrollIndicator::mounted(web_sys::Element::from(region))),
            });
        });
        on_cleanup(move || {
            // Dropping the hook removes the listener and observer.
            hook.set_value(None);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = revision;
    }

    view! {
        <div class="scroll-region" node_ref=region_ref>
            <div class="scroll-indicator scroll-indicator-top" aria-hidden="true">"▲"</div>
            <div class="scroll-content">{children()}</div>
            <div class="scroll-indicator scroll-indicator-bottom" aria-hidden="true">"▼"</div>
        </div>
    }
}
