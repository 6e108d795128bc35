//! Client Switcher Component
//!
//! Controlled `<select>` over the fixed client table. It owns no state: the
//! current value comes in as a signal and every change goes straight out
//! through `on_select`.

use board_core::{Client, ClientId};
use leptos::prelude::*;

#[component]
pub fn ClientSwitcher(
    clients: Vec<Client>,
    selected: Signal<ClientId>,
    on_select: impl Fn(ClientId) + 'static,
) -> impl IntoView {
    view! {
        <div class="client-switcher">
            <label class="client-label">"Client:"</label>
            <select
                class="client-select"
                prop:value=move || selected.get().to_string()
                on:change=move |ev| on_select(ClientId::new(event_target_value(&ev)))
            >
                {clients.into_iter().map(|client| {
                    let value = client.id.to_string();
                    let id = client.id.clone();
                    let is_selected = move || selected.get() == id;
                    view! {
                        <option value=value selected=is_selected>{client.name}</option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
