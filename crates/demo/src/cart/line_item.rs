use carrito::{
    cart::CartItemKey,
    state::{CartState, Event},
    view::{CartLineView, DECREMENT_LABEL, INCREMENT_LABEL, REMOVE_LABEL},
};
use leptos::prelude::*;

/// Apply a row event to the item stored under `key`, at its position when clicked.
///
/// Rows are rendered with the position they had at render time; resolving the
/// key again keeps a click from landing on a neighbouring item.
pub(super) fn dispatch_for_line(
    state: RwSignal<CartState>,
    key: CartItemKey,
    to_event: fn(usize) -> Event,
) {
    state.maybe_update(|state| match state.cart().position(key) {
        Some(index) => state.apply(to_event(index)),
        None => false,
    });
}

#[component]
fn LineButton(
    label: &'static str,
    key: CartItemKey,
    state: RwSignal<CartState>,
    to_event: fn(usize) -> Event,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="line-button"
            on:click=move |_| dispatch_for_line(state, key, to_event)
        >
            {label}
        </button>
    }
}

#[component]
pub(super) fn CartLine(line: CartLineView, state: RwSignal<CartState>) -> impl IntoView {
    let key = line.key;

    view! {
        <li class="cart-line">
            <p class="cart-line-name">{line.name}</p>
            {line.description.map_or_else(
                || ().into_any(),
                |description| view! { <p class="cart-line-description">{description}</p> }.into_any(),
            )}
            <p class="cart-line-price">{line.price_text}</p>
            <p class="cart-line-quantity">{line.quantity_text}</p>
            <div class="cart-line-actions">
                <LineButton label=INCREMENT_LABEL key=key state=state to_event=Event::Increment />
                <LineButton label=DECREMENT_LABEL key=key state=state to_event=Event::Decrement />
                <LineButton label=REMOVE_LABEL key=key state=state to_event=Event::Remove />
            </div>
        </li>
    }
}
