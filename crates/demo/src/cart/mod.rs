use carrito::{
    state::CartState,
    view::{CART_TITLE, CartViewModel, EMPTY_CART_TEXT},
};
use leptos::prelude::*;
use rusty_money::iso::Currency;

pub(super) mod line_item;
pub(super) mod summary;

use line_item::CartLine;
use summary::CartTotal;

#[component]
fn CartBody(view_model: CartViewModel, state: RwSignal<CartState>) -> impl IntoView {
    if view_model.is_empty() {
        view! { <p class="cart-empty">{EMPTY_CART_TEXT}</p> }.into_any()
    } else {
        view! {
            <ul class="cart-lines">
                {view_model
                    .lines
                    .into_iter()
                    .map(|line| view! { <CartLine line=line state=state /> })
                    .collect_view()}
            </ul>
        }
        .into_any()
    }
}

/// Cart panel: one card per item and the running total.
#[component]
pub(crate) fn CartPanel(state: RwSignal<CartState>, currency: &'static Currency) -> impl IntoView {
    let view_model = Memo::new(move |_| state.with(|state| CartViewModel::build(state, currency)));

    view! {
        <section class="panel cart-panel">
            <h2 class="panel-title">{CART_TITLE}</h2>
            {move || view! { <CartBody view_model=view_model.get() state=state /> }}
            <CartTotal total_text=Signal::derive(move || view_model.with(|view| view.total_text.clone())) />
        </section>
    }
}
