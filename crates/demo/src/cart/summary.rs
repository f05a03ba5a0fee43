use leptos::prelude::*;

#[component]
pub(super) fn CartTotal(total_text: Signal<String>) -> impl IntoView {
    view! {
        <p class="cart-total" aria-live="polite">
            {move || total_text.get()}
        </p>
    }
}
