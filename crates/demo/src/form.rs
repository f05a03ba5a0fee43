use carrito::{
    state::{CartState, Event},
    view::{DESCRIPTION_LABEL, FORM_TITLE, NAME_LABEL, PRICE_LABEL, SUBMIT_LABEL},
};
use leptos::prelude::*;

/// Apply `event` to the shared state, notifying subscribers only when it changed something.
pub(crate) fn dispatch(state: RwSignal<CartState>, event: Event) {
    state.maybe_update(|state| state.apply(event));
}

#[component]
fn FormField(
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    value: Signal<String>,
    state: RwSignal<CartState>,
    to_event: fn(String) -> Event,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field-label">{label}</span>
            <input
                type=input_type
                prop:value=move || value.get()
                on:input=move |ev| {
                    dispatch(state, to_event(event_target_value(&ev)));
                    // No update fires when sanitizing leaves the value unchanged.
                    set_input_value(&ev, &value.get_untracked());
                }
            />
        </label>
    }
}

fn set_input_value(ev: &web_sys::Event, value: &str) {
    let input: web_sys::HtmlInputElement = event_target(ev);

    if input.value() != value {
        input.set_value(value);
    }
}

/// Product entry panel.
#[component]
pub(crate) fn FormPanel(state: RwSignal<CartState>) -> impl IntoView {
    let name = Signal::derive(move || state.with(|state| state.form().name().to_string()));
    let description =
        Signal::derive(move || state.with(|state| state.form().description().to_string()));
    let price = Signal::derive(move || state.with(|state| state.form().price_display()));
    let submit_disabled = move || !state.with(|state| state.form().can_submit());

    view! {
        <section class="panel form-panel">
            <h2 class="panel-title">{FORM_TITLE}</h2>
            <FormField label=NAME_LABEL value=name state=state to_event=Event::NameInput />
            <FormField
                label=DESCRIPTION_LABEL
                value=description
                state=state
                to_event=Event::DescriptionInput
            />
            <FormField
                label=PRICE_LABEL
                input_type="number"
                value=price
                state=state
                to_event=Event::PriceInput
            />
            <button
                type="button"
                class="submit-button"
                disabled=submit_disabled
                on:click=move |_| dispatch(state, Event::Submit)
            >
                {SUBMIT_LABEL}
            </button>
        </section>
    }
}
