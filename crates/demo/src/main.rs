//! Leptos Carrito Demo Application

use carrito::{fixtures::SessionFixture, state::CartState};
use leptos::prelude::*;
use rusty_money::iso::Currency;

mod cart;
mod form;

const SESSION_FIXTURE_YAML: &str = include_str!("../../../fixtures/sessions/browser.yml");

/// Initial state and display settings loaded from the embedded session fixture.
#[derive(Debug)]
struct AppData {
    /// Currency used to display prices.
    currency: &'static Currency,

    /// State after replaying the fixture events.
    initial_state: CartState,
}

impl AppData {
    fn load() -> Result<Self, String> {
        let fixture = SessionFixture::from_yaml(SESSION_FIXTURE_YAML)
            .map_err(|error| format!("Failed to parse session fixture: {error}"))?;

        let currency = fixture
            .currency()
            .map_err(|error| format!("Invalid session currency: {error}"))?;

        Ok(Self {
            currency,
            initial_state: fixture.replay(),
        })
    }
}

/// Main demo app shell.
#[component]
fn App() -> impl IntoView {
    match AppData::load() {
        Ok(app_data) => {
            let state = RwSignal::new(app_data.initial_state);

            view! {
                <main class="app-shell">
                    <form::FormPanel state=state />
                    <cart::CartPanel state=state currency=app_data.currency />
                    <img
                        src=carrito::view::CART_IMAGE_PATH
                        alt="Imagen"
                        class="cart-image"
                    />
                </main>
            }
            .into_any()
        }
        Err(error_message) => view! {
            <main class="app-shell">
                <div class="load-error">
                    <p>{error_message}</p>
                </div>
            </main>
        }
        .into_any(),
    }
}

/// Main function
fn main() {
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}
