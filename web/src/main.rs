use dioxus::prelude::*;

use ui::views::Home;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }

        Home {}
    }
}
