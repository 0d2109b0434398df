use dioxus::prelude::*;

use crate::core::contact::Acknowledgement;
use crate::core::settings::TOAST_DURATION_MS;
use crate::core::timing;
use crate::t;

/// The single acknowledgement slot shown in the corner of the page.
///
/// `seq` increases on every `show`, so a dismiss timer started for an older
/// toast cannot close a newer one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastSlot {
    seq: u64,
    current: Option<Acknowledgement>,
}

impl ToastSlot {
    pub fn show(&mut self, ack: Acknowledgement) -> u64 {
        self.seq += 1;
        self.current = Some(ack);
        self.seq
    }

    /// Close the toast if it is still the one identified by `seq`.
    pub fn dismiss(&mut self, seq: u64) -> bool {
        if self.seq == seq && self.current.is_some() {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&Acknowledgement> {
        self.current.as_ref()
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

#[component]
pub fn ToastHost(mut slot: Signal<ToastSlot>) -> Element {
    // Restart the dismiss timer whenever a new toast is shown; the task is
    // owned by this scope and dropped with it.
    use_effect(move || {
        let seq = slot.read().seq();
        if slot.read().current().is_some() {
            spawn(async move {
                timing::sleep_ms(TOAST_DURATION_MS).await;
                slot.with_mut(|s| s.dismiss(seq));
            });
        }
    });

    let snapshot = slot.read().clone();
    let Some(ack) = snapshot.current() else {
        return rsx! {};
    };
    let seq = snapshot.seq();
    let dismiss_label = t!(ack.language, "toast-dismiss");

    rsx! {
        div {
            class: "toast",
            role: "status",
            aria_live: "polite",
            lang: ack.language.code(),
            div { class: "toast__body",
                p { class: "toast__title", "{ack.title}" }
                p { class: "toast__description", "{ack.description}" }
            }
            button {
                r#type: "button",
                class: "toast__close",
                aria_label: "{dismiss_label}",
                onclick: move |_| {
                    slot.with_mut(|s| s.dismiss(seq));
                },
                "✕"
            }
        }
    }
}
