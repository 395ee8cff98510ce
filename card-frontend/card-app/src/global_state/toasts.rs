#[cfg(feature = "hydrate")]
use leptos::leptos_dom::helpers::set_timeout;

use leptos::prelude::*;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastLevel {
    Info,
    Success,
}

impl ToastLevel {
    pub(crate) fn class(&self) -> &'static str {
        match self {
            ToastLevel::Info => "toast toast-info",
            ToastLevel::Success => "toast toast-success",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub level: ToastLevel,
    pub duration: Option<u64>,
}

/// Non-blocking notifications shown in the corner of the page.
#[derive(Clone, Copy, Debug)]
pub struct Toasts(pub RwSignal<Vec<Toast>>);

pub fn provide_toast_context() {
    provide_context(Toasts(RwSignal::new(Vec::new())));
}

pub fn use_toast() -> Option<Toasts> {
    use_context::<Toasts>()
}

impl Toasts {
    pub fn add(&self, message: impl Into<String>, level: ToastLevel, duration: Option<u64>) -> Uuid {
        let id = Uuid::new_v4();
        let toast = Toast {
            id,
            message: message.into(),
            level,
            duration,
        };
        self.0.update(|toasts| toasts.push(toast));

        self.expire_after(id, duration);
        id
    }

    #[cfg(feature = "hydrate")]
    fn expire_after(&self, id: Uuid, duration: Option<u64>) {
        if let Some(duration) = duration {
            let toasts = *self;
            set_timeout(
                move || {
                    toasts.remove(id);
                },
                std::time::Duration::from_millis(duration),
            );
        }
    }

    /// Toasts only expire in the browser.
    #[cfg(not(feature = "hydrate"))]
    fn expire_after(&self, _id: Uuid, _duration: Option<u64>) {}

    pub fn remove(&self, id: Uuid) {
        self.0.update(|toasts| {
            if let Some(index) = toasts.iter().position(|t| t.id == id) {
                toasts.remove(index);
            }
        });
    }

    pub fn info(&self, message: impl Into<String>) -> Uuid {
        self.add(message, ToastLevel::Info, Some(3000))
    }

    pub fn success(&self, message: impl Into<String>) -> Uuid {
        self.add(message, ToastLevel::Success, Some(3000))
    }
}
