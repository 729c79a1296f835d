use leptos::*;

/// Transient success message. A newer message restarts the countdown; an
/// older timer firing late leaves it alone.
#[derive(Clone, Copy)]
pub struct Flash {
    message: RwSignal<Option<String>>,
    generation: StoredValue<u64>,
}

pub fn create_flash() -> Flash {
    Flash {
        message: create_rw_signal(None),
        generation: store_value(0),
    }
}

impl Flash {
    pub fn message(&self) -> Signal<Option<String>> {
        self.message.into()
    }

    pub fn show(&self, message: impl Into<String>) {
        let generation = self
            .generation
            .try_update_value(|g| {
                *g += 1;
                *g
            })
            .unwrap_or_default();
        self.message.set(Some(message.into()));
        self.schedule_expiry(generation);
    }

    pub fn clear(&self) {
        self.generation.try_update_value(|g| *g += 1);
        self.message.try_set(None);
    }

    fn expire(&self, generation: u64) -> bool {
        if self.generation.try_get_value() != Some(generation) {
            return false;
        }
        self.message.try_set(None);
        true
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_expiry(&self, generation: u64) {
        let flash = *self;
        let delay = u32::try_from(crate::config::flash_timeout_ms()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(delay, move || {
            flash.expire(generation);
        })
        .forget();
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_expiry(&self, _generation: u64) {}
}
