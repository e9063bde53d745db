//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::commands::HttpStudentApi;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload students from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload students from backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// HTTP client for the student backend
    pub api: StoredValue<HttpStudentApi>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>), api: HttpStudentApi) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            api: StoredValue::new(api),
        }
    }

    /// Trigger a reload of the student list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn api(&self) -> HttpStudentApi {
        self.api.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
