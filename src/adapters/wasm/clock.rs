use super::environment::get_global_scope;
use crate::ports::clock::ClockPort;
use wasm_bindgen::JsCast;
use web_sys::{Performance, WorkerGlobalScope};

#[derive(Debug, Clone, Copy, Default)]
pub struct Clock;

impl Clock {
    pub fn new() -> Self {
        Self
    }

    fn get_performance(&self) -> Option<Performance> {
        let scope = get_global_scope().ok()?;
        if let Ok(worker) = scope.clone().dyn_into::<WorkerGlobalScope>() {
            worker.performance()
        } else if let Ok(window) = scope.dyn_into::<web_sys::Window>() {
            window.performance()
        } else {
            None
        }
    }
}

impl ClockPort for Clock {
    fn now(&self) -> f64 {
        match self.get_performance() {
            Some(perf) => perf.now(),
            None => js_sys::Date::now(),
        }
    }

    fn is_available(&self) -> bool {
        self.get_performance().is_some()
    }
}
