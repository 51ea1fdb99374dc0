//! Small browser helpers

use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Wrap `f` so it only runs once calls have stopped for `millis`
pub fn debounce<T: 'static>(millis: u32, f: impl Fn(T) + 'static) -> impl Fn(T) {
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let f = Rc::new(f);

    move |arg: T| {
        let f = Rc::clone(&f);
        // Dropping the previous Timeout cancels it
        *pending.borrow_mut() = Some(Timeout::new(millis, move || f(arg)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_debounce_runs_last_call_once() {
        let calls = Rc::new(Cell::new(0));
        let last = Rc::new(Cell::new(0));

        let debounced = {
            let calls = Rc::clone(&calls);
            let last = Rc::clone(&last);
            debounce(20, move |v: i32| {
                calls.set(calls.get() + 1);
                last.set(v);
            })
        };

        debounced(1);
        debounced(2);
        debounced(3);
        gloo_timers::future::TimeoutFuture::new(60).await;

        assert_eq!(calls.get(), 1);
        assert_eq!(last.get(), 3);
    }
}
