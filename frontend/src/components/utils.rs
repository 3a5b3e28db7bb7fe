use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Renders a Markdown block (reports, recommendations, chat replies) into
/// the vdom. The backend is the only author of this content.
pub fn render_markdown(source: &str) -> Html {
    let parser = pulldown_cmark::Parser::new(source);
    let mut out = String::new();
    pulldown_cmark::html::push_html(&mut out, parser);
    Html::from_html_unchecked(AttrValue::from(out))
}

pub fn format_size_mb(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}

/// Wall-clock time for chat message stamps.
pub fn now_time() -> String {
    js_sys::Date::new_0().to_locale_time_string("en-US").into()
}

// Debounce to limit button events
pub fn debounce<F>(duration: u32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let pending = Rc::new(RefCell::new(None::<Timeout>));

    Callback::from(move |_| {
        let mut slot = pending.borrow_mut();
        if let Some(old) = slot.take() {
            old.cancel();
        }
        let inner = callback.clone();
        *slot = Some(Timeout::new(duration, move || inner()));
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_formatting_in_megabytes() {
        assert_eq!(format_size_mb(1024 * 1024), "1.00 MB");
        assert_eq!(format_size_mb(2_528_706), "2.41 MB");
        assert_eq!(format_size_mb(0), "0.00 MB");
    }
}
