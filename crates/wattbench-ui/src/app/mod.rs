use crate::core::config::ConsoleConfig;
use crate::core::error::{UiError, UiResult};
use banner::schedule_banner_dismissal;
use console::{LogConsole, LogConsoleProps};
use gloo::console as devtools;
use gloo::utils::document;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

mod banner;
mod console;
mod preferences;
mod stream;

/// Start both page behaviours: banner dismissal and the live log console.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let config = preferences::load_config();

    let banner = find_html_element(&config.banner_id)
        .inspect_err(|err| devtools::debug!("banner dismissal skipped", err.to_string()))
        .ok();
    if let Some(timer) = schedule_banner_dismissal(banner, config.banner_delay_ms) {
        // Lives for the rest of the page.
        let _timer_id = timer.forget();
    }

    let container = find_element(&config.log_id)
        .inspect_err(|err| devtools::debug!("log stream viewer disabled", err.to_string()))
        .ok();
    if let Some(container) = container {
        mount_console(container, &config);
    }
}

fn mount_console(container: Element, config: &ConsoleConfig) {
    let props = LogConsoleProps {
        container: container.clone(),
        events_url: config.events_url.clone().into(),
        max_lines: config.max_lines,
    };
    yew::Renderer::<LogConsole>::with_root_and_props(container, props).render();
}

fn find_element(id: &str) -> UiResult<Element> {
    document()
        .get_element_by_id(id)
        .ok_or_else(|| UiError::MissingElement { id: id.to_string() })
}

fn find_html_element(id: &str) -> UiResult<HtmlElement> {
    find_element(id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| UiError::MissingElement { id: id.to_string() })
}
