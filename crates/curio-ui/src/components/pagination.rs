use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::core::pagination::{
    ClickRouter, ControlKind, ControlTagResolver, PageControl, PaginationRequest,
};

/// Attribute carrying the page number on every rendered control.
pub(crate) const PAGE_TAG_ATTR: &str = "data-page";
const PAGE_TAG_SELECTOR: &str = "[data-page]";

/// Reads the page tag from the nearest tagged ancestor of the click target.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct DomTagResolver;

impl ControlTagResolver<MouseEvent> for DomTagResolver {
    fn resolve_control_tag(&self, event: &MouseEvent) -> Option<String> {
        let target = event.target()?.dyn_into::<Element>().ok()?;
        let control = target.closest(PAGE_TAG_SELECTOR).ok()??;
        control.get_attribute(PAGE_TAG_ATTR)
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct PaginationProps {
    #[prop_or(1u32)]
    pub active: u32,
    #[prop_or_default]
    pub pages: u32,
    #[prop_or_default]
    pub count: Option<u64>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_change: Callback<u32>,
}

/// Sliding-window pagination with a single delegated click listener.
#[function_component(Pagination)]
pub(crate) fn pagination(props: &PaginationProps) -> Html {
    let layout = PaginationRequest {
        active_page: props.active,
        total_pages: props.pages,
        result_count: props.count,
    }
    .layout();

    let onclick = {
        let on_change = props.on_change.clone();
        let active = props.active;
        Callback::from(move |event: MouseEvent| {
            ClickRouter::new(DomTagResolver).dispatch(&event, active, |page| on_change.emit(page));
        })
    };

    html! {
        <div class={classes!("flex", "items-center", "gap-4", "ml-auto", props.class.clone())}>
            if let Some(summary) = layout.summary {
                <b class="text-sm">{summary}</b>
            }
            <nav class="join pagination" aria-label="Pagination" {onclick}>
                {for layout.controls.iter().map(render_control)}
            </nav>
        </div>
    }
}

// Disabled buttons never dispatch click events, so they never reach the router.
fn render_control(control: &PageControl) -> Html {
    let class = classes!(
        "join-item",
        "btn",
        "btn-sm",
        control.active.then_some("btn-active")
    );
    let aria_label = match control.kind {
        ControlKind::Page => format!("Page {}", control.page),
        kind => kind.aria_label().to_string(),
    };
    let aria_current = control.active.then(|| AttrValue::from("page"));

    html! {
        <button
            type="button"
            {class}
            data-page={control.tag()}
            disabled={control.disabled}
            aria-label={aria_label}
            aria-current={aria_current}
        >
            {control.label()}
        </button>
    }
}
