//! App shell: owns the listing state and feeds it from the performer index.

mod preferences;

use gloo::console;
use yew::prelude::*;

use crate::components::pagination::Pagination;
use crate::core::config::{MAX_PER_PAGE, UiConfig};
use crate::core::listing::{ListingState, NameIndex};
use crate::core::query::SortDirection;
use preferences::{load_ui_config, save_ui_config};

/// Page sizes offered by the listing toolbar.
const PER_PAGE_CHOICES: [u32; 4] = [20, 40, 60, MAX_PER_PAGE];
/// Rows in the bundled performer index.
const SAMPLE_PERFORMERS: usize = 137;

#[derive(Properties, PartialEq)]
pub(crate) struct ListingPageProps {
    pub title: AttrValue,
    pub state: ListingState,
    #[prop_or(true)]
    pub show_count: bool,
    pub on_page: Callback<u32>,
    #[prop_or_default]
    pub children: Children,
}

/// Paged listing frame driven by the caller's [`ListingState`].
#[function_component(ListingPage)]
pub(crate) fn listing_page(props: &ListingPageProps) -> Html {
    let request = props.state.pagination(props.show_count);

    html! {
        <section class="flex flex-col gap-4">
            <header class="flex items-center gap-4">
                <h2 class="text-xl font-semibold">{props.title.clone()}</h2>
                <Pagination
                    active={request.active_page}
                    pages={request.total_pages}
                    count={request.result_count}
                    on_change={props.on_page.clone()}
                />
            </header>
            {for props.children.iter()}
        </section>
    }
}

fn sample_performers() -> NameIndex {
    NameIndex::new((1..=SAMPLE_PERFORMERS).map(|n| format!("Performer {n:03}")))
}

#[function_component(CurioApp)]
fn curio_app() -> Html {
    let config = use_state(load_ui_config);
    let source = use_memo(|_| sample_performers(), ());
    let listing = use_state(|| ListingState::new(config.per_page));
    let rows = use_state(Vec::<String>::new);

    // Every state change funnels through here so the count always follows the fetch.
    let apply = {
        let listing = listing.clone();
        let rows = rows.clone();
        let source = source.clone();
        Callback::from(move |next: ListingState| {
            let query = next.query();
            console::debug!("listing query", query.page, query.per_page, query.offset());
            let (loaded, items) = next.load(&*source);
            listing.set(loaded);
            rows.set(items);
        })
    };

    {
        let listing = listing.clone();
        let apply = apply.clone();
        use_effect_with_deps(
            move |per_page: &u32| {
                apply.emit((*listing).resize(*per_page));
                || ()
            },
            config.per_page,
        );
    }

    let on_page = {
        let listing = listing.clone();
        let apply = apply.clone();
        Callback::from(move |page: u32| {
            console::debug!("listing page change", page);
            apply.emit((*listing).go_to(page));
        })
    };

    let on_sort = {
        let listing = listing.clone();
        let apply = apply.clone();
        Callback::from(move |_: MouseEvent| apply.emit((*listing).toggle_direction()))
    };

    let on_per_page = {
        let config = config.clone();
        Callback::from(move |event: Event| {
            let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() else {
                return;
            };
            let Ok(per_page) = select.value().parse::<u32>() else {
                return;
            };
            let next = UiConfig {
                per_page,
                ..(*config).clone()
            };
            if let Err(err) = next.validate() {
                console::error!("page size rejected", err.to_string());
                return;
            }
            save_ui_config(&next);
            config.set(next);
        })
    };

    let sort_label = match listing.direction {
        SortDirection::Asc => "Name A-Z",
        SortDirection::Desc => "Name Z-A",
    };

    html! {
        <main class="container mx-auto p-4">
            <ListingPage
                title="Performers"
                state={*listing}
                show_count={config.show_result_count}
                on_page={on_page}
            >
                <div class="flex items-center gap-4">
                    <label class="label gap-2">
                        {"Per page"}
                        <select class="select select-sm" onchange={on_per_page}>
                            {for PER_PAGE_CHOICES.iter().map(|size| html! {
                                <option value={size.to_string()} selected={*size == config.per_page}>
                                    {size.to_string()}
                                </option>
                            })}
                        </select>
                    </label>
                    <button type="button" class="btn btn-sm" onclick={on_sort}>{sort_label}</button>
                </div>
                <ul class="list">
                    {for rows.iter().map(|name| html! { <li class="list-row">{name.clone()}</li> })}
                </ul>
            </ListingPage>
        </main>
    }
}

/// Mount the app into `#root`, or the document body when it is missing.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<CurioApp>::with_root(root).render();
    } else {
        yew::Renderer::<CurioApp>::new().render();
    }
}
