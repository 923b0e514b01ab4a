use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use gloo_timers::callback::Timeout;
use log::info;
use crate::components::last_refreshed::LastRefreshed;
use crate::components::results_table::ResultsTable;
use crate::countries::NATIONALITIES;
use crate::forms::{should_enable_submit, FormState, Nationality, RESET_RECHECK_DELAY_MS};
use crate::models::ResultSet;
use crate::scroll;
use crate::sync::{submit_and_render, Endpoint, RequestGeneration};
use crate::view::{count_label, LookupAction, LookupView};

/// Refs to the four filter inputs. The inputs are left uncontrolled so the
/// native reset button can clear them; their values are read on demand.
#[derive(Clone)]
struct FilterFields {
    name: NodeRef,
    forename: NodeRef,
    nationalities: NodeRef,
    date_of_birth: NodeRef,
}

impl FilterFields {
    fn snapshot(&self) -> FormState {
        let text = |node: &NodeRef| {
            node.cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default()
        };
        let nationality = self
            .nationalities
            .cast::<HtmlSelectElement>()
            .map(|select| Nationality::from_select(select.selected_index(), select.value()))
            .unwrap_or_default();

        FormState {
            name: text(&self.name),
            forename: text(&self.forename),
            nationality,
            date_of_birth: text(&self.date_of_birth),
        }
    }
}

#[function_component]
pub fn Home() -> Html {
    let fields = FilterFields {
        name: use_node_ref(),
        forename: use_node_ref(),
        nationalities: use_node_ref(),
        date_of_birth: use_node_ref(),
    };
    let search_ref = use_node_ref();
    let view = use_reducer(LookupView::default);
    let can_filter = use_state(|| false);
    let search_enabled = use_state(|| false);
    let live_generation = use_state(RequestGeneration::default);
    let filter_generation = use_state(RequestGeneration::default);
    // Set once the user asked for live data; only then do results pull the page along.
    let show_clicked = use_mut_ref(|| false);

    let check_fields = {
        let fields = fields.clone();
        let can_filter = can_filter.clone();
        Callback::from(move |_: ()| {
            can_filter.set(should_enable_submit(&fields.snapshot()));
        })
    };

    let load_live = {
        let view = view.clone();
        let generation = (*live_generation).clone();
        let show_clicked = show_clicked.clone();
        Callback::from(move |_: ()| {
            let view = view.clone();
            let show_clicked = show_clicked.clone();
            let on_commit = Callback::from(move |results: ResultSet| {
                info!("Live data: {} rows", results.records.len());
                view.dispatch(LookupAction::Commit(Endpoint::LiveData, results));
                scroll::apply(&scroll::after_commit(Endpoint::LiveData, *show_clicked.borrow()));
            });
            submit_and_render(Endpoint::LiveData, None, generation.clone(), on_commit);
        })
    };

    // Validate the empty form and fill the live table once on load
    {
        let check_fields = check_fields.clone();
        let load_live = load_live.clone();
        use_effect_with_deps(move |_| {
            check_fields.emit(());
            load_live.emit(());
            || ()
        }, ());
    }

    let on_live_submit = {
        let show_clicked = show_clicked.clone();
        let load_live = load_live.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            *show_clicked.borrow_mut() = true;
            if scroll::freezes_on_submit(Endpoint::LiveData) {
                scroll::set_page_scrolling(false);
            }
            load_live.emit(());
        })
    };

    let on_show_click = {
        let search_ref = search_ref.clone();
        let search_enabled = search_enabled.clone();
        Callback::from(move |_: MouseEvent| {
            scroll::scroll_to(scroll::HEADER_ID);
            scroll::scroll_to(scroll::MAIN_BODY_ID);

            if let Some(input) = search_ref.cast::<HtmlInputElement>() {
                input.set_disabled(false);
                let _ = input.focus();
            }
            search_enabled.set(true);
        })
    };

    let on_filter_submit = {
        let fields = fields.clone();
        let view = view.clone();
        let generation = (*filter_generation).clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let state = fields.snapshot();
            if !should_enable_submit(&state) {
                return;
            }

            let view = view.clone();
            let on_commit = Callback::from(move |results: ResultSet| {
                info!("Filter matched {} rows", results.filtered_count());
                view.dispatch(LookupAction::Commit(Endpoint::Filter, results));
                scroll::apply(&scroll::after_commit(Endpoint::Filter, true));
            });
            submit_and_render(Endpoint::Filter, Some(state.to_form_body()), generation.clone(), on_commit);
        })
    };

    // The reset has to land in the DOM before the fields are read again
    let on_reset = {
        let check_fields = check_fields.clone();
        Callback::from(move |_: MouseEvent| {
            let check_fields = check_fields.clone();
            Timeout::new(RESET_RECHECK_DELAY_MS, move || check_fields.emit(())).forget();
        })
    };

    let on_field_input = check_fields.reform(|_: InputEvent| ());
    let on_field_change = check_fields.reform(|_: Event| ());

    html! {
        <div class="lookup-page">
            <style>
            {r#"
                body.disable-scrolling {
                    overflow: hidden;
                }
                .lookup-page {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 2rem;
                    font-family: sans-serif;
                }
                .lookup-header {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    margin-bottom: 2rem;
                }
                .lookup-stats span {
                    font-weight: bold;
                }
                .filter-form {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                    gap: 0.75rem;
                    margin-bottom: 2rem;
                }
                .form-control {
                    padding: 0.5rem;
                    border: 1px solid #ccc;
                    border-radius: 6px;
                }
                .btn {
                    padding: 0.5rem 1rem;
                    border: none;
                    border-radius: 6px;
                    background: #1E90FF;
                    color: white;
                    cursor: pointer;
                }
                .btn.disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }
                .btn-secondary {
                    background: #666;
                }
                .results-table {
                    width: 100%;
                    border-collapse: collapse;
                }
                .results-table th,
                .results-table td {
                    padding: 0.5rem;
                    border-bottom: 1px solid #eee;
                    text-align: left;
                }
                #searchBar {
                    margin-bottom: 1rem;
                    width: 100%;
                }
            "#}
            </style>
            <header id="header" class="lookup-header">
                <h1>{"Watchlist Lookup"}</h1>
                <div class="lookup-stats">
                    <p>{"People on record: "}<span id="totalPeople">{count_label(view.total_people)}</span></p>
                    <p>{"Last refreshed at minute "}<LastRefreshed /></p>
                </div>
                <form action="/live_data" method="post" onsubmit={on_live_submit}>
                    <button id="showButton" class="btn" type="submit" onclick={on_show_click}>
                        {"Show live data"}
                    </button>
                </form>
            </header>

            <section id="mainBody">
                <h2>{"Live data"}</h2>
                <input
                    id="searchBar"
                    class="form-control"
                    type="text"
                    placeholder="Search"
                    ref={search_ref}
                    disabled={!*search_enabled}
                />
                <ResultsTable records={view.live_rows.clone()} />
            </section>

            <section class="filter-section">
                <h2>{"Filter"}</h2>
                <form class="filter-form" action="/filter" method="post" onsubmit={on_filter_submit}>
                    <input
                        id="name"
                        name="name"
                        class="form-control"
                        type="text"
                        placeholder="Name"
                        ref={fields.name.clone()}
                        oninput={on_field_input.clone()}
                        onchange={on_field_change.clone()}
                    />
                    <input
                        id="forename"
                        name="forename"
                        class="form-control"
                        type="text"
                        placeholder="Forename"
                        ref={fields.forename.clone()}
                        oninput={on_field_input.clone()}
                        onchange={on_field_change.clone()}
                    />
                    <select
                        id="nationalities"
                        name="nationalities"
                        class="form-control"
                        ref={fields.nationalities.clone()}
                        onchange={on_field_change.clone()}
                    >
                        <option value="" disabled={true} selected={true}>{"Nationality"}</option>
                        { for NATIONALITIES.iter().map(|(code, label)| html! {
                            <option value={*code}>{*label}</option>
                        }) }
                    </select>
                    <input
                        id="date_of_birth"
                        name="date_of_birth"
                        class="form-control"
                        type="text"
                        placeholder="Date of birth (YYYY/MM/DD)"
                        ref={fields.date_of_birth.clone()}
                        oninput={on_field_input}
                        onchange={on_field_change}
                    />
                    <button
                        id="find"
                        type="submit"
                        class={classes!("btn", (!*can_filter).then(|| "disabled"))}
                        disabled={!*can_filter}
                    >
                        {"Filter"}
                    </button>
                    <button id="reset" type="reset" class="btn btn-secondary" onclick={on_reset}>
                        {"Reset"}
                    </button>
                </form>
            </section>

            <section id="filteredResults">
                <h2>{"Filtered results: "}<span id="filteredCount">{count_label(view.filtered_count)}</span></h2>
                <ResultsTable records={view.filtered_rows.clone()} body_id="filteredResultsBody" />
            </section>
        </div>
    }
}
