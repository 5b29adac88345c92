//! View rendering for the resource table.

use common::model::learning_resource::ResourceSummary;
use common::views::table::{DIFFICULTIES, RESOURCE_TYPES};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::error_alert::ErrorAlert;
use crate::components::resource_detail::ResourceDetail;

use super::messages::Msg;
use super::state::ResourceTableComponent;

pub fn view(component: &ResourceTableComponent, ctx: &Context<ResourceTableComponent>) -> Html {
    let link = ctx.link();
    let table = &component.table;

    html! {
        <div class="p-6 bg-white rounded-lg shadow-md">
            {
                match &table.error {
                    Some(message) => html! {
                        <ErrorAlert
                            message={message.clone()}
                            on_dismiss={link.callback(|_| Msg::DismissError)}
                        />
                    },
                    None => html! {},
                }
            }
            <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between gap-4 mb-4">
                <h2 class="text-2xl font-semibold">{ "Resource Catalogue" }</h2>
                {
                    if table.loading {
                        html! {}
                    } else {
                        html! { <p class="text-gray-600 text-sm">{ table.summary() }</p> }
                    }
                }
            </div>

            { build_filters(component, link) }

            {
                if table.loading {
                    html! { <p>{ "Loading..." }</p> }
                } else {
                    build_table(component, link)
                }
            }

            { build_pagination(component, link) }

            {
                match &table.selected {
                    Some(resource) => html! {
                        <ResourceDetail
                            resource={resource.clone()}
                            on_close={link.callback(|_| Msg::CloseDetail)}
                        />
                    },
                    None => html! {},
                }
            }
        </div>
    }
}

/// Search box, type and difficulty selects, tag box.
fn build_filters(component: &ResourceTableComponent, link: &Scope<ResourceTableComponent>) -> Html {
    let table = &component.table;

    html! {
        <div class="mb-6 grid grid-cols-1 sm:grid-cols-2 md:grid-cols-4 gap-4">
            <input
                type="text"
                placeholder="Search..."
                value={table.search.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::SearchInput(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
                class="p-2 border border-gray-300 rounded-md"
            />
            { select_filter("Resource Type", &RESOURCE_TYPES, &table.resource_type, link.callback(Msg::SetResourceType)) }
            { select_filter("Difficulty", &DIFFICULTIES, &table.difficulty, link.callback(Msg::SetDifficulty)) }
            <input
                type="text"
                placeholder="Tag"
                value={table.tag.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::TagInput(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
                class="p-2 border border-gray-300 rounded-md"
            />
        </div>
    }
}

/// A `<select>` whose first option means "any".
fn select_filter(label: &str, choices: &[&str], current: &str, on_change: Callback<String>) -> Html {
    html! {
        <select
            onchange={Callback::from(move |e: Event| {
                on_change.emit(e.target_unchecked_into::<HtmlSelectElement>().value())
            })}
            class="p-2 border border-gray-300 rounded-md"
        >
            <option value="" selected={current.is_empty()}>{ label.to_string() }</option>
            { for choices.iter().map(|choice| html! {
                <option value={choice.to_string()} selected={*choice == current}>{ choice.to_string() }</option>
            }) }
        </select>
    }
}

fn build_table(component: &ResourceTableComponent, link: &Scope<ResourceTableComponent>) -> Html {
    html! {
        <table class="min-w-full table-auto border-collapse">
            <thead>
                <tr class="bg-gray-100 text-left">
                    <th class="p-2">{ "Title" }</th>
                    <th class="p-2">{ "Type" }</th>
                    <th class="p-2">{ "Difficulty" }</th>
                    <th class="p-2">{ "Estimated Time" }</th>
                    <th class="p-2">{ "Actions" }</th>
                </tr>
            </thead>
            <tbody>
                { for component.table.items.iter().map(|item| build_row(component, item, link)) }
            </tbody>
        </table>
    }
}

/// One listing row. Every row's button is disabled while any detail fetch
/// is outstanding; the row being fetched says so.
fn build_row(
    component: &ResourceTableComponent,
    item: &ResourceSummary,
    link: &Scope<ResourceTableComponent>,
) -> Html {
    let id = item.id.clone();
    let fetching = component.table.loading_resource_id.as_deref() == Some(item.id.as_str());

    html! {
        <tr key={item.id.clone()} class="border-b hover:bg-gray-50">
            <td class="p-2">{ item.title.clone() }</td>
            <td class="p-2">{ item.resource_type.clone() }</td>
            <td class="p-2">{ item.difficulty.clone() }</td>
            <td class="p-2">{ format!("{} mins", item.estimated_minutes) }</td>
            <td class="p-2">
                <button
                    onclick={link.callback(move |_| Msg::ViewDetails(id.clone()))}
                    disabled={component.table.is_detail_loading()}
                    class="bg-blue-500 text-white p-2 rounded-md hover:bg-blue-600 disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    { if fetching { "Loading..." } else { "View Details" } }
                </button>
            </td>
        </tr>
    }
}

fn build_pagination(component: &ResourceTableComponent, link: &Scope<ResourceTableComponent>) -> Html {
    let table = &component.table;
    let previous = table.current_page.saturating_sub(1);
    let next = table.current_page + 1;

    html! {
        <div class="mt-6 flex justify-center space-x-4">
            <button
                disabled={!table.has_previous()}
                onclick={link.callback(move |_| Msg::RequestPage(previous))}
                class="px-4 py-2 bg-gray-300 rounded-md disabled:opacity-50"
            >
                { "Previous" }
            </button>
            <span class="px-4 py-2">{ table.current_page }</span>
            <button
                disabled={!table.has_next()}
                onclick={link.callback(move |_| Msg::RequestPage(next))}
                class="px-4 py-2 bg-gray-300 rounded-md disabled:opacity-50"
            >
                { "Next" }
            </button>
        </div>
    }
}
