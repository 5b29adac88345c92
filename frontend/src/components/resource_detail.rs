//! Modal rendering a single learning resource.
//!
//! The backdrop, the header close icon and the footer button all emit the
//! same `on_close`. The backdrop handler only dismisses when the click
//! landed on the backdrop itself; clicks bubbling up from the modal body
//! (including from the close buttons, which already emitted) are ignored.

use common::model::learning_resource::LearningResource;
use wasm_bindgen::JsValue;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResourceDetailProps {
    pub resource: LearningResource,
    pub on_close: Callback<()>,
}

pub struct ResourceDetail;

/// Where a click reached the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModalClick {
    Backdrop,
    Body,
    CloseControl,
}

fn route_click(click: ModalClick, on_close: &Callback<()>) {
    match click {
        ModalClick::Backdrop | ModalClick::CloseControl => on_close.emit(()),
        ModalClick::Body => {}
    }
}

impl Component for ResourceDetail {
    type Message = ();
    type Properties = ResourceDetailProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ResourceDetail
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let resource = &props.resource;
        let close = |on_close: &Callback<()>| {
            let on_close = on_close.clone();
            Callback::from(move |_: MouseEvent| route_click(ModalClick::CloseControl, &on_close))
        };
        let on_backdrop = {
            let on_close = props.on_close.clone();
            Callback::from(move |e: MouseEvent| {
                let click = if e.target() == e.current_target() {
                    ModalClick::Backdrop
                } else {
                    ModalClick::Body
                };
                route_click(click, &on_close);
            })
        };

        html! {
            <div
                class="fixed inset-0 z-40 flex items-center justify-center p-4 bg-black bg-opacity-50"
                onclick={on_backdrop}
            >
                <div class="bg-white rounded-xl shadow-2xl max-w-2xl w-full max-h-[90vh] overflow-y-auto z-50">
                    <div class="sticky top-0 bg-gradient-to-r from-indigo-600 to-purple-600 text-white p-6 rounded-t-xl">
                        <div class="flex justify-between items-start">
                            <h2 class="text-2xl md:text-3xl font-bold pr-4">{ resource.title.clone() }</h2>
                            <button
                                class="flex-shrink-0 text-white hover:text-gray-200 p-1 rounded-full"
                                aria-label="Close"
                                onclick={close(&props.on_close)}
                            >
                                { "✕" }
                            </button>
                        </div>
                    </div>

                    <div class="p-6 space-y-6">
                        <div>
                            <h3 class="text-lg font-semibold text-gray-800 mb-2">{ "Description" }</h3>
                            <p class="text-gray-600 leading-relaxed">{ resource.description.clone() }</p>
                        </div>

                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            { badge("Resource Type", &resource.resource_type) }
                            { badge("Difficulty", &resource.difficulty) }
                            <div>
                                <h3 class="text-sm font-medium text-gray-500 mb-2">{ "Estimated Time" }</h3>
                                <p class="text-gray-800 font-medium">{ format!("{} minutes", resource.estimated_minutes) }</p>
                            </div>
                            <div>
                                <h3 class="text-sm font-medium text-gray-500 mb-2">{ "Tags" }</h3>
                                { tag_list(&resource.tags) }
                            </div>
                        </div>

                        <div class="pt-4 border-t border-gray-200">
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-4 text-sm text-gray-600">
                                <div>
                                    <span class="font-medium">{ "Created:" }</span>
                                    { format!(" {}", local_date(&resource.created_at)) }
                                </div>
                                {
                                    match resource.updated_at.as_deref().filter(|d| !d.is_empty()) {
                                        Some(updated) => html! {
                                            <div>
                                                <span class="font-medium">{ "Updated:" }</span>
                                                { format!(" {}", local_date(updated)) }
                                            </div>
                                        },
                                        None => html! {},
                                    }
                                }
                            </div>
                        </div>
                    </div>

                    <div class="sticky bottom-0 bg-gray-50 px-6 py-4 rounded-b-xl border-t border-gray-200">
                        <button
                            class="w-full px-6 py-3 bg-indigo-600 text-white font-semibold rounded-lg hover:bg-indigo-700"
                            onclick={close(&props.on_close)}
                        >
                            { "Close" }
                        </button>
                    </div>
                </div>
            </div>
        }
    }
}

fn badge(label: &str, value: &str) -> Html {
    html! {
        <div>
            <h3 class="text-sm font-medium text-gray-500 mb-2">{ label.to_string() }</h3>
            <span class="inline-flex items-center px-3 py-1.5 rounded-full text-sm font-medium border border-gray-300 bg-gray-100 text-gray-800">
                { value.to_string() }
            </span>
        </div>
    }
}

fn tag_list(tags: &[String]) -> Html {
    if tags.is_empty() {
        return html! { <span class="text-gray-400 text-sm">{ "No tags" }</span> };
    }
    html! {
        <div class="flex flex-wrap gap-2">
            { for tags.iter().map(|tag| html! {
                <span class="inline-flex items-center px-2.5 py-0.5 rounded-md text-xs font-medium bg-gray-100 text-gray-800 border border-gray-300">
                    { tag.clone() }
                </span>
            }) }
        </div>
    }
}

/// Formats an ISO timestamp as a date in the browser's locale.
fn local_date(iso: &str) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(iso));
    String::from(date.to_locale_date_string("default", &JsValue::UNDEFINED))
}
