//! View rendering for the learning path advisor.

use common::model::learning_resource::LearningResource;
use common::model::recommendation::AiRecommendationResponse;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::error_alert::ErrorAlert;
use crate::components::resource_detail::ResourceDetail;

use super::messages::Msg;
use super::state::AiRecommendationComponent;

pub fn view(component: &AiRecommendationComponent, ctx: &Context<AiRecommendationComponent>) -> Html {
    let link = ctx.link();
    let form = &component.form;

    html! {
        <div class="p-6 bg-white rounded-lg shadow-md mb-8">
            {
                match &form.error {
                    Some(message) => html! {
                        <ErrorAlert
                            message={message.clone()}
                            on_dismiss={link.callback(|_| Msg::DismissError)}
                        />
                    },
                    None => html! {},
                }
            }
            <h2 class="text-2xl font-semibold mb-4">{ "AI Learning Path Advisor" }</h2>
            <textarea
                placeholder="Describe your learning goal"
                value={form.goal.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::UpdateGoal(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                })}
                class="w-full p-4 border border-gray-300 rounded-md mb-4"
            />
            <input
                type="number"
                placeholder="Max Items"
                value={form.max_items_input.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::UpdateMaxItems(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
                class="w-full p-4 border border-gray-300 rounded-md mb-4"
            />
            <button
                onclick={link.callback(|_| Msg::Submit)}
                disabled={form.loading}
                class="w-full py-2 bg-blue-500 text-white rounded-md hover:bg-blue-600"
            >
                { "Get Recommendations" }
            </button>

            {
                if form.loading {
                    html! { <p class="mt-4 text-center">{ "Loading..." }</p> }
                } else {
                    html! {}
                }
            }

            {
                match &form.result {
                    Some(result) => build_result(result, link),
                    None => html! {},
                }
            }

            {
                match &form.selected {
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

fn build_result(result: &AiRecommendationResponse, link: &Scope<AiRecommendationComponent>) -> Html {
    html! {
        <div class="mt-6 space-y-6">
            <div class="p-4 bg-indigo-50 border border-indigo-100 rounded-lg">
                <h3 class="text-sm font-medium text-indigo-800 mb-1">{ "Summary" }</h3>
                <p class="text-gray-700">{ result.summary.clone() }</p>
            </div>
            {
                if result.explanation.is_empty() {
                    html! {}
                } else {
                    html! {
                        <div class="p-3 bg-gray-50 border border-gray-200 rounded-lg">
                            <p class="text-sm text-gray-600">{ result.explanation.clone() }</p>
                        </div>
                    }
                }
            }
            <div>
                <h3 class="text-lg font-semibold text-gray-900 mb-3">{ "Recommended Resources" }</h3>
                <div class="space-y-3">
                    { for result.resources.iter().enumerate().map(|(index, resource)| resource_card(index, resource, link)) }
                </div>
            </div>
            <div class="p-4 bg-indigo-600 text-white rounded-lg flex items-center justify-between">
                <span class="font-medium">{ "Total estimated time" }</span>
                <span class="font-bold text-lg">{ format!("{} minutes", result.total_estimated_minutes) }</span>
            </div>
        </div>
    }
}

/// Numbered card for one recommendation. Opens on click or Enter.
fn resource_card(index: usize, resource: &LearningResource, link: &Scope<AiRecommendationComponent>) -> Html {
    let onkeydown = link.batch_callback(move |e: KeyboardEvent| {
        if e.key() == "Enter" {
            vec![Msg::Select(index)]
        } else {
            vec![]
        }
    });

    html! {
        <div
            key={resource.id.clone()}
            class="p-4 bg-white border border-gray-200 rounded-lg shadow-sm hover:shadow-md cursor-pointer hover:border-indigo-300"
            onclick={link.callback(move |_| Msg::Select(index))}
            onkeydown={onkeydown}
            role="button"
            tabindex="0"
        >
            <div class="flex items-start gap-3">
                <span class="flex-shrink-0 w-8 h-8 rounded-full bg-indigo-100 text-indigo-700 font-semibold flex items-center justify-center text-sm">
                    { index + 1 }
                </span>
                <div class="flex-1 min-w-0">
                    <h4 class="font-semibold mb-1 text-indigo-600 hover:text-indigo-800">{ resource.title.clone() }</h4>
                    <p class="text-sm text-gray-600 mb-3">{ resource.description.clone() }</p>
                    <div class="flex flex-wrap gap-2 items-center">
                        <span class="inline-flex px-2.5 py-0.5 rounded-full text-xs font-medium border">{ resource.resource_type.clone() }</span>
                        <span class="inline-flex px-2.5 py-0.5 rounded-full text-xs font-medium border">{ resource.difficulty.clone() }</span>
                        <span class="text-xs text-gray-500">{ format!("{} mins", resource.estimated_minutes) }</span>
                        <div class="flex flex-wrap gap-1">
                            { for resource.tags.iter().map(|tag| html! {
                                <span class="inline-flex px-2 py-0.5 rounded text-xs bg-gray-100 text-gray-700">{ tag.clone() }</span>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
