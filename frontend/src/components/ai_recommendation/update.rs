use common::errors::ApiError;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;

use super::messages::Msg;
use super::state::AiRecommendationComponent;

pub fn update(
    component: &mut AiRecommendationComponent,
    ctx: &Context<AiRecommendationComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::UpdateGoal(goal) => {
            component.form.goal = goal;
            true
        }
        Msg::UpdateMaxItems(raw) => {
            component.form.max_items_input = raw;
            true
        }
        Msg::Submit => {
            let on_trailing = ctx.link().callback(|_| Msg::SubmitThrottleElapsed);
            match component.submit.call((), on_trailing) {
                Some(()) => submit(component, ctx),
                None => false,
            }
        }
        Msg::SubmitThrottleElapsed => match component.submit.fire() {
            Some(()) => submit(component, ctx),
            None => false,
        },
        Msg::Received(token, outcome) => component.form.finish_submit(token, outcome),
        Msg::Select(index) => component.form.select(index),
        Msg::CloseDetail => {
            component.form.close_detail();
            true
        }
        Msg::DismissError => {
            component.form.dismiss_error();
            true
        }
    }
}

fn submit(component: &mut AiRecommendationComponent, ctx: &Context<AiRecommendationComponent>) -> bool {
    let (token, request) = component.form.begin_submit();
    let link = ctx.link().clone();
    spawn_local(async move {
        let outcome = api::get_ai_recommendations(&request)
            .await
            .map_err(ApiError::into_message);
        link.send_message(Msg::Received(token, outcome));
    });
    true
}
