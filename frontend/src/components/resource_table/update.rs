//! Update function for the resource table.
//!
//! Filter changes go through `TableState`, which reports whether the query
//! actually changed; only then is a new listing requested. Every listing
//! response carries the token it was issued with so late answers to older
//! queries are dropped.

use common::errors::ApiError;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;

use super::messages::Msg;
use super::state::ResourceTableComponent;

pub fn update(
    component: &mut ResourceTableComponent,
    ctx: &Context<ResourceTableComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SearchInput(value) => {
            component.table.search = value.clone();
            component
                .search
                .push(value, ctx.link().callback(Msg::SearchSettled));
            true
        }
        Msg::SearchSettled(ticket) => {
            if let Some(value) = component.search.settle(ticket) {
                if component.table.apply_search(value) {
                    refetch_from_first_page(component, ctx);
                    return true;
                }
            }
            false
        }
        Msg::TagInput(value) => {
            component.table.tag = value.clone();
            component.tag.push(value, ctx.link().callback(Msg::TagSettled));
            true
        }
        Msg::TagSettled(ticket) => {
            if let Some(value) = component.tag.settle(ticket) {
                if component.table.apply_tag(value) {
                    refetch_from_first_page(component, ctx);
                    return true;
                }
            }
            false
        }
        Msg::SetResourceType(value) => {
            if component.table.set_resource_type(value) {
                refetch_from_first_page(component, ctx);
            }
            true
        }
        Msg::SetDifficulty(value) => {
            if component.table.set_difficulty(value) {
                refetch_from_first_page(component, ctx);
            }
            true
        }
        Msg::RequestPage(page) => {
            let on_trailing = ctx.link().callback(|_| Msg::PageThrottleElapsed);
            match component.page_change.call(page, on_trailing) {
                Some(page) => change_page(component, ctx, page),
                None => false,
            }
        }
        Msg::PageThrottleElapsed => match component.page_change.fire() {
            Some(page) => change_page(component, ctx, page),
            None => false,
        },
        Msg::Fetch => {
            start_fetch(component, ctx);
            true
        }
        Msg::Loaded(token, result) => component.table.finish_fetch(token, result),
        Msg::ViewDetails(id) => {
            if component.table.is_detail_loading() {
                return false;
            }
            let on_trailing = ctx.link().callback(|_| Msg::DetailThrottleElapsed);
            match component.detail_fetch.call(id, on_trailing) {
                Some(id) => start_detail(component, ctx, id),
                None => false,
            }
        }
        Msg::DetailThrottleElapsed => match component.detail_fetch.fire() {
            Some(id) => start_detail(component, ctx, id),
            None => false,
        },
        Msg::DetailLoaded(id, result) => {
            component.table.finish_detail(&id, result);
            true
        }
        Msg::CloseDetail => {
            component.table.close_detail();
            true
        }
        Msg::DismissError => {
            component.table.dismiss_error();
            true
        }
    }
}

/// A filter changed and the table is back on page 1. A page change still
/// waiting in the throttle was computed for the old results, so it is dropped.
fn refetch_from_first_page(
    component: &mut ResourceTableComponent,
    ctx: &Context<ResourceTableComponent>,
) {
    component.page_change.cancel();
    start_fetch(component, ctx);
}

fn change_page(
    component: &mut ResourceTableComponent,
    ctx: &Context<ResourceTableComponent>,
    page: u32,
) -> bool {
    if !component.table.go_to_page(page) {
        return false;
    }
    start_fetch(component, ctx);
    true
}

fn start_fetch(component: &mut ResourceTableComponent, ctx: &Context<ResourceTableComponent>) {
    let (token, query) = component.table.begin_fetch();
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = api::fetch_resources(&query)
            .await
            .map_err(ApiError::into_message);
        link.send_message(Msg::Loaded(token, result));
    });
}

fn start_detail(
    component: &mut ResourceTableComponent,
    ctx: &Context<ResourceTableComponent>,
    id: String,
) -> bool {
    if !component.table.begin_detail(&id) {
        return false;
    }
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = api::fetch_resource_by_id(&id)
            .await
            .map_err(ApiError::into_message);
        link.send_message(Msg::DetailLoaded(id, result));
    });
    true
}
