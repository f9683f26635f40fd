use contracts::domain::common::EntityRecord;
use contracts::shared::form_schema::{FieldKind, FieldSpec, FormMode};
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::form::{FieldInput, LookupSelect};
use super::state::ResourceManagerState;
use super::submit::{submit_form, Submitted};
use super::traits::ManagedResource;
use crate::layout::toast_service::use_toasts;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;

fn confirm_delete(singular: &str, name: &str) -> bool {
    web_sys::window()
        .and_then(|win| {
            win.confirm_with_message(&format!("Delete {} \"{}\"?", singular.to_lowercase(), name))
                .ok()
        })
        .unwrap_or(false)
}

/// List page with create/edit dialog and delete for any [`ManagedResource`]
#[component]
pub fn ResourceManagerPage<R: ManagedResource>(resource: R) -> impl IntoView {
    let state = RwSignal::new(ResourceManagerState::<R::Entity>::default());
    let toasts = use_toasts();
    let editable = resource.editable();

    let load = move || {
        let Some(ticket) = state.try_update(|s| s.begin_load()) else {
            return;
        };
        let (filter, page) = state.with_untracked(|s| (s.filter_value(), s.page));
        spawn_local(async move {
            let result = resource.list_page(filter, page).await;
            let page = match result {
                Ok(page) => Some(page),
                Err(e) => {
                    log::error!("Failed to load {}: {}", resource.title(), e);
                    toasts.error(e.user_message());
                    None
                }
            };
            state.update(|s| {
                if !s.finish_load(ticket, page) {
                    log::warn!("Discarded stale {} list", resource.title());
                }
            });
        });
    };

    let set_filter = move |value: String, reload: bool| {
        state.update(|s| s.set_filter(value));
        if reload {
            load();
        }
    };

    let open_create = move || state.update(|s| s.open_create(resource.default_values()));

    let open_edit = move |entity: R::Entity| {
        let values = resource.form_values(&entity);
        state.update(|s| s.open_edit(entity, values));
    };

    let close_form = Callback::new(move |_| state.update(|s| s.close_form()));

    let submit = move || {
        let pending = state
            .try_update(|s| {
                if s.submitting {
                    return None;
                }
                s.submitting = true;
                Some((s.editing_id(), s.values.clone()))
            })
            .flatten();
        let Some((editing, values)) = pending else {
            return;
        };
        spawn_local(async move {
            match submit_form(&resource, resource.fields(), editing, &values).await {
                Ok(submitted) => {
                    let verb = match submitted {
                        Submitted::Created(_) => "created",
                        Submitted::Updated(_) => "updated",
                    };
                    state.update(|s| s.apply_submitted(submitted));
                    toasts.success(format!("{} {}", resource.singular(), verb));
                }
                Err(e) => {
                    if !e.is_validation() {
                        log::error!("Failed to save {}: {}", resource.singular(), e);
                    }
                    state.update(|s| s.apply_error(&e));
                    toasts.error(e.user_message());
                }
            }
        });
    };

    let delete = move |entity: R::Entity| {
        if !confirm_delete(resource.singular(), &entity.display_name()) {
            return;
        }
        let id = entity.record_id();
        spawn_local(async move {
            match resource.delete(id).await {
                Ok(()) => {
                    state.update(|s| s.apply_deleted(id));
                    toasts.success(format!("{} deleted", resource.singular()));
                }
                Err(e) => {
                    log::error!("Failed to delete {} {}: {}", resource.singular(), id, e);
                    toasts.error(e.user_message());
                }
            }
        });
    };

    let change_page = Callback::new(move |page: u64| {
        state.update(|s| s.page = page);
        load();
    });

    load();

    let filter_bar = resource.filter().map(|spec| filter_control(spec, state, set_filter, load));

    let rows = move || {
        let (items, loaded, loading) = state.with(|s| (s.items.clone(), s.is_loaded, s.loading));
        let span = resource.columns().len() + usize::from(editable);
        if items.is_empty() {
            let text = if loading || !loaded { "Loading..." } else { "No records" };
            return view! {
                <TableRow>
                    <TableCell attr:colspan=span>
                        <div class="table__empty">{text}</div>
                    </TableCell>
                </TableRow>
            }
            .into_any();
        }

        items
            .into_iter()
            .map(|item| {
                let cells = resource
                    .columns()
                    .into_iter()
                    .map(|column| {
                        let value = (column.value)(&item);
                        view! { <TableCell>{value}</TableCell> }
                    })
                    .collect_view();
                let actions = editable.then(|| {
                    let edit_item = item.clone();
                    let delete_item = item.clone();
                    view! {
                        <TableCell>
                            <Flex gap=FlexGap::Small>
                                <Button
                                    size=ButtonSize::Small
                                    appearance=ButtonAppearance::Subtle
                                    on_click=move |_| open_edit(edit_item.clone())
                                >
                                    {icon("edit")}
                                </Button>
                                <Button
                                    size=ButtonSize::Small
                                    appearance=ButtonAppearance::Subtle
                                    on_click=move |_| delete(delete_item.clone())
                                >
                                    {icon("trash")}
                                </Button>
                            </Flex>
                        </TableCell>
                    }
                });
                view! {
                    <TableRow>
                        {cells}
                        {actions}
                    </TableRow>
                }
            })
            .collect_view()
            .into_any()
    };

    let mode = Memo::new(move |_| state.with(|s| s.mode()));
    let dialog_title = Signal::derive(move || match mode.get() {
        FormMode::Create => format!("New {}", resource.singular().to_lowercase()),
        FormMode::Edit => format!("Edit {}", resource.singular().to_lowercase()),
    });

    let form_fields = move || {
        let mode = mode.get();
        resource
            .fields()
            .iter()
            .filter(|f| f.visible_in(mode))
            .map(|&field| {
                let name = field.name;
                view! {
                    <FieldInput
                        field=field
                        value=Signal::derive(move || state.with(|s| s.values.get(name).to_string()))
                        error=Signal::derive(move || state.with(|s| s.errors.get(name).map(str::to_string)))
                        on_input=Callback::new(move |v: String| state.update(|s| s.set_value(name, v)))
                    />
                }
            })
            .collect_view()
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{resource.title()}</h1>
                    <Badge>{move || state.with(|s| s.total()).to_string()}</Badge>
                </div>
                <div class="header__actions">
                    {editable.then(|| view! {
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| open_create()>
                            {icon("plus")}
                            {format!("New {}", resource.singular().to_lowercase())}
                        </Button>
                    })}
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| load()>
                        {icon("refresh")}
                        "Refresh"
                    </Button>
                </div>
            </div>

            {filter_bar}

            <div class="table-container">
                <Table>
                    <TableHeader>
                        <TableRow>
                            {resource
                                .columns()
                                .into_iter()
                                .map(|c| view! { <TableHeaderCell>{c.header}</TableHeaderCell> })
                                .collect_view()}
                            {editable.then(|| view! { <TableHeaderCell>""</TableHeaderCell> })}
                        </TableRow>
                    </TableHeader>
                    <TableBody>{rows}</TableBody>
                </Table>
            </div>

            {move || state.with(|s| s.partial_note()).map(|note| view! {
                <div class="table__note">{note}</div>
            })}
            <PaginationControls
                current_page=Signal::derive(move || state.with(|s| s.page))
                total_pages=Signal::derive(move || state.with(|s| s.total_pages()))
                on_page_change=change_page
            />

            <Show when=move || state.with(|s| s.form_visible)>
                <Modal title=dialog_title on_close=close_form>
                    <form
                        class="form"
                        on:submit=move |ev: ev::SubmitEvent| {
                            ev.prevent_default();
                            submit();
                        }
                    >
                        {form_fields}
                        <div class="form__actions">
                            <button
                                type="button"
                                class="button button--secondary"
                                on:click=move |_| close_form.run(())
                            >
                                "Cancel"
                            </button>
                            <button
                                type="submit"
                                class="button button--primary"
                                disabled=move || state.with(|s| s.submitting)
                            >
                                {move || if state.with(|s| s.submitting) { "Saving..." } else { "Save" }}
                            </button>
                        </div>
                    </form>
                </Modal>
            </Show>
        </div>
    }
}

/// Single filter above the table; dates and selects reload at once, text on Enter
fn filter_control<E, F, L>(
    spec: FieldSpec,
    state: RwSignal<ResourceManagerState<E>>,
    set_filter: F,
    load: L,
) -> AnyView
where
    E: Clone + Send + Sync + 'static,
    F: Fn(String, bool) + Copy + Send + Sync + 'static,
    L: Fn() + Copy + Send + Sync + 'static,
{
    let value = Signal::derive(move || state.with(|s| s.filter.clone()));

    let control = match spec.kind {
        FieldKind::Select(lookup) => view! {
            <LookupSelect
                lookup=lookup
                value=value
                on_change=Callback::new(move |v: String| set_filter(v, true))
                empty_label="All"
            />
        }
        .into_any(),
        FieldKind::Date => view! {
            <input
                type="date"
                class="form__input"
                prop:value=move || value.get()
                on:change=move |ev| set_filter(event_target_value(&ev), true)
            />
            <Button appearance=ButtonAppearance::Subtle on_click=move |_| set_filter(String::new(), true)>
                {icon("x")}
            </Button>
        }
        .into_any(),
        _ => view! {
            <input
                type="text"
                class="form__input"
                placeholder=spec.label
                prop:value=move || value.get()
                on:input=move |ev| set_filter(event_target_value(&ev), false)
                on:keydown=move |ev: ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        load();
                    }
                }
            />
            <Button appearance=ButtonAppearance::Secondary on_click=move |_| load()>
                {icon("search")}
            </Button>
        }
        .into_any(),
    };

    view! {
        <div class="filter-bar">
            <label class="filter-bar__label">{spec.label}</label>
            {control}
        </div>
    }
    .into_any()
}
