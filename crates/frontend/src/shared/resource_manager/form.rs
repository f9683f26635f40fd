//! Inputs of the resource editor, one per [`FieldKind`]

use contracts::domain::common::RecordId;
use contracts::shared::form_schema::{FieldKind, FieldSpec};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::lookups::{load_options, SelectOption};
use crate::shared::components::movie_select::MovieSelect;

/// `<select>` filled from a named lookup; the blank option maps to ""
#[component]
pub fn LookupSelect(
    lookup: &'static str,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional)] empty_label: Option<&'static str>,
) -> impl IntoView {
    let options = RwSignal::new(Vec::<SelectOption>::new());

    spawn_local(async move {
        match load_options(lookup).await {
            Ok(loaded) => options.set(loaded),
            Err(e) => log::error!("Failed to load '{}' options: {}", lookup, e),
        }
    });

    view! {
        <select
            class="form__select"
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="">{empty_label.unwrap_or("Select...")}</option>
            {move || {
                options
                    .get()
                    .into_iter()
                    .map(|option| {
                        let selected = value.get() == option.value;
                        view! {
                            <option value=option.value selected=selected>{option.label}</option>
                        }
                    })
                    .collect_view()
            }}
        </select>
    }
}

#[component]
pub fn FieldInput(
    field: FieldSpec,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    on_input: Callback<String>,
) -> impl IntoView {
    let control = match field.kind {
        FieldKind::TextArea => view! {
            <textarea
                class="form__textarea"
                rows=3
                placeholder=field.placeholder.unwrap_or("")
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        }
        .into_any(),
        FieldKind::Select(lookup) => view! {
            <LookupSelect lookup=lookup value=value on_change=on_input />
        }
        .into_any(),
        FieldKind::Movie => view! {
            <MovieSelect
                selected=Signal::derive(move || value.with(|v| v.trim().parse::<RecordId>().ok()))
                on_change=Callback::new(move |id: RecordId| on_input.run(id.to_string()))
            />
        }
        .into_any(),
        kind => view! {
            <input
                type=kind.input_type()
                class="form__input"
                step=kind.is_numeric().then_some("any")
                placeholder=field.placeholder.unwrap_or("")
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        }
        .into_any(),
    };

    let required = field.validation.is_required();

    view! {
        <div class="form__group" class:form__group--invalid=move || error.with(|e| e.is_some())>
            <label class="form__label">
                {field.label}
                {required.then_some(view! { <span class="form__required">" *"</span> })}
            </label>
            {control}
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}
