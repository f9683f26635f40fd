//! Paginated, searchable movie picker
//!
//! Pages of [`MOVIE_PAGE_SIZE`] movies are loaded on open, on search (Enter or
//! the search button) and on page change. Every load takes a request ticket;
//! a response whose ticket is no longer current is dropped, so a slow page 2
//! can never overwrite page 3. Fetch failures are logged and show as an empty
//! list.

use contracts::domain::a005_movie::Movie;
use contracts::domain::common::RecordId;
use contracts::shared::api_error::ApiError;
use contracts::shared::envelope::Paginated;
use contracts::shared::pagination::{total_pages, PageRequest, MOVIE_PAGE_SIZE};
use contracts::shared::request_generation::{RequestGeneration, RequestTicket};
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;

use super::pagination_controls::PaginationControls;
use crate::domain::a005_movie::api::{fetch_movie_page, get_movie};
use crate::shared::icons::icon;

/// Loaded page of the dropdown
#[derive(Debug, Clone, Default)]
pub struct MoviePageState {
    /// Committed search text, not the live input
    pub search: String,
    /// 1-based
    pub page: u64,
    pub movies: Vec<Movie>,
    pub total: u64,
    pub loading: bool,
    generation: RequestGeneration,
}

impl MoviePageState {
    pub fn commit_search(&mut self, text: &str) {
        self.search = text.trim().to_string();
    }

    /// Start loading `page`; earlier tickets become stale
    pub fn begin(&mut self, page: u64) -> (RequestTicket, PageRequest) {
        self.page = page.max(1);
        self.loading = true;
        (
            self.generation.issue(),
            PageRequest::for_page(self.page, MOVIE_PAGE_SIZE),
        )
    }

    /// Apply a response; returns false when it was stale and ignored
    pub fn apply(&mut self, ticket: RequestTicket, result: Result<Paginated<Movie>, ApiError>) -> bool {
        if !self.generation.is_current(ticket) {
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.movies = page.items;
                self.total = page.meta.total;
            }
            Err(_) => {
                self.movies.clear();
                self.total = 0;
            }
        }
        true
    }

    pub fn total_pages(&self) -> u64 {
        total_pages(self.total, MOVIE_PAGE_SIZE)
    }

    pub fn name_of(&self, id: RecordId) -> Option<String> {
        self.movies.iter().find(|m| m.id == id).map(|m| m.name.clone())
    }
}

#[component]
pub fn MovieSelect(
    /// Currently selected movie id
    #[prop(into)]
    selected: Signal<Option<RecordId>>,
    /// Called with the picked movie id
    on_change: Callback<RecordId>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or_else(|| "Select a movie".to_string());
    let open = RwSignal::new(false);
    let query = RwSignal::new(String::new());
    let state = RwSignal::new(MoviePageState::default());
    let selected_name = RwSignal::new(None::<String>);
    let root = NodeRef::<html::Div>::new();

    let load = move |page: u64| {
        let Some((ticket, request)) = state.try_update(|s| s.begin(page)) else {
            return;
        };
        let search = state.with_untracked(|s| s.search.clone());
        spawn_local(async move {
            let result = fetch_movie_page(&search, request).await;
            if let Err(e) = &result {
                log::error!("Failed to load movies: {}", e);
            }
            state.update(|s| {
                if !s.apply(ticket, result) {
                    log::warn!("Discarded stale movie page {}", request.page());
                }
            });
        });
    };

    let run_search = move || {
        state.update(|s| s.commit_search(&query.get_untracked()));
        load(1);
    };

    let toggle = move || {
        if disabled.get_untracked().unwrap_or(false) {
            return;
        }
        let opening = !open.get_untracked();
        open.set(opening);
        if opening {
            load(1);
        }
    };

    // Name of the selected movie: from the loaded page, otherwise by id
    Effect::new(move |_| {
        let Some(id) = selected.get() else {
            selected_name.set(None);
            return;
        };
        if let Some(name) = state.with_untracked(|s| s.name_of(id)) {
            selected_name.set(Some(name));
            return;
        }
        spawn_local(async move {
            match get_movie(id).await {
                Ok(movie) if selected.get_untracked() == Some(id) => selected_name.set(Some(movie.name)),
                Ok(_) => {}
                Err(e) => log::error!("Failed to load movie {}: {}", id, e),
            }
        });
    });

    // Click outside closes without changing the selection
    let handle = window_event_listener(ev::mousedown, move |event| {
        if !open.get_untracked() {
            return;
        }
        let Some(root) = root.get_untracked() else {
            return;
        };
        let inside = event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
            .map(|node| root.contains(Some(&node)))
            .unwrap_or(false);
        if !inside {
            open.set(false);
        }
    });
    on_cleanup(move || handle.remove());

    let pick = move |movie: &Movie| {
        selected_name.set(Some(movie.name.clone()));
        on_change.run(movie.id);
        open.set(false);
    };

    let results = move || {
        let (loading, movies) = state.with(|s| (s.loading, s.movies.clone()));
        if loading {
            return view! { <div class="movie-select__status"><Spinner /></div> }.into_any();
        }
        if movies.is_empty() {
            return view! { <div class="movie-select__status">"No movies found"</div> }.into_any();
        }
        view! {
            <ul class="movie-select__list">
                {movies
                    .into_iter()
                    .map(|movie| {
                        let id = movie.id;
                        let meta = movie.duration.map(|d| format!("{} min", d)).unwrap_or_default();
                        let name = movie.name.clone();
                        view! {
                            <li
                                class="movie-select__item"
                                class:movie-select__item--selected=move || selected.get() == Some(id)
                                on:click=move |_| pick(&movie)
                            >
                                <span class="movie-select__name">{name}</span>
                                <span class="movie-select__meta">{meta}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any()
    };

    view! {
        <div class="movie-select" node_ref=root>
            <button
                type="button"
                class="movie-select__field"
                disabled=move || disabled.get().unwrap_or(false)
                on:click=move |_| toggle()
            >
                <span class:movie-select__placeholder=move || selected_name.with(|n| n.is_none())>
                    {move || selected_name.get().unwrap_or_else(|| placeholder.clone())}
                </span>
                {icon("chevron-down")}
            </button>
            <Show when=move || open.get()>
                <div class="movie-select__dropdown">
                    <div class="movie-select__search">
                        <input
                            type="text"
                            class="form__input"
                            placeholder="Search by movie name"
                            prop:value=move || query.get()
                            on:input=move |ev| query.set(event_target_value(&ev))
                            on:keydown=move |ev: ev::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    run_search();
                                }
                            }
                        />
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| run_search()>
                            {icon("search")}
                        </Button>
                    </div>
                    {results}
                    <PaginationControls
                        current_page=Signal::derive(move || state.with(|s| s.page))
                        total_pages=Signal::derive(move || state.with(|s| s.total_pages()))
                        on_page_change=Callback::new(move |page| load(page))
                    />
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::envelope::PageMeta;

    fn page(ids: &[RecordId], total: u64) -> Paginated<Movie> {
        Paginated {
            items: ids
                .iter()
                .map(|&id| Movie {
                    id,
                    name: format!("Movie {}", id),
                    poster: None,
                    description: None,
                    duration: None,
                    release_date: None,
                    age_rating: None,
                    genres: Vec::new(),
                    actors: Vec::new(),
                    reviews: Vec::new(),
                })
                .collect(),
            meta: PageMeta {
                total,
                limit: MOVIE_PAGE_SIZE,
                offset: 0,
            },
        }
    }

    #[test]
    fn test_page_three_of_twenty_three() {
        let mut state = MoviePageState::default();
        let (ticket, request) = state.begin(3);
        assert_eq!(request.offset, 16);
        assert_eq!(request.limit, 8);
        assert!(state.apply(ticket, Ok(page(&[17, 18, 19, 20, 21, 22, 23], 23))));
        assert_eq!(state.total_pages(), 3);
        assert_eq!(state.name_of(20).as_deref(), Some("Movie 20"));
        assert!(!state.loading);
    }

    #[test]
    fn test_stale_page_is_dropped() {
        let mut state = MoviePageState::default();
        let (page_2, _) = state.begin(2);
        let (page_3, _) = state.begin(3);

        assert!(state.apply(page_3, Ok(page(&[17], 23))));
        assert!(!state.apply(page_2, Ok(page(&[9], 23))));
        assert_eq!(state.page, 3);
        assert_eq!(state.movies[0].id, 17);
    }

    #[test]
    fn test_failure_empties_list() {
        let mut state = MoviePageState::default();
        let (ticket, _) = state.begin(1);
        state.apply(ticket, Ok(page(&[1, 2], 2)));

        let (ticket, _) = state.begin(2);
        state.apply(ticket, Err(ApiError::Network("offline".into())));
        assert!(state.movies.is_empty());
        assert_eq!(state.total, 0);
        assert_eq!(state.total_pages(), 0);
    }

    #[test]
    fn test_search_is_trimmed() {
        let mut state = MoviePageState::default();
        state.commit_search("  dune ");
        assert_eq!(state.search, "dune");
    }
}
