//! Match resolver.
//!
//! Maps a parsed poster name to exactly one catalog entry. A candidate whose
//! year equals the year in the file name is taken automatically; otherwise the
//! candidates are offered through a [`SelectionPrompt`].
//!
//! Movies page through TMDB search results, one page per explicit "show more".
//! Series get every lookup result in a single response, so "show more" only
//! reveals the rest of the list.

use crate::core::parser::ParsedName;
use crate::models::poster::SeriesGroup;
use crate::services::catalog::{MovieCatalog, SeriesCatalog};
use crate::services::sonarr::SeriesLookupItem;
use crate::services::tmdb::MovieSearchItem;
use crate::{Error, Result};

/// Candidates shown before "show more".
pub const MENU_SIZE: usize = 5;

/// Menu number of the "show more" option.
pub const MORE_OPTION: usize = MENU_SIZE + 1;

/// One numbered candidate in a selection menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    /// 1-based menu number.
    pub number: usize,
    pub title: String,
    /// Release date or year, as the catalog reports it.
    pub date: Option<String>,
    pub overview: Option<String>,
}

/// A list of candidates offered to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    /// What is being matched (search query).
    pub subject: String,
    /// Kind of entry, used in the prompt text ("movie", "series").
    pub kind: &'static str,
    pub entries: Vec<MenuEntry>,
    /// Whether [`MORE_OPTION`] is available.
    pub more_available: bool,
}

impl Menu {
    /// Interpret a line of user input against this menu.
    ///
    /// Empty input, `s` and `skip` give up on the item.
    pub fn parse_input(&self, input: &str) -> Selection {
        let input = input.trim();
        if input.is_empty() || input.eq_ignore_ascii_case("s") || input.eq_ignore_ascii_case("skip") {
            return Selection::Skip;
        }

        match input.parse::<usize>() {
            Ok(n) if self.more_available && n == MORE_OPTION => Selection::More,
            Ok(n) => Selection::Pick(n),
            Err(_) => Selection::Invalid,
        }
    }

    fn is_valid_pick(&self, n: usize) -> bool {
        (1..=self.entries.len()).contains(&n)
    }
}

/// The answer to a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// 1-based menu number.
    Pick(usize),
    /// Show further candidates.
    More,
    /// Give up on this item.
    Skip,
    /// Unparseable input.
    Invalid,
}

/// Source of answers for ambiguous matches.
pub trait SelectionPrompt {
    /// Present `menu` and return the user's choice.
    fn choose(&mut self, menu: &Menu) -> Result<Selection>;

    /// Called when a choice was rejected and the menu is shown again.
    fn rejected(&mut self, _menu: &Menu, _selection: Selection) {}
}

/// A [`SelectionPrompt`] driven by a function instead of a console.
pub struct PolicyPrompt<F> {
    policy: F,
}

impl<F: FnMut(&Menu) -> Selection> PolicyPrompt<F> {
    pub fn new(policy: F) -> Self {
        Self { policy }
    }
}

impl<F: FnMut(&Menu) -> Selection> SelectionPrompt for PolicyPrompt<F> {
    fn choose(&mut self, menu: &Menu) -> Result<Selection> {
        Ok((self.policy)(menu))
    }
}

/// Headless policy: anything that was not auto-matched by year is skipped.
pub fn skip_ambiguous() -> PolicyPrompt<fn(&Menu) -> Selection> {
    fn skip(_: &Menu) -> Selection {
        Selection::Skip
    }
    PolicyPrompt::new(skip as fn(&Menu) -> Selection)
}

/// How a candidate was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<T> {
    /// Year in the file name matched the candidate.
    AutoMatched(T),
    /// Picked from a menu.
    Selected(T),
}

impl<T> Resolution<T> {
    pub fn is_auto(&self) -> bool {
        matches!(self, Resolution::AutoMatched(_))
    }

    pub fn into_inner(self) -> T {
        match self {
            Resolution::AutoMatched(t) | Resolution::Selected(t) => t,
        }
    }
}

/// First movie on the page whose release year equals `year`.
pub fn auto_match_movie<'a>(
    results: &'a [MovieSearchItem],
    year: Option<&str>,
) -> Option<&'a MovieSearchItem> {
    let year = year?;
    results
        .iter()
        .find(|item| item.release_year().as_deref() == Some(year))
}

/// First series whose year equals `year`.
pub fn auto_match_series<'a>(
    results: &'a [SeriesLookupItem],
    year: &str,
) -> Option<&'a SeriesLookupItem> {
    results
        .iter()
        .find(|item| item.year_text().as_deref() == Some(year))
}

fn movie_menu(query: &str, shown: &[MovieSearchItem], more_available: bool) -> Menu {
    Menu {
        subject: query.to_string(),
        kind: "movie",
        entries: shown
            .iter()
            .enumerate()
            .map(|(i, item)| MenuEntry {
                number: i + 1,
                title: item.title.clone(),
                date: item.release_date.clone().filter(|d| !d.is_empty()),
                overview: item.overview.clone(),
            })
            .collect(),
        more_available,
    }
}

fn series_menu(query: &str, shown: &[SeriesLookupItem], more_available: bool) -> Menu {
    Menu {
        subject: query.to_string(),
        kind: "series",
        entries: shown
            .iter()
            .enumerate()
            .map(|(i, item)| MenuEntry {
                number: i + 1,
                title: item.title.clone(),
                date: item.year_text(),
                overview: item.overview.clone(),
            })
            .collect(),
        more_available,
    }
}

/// Resolve a movie poster against the paginated movie catalog.
pub async fn resolve_movie<C, P>(
    catalog: &C,
    prompt: &mut P,
    parsed: &ParsedName,
) -> Result<Resolution<MovieSearchItem>>
where
    C: MovieCatalog,
    P: SelectionPrompt,
{
    let query = parsed.query.as_str();
    let mut page_no = 1;

    'pages: loop {
        let page = catalog.search_movies(query, page_no).await?;
        if page.results.is_empty() {
            return Err(Error::EmptyResult(query.to_string()));
        }

        if let Some(hit) = auto_match_movie(&page.results, parsed.year.as_deref()) {
            tracing::info!(
                "Automatically matched movie: {} ({})",
                hit.title,
                hit.release_year().unwrap_or_default()
            );
            return Ok(Resolution::AutoMatched(hit.clone()));
        }

        let shown = &page.results[..page.results.len().min(MENU_SIZE)];
        let more_available = page.results.len() > MENU_SIZE || page_no < page.total_pages;
        let menu = movie_menu(query, shown, more_available);

        loop {
            match prompt.choose(&menu)? {
                Selection::Pick(n) if menu.is_valid_pick(n) => {
                    return Ok(Resolution::Selected(shown[n - 1].clone()));
                }
                Selection::More if menu.more_available => {
                    page_no += 1;
                    tracing::debug!("Loading page {} for '{}'", page_no, query);
                    continue 'pages;
                }
                Selection::Skip => return Err(Error::Unresolved(query.to_string())),
                other => prompt.rejected(&menu, other),
            }
        }
    }
}

/// Resolve a series group against the series lookup.
pub async fn resolve_series<C, P>(
    catalog: &C,
    prompt: &mut P,
    group: &SeriesGroup,
) -> Result<Resolution<SeriesLookupItem>>
where
    C: SeriesCatalog,
    P: SelectionPrompt,
{
    let query = group.query();
    let results = catalog.lookup_series(&query).await?;
    if results.is_empty() {
        return Err(Error::EmptyResult(query));
    }

    if let Some(hit) = auto_match_series(&results, &group.year) {
        tracing::info!("Automatically matched series: {} ({})", hit.title, group.year);
        return Ok(Resolution::AutoMatched(hit.clone()));
    }

    let mut revealed = results.len().min(MENU_SIZE);
    loop {
        let menu = series_menu(&query, &results[..revealed], revealed < results.len());
        match prompt.choose(&menu)? {
            Selection::Pick(n) if menu.is_valid_pick(n) => {
                return Ok(Resolution::Selected(results[n - 1].clone()));
            }
            Selection::More if menu.more_available => revealed = results.len(),
            Selection::Skip => return Err(Error::Unresolved(query)),
            other => prompt.rejected(&menu, other),
        }
    }
}
