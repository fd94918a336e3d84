//! Fake catalog services and a scripted prompt shared by the integration tests.

#![allow(dead_code)]

use poster_sorter::core::resolver::{Menu, Selection, SelectionPrompt};
use poster_sorter::services::catalog::{MovieCatalog, MovieLibrary, SeriesCatalog};
use poster_sorter::services::radarr::LibraryMovie;
use poster_sorter::services::sonarr::SeriesLookupItem;
use poster_sorter::services::tmdb::{MovieSearchItem, MovieSearchPage};
use poster_sorter::{Error, Result};
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

pub fn movie(id: u64, title: &str, release_date: &str) -> MovieSearchItem {
    MovieSearchItem {
        id,
        title: title.to_string(),
        release_date: Some(release_date.to_string()),
        overview: Some(format!("Overview of {}", title)),
    }
}

pub fn series(title: &str, year: u32, path: Option<&str>) -> SeriesLookupItem {
    SeriesLookupItem {
        title: title.to_string(),
        year: Some(year),
        overview: None,
        path: path.map(str::to_string),
        tvdb_id: None,
    }
}

pub fn library_movie(tmdb_id: u64, path: &str, root: &str) -> LibraryMovie {
    LibraryMovie {
        tmdb_id,
        title: None,
        path: Some(path.to_string()),
        root_folder_path: Some(root.to_string()),
    }
}

/// Movie catalog serving fixed pages per query.
#[derive(Default)]
pub struct FakeTmdb {
    pages: HashMap<String, Vec<Vec<MovieSearchItem>>>,
    failing: bool,
    /// Every (query, page) requested.
    pub requests: RefCell<Vec<(String, u32)>>,
}

impl FakeTmdb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn with_pages(mut self, query: &str, pages: Vec<Vec<MovieSearchItem>>) -> Self {
        self.pages.insert(query.to_string(), pages);
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl MovieCatalog for FakeTmdb {
    async fn search_movies(&self, query: &str, page: u32) -> Result<MovieSearchPage> {
        self.requests.borrow_mut().push((query.to_string(), page));
        if self.failing {
            return Err(Error::CatalogRequest {
                service: "TMDB",
                message: "401 - Invalid API key".to_string(),
            });
        }

        let pages = self.pages.get(query).cloned().unwrap_or_default();
        let results = pages
            .get(page as usize - 1)
            .cloned()
            .unwrap_or_default();
        Ok(MovieSearchPage {
            page,
            results,
            total_pages: pages.len() as u32,
            total_results: pages.iter().map(Vec::len).sum::<usize>() as u32,
        })
    }
}

/// Series catalog serving fixed lookup results per term.
#[derive(Default)]
pub struct FakeSonarr {
    results: HashMap<String, Vec<SeriesLookupItem>>,
    pub requests: RefCell<Vec<String>>,
}

impl FakeSonarr {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_results(mut self, term: &str, results: Vec<SeriesLookupItem>) -> Self {
        self.results.insert(term.to_string(), results);
        self
    }
}

impl SeriesCatalog for FakeSonarr {
    async fn lookup_series(&self, term: &str) -> Result<Vec<SeriesLookupItem>> {
        self.requests.borrow_mut().push(term.to_string());
        Ok(self.results.get(term).cloned().unwrap_or_default())
    }
}

/// Movie library with a fixed listing.
#[derive(Default)]
pub struct FakeRadarr {
    movies: Vec<LibraryMovie>,
    pub requests: RefCell<usize>,
}

impl FakeRadarr {
    pub fn new(movies: Vec<LibraryMovie>) -> Self {
        Self {
            movies,
            requests: RefCell::new(0),
        }
    }
}

impl MovieLibrary for FakeRadarr {
    async fn library_movies(&self) -> Result<Vec<LibraryMovie>> {
        *self.requests.borrow_mut() += 1;
        Ok(self.movies.clone())
    }
}

/// Prompt answering from a queue; skips once the queue runs dry.
#[derive(Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<Selection>,
    /// Every menu shown, in order.
    pub menus: Vec<Menu>,
    /// Every rejected answer.
    pub rejected: Vec<Selection>,
}

impl ScriptedPrompt {
    pub fn new(answers: impl IntoIterator<Item = Selection>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl SelectionPrompt for ScriptedPrompt {
    fn choose(&mut self, menu: &Menu) -> Result<Selection> {
        self.menus.push(menu.clone());
        Ok(self.answers.pop_front().unwrap_or(Selection::Skip))
    }

    fn rejected(&mut self, _menu: &Menu, selection: Selection) {
        self.rejected.push(selection);
    }
}
