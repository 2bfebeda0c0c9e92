//! Playlist filter
//!
//! Derives a `FilteredView` from a catalog by genre, and enumerates the genres
//! available for a selection UI. Everything here is a pure read over the
//! catalog: no playback state is touched.

use crate::types::{Catalog, FilteredView};
use std::collections::HashSet;
use std::fmt;

/// Value of the "no filter" selector
pub const ALL_GENRES: &str = "all";

/// Label shown for the "no filter" option
pub const ALL_GENRES_LABEL: &str = "All Genres";

/// Genre selection
///
/// Matching is exact and case-sensitive: `Genre("Ambient")` does not match
/// tracks tagged `"ambient"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum GenreSelector {
    /// Every track in catalog order
    #[default]
    All,

    /// Only tracks whose genre equals this value
    Genre(String),
}

impl GenreSelector {
    /// Parse a selector value; exactly `"all"` is the sentinel
    pub fn parse(value: &str) -> Self {
        if value == ALL_GENRES {
            Self::All
        } else {
            Self::Genre(value.to_string())
        }
    }

    /// Wire value of the selector (`"all"` or the genre string)
    pub fn as_value(&self) -> &str {
        match self {
            Self::All => ALL_GENRES,
            Self::Genre(genre) => genre,
        }
    }

    /// Whether a track genre passes this selector
    pub fn matches(&self, genre: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Genre(wanted) => genre == Some(wanted.as_str()),
        }
    }
}

impl From<&str> for GenreSelector {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for GenreSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_value())
    }
}

/// One entry of the genre selection UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreOption {
    /// Display label
    pub label: String,

    /// Selector applied when the option is picked
    pub selector: GenreSelector,
}

/// Filter a catalog down to the tracks matching `selector`
///
/// Catalog order is preserved. `GenreSelector::All` yields every track.
pub fn filter(catalog: &Catalog, selector: &GenreSelector) -> FilteredView {
    let ids = catalog
        .iter()
        .filter(|track| selector.matches(track.genre.as_deref()))
        .map(|track| track.id)
        .collect();

    FilteredView::new(selector.clone(), ids)
}

/// Distinct non-empty genres in first-seen order
pub fn genres(catalog: &Catalog) -> Vec<String> {
    let mut seen = HashSet::new();
    catalog
        .iter()
        .filter_map(|track| track.genre())
        .filter(|genre| seen.insert(*genre))
        .map(str::to_string)
        .collect()
}

/// Display form of a genre: first character upper-cased
pub fn display_genre(genre: &str) -> String {
    let mut chars = genre.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Options for a genre dropdown, "All Genres" first
pub fn genre_options(catalog: &Catalog) -> Vec<GenreOption> {
    std::iter::once(GenreOption {
        label: ALL_GENRES_LABEL.to_string(),
        selector: GenreSelector::All,
    })
    .chain(genres(catalog).into_iter().map(|genre| GenreOption {
        label: display_genre(&genre),
        selector: GenreSelector::Genre(genre),
    }))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Track;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Track::new("One", "a", "1.mp3").with_genre("ambient"),
            Track::new("Two", "b", "2.mp3").with_genre("techno"),
            Track::new("Three", "c", "3.mp3"),
            Track::new("Four", "d", "4.mp3").with_genre("ambient"),
            Track::new("Five", "e", "5.mp3").with_genre(""),
            Track::new("Six", "f", "6.mp3").with_genre("Ambient"),
        ])
    }

    fn titles(catalog: &Catalog, view: &FilteredView) -> Vec<String> {
        view.tracks(catalog).map(|t| t.title.clone()).collect()
    }

    #[test]
    fn all_returns_every_track_in_order() {
        let catalog = catalog();
        let view = filter(&catalog, &GenreSelector::All);

        assert_eq!(view.len(), catalog.len());
        assert_eq!(
            titles(&catalog, &view),
            vec!["One", "Two", "Three", "Four", "Five", "Six"]
        );
    }

    #[test]
    fn genre_filter_preserves_order() {
        let catalog = catalog();
        let view = filter(&catalog, &GenreSelector::parse("ambient"));

        assert_eq!(titles(&catalog, &view), vec!["One", "Four"]);
    }

    #[test]
    fn genre_filter_is_case_sensitive() {
        let catalog = catalog();
        let view = filter(&catalog, &GenreSelector::parse("Ambient"));

        assert_eq!(titles(&catalog, &view), vec!["Six"]);
    }

    #[test]
    fn unknown_genre_yields_empty_view() {
        let catalog = catalog();
        let view = filter(&catalog, &GenreSelector::parse("polka"));
        assert!(view.is_empty());
    }

    #[test]
    fn empty_catalog_filters_to_empty() {
        let view = filter(&Catalog::empty(), &GenreSelector::All);
        assert!(view.is_empty());
    }

    #[test]
    fn parse_only_treats_exact_all_as_sentinel() {
        assert_eq!(GenreSelector::parse("all"), GenreSelector::All);
        assert_eq!(
            GenreSelector::parse("All"),
            GenreSelector::Genre("All".to_string())
        );
        assert_eq!(GenreSelector::parse("jazz").as_value(), "jazz");
        assert_eq!(GenreSelector::All.to_string(), "all");
    }

    #[test]
    fn genres_are_distinct_first_seen_and_non_empty() {
        assert_eq!(genres(&catalog()), vec!["ambient", "techno", "Ambient"]);
    }

    #[test]
    fn display_capitalizes_first_character() {
        assert_eq!(display_genre("ambient"), "Ambient");
        assert_eq!(display_genre("lo-fi"), "Lo-fi");
        assert_eq!(display_genre("électro"), "Électro");
        assert_eq!(display_genre(""), "");
    }

    #[test]
    fn options_start_with_all_genres() {
        let options = genre_options(&catalog());

        assert_eq!(options[0].label, "All Genres");
        assert_eq!(options[0].selector, GenreSelector::All);
        assert_eq!(options[1].label, "Ambient");
        assert_eq!(options[1].selector, GenreSelector::parse("ambient"));
        assert_eq!(options.len(), 4);
    }
}
