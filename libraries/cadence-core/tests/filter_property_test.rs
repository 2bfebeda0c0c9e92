//! Property-based tests for the playlist filter

use cadence_core::{filter, genres, Catalog, GenreSelector, Track};
use proptest::prelude::*;

fn arbitrary_track() -> impl Strategy<Value = Track> {
    (
        "[A-Za-z ]{1,20}",
        "[A-Za-z ]{1,20}",
        proptest::option::of(prop::sample::select(vec!["ambient", "jazz", "rock", ""])),
    )
        .prop_map(|(title, artist, genre)| {
            let track = Track::new(title, artist, "song.mp3");
            match genre {
                Some(genre) => track.with_genre(genre),
                None => track,
            }
        })
}

fn arbitrary_catalog() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(arbitrary_track(), 0..40).prop_map(Catalog::new)
}

proptest! {
    /// Property: "all" reproduces the catalog in order
    #[test]
    fn all_is_identity(catalog in arbitrary_catalog()) {
        let view = filter(&catalog, &GenreSelector::All);
        let ids: Vec<_> = catalog.iter().map(|t| t.id).collect();
        prop_assert_eq!(view.ids(), ids.as_slice());
    }

    /// Property: a genre view is an ordered subsequence containing exactly the matches
    #[test]
    fn genre_view_is_ordered_subsequence(
        catalog in arbitrary_catalog(),
        genre in prop::sample::select(vec!["ambient", "jazz", "rock", "polka"])
    ) {
        let view = filter(&catalog, &GenreSelector::parse(genre));

        prop_assert!(view.ids().windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert!(view.tracks(&catalog).all(|t| t.genre() == Some(genre)));

        let expected = catalog.iter().filter(|t| t.genre() == Some(genre)).count();
        prop_assert_eq!(view.len(), expected);
    }

    /// Property: every enumerated genre yields a non-empty view
    #[test]
    fn enumerated_genres_are_playable(catalog in arbitrary_catalog()) {
        for genre in genres(&catalog) {
            prop_assert!(!genre.is_empty());
            let view = filter(&catalog, &GenreSelector::Genre(genre));
            prop_assert!(!view.is_empty());
        }
    }
}
