/// Filtered view over a catalog
use super::{Catalog, Track, TrackId};
use crate::filter::GenreSelector;

/// Ordered subset of a catalog eligible for playback
///
/// Holds track ids rather than copies. Positions in the view are what the
/// player shell renders; ids are what playback state keeps internally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredView {
    selector: GenreSelector,
    ids: Vec<TrackId>,
}

impl FilteredView {
    pub(crate) fn new(selector: GenreSelector, ids: Vec<TrackId>) -> Self {
        Self { selector, ids }
    }

    /// Selector this view was built from
    pub fn selector(&self) -> &GenreSelector {
        &self.selector
    }

    /// Track ids in view order
    pub fn ids(&self) -> &[TrackId] {
        &self.ids
    }

    /// Number of tracks in the view
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether there is nothing to play
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Id at a view position
    pub fn id_at(&self, index: usize) -> Option<TrackId> {
        self.ids.get(index).copied()
    }

    /// View position of a track id, if the track is part of this view
    pub fn position_of(&self, id: TrackId) -> Option<usize> {
        self.ids.iter().position(|candidate| *candidate == id)
    }

    /// Resolve the track at a view position
    pub fn track_at<'c>(&self, catalog: &'c Catalog, index: usize) -> Option<&'c Track> {
        self.id_at(index).and_then(|id| catalog.get(id))
    }

    /// Resolve every track in view order
    pub fn tracks<'c>(&'c self, catalog: &'c Catalog) -> impl Iterator<Item = &'c Track> + 'c {
        self.ids.iter().filter_map(move |id| catalog.get(*id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Track::new("A", "x", "a.mp3").with_genre("rock"),
            Track::new("B", "y", "b.mp3").with_genre("jazz"),
            Track::new("C", "z", "c.mp3").with_genre("rock"),
        ])
    }

    #[test]
    fn positions_map_to_ids() {
        let catalog = catalog();
        let view = filter(&catalog, &GenreSelector::parse("rock"));

        assert_eq!(view.id_at(1), Some(TrackId::new(2)));
        assert_eq!(view.position_of(TrackId::new(2)), Some(1));
        assert_eq!(view.position_of(TrackId::new(1)), None);
        assert_eq!(view.id_at(2), None);
    }

    #[test]
    fn resolves_tracks_through_catalog() {
        let catalog = catalog();
        let view = filter(&catalog, &GenreSelector::parse("rock"));

        let titles: Vec<&str> = view.tracks(&catalog).map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C"]);
        assert_eq!(view.track_at(&catalog, 0).unwrap().title, "A");
    }
}
