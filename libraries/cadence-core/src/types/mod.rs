mod catalog;
mod ids;
mod track;
mod view;

pub use catalog::Catalog;
pub use ids::TrackId;
pub use track::Track;
pub use view::FilteredView;
