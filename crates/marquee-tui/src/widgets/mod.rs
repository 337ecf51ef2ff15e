mod controls;
mod dots;
mod status_bar;
mod track;

pub use controls::ControlsWidget;
pub use dots::DotsWidget;
pub use status_bar::StatusBarWidget;
pub use track::TrackWidget;
