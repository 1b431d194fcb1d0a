// Components module - the pieces of the gallery screen
//
// - Title bar: catalog name, position
// - Artwork: framed image reference
// - Descriptor: title, artist, year
// - Controls: Previous / Next buttons
// - Tooltip: long-press overlay
// - Status bar: key hints, latest log line

pub mod artwork;
pub mod controls;
pub mod descriptor;
pub mod status_bar;
pub mod title_bar;
pub mod tooltip;
