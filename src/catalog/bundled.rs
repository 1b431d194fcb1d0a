// Bundled catalog - used when no catalog file is configured

use super::{Catalog, Item};

/// The three artworks of the original gallery screen
pub(super) fn artworks() -> Catalog {
    Catalog {
        name: super::default_catalog_name(),
        items: vec![
            Item::new("bridge_image", "Sailing Under the Bridge", "Kat Kuan", 2017),
            Item::new("mountain_image", "Mountains of Madness", "Paul Colson", 2019),
            Item::new("forest_image", "Whispers in the Forest", "Anna Kwon", 2021),
        ],
    }
}
