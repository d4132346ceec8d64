//! Static asset URL resolution.
//!
//! Version and outline identifiers resolve to hosted asset URLs through
//! fixed compile-time tables; unknown ids resolve to `None` and the caller
//! falls back to the document store.

use phf::phf_map;

/// Version id -> raw text asset URL.
static VERSION_ASSETS: phf::Map<&'static str, &'static str> = phf_map! {
    "kjv" => "/assets/versions/kjv.txt",
    "web" => "/assets/versions/web.txt",
    "asv" => "/assets/versions/asv.txt",
    "ylt" => "/assets/versions/ylt.txt",
    "darby" => "/assets/versions/darby.txt",
};

/// Outline id -> outline JSON asset URL.
static OUTLINE_ASSETS: phf::Map<&'static str, &'static str> = phf_map! {
    "standard-66" => "/assets/outlines/standard-66.json",
    "kjv" => "/assets/outlines/kjv.json",
};

/// Resolve a version id to its bundled asset URL.
pub fn version_url(id: &str) -> Option<&'static str> {
    VERSION_ASSETS.get(id).copied()
}

/// Resolve an outline id to its bundled asset URL.
pub fn outline_url(id: &str) -> Option<&'static str> {
    OUTLINE_ASSETS.get(id).copied()
}

/// Ids of all bundled versions.
pub fn bundled_version_ids() -> impl Iterator<Item = &'static str> {
    VERSION_ASSETS.keys().copied()
}
