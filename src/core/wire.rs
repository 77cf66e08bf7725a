use serde::Deserialize;

/// Yahoo's `{ "raw": .., "fmt": .. }` number wrapper.
#[derive(Deserialize, Clone, Copy, Debug)]
pub(crate) struct RawNum<T> {
    pub(crate) raw: Option<T>,
}

pub(crate) fn from_raw<T>(raw: Option<RawNum<T>>) -> Option<T> {
    raw.and_then(|n| n.raw)
}
