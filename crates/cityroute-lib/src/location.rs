use serde::Serialize;

/// Numeric identifier for a location.
pub type LocationId = i64;

/// A named place on the city map.
///
/// Two locations are the same location when their ids match; the other fields
/// are descriptive. `code` is only used to join the distances table while the
/// graph is built.
#[derive(Debug, Clone, Serialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub code: String,
    /// Whether a car can be left here on an eco route.
    pub parking: bool,
}

impl Location {
    pub fn new(id: LocationId, name: impl Into<String>, code: impl Into<String>, parking: bool) -> Self {
        Self {
            id,
            name: name.into(),
            code: code.into(),
            parking,
        }
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Location {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locations_compare_by_id_only() {
        let a = Location::new(7, "Market", "MK", true);
        let b = Location::new(7, "Old Market", "OM", false);
        let c = Location::new(8, "Market", "MK", true);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
