//! Domain types for the group pupusa order.
//!
//! This module defines the order aggregate: a named group order owning an
//! ordered list of people, each person owning an ordered list of pupusas
//! (dough + filling + quantity). The whole graph is created atomically by
//! [`OrderAction::CreateGroup`] and discarded by [`OrderAction::ResetOrder`];
//! only pupusas are added and removed individually.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Dough base for a pupusa
///
/// Sort order is declaration order: maize sorts before rice everywhere the
/// two are listed together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dough {
    /// Maize dough (masa de maíz)
    Maiz,
    /// Rice dough (masa de arroz)
    Arroz,
}

impl Dough {
    /// Customer-facing display name
    ///
    /// Part of the kitchen-message compatibility surface; the exact spelling
    /// (including accents) is pasted verbatim into shared messages.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Maiz => "Maíz",
            Self::Arroz => "Arroz",
        }
    }

    /// Emoji glyph shown next to the dough in pickers and summaries
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Maiz => "🌽",
            Self::Arroz => "🍚",
        }
    }
}

impl std::fmt::Display for Dough {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Filling for a pupusa
///
/// A closed catalog of the eleven supported fillings. The serde codes are the
/// snake_case variant names (`queso`, `frijoles_con_queso`, …), which is the
/// wire spelling collaborators exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filling {
    /// Cheese
    Queso,
    /// Beans and cheese
    FrijolesConQueso,
    /// Mixed (beans, cheese, pork rind)
    Revueltas,
    /// Pork rind
    Chicharron,
    /// Pork rind and cheese
    ChicharronConQueso,
    /// Loroco flower and cheese
    LorocoConQueso,
    /// Squash
    Ayote,
    /// Jalapeño
    Jalapeno,
    /// Shrimp
    Camaron,
    /// Chicken
    Pollo,
    /// Everything ("la loca")
    Loca,
}

impl Filling {
    /// The full catalog, in the order pickers present it
    pub const ALL: [Self; 11] = [
        Self::Queso,
        Self::FrijolesConQueso,
        Self::Revueltas,
        Self::Chicharron,
        Self::LorocoConQueso,
        Self::Ayote,
        Self::ChicharronConQueso,
        Self::Jalapeno,
        Self::Camaron,
        Self::Pollo,
        Self::Loca,
    ];

    /// Customer-facing display name
    ///
    /// Part of the kitchen-message compatibility surface; accents matter.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Queso => "Queso",
            Self::FrijolesConQueso => "Frijoles con Queso",
            Self::Revueltas => "Revueltas",
            Self::Chicharron => "Chicharrón",
            Self::ChicharronConQueso => "Chicharrón con Queso",
            Self::LorocoConQueso => "Loroco con Queso",
            Self::Ayote => "Ayote",
            Self::Jalapeno => "Jalapeño",
            Self::Camaron => "Camarón",
            Self::Pollo => "Pollo",
            Self::Loca => "Loca",
        }
    }

    /// Emoji glyph shown next to the filling in pickers and summaries
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Queso => "🧀",
            Self::FrijolesConQueso => "🫘",
            Self::Revueltas => "🥓",
            Self::Chicharron | Self::ChicharronConQueso => "🐷",
            Self::LorocoConQueso => "🌸",
            Self::Ayote => "🎃",
            Self::Jalapeno => "🌶️",
            Self::Camaron => "🦐",
            Self::Pollo => "🍗",
            Self::Loca => "🌮",
        }
    }

    /// Filter the catalog by a case-insensitive substring of the display name
    ///
    /// A blank (or whitespace-only) query returns the full catalog. Matching
    /// is a literal substring test on the lowercased display name, so accented
    /// characters must be typed accented ("chicharrón" matches, "chicharron"
    /// does not).
    #[must_use]
    pub fn matching(query: &str) -> Vec<Self> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Self::ALL.to_vec();
        }

        Self::ALL
            .into_iter()
            .filter(|filling| filling.display_name().to_lowercase().contains(&query))
            .collect()
    }
}

impl std::fmt::Display for Filling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Unique identifier for a person within an order
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonId(Uuid);

impl PersonId {
    /// Creates a new random `PersonId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a `PersonId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PersonId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a pupusa line entry
///
/// Ids are never reused within a session, so a removed pupusa's id never
/// reappears on a later entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PupusaId(Uuid);

impl PupusaId {
    /// Creates a new random `PupusaId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a `PupusaId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PupusaId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PupusaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One pupusa line entry: dough, filling, and how many
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pupusa {
    /// Unique identifier, assigned when the entry is added
    pub id: PupusaId,
    /// Dough base
    pub dough: Dough,
    /// Filling
    pub filling: Filling,
    /// Number of pupusas on this line, always at least 1
    pub quantity: u32,
}

impl Pupusa {
    /// Creates a new pupusa line entry
    #[must_use]
    pub const fn new(id: PupusaId, dough: Dough, filling: Filling, quantity: u32) -> Self {
        Self {
            id,
            dough,
            filling,
            quantity,
        }
    }
}

/// A participant in the order, owning an ordered list of pupusas
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier, stable for the life of the order
    pub id: PersonId,
    /// Display name; starts as a generated default and can be renamed
    pub name: String,
    /// Pupusa entries in insertion order, which is also display order
    pub pupusas: Vec<Pupusa>,
}

impl Person {
    /// Creates a new person with an empty pupusa list
    #[must_use]
    pub const fn new(id: PersonId, name: String) -> Self {
        Self {
            id,
            name,
            pupusas: Vec::new(),
        }
    }

    /// Total pupusa quantity across this person's entries
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.pupusas.iter().map(|p| p.quantity).sum()
    }
}

/// An active group order: a display name plus its people
///
/// People stay in creation order, which drives both display order and the
/// per-person section order of the kitchen message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupOrder {
    /// Group display name, stored trimmed, immutable until the order is reset
    pub group_name: String,
    /// Participants in creation order
    pub people: Vec<Person>,
}

impl GroupOrder {
    /// Creates a new group order
    #[must_use]
    pub const fn new(group_name: String, people: Vec<Person>) -> Self {
        Self { group_name, people }
    }

    /// Looks up a person by id
    #[must_use]
    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.iter().find(|p| &p.id == id)
    }

    /// Looks up a person by id for mutation
    pub fn person_mut(&mut self, id: &PersonId) -> Option<&mut Person> {
        self.people.iter_mut().find(|p| &p.id == id)
    }

    /// Total pupusa quantity across all people
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.people.iter().map(Person::total_quantity).sum()
    }
}

/// Reducer state: the active order, if any, plus the last recorded rejection
///
/// The initial state has no order; every action other than
/// [`OrderAction::CreateGroup`] is a no-op until one exists.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderState {
    /// The active order, or `None` before creation / after reset
    pub order: Option<GroupOrder>,
    /// The most recent rejected action's error; cleared by any successful
    /// mutation
    pub last_error: Option<crate::error::OrderError>,
}

impl OrderState {
    /// Creates the initial state: no order, no recorded error
    #[must_use]
    pub const fn new() -> Self {
        Self {
            order: None,
            last_error: None,
        }
    }
}

/// Actions accepted by the order reducer
///
/// Each variant is one user intent; the reducer validates it against the
/// current state and either applies it, records a rejection, or silently
/// ignores it (reference misses and dispatches with no active order).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderAction {
    /// Start a fresh order, replacing any existing one
    CreateGroup {
        /// Group display name; must be non-blank after trimming
        group_name: String,
        /// How many people to seed, between 1 and 20
        people_count: u32,
    },

    /// Rename a person, keeping their id and pupusas
    RenamePerson {
        /// Person to rename
        person_id: PersonId,
        /// Replacement name; must be non-blank after trimming
        new_name: String,
    },

    /// Append a pupusa entry to a person's list
    ///
    /// Duplicate dough+filling combinations stay distinct entries; merging
    /// only happens in the derived summary.
    AddPupusa {
        /// Person receiving the entry
        person_id: PersonId,
        /// Dough base
        dough: Dough,
        /// Filling
        filling: Filling,
        /// Number of pupusas, at least 1
        quantity: u32,
    },

    /// Remove a pupusa entry by id, keeping the rest in order
    RemovePupusa {
        /// Person owning the entry
        person_id: PersonId,
        /// Entry to remove
        pupusa_id: PupusaId,
    },

    /// Discard the order and return to the initial state
    ResetOrder,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn person_id_display() {
        let id = PersonId::new();
        let display = format!("{id}");
        assert!(!display.is_empty());
    }

    #[test]
    fn filling_serde_codes_match_the_wire_spelling() {
        let encoded = serde_json::to_string(&Filling::FrijolesConQueso).unwrap();
        assert_eq!(encoded, "\"frijoles_con_queso\"");

        let decoded: Filling = serde_json::from_str("\"chicharron_con_queso\"").unwrap();
        assert_eq!(decoded, Filling::ChicharronConQueso);

        let dough: Dough = serde_json::from_str("\"maiz\"").unwrap();
        assert_eq!(dough, Dough::Maiz);
    }

    #[test]
    fn display_tables_are_total_and_accented() {
        assert_eq!(Dough::Maiz.display_name(), "Maíz");
        assert_eq!(Dough::Arroz.display_name(), "Arroz");
        assert_eq!(Filling::Chicharron.display_name(), "Chicharrón");
        assert_eq!(Filling::Jalapeno.display_name(), "Jalapeño");
        assert_eq!(Filling::Camaron.display_name(), "Camarón");

        for filling in Filling::ALL {
            assert!(!filling.display_name().is_empty());
            assert!(!filling.emoji().is_empty());
        }
    }

    #[test]
    fn chicharron_variants_share_an_emoji() {
        assert_eq!(Filling::Chicharron.emoji(), "🐷");
        assert_eq!(Filling::ChicharronConQueso.emoji(), "🐷");
    }

    #[test]
    fn catalog_lists_all_eleven_fillings() {
        assert_eq!(Filling::ALL.len(), 11);
        let mut seen = std::collections::HashSet::new();
        for filling in Filling::ALL {
            assert!(seen.insert(filling));
        }
    }

    #[test]
    fn matching_blank_query_returns_the_full_catalog() {
        assert_eq!(Filling::matching(""), Filling::ALL.to_vec());
        assert_eq!(Filling::matching("   "), Filling::ALL.to_vec());
    }

    #[test]
    fn matching_is_case_insensitive_on_display_names() {
        let hits = Filling::matching("queso");
        assert_eq!(
            hits,
            vec![
                Filling::Queso,
                Filling::FrijolesConQueso,
                Filling::LorocoConQueso,
                Filling::ChicharronConQueso,
            ]
        );

        assert_eq!(Filling::matching("AYOTE"), vec![Filling::Ayote]);
        assert!(Filling::matching("pizza").is_empty());
    }

    #[test]
    fn person_total_sums_quantities() {
        let mut person = Person::new(PersonId::new(), "Ana".to_string());
        assert_eq!(person.total_quantity(), 0);

        person.pupusas.push(Pupusa::new(
            PupusaId::new(),
            Dough::Maiz,
            Filling::Queso,
            3,
        ));
        person.pupusas.push(Pupusa::new(
            PupusaId::new(),
            Dough::Arroz,
            Filling::Pollo,
            2,
        ));
        assert_eq!(person.total_quantity(), 5);
    }

    #[test]
    fn group_order_lookup_and_totals() {
        let ana = Person::new(PersonId::new(), "Ana".to_string());
        let mut carlos = Person::new(PersonId::new(), "Carlos".to_string());
        carlos.pupusas.push(Pupusa::new(
            PupusaId::new(),
            Dough::Maiz,
            Filling::Revueltas,
            4,
        ));

        let ana_id = ana.id.clone();
        let order = GroupOrder::new("Mesa 3".to_string(), vec![ana, carlos]);

        assert_eq!(order.total_quantity(), 4);
        assert_eq!(order.person(&ana_id).map(|p| p.name.as_str()), Some("Ana"));
        assert!(order.person(&PersonId::new()).is_none());
    }

    #[test]
    fn maize_sorts_before_rice() {
        assert!(Dough::Maiz < Dough::Arroz);
    }
}
