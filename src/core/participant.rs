//! Participant identification and per-participant data storage.
//!
//! ## Participant
//!
//! The two seats at the table: the human player and the computer.
//!
//! ## ParticipantMap
//!
//! Fixed two-slot storage indexed by `Participant`, used for hands,
//! capture ledgers and score columns.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Participant {
    /// The human at the console.
    Human,
    /// The heuristic-driven opponent.
    Computer,
}

impl Participant {
    /// Both participants, in seating order.
    pub const ALL: [Participant; 2] = [Participant::Human, Participant::Computer];

    /// Slot index (Human = 0, Computer = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Participant::Human => 0,
            Participant::Computer => 1,
        }
    }

    /// The other participant.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Participant::Human => Participant::Computer,
            Participant::Computer => Participant::Human,
        }
    }

    /// Name used in announcements and score lines.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Participant::Human => "Player",
            Participant::Computer => "Computer",
        }
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-participant data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use indigo::core::{Participant, ParticipantMap};
///
/// let mut points: ParticipantMap<u32> = ParticipantMap::with_value(0);
/// points[Participant::Computer] += 3;
///
/// assert_eq!(points[Participant::Human], 0);
/// assert_eq!(points[Participant::Computer], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantMap<T> {
    data: [T; 2],
}

impl<T> ParticipantMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Participant) -> T) -> Self {
        Self {
            data: [factory(Participant::Human), factory(Participant::Computer)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a map with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a participant's data.
    #[must_use]
    pub fn get(&self, participant: Participant) -> &T {
        &self.data[participant.index()]
    }

    /// Get a mutable reference to a participant's data.
    pub fn get_mut(&mut self, participant: Participant) -> &mut T {
        &mut self.data[participant.index()]
    }

    /// Iterate over (Participant, &T) pairs in seating order.
    pub fn iter(&self) -> impl Iterator<Item = (Participant, &T)> {
        Participant::ALL.into_iter().zip(self.data.iter())
    }

    /// Build a new map by applying `f` to each entry.
    pub fn map<U>(&self, f: impl Fn(Participant, &T) -> U) -> ParticipantMap<U> {
        ParticipantMap::new(|p| f(p, self.get(p)))
    }
}

impl<T> Index<Participant> for ParticipantMap<T> {
    type Output = T;

    fn index(&self, participant: Participant) -> &Self::Output {
        self.get(participant)
    }
}

impl<T> IndexMut<Participant> for ParticipantMap<T> {
    fn index_mut(&mut self, participant: Participant) -> &mut Self::Output {
        self.get_mut(participant)
    }
}
