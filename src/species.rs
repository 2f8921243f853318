//! Species Module
//!
//! A [`Species`] is a named chemical entity holding a single mutable concentration.
//!
//! Species are shared handles: cloning a `Species` yields another handle to the same
//! underlying state, so a concentration written through one handle is observed by every
//! [`Reaction`](crate::reaction::Reaction) and [`ReactionSystem`](crate::system::ReactionSystem)
//! that references it. Equality and hashing follow handle identity, not the name, which
//! allows two distinct species to share a display name.

use std::{
    cell::Cell,
    fmt::{self, Display},
    hash::{Hash, Hasher},
    rc::Rc,
};

#[derive(Debug)]
struct SpeciesState {
    name: String,
    concentration: Cell<f64>,
}

/// Handle to a named species and its current concentration.
///
/// # Examples
///
/// ```
/// use reactor::prelude::Species;
///
/// let calcium = Species::new("Ca");
/// assert_eq!(calcium.concentration(), 0.0);
///
/// let handle = calcium.clone();
/// handle.set_concentration(2.0);
/// assert_eq!(calcium.concentration(), 2.0);
/// ```
#[derive(Clone)]
pub struct Species(Rc<SpeciesState>);

impl Species {
    /// Creates a new species with a concentration of zero.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_concentration(name, 0.0)
    }

    /// Creates a new species with the given initial concentration.
    pub fn with_concentration(name: impl Into<String>, concentration: f64) -> Self {
        Self(Rc::new(SpeciesState {
            name: name.into(),
            concentration: Cell::new(concentration),
        }))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn concentration(&self) -> f64 {
        self.0.concentration.get()
    }

    /// Sets the concentration. Any finite or non-finite value is stored as given.
    pub fn set_concentration(&self, concentration: f64) {
        self.0.concentration.set(concentration);
    }

    /// Returns true if both handles refer to the same species.
    pub fn ptr_eq(&self, other: &Species) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Species {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Species {}

impl Hash for Species {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Rc::as_ptr(&self.0).hash(state);
    }
}

impl fmt::Debug for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Species")
            .field("name", &self.name())
            .field("concentration", &self.concentration())
            .finish()
    }
}

impl Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name(), self.concentration())
    }
}
