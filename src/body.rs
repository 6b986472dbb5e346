//! Bodies: rigid clusters of atoms moving as one unit.
//!
//! A [`Body`] is what the physics pipeline pushes around — a molecule or a
//! whole crystal lattice. Atoms are fixed offsets in the body's local frame;
//! the body carries one position, velocity, rotation and angular velocity
//! for the entire cluster. For all collision purposes a body is just its
//! bounding sphere: rotation is visual only and never changes the collision
//! shape.

use crate::Vec3;

/// Chemical elements the built-in substances use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    H,
    Cl,
    Na,
    He,
    Ne,
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Element::H => "H",
            Element::Cl => "Cl",
            Element::Na => "Na",
            Element::He => "He",
            Element::Ne => "Ne",
        };
        f.write_str(symbol)
    }
}

/// A single atom within a body.
///
/// Immutable after construction; the owning body derives its bounding
/// sphere from atom offsets and radii.
#[derive(Debug, Clone)]
pub struct Atom {
    /// Offset from the body origin, in the body's local frame.
    pub offset: Vec3,
    /// Display color, RGB in 0.0-1.0.
    pub color: Vec3,
    /// Sphere radius.
    pub radius: f32,
    /// Chemical element, when the atom represents one.
    pub element: Option<Element>,
    /// Phase seed for decorative per-atom glow. Consumed by the host
    /// renderer; no physical effect.
    pub glow_phase: f32,
}

impl Atom {
    pub fn new(offset: Vec3, color: Vec3, radius: f32, element: Option<Element>) -> Self {
        Self {
            offset,
            color,
            radius,
            element,
            glow_phase: 0.0,
        }
    }
}

/// What kind of body this is, and therefore how the pipeline treats it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// A molecule that drifts, spins and bounces.
    Free,
    /// An immovable lattice. Never integrated, never perturbed; other
    /// bodies still separate against its bounding sphere.
    Crystal,
}

/// A rigid cluster of atoms with unified motion state.
///
/// # Precondition
///
/// A body must own at least one atom before it is used in collision
/// resolution; an atom-less body has a zero bounding radius and the pairwise
/// and wall passes will behave as if it were a point. This is a caller
/// contract, not a checked error (the builder checks it once at
/// construction, see [`BuildError::EmptyBody`](crate::error::BuildError)).
#[derive(Debug, Clone)]
pub struct Body {
    /// Atoms in the body's local frame.
    pub atoms: Vec<Atom>,
    pub kind: BodyKind,
    /// World position of the body origin, in region-local coordinates.
    pub position: Vec3,
    pub velocity: Vec3,
    /// Euler-like angles in radians, applied as sequential x/y/z axis
    /// rotations when rendering. No effect on collision shape.
    pub rotation: Vec3,
    pub angular_velocity: Vec3,
    /// Atom index pairs to draw connecting bonds between. Render only.
    pub bonds: Vec<(usize, usize)>,
    /// Radius of the smallest origin-centered sphere containing all atoms.
    /// Must be recomputed whenever `atoms` changes, before the body is next
    /// used in collision resolution.
    pub bound_radius: f32,
    /// Noise phase accumulator for Brownian drift. Advances monotonically.
    pub(crate) noise_phase: Vec3,
}

impl Body {
    /// Create a body at rest at the origin. Computes the bounding radius
    /// from the given atoms.
    pub fn new(kind: BodyKind, atoms: Vec<Atom>) -> Self {
        let mut body = Self {
            atoms,
            kind,
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            rotation: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            bonds: Vec::new(),
            bound_radius: 0.0,
            noise_phase: Vec3::ZERO,
        };
        body.recompute_bound_radius();
        body
    }

    /// Recompute `bound_radius` as `max(|atom.offset| + atom.radius)`.
    pub fn recompute_bound_radius(&mut self) {
        self.bound_radius = self
            .atoms
            .iter()
            .map(|a| a.offset.length() + a.radius)
            .fold(0.0, f32::max);
    }

    /// Whether this body takes part in motion updates.
    #[inline]
    pub fn is_free(&self) -> bool {
        self.kind == BodyKind::Free
    }

    /// Advance position and rotation by one frame. Crystal bodies never
    /// move, so this is a no-op for them.
    pub fn integrate(&mut self) {
        if self.is_free() {
            self.position += self.velocity;
            self.rotation += self.angular_velocity;
        }
    }

    /// Current noise phase (for inspection; the motion pass owns advancing it).
    #[inline]
    pub fn noise_phase(&self) -> Vec3 {
        self.noise_phase
    }
}
