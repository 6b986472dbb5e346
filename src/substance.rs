//! Built-in substances: the molecules and the ionic lattice the demo shows.
//!
//! All geometry here is simple constructive placement - two overlapping
//! spheres for a diatomic gas, one sphere for a noble gas, an alternating
//! Na/Cl cube for the rock-salt crystal. Sizes and spacings are tuned for
//! looks, not chemistry.

use crate::body::{Atom, Body, BodyKind, Element};
use crate::spawn::SpawnContext;
use crate::Vec3;

/// Atom display colors, RGB 0-1.
pub const COLOR_H: Vec3 = Vec3::new(220.0 / 255.0, 40.0 / 255.0, 40.0 / 255.0);
pub const COLOR_CL: Vec3 = Vec3::new(40.0 / 255.0, 180.0 / 255.0, 40.0 / 255.0);
pub const COLOR_NA: Vec3 = Vec3::new(245.0 / 255.0, 210.0 / 255.0, 60.0 / 255.0);
pub const COLOR_HE: Vec3 = Vec3::new(80.0 / 255.0, 170.0 / 255.0, 255.0 / 255.0);
pub const COLOR_NE: Vec3 = Vec3::new(170.0 / 255.0, 80.0 / 255.0, 255.0 / 255.0);
/// Bond cylinder color, for the host renderer.
pub const COLOR_BOND: Vec3 = Vec3::new(200.0 / 255.0, 200.0 / 255.0, 200.0 / 255.0);

/// Atom radius used by the diatomic factories.
const DIATOMIC_RADIUS: f32 = 12.0;
/// Fraction of the summed radii kept between diatomic atom centers, so the
/// two spheres visibly fuse.
const DIATOMIC_OVERLAP: f32 = 0.72;
/// Atom radius used by the monoatomic factory.
const MONO_RADIUS: f32 = 14.0;
/// Lattice atom radius and spacing for the rock-salt crystal.
const LATTICE_RADIUS: f32 = 9.0;
const LATTICE_SPACING: f32 = 18.0;
const LATTICE_EDGE: u32 = 4;

/// The selectable substances, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Substance {
    H2,
    Cl2,
    HCl,
    NaCl,
    He,
    Ne,
}

impl Substance {
    /// All substances in the order the selector shows them.
    pub const ALL: [Substance; 6] = [
        Substance::H2,
        Substance::Cl2,
        Substance::HCl,
        Substance::NaCl,
        Substance::He,
        Substance::Ne,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Substance::H2 => "H2",
            Substance::Cl2 => "Cl2",
            Substance::HCl => "HCl",
            Substance::NaCl => "NaCl",
            Substance::He => "He",
            Substance::Ne => "Ne",
        }
    }

    /// How many bodies this substance's region holds.
    pub fn body_count(self) -> u32 {
        match self {
            Substance::NaCl => 1,
            _ => 5,
        }
    }

    /// Whether this substance's region skips per-frame physics.
    pub fn is_static(self) -> bool {
        matches!(self, Substance::NaCl)
    }

    /// Build one body of this substance.
    pub fn build(self, ctx: &mut SpawnContext) -> Body {
        match self {
            Substance::H2 => diatomic(Element::H, Element::H, COLOR_H, COLOR_H, ctx),
            Substance::Cl2 => diatomic(Element::Cl, Element::Cl, COLOR_CL, COLOR_CL, ctx),
            Substance::HCl => diatomic(Element::H, Element::Cl, COLOR_H, COLOR_CL, ctx),
            Substance::NaCl => rock_salt(LATTICE_EDGE, LATTICE_SPACING, ctx),
            Substance::He => monoatomic(Element::He, COLOR_HE, ctx),
            Substance::Ne => monoatomic(Element::Ne, COLOR_NE, ctx),
        }
    }
}

impl std::fmt::Display for Substance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn atom(offset: Vec3, color: Vec3, radius: f32, element: Element, ctx: &mut SpawnContext) -> Atom {
    let mut a = Atom::new(offset, color, radius, Some(element));
    a.glow_phase = ctx.random_range(0.0, 1000.0);
    a
}

/// Two-atom molecule along its local x-axis, atoms partially fused.
pub fn diatomic(
    element_a: Element,
    element_b: Element,
    color_a: Vec3,
    color_b: Vec3,
    ctx: &mut SpawnContext,
) -> Body {
    let dist = (DIATOMIC_RADIUS + DIATOMIC_RADIUS) * DIATOMIC_OVERLAP;
    let half = dist * 0.5;
    Body::new(
        BodyKind::Free,
        vec![
            atom(
                Vec3::new(-half, 0.0, 0.0),
                color_a,
                DIATOMIC_RADIUS,
                element_a,
                ctx,
            ),
            atom(
                Vec3::new(half, 0.0, 0.0),
                color_b,
                DIATOMIC_RADIUS,
                element_b,
                ctx,
            ),
        ],
    )
}

/// Single-atom body at the origin.
pub fn monoatomic(element: Element, color: Vec3, ctx: &mut SpawnContext) -> Body {
    Body::new(
        BodyKind::Free,
        vec![atom(Vec3::ZERO, color, MONO_RADIUS, element, ctx)],
    )
}

/// Rock-salt lattice: an `n`³ cube of alternating Na/Cl atoms centered on
/// the origin, with bonds between axis neighbors of opposite charge.
pub fn rock_salt(n: u32, spacing: f32, ctx: &mut SpawnContext) -> Body {
    let n = n as i32;
    let half = (n - 1) as f32 / 2.0 * spacing;
    let mut atoms = Vec::with_capacity((n * n * n) as usize);
    for x in 0..n {
        for y in 0..n {
            for z in 0..n {
                let sodium = (x + y + z) % 2 == 0;
                let (element, color) = if sodium {
                    (Element::Na, COLOR_NA)
                } else {
                    (Element::Cl, COLOR_CL)
                };
                atoms.push(atom(
                    Vec3::new(
                        x as f32 * spacing - half,
                        y as f32 * spacing - half,
                        z as f32 * spacing - half,
                    ),
                    color,
                    LATTICE_RADIUS,
                    element,
                    ctx,
                ));
            }
        }
    }

    let idx = |x: i32, y: i32, z: i32| (x * n * n + y * n + z) as usize;
    let mut bonds = Vec::new();
    for x in 0..n {
        for y in 0..n {
            for z in 0..n {
                let i = idx(x, y, z);
                for (nx, ny, nz) in [(x + 1, y, z), (x, y + 1, z), (x, y, z + 1)] {
                    if nx < n && ny < n && nz < n {
                        let j = idx(nx, ny, nz);
                        // Axis neighbors always alternate parity, so every
                        // lattice bond joins Na to Cl.
                        if atoms[i].element != atoms[j].element {
                            bonds.push((i, j));
                        }
                    }
                }
            }
        }
    }

    let mut body = Body::new(BodyKind::Crystal, atoms);
    body.bonds = bonds;
    body
}
