// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Area-of-effect abilities and the stencils they stamp onto the grid.
use std::{fmt, str::FromStr};

use enumflags2::BitFlags;
use once_cell::sync::Lazy;
use thiserror::Error;

use crate::{board::Coordinate, config::STENCIL_SIZE};

pub use self::stencil::{generate_stencil, Stencil};

mod stencil;

/// Stencils for every kind at [`STENCIL_SIZE`], in `AbilityKind::index` order.
static STANDARD_STENCILS: Lazy<[Stencil; 3]> = Lazy::new(|| {
    [
        generate_stencil(AbilityKind::Cone, STENCIL_SIZE),
        generate_stencil(AbilityKind::Cross, STENCIL_SIZE),
        generate_stencil(AbilityKind::Diamond, STENCIL_SIZE),
    ]
});

/// Shape of an ability's area of effect.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum AbilityKind {
    /// Point at the top, widening downward.
    Cone = 0b001,
    /// Middle row and middle column.
    Cross = 0b010,
    /// Manhattan ball around the center.
    Diamond = 0b100,
}

impl AbilityKind {
    /// All kinds, in declaration order.
    pub const ALL: [AbilityKind; 3] = [AbilityKind::Cone, AbilityKind::Cross, AbilityKind::Diamond];

    fn index(self) -> usize {
        match self {
            AbilityKind::Cone => 0,
            AbilityKind::Cross => 1,
            AbilityKind::Diamond => 2,
        }
    }

    /// Human readable name.
    pub fn name(self) -> &'static str {
        match self {
            AbilityKind::Cone => "Cone",
            AbilityKind::Cross => "Cross",
            AbilityKind::Diamond => "Diamond",
        }
    }

    /// The stencil for this kind at the standard size. Generated on first use.
    pub fn stencil(self) -> &'static Stencil {
        &STANDARD_STENCILS[self.index()]
    }
}

impl FromStr for AbilityKind {
    type Err = ParseAbilityKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AbilityKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseAbilityKindError {
                input: s.to_owned(),
            })
    }
}

impl fmt::Display for AbilityKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Error returned when an ability name is not recognized.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("invalid ability {input:?}, expected cone, cross, or diamond")]
pub struct ParseAbilityKindError {
    input: String,
}

impl ParseAbilityKindError {
    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// An ability to stamp onto the grid: its kind and the cell its stencil is centered on.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Ability {
    kind: AbilityKind,
    origin: Coordinate,
}

impl Ability {
    /// Construct an ability of the given kind centered on `origin`.
    pub const fn new(kind: AbilityKind, origin: Coordinate) -> Self {
        Self { kind, origin }
    }

    pub fn kind(&self) -> AbilityKind {
        self.kind
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    /// The stencil this ability stamps.
    pub fn stencil(&self) -> &'static Stencil {
        self.kind.stencil()
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.origin)
    }
}

/// Collect the distinct kinds used by a sequence of abilities.
pub fn kinds_used<'a>(abilities: impl IntoIterator<Item = &'a Ability>) -> BitFlags<AbilityKind> {
    abilities
        .into_iter()
        .fold(BitFlags::empty(), |kinds, ability| kinds | ability.kind())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cached_stencils_match_generator() {
        for &kind in AbilityKind::ALL.iter() {
            assert_eq!(kind.stencil(), &generate_stencil(kind, STENCIL_SIZE));
        }
    }

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!("CONE".parse(), Ok(AbilityKind::Cone));
        assert_eq!(" diamond ".parse(), Ok(AbilityKind::Diamond));
        let err = "fireball".parse::<AbilityKind>().unwrap_err();
        assert_eq!(err.input(), "fireball");
    }

    #[test]
    fn kinds_used_deduplicates() {
        let abilities = [
            Ability::new(AbilityKind::Cross, Coordinate::new(0, 0)),
            Ability::new(AbilityKind::Cross, Coordinate::new(5, 5)),
        ];
        let kinds = kinds_used(abilities.iter());
        assert!(kinds.contains(AbilityKind::Cross));
        assert!(!kinds.contains(AbilityKind::Cone));
        assert_eq!(kinds_used(None), BitFlags::empty());
    }
}
