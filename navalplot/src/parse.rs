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
//! Parsers for the `--ship` and `--ability` arguments.
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use navalgrid::{
    abilities::{Ability, AbilityKind},
    board::Coordinate,
    ships::{Orientation, Ship},
};

/// Parse a ship written as `ROW,COL DIR`, e.g. `1,2 H` or `6, 1 diagonal-down`.
pub fn parse_ship(input: &str) -> Result<Ship, String> {
    static SHIP: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^(?P<row>[0-9]+)\s*,\s*(?P<col>[0-9]+)\s+(?P<dir>[A-Za-z][A-Za-z _-]*)$")
            .unwrap()
    });
    let captures = SHIP.captures(input.trim()).ok_or_else(|| {
        format!(
            "invalid ship \"{}\", expected ROW,COL DIR such as \"1,2 H\"",
            input
        )
    })?;
    let origin = parse_coordinate(&captures)?;
    let dir = captures.name("dir").unwrap().as_str();
    let orientation: Orientation = dir.parse().map_err(|err| format!("{}", err))?;
    Ok(Ship::new(origin, orientation))
}

/// Parse an ability written as `KIND ROW,COL`, e.g. `cross 5,5` or `Cone at 2,2`.
pub fn parse_ability(input: &str) -> Result<Ability, String> {
    static ABILITY: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^(?i)(?P<kind>[a-z]+)\s+(?:at\s+)?(?P<row>[0-9]+)\s*,\s*(?P<col>[0-9]+)$")
            .unwrap()
    });
    let captures = ABILITY.captures(input.trim()).ok_or_else(|| {
        format!(
            "invalid ability \"{}\", expected KIND ROW,COL such as \"cross 5,5\"",
            input
        )
    })?;
    let kind: AbilityKind = captures
        .name("kind")
        .unwrap()
        .as_str()
        .parse()
        .map_err(|err| format!("{}", err))?;
    Ok(Ability::new(kind, parse_coordinate(&captures)?))
}

/// Pull the `row` and `col` groups out of a match.
fn parse_coordinate(captures: &Captures) -> Result<Coordinate, String> {
    let row = captures.name("row").unwrap().as_str();
    let col = captures.name("col").unwrap().as_str();
    let row = row
        .parse()
        .map_err(|_| format!("invalid row: {}", row))?;
    let col = col
        .parse()
        .map_err(|_| format!("invalid column: {}", col))?;
    Ok(Coordinate::new(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ships_accept_codes_and_names() {
        assert_eq!(
            parse_ship("1,2 H"),
            Ok(Ship::new(Coordinate::new(1, 2), Orientation::Horizontal))
        );
        assert_eq!(
            parse_ship(" 6, 1  diagonal-down "),
            Ok(Ship::new(Coordinate::new(6, 1), Orientation::DiagonalDown))
        );
        assert_eq!(
            parse_ship("2,7 a"),
            Ok(Ship::new(Coordinate::new(2, 7), Orientation::DiagonalUp))
        );
    }

    #[test]
    fn bad_ships_explain_themselves() {
        assert!(parse_ship("1 2 H").unwrap_err().contains("ROW,COL DIR"));
        assert!(parse_ship("1,2 X").unwrap_err().contains("invalid orientation"));
        assert!(parse_ship("99999999999999999999999,2 H")
            .unwrap_err()
            .contains("invalid row"));
    }

    #[test]
    fn out_of_grid_ships_still_parse() {
        // Bounds are the placement engine's job.
        assert!(parse_ship("12,40 V").is_ok());
    }

    #[test]
    fn abilities_parse_with_optional_at() {
        assert_eq!(
            parse_ability("cross 5,5"),
            Ok(Ability::new(AbilityKind::Cross, Coordinate::new(5, 5)))
        );
        assert_eq!(
            parse_ability("Cone AT 2, 2"),
            Ok(Ability::new(AbilityKind::Cone, Coordinate::new(2, 2)))
        );
        assert!(parse_ability("fireball 1,1")
            .unwrap_err()
            .contains("invalid ability"));
        assert!(parse_ability("diamond").is_err());
    }
}
