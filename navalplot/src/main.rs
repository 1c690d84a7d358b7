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
use std::{
    fmt,
    io::{self, Write},
    process,
};

use clap::{App, Arg, ArgMatches};
use log::info;

use navalgrid::{
    abilities::{AbilityKind, Stencil},
    board::{Board, CellState},
    config::SHIP_COUNT,
    scenario::{DeploymentError, Scenario},
    ships::Orientation,
};

use crate::{
    logging::init_logging,
    parse::{parse_ability, parse_ship},
};

mod logging;
mod parse;

/// Exit status when a ship could not be placed.
const EXIT_PLACEMENT_FAILED: i32 = 1;
/// Exit status for malformed arguments.
const EXIT_USAGE: i32 = 2;

fn main() -> io::Result<()> {
    init_logging();
    let matches = App::new("Navalplot")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Places a fleet and its special abilities on a 10x10 grid and prints the result.")
        .arg(
            Arg::with_name("style")
                .short("s")
                .long("style")
                .value_name("STYLE")
                .help("how to draw cells: numeric (0/3/5) or glyph (~~/##/**)")
                .takes_value(true)
                .possible_values(&["numeric", "glyph"])
                .case_insensitive(true)
                .default_value("numeric"),
        )
        .arg(
            Arg::with_name("ship")
                .long("ship")
                .value_name("SHIP")
                .help("replace the standard fleet; ROW,COL DIR with DIR one of H, V, D, A")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .validator(|s| parse_ship(&s).map(|_| ())),
        )
        .arg(
            Arg::with_name("ability")
                .long("ability")
                .value_name("ABILITY")
                .help("replace the standard abilities; KIND ROW,COL with KIND cone, cross, or diamond")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .validator(|s| parse_ability(&s).map(|_| ())),
        )
        .arg(
            Arg::with_name("no_abilities")
                .long("no-abilities")
                .help("skip the ability phase")
                .conflicts_with("ability"),
        )
        .arg(
            Arg::with_name("show_stencils")
                .long("show-stencils")
                .help("print each ability's stencil before the board"),
        )
        .get_matches_safe()
        .unwrap_or_else(|err| {
            if err.use_stderr() {
                eprintln!("{}", err.message);
                process::exit(EXIT_USAGE);
            }
            err.exit()
        });

    let scenario = match build_scenario(&matches) {
        Ok(scenario) => scenario,
        Err(msg) => {
            eprintln!("error: {}", msg);
            process::exit(EXIT_USAGE);
        }
    };
    let style = match matches.value_of("style") {
        Some(style) if style.eq_ignore_ascii_case("glyph") => CellStyle::Glyph,
        _ => CellStyle::Numeric,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if matches.is_present("show_stencils") {
        show_stencils(&mut out, &scenario)?;
    }
    match scenario.deploy() {
        Ok(board) => {
            info!("all {} ships placed", board.ships().len());
            show_report(&mut out, &board, style)
        }
        Err(err) => {
            show_rejections(&mut out, &err)?;
            out.flush()?;
            process::exit(EXIT_PLACEMENT_FAILED);
        }
    }
}

/// Build the scenario from the standard one, applying any overrides from the arguments.
fn build_scenario(matches: &ArgMatches) -> Result<Scenario, String> {
    let mut scenario = Scenario::standard();
    if let Some(values) = matches.values_of("ship") {
        let ships = values.map(parse_ship).collect::<Result<Vec<_>, _>>()?;
        if ships.len() != SHIP_COUNT {
            return Err(format!(
                "exactly {} ships are required, got {}",
                SHIP_COUNT,
                ships.len()
            ));
        }
        scenario = scenario.with_ships(ships);
    }
    if matches.is_present("no_abilities") {
        scenario = scenario.with_abilities(Vec::new());
    } else if let Some(values) = matches.values_of("ability") {
        let abilities = values.map(parse_ability).collect::<Result<Vec<_>, _>>()?;
        scenario = scenario.with_abilities(abilities);
    }
    Ok(scenario)
}

/// How cells are drawn.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum CellStyle {
    /// 0 for water, 3 for ships, 5 for ability cells.
    Numeric,
    /// `~~` for water, `##` for ships, `**` for ability cells.
    Glyph,
}

/// Display helper for a single cell.
struct CellDisplay(CellState, CellStyle);

impl fmt::Display for CellDisplay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match (self.1, self.0) {
            (CellStyle::Numeric, CellState::Empty) => "0",
            (CellStyle::Numeric, CellState::Occupied) => "3",
            (CellStyle::Numeric, CellState::Affected) => "5",
            (CellStyle::Glyph, CellState::Empty) => "~~",
            (CellStyle::Glyph, CellState::Occupied) => "##",
            (CellStyle::Glyph, CellState::Affected) => "**",
        };
        f.pad(text)
    }
}

/// Print the board, the ship and ability summaries, and the statistics.
fn show_report(out: &mut impl Write, board: &Board, style: CellStyle) -> io::Result<()> {
    writeln!(out, "=== BOARD {0}x{0} ===", board.dimensions().size())?;
    match style {
        CellStyle::Numeric => writeln!(out, "0 = water | 3 = ship | 5 = ability")?,
        CellStyle::Glyph => writeln!(out, "~~ = water | ## = ship | ** = ability")?,
    }
    writeln!(out)?;
    show_board(
        out,
        board
            .rows()
            .map(|row| row.map(move |cell| CellDisplay(cell, style))),
    )?;
    writeln!(out)?;

    writeln!(out, "=== SHIPS ===")?;
    for (i, placed) in board.ships().iter().enumerate() {
        let cells: Vec<_> = placed
            .resolved_cells()
            .iter()
            .map(|coord| coord.to_string())
            .collect();
        writeln!(
            out,
            "Ship {} ({}): {}",
            i + 1,
            placed.ship().orientation(),
            cells.join(", ")
        )?;
    }
    writeln!(out)?;

    if !board.abilities().is_empty() {
        writeln!(out, "=== ABILITIES ===")?;
        for applied in board.abilities() {
            writeln!(
                out,
                "{}: {} cells affected",
                applied.ability(),
                applied.applied_cell_count()
            )?;
        }
        writeln!(out)?;
    }

    let dim = board.dimensions();
    writeln!(out, "=== STATISTICS ===")?;
    writeln!(
        out,
        "Board: {0}x{0} ({1} cells)",
        dim.size(),
        dim.total_size()
    )?;
    writeln!(out, "Ships placed: {}", board.ships().len())?;
    writeln!(out, "Occupied cells: {}", board.count(CellState::Occupied))?;
    writeln!(out, "Affected cells: {}", board.count(CellState::Affected))?;
    writeln!(out, "Empty cells: {}", board.count(CellState::Empty))?;
    let orientations: Vec<_> = Orientation::ALL
        .iter()
        .filter(|&&o| board.orientations().contains(o))
        .map(|o| o.name())
        .collect();
    writeln!(out, "Orientations used: {}", orientations.join(", "))?;
    if !board.ability_kinds().is_empty() {
        let kinds: Vec<_> = AbilityKind::ALL
            .iter()
            .filter(|&&k| board.ability_kinds().contains(k))
            .map(|k| k.name())
            .collect();
        writeln!(out, "Abilities used: {}", kinds.join(", "))?;
    }
    Ok(())
}

/// Print every rejected ship.
fn show_rejections(out: &mut impl Write, err: &DeploymentError) -> io::Result<()> {
    for rejection in err.rejected() {
        writeln!(out, "ERROR: {}", rejection)?;
    }
    writeln!(
        out,
        "ERROR: not every ship could be placed ({} of {} rejected)",
        err.rejected().len(),
        err.attempted()
    )
}

/// Print the stencil of each distinct ability kind in the scenario.
fn show_stencils(out: &mut impl Write, scenario: &Scenario) -> io::Result<()> {
    let mut shown = Vec::new();
    for ability in scenario.abilities() {
        let kind = ability.kind();
        if shown.contains(&kind) {
            continue;
        }
        shown.push(kind);
        writeln!(out, "=== {} STENCIL ===", kind.name().to_uppercase())?;
        show_stencil(out, kind.stencil())?;
        writeln!(out)?;
    }
    Ok(())
}

fn show_stencil(out: &mut impl Write, stencil: &Stencil) -> io::Result<()> {
    for row in stencil.rows() {
        let line: Vec<_> = row
            .iter()
            .map(|&set| if set { "1" } else { "0" })
            .collect();
        writeln!(out, "{}", line.join(" "))?;
    }
    Ok(())
}

/// Show the board by printing the grid. Takes an iterator over the rows of iterators over
/// the items.
fn show_board(
    out: &mut impl Write,
    rows: impl Iterator<Item = impl Iterator<Item = impl fmt::Display>>,
) -> io::Result<()> {
    for (i, row) in rows.enumerate() {
        let cells: Vec<String> = row.map(|cell| format!("{:^4}", cell)).collect();
        if i == 0 {
            write!(out, "   ")?;
            for col in 0..cells.len() {
                write!(out, "{:^4}", col)?;
            }
            writeln!(out)?;
        }
        writeln!(out, "{:>2} {}", i, cells.concat())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use navalgrid::{board::Coordinate, ships::Ship};

    fn render(board: &Board, style: CellStyle) -> String {
        let mut buf = Vec::new();
        show_report(&mut buf, board, style).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn numeric_board_matches_cell_states() {
        let board = Scenario::standard().deploy().unwrap();
        let text = render(&board, CellStyle::Numeric);
        let row1 = text
            .lines()
            .find(|line| line.starts_with(" 1 "))
            .unwrap();
        // Row 1: cone at columns 1..=3, then the horizontal ship covers 2..=4.
        let cells: Vec<_> = row1.split_whitespace().skip(1).collect();
        assert_eq!(cells, vec!["0", "5", "3", "3", "3", "0", "0", "0", "0", "0"]);
        assert!(text.contains("Ship 4 (Diagonal Up): (2,7), (3,6), (4,5)"));
        assert!(text.contains("Cross at (5,5): 8 cells affected"));
        assert!(text.contains("Occupied cells: 12"));
        assert!(text.contains("Orientations used: Horizontal, Vertical, Diagonal Down, Diagonal Up"));
    }

    #[test]
    fn glyph_board_has_header_and_ten_rows() {
        let board = Scenario::standard().with_abilities(Vec::new()).deploy().unwrap();
        let text = render(&board, CellStyle::Glyph);
        assert!(text.contains("##"));
        assert!(text.contains("Affected cells: 0"));
        assert!(!text.contains("=== ABILITIES ==="));
        let board_lines = text
            .lines()
            .skip_while(|line| !line.starts_with("   "))
            .take_while(|line| !line.is_empty())
            .count();
        assert_eq!(board_lines, 11);
    }

    #[test]
    fn rejections_are_listed() {
        let scenario = Scenario::standard().with_ships(vec![
            Ship::new(Coordinate::new(1, 2), Orientation::Horizontal),
            Ship::new(Coordinate::new(1, 3), Orientation::Vertical),
            Ship::new(Coordinate::new(9, 9), Orientation::Horizontal),
            Ship::new(Coordinate::new(5, 5), Orientation::Vertical),
        ]);
        let err = scenario.deploy().unwrap_err();
        let mut buf = Vec::new();
        show_rejections(&mut buf, &err).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("could not place ship (1,3) Vertical"));
        assert!(text.contains("could not place ship (9,9) Horizontal"));
        assert!(text.contains("(2 of 4 rejected)"));
    }

    #[test]
    fn stencils_are_printed_once_per_kind() {
        let scenario = Scenario::standard().with_abilities(vec![
            parse_ability("cross 1,1").unwrap(),
            parse_ability("cross 8,8").unwrap(),
        ]);
        let mut buf = Vec::new();
        show_stencils(&mut buf, &scenario).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.matches("STENCIL").count(), 1);
        assert!(text.contains("1 1 1 1 1"));
    }
}
