//! Session transcript tests.
//!
//! Each test feeds a complete input stream through `Session` and compares
//! the exact output lines.

use dig_contest::error::{ContestError, SessionError, SetupError};
use dig_contest::session::{RosterBook, Session};

const ROSTER: &str = "\
2
Os Cavadores
Amy
Bo
1
Solitarios
Cy
3
Trio Terrivel
Dee
Eli
Fay
";

fn run(input: &str) -> String {
    let roster = RosterBook::parse(ROSTER).unwrap();
    let mut output = Vec::new();
    Session::new(input.as_bytes(), &mut output)
        .run(&roster)
        .unwrap();
    String::from_utf8(output).unwrap()
}

// =============================================================================
// Commands
// =============================================================================

#[test]
fn test_terrain_and_wealth() {
    let out = run("2 3\n5 0 0\n0 0 8\n1\n2\nterreno\nriqueza\nsair\n");
    assert_eq!(
        out,
        "*--\n--*\nRiqueza enterrada: 13\nAinda havia tesouros por descobrir...\n"
    );
}

#[test]
fn test_dig_updates_ranking() {
    let out = run("\
2 2
10 0 5 0
2
1 3
escavacao 1 1 Os Cavadores
escavacao 2 1 Trio Terrivel
classificacao
terreno
sair
");
    assert_eq!(
        out,
        "\
Os Cavadores: 10 pts; 0 descl.; 2 com lic.
Trio Terrivel: 5 pts; 0 descl.; 3 com lic.
--
--
Todos os tesouros foram descobertos!
"
    );
}

#[test]
fn test_invalid_jump_and_team() {
    let out = run("1 1\n3\n1\n2\nescavacao 0 0 Solitarios\nescavacao 1 1 Ninguem\nsair\n");
    assert_eq!(
        out,
        "Salto invalido\nEquipa invalida\nAinda havia tesouros por descobrir...\n"
    );
}

#[test]
fn test_expulsion_and_empty_ranking() {
    let out = run("\
1 1
3
1
2
escavacao 0 1 Solitarios
classificacao
estrela Solitarios
sair
");
    assert_eq!(
        out,
        "\
Solitarios foi expulsa
Todas as equipas foram expulsas.
Equipa invalida
Todas as equipas foram expulsas.
"
    );
}

#[test]
fn test_star_follows_merit() {
    let out = run("\
1 2
4 9
1
1
estrela Os Cavadores
escavacao 1 1 Os Cavadores
escavacao 1 2 Os Cavadores
estrela Os Cavadores
sair
");
    assert_eq!(
        out,
        "\
Estrela de Os Cavadores: Amy
Estrela de Os Cavadores: Bo
Todos os tesouros foram descobertos!
"
    );
}

#[test]
fn test_disqualified_player_loses_star_and_team_score() {
    let out = run("\
1 2
4 9
1
1
escavacao 1 2 Os Cavadores
escavacao 1 1 Os Cavadores
escavacao 5 5 Os Cavadores
classificacao
estrela Os Cavadores
sair
");
    assert_eq!(
        out,
        "\
Os Cavadores: 4 pts; 1 descl.; 1 com lic.
Estrela de Os Cavadores: Bo
Todos os tesouros foram descobertos!
"
    );
}

#[test]
fn test_jump_past_coordinate_range_expels() {
    let out = run("1 1\n3\n1\n2\nescavacao -9223372036854775808 1 Solitarios\nsair\n");
    assert_eq!(out, "Solitarios foi expulsa\nTodas as equipas foram expulsas.\n");
}

#[test]
fn test_unknown_command_discards_line() {
    let out = run("1 1\n0\n1\n2\ndance 1 2 3\nriqueza\n");
    assert_eq!(
        out,
        "Comando invalido\nRiqueza enterrada: 0\nTodos os tesouros foram descobertos!\n"
    );
}

#[test]
fn test_end_of_input_acts_as_exit() {
    let out = run("1 1\n2\n1\n2\n");
    assert_eq!(out, "Ainda havia tesouros por descobrir...\n");
}

// =============================================================================
// Setup failures
// =============================================================================

#[test]
fn test_unknown_roster_entry() {
    let roster = RosterBook::parse(ROSTER).unwrap();
    let mut output = Vec::new();
    let err = Session::new("1 1\n0\n1\n9\n".as_bytes(), &mut output)
        .run(&roster)
        .unwrap_err();
    assert!(matches!(
        err,
        SessionError::UnknownRosterEntry { index: 9, available: 3 }
    ));
}

#[test]
fn test_truncated_setup() {
    let roster = RosterBook::parse(ROSTER).unwrap();
    let mut output = Vec::new();
    let err = Session::new("2 2\n1 2 3\n".as_bytes(), &mut output)
        .run(&roster)
        .unwrap_err();
    assert!(matches!(err, SessionError::UnexpectedEof { expected: "plot worth" }));
}

#[test]
fn test_oversized_grid_header() {
    let roster = RosterBook::parse(ROSTER).unwrap();
    let mut output = Vec::new();
    let err = Session::new("18446744073709551615 2\n".as_bytes(), &mut output)
        .run(&roster)
        .unwrap_err();
    assert!(matches!(
        err,
        SessionError::Contest(ContestError::Setup(SetupError::GridTooLarge { cols: 2, .. }))
    ));
    assert!(output.is_empty());
}

#[test]
fn test_empty_roster_team_is_expelled_on_first_dig() {
    let roster = RosterBook::parse("0\nFantasmas\n").unwrap();
    let mut output = Vec::new();
    let contest = Session::new(
        "1 1\n1\n1\n1\nescavacao 1 1 Fantasmas\nsair\n".as_bytes(),
        &mut output,
    )
    .run(&roster)
    .unwrap();

    assert_eq!(contest.team_count(), 0);
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "Fantasmas foi expulsa\nTodas as equipas foram expulsas.\n"
    );
}
