use super::*;

fn sq(s: &str) -> Coordinate {
    Coordinate::from_algebraic(s).unwrap()
}

#[test]
fn test_start_position_ascii() {
    let text = render(&Board::standard_setup(), RenderOptions::default());
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "8  r  n  b  q  k  b  n  r");
    assert_eq!(lines[4], "4  .  .  .  .  .  .  .  .");
    assert_eq!(lines[7], "1  R  N  B  Q  K  B  N  R");
    assert_eq!(lines[8], "   a  b  c  d  e  f  g  h");
}

#[test]
fn test_without_coordinates() {
    let options = RenderOptions {
        unicode: false,
        coordinates: false,
    };
    let text = render(&Board::standard_setup(), options);
    assert_eq!(text.lines().count(), 8);
    assert_eq!(text.lines().next(), Some(" r  n  b  q  k  b  n  r"));
}

#[test]
fn test_unicode_glyphs() {
    let options = RenderOptions {
        unicode: true,
        coordinates: false,
    };
    let text = render(&Board::standard_setup(), options);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], " ♜  ♞  ♝  ♛  ♚  ♝  ♞  ♜");
    assert_eq!(lines[6], " ♙  ♙  ♙  ♙  ♙  ♙  ♙  ♙");
    assert!(lines[3].contains('·'));
}

#[test]
fn test_highlight_markers() {
    let mut board = Board::standard_setup();
    board.highlight(sq("E2"), Highlight::Selected).unwrap();
    board.highlight(sq("E3"), Highlight::Target).unwrap();
    board.highlight(sq("E4"), Highlight::Target).unwrap();

    let text = render(&board, RenderOptions::default());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[6], "2  P  P  P  P [P] P  P  P");
    assert_eq!(lines[5], "3  .  .  .  . (.) .  .  .");
    assert_eq!(lines[4], "4  .  .  .  . (.) .  .  .");

    board.clear_highlights();
    assert!(!render(&board, RenderOptions::default()).contains('['));
}

#[test]
fn test_two_digit_ranks_align() {
    let board = Board::new(3, 10);
    let text = render(&board, RenderOptions::default());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "10  .  .  .");
    assert_eq!(lines[9], " 1  .  .  .");
    assert_eq!(lines[10], "    a  b  c");
}
