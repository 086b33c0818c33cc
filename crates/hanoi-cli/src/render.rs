use hanoi_core::{Board, Ring, Tower};
use hanoi_game::Game;

const MIN_CELL_WIDTH: usize = 5;

/// Renders the live board as columns of rings over numbered tower bases,
/// followed by the move count.
pub(crate) fn render_game(game: &Game) -> String {
    let mut out = render_board(game.board(), game.dimensions().set_count > 1);
    out.push_str(&format!("Moves: {}\n", game.move_count()));
    out
}

/// Renders a board with the top of each tower facing up.
///
/// Rings are labelled by size, plus their set when `show_sets` is on. Every
/// tower keeps an empty pole segment above its topmost ring.
pub(crate) fn render_board(board: &Board, show_sets: bool) -> String {
    let label = |ring: Ring| {
        if show_sets {
            ring.to_string()
        } else {
            ring.size().to_string()
        }
    };
    let width = board
        .rings()
        .map(|ring| label(ring).len() + 2)
        .max()
        .unwrap_or(0)
        .max(MIN_CELL_WIDTH);
    let height = board.towers().iter().map(Tower::len).max().unwrap_or(0) + 1;

    let mut out = String::new();
    for row in 0..height {
        let cells = board.towers().iter().map(|tower| {
            let gap = height - tower.len();
            match row.checked_sub(gap).and_then(|depth| tower.iter().nth(depth)) {
                Some(ring) => label(ring),
                None => "|".to_owned(),
            }
        });
        push_row(&mut out, cells, width, ' ');
    }
    push_row(
        &mut out,
        board.towers().iter().map(|_| "+".to_owned()),
        width,
        '-',
    );
    push_row(
        &mut out,
        (0..board.tower_count()).map(|i| i.to_string()),
        width,
        ' ',
    );
    out
}

fn push_row<I>(out: &mut String, cells: I, width: usize, fill: char)
where
    I: Iterator<Item = String>,
{
    let mut line = String::new();
    for cell in cells {
        line.push(' ');
        let padding = width.saturating_sub(cell.chars().count());
        let left = padding / 2;
        line.extend(std::iter::repeat_n(fill, left));
        line.push_str(&cell);
        line.extend(std::iter::repeat_n(fill, padding - left));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
