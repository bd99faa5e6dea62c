use rustc_hash::FxHashSet;

use knights_tour::core::coord::{Coord, KNIGHT_DELTAS};
use knights_tour::search::warnsdorff::{tour, TourEngine};
use knights_tour::Tour;

const BOARDS: [(u32, u32); 9] = [
    (1, 1),
    (2, 5),
    (3, 3),
    (3, 4),
    (4, 4),
    (5, 5),
    (7, 7),
    (8, 8),
    (10, 7),
];

fn for_each_tour(mut f: impl FnMut(Coord, &Tour)) {
    for (w, h) in BOARDS {
        for col in 0..w as i32 {
            for row in 0..h as i32 {
                let start = Coord::new(col, row);
                let t = tour(start, w, h).unwrap();
                f(start, &t);
            }
        }
    }
}

#[test]
fn consecutive_cells_are_knight_jumps() {
    for_each_tour(|start, t| {
        for pair in t.route().windows(2) {
            let d = pair[1] - pair[0];
            assert!(
                KNIGHT_DELTAS.contains(&d),
                "{}x{} from {start}: {} -> {} is not a knight move",
                t.width(),
                t.height(),
                pair[0],
                pair[1]
            );
        }
    });
}

#[test]
fn no_cell_is_visited_twice() {
    for_each_tour(|start, t| {
        let distinct: FxHashSet<Coord> = t.route().iter().copied().collect();
        assert_eq!(distinct.len(), t.len(), "repeat in tour from {start}");
    });
}

#[test]
fn routes_start_at_start_and_stay_bounded() {
    for_each_tour(|start, t| {
        assert_eq!(t.start(), start);
        assert!(t.len() >= 1);
        assert!(t.len() <= t.cell_count());
        for c in t.route() {
            assert!(c.col >= 0 && (c.col as u32) < t.width());
            assert!(c.row >= 0 && (c.row as u32) < t.height());
        }
    });
}

#[test]
fn verify_agrees_with_the_laws() {
    for_each_tour(|_, t| t.verify().unwrap());
}

#[test]
fn same_input_same_route() {
    for_each_tour(|start, t| {
        let again = tour(start, t.width(), t.height()).unwrap();
        assert_eq!(&again, t);
        assert_eq!(again.into_route(), t.route());
    });
}

#[test]
fn a_stuck_route_really_has_no_exit() {
    // The last cell of every route must have no unvisited knight neighbour on the board.
    for_each_tour(|_, t| {
        let visited: FxHashSet<Coord> = t.route().iter().copied().collect();
        let last = *t.route().last().unwrap();
        for d in KNIGHT_DELTAS {
            let c = last + d;
            let on_board =
                c.col >= 0 && c.row >= 0 && (c.col as u32) < t.width() && (c.row as u32) < t.height();
            assert!(!on_board || visited.contains(&c));
        }
    });
}

#[test]
fn step_count_is_bounded_by_board_size() {
    for (w, h) in BOARDS {
        let mut engine = TourEngine::new(Coord::ORIGIN, w, h).unwrap();
        let mut steps = 0usize;
        while engine.step().is_some() {
            steps += 1;
            assert!(steps < (w * h) as usize);
        }
        assert!(engine.is_terminated());
        assert_eq!(engine.counts().steps as usize, steps);
        assert_eq!(engine.route().len(), steps + 1);
        assert_eq!(engine.board().visited_count(), steps + 1);
    }
}
