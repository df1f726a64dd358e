use mazegraph::{
    count_reachable_cells, dijkstra, generate, is_acyclic, kruskal, prim, topological_order,
    CellState, DiGraphList, DiGraphMatrix, GenerationMethod, GraphList, GraphMatrix, MazeConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const SCENARIO_A: [(usize, usize, u32); 14] = [
    (0, 1, 4),
    (0, 7, 8),
    (1, 2, 8),
    (1, 7, 11),
    (2, 3, 7),
    (2, 8, 2),
    (2, 5, 4),
    (3, 4, 9),
    (3, 5, 14),
    (4, 5, 10),
    (5, 6, 2),
    (6, 7, 1),
    (6, 8, 6),
    (7, 8, 7),
];

const SCENARIO_B: [(usize, usize, u32); 7] = [
    (0, 1, 2),
    (0, 3, 6),
    (1, 2, 3),
    (1, 3, 8),
    (1, 4, 5),
    (2, 4, 7),
    (3, 4, 9),
];

#[test]
fn scenario_a_shortest_path_is_21() {
    let mut matrix = GraphMatrix::new(9);
    let mut list = GraphList::new(9);
    for (u, v, w) in SCENARIO_A {
        matrix.add_edge(u, v, w);
        list.add_edge(u, v, w);
    }

    for result in [dijkstra(&matrix, 0, 4), dijkstra(&list, 0, 4)] {
        assert_eq!(result.distance, Some(21));
        assert_eq!(result.path(), Some(vec![0, 7, 6, 5, 4]));
    }
}

#[test]
fn scenario_b_minimum_spanning_tree_is_16() {
    let mut matrix = GraphMatrix::new(5);
    for (u, v, w) in SCENARIO_B {
        matrix.add_edge(u, v, w);
    }
    let list = GraphList::from(&matrix);

    assert_eq!(prim(&matrix).total_weight, 16);
    assert_eq!(kruskal(&matrix).total_weight, 16);
    assert_eq!(prim(&list).total_weight, 16);
    assert_eq!(kruskal(&list).total_weight, 16);
}

#[test]
fn scenario_c_backtracker_mazes_are_fully_connected() {
    let config = MazeConfig::default();
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let maze = generate(GenerationMethod::Backtracker, &config, &mut rng).unwrap();

        assert_eq!((maze.rows(), maze.columns()), (15, 15));
        assert_eq!(count_reachable_cells(&maze), maze.open_count(), "seed {seed}");
        assert!(maze.has_solution, "seed {seed}");
        assert!(maze.solution_steps >= 28);
        assert_eq!(maze.get(maze.entry()), Some(CellState::Entry));
        assert_eq!(maze.get(maze.exit()), Some(CellState::Exit));
    }
}

#[test]
fn scenario_d_directed_cycle_is_reported() {
    let mut matrix = DiGraphMatrix::new_directed(5);
    let mut list = DiGraphList::new_directed(5);
    for (u, v) in [(0, 1), (1, 2), (2, 3), (3, 1), (3, 4)] {
        matrix.add_edge(u, v, 1);
        list.add_edge(u, v, 1);
    }

    assert_eq!(topological_order(&matrix), None);
    assert_eq!(topological_order(&list), None);
    assert!(!is_acyclic(&list));

    matrix.remove_edge(3, 1);
    assert_eq!(topological_order(&matrix), Some(vec![0, 1, 2, 3, 4]));
}
