use std::io::Write;

use proptest::prelude::*;
use u_citydist::loader::{load_table, parse_table};
use u_citydist::models::get_initials;
use u_citydist::render::render;
use u_citydist::TableError;

/// Builds file text for `n` cities with initials A, B, C... and the given
/// lower-triangle values in row order.
fn table_text(n: usize, cells: &[u64]) -> String {
    let names: Vec<String> = (0..n)
        .map(|i| format!("{}town{}", (b'A' + i as u8) as char, i))
        .collect();
    let mut text = format!("cities {}\n", names[0]);
    let mut next = 0;
    for (r, name) in names.iter().enumerate().skip(1) {
        text.push_str(name);
        for d in &cells[next..next + r] {
            text.push_str(&format!(" {d}"));
        }
        next += r;
        text.push('\n');
    }
    text
}

fn table_strategy() -> impl Strategy<Value = (usize, Vec<u64>)> {
    (1usize..12).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec(0u64..100_000, n * (n - 1) / 2),
        )
    })
}

proptest! {
    #[test]
    fn loaded_rows_are_triangular((n, cells) in table_strategy()) {
        let t = parse_table(&table_text(n, &cells)).unwrap();
        prop_assert_eq!(t.len(), n);
        for r in 0..n {
            prop_assert_eq!(t.row(r).unwrap().len(), r);
        }
    }

    #[test]
    fn distance_is_symmetric((n, cells) in table_strategy()) {
        let t = parse_table(&table_text(n, &cells)).unwrap();
        let names = t.all_cities();
        for a in names {
            for b in names {
                if a != b {
                    prop_assert_eq!(t.distance(a, b).unwrap(), t.distance(b, a).unwrap());
                }
            }
        }
    }

    #[test]
    fn filter_by_all_initials_is_identity((n, cells) in table_strategy()) {
        let t = parse_table(&table_text(n, &cells)).unwrap();
        let f = t.filtered(&get_initials(t.all_cities())).unwrap();
        prop_assert_eq!(f, t);
    }

    #[test]
    fn reversed_subset_keeps_pairwise_distances((n, cells) in table_strategy()) {
        let t = parse_table(&table_text(n, &cells)).unwrap();
        let subset: Vec<String> = t.all_cities().iter().rev().cloned().collect();
        let r = t.reduced(&subset).unwrap();
        for (i, row) in r.matrix().rows().enumerate() {
            prop_assert_eq!(row.len(), i + 1);
        }
        for a in &subset {
            for b in &subset {
                if a != b {
                    prop_assert_eq!(r.distance(a, b).unwrap(), t.distance(a, b).unwrap());
                }
            }
        }
    }

    #[test]
    fn render_places_each_value_once((n, cells) in table_strategy()) {
        let t = parse_table(&table_text(n, &cells)).unwrap();
        let text = render(&t);
        let lines: Vec<&str> = text.lines().collect();
        prop_assert_eq!(lines.len(), n);
        for (r, line) in lines.iter().enumerate().skip(1) {
            let fields: Vec<&str> = line.split_whitespace().collect();
            prop_assert_eq!(fields[0], t.all_cities()[r].as_str());
            let values: Vec<u64> = fields[1..].iter().map(|f| f.parse().unwrap()).collect();
            prop_assert_eq!(values.as_slice(), t.row(r).unwrap());
        }
    }
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "cidades Aveiro\nBraga 123\nCoimbra 63 178\nLisboa 255 364 203\nPorto 70 55 118 313\n"
    )
    .unwrap();

    let t = load_table(file.path()).unwrap();
    assert_eq!(t.initials(), "ABCLP");
    assert_eq!(t.distance("Lisboa", "Porto").unwrap(), 313);
    assert_eq!(t.distance("Porto", "Aveiro").unwrap(), 70);

    let f = t.filtered("LAP").unwrap();
    assert_eq!(f.all_cities(), ["Lisboa", "Aveiro", "Porto"]);
    assert_eq!(
        render(&f),
        concat!(
            "             Lisboa    Aveiro\n",
            "   Aveiro       255\n",
            "    Porto       313        70\n",
        )
    );
}

#[test]
fn test_truncated_file_yields_no_table() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "x A\nB 1\nC 2\nD 3 4 5\n").unwrap();
    assert!(matches!(
        load_table(file.path()),
        Err(TableError::Parse { line: 3, .. })
    ));
}

#[test]
fn test_abc_distances_and_reduction() {
    let t = parse_table("- A\nB 5\nC 3 4\n").unwrap();
    assert_eq!(t.distance("A", "C").unwrap(), 3);
    assert_eq!(t.distance("B", "C").unwrap(), 4);
    assert_eq!(get_initials(&["Alpha", "Boston"]), "AB");

    let r = t.reduced(&["C", "A"]).unwrap();
    assert_eq!(r.all_cities(), ["C", "A"]);
    assert_eq!(r.matrix().rows().collect::<Vec<_>>(), vec![&[3u64][..]]);
}
