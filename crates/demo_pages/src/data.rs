//! Demo datasets: the literal tables and the random chart sampler.

use rand::Rng;
use rand_distr::StandardNormal;
use tabular::{Column, Table};

/// Number of rows in the chart dataset.
pub const CHART_ROWS: usize = 20;

/// Column names of the chart dataset.
pub const CHART_COLUMNS: [&str; 3] = ["a", "b", "c"];

/// The small literal table shown on the overview page.
#[must_use]
pub fn overview_table() -> Table {
    Table::from_columns(vec![
        Column::ints("first column", [1, 2, 3, 4]),
        Column::ints("second column", [10, 20, 30, 40]),
    ])
    .unwrap_or_default()
}

/// The fixed people table written to the artifact and displayed.
#[must_use]
pub fn people_table() -> Table {
    Table::from_columns(vec![
        Column::texts("Name", ["John", "Jane", "Bob"]),
        Column::ints("Age", [25, 30, 35]),
        Column::texts("City", ["New York", "London", "Paris"]),
    ])
    .unwrap_or_default()
}

/// Sample the 20x3 standard-normal chart dataset.
///
/// Generic over the generator so tests can pass a seeded `Pcg64`; the
/// overview page passes a thread-local generator, making every run's
/// chart different by design.
pub fn chart_table<R: Rng + ?Sized>(rng: &mut R) -> Table {
    let columns = CHART_COLUMNS
        .iter()
        .map(|name| {
            let values: Vec<f64> = (0..CHART_ROWS).map(|_| rng.sample(StandardNormal)).collect();
            Column::floats(*name, values)
        })
        .collect();
    Table::from_columns(columns).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64;
    use tabular::Value;

    use super::*;

    #[test]
    fn overview_table_is_the_literal_two_by_four() {
        let table = overview_table();
        assert_eq!(table.column_names(), vec!["first column", "second column"]);
        assert_eq!(table.n_rows(), 4);
        assert_eq!(
            table.row(3).unwrap(),
            vec![&Value::Int(4), &Value::Int(40)]
        );
    }

    #[test]
    fn people_table_holds_the_three_fixed_rows() {
        let table = people_table();
        assert_eq!(table.column_names(), vec!["Name", "Age", "City"]);
        assert_eq!(table.n_rows(), 3);
        assert_eq!(
            table.row(0).unwrap(),
            vec![
                &Value::Text("John".into()),
                &Value::Int(25),
                &Value::Text("New York".into()),
            ]
        );
        assert_eq!(
            table.row(2).unwrap(),
            vec![
                &Value::Text("Bob".into()),
                &Value::Int(35),
                &Value::Text("Paris".into()),
            ]
        );
    }

    #[test]
    fn chart_table_has_the_contracted_shape() {
        let mut rng = Pcg64::seed_from_u64(7);
        let table = chart_table(&mut rng);
        assert_eq!(table.n_rows(), CHART_ROWS);
        assert_eq!(table.column_names(), vec!["a", "b", "c"]);
    }

    #[test]
    fn chart_table_looks_standard_normal() {
        let mut rng = Pcg64::seed_from_u64(42);
        let table = chart_table(&mut rng);

        let values: Vec<f64> = table
            .columns()
            .iter()
            .flat_map(|c| c.values())
            .map(|v| match v {
                Value::Float(f) => *f,
                _ => panic!("chart values must be floats"),
            })
            .collect();

        assert!(values.iter().all(|v| v.is_finite()));
        // 60 samples: loose sanity bounds, not a distribution test.
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        assert!(mean.abs() < 0.6, "mean {mean} too far from 0");
        assert!((0.3..3.0).contains(&var), "variance {var} implausible");
    }

    #[test]
    fn chart_table_is_fresh_per_call() {
        let mut rng = Pcg64::seed_from_u64(42);
        let first = chart_table(&mut rng);
        let second = chart_table(&mut rng);
        assert_ne!(first, second);
    }
}
