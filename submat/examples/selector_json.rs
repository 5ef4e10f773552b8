//! Serializes selector descriptors to JSON and resolves a deserialized one.
//!
//! Run with: cargo run --example selector_json --features serde

use submat::{get_submatrix, AxisSelector, Matrix, Selector, SelectorKind};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let kinds = vec![
        SelectorKind::Cells {
            rows: AxisSelector::Range(2, AxisSelector::TO_END),
            cols: AxisSelector::Element(1),
        },
        SelectorKind::Cells {
            rows: AxisSelector::IndexList(vec![-1, -3]),
            cols: AxisSelector::All,
        },
        SelectorKind::Diagonal,
    ];

    for kind in &kinds {
        println!("{}", serde_json::to_string_pretty(kind)?);
    }

    // Round-trip one descriptor and use it
    let json = serde_json::to_string(&kinds[0])?;
    let kind: SelectorKind = serde_json::from_str(&json)?;
    let mut selector = Selector::from(kind);

    let m = Matrix::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3, 2).map_err(|e| e.to_string())?;
    let sub = get_submatrix(&m, &mut selector).map_err(|e| e.to_string())?;
    println!("Resolved selection:\n{sub}");

    Ok(())
}
