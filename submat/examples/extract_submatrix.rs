//! Demonstrates selector construction, extraction, and in-place mutation.

use submat::{assign_scalar, get_submatrix, replace_submatrix, AxisSelector, Matrix, Selector};

fn main() -> submat::Result<()> {
    // A 4x3 matrix, column by column
    let mut m = Matrix::new(
        vec![
            1.0, 2.0, 3.0, 4.0, // column 1
            5.0, 6.0, 7.0, 8.0, // column 2
            9.0, 10.0, 11.0, 12.0, // column 3
        ],
        4,
        3,
    )?;
    m.set_col_names(vec!["x".into(), "y".into(), "z".into()])?;

    println!("Source matrix:\n{m}");

    // M[2:3, 2] resolves to a contiguous run of column-major storage
    let mut sel = Selector::new(AxisSelector::Range(2, 3), AxisSelector::Element(2));
    let block = get_submatrix(&m, &mut sel)?;
    println!("M[2:3, 2]:\n{block}");

    // M[-2, ] drops row 2; columns are fully preserved, so names carry over
    let mut sel = Selector::new(AxisSelector::Element(-2), AxisSelector::All);
    let without_row2 = get_submatrix(&m, &mut sel)?;
    println!(
        "M[-2, ] ({} columns named {:?}):\n{without_row2}",
        without_row2.cols(),
        without_row2.col_names().unwrap_or(&[])
    );

    // Open range: rows 3 to the end of the axis
    let mut sel = Selector::new(
        AxisSelector::Range(3, AxisSelector::TO_END),
        AxisSelector::All,
    );
    let tail = get_submatrix(&m, &mut sel)?;
    println!("M[3:end, ]:\n{tail}");

    // Replace a block in place
    let patch = Matrix::new(vec![-1.0, -2.0, -3.0, -4.0], 2, 2)?;
    let mut sel = Selector::new(AxisSelector::Range(1, 2), AxisSelector::Range(1, 2));
    replace_submatrix(&mut m, &mut sel, &patch)?;
    println!("After M[1:2, 1:2] = patch:\n{m}");

    // Zero the diagonal
    assign_scalar(&mut m, &mut Selector::diagonal(), 0.0)?;
    println!("After zeroing the diagonal:\n{m}");

    Ok(())
}
