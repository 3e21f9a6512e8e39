use duke_tables_core::{Axis, AxisKind, Cell, Decimal, LabelTuple, Table};
use duke_tables_latex::{
    render, sparsify, FormatSpec, HeaderFormatter, MissingDisplay, RenderContext, RenderError,
    RenderOptions,
};
use pretty_assertions::assert_eq;

fn convergence_table() -> Table {
    let index = Axis::new(
        AxisKind::Index,
        vec!["model".into(), "h".into()],
        vec![
            LabelTuple::from(["BC", "0.5"]),
            LabelTuple::from(["BC", "0.25"]),
            LabelTuple::from(["VG", "0.5"]),
        ],
    )
    .unwrap();
    let columns = Axis::from_labels(
        AxisKind::Columns,
        vec![
            LabelTuple::from(["S", "L1"]),
            LabelTuple::from(["S", "EOC 1"]),
        ],
    )
    .unwrap();
    let cells = vec![
        vec![Cell::from(Decimal::new(15, 4)), Cell::Missing],
        vec![Cell::from(Decimal::new(4, 4)), Cell::from(Decimal::new(1907, 3))],
        vec![Cell::from(Decimal::new(21, 3)), Cell::Missing],
    ];
    Table::new(index, columns, cells).unwrap()
}

#[test]
fn test_render_floating_table() {
    let mut headers = HeaderFormatter::new();
    headers.insert("EOC 1", "$ eoc_{1} $");

    let options = RenderOptions::default()
        .with_headers(headers)
        .with_format(FormatSpec::default().with_missing(MissingDisplay::Hidden))
        .with_template("table");

    let tex = render(&convergence_table(), &options).unwrap();

    let expected = [
        r"\begin{table}",
        r"\centering",
        r"\begin{tabular}{llrr}",
        r"\toprule",
        r" &  & \multicolumn{2}{c}{$ S $} \\",
        r"\cmidrule(lr){3-4}",
        r"model & h & $ L1 $ & $ eoc_{1} $ \\",
        r"\midrule",
        r"\multirow{2}{*}{BC} & 0.5 & \np{1.50e-3} &  \\",
        r" & 0.25 & \np{4.00e-4} & \np{1.91} \\",
        r"\midrule",
        r"VG & 0.5 & \np{2.10e-2} &  \\",
        r"\bottomrule",
        r"\end{tabular}",
        r"\end{table}",
        "",
    ]
    .join("\n");

    assert_eq!(tex, expected);
}

#[test]
fn test_column_override_and_hooks() {
    let options = RenderOptions::default()
        .with_column_format("EOC 1", FormatSpec::default().with_digits(1));
    let ctx = RenderContext::new(&convergence_table(), &options);

    assert_eq!(ctx.cells[1], vec![r"\np{4.00e-4}", r"\np{1.9}"]);

    let hooks = options.hooks();
    assert_eq!(hooks.apply("header_fmt", "L1", &[]).unwrap(), "$ L1 $");
    assert!(matches!(
        hooks.apply("unknown", "L1", &[]),
        Err(RenderError::UnknownHook(_))
    ));
}

#[test]
fn test_unknown_template() {
    let options = RenderOptions::default().with_template("does-not-exist");
    let err = render(&convergence_table(), &options).unwrap_err();
    assert!(err.to_string().contains("does-not-exist"));
}

#[test]
fn test_header_first_level_spans() {
    let labels = vec![
        LabelTuple::from(["A", "x"]),
        LabelTuple::from(["A", "y"]),
        LabelTuple::from(["B", "x"]),
    ];
    let spans: Vec<usize> = sparsify(&labels, false)[0].iter().map(|s| s.span).collect();
    assert_eq!(spans, vec![2, 0, 1]);
}
