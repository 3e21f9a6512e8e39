use std::fs;
use std::path::PathBuf;

use duke_tables::{Error, JobOptions, RenderOptions, TableJob};
use pretty_assertions::assert_eq;

const EOC: &str = "\
model\th\tL1\tL2
BC\t0.5\t0.0015\t#DIV/0!
\t0.25\t0.0004\t0.002

model\th\tEOC\t
BC\t0.5\t1.9\t
BC\t0.25\tErr:502\t
";

fn options(output_dir: PathBuf) -> JobOptions {
    let mut options = JobOptions {
        output_dir: Some(output_dir),
        emit_context: true,
        ..Default::default()
    };
    options.ingest.index_columns = 2;
    options
}

#[test]
fn test_run_writes_tex_and_context() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("eoc.tsv");
    fs::write(&input, EOC).unwrap();

    let out_dir = dir.path().join("out");
    fs::create_dir(&out_dir).unwrap();

    let output = TableJob::new(options(out_dir.clone())).run(&input).unwrap();

    assert_eq!(output.tex, out_dir.join("eoc.tex"));
    assert_eq!(output.context, Some(out_dir.join("eoc.json")));
    assert_eq!(output.tables, 2);

    let tex = fs::read_to_string(&output.tex).unwrap();
    let expected = [
        r"\begin{tabular}{llrrr}",
        r"\toprule",
        r"model & h & $ L1 $ & $ L2 $ & $ EOC $ \\",
        r"\midrule",
        r"\multirow{2}{*}{BC} & 0.5 & \np{1.50e-3} & NaN & \np{1.90} \\",
        r" & 0.25 & \np{4.00e-4} & \np{2.00e-3} & NaN \\",
        r"\bottomrule",
        r"\end{tabular}",
        "",
    ]
    .join("\n");
    assert_eq!(tex, expected);

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out_dir.join("eoc.json")).unwrap()).unwrap();
    assert_eq!(json["column_spec"], "llrrr");
    assert_eq!(json["index_names"][1], "h");
}

#[test]
fn test_run_with_named_template_directory() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("eoc.csv");
    fs::write(&input, EOC).unwrap();
    fs::write(dir.path().join("wrap.tex"), "% generated\n{{table}}\n").unwrap();

    let mut options = options(dir.path().to_path_buf());
    options.emit_context = false;
    options.render = RenderOptions {
        template: "wrap".to_string(),
        template_dirs: vec![dir.path().to_path_buf()],
        ..Default::default()
    };

    let output = TableJob::new(options).run(&input).unwrap();
    assert_eq!(output.context, None);

    let tex = fs::read_to_string(output.tex).unwrap();
    assert!(tex.starts_with("% generated\n\\begin{tabular}"));
}

#[test]
fn test_missing_input_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let job = TableJob::new(options(dir.path().to_path_buf()));

    let err = job.run(dir.path().join("absent.tsv")).unwrap_err();
    assert!(matches!(err, Error::Csv(_)));
}

#[cfg(unix)]
#[test]
fn test_non_text_input_goes_through_converter() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();

    // Stand-in converter: copies the input to the path given with -o
    let script = dir.path().join("fake-unoconv");
    fs::write(&script, "#!/bin/sh\ncp \"$7\" \"$6\"\n").unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

    let input = dir.path().join("eoc.ods");
    fs::write(&input, EOC).unwrap();

    let mut options = options(dir.path().to_path_buf());
    options.converter.program = script;
    options.work_dir = Some(dir.path().join("work"));
    fs::create_dir(dir.path().join("work")).unwrap();

    let output = TableJob::new(options).run(&input).unwrap();

    assert!(dir.path().join("work").join("eoc.csv").is_file());
    assert_eq!(output.tex, dir.path().join("eoc.tex"));
}
