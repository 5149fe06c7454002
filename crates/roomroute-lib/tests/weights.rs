use roomroute_lib::{Error, Weights, DEFAULT_COST};

#[test]
fn lookup_returns_the_configured_weight() {
    let weights =
        Weights::parse(["Stairs -> Hallway = 2", "Hallway -> Kitchen = 5"]).expect("parse");
    assert_eq!(weights.cost("Stairs", "Hallway").expect("entry"), 2);
    assert_eq!(weights.cost("Hallway", "Kitchen").expect("entry"), 5);
}

#[test]
fn uniform_weights_never_fail() {
    let weights = Weights::Uniform;
    assert_eq!(weights.cost("anything", "anywhere").expect("uniform"), DEFAULT_COST);
}

#[test]
fn empty_table_is_not_the_same_as_no_table() {
    let weights = Weights::parse(Vec::<&str>::new()).expect("empty input parses");
    assert_ne!(weights, Weights::Uniform);

    let error = weights.cost("Stairs", "Hallway").expect_err("no entries");
    assert!(matches!(
        error,
        Error::MissingWeight { source, destination }
            if source == "Stairs" && destination == "Hallway"
    ));
}

#[test]
fn duplicate_entries_keep_the_last_value() {
    let weights =
        Weights::parse(["A -> B = 2", "A -> B = 7"]).expect("parse");
    assert_eq!(weights.cost("A", "B").expect("entry"), 7);
}

#[test]
fn malformed_line_reports_the_offending_text() {
    let error = Weights::parse(["Stairs => Hallway = 2"]).expect_err("bad arrow");
    assert!(matches!(
        error,
        Error::MalformedWeightLine { line } if line == "Stairs => Hallway = 2"
    ));
}

#[test]
fn blank_lines_are_skipped() {
    let weights = Weights::parse(["", "A -> B = 1", "   "]).expect("parse");
    assert_eq!(weights.cost("A", "B").expect("entry"), 1);
}

#[test]
fn directions_are_not_symmetric() {
    let weights = Weights::parse(["A -> B = 1"]).expect("parse");
    assert!(weights.cost("B", "A").is_err());
}
