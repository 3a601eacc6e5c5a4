mod common;

use common::{sample_source, CountingSource};
use mountain_query::{classify, evaluate, FieldCatalog, Grammar, QueryEngine};

#[test]
fn test_engine_reads_one_snapshot_per_line() {
    let engine = QueryEngine::new(CountingSource::new(sample_source())).unwrap();
    for query in [
        "Elevation > 8000",
        "Elevation > 4000 and Range == Himalayas",
        "K2 Elevation",
        "K2",
        "Range > Himalayas",
        "Nonexistent Peak",
        ">> nothing <<",
    ] {
        engine.source().reset();
        engine.render(query).unwrap();
        assert_eq!(engine.source().total(), 1, "{}", query);
    }
}

#[test]
fn test_evaluate_makes_a_single_fetch() {
    let catalog = FieldCatalog::mountains();
    let grammar = Grammar::new(&catalog).unwrap();
    let source = CountingSource::new(sample_source());
    let names = vec!["K2".to_string()];

    let lookup = classify("Elevation of K2", &names, &catalog, &grammar);
    evaluate(&lookup, &source, &catalog).unwrap();
    assert_eq!(source.fetch_one_calls.get(), 1);
    assert_eq!(source.fetch_all_calls.get(), 0);

    source.reset();
    let comparison = classify("Elevation > 8000", &names, &catalog, &grammar);
    evaluate(&comparison, &source, &catalog).unwrap();
    assert_eq!(source.fetch_all_calls.get(), 1);
    assert_eq!(source.fetch_one_calls.get(), 0);

    source.reset();
    let unsupported = classify("Range > Himalayas", &names, &catalog, &grammar);
    assert!(evaluate(&unsupported, &source, &catalog).is_err());
    assert_eq!(source.total(), 0);
}
