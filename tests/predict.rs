/*! End-to-end prediction pipeline tests.

Build a tiny gold dataset and a matching decoder dump on disk, run the
pipeline, and check the merged output line by line.
!*/
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use serde_json::{json, Value};

use respan::error::Error;
use respan::model::DecodedDocument;
use respan::pipeline::Prediction;

fn write_lines(dst: &Path, lines: &[Value]) {
    let mut f = File::create(dst).unwrap();
    for line in lines {
        writeln!(f, "{}", serde_json::to_string(line).unwrap()).unwrap();
    }
}

fn read_lines(src: &Path) -> Vec<Value> {
    let f = BufReader::new(File::open(src).unwrap());
    f.lines()
        .map(|l| serde_json::from_str(&l.unwrap()).unwrap())
        .collect()
}

fn gold_doc(doc_key: &str) -> Value {
    json!({
        "doc_key": doc_key,
        "sentences": [["the", "model", "works"], ["it", "does"]],
        "ner": [[], []],
        "dataset": "scierc"
    })
}

fn decoded_doc(doc_key: &str) -> Value {
    json!({
        "metadata": [
            {"doc_key": doc_key, "sentence_length": 3},
            {"doc_key": doc_key, "sentence_length": 2}
        ],
        "ner": [[[0, 1, "A"]], [[0, 0, "B"]]],
        "relation": [[], [[0, 0, 1, 1, "USES"]]],
        "coref": [[[[0, 1], [3, 4]]]],
        "events": [
            {
                "triggers": {"1": "E"},
                "arguments": [{"trigger": 1, "span": [0, 0], "role": "ARG", "score": 0.5}]
            },
            {"triggers": {}, "arguments": []}
        ],
        "scores": {"ner_scores": [[0.1, 0.9]]}
    })
}

#[test_log::test]
fn merges_every_task_and_strips_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let gold = dir.path().join("gold.jsonl");
    let archive = dir.path().join("archive.jsonl");
    let output = dir.path().join("out.jsonl");

    write_lines(&gold, &[gold_doc("d1"), gold_doc("d2")]);
    write_lines(&archive, &[decoded_doc("d1"), decoded_doc("d2")]);

    Prediction::new(archive, gold, output.clone(), -1, None)
        .run()
        .unwrap();

    let results = read_lines(&output);
    assert_eq!(results.len(), 2);

    let first = results[0].as_object().unwrap();
    assert_eq!(first.get("doc_key"), Some(&json!("d1")));
    assert!(first.get("dataset").is_none());
    assert_eq!(
        first.get("predicted_ner"),
        Some(&json!([[[0, 1, "A"]], [[3, 3, "B"]]]))
    );
    assert_eq!(
        first.get("predicted_relations"),
        Some(&json!([[], [[3, 3, 4, 4, "USES"]]]))
    );
    assert_eq!(
        first.get("predicted_clusters"),
        Some(&json!([[[0, 1], [3, 4]]]))
    );
    assert_eq!(
        first.get("predicted_events"),
        Some(&json!([[[[1, "E"], [0, 0, "ARG", 0.5]]], []]))
    );
    // Gold fields survive untouched.
    assert_eq!(first.get("ner"), Some(&json!([[], []])));
    assert_eq!(results[1]["doc_key"], json!("d2"));
}

#[test_log::test]
fn dumps_scores_when_requested() {
    let dir = tempfile::tempdir().unwrap();
    let gold = dir.path().join("gold.jsonl");
    let archive = dir.path().join("archive.jsonl");
    let output = dir.path().join("out.jsonl");
    // Deliberately absent, the pipeline creates it.
    let score_dir = dir.path().join("scores");

    write_lines(&gold, &[gold_doc("d1")]);
    write_lines(&archive, &[decoded_doc("d1")]);

    Prediction::new(archive, gold, output, -1, Some(score_dir.clone()))
        .run()
        .unwrap();

    let dumped: Value =
        serde_json::from_reader(File::open(score_dir.join("d1.json")).unwrap()).unwrap();
    assert_eq!(dumped, json!({"ner_scores": [[0.1, 0.9]]}));
}

#[test]
fn in_memory_service_drives_the_pipeline() {
    // The driver only depends on the decoded-document stream, so a backend
    // that never touches disk slots straight in.
    let dir = tempfile::tempdir().unwrap();
    let gold = dir.path().join("gold.jsonl");
    let output = dir.path().join("out.jsonl");
    write_lines(&gold, &[gold_doc("d1")]);

    let decoded: DecodedDocument = serde_json::from_value(decoded_doc("d1")).unwrap();
    let service = vec![Ok(decoded)].into_iter();

    // The archive path is unused when the stream is supplied directly.
    Prediction::new(dir.path().join("unused"), gold, output.clone(), -1, None)
        .run_with(service)
        .unwrap();

    let results = read_lines(&output);
    assert_eq!(results.len(), 1);
    assert_eq!(
        results[0].get("predicted_ner"),
        Some(&json!([[[0, 1, "A"]], [[3, 3, "B"]]]))
    );
}

#[test]
fn doc_key_mismatch_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let gold = dir.path().join("gold.jsonl");
    let archive = dir.path().join("archive.jsonl");
    let output = dir.path().join("out.jsonl");

    write_lines(&gold, &[gold_doc("d1")]);
    write_lines(&archive, &[decoded_doc("other")]);

    let err = Prediction::new(archive, gold, output, -1, None)
        .run()
        .unwrap_err();
    assert!(matches!(err, Error::DocKeyMismatch { .. }));
}

#[test]
fn uneven_streams_abort() {
    let dir = tempfile::tempdir().unwrap();
    let gold = dir.path().join("gold.jsonl");
    let archive = dir.path().join("archive.jsonl");
    let output = dir.path().join("out.jsonl");

    write_lines(&gold, &[gold_doc("d1"), gold_doc("d2")]);
    write_lines(&archive, &[decoded_doc("d1")]);

    let err = Prediction::new(archive, gold, output, -1, None)
        .run()
        .unwrap_err();
    assert!(matches!(
        err,
        Error::StreamDesync {
            consumed: 1,
            exhausted: "model"
        }
    ));
}

#[test]
fn rerunning_on_own_output_keeps_coordinates() {
    // Offsets apply once: feeding the merged output back in as gold, with a
    // dump carrying no task predictions, must not shift anything.
    let dir = tempfile::tempdir().unwrap();
    let gold = dir.path().join("gold.jsonl");
    let archive = dir.path().join("archive.jsonl");
    let first_out = dir.path().join("out1.jsonl");
    let second_out = dir.path().join("out2.jsonl");

    write_lines(&gold, &[gold_doc("d1")]);
    write_lines(&archive, &[decoded_doc("d1")]);
    Prediction::new(archive, gold, first_out.clone(), -1, None)
        .run()
        .unwrap();

    let empty_dump = json!({
        "metadata": [
            {"doc_key": "d1", "sentence_length": 3},
            {"doc_key": "d1", "sentence_length": 2}
        ]
    });
    let archive2 = dir.path().join("archive2.jsonl");
    write_lines(&archive2, &[empty_dump]);
    Prediction::new(archive2, first_out.clone(), second_out.clone(), -1, None)
        .run()
        .unwrap();

    assert_eq!(read_lines(&first_out), read_lines(&second_out));
}

#[test]
fn missing_input_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let err = Prediction::new(
        dir.path().join("nope.jsonl"),
        dir.path().join("nope2.jsonl"),
        dir.path().join("out.jsonl"),
        -1,
        None,
    )
    .run()
    .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
