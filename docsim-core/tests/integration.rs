use std::fs;
use std::io::Write;
use std::process::Command;

use docsim_core::{EngineConfig, ReportFormat, SimilarityEngine, SimilarityReport, SynonymTable};

fn synonym_file(lines: &[&str]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file
}

/// Paraphrase with one exact-only difference stays strictly between 0 and 1
#[test]
fn test_paraphrase_partial_similarity() {
    let engine = SimilarityEngine::default();
    let score = engine.cosine_similarity("The quick brown fox", "A fast brown fox");
    assert!(score > 0.0 && score < 1.0);
}

/// Misspellings still align through fuzzy term equality
#[test]
fn test_misspellings_align() {
    let engine = SimilarityEngine::default();
    let exact = "The organisation reviewed the colour scheme";
    let typo = "The organization reviewed the color scheme";
    let score = engine.cosine_similarity(exact, typo);
    assert!((score - 1.0).abs() < 1e-9);

    let matched = engine.matching_tokens(exact, typo);
    assert!(matched.contains("organisation"));
    assert!(matched.contains("colour"));
}

/// Synonyms loaded from a file lift a score above the synonym-free baseline
#[test]
fn test_synonym_file_scenario() {
    let file = synonym_file(&["big,large,huge"]);
    let config = EngineConfig {
        synonyms_path: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    let with = SimilarityEngine::new(config).unwrap();
    let without = SimilarityEngine::with_synonyms(SynonymTable::new());

    let boosted = with.cosine_similarity("a big house", "a huge house");
    let baseline = without.cosine_similarity("a big house", "a huge house");
    assert!(boosted > baseline);
}

/// Matched tokens never leave the first document's vocabulary
#[test]
fn test_matched_tokens_subset_of_first_document() {
    let engine = SimilarityEngine::with_synonyms(SynonymTable::from_lines(["start, begin"]));
    let text1 = "We start the analysis of the documents today";
    let text2 = "They begin analysing documented results";

    let tokens1 = engine.tokenize(text1);
    for token in engine.matching_tokens(text1, text2) {
        assert!(tokens1.contains(&token), "{token} not in first document");
    }
}

/// Engine can be shared across threads
#[test]
fn test_concurrent_comparisons() {
    use std::sync::Arc;
    use std::thread;

    let engine = Arc::new(SimilarityEngine::with_synonyms(SynonymTable::from_lines([
        "big,large,huge",
    ])));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || engine.cosine_similarity("a big house", "a huge house"))
        })
        .collect();

    for handle in handles {
        let score = handle.join().unwrap();
        assert!((score - 1.0).abs() < 1e-9);
    }
}

/// Report round-trips through the JSON renderer
#[test]
fn test_report_json() {
    let engine = SimilarityEngine::default();
    let report = SimilarityReport::compute(&engine, "cat", "cat");
    assert_eq!(report.cosine, 1.0);
    assert_eq!(report.hybrid, 1.0);

    let json = report.render(ReportFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["cosine"], 1.0);
    assert_eq!(value["best_matches"][0]["best"]["score"], 1.0);
}

/// End-to-end run of the binary writing a text report to a file
#[test]
fn test_cli_writes_report() {
    let dir = tempfile::tempdir().unwrap();
    let doc1 = dir.path().join("doc1.txt");
    let doc2 = dir.path().join("doc2.txt");
    let out = dir.path().join("report.txt");
    fs::write(&doc1, "a big house").unwrap();
    fs::write(&doc2, "a huge house").unwrap();
    let synonyms = synonym_file(&["big, large, huge"]);

    let status = Command::new(env!("CARGO_BIN_EXE_docsim"))
        .arg(&doc1)
        .arg(&doc2)
        .arg(&out)
        .env("DOCSIM_SYNONYMS", synonyms.path())
        .env("DOCSIM_FORMAT", "text")
        .status()
        .unwrap();
    assert!(status.success());

    let report = fs::read_to_string(&out).unwrap();
    assert!(report.starts_with("Cosine Similarity: 100.00%"));
    assert!(report.contains("--- Text 2 ---\na huge house"));
}

/// Empty documents and bad arguments exit with the input-error code
#[test]
fn test_cli_rejects_empty_document() {
    let dir = tempfile::tempdir().unwrap();
    let doc1 = dir.path().join("doc1.txt");
    let doc2 = dir.path().join("doc2.txt");
    fs::write(&doc1, "some text").unwrap();
    fs::write(&doc2, "   \n").unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_docsim"))
        .arg(&doc1)
        .arg(&doc2)
        .env("DOCSIM_SYNONYMS", dir.path().join("none.txt"))
        .status()
        .unwrap();
    assert_eq!(status.code(), Some(2));

    let status = Command::new(env!("CARGO_BIN_EXE_docsim"))
        .arg(&doc1)
        .status()
        .unwrap();
    assert_eq!(status.code(), Some(2));
}

/// Non-UTF-8 documents fail as a tokenization error, not an IO error
#[test]
fn test_cli_rejects_invalid_utf8() {
    let dir = tempfile::tempdir().unwrap();
    let doc1 = dir.path().join("doc1.txt");
    let doc2 = dir.path().join("doc2.bin");
    fs::write(&doc1, "some text").unwrap();
    fs::write(&doc2, [0x66u8, 0x6f, 0xff, 0x6f]).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_docsim"))
        .arg(&doc1)
        .arg(&doc2)
        .env("DOCSIM_SYNONYMS", dir.path().join("none.txt"))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("tokenization failed"));
}
