use async_trait::async_trait;
use idl_harvest::{
    open_program_ids, HarvestError, HarvestResult, Harvester, IdlDocument, IdlFetcher,
    OutputWriter, Pacer,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Mutex;

/// Fetcher backed by a fixed map that records every lookup
struct RecordingFetcher {
    idls: HashMap<String, Value>,
    calls: Mutex<Vec<String>>,
}

impl RecordingFetcher {
    fn new(idls: &[(&str, Value)]) -> Self {
        Self {
            idls: idls
                .iter()
                .map(|(id, idl)| (id.to_string(), idl.clone()))
                .collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl IdlFetcher for RecordingFetcher {
    async fn fetch_idl(&self, program_id: &str) -> HarvestResult<IdlDocument> {
        self.calls.lock().unwrap().push(program_id.to_string());
        self.idls
            .get(program_id)
            .cloned()
            .map(IdlDocument::new)
            .ok_or_else(|| HarvestError::IdlNotFound(program_id.to_string()))
    }
}

fn write_input(dir: &Path, contents: &str) -> std::path::PathBuf {
    let path = dir.join("programid.txt");
    fs::write(&path, contents).unwrap();
    path
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[tokio::test(start_paused = true)]
async fn found_and_missing_idls() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "ABC123\n\nDEF456\n");
    let fetcher = RecordingFetcher::new(&[("ABC123", json!({ "version": "0.1.0" }))]);
    let harvester = Harvester::new(fetcher, OutputWriter::new(dir.path()), Pacer::default());

    let report = harvester
        .run(open_program_ids(&input).unwrap())
        .await
        .unwrap();

    assert_eq!(harvester.fetcher().calls(), vec!["ABC123", "DEF456"]);

    let written = dir.path().join("ABC123_idl.json");
    assert_eq!(
        fs::read_to_string(&written).unwrap(),
        "{\n  \"version\": \"0.1.0\"\n}"
    );
    assert!(!dir.path().join("DEF456_idl.json").exists());

    assert_eq!(report.written.len(), 1);
    assert_eq!(report.written[0].path, written);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].program_id, "DEF456");
    assert!(report.failed[0].error.to_string().contains("DEF456"));
}

#[tokio::test(start_paused = true)]
async fn fetcher_sees_trimmed_ids_only() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "   \n  AAA  \r\n\t\nBBB\n\n\nCCC");
    let fetcher = RecordingFetcher::new(&[]);
    let harvester = Harvester::new(fetcher, OutputWriter::new(dir.path()), Pacer::from_millis(10));

    let report = harvester
        .run(open_program_ids(&input).unwrap())
        .await
        .unwrap();

    assert_eq!(harvester.fetcher().calls(), vec!["AAA", "BBB", "CCC"]);
    assert_eq!(report.attempted(), 3);
    assert!(report.written.is_empty());
}

#[tokio::test(start_paused = true)]
async fn written_files_match_fetched_documents() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "AAA\nBBB\n");
    let aaa = json!({
        "address": "AAA",
        "metadata": { "name": "alpha", "version": "1.2.3", "spec": "0.1.0" },
        "instructions": [{ "name": "init", "accounts": [], "args": [] }]
    });
    let bbb = json!({ "version": "0.0.1", "name": "beta", "instructions": [] });
    let fetcher = RecordingFetcher::new(&[("AAA", aaa.clone()), ("BBB", bbb.clone())]);
    let harvester = Harvester::new(fetcher, OutputWriter::new(dir.path()), Pacer::default());

    let report = harvester
        .run(open_program_ids(&input).unwrap())
        .await
        .unwrap();

    assert!(report.failed.is_empty());
    assert_eq!(read_json(&dir.path().join("AAA_idl.json")), aaa);
    assert_eq!(read_json(&dir.path().join("BBB_idl.json")), bbb);
    assert_eq!(report.written[0].summary.name.as_deref(), Some("alpha"));
    assert_eq!(report.written[1].summary.name.as_deref(), Some("beta"));
}

#[test]
fn missing_input_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();

    let result = open_program_ids(dir.path().join("programid.txt"));

    assert!(matches!(result, Err(HarvestError::InputError { .. })));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
