use map_departure::{AugmentEngine, CliConfig, DeparturePipeline, LocalStorage};
use tempfile::TempDir;

fn config_for(dir: &TempDir) -> CliConfig {
    CliConfig {
        input: "map systems.txt".to_string(),
        output_prefix: "out".to_string(),
        dir: dir.path().to_str().unwrap().to_string(),
        verbose: false,
    }
}

async fn run_in(dir: &TempDir) -> map_departure::Result<String> {
    let config = config_for(dir);
    let storage = LocalStorage::new(config.dir.clone());
    let pipeline = DeparturePipeline::new(storage, config);
    let engine = AugmentEngine::new(pipeline);
    engine.run().await
}

#[tokio::test]
async fn test_end_to_end_two_record_map() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("map systems.txt"),
        "system Sol\n\
         \tarrival 300.00\n\
         \tobject Planet1\n\
         system Alpha\n\
         \tobject Station1\n",
    )
    .unwrap();

    let output_name = run_in(&temp_dir).await.unwrap();
    assert_eq!(output_name, "outmap systems.txt");

    let output = std::fs::read_to_string(temp_dir.path().join("outmap systems.txt")).unwrap();
    assert_eq!(
        output,
        "system Sol\n\
         \tarrival 300.00\n\
         \tdeparture 225.00\n\
         \tobject Planet1\n\
         system Alpha\n\
         \tdeparture 100.00\n\
         \tobject Station1\n"
    );
}

#[tokio::test]
async fn test_end_to_end_idempotent_rerun() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("map systems.txt"),
        "system Sol\n\tarrival 200.00\n\tobject Planet1\n",
    )
    .unwrap();

    run_in(&temp_dir).await.unwrap();
    let first = std::fs::read(temp_dir.path().join("outmap systems.txt")).unwrap();

    // Second run over the unchanged input overwrites with identical bytes
    run_in(&temp_dir).await.unwrap();
    let second = std::fs::read(temp_dir.path().join("outmap systems.txt")).unwrap();

    assert_eq!(first, second);
    assert!(String::from_utf8(first)
        .unwrap()
        .contains("\tdeparture 150.00\n"));
}

#[tokio::test]
async fn test_end_to_end_replaces_stale_departures() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("map systems.txt"),
        "system Sol\n\tarrival 400.00\n\tdeparture 1.00\n\tobject Planet1\n",
    )
    .unwrap();

    run_in(&temp_dir).await.unwrap();

    let output = std::fs::read_to_string(temp_dir.path().join("outmap systems.txt")).unwrap();
    assert_eq!(
        output,
        "system Sol\n\tarrival 400.00\n\tdeparture 300.00\n\tobject Planet1\n"
    );
}

#[tokio::test]
async fn test_end_to_end_empty_input_produces_empty_output() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("map systems.txt"), "").unwrap();

    run_in(&temp_dir).await.unwrap();

    let output = std::fs::read(temp_dir.path().join("outmap systems.txt")).unwrap();
    assert!(output.is_empty());
}

#[tokio::test]
async fn test_end_to_end_missing_input_fails_before_any_write() {
    let temp_dir = TempDir::new().unwrap();

    let result = run_in(&temp_dir).await;

    assert!(result.is_err());
    assert!(!temp_dir.path().join("outmap systems.txt").exists());
}

#[tokio::test]
async fn test_end_to_end_malformed_arrival_fails_before_any_write() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("map systems.txt"),
        "system Sol\n\tarrival twelve\n",
    )
    .unwrap();

    let result = run_in(&temp_dir).await;

    assert!(result.is_err());
    let message = result.unwrap_err().to_string();
    assert!(message.contains("line 2"), "got: {message}");
    assert!(!temp_dir.path().join("outmap systems.txt").exists());
}

#[tokio::test]
async fn test_end_to_end_custom_prefix() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("map systems.txt"),
        "system Sol\n\tarrival 160.00\n",
    )
    .unwrap();

    let mut config = config_for(&temp_dir);
    config.output_prefix = "augmented-".to_string();
    let storage = LocalStorage::new(config.dir.clone());
    let pipeline = DeparturePipeline::new(storage, config);
    let output_name = AugmentEngine::new(pipeline).run().await.unwrap();

    assert_eq!(output_name, "augmented-map systems.txt");
    let output =
        std::fs::read_to_string(temp_dir.path().join("augmented-map systems.txt")).unwrap();
    assert!(output.contains("\tdeparture 120.00\n"));
}
